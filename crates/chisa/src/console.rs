//! Console adapter: a line-based stand-in for a real messaging network.
//!
//! Replies print to stdout; collaborators that need external tooling
//! (ffmpeg, yt-dlp, a shortener API) report themselves unavailable.

use std::sync::Arc;

use async_trait::async_trait;

use chisa_core::domain::{ConvId, SenderId};
use chisa_core::messaging::{MediaPayload, ReplySink};
use chisa_core::ports::{GroupDirectory, LinkDownloader, LinkShortener, MediaConverter};
use chisa_core::{Error, Result};

/// Chat id used for everything typed on stdin.
pub const CONSOLE_CHAT: &str = "console";
/// Sender id for the operator at the keyboard.
pub const CONSOLE_SENDER: &str = "operator";

pub struct ConsoleSink;

#[async_trait]
impl ReplySink for ConsoleSink {
    async fn send_text(&self, chat: &ConvId, text: &str) -> Result<()> {
        println!("[{chat}] {text}");
        Ok(())
    }

    async fn send_text_with_mentions(
        &self,
        chat: &ConvId,
        text: &str,
        mentions: &[SenderId],
    ) -> Result<()> {
        let tagged: Vec<String> = mentions.iter().map(|m| m.0.clone()).collect();
        println!("[{chat}] {text}  (mentions: {})", tagged.join(", "));
        Ok(())
    }

    async fn send_media(&self, chat: &ConvId, media: MediaPayload) -> Result<()> {
        println!(
            "[{chat}] <media {:?} {} bytes, {}>",
            media.kind,
            media.bytes.len(),
            media.mime_type
        );
        Ok(())
    }
}

/// One-member group where the operator is admin. Kicks only print.
pub struct ConsoleDirectory;

#[async_trait]
impl GroupDirectory for ConsoleDirectory {
    async fn members(&self, _chat: &ConvId) -> Result<Vec<SenderId>> {
        Ok(vec![SenderId(CONSOLE_SENDER.to_string())])
    }

    async fn is_admin(&self, _chat: &ConvId, user: &SenderId) -> Result<bool> {
        Ok(user.0 == CONSOLE_SENDER)
    }

    async fn remove_member(&self, chat: &ConvId, user: &SenderId) -> Result<()> {
        println!("[{chat}] <would remove {user}>");
        Ok(())
    }
}

pub struct OfflineConverter;

#[async_trait]
impl MediaConverter for OfflineConverter {
    async fn to_sticker(&self, _media: &MediaPayload) -> Result<MediaPayload> {
        Err(Error::External(
            "media converter unavailable in console mode".to_string(),
        ))
    }

    async fn sticker_to_image(&self, _media: &MediaPayload) -> Result<MediaPayload> {
        Err(Error::External(
            "media converter unavailable in console mode".to_string(),
        ))
    }
}

pub struct OfflineDownloader;

#[async_trait]
impl LinkDownloader for OfflineDownloader {
    async fn fetch_video(&self, _url: &str) -> Result<MediaPayload> {
        Err(Error::External(
            "downloader unavailable in console mode".to_string(),
        ))
    }

    async fn fetch_audio(&self, _url: &str) -> Result<MediaPayload> {
        Err(Error::External(
            "downloader unavailable in console mode".to_string(),
        ))
    }
}

pub struct OfflineShortener;

#[async_trait]
impl LinkShortener for OfflineShortener {
    async fn shorten(&self, _url: &str) -> Result<String> {
        Err(Error::External(
            "shortener unavailable in console mode".to_string(),
        ))
    }
}

pub fn sink() -> Arc<dyn ReplySink> {
    Arc::new(ConsoleSink)
}
