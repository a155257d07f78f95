//! Narrow traits for the out-of-scope external collaborators.
//!
//! Media transcoding, link downloading, group metadata, and URL shortening
//! all happen outside this crate; handlers only format the requests and the
//! replies.

use crate::{
    domain::{ConvId, SenderId},
    messaging::types::MediaPayload,
    Result,
};

/// Sticker/image conversion (ffmpeg-style tool behind an adapter).
#[async_trait::async_trait]
pub trait MediaConverter: Send + Sync {
    /// Convert an image/video payload into a sticker payload.
    async fn to_sticker(&self, media: &MediaPayload) -> Result<MediaPayload>;

    /// Convert a sticker payload back into a plain image.
    async fn sticker_to_image(&self, media: &MediaPayload) -> Result<MediaPayload>;
}

/// Social-media link downloader.
#[async_trait::async_trait]
pub trait LinkDownloader: Send + Sync {
    async fn fetch_video(&self, url: &str) -> Result<MediaPayload>;
    async fn fetch_audio(&self, url: &str) -> Result<MediaPayload>;
}

/// Group metadata and membership operations.
#[async_trait::async_trait]
pub trait GroupDirectory: Send + Sync {
    async fn members(&self, chat: &ConvId) -> Result<Vec<SenderId>>;
    async fn is_admin(&self, chat: &ConvId, user: &SenderId) -> Result<bool>;
    async fn remove_member(&self, chat: &ConvId, user: &SenderId) -> Result<()>;
}

/// URL-shortening service.
#[async_trait::async_trait]
pub trait LinkShortener: Send + Sync {
    async fn shorten(&self, url: &str) -> Result<String>;
}
