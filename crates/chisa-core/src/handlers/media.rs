//! Sticker conversion and link downloads, delegated to the converter and
//! downloader ports.

use std::sync::Arc;

use tracing::warn;

use crate::messages::{
    MSG_ERROR_DOWNLOAD, MSG_ERROR_UPLOAD, MSG_HELP_STICKER, MSG_HELP_TOIMG, MSG_WAIT,
};
use crate::messaging::MediaKind;
use crate::ports::{LinkDownloader, MediaConverter};
use crate::registry::{CommandContext, CommandHandler};
use crate::Result;

const CAPTION_LIMIT: usize = 200;

pub struct MediaCommands {
    converter: Arc<dyn MediaConverter>,
    downloader: Arc<dyn LinkDownloader>,
}

impl MediaCommands {
    pub fn new(converter: Arc<dyn MediaConverter>, downloader: Arc<dyn LinkDownloader>) -> Self {
        Self {
            converter,
            downloader,
        }
    }

    async fn sticker(&self, ctx: &CommandContext) -> Result<()> {
        let media = match &ctx.event.media {
            Some(m) if matches!(m.kind, MediaKind::Image | MediaKind::Video) => m,
            _ => return ctx.sink.send_text(&ctx.event.chat, MSG_HELP_STICKER).await,
        };

        let sticker = match self.converter.to_sticker(media).await {
            Ok(sticker) => sticker,
            Err(err) => {
                warn!(chat = %ctx.event.chat, error = %err, "sticker conversion failed");
                return ctx
                    .sink
                    .send_text(&ctx.event.chat, "❌ Gagal convert ke sticker.")
                    .await;
            }
        };

        if let Err(err) = ctx.sink.send_media(&ctx.event.chat, sticker).await {
            warn!(chat = %ctx.event.chat, error = %err, "sticker send failed");
            return ctx.sink.send_text(&ctx.event.chat, MSG_ERROR_UPLOAD).await;
        }
        Ok(())
    }

    async fn to_image(&self, ctx: &CommandContext) -> Result<()> {
        let media = match &ctx.event.media {
            Some(m) if m.kind == MediaKind::Sticker => m,
            _ => return ctx.sink.send_text(&ctx.event.chat, MSG_HELP_TOIMG).await,
        };

        let image = match self.converter.sticker_to_image(media).await {
            Ok(image) => image,
            Err(err) => {
                warn!(chat = %ctx.event.chat, error = %err, "sticker-to-image failed");
                return ctx
                    .sink
                    .send_text(&ctx.event.chat, "❌ Gagal convert sticker ke gambar.")
                    .await;
            }
        };

        if let Err(err) = ctx.sink.send_media(&ctx.event.chat, image).await {
            warn!(chat = %ctx.event.chat, error = %err, "image send failed");
            return ctx.sink.send_text(&ctx.event.chat, MSG_ERROR_UPLOAD).await;
        }
        Ok(())
    }

    /// Resends quoted view-once media as a normal message. View once
    /// carries only images and videos.
    async fn retrieve_view_once(&self, ctx: &CommandContext) -> Result<()> {
        let media = match &ctx.event.media {
            Some(m) if matches!(m.kind, MediaKind::Image | MediaKind::Video) => m.clone(),
            _ => {
                return ctx
                    .sink
                    .send_text(
                        &ctx.event.chat,
                        "⚠️ Reply pesan View Once (sekali lihat) dengan caption .showimg",
                    )
                    .await;
            }
        };

        if let Err(err) = ctx.sink.send_media(&ctx.event.chat, media).await {
            warn!(chat = %ctx.event.chat, error = %err, "view-once resend failed");
            return ctx
                .sink
                .send_text(&ctx.event.chat, "❌ Gagal mengirim ulang media.")
                .await;
        }
        Ok(())
    }

    async fn download_video(&self, ctx: &CommandContext) -> Result<()> {
        let Some(url) = ctx.command.args.first() else {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .dl <url>\nSupport: IG, TikTok, FB, YouTube, Twitter, dll.",
                )
                .await;
        };

        ctx.sink.send_text(&ctx.event.chat, MSG_WAIT).await?;

        let mut media = match self.downloader.fetch_video(url).await {
            Ok(media) => media,
            Err(err) => {
                warn!(%url, error = %err, "video download failed");
                return ctx.sink.send_text(&ctx.event.chat, MSG_ERROR_DOWNLOAD).await;
            }
        };
        media.caption = media.caption.map(|c| truncate_caption(&c));

        if let Err(err) = ctx.sink.send_media(&ctx.event.chat, media).await {
            warn!(chat = %ctx.event.chat, error = %err, "video send failed");
            return ctx.sink.send_text(&ctx.event.chat, MSG_ERROR_UPLOAD).await;
        }
        Ok(())
    }

    async fn download_audio(&self, ctx: &CommandContext) -> Result<()> {
        let Some(url) = ctx.command.args.first() else {
            return ctx
                .sink
                .send_text(&ctx.event.chat, "⚠️ Penggunaan: .mp3 <url>")
                .await;
        };

        ctx.sink
            .send_text(&ctx.event.chat, "⏳ Sedang mengambil audio...")
            .await?;

        let media = match self.downloader.fetch_audio(url).await {
            Ok(media) => media,
            Err(err) => {
                warn!(%url, error = %err, "audio download failed");
                return ctx
                    .sink
                    .send_text(&ctx.event.chat, "❌ Gagal mendownload audio.")
                    .await;
            }
        };

        if let Err(err) = ctx.sink.send_media(&ctx.event.chat, media).await {
            warn!(chat = %ctx.event.chat, error = %err, "audio send failed");
            return ctx.sink.send_text(&ctx.event.chat, "❌ Gagal mengirim audio.").await;
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CommandHandler for MediaCommands {
    async fn handle(&self, ctx: CommandContext) -> Result<()> {
        match ctx.command.name.as_str() {
            "sticker" | "s" => self.sticker(&ctx).await,
            "toimg" => self.to_image(&ctx).await,
            "show" | "showimg" | "rv" => self.retrieve_view_once(&ctx).await,
            "dl" | "tiktok" | "tt" | "ig" | "instagram" | "ytmp4" => {
                self.download_video(&ctx).await
            }
            "mp3" | "ytmp3" => self.download_audio(&ctx).await,
            _ => Ok(()),
        }
    }
}

fn truncate_caption(caption: &str) -> String {
    if caption.chars().count() <= CAPTION_LIMIT {
        return caption.to_string();
    }
    let cut: String = caption.chars().take(CAPTION_LIMIT - 3).collect();
    format!("{cut}...")
}
