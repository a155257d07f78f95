//! Utility commands: random pick and link shortening.

use std::sync::Arc;

use rand::Rng;
use tracing::warn;

use crate::ports::LinkShortener;
use crate::registry::{CommandContext, CommandHandler};
use crate::Result;

pub struct UtilityCommands {
    shortener: Arc<dyn LinkShortener>,
}

impl UtilityCommands {
    pub fn new(shortener: Arc<dyn LinkShortener>) -> Self {
        Self { shortener }
    }

    async fn pick(&self, ctx: &CommandContext) -> Result<()> {
        let raw = ctx.command.raw_args.trim();
        if raw.is_empty() {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Format: .pick opsi1 | opsi2 | opsi3\nContoh: .pick Makan | Tidur | Ngoding",
                )
                .await;
        }

        let options = parse_options(raw);
        if options.len() < 2 {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Minimal 2 pilihan, pisahkan dengan |\nContoh: .pick Makan | Tidur | Ngoding",
                )
                .await;
        }

        let chosen = &options[rand::thread_rng().gen_range(0..options.len())];
        let text = format!(
            "🎲 *Random Pick!*\n\nDari {} pilihan:\n_{}_\n\n🎯 Hasilnya: *{}*",
            options.len(),
            options.join(", "),
            chosen,
        );
        ctx.sink.send_text(&ctx.event.chat, &text).await
    }

    async fn shorten(&self, ctx: &CommandContext) -> Result<()> {
        let Some(url) = ctx.command.args.first() else {
            return ctx
                .sink
                .send_text(
                    &ctx.event.chat,
                    "⚠️ Penggunaan: .short <url>\nContoh: .short https://google.com",
                )
                .await;
        };

        let url = if url.starts_with("http") {
            url.clone()
        } else {
            format!("https://{url}")
        };

        ctx.sink
            .send_text(&ctx.event.chat, "⏳ Sedang memendekkan link...")
            .await?;

        match self.shortener.shorten(&url).await {
            Ok(short) => {
                ctx.sink
                    .send_text(
                        &ctx.event.chat,
                        &format!("✅ Link berhasil dipendekkan:\n{short}"),
                    )
                    .await
            }
            Err(err) => {
                warn!(%url, error = %err, "shorten failed");
                ctx.sink
                    .send_text(&ctx.event.chat, "❌ Gagal memendekkan link.")
                    .await
            }
        }
    }
}

#[async_trait::async_trait]
impl CommandHandler for UtilityCommands {
    async fn handle(&self, ctx: CommandContext) -> Result<()> {
        match ctx.command.name.as_str() {
            "pick" | "pilih" => self.pick(&ctx).await,
            "short" | "shorten" | "pendek" => self.shorten(&ctx).await,
            _ => Ok(()),
        }
    }
}

/// Splits a `|`-separated option list, dropping empty entries.
fn parse_options(raw: &str) -> Vec<String> {
    raw.split('|')
        .map(str::trim)
        .filter(|opt| !opt.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConvId, MessageEvent, SenderId};
    use crate::messaging::{MediaPayload, ReplySink};
    use crate::router::CommandParser;
    use async_trait::async_trait;
    use tokio::sync::Mutex;

    struct RecordingSink {
        sent: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn send_text(&self, _chat: &ConvId, text: &str) -> Result<()> {
            self.sent.lock().await.push(text.to_string());
            Ok(())
        }

        async fn send_text_with_mentions(
            &self,
            _chat: &ConvId,
            text: &str,
            _mentions: &[SenderId],
        ) -> Result<()> {
            self.sent.lock().await.push(text.to_string());
            Ok(())
        }

        async fn send_media(&self, _chat: &ConvId, _media: MediaPayload) -> Result<()> {
            Ok(())
        }
    }

    struct EchoShortener;

    #[async_trait]
    impl LinkShortener for EchoShortener {
        async fn shorten(&self, url: &str) -> Result<String> {
            Ok(format!("https://tiny.example/{}", url.len()))
        }
    }

    fn ctx(sink: Arc<RecordingSink>, text: &str) -> CommandContext {
        let event = MessageEvent::text("u1", "room", text);
        let command = CommandParser::new(vec![".".to_string()]).parse(text).unwrap();
        CommandContext {
            event,
            command,
            sink,
        }
    }

    fn commands() -> UtilityCommands {
        UtilityCommands::new(Arc::new(EchoShortener))
    }

    #[test]
    fn options_split_on_pipe_and_drop_blanks() {
        assert_eq!(
            parse_options("Makan | Tidur |  | Ngoding"),
            vec!["Makan", "Tidur", "Ngoding"]
        );
    }

    #[tokio::test]
    async fn pick_requires_two_options() {
        let sink = RecordingSink::new();
        commands()
            .handle(ctx(sink.clone(), ".pick cuma-satu"))
            .await
            .unwrap();

        assert!(sink.sent.lock().await[0].contains("Minimal 2 pilihan"));
    }

    #[tokio::test]
    async fn pick_announces_one_of_the_options() {
        let sink = RecordingSink::new();
        commands()
            .handle(ctx(sink.clone(), ".pick Makan | Tidur"))
            .await
            .unwrap();

        let sent = sink.sent.lock().await;
        assert!(sent[0].contains("Dari 2 pilihan"));
        assert!(sent[0].contains("*Makan*") || sent[0].contains("*Tidur*"));
    }

    #[tokio::test]
    async fn shorten_prefixes_bare_domains() {
        let sink = RecordingSink::new();
        commands()
            .handle(ctx(sink.clone(), ".short google.com"))
            .await
            .unwrap();

        let sent = sink.sent.lock().await;
        assert!(sent[0].contains("Sedang memendekkan"));
        // "https://google.com" is 18 characters.
        assert!(sent[1].contains("https://tiny.example/18"));
    }
}
