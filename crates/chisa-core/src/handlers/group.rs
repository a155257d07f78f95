//! Group moderation: tag-all, warnings with auto-kick, kicks, and the
//! per-group tag toggle. Everything here is group-only and admin-gated.

use std::sync::Arc;

use tracing::warn;

use crate::domain::{ConvId, SenderId};
use crate::messages::{MSG_ONLY_ADMIN, MSG_ONLY_GROUP};
use crate::messaging::ReplySink;
use crate::ports::GroupDirectory;
use crate::registry::{CommandContext, CommandHandler};
use crate::store::{AutoTagStore, WarnStore};
use crate::Result;

const WARN_LIMIT: u32 = 3;

pub struct GroupCommands {
    warns: Arc<WarnStore>,
    autotag: Arc<AutoTagStore>,
    directory: Arc<dyn GroupDirectory>,
}

impl GroupCommands {
    pub fn new(
        warns: Arc<WarnStore>,
        autotag: Arc<AutoTagStore>,
        directory: Arc<dyn GroupDirectory>,
    ) -> Self {
        Self {
            warns,
            autotag,
            directory,
        }
    }

    /// Group-only + admin-only gate. Replies with the refusal and returns
    /// false when the caller may not proceed.
    async fn require_admin(&self, ctx: &CommandContext) -> Result<bool> {
        if !ctx.event.is_group {
            ctx.sink.send_text(&ctx.event.chat, MSG_ONLY_GROUP).await?;
            return Ok(false);
        }
        let is_admin = self
            .directory
            .is_admin(&ctx.event.chat, &ctx.event.sender)
            .await
            .unwrap_or(false);
        if !is_admin {
            ctx.sink.send_text(&ctx.event.chat, MSG_ONLY_ADMIN).await?;
            return Ok(false);
        }
        Ok(true)
    }

    async fn tag_all(&self, ctx: &CommandContext) -> Result<()> {
        if !self.require_admin(ctx).await? {
            return Ok(());
        }
        if self.autotag.is_disabled(&ctx.event.chat.0).await {
            return ctx
                .sink
                .send_text(&ctx.event.chat, "⚠️ Fitur tag dinonaktifkan di grup ini.")
                .await;
        }

        let members = match self.directory.members(&ctx.event.chat).await {
            Ok(members) => members,
            Err(err) => {
                warn!(chat = %ctx.event.chat, error = %err, "failed to list members");
                return Ok(());
            }
        };
        ctx.sink
            .send_text_with_mentions(&ctx.event.chat, "📢 *Tag All Members*", &members)
            .await
    }

    async fn toggle_autotag(&self, ctx: &CommandContext) -> Result<()> {
        if !self.require_admin(ctx).await? {
            return Ok(());
        }

        let text = match ctx.command.args.first().map(String::as_str) {
            Some("on") => {
                self.autotag.set_disabled(&ctx.event.chat.0, false).await;
                "✅ Fitur tag diaktifkan untuk grup ini."
            }
            Some("off") => {
                self.autotag.set_disabled(&ctx.event.chat.0, true).await;
                "✅ Fitur tag dinonaktifkan untuk grup ini."
            }
            _ => "⚠️ Penggunaan: .autotag on|off",
        };
        ctx.sink.send_text(&ctx.event.chat, text).await
    }

    async fn warn_member(&self, ctx: &CommandContext) -> Result<()> {
        if !self.require_admin(ctx).await? {
            return Ok(());
        }

        // Reply target wins over an explicit mention.
        let target = match ctx
            .event
            .quoted_sender
            .clone()
            .or_else(|| ctx.event.mentions.first().cloned())
        {
            Some(target) => target,
            None => {
                return ctx
                    .sink
                    .send_text(
                        &ctx.event.chat,
                        "⚠️ Reply pesan atau tag member yang ingin di-warn.\nContoh: .warn @member",
                    )
                    .await;
            }
        };

        let count = self
            .warns
            .add_warning(&ctx.event.chat.0, &target.0)
            .await;

        if count >= WARN_LIMIT {
            ctx.sink
                .send_text(
                    &ctx.event.chat,
                    &format!(
                        "⚠️ *PERINGATAN KE-{count} (FINAL)*\n@{target} otomatis di-kick dari grup."
                    ),
                )
                .await?;

            match self.directory.remove_member(&ctx.event.chat, &target).await {
                Ok(()) => {
                    self.warns.reset_warning(&ctx.event.chat.0, &target.0).await;
                    Ok(())
                }
                Err(err) => {
                    warn!(chat = %ctx.event.chat, target = %target, error = %err, "auto-kick failed");
                    ctx.sink
                        .send_text(
                            &ctx.event.chat,
                            "❌ Gagal meng-kick member. Pastikan bot adalah admin.",
                        )
                        .await
                }
            }
        } else {
            let text = format!(
                "⚠️ *PERINGATAN KE-{count}*\n\n@{target}, tolong ikuti aturan grup.\nPeringatan ke-{WARN_LIMIT} = Kick."
            );
            ctx.sink
                .send_text_with_mentions(&ctx.event.chat, &text, &[target])
                .await
        }
    }

    async fn reset_warn(&self, ctx: &CommandContext) -> Result<()> {
        if !self.require_admin(ctx).await? {
            return Ok(());
        }

        let target = match ctx
            .event
            .quoted_sender
            .clone()
            .or_else(|| ctx.event.mentions.first().cloned())
        {
            Some(target) => target,
            None => {
                return ctx
                    .sink
                    .send_text(
                        &ctx.event.chat,
                        "⚠️ Reply pesan atau tag member yang ingin direset.",
                    )
                    .await;
            }
        };

        self.warns.reset_warning(&ctx.event.chat.0, &target.0).await;
        let text = format!("✅ Peringatan untuk @{target} sudah direset.");
        ctx.sink
            .send_text_with_mentions(&ctx.event.chat, &text, &[target])
            .await
    }

    async fn kick(&self, ctx: &CommandContext) -> Result<()> {
        if !self.require_admin(ctx).await? {
            return Ok(());
        }

        // Mention target wins over a reply here.
        let target = match ctx
            .event
            .mentions
            .first()
            .cloned()
            .or_else(|| ctx.event.quoted_sender.clone())
        {
            Some(target) => target,
            None => {
                return ctx
                    .sink
                    .send_text(&ctx.event.chat, "⚠️ Tag atau reply user yang ingin di-kick.")
                    .await;
            }
        };

        match self.directory.remove_member(&ctx.event.chat, &target).await {
            Ok(()) => ctx.sink.send_text(&ctx.event.chat, "👋 Sayonara!").await,
            Err(err) => {
                warn!(chat = %ctx.event.chat, target = %target, error = %err, "kick failed");
                ctx.sink
                    .send_text(
                        &ctx.event.chat,
                        "❌ Gagal kick member. Pastikan bot adalah admin.",
                    )
                    .await
            }
        }
    }
}

#[async_trait::async_trait]
impl CommandHandler for GroupCommands {
    async fn handle(&self, ctx: CommandContext) -> Result<()> {
        match ctx.command.name.as_str() {
            "tagall" => self.tag_all(&ctx).await,
            "autotag" => self.toggle_autotag(&ctx).await,
            "warn" => self.warn_member(&ctx).await,
            "resetwarn" => self.reset_warn(&ctx).await,
            "kick" | "usir" => self.kick(&ctx).await,
            _ => Ok(()),
        }
    }
}

/// Announces membership changes, one mention-tagged notice per member.
/// Adapters call this from their group-event path.
pub async fn announce_membership(
    sink: &Arc<dyn ReplySink>,
    chat: &ConvId,
    joined: &[SenderId],
    left: &[SenderId],
) -> Result<()> {
    for user in joined {
        sink.send_text_with_mentions(chat, &welcome_text(user), std::slice::from_ref(user))
            .await?;
    }
    for user in left {
        sink.send_text_with_mentions(chat, &goodbye_text(user), std::slice::from_ref(user))
            .await?;
    }
    Ok(())
}

fn welcome_text(user: &SenderId) -> String {
    format!("👋 Halo @{user}!\nSelamat datang di grup! 🎉\n\nSemoga betah ya~ 😊")
}

fn goodbye_text(user: &SenderId) -> String {
    format!("👋 Sampai jumpa @{user}!\nTerima kasih sudah meramaikan grup. 👋")
}
