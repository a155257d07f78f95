//! The command list.

use crate::messages::MSG_MENU;
use crate::registry::{CommandContext, CommandHandler};
use crate::Result;

pub struct MenuCommands;

#[async_trait::async_trait]
impl CommandHandler for MenuCommands {
    async fn handle(&self, ctx: CommandContext) -> Result<()> {
        ctx.sink.send_text(&ctx.event.chat, MSG_MENU).await
    }
}
