use crate::{
    domain::{ConvId, SenderId},
    messaging::types::MediaPayload,
    Result,
};

/// Hexagonal port for outbound replies.
///
/// Implemented by the network adapter; the core calls it synchronously per
/// reply and does not wait beyond the call's own completion.
#[async_trait::async_trait]
pub trait ReplySink: Send + Sync {
    async fn send_text(&self, chat: &ConvId, text: &str) -> Result<()>;

    /// Send text that @-mentions the given participants.
    async fn send_text_with_mentions(
        &self,
        chat: &ConvId,
        text: &str,
        mentions: &[SenderId],
    ) -> Result<()>;

    async fn send_media(&self, chat: &ConvId, media: MediaPayload) -> Result<()>;
}
