use crate::messaging::types::MediaPayload;

/// Messaging-network identity of a sender (JID-style string).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SenderId(pub String);

impl std::fmt::Display for SenderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Messaging-network identity of a conversation (group or direct chat).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ConvId(pub String);

impl std::fmt::Display for ConvId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A discrete inbound message event as delivered by the network adapter.
///
/// The core is a pure consumer of this shape; wire formats belong to the
/// adapter.
#[derive(Clone, Debug)]
pub struct MessageEvent {
    pub sender: SenderId,
    /// Display name as pushed by the sender, may be empty.
    pub sender_name: String,
    pub chat: ConvId,
    pub is_group: bool,
    /// True for messages authored by this bot itself.
    pub from_self: bool,
    /// Text body, or caption if the message carries media.
    pub text: String,
    /// Participant referenced by a reply/quote context, if any.
    pub quoted_sender: Option<SenderId>,
    /// Users @-mentioned in the message, in order of appearance.
    pub mentions: Vec<SenderId>,
    /// Attached (or quoted) media, if any.
    pub media: Option<MediaPayload>,
}

impl MessageEvent {
    /// Plain text event with no media or quote context, mostly for tests and
    /// the console adapter.
    pub fn text(sender: &str, chat: &str, text: &str) -> Self {
        Self {
            sender: SenderId(sender.to_string()),
            sender_name: String::new(),
            chat: ConvId(chat.to_string()),
            is_group: true,
            from_self: false,
            text: text.to_string(),
            quoted_sender: None,
            mentions: Vec::new(),
            media: None,
        }
    }

    /// Name to credit for scores and mentions: push name, or the raw id.
    pub fn display_name(&self) -> String {
        if self.sender_name.trim().is_empty() {
            self.sender.0.clone()
        } else {
            self.sender_name.clone()
        }
    }
}
