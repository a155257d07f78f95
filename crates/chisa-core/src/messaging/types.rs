/// Broad media classes the bot sends and receives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
    Sticker,
}

/// Raw media bytes plus enough metadata to re-send them.
#[derive(Clone, Debug)]
pub struct MediaPayload {
    pub kind: MediaKind,
    pub bytes: Vec<u8>,
    pub mime_type: String,
    pub caption: Option<String>,
}

impl MediaPayload {
    pub fn new(kind: MediaKind, bytes: Vec<u8>, mime_type: impl Into<String>) -> Self {
        Self {
            kind,
            bytes,
            mime_type: mime_type.into(),
            caption: None,
        }
    }
}
