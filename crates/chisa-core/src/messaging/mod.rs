pub mod port;
pub mod types;

pub use port::ReplySink;
pub use types::{MediaKind, MediaPayload};
