//! Flat-JSON persistent stores: one file per store, fully rewritten on each
//! mutation. The in-memory map is the write-through cache; a read failure at
//! startup means "empty store", never a fatal error.

mod autotag;
mod scores;
mod warns;

pub use autotag::AutoTagStore;
pub use scores::{LeaderboardEntry, ScoreStore};
pub use warns::WarnStore;

use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::Result;

/// Load a JSON document, degrading to the provided default on any failure.
fn load_or_default<T: DeserializeOwned>(path: &Path, default: T) -> T {
    let txt = match std::fs::read_to_string(path) {
        Ok(txt) => txt,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "store unreadable, starting empty");
            }
            return default;
        }
    };

    match serde_json::from_str(&txt) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "store corrupt, starting empty");
            default
        }
    }
}

/// Persist a JSON document, creating the parent directory if needed.
fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let txt = serde_json::to_string_pretty(data)?;
    std::fs::write(path, txt)?;
    Ok(())
}
