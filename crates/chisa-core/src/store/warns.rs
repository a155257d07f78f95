use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::Mutex;

use super::{load_or_default, save_json};

type WarnCounts = HashMap<String, HashMap<String, u32>>;

/// Persistent warning counts per group member (chat -> sender -> count).
pub struct WarnStore {
    path: PathBuf,
    counts: Mutex<WarnCounts>,
}

impl WarnStore {
    pub fn load(path: PathBuf) -> Self {
        let counts = load_or_default(&path, WarnCounts::new());
        Self {
            path,
            counts: Mutex::new(counts),
        }
    }

    /// Increment and persist a member's warning count, returning the new
    /// count.
    pub async fn add_warning(&self, chat: &str, user: &str) -> u32 {
        let mut counts = self.counts.lock().await;
        let count = counts
            .entry(chat.to_string())
            .or_default()
            .entry(user.to_string())
            .or_insert(0);
        *count += 1;
        let count = *count;
        self.persist(&counts);
        count
    }

    pub async fn get_warning(&self, chat: &str, user: &str) -> u32 {
        let counts = self.counts.lock().await;
        counts
            .get(chat)
            .and_then(|m| m.get(user))
            .copied()
            .unwrap_or(0)
    }

    /// Reset a member's count to zero, dropping empty chat entries.
    pub async fn reset_warning(&self, chat: &str, user: &str) {
        let mut counts = self.counts.lock().await;
        if let Some(group) = counts.get_mut(chat) {
            group.remove(user);
            if group.is_empty() {
                counts.remove(chat);
            }
            self.persist(&counts);
        }
    }

    fn persist(&self, counts: &WarnCounts) {
        if let Err(e) = save_json(&self.path, counts) {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save warnings");
        }
    }
}
