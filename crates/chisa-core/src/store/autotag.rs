use std::collections::HashMap;
use std::path::PathBuf;

use tokio::sync::Mutex;

use super::{load_or_default, save_json};

/// Persistent per-group auto-tag preference. Enabled is the absent default;
/// only disabled groups are stored.
pub struct AutoTagStore {
    path: PathBuf,
    disabled: Mutex<HashMap<String, bool>>,
}

impl AutoTagStore {
    pub fn load(path: PathBuf) -> Self {
        let disabled = load_or_default(&path, HashMap::new());
        Self {
            path,
            disabled: Mutex::new(disabled),
        }
    }

    pub async fn is_disabled(&self, chat: &str) -> bool {
        self.disabled.lock().await.get(chat).copied().unwrap_or(false)
    }

    pub async fn set_disabled(&self, chat: &str, disabled: bool) {
        let mut map = self.disabled.lock().await;
        if disabled {
            map.insert(chat.to_string(), true);
        } else {
            map.remove(chat);
        }
        if let Err(e) = save_json(&self.path, &*map) {
            tracing::error!(path = %self.path.display(), error = %e, "failed to save autotag prefs");
        }
    }
}
