use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::interval;

use super::{load_or_default, save_json};

#[derive(Clone, Debug, Serialize, Deserialize)]
struct LeaderboardData {
    last_reset: DateTime<Utc>,
    /// Player display name -> cumulative score.
    scores: HashMap<String, u64>,
}

impl Default for LeaderboardData {
    fn default() -> Self {
        Self {
            last_reset: Utc::now(),
            scores: HashMap::new(),
        }
    }
}

pub type LeaderboardEntry = (String, u64);

/// Durable player-score store with a periodic full-reset policy.
///
/// Every mutation writes straight through to disk; persistence failures are
/// logged and the in-memory state keeps operating (degraded durability, not
/// degraded availability).
pub struct ScoreStore {
    path: PathBuf,
    reset_days: i64,
    data: Mutex<LeaderboardData>,
}

impl ScoreStore {
    pub fn load(path: PathBuf, reset_days: i64) -> Self {
        let mut data: LeaderboardData = load_or_default(&path, LeaderboardData::default());
        if reset_due(&data, reset_days) {
            tracing::info!("leaderboard reset triggered on load");
            data = LeaderboardData::default();
            persist(&path, &data);
        }
        Self {
            path,
            reset_days,
            data: Mutex::new(data),
        }
    }

    /// Atomically increment `player`'s score and persist. Returns the new
    /// total.
    pub async fn add_score(&self, player: &str, points: u64) -> u64 {
        let mut data = self.data.lock().await;
        self.apply_reset(&mut data);
        let total = data.scores.entry(player.to_string()).or_insert(0);
        *total += points;
        let total = *total;
        persist(&self.path, &*data);
        total
    }

    /// Standings sorted by score descending, ties broken by name so the
    /// order is stable, truncated to the top 10.
    pub async fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        let data = self.data.lock().await;
        let mut entries: Vec<LeaderboardEntry> = data
            .scores
            .iter()
            .map(|(k, &v)| (k.clone(), v))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        entries.truncate(10);
        entries
    }

    /// Periodic background save for the lifetime of the process. Re-checks
    /// the reset policy on every tick.
    pub fn spawn_autosave(self: &Arc<Self>, every: Duration) -> JoinHandle<()> {
        let store = self.clone();
        tokio::spawn(async move {
            let mut tick = interval(every);
            tick.tick().await; // first tick fires immediately; skip it
            loop {
                tick.tick().await;
                let mut data = store.data.lock().await;
                store.apply_reset(&mut data);
                persist(&store.path, &*data);
            }
        })
    }

    fn apply_reset(&self, data: &mut LeaderboardData) {
        if reset_due(data, self.reset_days) {
            tracing::info!("leaderboard reset triggered");
            *data = LeaderboardData::default();
        }
    }
}

fn reset_due(data: &LeaderboardData, reset_days: i64) -> bool {
    Utc::now() - data.last_reset > chrono::Duration::days(reset_days)
}

fn persist(path: &PathBuf, data: &LeaderboardData) {
    if let Err(e) = save_json(path, data) {
        tracing::error!(path = %path.display(), error = %e, "failed to save leaderboard");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let dir = PathBuf::from(format!("/tmp/chisa-scores-{}-{name}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir.join("leaderboard.json")
    }

    #[tokio::test]
    async fn add_score_persists_and_accumulates() {
        let path = scratch("add");
        let store = ScoreStore::load(path.clone(), 7);

        assert_eq!(store.add_score("Budi", 1).await, 1);
        assert_eq!(store.add_score("Budi", 1).await, 2);
        assert_eq!(store.add_score("Ani", 1).await, 1);

        // Fresh load reads the file back.
        let reloaded = ScoreStore::load(path, 7);
        let lb = reloaded.leaderboard().await;
        assert_eq!(lb[0], ("Budi".to_string(), 2));
        assert_eq!(lb[1], ("Ani".to_string(), 1));
    }

    #[tokio::test]
    async fn leaderboard_sorted_and_truncated() {
        let path = scratch("sort");
        let store = ScoreStore::load(path, 7);

        for i in 0..15u64 {
            store.add_score(&format!("p{i:02}"), i + 1).await;
        }

        let lb = store.leaderboard().await;
        assert_eq!(lb.len(), 10);
        assert_eq!(lb[0].1, 15);
        assert!(lb.windows(2).all(|w| w[0].1 >= w[1].1));
    }

    #[tokio::test]
    async fn corrupt_file_degrades_to_empty() {
        let path = scratch("corrupt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "{ not json").unwrap();

        let store = ScoreStore::load(path, 7);
        assert!(store.leaderboard().await.is_empty());
    }

    #[tokio::test]
    async fn stale_last_reset_clears_scores_on_load() {
        let path = scratch("reset");
        let old = LeaderboardData {
            last_reset: Utc::now() - chrono::Duration::days(8),
            scores: HashMap::from([("Budi".to_string(), 9)]),
        };
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, serde_json::to_string(&old).unwrap()).unwrap();

        let store = ScoreStore::load(path, 7);
        assert!(store.leaderboard().await.is_empty());
    }
}
