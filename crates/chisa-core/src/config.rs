use std::{env, path::PathBuf, time::Duration};

/// Typed configuration for the bot.
///
/// Everything has a code default so the bot runs with no environment at all;
/// env vars override individual knobs.
#[derive(Clone, Debug)]
pub struct Config {
    /// Command prefixes, tried in order. First match wins.
    pub prefixes: Vec<String>,

    // Rate limiting
    pub user_cooldown: Duration,
    pub chat_limit: usize,
    pub chat_window: Duration,

    // Games
    pub game_timeout: Duration,

    // Persistence
    pub data_dir: PathBuf,
    pub leaderboard_file: PathBuf,
    pub warn_file: PathBuf,
    pub autotag_file: PathBuf,
    pub autosave_interval: Duration,
    pub score_reset_days: i64,
}

impl Config {
    pub fn load() -> Self {
        let prefixes = env_str("CHISA_PREFIXES")
            .map(|s| s.chars().map(|c| c.to_string()).collect())
            .unwrap_or_else(|| vec![".".to_string(), "!".to_string(), "/".to_string()]);

        let data_dir = PathBuf::from(env_str("CHISA_DATA_DIR").unwrap_or_else(|| "data".to_string()));

        Self {
            prefixes,
            user_cooldown: Duration::from_millis(env_u64("USER_COOLDOWN_MS").unwrap_or(3_000)),
            chat_limit: env_u64("CHAT_RATE_LIMIT").unwrap_or(20) as usize,
            chat_window: Duration::from_millis(env_u64("CHAT_RATE_WINDOW_MS").unwrap_or(60_000)),
            game_timeout: Duration::from_millis(env_u64("GAME_TIMEOUT_MS").unwrap_or(30_000)),
            leaderboard_file: data_dir.join("leaderboard.json"),
            warn_file: data_dir.join("warnings.json"),
            autotag_file: data_dir.join("autotag.json"),
            data_dir,
            autosave_interval: Duration::from_millis(
                env_u64("AUTOSAVE_INTERVAL_MS").unwrap_or(300_000),
            ),
            score_reset_days: env_u64("SCORE_RESET_DAYS").unwrap_or(7) as i64,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::load()
    }
}

fn env_str(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_u64(key: &str) -> Option<u64> {
    env_str(key).and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = Config::load();
        assert_eq!(cfg.prefixes, vec![".", "!", "/"]);
        assert_eq!(cfg.chat_limit, 20);
        assert_eq!(cfg.user_cooldown, Duration::from_secs(3));
        assert_eq!(cfg.game_timeout, Duration::from_secs(30));
        assert!(cfg.leaderboard_file.ends_with("leaderboard.json"));
    }
}
