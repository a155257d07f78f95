//! Per-sender cooldown + per-conversation sliding-window rate limiting.

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::domain::{ConvId, SenderId};

/// Interval between opportunistic cleanup passes.
const CLEANUP_INTERVAL: Duration = Duration::from_secs(5 * 60);
/// Sender entries idle longer than this are dropped during cleanup.
const SENDER_IDLE_TTL: Duration = Duration::from_secs(60);

/// Why a request was denied, if it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Allowed,
    /// The sender acted again within the per-sender cooldown.
    SenderCooldown,
    /// The conversation hit its sliding-window command cap.
    ChatLimited,
}

/// Rate limiter state. Callers share it behind a single mutex so the
/// check-and-record sequence stays atomic (see `Dispatcher`).
#[derive(Debug)]
pub struct RateLimiter {
    cooldown: Duration,
    chat_limit: usize,
    chat_window: Duration,

    sender_last: HashMap<SenderId, Instant>,
    chat_windows: HashMap<ConvId, Vec<Instant>>,
    last_cleanup: Instant,
}

impl RateLimiter {
    pub fn new(cooldown: Duration, chat_limit: usize, chat_window: Duration) -> Self {
        Self {
            cooldown,
            chat_limit,
            chat_window,
            sender_last: HashMap::new(),
            chat_windows: HashMap::new(),
            last_cleanup: Instant::now(),
        }
    }

    /// Check whether an action from `sender` in `chat` is allowed, recording
    /// it if so. Both gates must pass: sender cooldown first, then the
    /// conversation window. A denial mutates nothing beyond window pruning.
    pub fn check(&mut self, sender: &SenderId, chat: &ConvId) -> Verdict {
        self.check_at(sender, chat, Instant::now())
    }

    pub fn check_at(&mut self, sender: &SenderId, chat: &ConvId, now: Instant) -> Verdict {
        if now.duration_since(self.last_cleanup) > CLEANUP_INTERVAL {
            self.cleanup(now);
            self.last_cleanup = now;
        }

        if let Some(&last) = self.sender_last.get(sender) {
            if now.duration_since(last) < self.cooldown {
                return Verdict::SenderCooldown;
            }
        }

        let window = self.chat_window;
        let stamps = self.chat_windows.entry(chat.clone()).or_default();
        stamps.retain(|&t| now.duration_since(t) <= window);
        if stamps.len() >= self.chat_limit {
            return Verdict::ChatLimited;
        }

        stamps.push(now);
        self.sender_last.insert(sender.clone(), now);
        Verdict::Allowed
    }

    /// Drop stale entries so memory stays proportional to recently active
    /// senders and conversations.
    fn cleanup(&mut self, now: Instant) {
        self.sender_last
            .retain(|_, &mut last| now.duration_since(last) <= SENDER_IDLE_TTL);

        let window = self.chat_window;
        self.chat_windows.retain(|_, stamps| {
            stamps.retain(|&t| now.duration_since(t) <= window);
            !stamps.is_empty()
        });
    }

    #[cfg(test)]
    fn tracked_entries(&self) -> (usize, usize) {
        (self.sender_last.len(), self.chat_windows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn limiter() -> RateLimiter {
        RateLimiter::new(Duration::from_secs(3), 20, Duration::from_secs(60))
    }

    fn sender(n: u64) -> SenderId {
        SenderId(format!("628{n}@s.net"))
    }

    fn chat(n: u64) -> ConvId {
        ConvId(format!("group-{n}@g.net"))
    }

    #[test]
    fn second_action_within_cooldown_is_denied() {
        let mut rl = limiter();
        let t0 = Instant::now();

        assert_eq!(rl.check_at(&sender(1), &chat(1), t0), Verdict::Allowed);
        assert_eq!(
            rl.check_at(&sender(1), &chat(1), t0 + Duration::from_secs(2)),
            Verdict::SenderCooldown
        );
        assert_eq!(
            rl.check_at(&sender(1), &chat(1), t0 + Duration::from_secs(4)),
            Verdict::Allowed
        );
    }

    #[test]
    fn chat_window_caps_distinct_senders() {
        let mut rl = limiter();
        let t0 = Instant::now();

        for i in 0..20 {
            assert_eq!(rl.check_at(&sender(i), &chat(1), t0), Verdict::Allowed);
        }
        assert_eq!(rl.check_at(&sender(99), &chat(1), t0), Verdict::ChatLimited);

        // A different conversation is unaffected by the burst.
        assert_eq!(rl.check_at(&sender(100), &chat(2), t0), Verdict::Allowed);
    }

    #[test]
    fn window_slides() {
        let mut rl = RateLimiter::new(Duration::from_millis(0), 2, Duration::from_secs(60));
        let t0 = Instant::now();

        assert_eq!(rl.check_at(&sender(1), &chat(1), t0), Verdict::Allowed);
        assert_eq!(rl.check_at(&sender(2), &chat(1), t0), Verdict::Allowed);
        assert_eq!(rl.check_at(&sender(3), &chat(1), t0), Verdict::ChatLimited);

        // Old stamps age out of the window.
        let later = t0 + Duration::from_secs(61);
        assert_eq!(rl.check_at(&sender(3), &chat(1), later), Verdict::Allowed);
    }

    #[test]
    fn sender_under_cooldown_does_not_consume_chat_window() {
        let mut rl = RateLimiter::new(Duration::from_secs(10), 1, Duration::from_secs(60));
        let t0 = Instant::now();

        assert_eq!(rl.check_at(&sender(1), &chat(1), t0), Verdict::Allowed);

        // Denied on cooldown; the chat window must not have grown, so after
        // the single recorded stamp ages out another sender gets through.
        assert_eq!(
            rl.check_at(&sender(1), &chat(1), t0 + Duration::from_secs(1)),
            Verdict::SenderCooldown
        );
        assert_eq!(
            rl.check_at(&sender(2), &chat(1), t0 + Duration::from_secs(61)),
            Verdict::Allowed
        );
    }

    #[test]
    fn cleanup_drops_stale_entries() {
        let mut rl = limiter();
        let t0 = Instant::now();

        for i in 0..5 {
            rl.check_at(&sender(i), &chat(i), t0);
        }
        assert_eq!(rl.tracked_entries(), (5, 5));

        // Past the cleanup interval everything here is stale.
        let later = t0 + Duration::from_secs(6 * 60);
        rl.check_at(&sender(42), &chat(42), later);
        assert_eq!(rl.tracked_entries(), (1, 1));
    }
}
