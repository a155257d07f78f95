//! Inbound event pipeline: rate limit, parse, route, and contain failures.
//!
//! Order per message: empty text is dropped, the rate limiter runs next
//! (skipped for the bot's own messages), then the parser. Parsed commands
//! go through the registry; anything else is offered to the game layer as
//! a free-text answer. Denials and unknown commands are silent.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::domain::MessageEvent;
use crate::game::GameManager;
use crate::handlers::games::offer_answer;
use crate::messages::MSG_ERROR;
use crate::messaging::ReplySink;
use crate::ratelimit::{RateLimiter, Verdict};
use crate::registry::{CommandContext, CommandHandler, CommandRegistry};
use crate::router::CommandParser;

struct DispatchInner {
    parser: CommandParser,
    limiter: Mutex<RateLimiter>,
    registry: Arc<CommandRegistry>,
    games: GameManager,
    sink: Arc<dyn ReplySink>,
}

#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<DispatchInner>,
}

impl Dispatcher {
    pub fn new(
        parser: CommandParser,
        limiter: RateLimiter,
        registry: Arc<CommandRegistry>,
        games: GameManager,
        sink: Arc<dyn ReplySink>,
    ) -> Self {
        Self {
            inner: Arc::new(DispatchInner {
                parser,
                limiter: Mutex::new(limiter),
                registry,
                games,
                sink,
            }),
        }
    }

    /// Fire-and-forget entry point for the adapter's event loop.
    pub fn spawn_handle(&self, event: MessageEvent) -> JoinHandle<()> {
        let dispatcher = self.clone();
        tokio::spawn(async move { dispatcher.handle_event(event).await })
    }

    /// Processes one inbound message to completion.
    pub async fn handle_event(&self, event: MessageEvent) {
        if event.text.trim().is_empty() {
            return;
        }

        if !event.from_self {
            let verdict = self
                .inner
                .limiter
                .lock()
                .await
                .check(&event.sender, &event.chat);
            if verdict != Verdict::Allowed {
                debug!(sender = %event.sender, chat = %event.chat, ?verdict, "message rate limited");
                return;
            }
        }

        match self.inner.parser.parse(&event.text) {
            Some(command) => {
                let Some(handler) = self.inner.registry.get(&command.name) else {
                    debug!(name = %command.name, "unknown command ignored");
                    return;
                };
                let ctx = CommandContext {
                    command,
                    event,
                    sink: Arc::clone(&self.inner.sink),
                };
                self.run_handler(handler, ctx).await;
            }
            None if !event.from_self => {
                if let Err(err) = offer_answer(&self.inner.games, &self.inner.sink, &event).await {
                    warn!(chat = %event.chat, error = %err, "failed to reply to game answer");
                }
            }
            None => {}
        }
    }

    /// Runs a handler in its own task so a panic takes down only this
    /// invocation, then reports failures to the chat.
    async fn run_handler(&self, handler: Arc<dyn CommandHandler>, ctx: CommandContext) {
        let chat = ctx.event.chat.clone();
        let name = ctx.command.name.clone();
        let outcome = tokio::spawn(async move { handler.handle(ctx).await }).await;

        let notify = match outcome {
            Ok(Ok(())) => return,
            Ok(Err(err)) => {
                warn!(command = %name, chat = %chat, error = %err, "command failed");
                true
            }
            Err(join_err) if join_err.is_panic() => {
                error!(command = %name, chat = %chat, "command handler panicked");
                true
            }
            Err(join_err) => {
                warn!(command = %name, chat = %chat, error = %join_err, "command task cancelled");
                false
            }
        };

        if notify {
            if let Err(err) = self.inner.sink.send_text(&chat, MSG_ERROR).await {
                warn!(chat = %chat, error = %err, "failed to send error notice");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConvId, SenderId};
    use crate::game::GameKind;
    use crate::messaging::MediaPayload;
    use crate::store::ScoreStore;
    use crate::Result;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct RecordingSink {
        sent: Mutex<Vec<String>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }

        async fn messages(&self) -> Vec<String> {
            self.sent.lock().await.clone()
        }
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn send_text(&self, _chat: &ConvId, text: &str) -> Result<()> {
            self.sent.lock().await.push(text.to_string());
            Ok(())
        }

        async fn send_text_with_mentions(
            &self,
            _chat: &ConvId,
            text: &str,
            _mentions: &[SenderId],
        ) -> Result<()> {
            self.sent.lock().await.push(text.to_string());
            Ok(())
        }

        async fn send_media(&self, _chat: &ConvId, _media: MediaPayload) -> Result<()> {
            Ok(())
        }
    }

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl CommandHandler for CountingHandler {
        async fn handle(&self, _ctx: CommandContext) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct PanickingHandler;

    #[async_trait]
    impl CommandHandler for PanickingHandler {
        async fn handle(&self, _ctx: CommandContext) -> Result<()> {
            panic!("boom");
        }
    }

    fn scores(name: &str) -> Arc<ScoreStore> {
        Arc::new(ScoreStore::load(
            PathBuf::from(format!(
                "/tmp/chisa-dispatch-{}-{}/scores.json",
                name,
                std::process::id()
            )),
            7,
        ))
    }

    fn dispatcher(
        name: &str,
        registry: CommandRegistry,
        cooldown: Duration,
    ) -> (Dispatcher, Arc<RecordingSink>, GameManager) {
        let sink = RecordingSink::new();
        let games = GameManager::new(scores(name), sink.clone(), Duration::from_secs(30));
        let dispatcher = Dispatcher::new(
            CommandParser::new(vec![".".to_string(), "!".to_string(), "/".to_string()]),
            RateLimiter::new(cooldown, 20, Duration::from_secs(60)),
            Arc::new(registry),
            games.clone(),
            sink.clone(),
        );
        (dispatcher, sink, games)
    }

    #[tokio::test]
    async fn routes_commands_to_registered_handlers() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register("ping", Arc::new(CountingHandler { calls: calls.clone() }));
        let (dispatcher, sink, _games) = dispatcher("route", registry, Duration::ZERO);

        dispatcher
            .handle_event(MessageEvent::text("u1", "room", ".ping"))
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn unknown_commands_are_silently_dropped() {
        let (dispatcher, sink, _games) =
            dispatcher("unknown", CommandRegistry::new(), Duration::ZERO);

        dispatcher
            .handle_event(MessageEvent::text("u1", "room", ".doesnotexist"))
            .await;

        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn cooldown_drops_rapid_messages_without_reply() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register("ping", Arc::new(CountingHandler { calls: calls.clone() }));
        let (dispatcher, sink, _games) =
            dispatcher("cooldown", registry, Duration::from_secs(3));

        dispatcher
            .handle_event(MessageEvent::text("u1", "room", ".ping"))
            .await;
        dispatcher
            .handle_event(MessageEvent::text("u1", "room", ".ping"))
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn own_messages_bypass_rate_limiting() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = CommandRegistry::new();
        registry.register("ping", Arc::new(CountingHandler { calls: calls.clone() }));
        let (dispatcher, _sink, _games) =
            dispatcher("selfbypass", registry, Duration::from_secs(3));

        let mut event = MessageEvent::text("bot", "room", ".ping");
        event.from_self = true;
        dispatcher.handle_event(event.clone()).await;
        dispatcher.handle_event(event).await;

        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn handler_panic_is_contained_and_reported() {
        let mut registry = CommandRegistry::new();
        registry.register("crash", Arc::new(PanickingHandler));
        let (dispatcher, sink, _games) = dispatcher("panic", registry, Duration::ZERO);

        dispatcher
            .handle_event(MessageEvent::text("u1", "room", ".crash"))
            .await;

        assert_eq!(sink.messages().await, vec![MSG_ERROR.to_string()]);

        // The dispatcher keeps serving after a panic.
        dispatcher
            .handle_event(MessageEvent::text("u2", "room2", ".crash"))
            .await;
        assert_eq!(sink.messages().await.len(), 2);
    }

    #[tokio::test]
    async fn free_text_reaches_the_running_game() {
        let (dispatcher, sink, games) =
            dispatcher("freetext", CommandRegistry::new(), Duration::ZERO);
        let chat = ConvId("room".to_string());
        games.start(&chat, GameKind::NumberGuess).await;

        // 0 is outside the 1..=100 range, so the hint is deterministic.
        dispatcher
            .handle_event(MessageEvent::text("u1", "room", "0"))
            .await;

        let messages = sink.messages().await;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Terlalu kecil"));
    }

    #[tokio::test]
    async fn own_free_text_is_not_offered_as_answer() {
        let (dispatcher, sink, games) =
            dispatcher("selftext", CommandRegistry::new(), Duration::ZERO);
        let chat = ConvId("room".to_string());
        games.start(&chat, GameKind::NumberGuess).await;

        let mut event = MessageEvent::text("bot", "room", "0");
        event.from_self = true;
        dispatcher.handle_event(event).await;

        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn blank_messages_are_ignored() {
        let (dispatcher, sink, _games) =
            dispatcher("blank", CommandRegistry::new(), Duration::ZERO);

        dispatcher
            .handle_event(MessageEvent::text("u1", "room", "   "))
            .await;

        assert!(sink.messages().await.is_empty());
    }
}
