//! Game commands: starting rounds, surrendering, and the leaderboard.

use std::sync::Arc;

use crate::domain::MessageEvent;
use crate::game::{AnswerOutcome, GameKind, GameManager, StartOutcome};
use crate::messaging::ReplySink;
use crate::registry::{CommandContext, CommandHandler};
use crate::Result;

pub struct GameCommands {
    games: GameManager,
}

impl GameCommands {
    pub fn new(games: GameManager) -> Self {
        Self { games }
    }

    async fn start(&self, ctx: &CommandContext, kind: GameKind) -> Result<()> {
        match self.games.start(&ctx.event.chat, kind).await {
            StartOutcome::AlreadyRunning => {
                ctx.sink
                    .send_text(
                        &ctx.event.chat,
                        "⚠️ Masih ada game yang berjalan! Selesaikan atau .nyerah dulu.",
                    )
                    .await
            }
            StartOutcome::Started { prompt } => ctx.sink.send_text(&ctx.event.chat, &prompt).await,
        }
    }

    async fn surrender(&self, ctx: &CommandContext) -> Result<()> {
        let text = match self.games.surrender(&ctx.event.chat).await {
            Some(answer) => format!("🏳️ Anda menyerah! Jawabannya adalah: *{answer}*"),
            None => "⚠️ Tidak ada game yang sedang berjalan.".to_string(),
        };
        ctx.sink.send_text(&ctx.event.chat, &text).await
    }

    async fn leaderboard(&self, ctx: &CommandContext) -> Result<()> {
        let entries = self.games.scores().leaderboard().await;
        if entries.is_empty() {
            return ctx
                .sink
                .send_text(&ctx.event.chat, "🏆 Leaderboard masih kosong. Mainkan game dulu!")
                .await;
        }

        let mut text = String::from("🏆 *Global Leaderboard* 🏆\n_(Reset setiap 7 hari)_\n\n");
        for (i, (name, score)) in entries.iter().enumerate() {
            let medal = match i {
                0 => "🥇".to_string(),
                1 => "🥈".to_string(),
                2 => "🥉".to_string(),
                _ => format!("{}.", i + 1),
            };
            text.push_str(&format!("{medal} {name}: *{score}* poin\n"));
        }
        ctx.sink.send_text(&ctx.event.chat, &text).await
    }
}

#[async_trait::async_trait]
impl CommandHandler for GameCommands {
    async fn handle(&self, ctx: CommandContext) -> Result<()> {
        match ctx.command.name.as_str() {
            "tebakkata" => self.start(&ctx, GameKind::WordScramble).await,
            "tebakibukota" => self.start(&ctx, GameKind::CapitalQuiz).await,
            "tebaknegara" => self.start(&ctx, GameKind::CountryQuiz).await,
            "tebakbenda" => self.start(&ctx, GameKind::ObjectRiddle).await,
            "tebakbendera" => self.start(&ctx, GameKind::FlagQuiz).await,
            "tebakangka" => self.start(&ctx, GameKind::NumberGuess).await,
            "kuis" => self.start(&ctx, GameKind::Trivia).await,
            "nyerah" | "skip" => self.surrender(&ctx).await,
            "leaderboard" | "lb" => self.leaderboard(&ctx).await,
            _ => Ok(()),
        }
    }
}

/// Offers non-command text to the running game and voices the outcome.
/// Wrong guesses and idle chats stay silent; number games get hints.
pub async fn offer_answer(
    games: &GameManager,
    sink: &Arc<dyn ReplySink>,
    event: &MessageEvent,
) -> Result<()> {
    let player = event.display_name();
    match games
        .submit_answer(&event.chat, &event.text, &player)
        .await
    {
        AnswerOutcome::NotActive | AnswerOutcome::Incorrect => Ok(()),
        AnswerOutcome::TooLow => {
            sink.send_text(&event.chat, "📉 Terlalu kecil! Coba angka lebih besar.")
                .await
        }
        AnswerOutcome::TooHigh => {
            sink.send_text(&event.chat, "📈 Terlalu besar! Coba angka lebih kecil.")
                .await
        }
        AnswerOutcome::Correct { .. } => {
            let text = format!("✅ Benar! @{} mendapat 1 poin. 🎉", event.sender);
            sink.send_text_with_mentions(&event.chat, &text, &[event.sender.clone()])
                .await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConvId, SenderId};
    use crate::messaging::MediaPayload;
    use crate::store::ScoreStore;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::time::Duration;
    use tokio::sync::Mutex;

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

    fn setup(name: &str) -> (GameCommands, GameManager, Arc<RecordingSink>) {
        let scores = Arc::new(ScoreStore::load(
            PathBuf::from(format!(
                "/tmp/chisa-gamecmd-{}-{}/scores.json",
                name,
                std::process::id()
            )),
            7,
        ));
        let sink = RecordingSink::new();
        let games = GameManager::new(scores, sink.clone(), Duration::from_secs(30));
        (GameCommands::new(games.clone()), games, sink)
    }

    fn ctx(sink: Arc<RecordingSink>, text: &str) -> CommandContext {
        let event = MessageEvent::text("u1", "room", text);
        let command = crate::router::CommandParser::new(vec![".".to_string()])
            .parse(text)
            .unwrap();
        CommandContext {
            event,
            command,
            sink,
        }
    }

    #[tokio::test]
    async fn starting_twice_warns_about_the_running_game() {
        let (commands, _games, sink) = setup("twice");

        commands.handle(ctx(sink.clone(), ".kuis")).await.unwrap();
        commands.handle(ctx(sink.clone(), ".kuis")).await.unwrap();

        let messages = sink.messages().await;
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("Kuis Pengetahuan"));
        assert!(messages[1].contains("Masih ada game"));
    }

    #[tokio::test]
    async fn surrender_reveals_then_reports_idle() {
        let (commands, _games, sink) = setup("surrender");

        commands.handle(ctx(sink.clone(), ".tebakkata")).await.unwrap();
        commands.handle(ctx(sink.clone(), ".nyerah")).await.unwrap();
        commands.handle(ctx(sink.clone(), ".nyerah")).await.unwrap();

        let messages = sink.messages().await;
        assert!(messages[1].contains("Anda menyerah"));
        assert!(messages[2].contains("Tidak ada game"));
    }

    #[tokio::test]
    async fn leaderboard_reports_empty_store() {
        let (commands, _games, sink) = setup("lbempty");

        commands.handle(ctx(sink.clone(), ".lb")).await.unwrap();

        let messages = sink.messages().await;
        assert!(messages[0].contains("masih kosong"));
    }

    #[tokio::test]
    async fn leaderboard_lists_scorers_with_medals() {
        let (commands, games, sink) = setup("lbfull");
        games.scores().add_score("Ani", 3).await;
        games.scores().add_score("Budi", 1).await;

        commands
            .handle(ctx(sink.clone(), ".leaderboard"))
            .await
            .unwrap();

        let messages = sink.messages().await;
        assert!(messages[0].contains("🥇 Ani: *3* poin"));
        assert!(messages[0].contains("🥈 Budi: *1* poin"));
    }

    #[tokio::test]
    async fn correct_answer_mentions_the_winner() {
        let (_commands, games, sink) = setup("winner");
        let chat = ConvId("room".to_string());
        games.start(&chat, GameKind::NumberGuess).await;

        // Walk the 1..=100 range; exactly one guess wins.
        let sink_dyn: Arc<dyn ReplySink> = sink.clone();
        for n in 1..=100 {
            let event = MessageEvent::text("628123", "room", &n.to_string());
            offer_answer(&games, &sink_dyn, &event).await.unwrap();
        }

        let messages = sink.messages().await;
        let wins: Vec<_> = messages.iter().filter(|m| m.contains("Benar!")).collect();
        assert_eq!(wins.len(), 1);
        assert!(wins[0].contains("@628123"));
    }
}
