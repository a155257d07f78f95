//! Per-chat guessing games with a shared score ledger.
//!
//! Each chat holds at most one active session. Sessions end when someone
//! answers correctly, surrenders, or the timeout task fires. The timeout
//! task compares session instances so a timer left over from a finished
//! game can never kill its successor.

pub mod content;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::ConvId;
use crate::messaging::ReplySink;
use crate::store::ScoreStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameKind {
    WordScramble,
    CapitalQuiz,
    CountryQuiz,
    ObjectRiddle,
    FlagQuiz,
    NumberGuess,
    Trivia,
}

/// A single running game in one chat.
pub struct GameSession {
    pub kind: GameKind,
    pub question: String,
    /// Display form of the answer, revealed on surrender or timeout.
    pub answer: String,
    /// Lowercased accepted answers.
    pub valid: Vec<String>,
}

/// Result of offering a message as a game answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// No session is running in this chat.
    NotActive,
    /// Wrong guess; the session keeps running.
    Incorrect,
    /// Number-guess hint: the guess was below the target.
    TooLow,
    /// Number-guess hint: the guess was above the target.
    TooHigh,
    /// Correct; the session is over and the player's new total is returned.
    Correct { total: u64 },
}

/// Result of starting a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartOutcome {
    /// Another game is already running in this chat.
    AlreadyRunning,
    /// The game started; the prompt to show players.
    Started { prompt: String },
}

struct GameInner {
    sessions: Mutex<HashMap<ConvId, Arc<GameSession>>>,
    scores: Arc<ScoreStore>,
    sink: Arc<dyn ReplySink>,
    timeout: Duration,
}

#[derive(Clone)]
pub struct GameManager {
    inner: Arc<GameInner>,
}

impl GameManager {
    pub fn new(scores: Arc<ScoreStore>, sink: Arc<dyn ReplySink>, timeout: Duration) -> Self {
        Self {
            inner: Arc::new(GameInner {
                sessions: Mutex::new(HashMap::new()),
                scores,
                sink,
                timeout,
            }),
        }
    }

    /// Starts a new game in `chat` unless one is already running.
    ///
    /// Every kind except `NumberGuess` gets a timeout task that reveals
    /// the answer if nobody solved it in time.
    pub async fn start(&self, chat: &ConvId, kind: GameKind) -> StartOutcome {
        let mut sessions = self.inner.sessions.lock().await;
        if sessions.contains_key(chat) {
            return StartOutcome::AlreadyRunning;
        }

        let (session, prompt) = build_session(kind);
        let session = Arc::new(session);
        sessions.insert(chat.clone(), Arc::clone(&session));
        drop(sessions);

        debug!(chat = %chat, ?kind, "game started");

        if kind != GameKind::NumberGuess {
            let manager = self.clone();
            let chat = chat.clone();
            tokio::spawn(async move {
                tokio::time::sleep(manager.inner.timeout).await;
                manager.expire(&chat, &session).await;
            });
        }

        StartOutcome::Started { prompt }
    }

    /// Removes `session` if it is still the one running in `chat` and
    /// announces the answer. A session replaced or finished in the
    /// meantime is left alone.
    async fn expire(&self, chat: &ConvId, session: &Arc<GameSession>) {
        let mut sessions = self.inner.sessions.lock().await;
        let still_running = matches!(sessions.get(chat), Some(current) if Arc::ptr_eq(current, session));
        if !still_running {
            return;
        }
        sessions.remove(chat);
        drop(sessions);

        let text = format!(
            "⏳ Waktu habis! Jawabannya adalah: *{}*",
            title_case(&session.answer)
        );
        if let Err(err) = self.inner.sink.send_text(chat, &text).await {
            warn!(chat = %chat, error = %err, "failed to announce game timeout");
        }
    }

    /// Offers a free-text message as an answer to the running game.
    ///
    /// Matching is case-insensitive on the trimmed text. A correct answer
    /// ends the session and credits one point to `player`.
    pub async fn submit_answer(&self, chat: &ConvId, text: &str, player: &str) -> AnswerOutcome {
        let session = {
            let sessions = self.inner.sessions.lock().await;
            match sessions.get(chat) {
                Some(s) => Arc::clone(s),
                None => return AnswerOutcome::NotActive,
            }
        };

        let guess = text.trim().to_lowercase();
        let correct = session.valid.iter().any(|v| *v == guess);

        if session.kind == GameKind::NumberGuess && !correct {
            if let (Ok(num), Ok(target)) = (guess.parse::<i64>(), session.answer.parse::<i64>()) {
                // Only hint on strict inequality; "042" parses equal to a
                // target of 42 and must not get a direction.
                if num < target {
                    return AnswerOutcome::TooLow;
                }
                if num > target {
                    return AnswerOutcome::TooHigh;
                }
            }
        }

        if !correct {
            return AnswerOutcome::Incorrect;
        }

        {
            let mut sessions = self.inner.sessions.lock().await;
            let still_running =
                matches!(sessions.get(chat), Some(current) if Arc::ptr_eq(current, &session));
            if !still_running {
                // Someone else won the race; their answer already counted.
                return AnswerOutcome::NotActive;
            }
            sessions.remove(chat);
        }

        let total = self.inner.scores.add_score(player, 1).await;
        AnswerOutcome::Correct { total }
    }

    /// Ends the running game and returns the display answer, or `None`
    /// when no game is active.
    pub async fn surrender(&self, chat: &ConvId) -> Option<String> {
        let mut sessions = self.inner.sessions.lock().await;
        sessions
            .remove(chat)
            .map(|s| title_case(&s.answer))
    }

    pub fn scores(&self) -> &Arc<ScoreStore> {
        &self.inner.scores
    }
}

fn build_session(kind: GameKind) -> (GameSession, String) {
    let mut rng = rand::thread_rng();
    match kind {
        GameKind::WordScramble => {
            let word = content::WORDS.choose(&mut rng).copied().unwrap_or("meja");
            let scrambled = scramble(word, &mut rng);
            let prompt = format!(
                "🎮 *Tebak Kata*\n\nSusun kata berikut: *{}*",
                scrambled.to_uppercase()
            );
            (
                GameSession {
                    kind,
                    question: scrambled,
                    answer: word.to_lowercase(),
                    valid: vec![word.to_lowercase()],
                },
                prompt,
            )
        }
        GameKind::CapitalQuiz => {
            let item = &content::CAPITALS[rng.gen_range(0..content::CAPITALS.len())];
            let clue = item.clues[rng.gen_range(0..item.clues.len())];
            let prompt = format!("🎮 *Tebak Ibu Kota*\n\n{clue}");
            (
                GameSession {
                    kind,
                    question: clue.to_string(),
                    answer: item.city.to_lowercase(),
                    valid: vec![item.city.to_lowercase()],
                },
                prompt,
            )
        }
        GameKind::CountryQuiz => {
            let item = &content::COUNTRIES[rng.gen_range(0..content::COUNTRIES.len())];
            let clue = item.clues[rng.gen_range(0..item.clues.len())];
            let prompt = format!("🎮 *Tebak Negara*\n\n{clue}");
            (
                GameSession {
                    kind,
                    question: clue.to_string(),
                    answer: item.country.to_lowercase(),
                    valid: vec![item.country.to_lowercase()],
                },
                prompt,
            )
        }
        GameKind::ObjectRiddle => {
            let item = &content::RIDDLES[rng.gen_range(0..content::RIDDLES.len())];
            let prompt = format!("🎮 *Tebak Benda*\n\n{}", item.clue);
            (
                GameSession {
                    kind,
                    question: item.clue.to_string(),
                    answer: item.answer.to_string(),
                    valid: item.valid.iter().map(|v| v.to_string()).collect(),
                },
                prompt,
            )
        }
        GameKind::FlagQuiz => {
            let item = &content::FLAGS[rng.gen_range(0..content::FLAGS.len())];
            let prompt = format!("🎮 *Tebak Bendera*\n\nBendera negara apa ini?\n{}", item.flag);
            (
                GameSession {
                    kind,
                    question: item.flag.to_string(),
                    answer: item.country.to_string(),
                    valid: vec![item.country.to_lowercase()],
                },
                prompt,
            )
        }
        GameKind::NumberGuess => {
            let target: i64 = rng.gen_range(1..=100);
            let prompt = "🎮 *Tebak Angka*\n\nSilakan tebak angka antara *1 sampai 100*!".to_string();
            (
                GameSession {
                    kind,
                    question: "Tebak angka antara 1 sampai 100!".to_string(),
                    answer: target.to_string(),
                    valid: vec![target.to_string()],
                },
                prompt,
            )
        }
        GameKind::Trivia => {
            let item = &content::QUIZZES[rng.gen_range(0..content::QUIZZES.len())];
            let prompt = format!("🎮 *Kuis Pengetahuan*\n\n{}", item.question);
            (
                GameSession {
                    kind,
                    question: item.question.to_string(),
                    answer: item.answer.to_string(),
                    valid: item.valid.iter().map(|v| v.to_string()).collect(),
                },
                prompt,
            )
        }
    }
}

/// Shuffles the letters of `word`, guaranteeing the result differs from
/// the original for words of two or more letters.
fn scramble(word: &str, rng: &mut impl Rng) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.shuffle(rng);
    let mut scrambled: String = letters.iter().collect();
    if scrambled == word && letters.len() > 1 {
        letters.swap(0, 1);
        scrambled = letters.iter().collect();
    }
    scrambled
}

/// Capitalizes the first letter of each word, for revealing answers that
/// are stored lowercased.
pub fn title_case(text: &str) -> String {
    text.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::SenderId;
    use crate::messaging::MediaPayload;
    use crate::Result;
    use async_trait::async_trait;
    use std::path::PathBuf;

    struct RecordingSink {
        sent: Mutex<Vec<(ConvId, String)>>,
    }

    impl RecordingSink {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                sent: Mutex::new(Vec::new()),
            })
        }

        async fn messages(&self) -> Vec<String> {
            self.sent.lock().await.iter().map(|(_, t)| t.clone()).collect()
        }
    }

    #[async_trait]
    impl ReplySink for RecordingSink {
        async fn send_text(&self, chat: &ConvId, text: &str) -> Result<()> {
            self.sent.lock().await.push((chat.clone(), text.to_string()));
            Ok(())
        }

        async fn send_text_with_mentions(
            &self,
            chat: &ConvId,
            text: &str,
            _mentions: &[SenderId],
        ) -> Result<()> {
            self.sent.lock().await.push((chat.clone(), text.to_string()));
            Ok(())
        }

        async fn send_media(&self, _chat: &ConvId, _media: MediaPayload) -> Result<()> {
            Ok(())
        }
    }

    fn scratch_path(name: &str) -> PathBuf {
        PathBuf::from(format!(
            "/tmp/chisa-game-{}-{}/scores.json",
            name,
            std::process::id()
        ))
    }

    fn manager(name: &str, timeout: Duration) -> (GameManager, Arc<RecordingSink>) {
        let scores = Arc::new(ScoreStore::load(scratch_path(name), 7));
        let sink = RecordingSink::new();
        let mgr = GameManager::new(scores, sink.clone(), timeout);
        (mgr, sink)
    }

    async fn force_session(mgr: &GameManager, chat: &ConvId, session: GameSession) {
        mgr.inner
            .sessions
            .lock()
            .await
            .insert(chat.clone(), Arc::new(session));
    }

    fn riddle_session(answer: &str) -> GameSession {
        GameSession {
            kind: GameKind::ObjectRiddle,
            question: "q".to_string(),
            answer: answer.to_string(),
            valid: vec![answer.to_lowercase()],
        }
    }

    #[tokio::test]
    async fn second_start_in_same_chat_is_rejected() {
        let (mgr, _sink) = manager("dup", Duration::from_secs(30));
        let chat = ConvId("room".to_string());

        assert!(matches!(
            mgr.start(&chat, GameKind::Trivia).await,
            StartOutcome::Started { .. }
        ));
        assert_eq!(
            mgr.start(&chat, GameKind::WordScramble).await,
            StartOutcome::AlreadyRunning
        );
    }

    #[tokio::test]
    async fn chats_run_independent_sessions() {
        let (mgr, _sink) = manager("multi", Duration::from_secs(30));
        let a = ConvId("a".to_string());
        let b = ConvId("b".to_string());

        assert!(matches!(
            mgr.start(&a, GameKind::Trivia).await,
            StartOutcome::Started { .. }
        ));
        assert!(matches!(
            mgr.start(&b, GameKind::Trivia).await,
            StartOutcome::Started { .. }
        ));
    }

    #[tokio::test]
    async fn correct_answer_scores_and_ends_session() {
        let (mgr, _sink) = manager("correct", Duration::from_secs(30));
        let chat = ConvId("room".to_string());
        force_session(&mgr, &chat, riddle_session("Jam")).await;

        assert_eq!(
            mgr.submit_answer(&chat, "  JAM ", "Udin").await,
            AnswerOutcome::Correct { total: 1 }
        );
        assert_eq!(
            mgr.submit_answer(&chat, "jam", "Udin").await,
            AnswerOutcome::NotActive
        );
    }

    #[tokio::test]
    async fn wrong_answer_keeps_session_running() {
        let (mgr, _sink) = manager("wrong", Duration::from_secs(30));
        let chat = ConvId("room".to_string());
        force_session(&mgr, &chat, riddle_session("Jam")).await;

        assert_eq!(
            mgr.submit_answer(&chat, "sisir", "Udin").await,
            AnswerOutcome::Incorrect
        );
        assert_eq!(
            mgr.submit_answer(&chat, "jam", "Udin").await,
            AnswerOutcome::Correct { total: 1 }
        );
    }

    #[tokio::test]
    async fn number_guess_gives_directional_hints() {
        let (mgr, _sink) = manager("hints", Duration::from_millis(50));
        let chat = ConvId("room".to_string());
        force_session(
            &mgr,
            &chat,
            GameSession {
                kind: GameKind::NumberGuess,
                question: "q".to_string(),
                answer: "42".to_string(),
                valid: vec!["42".to_string()],
            },
        )
        .await;

        assert_eq!(mgr.submit_answer(&chat, "10", "A").await, AnswerOutcome::TooLow);
        assert_eq!(mgr.submit_answer(&chat, "90", "A").await, AnswerOutcome::TooHigh);
        assert_eq!(
            mgr.submit_answer(&chat, "hmm", "A").await,
            AnswerOutcome::Incorrect
        );
        assert_eq!(
            mgr.submit_answer(&chat, "42", "A").await,
            AnswerOutcome::Correct { total: 1 }
        );
    }

    #[tokio::test]
    async fn number_guess_equal_but_unmatched_text_gets_no_hint() {
        let (mgr, _sink) = manager("equalhint", Duration::from_millis(50));
        let chat = ConvId("room".to_string());
        force_session(
            &mgr,
            &chat,
            GameSession {
                kind: GameKind::NumberGuess,
                question: "q".to_string(),
                answer: "42".to_string(),
                valid: vec!["42".to_string()],
            },
        )
        .await;

        // "042" and "+42" parse to the target but are not the accepted
        // string; a directional hint here would mislead.
        assert_eq!(
            mgr.submit_answer(&chat, "042", "A").await,
            AnswerOutcome::Incorrect
        );
        assert_eq!(
            mgr.submit_answer(&chat, "+42", "A").await,
            AnswerOutcome::Incorrect
        );
        assert_eq!(
            mgr.submit_answer(&chat, "42", "A").await,
            AnswerOutcome::Correct { total: 1 }
        );
    }

    #[tokio::test]
    async fn number_guess_never_times_out() {
        let (mgr, sink) = manager("notimeout", Duration::from_millis(20));
        let chat = ConvId("room".to_string());

        assert!(matches!(
            mgr.start(&chat, GameKind::NumberGuess).await,
            StartOutcome::Started { .. }
        ));
        tokio::time::sleep(Duration::from_millis(80)).await;

        // Still active: a wrong numeric guess gets a hint, not NotActive.
        let outcome = mgr.submit_answer(&chat, "0", "A").await;
        assert!(matches!(
            outcome,
            AnswerOutcome::TooLow | AnswerOutcome::TooHigh | AnswerOutcome::Correct { .. }
        ));
        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn timeout_reveals_answer_and_clears_session() {
        let (mgr, sink) = manager("timeout", Duration::from_millis(20));
        let chat = ConvId("room".to_string());

        assert!(matches!(
            mgr.start(&chat, GameKind::Trivia).await,
            StartOutcome::Started { .. }
        ));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(
            mgr.submit_answer(&chat, "anything", "A").await,
            AnswerOutcome::NotActive
        );
        let messages = sink.messages().await;
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("Waktu habis"));
    }

    #[tokio::test]
    async fn finished_game_timer_stays_silent() {
        let (mgr, sink) = manager("stale", Duration::from_millis(30));
        let chat = ConvId("room".to_string());

        assert!(matches!(
            mgr.start(&chat, GameKind::Trivia).await,
            StartOutcome::Started { .. }
        ));
        assert!(mgr.surrender(&chat).await.is_some());
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(sink.messages().await.is_empty());
    }

    #[tokio::test]
    async fn surrender_without_game_returns_none() {
        let (mgr, _sink) = manager("nosurrender", Duration::from_secs(30));
        let chat = ConvId("room".to_string());
        assert!(mgr.surrender(&chat).await.is_none());
    }

    #[test]
    fn scramble_is_a_distinct_permutation() {
        let mut rng = rand::thread_rng();
        for word in ["jendela", "ab", "matahari"] {
            for _ in 0..50 {
                let scrambled = scramble(word, &mut rng);
                assert_ne!(scrambled, word);
                let mut expected: Vec<char> = word.chars().collect();
                let mut got: Vec<char> = scrambled.chars().collect();
                expected.sort_unstable();
                got.sort_unstable();
                assert_eq!(expected, got);
            }
        }
    }

    #[test]
    fn title_case_capitalizes_each_word() {
        assert_eq!(title_case("kantong teh"), "Kantong Teh");
        assert_eq!(title_case("jam"), "Jam");
        assert_eq!(title_case("new delhi"), "New Delhi");
    }
}
