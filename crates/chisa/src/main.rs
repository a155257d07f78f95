mod console;

use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use chisa_core::config::Config;
use chisa_core::dispatch::Dispatcher;
use chisa_core::domain::MessageEvent;
use chisa_core::game::GameManager;
use chisa_core::handlers::{build_registry, HandlerDeps};
use chisa_core::ratelimit::RateLimiter;
use chisa_core::router::CommandParser;
use chisa_core::store::{AutoTagStore, ScoreStore, WarnStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    chisa_core::logging::init("chisa").context("logging init failed")?;

    let cfg = Config::load();
    info!(data_dir = %cfg.data_dir.display(), "starting chisa");

    let scores = Arc::new(ScoreStore::load(
        cfg.leaderboard_file.clone(),
        cfg.score_reset_days,
    ));
    let warns = Arc::new(WarnStore::load(cfg.warn_file.clone()));
    let autotag = Arc::new(AutoTagStore::load(cfg.autotag_file.clone()));
    let _autosave = scores.spawn_autosave(cfg.autosave_interval);

    let sink = console::sink();
    let games = GameManager::new(Arc::clone(&scores), Arc::clone(&sink), cfg.game_timeout);

    let registry = build_registry(HandlerDeps {
        games: games.clone(),
        warns,
        autotag,
        directory: Arc::new(console::ConsoleDirectory),
        converter: Arc::new(console::OfflineConverter),
        downloader: Arc::new(console::OfflineDownloader),
        shortener: Arc::new(console::OfflineShortener),
    });

    let dispatcher = Dispatcher::new(
        CommandParser::new(cfg.prefixes.clone()),
        RateLimiter::new(cfg.user_cooldown, cfg.chat_limit, cfg.chat_window),
        Arc::new(registry),
        games,
        sink,
    );

    println!("chisa console mode. Type commands (.menu for the list), Ctrl-D to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("stdin read failed")? {
        let mut event = MessageEvent::text(console::CONSOLE_SENDER, console::CONSOLE_CHAT, &line);
        event.sender_name = console::CONSOLE_SENDER.to_string();
        dispatcher.handle_event(event).await;
    }

    info!("stdin closed, shutting down");
    Ok(())
}
