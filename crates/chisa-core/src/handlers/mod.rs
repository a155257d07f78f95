//! Command handlers, grouped by feature area, plus the wiring that binds
//! command names to them.

pub mod fun;
pub mod games;
pub mod group;
pub mod media;
pub mod menu;
pub mod utility;

use std::sync::Arc;

use crate::game::GameManager;
use crate::ports::{GroupDirectory, LinkDownloader, LinkShortener, MediaConverter};
use crate::registry::CommandRegistry;
use crate::store::{AutoTagStore, WarnStore};

/// Shared collaborators injected into the handler set.
pub struct HandlerDeps {
    pub games: GameManager,
    pub warns: Arc<WarnStore>,
    pub autotag: Arc<AutoTagStore>,
    pub directory: Arc<dyn GroupDirectory>,
    pub converter: Arc<dyn MediaConverter>,
    pub downloader: Arc<dyn LinkDownloader>,
    pub shortener: Arc<dyn LinkShortener>,
}

/// Builds the full command table.
pub fn build_registry(deps: HandlerDeps) -> CommandRegistry {
    let mut registry = CommandRegistry::new();

    let game = Arc::new(games::GameCommands::new(deps.games));
    registry.register_aliases(
        &[
            "tebakkata",
            "tebakibukota",
            "tebaknegara",
            "tebakbenda",
            "tebakbendera",
            "tebakangka",
            "kuis",
            "nyerah",
            "skip",
            "leaderboard",
            "lb",
        ],
        game,
    );

    let fun = Arc::new(fun::FunCommands::new(Arc::clone(&deps.directory)));
    registry.register_aliases(
        &[
            "kerangajaib",
            "cekkhodam",
            "cekjodoh",
            "rate",
            "roast",
            "seberapa",
            "siapadia",
        ],
        fun,
    );

    let group = Arc::new(group::GroupCommands::new(
        deps.warns,
        deps.autotag,
        Arc::clone(&deps.directory),
    ));
    registry.register_aliases(
        &["tagall", "warn", "resetwarn", "kick", "usir", "autotag"],
        group,
    );

    let media = Arc::new(media::MediaCommands::new(deps.converter, deps.downloader));
    registry.register_aliases(
        &[
            "sticker", "s", "toimg", "show", "showimg", "rv", "dl", "tiktok", "tt", "ig",
            "instagram", "ytmp4", "mp3",
            "ytmp3",
        ],
        media,
    );

    let utility = Arc::new(utility::UtilityCommands::new(deps.shortener));
    registry.register_aliases(&["pick", "pilih", "short", "shorten", "pendek"], utility);

    registry.register_aliases(&["menu", "help"], Arc::new(menu::MenuCommands));

    registry
}
