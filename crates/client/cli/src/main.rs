//! Terminal client entry point.
//!
//! Loads a level (or a single snapshot document), builds a battle session
//! and plays it hot-seat over stdin.
//!
//! ```bash
//! skirmish --data-dir data --chapter 1 --level 2
//! skirmish --snapshot battle.json
//! ```

mod app;
mod input;
mod logging;
mod presentation;

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use app::CliApp;
use clap::Parser;
use skirmish_content::{ContentFactory, SnapshotLoader};
use skirmish_core::{BattleSession, ConfigSnapshot};

/// Hot-seat grid skirmish in the terminal
#[derive(Parser, Debug)]
#[command(name = "skirmish")]
#[command(about = "Two-player turn-based grid battles", long_about = None)]
#[command(version)]
struct Args {
    /// Directory holding pieceTypes.json, maps.json, pieces.json and chapters.json
    #[arg(long, env = "SKIRMISH_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Chapter to play
    #[arg(long, env = "SKIRMISH_CHAPTER", default_value_t = ContentFactory::DEFAULT_CHAPTER)]
    chapter: u32,

    /// Level within the chapter
    #[arg(long, env = "SKIRMISH_LEVEL", default_value_t = ContentFactory::DEFAULT_LEVEL)]
    level: u32,

    /// Play a single snapshot document instead of a level
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    logging::setup_logging()?;

    let snapshot = load_snapshot(&args);
    let session = BattleSession::new(&snapshot)?;
    tracing::info!(
        width = session.map().width,
        height = session.map().height,
        units = session.units().len(),
        "battle ready"
    );

    let stdin = io::stdin();
    let mut app = CliApp::new(session, stdin.lock(), io::stdout());
    app.run()?;

    match app.session().outcome() {
        Some(outcome) => tracing::info!(%outcome, "client shutdown complete"),
        None => tracing::info!("client shutdown complete"),
    }
    Ok(())
}

/// Configuration faults never stop the game; they fall back to defaults.
fn load_snapshot(args: &Args) -> ConfigSnapshot {
    if let Some(path) = &args.snapshot {
        return match SnapshotLoader::load(path) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "snapshot unavailable, using defaults");
                ConfigSnapshot::empty()
            }
        };
    }

    ContentFactory::new(&args.data_dir).level_snapshot(args.chapter, args.level)
}
