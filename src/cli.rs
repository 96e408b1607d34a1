//! Command-line arguments and logging setup.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use tui_2048::types::{DEFAULT_FPS, DEFAULT_GRID_SIZE};

#[derive(Debug, Parser)]
#[command(name = "tui-2048")]
#[command(about = "Slide and merge tiles in your terminal until you reach 2048")]
pub struct Args {
    /// Size of the game grid (e.g. 4 for 4x4)
    #[arg(short, long, default_value_t = DEFAULT_GRID_SIZE)]
    pub grid_size: u8,

    /// Frames per second of the terminal view
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Path to a YAML (or .json) file with palette and timing overrides
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Seed for reproducible games
    #[arg(long)]
    pub seed: Option<u64>,

    /// Line-oriented console mode instead of the full-screen view
    #[arg(long)]
    pub plain: bool,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Install a file-backed tracing subscriber.
///
/// Without a log file nothing is installed: stdout belongs to the game.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["tui-2048"]);
        assert_eq!(args.grid_size, 4);
        assert_eq!(args.fps, 60);
        assert!(args.config.is_none());
        assert!(args.seed.is_none());
        assert!(!args.plain);
    }

    #[test]
    fn short_and_long_flags() {
        let args = Args::parse_from([
            "tui-2048", "-g", "5", "-f", "30", "-c", "ui.json", "--seed", "9", "--plain",
        ]);
        assert_eq!(args.grid_size, 5);
        assert_eq!(args.fps, 30);
        assert_eq!(args.config.as_deref(), Some(Path::new("ui.json")));
        assert_eq!(args.seed, Some(9));
        assert!(args.plain);
    }

    #[test]
    fn rejects_non_numeric_grid_size() {
        assert!(Args::try_parse_from(["tui-2048", "--grid-size", "big"]).is_err());
    }
}
