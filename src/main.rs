use anyhow::{Context, Result};
use clap::Parser;
use snake_tui::game::GameConfig;
use snake_tui::modes::HumanMode;
use snake_tui::storage::{BestScore, JsonFileStore, MemoryStore, ScoreStore};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "snake_tui")]
#[command(version, about = "Snake on a fixed grid, in your terminal")]
struct Cli {
    /// Side length of the square grid
    #[arg(long)]
    grid_size: Option<usize>,

    /// Seed for food placement (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with game settings; flags override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where to keep the best score (defaults to the user data directory)
    #[arg(long, conflicts_with = "no_persist")]
    score_file: Option<PathBuf>,

    /// Keep the best score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Write logs to this file (level from RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::from_file(path)?,
            None => GameConfig::default(),
        };
        if let Some(grid_size) = self.grid_size {
            config.grid_size = grid_size;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate().context("Invalid game configuration")?;
        Ok(config)
    }

    fn score_store(&self) -> Box<dyn ScoreStore> {
        if self.no_persist {
            return Box::new(MemoryStore::new());
        }
        if let Some(path) = &self.score_file {
            return Box::new(JsonFileStore::new(path));
        }
        match JsonFileStore::in_data_dir() {
            Ok(store) => Box::new(store),
            Err(err) => {
                warn!(error = %err, "best score will not be saved");
                Box::new(MemoryStore::new())
            }
        }
    }
}

/// Send logs to `path`; the terminal itself belongs to the game.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to open log file {:?}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;
    let best_score = BestScore::load(cli.score_store());

    let mut human_mode = HumanMode::new(config, best_score);
    human_mode.run().await?;

    Ok(())
}
