use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Largest accepted board side; food placement scans every cell
pub const MAX_GRID_SIZE: usize = 256;

/// Shortest snake a game may start with
pub const MIN_SNAKE_LENGTH: usize = 3;

/// Tick timing parameters used by [`tick_interval`](super::tick_interval)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeedConfig {
    /// Tick length at score zero, in milliseconds
    pub base_tick_ms: u64,
    /// Floor for the tick length, in milliseconds
    pub min_tick_ms: u64,
    /// Milliseconds shaved off per level
    pub speedup_step_ms: u64,
    /// Points needed to gain a level
    pub speedup_every_points: u32,
}

impl Default for SpeedConfig {
    fn default() -> Self {
        Self {
            base_tick_ms: 150,
            min_tick_ms: 80,
            speedup_step_ms: 8,
            speedup_every_points: 5,
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid, in cells
    pub grid_size: usize,
    /// Initial length of the snake
    pub initial_snake_length: usize,
    /// Tick timing
    pub speed: SpeedConfig,
    /// Seed for food placement; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: 24,
            initial_snake_length: 3,
            speed: SpeedConfig::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(grid_size: usize) -> Self {
        Self {
            grid_size,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10)
    }

    /// Same configuration with a fixed food seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config: GameConfig = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the engine cannot start from
    pub fn validate(&self) -> Result<()> {
        ensure!(self.grid_size >= 2, "grid size must be at least 2");
        ensure!(
            self.grid_size <= MAX_GRID_SIZE,
            "grid size {} exceeds the maximum of {}",
            self.grid_size,
            MAX_GRID_SIZE
        );
        ensure!(
            self.initial_snake_length >= MIN_SNAKE_LENGTH,
            "initial snake length must be at least {}",
            MIN_SNAKE_LENGTH
        );
        ensure!(
            self.initial_snake_length <= self.grid_size / 2 + 1,
            "initial snake of length {} does not fit a {}x{} grid",
            self.initial_snake_length,
            self.grid_size,
            self.grid_size
        );
        ensure!(
            self.speed.speedup_every_points > 0,
            "speedup_every_points must be positive"
        );
        ensure!(self.speed.min_tick_ms > 0, "min_tick_ms must be positive");
        ensure!(
            self.speed.min_tick_ms <= self.speed.base_tick_ms,
            "min_tick_ms ({}) exceeds base_tick_ms ({})",
            self.speed.min_tick_ms,
            self.speed.base_tick_ms
        );
        Ok(())
    }

    /// Total number of cells on the board
    pub fn cell_count(&self) -> usize {
        self.grid_size * self.grid_size
    }
}
