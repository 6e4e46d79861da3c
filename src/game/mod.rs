//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Everything here is deterministic apart from food placement, which draws from a
//! seedable RNG owned by the engine.

pub mod action;
pub mod config;
pub mod engine;
pub mod session;
pub mod spawn;
pub mod speed;
pub mod state;
pub mod steering;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{GameConfig, SpeedConfig};
pub use engine::{GameEngine, StepInfo, StepResult};
pub use session::{GameSession, TickOutcome};
pub use spawn::spawn_food;
pub use speed::{level, tick_interval};
pub use state::{CollisionType, GameState, GameStatus, Position, Snake};
pub use steering::Steering;
