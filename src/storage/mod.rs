//! Best-score persistence
//!
//! One non-negative integer survives between runs. Every failure path here is
//! best effort: the game keeps going with an in-memory value.

pub mod best_score;
pub mod store;

pub use best_score::BestScore;
pub use store::{JsonFileStore, MemoryStore, ScoreStore, StoreError};
