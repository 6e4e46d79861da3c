//! Snake on a fixed square grid, played in the terminal
//!
//! This library provides:
//! - Core game logic: stepping, collisions, food placement, speed scaling (game module)
//! - Best-score persistence (storage module)
//! - Keyboard mapping (input module)
//! - TUI rendering (render module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
pub mod storage;
