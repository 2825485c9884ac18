//! Slink - a terminal Snake game with smooth cell-to-cell animation
//!
//! This library provides:
//! - Core simulation logic (game module): animated segments, grid occupancy,
//!   food placement
//! - Keyboard input mapping (input module)
//! - TUI rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive play loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
