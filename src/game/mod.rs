//! Core game logic module for Snake
//!
//! This module contains all the simulation logic without any I/O or rendering
//! dependencies. Segments animate smoothly between cells; the grid occupancy
//! map is the single source of truth for collisions and food.

pub mod config;
pub mod direction;
pub mod engine;
pub mod food;
pub mod grid;
pub mod rng;
pub mod snake;
pub mod tween;

// Re-export commonly used types
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{GameEngine, Outcome, TickResult};
pub use food::Food;
pub use grid::{Cell, CellTag, Grid};
pub use rng::GameRng;
pub use snake::{Segment, SnakeBody, SnakeEvent};
pub use tween::{PointF, Tween};
