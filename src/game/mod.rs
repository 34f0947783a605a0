//! Core game logic module for Snake
//!
//! Board state, movement and drawing policy live here without any terminal
//! dependencies. Rendering goes through the [`Surface`] trait.

pub mod action;
pub mod apple;
pub mod config;
pub mod engine;
pub mod geometry;
pub mod object;
pub mod snake;

// Re-export commonly used types
pub use action::Direction;
pub use apple::Apple;
pub use config::{ConfigError, GameConfig, Palette};
pub use engine::{GameEngine, TickOutcome};
pub use geometry::{Geometry, Position};
pub use object::{Drawable, GameObject, Rgb, Surface};
pub use snake::{Snake, StepOutcome};
