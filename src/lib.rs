//! Arcade Snake - the classic single-screen snake game
//!
//! This library provides:
//! - Core game logic on a wrapping grid (game module)
//! - Keyboard mapping (input module)
//! - Terminal rendering (render module)
//! - Session statistics (metrics module)
//! - The interactive game loop (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
