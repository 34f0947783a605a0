use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::geometry::Geometry;
use super::object::Rgb;
use crate::render::canvas::COLUMNS_PER_CELL;

/// Colors used to paint the board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub apple: Rgb,
    pub snake: Rgb,
    /// Head is repainted in this color after the body
    pub snake_head: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb(0, 0, 0),
            border: Rgb(93, 216, 228),
            apple: Rgb(255, 0, 0),
            snake: Rgb(0, 255, 0),
            snake_head: Rgb(0, 255, 0),
        }
    }
}

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Screen width in pixels
    pub screen_width: u32,
    /// Screen height in pixels
    pub screen_height: u32,
    /// Side of one grid cell in pixels
    pub cell_size: u32,
    /// Ticks per second
    pub speed: u32,
    /// Shown as the title of the board
    pub title: String,
    pub palette: Palette,
    /// Fixed RNG seed; random when unset
    pub seed: Option<u64>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("cell size must be non-zero")]
    ZeroCellSize,
    #[error("screen {width}x{height} is smaller than one {cell_size}px cell")]
    ScreenTooSmall {
        width: u32,
        height: u32,
        cell_size: u32,
    },
    #[error("speed must be at least one tick per second")]
    ZeroSpeed,
    #[error("{columns}x{rows} grid does not fit a terminal")]
    GridTooLarge { columns: u32, rows: u32 },
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: 20,
            title: "Snake".to_string(),
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom screen size
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Default::default()
        }
    }

    /// A small deterministic board for testing
    pub fn small() -> Self {
        Self {
            seed: Some(0),
            ..Self::new(200, 200)
        }
    }

    /// Read a JSON config; missing fields keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            return Err(ConfigError::ScreenTooSmall {
                width: self.screen_width,
                height: self.screen_height,
                cell_size: self.cell_size,
            });
        }
        if self.speed == 0 {
            return Err(ConfigError::ZeroSpeed);
        }

        // Board plus its frame must be addressable in terminal cells
        let geometry = self.geometry();
        let (columns, rows) = (geometry.grid_width(), geometry.grid_height());
        let frame_width = u64::from(columns) * u64::from(COLUMNS_PER_CELL) + 2;
        let frame_height = u64::from(rows) + 2;
        if frame_width > u64::from(u16::MAX) || frame_height > u64::from(u16::MAX) {
            return Err(ConfigError::GridTooLarge { columns, rows });
        }
        Ok(())
    }

    pub fn geometry(&self) -> Geometry {
        Geometry::new(self.screen_width, self.screen_height, self.cell_size)
    }

    /// Duration of one tick
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.speed.max(1)
    }
}
