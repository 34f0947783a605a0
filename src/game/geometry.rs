use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell-aligned pixel position on the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Maps a fixed-size screen onto a grid of square cells.
///
/// Grid dimensions use integer division; leftover pixels on the right and
/// bottom edges are never addressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub screen_width: u32,
    pub screen_height: u32,
    pub cell_size: u32,
}

impl Geometry {
    pub fn new(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            cell_size,
        }
    }

    /// Number of columns
    pub fn grid_width(&self) -> u32 {
        self.screen_width / self.cell_size
    }

    /// Number of rows
    pub fn grid_height(&self) -> u32 {
        self.screen_height / self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.grid_width() as usize * self.grid_height() as usize
    }

    /// Pixel position of the cell at (column, row)
    pub fn cell_position(&self, column: u32, row: u32) -> Position {
        Position::new(
            (column * self.cell_size) as i32,
            (row * self.cell_size) as i32,
        )
    }

    /// (column, row) of a cell-aligned position
    pub fn cell_of(&self, pos: Position) -> (u32, u32) {
        let size = self.cell_size as i32;
        ((pos.x / size) as u32, (pos.y / size) as u32)
    }

    /// The cell at the middle of the grid, where the snake spawns
    pub fn spawn(&self) -> Position {
        self.cell_position(self.grid_width() / 2, self.grid_height() / 2)
    }

    /// One cell further in `direction`, wrapping around the edges.
    ///
    /// Wraps over the addressable span (`grid_width * cell_size`), so a screen
    /// that is not a whole number of cells still yields aligned positions.
    pub fn advance(&self, pos: Position, direction: Direction) -> Position {
        let size = self.cell_size as i32;
        let span_x = self.grid_width() as i32 * size;
        let span_y = self.grid_height() as i32 * size;
        let (dx, dy) = direction.delta();
        let moved = pos.moved_by(dx * size, dy * size);

        Position::new(moved.x.rem_euclid(span_x), moved.y.rem_euclid(span_y))
    }

    /// True if the position lies on a cell of this grid
    pub fn contains(&self, pos: Position) -> bool {
        let size = self.cell_size as i32;
        pos.x >= 0
            && pos.y >= 0
            && pos.x % size == 0
            && pos.y % size == 0
            && pos.x < self.grid_width() as i32 * size
            && pos.y < self.grid_height() as i32 * size
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::new(640, 480, 20)
    }
}
