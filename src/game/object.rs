use serde::{Deserialize, Serialize};

use super::geometry::Position;

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Something the game can paint cells onto.
///
/// Positions are pixel coordinates of a cell's top-left corner; the surface
/// knows the cell size. Later calls paint over earlier ones.
pub trait Surface {
    /// Fill the whole surface
    fn clear(&mut self, color: Rgb);

    /// Fill one cell and outline it with `border`
    fn fill_cell(&mut self, position: Position, fill: Rgb, border: Rgb);
}

/// Anything that knows how to paint itself
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// Shared state of everything on the board: where it is and how it looks
#[derive(Debug, Clone, PartialEq)]
pub struct GameObject {
    pub position: Position,
    pub body_color: Rgb,
    pub border_color: Rgb,
}

impl GameObject {
    pub fn new(position: Position, body_color: Rgb, border_color: Rgb) -> Self {
        Self {
            position,
            body_color,
            border_color,
        }
    }

    /// Paint a single cell, in `color` if given, otherwise in the body color
    pub fn draw_cell(&self, surface: &mut dyn Surface, position: Position, color: Option<Rgb>) {
        surface.fill_cell(
            position,
            color.unwrap_or(self.body_color),
            self.border_color,
        );
    }
}
