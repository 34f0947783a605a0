use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use crate::game::{Geometry, Position, Rgb, Surface};

/// Terminal columns used for one grid cell, so cells look square
pub const COLUMNS_PER_CELL: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasCell {
    pub fill: Rgb,
    /// None for bare background
    pub border: Option<Rgb>,
}

/// In-memory surface with one entry per grid cell.
///
/// Painting is last-writer-wins, the same as blitting rectangles onto a
/// frame buffer.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    geometry: Geometry,
    cells: Vec<CanvasCell>,
}

impl CellCanvas {
    pub fn new(geometry: Geometry) -> Self {
        let blank = CanvasCell {
            fill: Rgb(0, 0, 0),
            border: None,
        };
        Self {
            geometry,
            cells: vec![blank; geometry.cell_count()],
        }
    }

    /// Grid columns, saturating at what a terminal can address
    pub fn columns(&self) -> u16 {
        u16::try_from(self.geometry.grid_width()).unwrap_or(u16::MAX)
    }

    pub fn rows(&self) -> u16 {
        u16::try_from(self.geometry.grid_height()).unwrap_or(u16::MAX)
    }

    /// Size in terminal cells
    pub fn width(&self) -> u16 {
        self.columns().saturating_mul(COLUMNS_PER_CELL)
    }

    pub fn height(&self) -> u16 {
        self.rows()
    }

    pub fn cell(&self, column: u32, row: u32) -> Option<&CanvasCell> {
        if column >= self.geometry.grid_width() || row >= self.geometry.grid_height() {
            return None;
        }
        self.cells
            .get((row * self.geometry.grid_width() + column) as usize)
    }

    fn index_of(&self, position: Position) -> Option<usize> {
        if !self.geometry.contains(position) {
            return None;
        }
        let (column, row) = self.geometry.cell_of(position);
        Some((row * self.geometry.grid_width() + column) as usize)
    }
}

impl Surface for CellCanvas {
    fn clear(&mut self, color: Rgb) {
        for cell in &mut self.cells {
            *cell = CanvasCell {
                fill: color,
                border: None,
            };
        }
    }

    fn fill_cell(&mut self, position: Position, fill: Rgb, border: Rgb) {
        if let Some(index) = self.index_of(position) {
            self.cells[index] = CanvasCell {
                fill,
                border: Some(border),
            };
        }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

impl Widget for &CellCanvas {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..self.rows().min(area.height) {
            for column in 0..self.columns() {
                let x = u32::from(area.x) + u32::from(column) * u32::from(COLUMNS_PER_CELL);
                if x + u32::from(COLUMNS_PER_CELL) > u32::from(area.right()) {
                    break;
                }
                let Ok(x) = u16::try_from(x) else {
                    break;
                };
                let Some(cell) = self.cell(u32::from(column), u32::from(row)) else {
                    continue;
                };

                let (left, right, style) = match cell.border {
                    Some(border) => ("[", "]", Style::default().fg(color(border)).bg(color(cell.fill))),
                    None => (" ", " ", Style::default().bg(color(cell.fill))),
                };
                buf.set_string(x, area.y + row, left, style);
                buf.set_string(x + 1, area.y + row, right, style);
            }
        }
    }
}
