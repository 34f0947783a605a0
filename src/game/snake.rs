use std::collections::VecDeque;

use super::action::Direction;
use super::geometry::{Geometry, Position};
use super::object::{Drawable, GameObject, Rgb, Surface};

/// What a single step did to the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Slid forward, length unchanged
    Moved,
    /// Head advanced without dropping the tail
    Grew,
    /// Ran into its own body and started over at the spawn cell
    Reset,
}

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Spawn cell and colors
    object: GameObject,
    head_color: Rgb,
    geometry: Geometry,
    /// Target length; the body catches up one segment per step
    pub length: usize,
    /// Body segments, with head at index 0
    positions: VecDeque<Position>,
    pub direction: Direction,
    pub next_direction: Option<Direction>,
}

impl Snake {
    /// A one-segment snake at the middle of the grid, heading right
    pub fn new(geometry: Geometry, body_color: Rgb, head_color: Rgb, border: Rgb) -> Self {
        let spawn = geometry.spawn();

        Self {
            object: GameObject::new(spawn, body_color, border),
            head_color,
            geometry,
            length: 1,
            positions: VecDeque::from([spawn]),
            direction: Direction::Right,
            next_direction: None,
        }
    }

    pub fn spawn_position(&self) -> Position {
        self.object.position
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.positions[0]
    }

    /// Body segments, head first
    pub fn positions(&self) -> impl ExactSizeIterator<Item = &Position> + '_ {
        self.positions.iter()
    }

    /// Number of segments currently on the board
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Never true; a snake always has a head
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Queue a turn for the next step. A 180-degree turn is ignored.
    pub fn request_direction(&mut self, direction: Direction) {
        if !self.direction.is_opposite(direction) {
            self.next_direction = Some(direction);
        }
    }

    /// Raise the target length by one, unless it is already `max`.
    /// Returns whether the length changed.
    pub fn grow(&mut self, max: usize) -> bool {
        if self.length >= max {
            return false;
        }
        self.length += 1;
        true
    }

    /// Advance one cell
    pub fn step(&mut self) -> StepOutcome {
        if let Some(direction) = self.next_direction.take() {
            self.direction = direction;
        }

        let new_head = self.geometry.advance(self.head(), self.direction);

        // head and neck can't be hit
        if self.positions.iter().skip(2).any(|&segment| segment == new_head) {
            self.reset();
            return StepOutcome::Reset;
        }

        self.positions.push_front(new_head);
        if self.positions.len() > self.length {
            self.positions.pop_back();
            StepOutcome::Moved
        } else {
            StepOutcome::Grew
        }
    }

    /// Back to a single segment at the spawn cell, heading right
    pub fn reset(&mut self) {
        self.length = 1;
        self.positions.clear();
        self.positions.push_back(self.object.position);
        self.direction = Direction::Right;
        self.next_direction = None;
    }

    #[cfg(test)]
    pub(crate) fn from_segments(
        geometry: Geometry,
        segments: &[Position],
        direction: Direction,
    ) -> Self {
        let green = Rgb(0, 255, 0);
        let mut snake = Self::new(geometry, green, green, Rgb::WHITE);
        snake.positions = segments.iter().copied().collect();
        snake.length = segments.len();
        snake.direction = direction;
        snake
    }
}

impl Drawable for Snake {
    /// Every segment but the tail in the body color, then the head on top
    fn draw(&self, surface: &mut dyn Surface) {
        let shown = self.positions.len().saturating_sub(1);
        for &position in self.positions.iter().take(shown) {
            self.object.draw_cell(surface, position, None);
        }

        self.object
            .draw_cell(surface, self.head(), Some(self.head_color));
    }
}
