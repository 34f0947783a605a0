use rand::Rng;

use super::geometry::{Geometry, Position};
use super::object::{Drawable, GameObject, Rgb, Surface};

/// The food. Lands on any cell, occupied by the snake or not.
#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    object: GameObject,
}

impl Apple {
    /// Create an apple at a random cell
    pub fn new<R: Rng + ?Sized>(geometry: &Geometry, color: Rgb, border: Rgb, rng: &mut R) -> Self {
        let mut apple = Self {
            object: GameObject::new(geometry.spawn(), color, border),
        };
        apple.relocate(geometry, rng);
        apple
    }

    pub fn position(&self) -> Position {
        self.object.position
    }

    /// Move to a cell drawn uniformly from the whole grid
    pub fn relocate<R: Rng + ?Sized>(&mut self, geometry: &Geometry, rng: &mut R) {
        let column = rng.gen_range(0..geometry.grid_width());
        let row = rng.gen_range(0..geometry.grid_height());
        self.object.position = geometry.cell_position(column, row);
    }

    #[cfg(test)]
    pub(crate) fn place_at(&mut self, position: Position) {
        self.object.position = position;
    }
}

impl Drawable for Apple {
    fn draw(&self, surface: &mut dyn Surface) {
        self.object.draw_cell(surface, self.object.position, None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::object::tests::RecordingSurface;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    const RED: Rgb = Rgb(255, 0, 0);
    const BORDER: Rgb = Rgb(93, 216, 228);

    #[test]
    fn test_relocate_stays_on_grid() {
        let geometry = Geometry::default();
        let mut rng = StdRng::seed_from_u64(7);
        let mut apple = Apple::new(&geometry, RED, BORDER, &mut rng);

        for _ in 0..500 {
            apple.relocate(&geometry, &mut rng);
            assert!(geometry.contains(apple.position()));
        }
    }

    #[test]
    fn test_relocate_reaches_every_cell() {
        let geometry = Geometry::new(60, 40, 20);
        let mut rng = StdRng::seed_from_u64(42);
        let mut apple = Apple::new(&geometry, RED, BORDER, &mut rng);

        let mut seen = HashSet::new();
        for _ in 0..1000 {
            apple.relocate(&geometry, &mut rng);
            seen.insert(apple.position());
        }

        assert_eq!(seen.len(), geometry.cell_count());
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let geometry = Geometry::default();
        let mut a = StdRng::seed_from_u64(3);
        let mut b = StdRng::seed_from_u64(3);

        let apple_a = Apple::new(&geometry, RED, BORDER, &mut a);
        let apple_b = Apple::new(&geometry, RED, BORDER, &mut b);

        assert_eq!(apple_a.position(), apple_b.position());
    }

    #[test]
    fn test_draw() {
        let geometry = Geometry::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut apple = Apple::new(&geometry, RED, BORDER, &mut rng);
        apple.place_at(Position::new(100, 60));

        let mut surface = RecordingSurface::default();
        apple.draw(&mut surface);

        assert_eq!(surface.cells, vec![(Position::new(100, 60), RED, BORDER)]);
    }
}
