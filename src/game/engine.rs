use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{
    action::Direction,
    apple::Apple,
    config::{GameConfig, Palette},
    geometry::Geometry,
    object::{Drawable, Surface},
    snake::{Snake, StepOutcome},
};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// The head landed on the apple
    pub ate_apple: bool,
    /// The snake bit itself and started over
    pub reset: bool,
}

/// Owns the board and advances it one tick at a time
pub struct GameEngine {
    geometry: Geometry,
    palette: Palette,
    snake: Snake,
    apple: Apple,
    rng: StdRng,
    cap_logged: bool,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: &GameConfig) -> Self {
        let geometry = config.geometry();
        let palette = config.palette.clone();
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let snake = Snake::new(geometry, palette.snake, palette.snake_head, palette.border);
        let apple = Apple::new(&geometry, palette.apple, palette.border, &mut rng);

        Self {
            geometry,
            palette,
            snake,
            apple,
            rng,
            cap_logged: false,
        }
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn apple(&self) -> &Apple {
        &self.apple
    }

    /// Forward a turn request to the snake
    pub fn steer(&mut self, direction: Direction) {
        self.snake.request_direction(direction);
    }

    /// Start the snake over without touching the apple
    pub fn restart(&mut self) {
        info!("restart requested at length {}", self.snake.length);
        self.snake.reset();
    }

    /// Move the snake, then let it eat if it reached the apple
    pub fn tick(&mut self) -> TickOutcome {
        let length_before = self.snake.length;
        let mut outcome = TickOutcome::default();

        if self.snake.step() == StepOutcome::Reset {
            info!("snake hit itself at length {length_before}, starting over");
            outcome.reset = true;
        }

        if self.snake.head() == self.apple.position() {
            outcome.ate_apple = true;
            if self.snake.grow(self.geometry.cell_count()) {
                debug!("apple eaten, length now {}", self.snake.length);
            } else if !self.cap_logged {
                info!("snake length capped at {} cells", self.geometry.cell_count());
                self.cap_logged = true;
            }
            self.apple.relocate(&self.geometry, &mut self.rng);
        }

        outcome
    }

    /// Paint the whole frame
    pub fn draw(&self, surface: &mut dyn Surface) {
        surface.clear(self.palette.background);
        self.snake.draw(surface);
        self.apple.draw(surface);
    }

    #[cfg(test)]
    pub(crate) fn snake_mut(&mut self) -> &mut Snake {
        &mut self.snake
    }

    #[cfg(test)]
    pub(crate) fn apple_mut(&mut self) -> &mut Apple {
        &mut self.apple
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::Position;
    use crate::game::object::tests::RecordingSurface;

    fn engine() -> GameEngine {
        GameEngine::new(&GameConfig::small())
    }

    #[test]
    fn test_new_game() {
        let engine = engine();
        assert_eq!(engine.snake().length, 1);
        assert_eq!(engine.snake().head(), Position::new(100, 100));
        assert!(engine.geometry().contains(engine.apple().position()));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        engine.apple_mut().place_at(Position::new(0, 0));

        let outcome = engine.tick();

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(engine.snake().head(), Position::new(120, 100));
    }

    #[test]
    fn test_apple_consumption() {
        let mut engine = engine();
        engine.apple_mut().place_at(Position::new(120, 100));

        let outcome = engine.tick();

        assert!(outcome.ate_apple);
        assert_eq!(engine.snake().length, 2);
        // Body catches up on the following step
        assert_eq!(engine.snake().len(), 1);

        engine.apple_mut().place_at(Position::new(0, 0));
        engine.tick();
        assert_eq!(engine.snake().len(), 2);
    }

    #[test]
    fn test_eating_relocates_apple_on_grid() {
        let mut engine = engine();
        for _ in 0..8 {
            let ahead = engine
                .geometry()
                .advance(engine.snake().head(), engine.snake().direction);
            engine.apple_mut().place_at(ahead);
            let before = engine.snake().length;

            assert!(engine.tick().ate_apple);
            assert_eq!(engine.snake().length, before + 1);
            assert!(engine.geometry().contains(engine.apple().position()));
        }
    }

    #[test]
    fn test_steer_rejects_reversal() {
        let mut engine = engine();
        engine.apple_mut().place_at(Position::new(0, 0));

        engine.steer(Direction::Left);
        engine.tick();

        assert_eq!(engine.snake().direction, Direction::Right);
        assert_eq!(engine.snake().head(), Position::new(120, 100));
    }

    #[test]
    fn test_self_collision_reported() {
        let mut engine = engine();
        engine.apple_mut().place_at(Position::new(0, 0));
        engine.snake_mut().length = 5;
        for _ in 0..4 {
            engine.tick();
        }

        engine.steer(Direction::Down);
        engine.tick();
        engine.steer(Direction::Left);
        engine.tick();
        engine.steer(Direction::Up);
        let outcome = engine.tick();

        assert!(outcome.reset);
        assert_eq!(engine.snake().length, 1);
        assert_eq!(engine.snake().head(), engine.geometry().spawn());
    }

    #[test]
    fn test_length_capped_at_cell_count() {
        let config = GameConfig {
            seed: Some(5),
            ..GameConfig::new(40, 20)
        };
        let mut engine = GameEngine::new(&config);
        assert_eq!(engine.geometry().cell_count(), 2);

        // A 2x1 board never resets once full; the cap keeps it sliding
        for _ in 0..4 {
            let ahead = engine
                .geometry()
                .advance(engine.snake().head(), engine.snake().direction);
            engine.apple_mut().place_at(ahead);
            assert!(!engine.tick().reset);
            assert!(engine.snake().length <= 2);
        }
    }

    #[test]
    fn test_restart() {
        let mut engine = engine();
        engine.snake_mut().length = 4;
        engine.steer(Direction::Up);

        engine.restart();

        assert_eq!(engine.snake().length, 1);
        assert_eq!(engine.snake().next_direction, None);
        assert_eq!(engine.snake().head(), engine.geometry().spawn());
    }

    #[test]
    fn test_draw_order() {
        let mut engine = engine();
        engine.apple_mut().place_at(Position::new(20, 20));

        let mut surface = RecordingSurface::default();
        engine.draw(&mut surface);

        let palette = Palette::default();
        assert_eq!(surface.cleared, vec![palette.background]);
        assert_eq!(
            surface.cells,
            vec![
                (Position::new(100, 100), palette.snake_head, palette.border),
                (Position::new(20, 20), palette.apple, palette.border),
            ]
        );
    }
}
