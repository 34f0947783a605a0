use std::time::{Duration, Instant};

/// Session statistics for the status line
pub struct GameMetrics {
    pub start_time: Instant,
    pub elapsed_time: Duration,
    pub length: usize,
    pub best_length: usize,
    pub resets: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            elapsed_time: Duration::ZERO,
            length: 1,
            best_length: 1,
            resets: 0,
        }
    }

    pub fn update(&mut self, length: usize) {
        self.elapsed_time = self.start_time.elapsed();
        self.length = length;
        self.best_length = self.best_length.max(length);
    }

    /// A run ended, either by self-collision or restart
    pub fn on_reset(&mut self, final_length: usize) {
        self.resets += 1;
        self.best_length = self.best_length.max(final_length);
        self.length = 1;
        self.start_time = Instant::now();
        self.elapsed_time = Duration::ZERO;
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}
