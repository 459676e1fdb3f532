//! Character-by-character reveal of narrative text.
use std::time::{Duration, Instant};

use client_frontend_core::TypewriterConfig;

/// Tracks how much narrative is revealed since the last scene change.
#[derive(Debug, Clone)]
pub struct Typewriter {
    config: TypewriterConfig,
    started: Instant,
    total: usize,
    finished: bool,
}

impl Typewriter {
    pub fn new(config: TypewriterConfig) -> Self {
        let finished = !config.enabled();
        Self {
            config,
            started: Instant::now(),
            total: 0,
            finished,
        }
    }

    /// Starts revealing from the first character.
    pub fn restart(&mut self) {
        self.started = Instant::now();
        self.finished = !self.config.enabled();
    }

    /// Number of characters the current screen wants revealed.
    pub fn set_total(&mut self, total: usize) {
        self.total = total;
    }

    pub fn finish(&mut self) {
        self.finished = true;
    }

    /// Characters that may be shown right now.
    pub fn budget(&self) -> usize {
        self.budget_after(self.started.elapsed())
    }

    fn budget_after(&self, elapsed: Duration) -> usize {
        if self.finished {
            return usize::MAX;
        }
        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        self.config.revealed_after(elapsed_ms)
    }

    pub fn is_revealing(&self) -> bool {
        !self.finished && self.budget() < self.total
    }

    /// Moves the animation forward. Returns true while a redraw is needed,
    /// including the frame that completes the reveal.
    pub fn advance(&mut self) -> bool {
        if self.finished {
            return false;
        }
        if self.budget() >= self.total {
            self.finished = true;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typewriter(cps: u32) -> Typewriter {
        Typewriter::new(TypewriterConfig {
            chars_per_second: cps,
        })
    }

    #[test]
    fn disabled_typewriter_shows_everything() {
        let mut tw = typewriter(0);
        tw.restart();
        tw.set_total(500);
        assert_eq!(tw.budget(), usize::MAX);
        assert!(!tw.is_revealing());
        assert!(!tw.advance());
    }

    #[test]
    fn budget_grows_with_time() {
        let tw = typewriter(100);
        assert_eq!(tw.budget_after(Duration::from_millis(0)), 0);
        assert_eq!(tw.budget_after(Duration::from_millis(250)), 25);
        assert_eq!(tw.budget_after(Duration::from_secs(2)), 200);
    }

    #[test]
    fn finish_skips_the_animation() {
        let mut tw = typewriter(1);
        tw.restart();
        tw.set_total(1_000);
        assert!(tw.is_revealing());
        tw.finish();
        assert!(!tw.is_revealing());
        assert_eq!(tw.budget(), usize::MAX);
    }

    #[test]
    fn advance_stops_after_completion() {
        let mut tw = typewriter(1_000);
        tw.restart();
        tw.set_total(0);
        assert!(tw.advance());
        assert!(!tw.advance());
    }
}
