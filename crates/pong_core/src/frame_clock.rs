//! Frame pacing
//!
//! Sleeps away whatever is left of the frame budget so the loop never runs faster
//! than the target rate. There is no lower bound: a slow frame is simply late.

use std::time::{Duration, Instant};

/// Default target frame rate
pub const DEFAULT_FPS: u32 = 60;

/// Caps loop iterations at a fixed rate
#[derive(Debug, Clone)]
pub struct FrameClock {
    budget: Duration,
    last_tick: Option<Instant>,
}

impl FrameClock {
    /// Create a clock targeting `fps` frames per second
    ///
    /// `fps == 0` disables the cap.
    pub fn new(fps: u32) -> Self {
        let budget = if fps == 0 {
            Duration::ZERO
        } else {
            Duration::from_nanos(1_000_000_000 / u64::from(fps))
        };
        Self {
            budget,
            last_tick: None,
        }
    }

    /// Minimum time between two ticks
    pub fn frame_budget(&self) -> Duration {
        self.budget
    }

    /// Block until the frame budget since the previous tick has elapsed
    ///
    /// Returns the time between the previous tick and this one. The first tick
    /// never sleeps and returns zero.
    pub fn tick(&mut self) -> Duration {
        let Some(last) = self.last_tick else {
            self.last_tick = Some(Instant::now());
            return Duration::ZERO;
        };

        let elapsed = last.elapsed();
        if elapsed < self.budget {
            std::thread::sleep(self.budget - elapsed);
        }

        let now = Instant::now();
        self.last_tick = Some(now);
        now - last
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_for_60_fps() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.frame_budget(), Duration::from_nanos(16_666_666));
    }

    #[test]
    fn test_zero_fps_is_uncapped() {
        let mut clock = FrameClock::new(0);
        assert_eq!(clock.frame_budget(), Duration::ZERO);
        clock.tick();
        let start = Instant::now();
        for _ in 0..100 {
            clock.tick();
        }
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_first_tick_does_not_sleep() {
        let mut clock = FrameClock::new(1);
        let start = Instant::now();
        assert_eq!(clock.tick(), Duration::ZERO);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_tick_waits_out_budget() {
        let mut clock = FrameClock::new(50);
        clock.tick();
        let dt = clock.tick();
        assert!(dt >= Duration::from_millis(20), "dt was {:?}", dt);
    }

    #[test]
    fn test_sleeps_only_remaining_budget() {
        let mut clock = FrameClock::new(1);
        clock.tick();
        std::thread::sleep(Duration::from_millis(30));
        let before = Instant::now();
        clock.tick();
        // Budget is one second; only the remainder may be slept
        assert!(before.elapsed() < Duration::from_millis(1000));
        assert!(before.elapsed() >= Duration::from_millis(900));
    }
}
