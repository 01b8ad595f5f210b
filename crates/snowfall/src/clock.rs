//! Frame timing.

use std::time::{Duration, Instant};

use snowfall_core::Elapsed;

/// Measures the time between consecutive ticks.
#[derive(Debug)]
pub struct FrameClock {
    /// When the previous tick happened.
    last: Instant,
    /// Upper bound for a single step, if any.
    max_delta: Option<Duration>,
}

impl FrameClock {
    /// Create a clock. A `max_delta` of zero disables clamping.
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last: Instant::now(),
            max_delta: (!max_delta.is_zero()).then_some(max_delta),
        }
    }

    /// Restart measuring from now.
    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    /// Time since the previous tick (or since construction/reset).
    pub fn tick(&mut self) -> Elapsed {
        self.tick_at(Instant::now())
    }

    /// Tick with an explicit timestamp. Going back in time yields zero.
    pub fn tick_at(&mut self, now: Instant) -> Elapsed {
        let mut delta = now.saturating_duration_since(self.last);
        if let Some(max) = self.max_delta {
            delta = delta.min(max);
        }
        self.last = now;
        Elapsed::from_duration(delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_measures_since_last() {
        let mut clock = FrameClock::new(Duration::ZERO);
        let start = clock.last;

        let elapsed = clock.tick_at(start + Duration::from_millis(40));
        assert!((elapsed.as_secs() - 0.04).abs() < 1e-6);

        let elapsed = clock.tick_at(start + Duration::from_millis(100));
        assert!((elapsed.as_secs() - 0.06).abs() < 1e-6);
    }

    #[test]
    fn test_tick_is_clamped() {
        let mut clock = FrameClock::new(Duration::from_millis(250));
        let start = clock.last;
        let elapsed = clock.tick_at(start + Duration::from_secs(30));
        assert!((elapsed.as_secs() - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_tick_never_negative() {
        let mut clock = FrameClock::new(Duration::ZERO);
        let start = clock.last;
        clock.tick_at(start + Duration::from_millis(10));
        assert!(clock.tick_at(start).is_zero());
    }
}
