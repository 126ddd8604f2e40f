use std::time::{Duration, Instant};

/// Paces generations at a target rate and measures the rate achieved.
pub struct Ticker {
    last_tick: Instant,
    interval_smoothed: f64,
}

impl Default for Ticker {
    fn default() -> Self {
        Self {
            last_tick: Instant::now(),
            interval_smoothed: 0.,
        }
    }
}

impl Ticker {
    pub fn interval(generations_per_second: f64) -> Duration {
        Duration::from_secs_f64(1. / generations_per_second.max(f64::EPSILON))
    }

    /// Measured generations per second.
    pub fn rate(&self) -> f64 {
        if self.interval_smoothed == 0. {
            0.
        } else {
            1. / self.interval_smoothed
        }
    }

    /// Returns `None` and records a tick when the next generation is due at
    /// `now`, otherwise the time left until it is.
    pub fn poll(&mut self, now: Instant, generations_per_second: f64) -> Option<Duration> {
        let elapsed = now.saturating_duration_since(self.last_tick);
        let target = Self::interval(generations_per_second);
        if elapsed < target {
            return Some(target - elapsed);
        }

        self.interval_smoothed += (elapsed.as_secs_f64() - self.interval_smoothed) * 0.1;
        self.last_tick = now;
        None
    }

    /// Starts measuring from `now`, e.g. when the simulation is resumed.
    pub fn restart(&mut self, now: Instant) {
        self.last_tick = now;
        self.interval_smoothed = 0.;
    }
}
