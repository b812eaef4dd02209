//! Fixed-rate tick accumulator for hosts without a fixed-step scheduler.

use crate::config::Config;

/// Converts variable frame deltas into whole replay ticks.
#[derive(Clone, Debug)]
pub struct FixedTicker {
    interval: f64,
    max_ticks: u32,
    accumulator: f64,
}

impl FixedTicker {
    pub fn new(interval_secs: f64, max_ticks: u32) -> Self {
        Self {
            interval: interval_secs,
            max_ticks: max_ticks.max(1),
            accumulator: 0.0,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(cfg.tick_interval_secs, cfg.max_ticks_per_advance)
    }

    /// Add `dt` seconds and return how many ticks are due. Time beyond
    /// `max_ticks` intervals is dropped rather than replayed as a burst.
    pub fn advance(&mut self, dt: f64) -> u32 {
        if !(self.interval > 0.0) || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt;
        let due = (self.accumulator / self.interval).floor();
        if due >= f64::from(self.max_ticks) {
            self.accumulator = 0.0;
            return self.max_ticks;
        }
        let due = due as u32;
        self.accumulator -= f64::from(due) * self.interval;
        due
    }
}
