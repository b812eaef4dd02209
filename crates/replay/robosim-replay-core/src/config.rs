//! Core configuration for robosim-replay-core.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ReplayError;
use crate::ids::ObjectTag;

/// Playback configuration. Missing JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seconds between ticks. Recordings are captured at roughly 24 frames
    /// per second, so one frame lasts ~0.04s.
    pub tick_interval_secs: f64,

    /// Upper bound on ticks run by a single [`crate::FixedTicker::advance`].
    pub max_ticks_per_advance: u32,

    /// Emit a debug record for every per-object dispatch.
    pub log_dispatch: bool,

    /// Object categories collected by the scene scan, in scan order.
    pub scan_tags: Vec<ObjectTag>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_interval_secs: 0.04,
            max_ticks_per_advance: 8,
            log_dispatch: true,
            scan_tags: ObjectTag::ALL.to_vec(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ReplayError> {
        let cfg: Config = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ReplayError> {
        if !self.tick_interval_secs.is_finite()
            || self.tick_interval_secs <= 0.0
            || Duration::try_from_secs_f64(self.tick_interval_secs).map_or(true, |d| d.is_zero())
        {
            return Err(ReplayError::InvalidConfig(format!(
                "tick_interval_secs must be positive, got {}",
                self.tick_interval_secs
            )));
        }
        if self.max_ticks_per_advance == 0 {
            return Err(ReplayError::InvalidConfig(
                "max_ticks_per_advance must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
