//! Session tuning configuration and tick cadence constants.
//!
//! All timing and matching knobs live here so nothing in the engine
//! carries hardcoded magic numbers. Values are fixed at session
//! construction and never change mid-session.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, SessionError};

/// Host frame cadence in milliseconds (delay between tick invocations).
pub const TICK_MS: u64 = 15;

/// Approximate ticks per second at the standard cadence.
pub const TICKS_PER_SECOND: u64 = 1000 / TICK_MS;

// Compile-time validation: the engine is specified for a 60-70 Hz host loop.
const _: () = assert!(TICKS_PER_SECOND >= 60 && TICKS_PER_SECOND <= 70);

/// Per-session constants, fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Total session duration in whole seconds.
    pub session_duration_secs: u64,
    /// Gauge cycle duration in seconds; a cycle without a match forces
    /// a prompt rotation.
    pub gauge_cycle_secs: f64,
    /// Confidence a classification must exceed (strictly) to match.
    pub match_threshold: f32,
    /// Seconds that must elapse (strictly) after a match before the
    /// next match counts.
    pub match_cooldown_secs: f64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            session_duration_secs: 60,
            gauge_cycle_secs: 5.0,
            match_threshold: 0.8,
            match_cooldown_secs: 2.0,
        }
    }
}

impl SessionConfig {
    pub fn session_duration(&self) -> Duration {
        Duration::from_secs(self.session_duration_secs)
    }

    pub fn gauge_cycle(&self) -> Duration {
        Duration::from_secs_f64(self.gauge_cycle_secs)
    }

    pub fn match_cooldown(&self) -> Duration {
        Duration::from_secs_f64(self.match_cooldown_secs)
    }

    /// Reject configs the engine cannot run with (zero durations,
    /// thresholds outside [0, 1]).
    pub fn validate(&self) -> Result<()> {
        if self.session_duration_secs == 0 {
            return Err(SessionError::InvalidConfig(
                "session duration must be positive".into(),
            ));
        }
        if !(self.gauge_cycle_secs > 0.0) {
            return Err(SessionError::InvalidConfig(
                "gauge cycle must be positive".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.match_threshold) {
            return Err(SessionError::InvalidConfig(
                "match threshold must be in [0, 1]".into(),
            ));
        }
        if self.match_cooldown_secs < 0.0 {
            return Err(SessionError::InvalidConfig(
                "match cooldown must be non-negative".into(),
            ));
        }
        Ok(())
    }
}
