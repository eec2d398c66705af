//! Session countdown and gauge timing.
//!
//! All reads are pure functions of host-supplied monotonic offsets, so
//! nothing here touches the wall clock and every edge is testable with
//! plain `Duration` values.

use std::time::Duration;

use crate::config::SessionConfig;

/// Derives the remaining countdown and the repeating gauge cycle from
/// timestamps. Holds only the session start offset; no mutable state.
#[derive(Debug, Clone, Copy)]
pub struct SessionClock {
    started_at: Duration,
    duration_secs: u64,
    gauge_cycle: Duration,
}

impl SessionClock {
    pub fn new(started_at: Duration, config: &SessionConfig) -> Self {
        Self {
            started_at,
            duration_secs: config.session_duration_secs,
            gauge_cycle: config.gauge_cycle(),
        }
    }

    pub fn started_at(&self) -> Duration {
        self.started_at
    }

    /// Remaining countdown at whole-second granularity: floor the
    /// elapsed seconds, subtract from the integer duration, clamp at 0.
    pub fn remaining_seconds(&self, now: Duration) -> u64 {
        let elapsed = now.saturating_sub(self.started_at);
        self.duration_secs.saturating_sub(elapsed.as_secs())
    }

    /// Sawtooth in [0, 1]: 1 at the reset instant, falling to 0 as the
    /// gauge cycle elapses, then snapping back to 1.
    pub fn gauge_fraction(&self, now: Duration, last_reset: Duration) -> f64 {
        let cycle = self.gauge_cycle.as_secs_f64();
        let since = now.saturating_sub(last_reset).as_secs_f64();
        1.0 - (since % cycle) / cycle
    }

    /// True once a full gauge cycle has elapsed since the last reset;
    /// the trigger for a timeout-driven prompt rotation.
    pub fn gauge_expired(&self, now: Duration, last_reset: Duration) -> bool {
        now.saturating_sub(last_reset) >= self.gauge_cycle
    }
}

/// Countdown text in the renderer's `MM:SS` form.
pub fn format_mmss(remaining_seconds: u64) -> String {
    let minutes = remaining_seconds / 60;
    let seconds = remaining_seconds % 60;
    format!("{:02}:{:02}", minutes, seconds)
}
