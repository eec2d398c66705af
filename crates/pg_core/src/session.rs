//! Play session state machine.
//!
//! Owns the score, the current prompt and the timing state, and turns
//! per-frame classifications into score events, prompt rotations and a
//! single terminal event. The host's update loop owns the session
//! exclusively and calls [`PlaySession::tick`] once per processed frame.

use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info};

use crate::clock::SessionClock;
use crate::config::SessionConfig;
use crate::error::Result;
use crate::evaluator::is_match;
use crate::poses::{Classification, PoseSet};
use crate::sequencer::PromptSequencer;

/// Session lifecycle. Transitions are monotonic Idle -> Running ->
/// Ended; restarting means constructing a fresh session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SessionState {
    Idle,
    Running,
    Ended,
}

/// Raw recognizer output exposed for inspection in debug mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub label: String,
    pub confidence: f32,
}

/// Why a session reached `Ended` with a terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EndReason {
    /// The countdown reached zero.
    TimedOut,
    /// Camera or recognizer was unusable at session start.
    StartupFailure,
}

/// Terminal event consumed by the navigation shell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionEnd {
    pub final_score: u32,
    pub reason: EndReason,
}

/// Observable state for the renderer, produced once per tick.
///
/// Countdown and gauge are `None` in debug mode (the renderer hides
/// them); the annotation is `Some` only in debug mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TickData {
    pub score: u32,
    pub remaining_seconds: Option<u64>,
    pub gauge_percent: Option<f32>,
    pub prompt: String,
    pub annotation: Option<Annotation>,
}

/// Result of a single tick step.
#[derive(Debug, Clone, PartialEq)]
pub enum StepResult {
    /// Session is not running (never started, stopped, or already ended).
    Inactive,

    /// Normal tick with observable state for the renderer.
    Tick(TickData),

    /// The countdown expired this tick; carries the terminal event.
    Finished(SessionEnd),
}

/// The orchestrating aggregate: prompt sequencer, session clock and
/// match evaluation composed behind a per-frame `tick`.
#[derive(Debug)]
pub struct PlaySession {
    config: SessionConfig,
    poses: PoseSet,
    sequencer: PromptSequencer,
    rng: ChaCha8Rng,
    debug: bool,

    state: SessionState,
    clock: SessionClock,
    score: u32,
    current_prompt: String,
    last_match_at: Option<Duration>,
    last_gauge_reset_at: Duration,
}

impl PlaySession {
    /// Build an idle session. `seed` fixes the prompt order for
    /// reproducible runs; `None` seeds from OS entropy.
    pub fn new(
        config: SessionConfig,
        poses: PoseSet,
        debug: bool,
        seed: Option<u64>,
    ) -> Result<Self> {
        config.validate()?;
        let mut rng = match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        };
        let mut sequencer = PromptSequencer::new(debug);
        let current_prompt = sequencer.initial(&poses, &mut rng);
        let clock = SessionClock::new(Duration::ZERO, &config);

        Ok(Self {
            config,
            poses,
            sequencer,
            rng,
            debug,
            state: SessionState::Idle,
            clock,
            score: 0,
            current_prompt,
            last_match_at: None,
            last_gauge_reset_at: Duration::ZERO,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    pub fn prompt(&self) -> &str {
        &self.current_prompt
    }

    /// Player-facing prompt line.
    pub fn prompt_text(&self) -> String {
        format!("Make a {} sign", self.current_prompt)
    }

    /// Enter `Running` at host instant `now`: resets score and timers
    /// and picks the initial prompt.
    pub fn start(&mut self, now: Duration) {
        debug_assert_eq!(self.state, SessionState::Idle, "start on a used session");
        if self.state != SessionState::Idle {
            return;
        }
        self.score = 0;
        self.clock = SessionClock::new(now, &self.config);
        self.last_gauge_reset_at = now;
        self.last_match_at = None;
        self.current_prompt = self.sequencer.initial(&self.poses, &mut self.rng);
        self.state = SessionState::Running;
        info!(
            poses = self.poses.len(),
            debug = self.debug,
            "play session started"
        );
    }

    /// Camera or recognizer could not be brought up: terminal event with
    /// score 0, routed to the game-over screen like a natural time-out.
    pub fn fail_to_start(&mut self) -> SessionEnd {
        debug_assert_eq!(self.state, SessionState::Idle, "fail_to_start on a used session");
        self.state = SessionState::Ended;
        info!("play session failed to start");
        SessionEnd {
            final_score: 0,
            reason: EndReason::StartupFailure,
        }
    }

    /// Manual abort (player left the play screen). Transitions to
    /// `Ended` without emitting the terminal score event.
    pub fn stop(&mut self) {
        debug_assert_eq!(self.state, SessionState::Running, "stop on a non-running session");
        if self.state != SessionState::Running {
            return;
        }
        self.state = SessionState::Ended;
        info!(score = self.score, "play session stopped");
    }

    /// Advance the session by one frame.
    ///
    /// Order per tick: countdown check, gauge-timeout rotation, match
    /// evaluation, then the observable snapshot.
    pub fn tick(&mut self, classification: &Classification, now: Duration) -> StepResult {
        debug_assert_eq!(self.state, SessionState::Running, "tick on a non-running session");
        if self.state != SessionState::Running {
            return StepResult::Inactive;
        }
        let clock = self.clock;

        let remaining = clock.remaining_seconds(now);
        if remaining == 0 {
            self.state = SessionState::Ended;
            info!(final_score = self.score, "play session timed out");
            return StepResult::Finished(SessionEnd {
                final_score: self.score,
                reason: EndReason::TimedOut,
            });
        }

        if clock.gauge_expired(now, self.last_gauge_reset_at) {
            self.rotate_prompt();
            self.last_gauge_reset_at = now;
            debug!(prompt = %self.current_prompt, "gauge expired, prompt rotated");
        }

        if is_match(
            classification,
            &self.current_prompt,
            self.last_match_at,
            now,
            &self.config,
        ) {
            self.score += 1;
            self.rotate_prompt();
            self.last_match_at = Some(now);
            // A match restarts the gauge so the player is not hit by an
            // imminent forced rotation.
            self.last_gauge_reset_at = now;
            debug!(score = self.score, prompt = %self.current_prompt, "prompt matched");
        }

        let gauge_percent =
            (clock.gauge_fraction(now, self.last_gauge_reset_at) * 100.0) as f32;
        StepResult::Tick(TickData {
            score: self.score,
            remaining_seconds: (!self.debug).then_some(remaining),
            gauge_percent: (!self.debug).then_some(gauge_percent),
            prompt: self.current_prompt.clone(),
            annotation: self.debug.then(|| Annotation {
                label: classification.label.clone(),
                confidence: classification.confidence,
            }),
        })
    }

    fn rotate_prompt(&mut self) {
        self.current_prompt =
            self.sequencer
                .next(&self.poses, &self.current_prompt, &mut self.rng);
    }
}
