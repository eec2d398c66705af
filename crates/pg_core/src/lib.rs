//! # pg_core - Deterministic Gesture-Match Session Engine
//!
//! Core state machine for a timed gesture-matching game. The host feeds
//! one `(label, confidence)` classification per frame into a running
//! [`PlaySession`]; the session turns that stream into score events,
//! prompt rotations and a single terminal event when the countdown
//! expires.
//!
//! ## Features
//! - 100% deterministic with a fixed seed (same seed = same prompts)
//! - Pure-function timing: no wall-clock reads inside the engine
//! - Camera, recognizer model and GUI stay outside the crate boundary

pub mod clock;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod poses;
pub mod sequencer;
pub mod session;

pub use clock::{format_mmss, SessionClock};
pub use config::{SessionConfig, TICKS_PER_SECOND, TICK_MS};
pub use error::{Result, SessionError};
pub use evaluator::is_match;
pub use poses::{Classification, PoseSet, UNKNOWN_LABEL};
pub use sequencer::PromptSequencer;
pub use session::{
    Annotation, EndReason, PlaySession, SessionEnd, SessionState, StepResult, TickData,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
