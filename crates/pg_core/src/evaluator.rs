//! Prompt match decision.
//!
//! A classification counts only when it names the current prompt, beats
//! the confidence threshold strictly, and falls strictly outside the
//! cooldown window. Strict comparisons keep a sustained high-confidence
//! frame from scoring twice at a boundary instant.

use std::time::Duration;

use crate::config::SessionConfig;
use crate::poses::Classification;

/// Whether `classification` satisfies `prompt` at instant `now`.
///
/// `last_match_at` of `None` means no match has ever been counted, so
/// the cooldown never blocks the first match.
pub fn is_match(
    classification: &Classification,
    prompt: &str,
    last_match_at: Option<Duration>,
    now: Duration,
    config: &SessionConfig,
) -> bool {
    if classification.label != prompt {
        return false;
    }
    if !(classification.confidence > config.match_threshold) {
        return false;
    }
    match last_match_at {
        None => true,
        Some(at) => now.saturating_sub(at) > config.match_cooldown(),
    }
}
