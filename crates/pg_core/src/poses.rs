//! Pose vocabulary and per-frame classification input.
//!
//! The authoritative pose set is loaded once at session construction
//! from a plain-text list (one name per line). A missing or empty list
//! falls back to the built-in default set; the engine never runs with
//! an empty pool.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Result, SessionError};

/// Label the recognizer reports when no known pose is detected.
pub const UNKNOWN_LABEL: &str = "unknown";

static DEFAULT_POSES: Lazy<Vec<String>> =
    Lazy::new(|| vec!["thumbs up".to_string(), "piece".to_string()]);

/// Ordered, non-empty set of recognizable pose names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoseSet {
    names: Vec<String>,
}

impl PoseSet {
    /// Build a pose set from an ordered list of names. Fails fast on an
    /// empty list; callers wanting the fallback behavior use [`PoseSet::load`].
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(SessionError::EmptyPoseSet);
        }
        Ok(Self { names })
    }

    /// The built-in two-pose fallback set.
    pub fn default_set() -> Self {
        Self {
            names: DEFAULT_POSES.clone(),
        }
    }

    /// Load a pose list from a plain-text file: one name per line,
    /// surrounding whitespace trimmed, blank lines ignored.
    ///
    /// A missing or empty file yields the default set (logged, not
    /// surfaced to the player). Other IO failures propagate.
    pub fn load(path: &Path) -> Result<Self> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "pose list not found, using default poses");
                return Ok(Self::default_set());
            }
            Err(err) => return Err(err.into()),
        };

        let set = Self::from_lines(&text);
        if set.is_none() {
            warn!(path = %path.display(), "pose list is empty, using default poses");
        }
        Ok(set.unwrap_or_else(Self::default_set))
    }

    /// Parse pose names out of newline-separated text. `None` when no
    /// non-blank line remains.
    pub fn from_lines(text: &str) -> Option<Self> {
        let names: Vec<String> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self::new(names).ok()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Always false; kept for API symmetry with collection types.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn get(&self, index: usize) -> &str {
        &self.names[index % self.names.len()]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

impl Default for PoseSet {
    fn default() -> Self {
        Self::default_set()
    }
}

/// One frame's recognizer output. Read-only input to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub label: String,
    /// Confidence in [0, 1].
    pub confidence: f32,
}

impl Classification {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self {
            label: label.into(),
            confidence,
        }
    }

    /// The "nothing recognized" frame.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LABEL, 0.0)
    }

    pub fn is_unknown(&self) -> bool {
        self.label == UNKNOWN_LABEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_set_rejected() {
        assert!(matches!(
            PoseSet::new(vec![]),
            Err(SessionError::EmptyPoseSet)
        ));
    }

    #[test]
    fn test_default_set() {
        let set = PoseSet::default_set();
        assert_eq!(set.names(), &["thumbs up", "piece"]);
        assert!(set.contains("piece"));
        assert!(!set.contains("rock"));
    }

    #[test]
    fn test_from_lines_trims_and_skips_blanks() {
        let set = PoseSet::from_lines("thumbs up\n\n  piece  \n\nok sign\n").unwrap();
        assert_eq!(set.names(), &["thumbs up", "piece", "ok sign"]);
    }

    #[test]
    fn test_from_lines_all_blank() {
        assert!(PoseSet::from_lines("\n   \n\t\n").is_none());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let set = PoseSet::load(&dir.path().join("array.txt")).unwrap();
        assert_eq!(set, PoseSet::default_set());
    }

    #[test]
    fn test_load_empty_file_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "   ").unwrap();
        let set = PoseSet::load(file.path()).unwrap();
        assert_eq!(set, PoseSet::default_set());
    }

    #[test]
    fn test_load_reads_names_in_order() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rock\npaper\nscissors").unwrap();
        let set = PoseSet::load(file.path()).unwrap();
        assert_eq!(set.names(), &["rock", "paper", "scissors"]);
    }

    #[test]
    fn test_unknown_classification() {
        let unknown = Classification::unknown();
        assert!(unknown.is_unknown());
        assert_eq!(unknown.confidence, 0.0);
        assert!(!Classification::new("piece", 0.9).is_unknown());
    }
}
