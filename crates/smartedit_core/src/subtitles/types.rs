//! Core subtitle types.
//!
//! Cue timing is stored as `f64` milliseconds relative to the timeline
//! start, for sub-millisecond precision. Rounding to the format's
//! precision happens only at write time.

use serde::{Deserialize, Serialize};

/// A single subtitle cue.
#[derive(Debug, Clone, PartialEq)]
pub struct SubtitleCue {
    /// Start time in milliseconds (f64 for precision).
    pub start_ms: f64,
    /// End time in milliseconds (f64 for precision).
    pub end_ms: f64,
    /// Text content; lines separated by `\n`.
    pub text: String,
}

impl SubtitleCue {
    /// Create a new cue.
    pub fn new(start_ms: f64, end_ms: f64, text: impl Into<String>) -> Self {
        Self {
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    /// Duration in milliseconds.
    pub fn duration_ms(&self) -> f64 {
        self.end_ms - self.start_ms
    }

    /// Shift this cue by an offset. Times are clamped to 0.
    pub fn shift(&mut self, offset_ms: f64) {
        self.start_ms = (self.start_ms + offset_ms).max(0.0);
        self.end_ms = (self.end_ms + offset_ms).max(0.0);
    }
}

/// Rounding mode for time values when writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingMode {
    /// Round down (floor) - most conservative, may cut off start.
    Floor,
    /// Round to nearest - balanced approach.
    #[default]
    Round,
    /// Round up (ceil) - ensures subtitle appears, may show early.
    Ceil,
}

impl RoundingMode {
    /// Apply rounding to a millisecond value.
    pub fn apply(&self, ms: f64) -> f64 {
        match self {
            Self::Floor => ms.floor(),
            Self::Round => ms.round(),
            Self::Ceil => ms.ceil(),
        }
    }
}
