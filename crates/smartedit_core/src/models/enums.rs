//! Core enums used throughout the crate.

use serde::{Deserialize, Serialize};

/// Type of timeline track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackType {
    Video,
    Audio,
    Subtitle,
}

impl TrackType {
    /// The track type name as the host editor spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::Video => "video",
            TrackType::Audio => "audio",
            TrackType::Subtitle => "subtitle",
        }
    }
}

impl std::fmt::Display for TrackType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How generated text clips are aligned against reference clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapMode {
    /// Keep subtitle timings untouched.
    None,
    /// Snap to the clip boundaries of the busiest audio track.
    #[default]
    Audio,
}

impl std::fmt::Display for SnapMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapMode::None => write!(f, "none"),
            SnapMode::Audio => write!(f, "audio"),
        }
    }
}
