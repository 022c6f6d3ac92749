//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.
//! Each section can be updated independently for atomic section-level
//! updates.

use serde::{Deserialize, Serialize};

use crate::logging::LogLevel;
use crate::models::SnapMode;
use crate::ranges::{OverlapBasis, SnapOptions, DEFAULT_OVERLAP_THRESHOLD};
use crate::subtitles::RoundingMode;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Range snapping configuration.
    #[serde(default)]
    pub snapping: SnappingSettings,

    /// Subtitle import/export configuration.
    #[serde(default)]
    pub subtitles: SubtitleSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Range snapping configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnappingSettings {
    /// Snap mode for generated text clips.
    #[serde(default)]
    pub mode: SnapMode,

    /// Minimum overlap fraction for a target range to associate.
    #[serde(default = "default_overlap_threshold")]
    pub overlap_threshold: f64,

    /// Which side the overlap fraction is measured against.
    #[serde(default)]
    pub overlap_basis: OverlapBasis,
}

fn default_overlap_threshold() -> f64 {
    DEFAULT_OVERLAP_THRESHOLD
}

impl Default for SnappingSettings {
    fn default() -> Self {
        Self {
            mode: SnapMode::default(),
            overlap_threshold: default_overlap_threshold(),
            overlap_basis: OverlapBasis::default(),
        }
    }
}

impl SnappingSettings {
    /// The snap engine options these settings describe.
    pub fn snap_options(&self) -> SnapOptions {
        SnapOptions {
            overlap_threshold: self.overlap_threshold,
            overlap_basis: self.overlap_basis,
        }
    }
}

/// Subtitle import/export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubtitleSettings {
    /// Rounding mode for time values when writing subtitle files.
    #[serde(default)]
    pub rounding: RoundingMode,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Minimum log level.
    #[serde(default)]
    pub level: LogLevel,

    /// Progress update step percentage for batch operations.
    #[serde(default = "default_progress_step")]
    pub progress_step: u32,
}

fn default_progress_step() -> u32 {
    20
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::default(),
            progress_step: default_progress_step(),
        }
    }
}

/// The configuration sections, for section-level updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Snapping,
    Subtitles,
    Logging,
}

impl ConfigSection {
    /// The TOML table name of this section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Snapping => "snapping",
            ConfigSection::Subtitles => "subtitles",
            ConfigSection::Logging => "logging",
        }
    }

    /// All sections in file order.
    pub fn all() -> &'static [ConfigSection] {
        &[
            ConfigSection::Snapping,
            ConfigSection::Subtitles,
            ConfigSection::Logging,
        ]
    }
}
