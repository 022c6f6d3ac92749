//! Subtitle cue processing.
//!
//! # Components
//!
//! - **types**: the cue model (f64-millisecond timing) and write rounding
//! - **srt**: SubRip parsing and writing
//! - **convert**: cue <-> record-frame conversion through a timeline's
//!   timecode settings

mod convert;
mod error;
mod srt;
mod types;

pub use convert::{cue_frame_range, cue_frame_ranges, cue_from_frame_range};
pub use error::ParseError;
pub use srt::{format_srt_time, parse_srt, parse_srt_time, write_srt};
pub use types::{RoundingMode, SubtitleCue};
