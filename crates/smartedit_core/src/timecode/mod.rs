//! Timecode and frame conversion.
//!
//! # Components
//!
//! - **types**: `FrameRate`, `Timecode`, and `TimecodeSettings` (a
//!   timeline's rate + start-timecode anchor)
//! - **convert**: pure conversion functions between frames, timecodes,
//!   and wall-clock durations, including cross-rate rescaling
//! - **error**: parse and rate validation errors

mod convert;
mod error;
mod types;

pub use convert::{
    duration_to_frame, duration_to_timecode, frame_to_duration, frame_to_frame, frame_to_str,
    frame_to_timecode, str_to_frame, timecode_to_duration, timecode_to_frame,
};
pub use error::{InvalidRateError, ParseError, TimecodeError};
pub use types::{parse_fps, FrameRate, Timecode, TimecodeSettings};
