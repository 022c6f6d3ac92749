//! Shared data models.
//!
//! Small enums used across the engines and by configuration.

mod enums;

pub use enums::{SnapMode, TrackType};
