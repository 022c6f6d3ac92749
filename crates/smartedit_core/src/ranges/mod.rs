//! Frame ranges and range snapping.
//!
//! - **types**: the `FrameRange` value type, overlap primitives, and
//!   input-sequence validation
//! - **snap**: gap filling and the snap engine that aligns subtitle cue
//!   spans to reference clip boundaries

mod snap;
mod types;

pub use snap::{
    fill_gaps, snap_ranges, snap_ranges_with_stats, OverlapBasis, SnapOptions, SnapStats,
    DEFAULT_OVERLAP_THRESHOLD,
};
pub use types::{validate_sequence, FrameRange, InvalidRangeSequenceError};
