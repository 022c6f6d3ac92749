//! Insert planning.
//!
//! Pure math behind placing generated clips on a timeline: where each
//! clip's record range lands (snap-mode dispatch) and which span of the
//! source media fills it (cross-rate in/out computation). The plans are
//! plain data; executing them against the host editor is the adapter
//! layer's job.

use crate::models::SnapMode;
use crate::ranges::{snap_ranges, FrameRange, InvalidRangeSequenceError, SnapOptions};
use crate::timecode::{frame_to_frame, FrameRate};

/// Compute the record ranges for generated text clips.
///
/// With `SnapMode::None` (or no subtitles at all) the cue ranges are used
/// as-is; with `SnapMode::Audio` they are snapped against the reference
/// track's clip ranges.
pub fn compute_insert_ranges(
    subtitle_ranges: &[FrameRange],
    target_ranges: &[FrameRange],
    mode: SnapMode,
    options: &SnapOptions,
) -> Result<Vec<FrameRange>, InvalidRangeSequenceError> {
    if subtitle_ranges.is_empty() || mode == SnapMode::None {
        return Ok(subtitle_ranges.to_vec());
    }

    snap_ranges(subtitle_ranges, target_ranges, options)
}

/// Properties of the media item a clip is cut from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSource {
    /// The media item's own frame rate.
    pub rate: FrameRate,
    /// Item length in its own frames.
    pub duration_frames: i64,
    /// Mark-in frame, if the item has one.
    pub mark_in: Option<i64>,
    /// Mark-out frame, if the item has one.
    pub mark_out: Option<i64>,
    /// Whether the item can be stretched past its duration (stills and
    /// generators can; footage cannot).
    pub extendable: bool,
}

/// A request to place a clip at a record range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertRequest {
    /// Where the clip goes on the timeline, in record frames.
    pub record_range: FrameRange,
    /// Requested offset into the source media, in source frames.
    pub source_start_frame: f64,
}

/// A fully resolved clip placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannedClip {
    /// First source frame used.
    pub source_start: f64,
    /// One past the last source frame used.
    pub source_end: f64,
    /// Timeline record frame the clip starts at.
    pub record_frame: i64,
}

/// Resolve a single insert request against its source item.
///
/// The record-range length is rescaled into the source's rate, then
/// clamped by the item's mark in/out and, for non-extendable items, by
/// its duration.
pub fn plan_insert(
    request: &InsertRequest,
    source: &ClipSource,
    timeline_rate: FrameRate,
) -> PlannedClip {
    let mut source_start = request.source_start_frame;
    let mut source_frames =
        frame_to_frame(request.record_range.len(), timeline_rate, source.rate) as f64;

    if let Some(mark_in) = source.mark_in {
        source_start = source_start.max(mark_in as f64);
    }
    if let Some(mark_out) = source.mark_out {
        source_frames = source_frames.min(mark_out as f64);
    }
    if !source.extendable {
        source_frames = source_frames.min(source.duration_frames as f64);
    }

    PlannedClip {
        source_start,
        source_end: source_start + source_frames,
        record_frame: request.record_range.start,
    }
}

/// Resolve a batch of insert requests against one source item.
pub fn plan_inserts(
    requests: &[InsertRequest],
    source: &ClipSource,
    timeline_rate: FrameRate,
) -> Vec<PlannedClip> {
    tracing::debug!("Planning {} clip inserts", requests.len());

    requests
        .iter()
        .map(|request| plan_insert(request, source, timeline_rate))
        .collect()
}

/// Shortest sensible insert length in timeline frames.
///
/// One frame of the source item expressed at the timeline rate, but never
/// less than one timeline frame.
pub fn min_insert_frames(source_rate: FrameRate, timeline_rate: FrameRate) -> i64 {
    frame_to_frame(1, source_rate, timeline_rate).max(1)
}
