//! Frame range value type and overlap primitives.

/// A half-open range of timeline frames: `start` inclusive, `end` exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameRange {
    pub start: i64,
    pub end: i64,
}

impl FrameRange {
    /// Create a range. `start` must not exceed `end`.
    pub fn new(start: i64, end: i64) -> Self {
        debug_assert!(start <= end, "FrameRange start {} > end {}", start, end);
        Self { start, end }
    }

    /// Number of frames covered.
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the range covers no frames.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether two ranges share at least one frame.
    ///
    /// Zero-length ranges never overlap anything.
    pub fn overlaps(&self, other: &FrameRange) -> bool {
        self.start < other.end && self.end > other.start
    }

    /// Number of frames shared with `other`.
    pub fn overlap_len(&self, other: &FrameRange) -> i64 {
        (self.end.min(other.end) - self.start.max(other.start)).max(0)
    }

    /// Fraction of this range covered by `other`.
    ///
    /// Zero-length ranges yield 0.0, so degenerate inputs never associate
    /// by percentage.
    pub fn overlap_fraction(&self, other: &FrameRange) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        self.overlap_len(other) as f64 / self.len() as f64
    }

    /// Whether this range's start falls inside `other`.
    pub fn starts_inside(&self, other: &FrameRange) -> bool {
        other.start <= self.start && self.start < other.end
    }
}

impl std::fmt::Display for FrameRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<(i64, i64)> for FrameRange {
    fn from((start, end): (i64, i64)) -> Self {
        Self::new(start, end)
    }
}

/// A source or target sequence that is not sorted ascending by start, or
/// contains internally overlapping ranges.
#[derive(Debug, thiserror::Error)]
#[error("{sequence} ranges not sorted and non-overlapping at index {index}: {previous} then {current}")]
pub struct InvalidRangeSequenceError {
    /// Which input sequence failed validation.
    pub sequence: &'static str,
    /// Index of the offending range.
    pub index: usize,
    pub previous: FrameRange,
    pub current: FrameRange,
}

/// Validate that ranges are sorted ascending by start and non-overlapping.
pub fn validate_sequence(
    ranges: &[FrameRange],
    sequence: &'static str,
) -> Result<(), InvalidRangeSequenceError> {
    for (index, window) in ranges.windows(2).enumerate() {
        let (previous, current) = (window[0], window[1]);

        if current.start < previous.start || previous.overlaps(&current) {
            return Err(InvalidRangeSequenceError {
                sequence,
                index: index + 1,
                previous,
                current,
            });
        }
    }

    Ok(())
}
