//! Line-indexed style annotations.
//!
//! A text body carries an ordered set of annotations, each covering one
//! half-open character range that shares a style. Annotations covering the
//! same `(line_start, line_end)` pair belong to the same visual line.
//! All offsets count characters, not bytes.

/// A `(line_start, line_end)` character-offset pair marking one line.
pub type LineRange = (usize, usize);

/// One styled span of a text body.
///
/// `attributes` is the opaque styling payload (font, color, weight); the
/// remap engine only reads and rewrites the line offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleAnnotation<A> {
    /// Opaque styling payload.
    pub attributes: A,
    /// Character offset where the styled line starts (inclusive).
    pub line_start: usize,
    /// Character offset where the styled line ends (exclusive).
    pub line_end: usize,
}

impl<A> StyleAnnotation<A> {
    /// Create an annotation covering `line_start..line_end`.
    pub fn new(attributes: A, line_start: usize, line_end: usize) -> Self {
        Self {
            attributes,
            line_start,
            line_end,
        }
    }

    /// The annotation's line range.
    pub fn line_range(&self) -> LineRange {
        (self.line_start, self.line_end)
    }
}

/// Character-offset boundaries of the first `max_line_count` lines.
///
/// Lines split on `'\n'`; each range starts one past the previous line's
/// end, skipping the line break. The last retained line absorbs the rest
/// of the text, further line breaks included, so the result never has more
/// than `max_line_count` entries.
pub fn line_ranges(text: &str, max_line_count: usize) -> Vec<LineRange> {
    if text.is_empty() || max_line_count == 0 {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let total_chars = text.chars().count();
    let mut next_start = 0;

    // Split on '\n' only; a trailing newline does not open an empty line.
    // Unlike `str::lines`, carriage returns are not stripped, since offsets
    // must count every character actually present in the text.
    let lines = text.strip_suffix('\n').unwrap_or(text).split('\n');

    for (i, line) in lines.take(max_line_count).enumerate() {
        let start = next_start;

        let end = if i < max_line_count - 1 {
            start + line.chars().count()
        } else {
            total_chars
        };

        ranges.push((start, end));
        next_start = end + 1;
    }

    ranges
}

/// The sorted, de-duplicated line ranges of an annotation set.
///
/// This is the "line index" space: an annotation's line identity is its
/// rank in this list.
pub fn distinct_line_groupings<A>(annotations: &[StyleAnnotation<A>]) -> Vec<LineRange> {
    let mut groupings: Vec<LineRange> = annotations.iter().map(|a| a.line_range()).collect();
    groupings.sort_unstable();
    groupings.dedup();
    groupings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ranges_basic() {
        // "ab\ncd\nef": three lines at (0,2), (3,5), (6,8)
        assert_eq!(line_ranges("ab\ncd\nef", 4), vec![(0, 2), (3, 5), (6, 8)]);
    }

    #[test]
    fn last_retained_line_absorbs_remainder() {
        // Cap at 2: the second range swallows "cd\nef"
        assert_eq!(line_ranges("ab\ncd\nef", 2), vec![(0, 2), (3, 8)]);
        assert_eq!(line_ranges("xy\nzw", 2), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn line_ranges_single_line() {
        assert_eq!(line_ranges("hello", 3), vec![(0, 5)]);
    }

    #[test]
    fn line_ranges_trailing_newline() {
        // A trailing newline does not create an empty extra line. At the
        // cap, the last line's end covers the full text length.
        assert_eq!(line_ranges("ab\n", 1), vec![(0, 3)]);
        assert_eq!(line_ranges("ab\ncd\n", 3), vec![(0, 2), (3, 5)]);
    }

    #[test]
    fn line_ranges_empty_text() {
        assert!(line_ranges("", 3).is_empty());
    }

    #[test]
    fn line_ranges_count_chars_not_bytes() {
        // Multi-byte characters count as one offset each
        assert_eq!(line_ranges("héllo\nwörld", 3), vec![(0, 5), (6, 11)]);
    }

    #[test]
    fn distinct_groupings_sorted_and_deduped() {
        let annotations = vec![
            StyleAnnotation::new("bold", 6, 8),
            StyleAnnotation::new("red", 0, 2),
            StyleAnnotation::new("italic", 0, 2),
        ];

        assert_eq!(distinct_line_groupings(&annotations), vec![(0, 2), (6, 8)]);
    }
}
