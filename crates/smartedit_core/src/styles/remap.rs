//! Style remapping against replacement text.
//!
//! When a styled text body is replaced (retimed subtitles, translated
//! captions), the per-line style annotations still reference the old
//! text's offsets. The remap keeps each style on the same line *index*
//! and rewrites its offsets to the new text's actual line boundaries.

use super::annotation::{distinct_line_groupings, line_ranges, StyleAnnotation};

/// Rewrite annotation line offsets to match `new_text`.
///
/// An annotation's line identity is the rank of its `(line_start,
/// line_end)` pair among the distinct pairs of the input set. The new
/// text's line boundaries are computed with one spare line beyond that
/// count, the last line absorbing any remainder. Annotations whose line
/// index has no boundary in the new text are silently dropped; that
/// best-effort degradation is intended, not an error. Surviving
/// annotations keep their relative order, and every emitted range is a
/// valid character span of `new_text`.
pub fn remap_annotations<A>(
    annotations: Vec<StyleAnnotation<A>>,
    new_text: &str,
) -> Vec<StyleAnnotation<A>> {
    let groupings = distinct_line_groupings(&annotations);
    let new_ranges = line_ranges(new_text, groupings.len() + 1);

    let mut remapped = Vec::with_capacity(annotations.len());
    let mut dropped = 0usize;

    for mut annotation in annotations {
        // The grouping list was built from these annotations, so the
        // lookup always succeeds.
        let Ok(index) = groupings.binary_search(&annotation.line_range()) else {
            continue;
        };

        match new_ranges.get(index) {
            Some(&(start, end)) => {
                annotation.line_start = start;
                annotation.line_end = end;
                remapped.push(annotation);
            }
            None => {
                dropped += 1;
                tracing::trace!("Dropping style annotation for vanished line {}", index);
            }
        }
    }

    if dropped > 0 {
        tracing::debug!(
            "Remapped {} style annotations, dropped {} without a line in the new text",
            remapped.len(),
            dropped
        );
    }

    remapped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_to_shorter_text() {
        // Annotation on "cd" (line 1 of "ab\ncd\nef") lands on the first
        // computed line boundary of the new text: its grouping is the only
        // one in the set, so its line index is 0.
        let annotations = vec![StyleAnnotation::new("bold", 3, 5)];
        let remapped = remap_annotations(annotations, "xy\nzw");

        assert_eq!(remapped.len(), 1);
        assert_eq!(remapped[0].line_range(), (0, 2));
        assert_eq!(remapped[0].attributes, "bold");
    }

    #[test]
    fn remap_drops_vanished_lines_preserving_order() {
        // Three lines of styles, replacement has only two lines: A and B
        // survive on the new boundaries, C is dropped.
        let annotations = vec![
            StyleAnnotation::new("A", 0, 2),
            StyleAnnotation::new("B", 3, 5),
            StyleAnnotation::new("C", 6, 8),
        ];

        let remapped = remap_annotations(annotations, "xy\nzw");

        let attrs: Vec<&str> = remapped.iter().map(|a| a.attributes).collect();
        assert_eq!(attrs, vec!["A", "B"]);
        assert_eq!(remapped[0].line_range(), (0, 2));
        assert_eq!(remapped[1].line_range(), (3, 5));
    }

    #[test]
    fn remap_keeps_shared_lines_together() {
        // Two annotations on the same line grouping stay on the same new
        // boundary.
        let annotations = vec![
            StyleAnnotation::new("red", 0, 2),
            StyleAnnotation::new("bold", 0, 2),
            StyleAnnotation::new("blue", 3, 5),
        ];

        let remapped = remap_annotations(annotations, "hello\nworld");

        assert_eq!(remapped.len(), 3);
        assert_eq!(remapped[0].line_range(), (0, 5));
        assert_eq!(remapped[1].line_range(), (0, 5));
        assert_eq!(remapped[2].line_range(), (6, 11));
    }

    #[test]
    fn remap_line_count_bounded() {
        // The new text has more lines than the annotation set plus one;
        // the extra breaks collapse into the last boundary.
        let annotations = vec![StyleAnnotation::new("A", 0, 2)];
        let remapped = remap_annotations(annotations, "a\nb\nc\nd");

        // max_line_count = 1 + 1 = 2, so the only boundaries are the
        // first line and the absorbing remainder.
        assert_eq!(remapped[0].line_range(), (0, 1));

        let groupings = distinct_line_groupings(&remapped);
        assert!(groupings.len() <= 2);
    }

    #[test]
    fn remap_offsets_stay_within_text() {
        let annotations = vec![
            StyleAnnotation::new("A", 0, 10),
            StyleAnnotation::new("B", 11, 30),
        ];
        let new_text = "short\ntext";

        for annotation in remap_annotations(annotations, new_text) {
            assert!(annotation.line_end <= new_text.chars().count());
            assert!(annotation.line_start <= annotation.line_end);
        }
    }

    #[test]
    fn remap_empty_inputs() {
        let none: Vec<StyleAnnotation<&str>> = Vec::new();
        assert!(remap_annotations(none, "text").is_empty());

        let annotations = vec![StyleAnnotation::new("A", 0, 2)];
        assert!(remap_annotations(annotations, "").is_empty());
    }
}
