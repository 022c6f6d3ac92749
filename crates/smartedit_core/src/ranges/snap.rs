//! Range snapping.
//!
//! Aligns a sequence of source ranges (subtitle cue spans) to the clip
//! boundaries of a target sequence (typically the busiest audio track),
//! so generated text clips land on the cuts underneath them.
//!
//! Both inputs must be sorted ascending by start and internally
//! non-overlapping; the output preserves the source order and count and
//! never emits overlapping ranges.

use super::types::{validate_sequence, FrameRange, InvalidRangeSequenceError};

/// Default minimum overlap fraction for a target to associate.
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.5;

/// Which range's length the overlap fraction is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlapBasis {
    /// Fraction of the source range covered by the target.
    #[default]
    Source,
    /// Either side qualifying is enough. A short target fully inside a
    /// long source associates even when it covers little of the source.
    SourceOrTarget,
}

/// Tunable snapping heuristics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapOptions {
    /// Minimum overlap fraction for a target range to associate.
    pub overlap_threshold: f64,
    /// Side(s) the fraction is measured against.
    pub overlap_basis: OverlapBasis,
}

impl Default for SnapOptions {
    fn default() -> Self {
        Self {
            overlap_threshold: DEFAULT_OVERLAP_THRESHOLD,
            overlap_basis: OverlapBasis::default(),
        }
    }
}

/// Statistics about a snapping pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapStats {
    /// Number of source ranges processed.
    pub source_count: usize,
    /// Sources that associated with target boundaries and moved.
    pub associated: usize,
    /// Sources that passed through unmodified.
    pub passed_through: usize,
}

/// Fill gaps between consecutive ranges with synthetic ranges.
///
/// The result is contiguous from the first range's start to the last
/// range's end. Input must be sorted and non-overlapping.
pub fn fill_gaps(ranges: &[FrameRange]) -> Vec<FrameRange> {
    let mut filled = Vec::with_capacity(ranges.len());

    for window in ranges.windows(2) {
        let (current, next) = (window[0], window[1]);
        filled.push(current);

        if next.start > current.end {
            filled.push(FrameRange::new(current.end, next.start));
        }
    }

    filled.extend(ranges.last().copied());
    filled
}

/// Snap source ranges to target boundaries.
///
/// See [`snap_ranges_with_stats`]; this drops the statistics.
pub fn snap_ranges(
    sources: &[FrameRange],
    targets: &[FrameRange],
    options: &SnapOptions,
) -> Result<Vec<FrameRange>, InvalidRangeSequenceError> {
    snap_ranges_with_stats(sources, targets, options).map(|(ranges, _)| ranges)
}

/// Snap source ranges to target boundaries, reporting statistics.
///
/// The target list is gap-filled to a contiguous span, then each source
/// range is associated with the consecutive run of overlapping targets
/// whose overlap fraction meets the threshold. An associated source takes
/// the span of its surviving targets; its start is clamped to the previous
/// emitted end, and its end is clamped to the next source's original start
/// when the neighboring associations overlap. Sources with no association
/// pass through (their start still clamps to the previous emitted end so
/// the output stays non-overlapping). Empty targets pass everything
/// through untouched.
pub fn snap_ranges_with_stats(
    sources: &[FrameRange],
    targets: &[FrameRange],
    options: &SnapOptions,
) -> Result<(Vec<FrameRange>, SnapStats), InvalidRangeSequenceError> {
    validate_sequence(sources, "source")?;
    validate_sequence(targets, "target")?;

    if targets.is_empty() {
        return Ok((
            sources.to_vec(),
            SnapStats {
                source_count: sources.len(),
                associated: 0,
                passed_through: sources.len(),
            },
        ));
    }

    let filled = fill_gaps(targets);
    let associations = associate(sources, &filled, options);
    let snapped = resolve_boundaries(sources, &associations);

    let associated = associations.iter().filter(|a| a.is_some()).count();
    let stats = SnapStats {
        source_count: sources.len(),
        associated,
        passed_through: sources.len() - associated,
    };

    tracing::debug!(
        "Snapped {} ranges against {} targets: {} associated, {} passed through",
        sources.len(),
        targets.len(),
        stats.associated,
        stats.passed_through
    );

    Ok((snapped, stats))
}

/// Whether a target qualifies for association with a source.
fn associable(source: &FrameRange, target: &FrameRange, options: &SnapOptions) -> bool {
    let by_source = source.overlap_fraction(target) >= options.overlap_threshold;

    match options.overlap_basis {
        OverlapBasis::Source => by_source,
        OverlapBasis::SourceOrTarget => {
            by_source || target.overlap_fraction(source) >= options.overlap_threshold
        }
    }
}

/// For each source, the span from the first to the last qualifying target.
///
/// The cursor into the gap-filled target list only moves forward: sources
/// are sorted, so targets skipped for one source are never revisited.
fn associate(
    sources: &[FrameRange],
    filled_targets: &[FrameRange],
    options: &SnapOptions,
) -> Vec<Option<FrameRange>> {
    let mut associations = Vec::with_capacity(sources.len());
    let mut cursor = 0;

    for source in sources {
        while cursor < filled_targets.len() && !source.overlaps(&filled_targets[cursor]) {
            cursor += 1;
        }

        let mut association: Option<FrameRange> = None;
        let mut index = cursor;

        while index < filled_targets.len() && source.overlaps(&filled_targets[index]) {
            let target = filled_targets[index];

            if associable(source, &target, options) {
                association = Some(match association {
                    None => target,
                    Some(span) => FrameRange::new(span.start, target.end),
                });
            }

            index += 1;
        }

        if association.is_none() {
            tracing::trace!("No association for source {}", source);
        }

        associations.push(association);
    }

    associations
}

/// Walk sources in order and emit final ranges without overlaps.
fn resolve_boundaries(
    sources: &[FrameRange],
    associations: &[Option<FrameRange>],
) -> Vec<FrameRange> {
    let mut snapped: Vec<FrameRange> = Vec::with_capacity(sources.len());

    for (i, source) in sources.iter().enumerate() {
        let mut range = match associations[i] {
            None => *source,
            Some(association) => {
                let mut end = association.end;

                // Two adjacent associations can claim the same target
                // span; the earlier one gives way at the next source's
                // original start.
                if let Some(Some(next)) = associations.get(i + 1) {
                    if association.overlaps(next) {
                        end = end.min(sources[i + 1].start);
                    }
                }

                FrameRange::new(association.start, end)
            }
        };

        if let Some(previous) = snapped.last() {
            range.start = range.start.max(previous.end);
            range.end = range.end.max(range.start);
        }

        snapped.push(range);
    }

    snapped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranges(pairs: &[(i64, i64)]) -> Vec<FrameRange> {
        pairs.iter().map(|&p| FrameRange::from(p)).collect()
    }

    #[test]
    fn fill_gaps_makes_contiguous() {
        let filled = fill_gaps(&ranges(&[(2, 8), (22, 26)]));
        assert_eq!(filled, ranges(&[(2, 8), (8, 22), (22, 26)]));
    }

    #[test]
    fn fill_gaps_single_and_empty() {
        assert_eq!(fill_gaps(&ranges(&[(5, 9)])), ranges(&[(5, 9)]));
        assert!(fill_gaps(&[]).is_empty());
    }

    #[test]
    fn fill_gaps_touching_ranges_unchanged() {
        let touching = ranges(&[(0, 5), (5, 10)]);
        assert_eq!(fill_gaps(&touching), touching);
    }

    #[test]
    fn snap_basic_scenario() {
        // (0,10) covers (2,8) at 60% -> snaps to it; (20,30) covers
        // neither gap nor clip at 50% -> passes through.
        let sources = ranges(&[(0, 10), (20, 30)]);
        let targets = ranges(&[(2, 8), (22, 26)]);

        let snapped = snap_ranges(&sources, &targets, &SnapOptions::default()).unwrap();
        assert_eq!(snapped, ranges(&[(2, 8), (20, 30)]));
    }

    #[test]
    fn snap_dual_basis_associates_short_targets() {
        // With the dual-sided fraction, (22,26) sits fully inside (20,30)
        // and associates even though it covers only 40% of the source.
        let sources = ranges(&[(0, 10), (20, 30)]);
        let targets = ranges(&[(2, 8), (22, 26)]);
        let options = SnapOptions {
            overlap_basis: OverlapBasis::SourceOrTarget,
            ..SnapOptions::default()
        };

        let snapped = snap_ranges(&sources, &targets, &options).unwrap();
        assert_eq!(snapped, ranges(&[(2, 8), (22, 26)]));
    }

    #[test]
    fn snap_empty_targets_passes_through() {
        let sources = ranges(&[(0, 10), (20, 30)]);
        let (snapped, stats) =
            snap_ranges_with_stats(&sources, &[], &SnapOptions::default()).unwrap();

        assert_eq!(snapped, sources);
        assert_eq!(stats.passed_through, 2);
        assert_eq!(stats.associated, 0);
    }

    #[test]
    fn snap_neighbors_claiming_same_span() {
        // Both sources associate with the single long target; the first
        // one's end is clamped to the second's original start.
        let sources = ranges(&[(0, 10), (10, 20)]);
        let targets = ranges(&[(0, 18)]);

        let snapped = snap_ranges(&sources, &targets, &SnapOptions::default()).unwrap();
        assert_eq!(snapped, ranges(&[(0, 10), (10, 18)]));
    }

    #[test]
    fn snap_pass_through_clamps_against_snapped_neighbor() {
        // The first source swallows the whole target span; the second has
        // no association and must not slide under the first's new end.
        let sources = ranges(&[(0, 10), (20, 30)]);
        let targets = ranges(&[(0, 24)]);

        let snapped = snap_ranges(&sources, &targets, &SnapOptions::default()).unwrap();
        assert_eq!(snapped, ranges(&[(0, 24), (24, 30)]));
    }

    #[test]
    fn snap_output_never_overlaps() {
        let sources = ranges(&[(0, 10), (12, 22), (25, 40), (41, 42)]);
        let targets = ranges(&[(1, 9), (9, 21), (24, 45)]);

        let snapped = snap_ranges(&sources, &targets, &SnapOptions::default()).unwrap();

        assert_eq!(snapped.len(), sources.len());
        for window in snapped.windows(2) {
            assert!(
                window[0].end <= window[1].start,
                "{} overlaps {}",
                window[0],
                window[1]
            );
        }
    }

    #[test]
    fn snap_is_idempotent() {
        let sources = ranges(&[(0, 10), (20, 30)]);
        let targets = ranges(&[(2, 8), (22, 26)]);
        let options = SnapOptions::default();

        let once = snap_ranges(&sources, &targets, &options).unwrap();
        let twice = snap_ranges(&once, &targets, &options).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn snap_single_source() {
        let sources = ranges(&[(4, 14)]);
        let targets = ranges(&[(5, 12)]);

        let snapped = snap_ranges(&sources, &targets, &SnapOptions::default()).unwrap();
        assert_eq!(snapped, ranges(&[(5, 12)]));
    }

    #[test]
    fn snap_zero_length_source_passes_through() {
        let sources = ranges(&[(5, 5)]);
        let targets = ranges(&[(0, 10)]);

        let snapped = snap_ranges(&sources, &targets, &SnapOptions::default()).unwrap();
        assert_eq!(snapped, ranges(&[(5, 5)]));
    }

    #[test]
    fn snap_rejects_malformed_input() {
        let unsorted = ranges(&[(20, 30), (0, 10)]);
        let targets = ranges(&[(0, 5)]);
        assert!(snap_ranges(&unsorted, &targets, &SnapOptions::default()).is_err());

        let sources = ranges(&[(0, 10)]);
        let overlapping = ranges(&[(0, 5), (3, 8)]);
        assert!(snap_ranges(&sources, &overlapping, &SnapOptions::default()).is_err());
    }

    #[test]
    fn snap_stats_counts() {
        let sources = ranges(&[(0, 10), (20, 30)]);
        let targets = ranges(&[(2, 8), (22, 26)]);

        let (_, stats) =
            snap_ranges_with_stats(&sources, &targets, &SnapOptions::default()).unwrap();
        assert_eq!(stats.source_count, 2);
        assert_eq!(stats.associated, 1);
        assert_eq!(stats.passed_through, 1);
    }
}
