//! Cue/frame conversions.
//!
//! Cue times are zero-based durations; clip positions on the timeline are
//! record frames anchored at the timeline's start timecode. These
//! conversions bridge the two through `TimecodeSettings`, the same way
//! imported cues become inserted clips and exported clips become cues.

use std::time::Duration;

use crate::ranges::FrameRange;
use crate::timecode::TimecodeSettings;

use super::types::SubtitleCue;

fn ms_to_duration(ms: f64) -> Duration {
    Duration::from_secs_f64(ms.max(0.0) / 1000.0)
}

fn duration_to_ms(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

/// The record-frame range a cue occupies on the timeline.
pub fn cue_frame_range(cue: &SubtitleCue, settings: &TimecodeSettings) -> FrameRange {
    let start = settings.duration_to_frame(ms_to_duration(cue.start_ms), true);
    let end = settings.duration_to_frame(ms_to_duration(cue.end_ms), true);

    FrameRange::new(start, end.max(start))
}

/// Record-frame ranges for a list of cues, in order.
pub fn cue_frame_ranges(cues: &[SubtitleCue], settings: &TimecodeSettings) -> Vec<FrameRange> {
    cues.iter()
        .map(|cue| cue_frame_range(cue, settings))
        .collect()
}

/// Rebuild a cue from a clip's record-frame range and text content.
pub fn cue_from_frame_range(
    range: &FrameRange,
    text: impl Into<String>,
    settings: &TimecodeSettings,
) -> SubtitleCue {
    let start = settings.frame_to_duration(range.start, true);
    let end = settings.frame_to_duration(range.end, true);

    SubtitleCue::new(duration_to_ms(start), duration_to_ms(end), text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timecode::FrameRate;

    fn settings() -> TimecodeSettings {
        let rate = FrameRate::new(24.0).unwrap();
        TimecodeSettings::new("01:00:00:00", rate).unwrap()
    }

    #[test]
    fn cue_maps_to_record_frames() {
        let cue = SubtitleCue::new(1000.0, 2000.0, "Hello");
        let range = cue_frame_range(&cue, &settings());

        // One second past a one-hour start at 24 fps
        assert_eq!(range, FrameRange::new(86400 + 24, 86400 + 48));
    }

    #[test]
    fn frame_range_maps_back_to_cue_times() {
        let range = FrameRange::new(86400 + 24, 86400 + 48);
        let cue = cue_from_frame_range(&range, "Hello", &settings());

        assert!((cue.start_ms - 1000.0).abs() < 0.001);
        assert!((cue.end_ms - 2000.0).abs() < 0.001);
        assert_eq!(cue.text, "Hello");
    }

    #[test]
    fn round_trip_through_frames() {
        let cues = vec![
            SubtitleCue::new(0.0, 1500.0, "a"),
            SubtitleCue::new(2000.0, 4125.0, "b"),
        ];
        let s = settings();

        for cue in &cues {
            let range = cue_frame_range(cue, &s);
            let back = cue_from_frame_range(&range, cue.text.clone(), &s);

            // Frame quantization loses at most one frame duration
            let frame_ms = 1000.0 / 24.0;
            assert!((back.start_ms - cue.start_ms).abs() < frame_ms);
            assert!((back.end_ms - cue.end_ms).abs() < frame_ms);
        }
    }

    #[test]
    fn degenerate_cue_yields_empty_range() {
        let cue = SubtitleCue::new(1000.0, 1000.0, "flash");
        let range = cue_frame_range(&cue, &settings());
        assert!(range.is_empty());
    }
}
