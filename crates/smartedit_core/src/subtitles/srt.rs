//! SRT subtitle parsing and writing.
//!
//! SRT files consist of sequential entries:
//! ```text
//! 1
//! 00:00:01,000 --> 00:00:04,000
//! Hello, world!
//!
//! 2
//! 00:00:05,000 --> 00:00:08,000
//! This is a test.
//! ```
//!
//! Each entry has an index number (ignored during parsing, regenerated on
//! write), a timing line, one or more lines of text, and a blank line
//! separator.

use super::error::ParseError;
use super::types::{RoundingMode, SubtitleCue};

/// Parse SRT content into cues.
pub fn parse_srt(content: &str) -> Result<Vec<SubtitleCue>, ParseError> {
    let mut cues = Vec::new();

    // Normalize line endings and split into blocks
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let blocks: Vec<&str> = content.split("\n\n").collect();

    let mut line_offset = 0;

    for block in blocks {
        let trimmed = block.trim();
        if trimmed.is_empty() {
            line_offset += 2;
            continue;
        }

        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            line_offset += lines.len() + 1;
            continue;
        }

        // Find the timing line (may or may not have an index before it)
        let Some((timing_index, timing_line)) = find_timing_line(&lines) else {
            line_offset += lines.len() + 1;
            continue;
        };

        let timing_line_num = line_offset + timing_index + 1;
        let (start_ms, end_ms) = parse_srt_timing(timing_line)
            .ok_or_else(|| ParseError::invalid_time(timing_line_num, timing_line))?;

        // Text is everything after the timing line
        let text = lines[timing_index + 1..].join("\n");

        if !text.is_empty() {
            cues.push(SubtitleCue::new(start_ms, end_ms, text));
        }

        line_offset += lines.len() + 1;
    }

    tracing::debug!("Parsed {} SRT cues", cues.len());
    Ok(cues)
}

/// Find the timing line in a block of lines.
fn find_timing_line<'a>(lines: &[&'a str]) -> Option<(usize, &'a str)> {
    lines
        .iter()
        .enumerate()
        .find(|(_, line)| line.contains(" --> "))
        .map(|(i, line)| (i, *line))
}

/// Parse an SRT timing line: `HH:MM:SS,mmm --> HH:MM:SS,mmm`.
fn parse_srt_timing(line: &str) -> Option<(f64, f64)> {
    let (start, end) = line.split_once(" --> ")?;
    Some((parse_srt_time(start.trim())?, parse_srt_time(end.trim())?))
}

/// Parse an SRT timestamp: `HH:MM:SS,mmm` or `HH:MM:SS.mmm`.
///
/// Returns time in milliseconds.
pub fn parse_srt_time(s: &str) -> Option<f64> {
    // Handle both comma and period as decimal separator
    let s = s.trim().replace(',', ".");

    let parts: Vec<&str> = s.split(':').collect();
    if parts.len() != 3 {
        return None;
    }

    let hours: f64 = parts[0].parse().ok()?;
    let minutes: f64 = parts[1].parse().ok()?;

    let sec_parts: Vec<&str> = parts[2].split('.').collect();
    let seconds: f64 = sec_parts[0].parse().ok()?;

    let milliseconds: f64 = if sec_parts.len() > 1 {
        let ms_str = sec_parts[1];
        let ms_val: f64 = ms_str.parse().ok()?;
        // Normalize based on number of digits
        match ms_str.len() {
            1 => ms_val * 100.0,
            2 => ms_val * 10.0,
            3 => ms_val,
            _ => ms_val / 10f64.powi(ms_str.len() as i32 - 3),
        }
    } else {
        0.0
    };

    Some(hours * 3600000.0 + minutes * 60000.0 + seconds * 1000.0 + milliseconds)
}

/// Write cues as SRT content.
///
/// Indices are regenerated 1-based; the rounding mode converts float
/// milliseconds to the format's integer precision.
pub fn write_srt(cues: &[SubtitleCue], rounding: RoundingMode) -> String {
    let mut output = String::new();

    for (i, cue) in cues.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }

        output.push_str(&format!("{}\n", i + 1));
        output.push_str(&format!(
            "{} --> {}\n",
            format_srt_time(cue.start_ms, rounding),
            format_srt_time(cue.end_ms, rounding)
        ));
        output.push_str(&cue.text);
        output.push('\n');
    }

    output
}

/// Format milliseconds as an SRT timestamp (HH:MM:SS,mmm).
pub fn format_srt_time(ms: f64, rounding: RoundingMode) -> String {
    let ms = rounding.apply(ms).max(0.0) as u64;

    let millis = ms % 1000;
    let total_secs = ms / 1000;
    let secs = total_secs % 60;
    let total_mins = total_secs / 60;
    let mins = total_mins % 60;
    let hours = total_mins / 60;

    format!("{:02}:{:02}:{:02},{:03}", hours, mins, secs, millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_time_variants() {
        assert!((parse_srt_time("00:00:01,000").unwrap() - 1000.0).abs() < 0.001);
        assert!((parse_srt_time("00:00:01,500").unwrap() - 1500.0).abs() < 0.001);
        assert!((parse_srt_time("00:01:00,000").unwrap() - 60000.0).abs() < 0.001);
        assert!((parse_srt_time("01:00:00,000").unwrap() - 3600000.0).abs() < 0.001);

        // Period instead of comma
        assert!((parse_srt_time("00:00:01.500").unwrap() - 1500.0).abs() < 0.001);

        assert!(parse_srt_time("not a time").is_none());
    }

    #[test]
    fn parse_basic_srt() {
        let content = "1\n00:00:01,000 --> 00:00:04,000\nHello, world!\n\n2\n00:00:05,000 --> 00:00:08,000\nThis is a test.\nWith multiple lines.\n";

        let cues = parse_srt(content).unwrap();
        assert_eq!(cues.len(), 2);

        assert!((cues[0].start_ms - 1000.0).abs() < 0.001);
        assert!((cues[0].end_ms - 4000.0).abs() < 0.001);
        assert_eq!(cues[0].text, "Hello, world!");

        assert_eq!(cues[1].text, "This is a test.\nWith multiple lines.");
    }

    #[test]
    fn parse_srt_without_index() {
        let content = "\n00:00:01,000 --> 00:00:04,000\nHello!\n\n00:00:05,000 --> 00:00:08,000\nAnother.\n";

        let cues = parse_srt(content).unwrap();
        assert_eq!(cues.len(), 2);
    }

    #[test]
    fn parse_srt_crlf() {
        let content = "1\r\n00:00:01,000 --> 00:00:04,000\r\nWindows line endings\r\n";

        let cues = parse_srt(content).unwrap();
        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].text, "Windows line endings");
    }

    #[test]
    fn parse_rejects_malformed_timing() {
        let content = "1\n00:00:xx,000 --> 00:00:04,000\nBroken\n";
        assert!(parse_srt(content).is_err());
    }

    #[test]
    fn format_time_rounding() {
        assert_eq!(format_srt_time(0.0, RoundingMode::Round), "00:00:00,000");
        assert_eq!(format_srt_time(1500.0, RoundingMode::Round), "00:00:01,500");
        assert_eq!(format_srt_time(3600000.0, RoundingMode::Round), "01:00:00,000");

        assert_eq!(format_srt_time(1234.5, RoundingMode::Floor), "00:00:01,234");
        assert_eq!(format_srt_time(1234.5, RoundingMode::Round), "00:00:01,235");
        assert_eq!(format_srt_time(1234.5, RoundingMode::Ceil), "00:00:01,235");
    }

    #[test]
    fn write_basic_srt() {
        let cues = vec![
            SubtitleCue::new(1000.0, 4000.0, "Hello, world!"),
            SubtitleCue::new(5000.0, 8000.0, "Test subtitle."),
        ];

        let output = write_srt(&cues, RoundingMode::Round);
        let expected = "1\n00:00:01,000 --> 00:00:04,000\nHello, world!\n\n2\n00:00:05,000 --> 00:00:08,000\nTest subtitle.\n";
        assert_eq!(output, expected);
    }

    #[test]
    fn round_trip_preserves_cues() {
        let cues = vec![
            SubtitleCue::new(1000.0, 4000.0, "First"),
            SubtitleCue::new(5500.0, 8250.0, "Second\nline two"),
        ];

        let reparsed = parse_srt(&write_srt(&cues, RoundingMode::Round)).unwrap();
        assert_eq!(reparsed, cues);
    }
}
