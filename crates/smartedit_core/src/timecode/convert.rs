//! Frame/timecode/duration conversion functions.
//!
//! Pure functions, deterministic, no side effects. Timecode field math
//! runs at the nominal integer rate; drop-frame counting compensates the
//! NTSC drift by skipping frame numbers at minute boundaries.

use std::time::Duration;

use super::error::ParseError;
use super::types::{FrameRate, Timecode, EPSILON};

/// Rescale a frame count from one rate to another.
///
/// The count is carried across as wall-clock seconds and rounded to the
/// nearest frame at the destination rate. Converting A -> B -> A recovers
/// the original count within one frame.
pub fn frame_to_frame(count: i64, from: FrameRate, to: FrameRate) -> i64 {
    let seconds = count as f64 / from.fps();
    (seconds * to.fps()).round() as i64
}

/// Convert a timecode to a frame index at the given rate.
///
/// Non-drop timecode counts `nominal` frames per second. Drop-frame
/// subtracts the dropped frame numbers: `drop` per minute, except every
/// tenth minute.
pub fn timecode_to_frame(tc: &Timecode, rate: FrameRate) -> Result<i64, ParseError> {
    let nominal = rate.nominal();

    if tc.frames >= nominal {
        return Err(ParseError::FramesOutOfRange {
            frames: tc.frames,
            nominal,
        });
    }

    let nominal = i64::from(nominal);
    let total_seconds =
        i64::from(tc.hours) * 3600 + i64::from(tc.minutes) * 60 + i64::from(tc.seconds);
    let mut frame = total_seconds * nominal + i64::from(tc.frames);

    if tc.drop_frame {
        let drop = i64::from(rate.drop_frames_per_minute());
        let total_minutes = i64::from(tc.hours) * 60 + i64::from(tc.minutes);
        frame -= drop * (total_minutes - total_minutes / 10);
    }

    Ok(frame)
}

/// Convert a frame index to a timecode at the given rate.
///
/// Negative frames clamp to zero. With `drop_frame`, the dropped frame
/// numbers are re-inserted before field extraction so the rendered fields
/// line up with wall clock.
pub fn frame_to_timecode(frame: i64, rate: FrameRate, drop_frame: bool) -> Timecode {
    let nominal = i64::from(rate.nominal());
    let mut frame = frame.max(0);

    if drop_frame {
        let drop = i64::from(rate.drop_frames_per_minute());
        let frames_per_minute = nominal * 60 - drop;
        let frames_per_10_minutes = frames_per_minute * 10 + drop;

        let ten_minute_blocks = frame / frames_per_10_minutes;
        let remainder = frame % frames_per_10_minutes;

        frame += drop * 9 * ten_minute_blocks;
        if remainder > drop {
            frame += drop * ((remainder - drop) / frames_per_minute);
        }
    }

    let frames = (frame % nominal) as u32;
    let total_seconds = frame / nominal;

    Timecode {
        hours: (total_seconds / 3600) as u32,
        minutes: (total_seconds / 60 % 60) as u32,
        seconds: (total_seconds % 60) as u32,
        frames,
        drop_frame,
    }
}

/// Parse a timecode string straight to a frame index.
pub fn str_to_frame(s: &str, rate: FrameRate) -> Result<i64, ParseError> {
    let tc = Timecode::parse(s)?;
    timecode_to_frame(&tc, rate)
}

/// Format a frame index straight to a timecode string.
pub fn frame_to_str(frame: i64, rate: FrameRate, drop_frame: bool) -> String {
    frame_to_timecode(frame, rate, drop_frame).to_string()
}

/// Convert a wall-clock duration to a frame index.
///
/// Uses floor with epsilon protection: the result is the frame displaying
/// at that instant, stable under floating-point drift.
pub fn duration_to_frame(duration: Duration, rate: FrameRate) -> i64 {
    (duration.as_secs_f64() * rate.fps() + EPSILON) as i64
}

/// Convert a frame index to its wall-clock start time.
///
/// Negative frames clamp to zero.
pub fn frame_to_duration(frame: i64, rate: FrameRate) -> Duration {
    Duration::from_secs_f64(frame.max(0) as f64 / rate.fps())
}

/// Convert a timecode to a wall-clock duration at the given rate.
pub fn timecode_to_duration(tc: &Timecode, rate: FrameRate) -> Result<Duration, ParseError> {
    Ok(frame_to_duration(timecode_to_frame(tc, rate)?, rate))
}

/// Convert a wall-clock duration to a timecode at the given rate.
pub fn duration_to_timecode(duration: Duration, rate: FrameRate, drop_frame: bool) -> Timecode {
    frame_to_timecode(duration_to_frame(duration, rate), rate, drop_frame)
}
