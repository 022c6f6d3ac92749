//! Timecode value types.
//!
//! `FrameRate` is a validated frames-per-second value; `Timecode` is a
//! parsed `HH:MM:SS:FF` position; `TimecodeSettings` ties a frame rate to
//! a timeline's configured start timecode so positions can be expressed
//! either anchored ("absolute") or as zero-based durations ("relative").

use std::time::Duration;

use super::convert;
use super::error::{InvalidRateError, ParseError, TimecodeError};

/// Small epsilon for floating-point comparisons.
pub(crate) const EPSILON: f64 = 1e-6;

/// A validated frame rate.
///
/// Construction rejects zero, negative, and non-finite rates, so every
/// `FrameRate` in circulation is safe to divide by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate(f64);

impl FrameRate {
    /// Create a frame rate, validating the value.
    pub fn new(fps: f64) -> Result<Self, InvalidRateError> {
        if !fps.is_finite() || fps <= 0.0 {
            return Err(InvalidRateError(fps));
        }
        Ok(Self(fps))
    }

    /// The rate in frames per second.
    pub fn fps(&self) -> f64 {
        self.0
    }

    /// The nominal (integer) rate used by timecode field arithmetic.
    ///
    /// NTSC fractional rates count timecode at the neighboring integer
    /// rate: 23.976 -> 24, 29.97 -> 30, 59.94 -> 60.
    pub fn nominal(&self) -> u32 {
        self.0.round().max(1.0) as u32
    }

    /// Whether this is a fractional (NTSC-style) rate.
    pub fn is_fractional(&self) -> bool {
        (self.0 - self.nominal() as f64).abs() > EPSILON
    }

    /// Duration of a single frame.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.0)
    }

    /// Frame numbers dropped per minute in drop-frame counting.
    ///
    /// The standard rule: 6.6666% of the nominal rate, rounded. Yields 2
    /// for the 30-frame family and 4 for the 60-frame family.
    pub fn drop_frames_per_minute(&self) -> u32 {
        (self.nominal() as f64 * 0.066666).round() as u32
    }
}

impl std::fmt::Display for FrameRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parse an fps value that may be written as a fraction.
///
/// Accepts `"24000/1001"` or a plain number like `"25"`.
pub fn parse_fps(s: &str) -> Result<FrameRate, InvalidRateError> {
    let value = if let Some((num, denom)) = s.split_once('/') {
        let num: f64 = num.trim().parse().map_err(|_| InvalidRateError(f64::NAN))?;
        let denom: f64 = denom
            .trim()
            .parse()
            .map_err(|_| InvalidRateError(f64::NAN))?;
        if denom == 0.0 {
            return Err(InvalidRateError(f64::INFINITY));
        }
        num / denom
    } else {
        s.trim().parse().map_err(|_| InvalidRateError(f64::NAN))?
    };

    FrameRate::new(value)
}

/// A timecode position, `HH:MM:SS:FF`.
///
/// Drop-frame timecodes render the frames separator as `;`, the editor
/// convention for NTSC fractional rates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timecode {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub frames: u32,
    pub drop_frame: bool,
}

impl Timecode {
    /// Parse a timecode string.
    ///
    /// Field separators may be `:` or `;`; any `;` flags the timecode as
    /// drop-frame. Minutes and seconds must be below 60. The frames field
    /// is validated against a rate at conversion time, not here.
    pub fn parse(s: &str) -> Result<Self, ParseError> {
        let trimmed = s.trim();
        let drop_frame = trimmed.contains(';');
        let fields: Vec<&str> = trimmed.split([':', ';']).collect();

        if fields.len() != 4 {
            return Err(ParseError::InvalidFormat(trimmed.to_string()));
        }

        let parse_field = |text: &str, field: &'static str| -> Result<u32, ParseError> {
            text.parse::<u32>()
                .map_err(|_| ParseError::invalid_field(trimmed, field))
        };

        let hours = parse_field(fields[0], "hours")?;
        let minutes = parse_field(fields[1], "minutes")?;
        let seconds = parse_field(fields[2], "seconds")?;
        let frames = parse_field(fields[3], "frames")?;

        if minutes >= 60 {
            return Err(ParseError::out_of_range(trimmed, "minutes", minutes));
        }
        if seconds >= 60 {
            return Err(ParseError::out_of_range(trimmed, "seconds", seconds));
        }

        Ok(Self {
            hours,
            minutes,
            seconds,
            frames,
            drop_frame,
        })
    }
}

impl std::fmt::Display for Timecode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sep = if self.drop_frame { ';' } else { ':' };
        write!(
            f,
            "{:02}:{:02}:{:02}{}{:02}",
            self.hours, self.minutes, self.seconds, sep, self.frames
        )
    }
}

impl std::str::FromStr for Timecode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// A timeline's timecode context: frame rate plus configured start.
///
/// Anchored ("absolute") conversions add or subtract the start timecode's
/// frame offset; zero-based ("relative") conversions ignore it. Drop-frame
/// counting follows the start timecode's separator, matching how the host
/// editor reports its timeline settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimecodeSettings {
    rate: FrameRate,
    drop_frame: bool,
    start_offset: i64,
}

impl TimecodeSettings {
    /// Build settings from a timeline's start timecode string and rate.
    pub fn new(start_timecode: &str, rate: FrameRate) -> Result<Self, TimecodeError> {
        let start = Timecode::parse(start_timecode)?;
        let start_offset = convert::timecode_to_frame(&start, rate)?;

        Ok(Self {
            rate,
            drop_frame: start.drop_frame,
            start_offset,
        })
    }

    /// Build settings with no start offset (timelines anchored at zero).
    pub fn zero_based(rate: FrameRate) -> Self {
        Self {
            rate,
            drop_frame: false,
            start_offset: 0,
        }
    }

    /// The timeline frame rate.
    pub fn rate(&self) -> FrameRate {
        self.rate
    }

    /// Whether timecodes on this timeline use drop-frame counting.
    pub fn drop_frame(&self) -> bool {
        self.drop_frame
    }

    /// The start timecode expressed in frames.
    pub fn start_offset(&self) -> i64 {
        self.start_offset
    }

    /// Parse a timecode string into a zero-based frame index.
    ///
    /// When `absolute`, the string is anchored at the timeline start and
    /// the offset is subtracted; otherwise the string is a duration.
    pub fn timecode_to_frame(&self, s: &str, absolute: bool) -> Result<i64, TimecodeError> {
        let tc = Timecode::parse(s)?;
        let frame = convert::timecode_to_frame(&tc, self.rate)?;

        Ok(if absolute {
            frame - self.start_offset
        } else {
            frame
        })
    }

    /// Format a zero-based frame index as a timecode.
    ///
    /// When `absolute`, the timeline start is added so the result matches
    /// what the editor displays; otherwise the result is a zero-based
    /// duration timecode.
    pub fn frame_to_timecode(&self, frame: i64, absolute: bool) -> Timecode {
        let anchored = if absolute {
            frame + self.start_offset
        } else {
            frame
        };

        convert::frame_to_timecode(anchored, self.rate, self.drop_frame)
    }

    /// Convert a wall-clock duration to a frame index.
    ///
    /// When `absolute`, the timeline start offset is added, yielding the
    /// record frame the host editor uses for clip positions.
    pub fn duration_to_frame(&self, duration: Duration, absolute: bool) -> i64 {
        let frame = convert::duration_to_frame(duration, self.rate);

        if absolute {
            frame + self.start_offset
        } else {
            frame
        }
    }

    /// Convert a frame index to a wall-clock duration.
    ///
    /// When `absolute`, the frame is interpreted as a record frame and the
    /// start offset is removed first. Frames before the timeline start
    /// clamp to zero.
    pub fn frame_to_duration(&self, frame: i64, absolute: bool) -> Duration {
        let zero_based = if absolute {
            frame - self.start_offset
        } else {
            frame
        };

        convert::frame_to_duration(zero_based.max(0), self.rate)
    }
}
