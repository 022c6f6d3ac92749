//! Timecode error types.

/// Errors that can occur while parsing timecode strings.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// The string does not look like `HH:MM:SS:FF`.
    #[error("Invalid timecode '{0}': expected HH:MM:SS:FF")]
    InvalidFormat(String),

    /// A field is not a valid number.
    #[error("Invalid {field} field in timecode '{value}'")]
    InvalidField {
        value: String,
        field: &'static str,
    },

    /// A field exceeds its legal range.
    #[error("{field} field {number} out of range in timecode '{value}'")]
    FieldOutOfRange {
        value: String,
        field: &'static str,
        number: u32,
    },

    /// The frames field does not fit the frame rate.
    #[error("Frames field {frames} out of range for {nominal} fps")]
    FramesOutOfRange { frames: u32, nominal: u32 },
}

/// A frame rate that is zero, negative, or not finite.
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("Invalid frame rate: {0}")]
pub struct InvalidRateError(pub f64);

/// Errors that can occur during timecode operations.
#[derive(Debug, thiserror::Error)]
pub enum TimecodeError {
    /// Parse error.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid frame rate.
    #[error(transparent)]
    InvalidRate(#[from] InvalidRateError),
}

impl ParseError {
    /// Create an invalid-field error.
    pub fn invalid_field(value: impl Into<String>, field: &'static str) -> Self {
        Self::InvalidField {
            value: value.into(),
            field,
        }
    }

    /// Create an out-of-range field error.
    pub fn out_of_range(value: impl Into<String>, field: &'static str, number: u32) -> Self {
        Self::FieldOutOfRange {
            value: value.into(),
            field,
            number,
        }
    }
}
