//! Subtitle error types.

/// Errors that can occur during subtitle parsing.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Invalid or malformed time format.
    #[error("Invalid time format at line {line}: '{value}'")]
    InvalidTime { line: usize, value: String },

    /// Generic parse error.
    #[error("Parse error at line {line}: {message}")]
    Generic { line: usize, message: String },
}

impl ParseError {
    /// Create an invalid time error.
    pub fn invalid_time(line: usize, value: impl Into<String>) -> Self {
        Self::InvalidTime {
            line,
            value: value.into(),
        }
    }

    /// Create a generic parse error.
    pub fn at_line(line: usize, message: impl Into<String>) -> Self {
        Self::Generic {
            line,
            message: message.into(),
        }
    }
}
