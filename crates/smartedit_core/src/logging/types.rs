//! Logging and progress types.

use serde::{Deserialize, Serialize};

/// Log level for filtering messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace-level debugging (very verbose).
    Trace,
    /// Debug information.
    Debug,
    /// General information.
    #[default]
    Info,
    /// Warnings.
    Warn,
    /// Errors.
    Error,
}

impl LogLevel {
    /// Convert to tracing level.
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

/// A single progress report from a batch operation.
///
/// `current` is 1-based; `total` is the number of items in the batch.
#[derive(Debug, Clone)]
pub struct ProgressUpdate {
    /// Human-readable description of the step.
    pub message: String,
    /// Index of the item being processed (1-based).
    pub current: usize,
    /// Total number of items in the batch.
    pub total: usize,
}

impl ProgressUpdate {
    /// Create a progress update.
    pub fn new(message: impl Into<String>, current: usize, total: usize) -> Self {
        Self {
            message: message.into(),
            current,
            total,
        }
    }
}

/// Callback invoked with progress updates during batch operations.
///
/// Callers pass this explicitly into the operations that report progress;
/// there is no global progress sink.
pub type ProgressFn = dyn Fn(&ProgressUpdate) + Send + Sync;
