//! Smart Edit Core - subtitle-driven edit logic
//!
//! This crate contains the pure computation layer behind subtitle-driven
//! timeline editing: timecode/frame conversion, range snapping, style
//! remapping, and insert planning. It has zero host or UI dependencies;
//! the adapter layer that talks to the editing application consumes it as
//! a library and feeds it plain records.

pub mod config;
pub mod editing;
pub mod logging;
pub mod models;
pub mod ranges;
pub mod styles;
pub mod subtitles;
pub mod textplus;
pub mod timecode;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
