//! Per-line style annotations and remapping.
//!
//! - **annotation**: the `StyleAnnotation` record, line-boundary
//!   computation, and line groupings
//! - **remap**: the engine that carries styling intent over to a
//!   replacement text body

mod annotation;
mod remap;

pub use annotation::{distinct_line_groupings, line_ranges, LineRange, StyleAnnotation};
pub use remap::remap_annotations;
