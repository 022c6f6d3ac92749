//! Pure planning for timeline edits.
//!
//! Produces clip placement plans as plain data; the host-facing adapter
//! layer executes them.

mod plan;

pub use plan::{
    compute_insert_ranges, min_insert_frames, plan_insert, plan_inserts, ClipSource,
    InsertRequest, PlannedClip,
};
