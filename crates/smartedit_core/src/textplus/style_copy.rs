//! Style propagation between text clip compositions.
//!
//! Copying a styled template onto existing text clips must keep each
//! destination's own text and clip length while taking everything else
//! from the source: fonts, layout, and the character-level styling,
//! remapped onto the destination text's line boundaries.

use serde_json::Value;

use crate::logging::ProgressUpdate;
use crate::styles::remap_annotations;

use super::settings::{CompSettings, TextPlusError};

/// Merge a source composition's styling into a destination.
///
/// The result is the source tree with the destination's styled text and
/// `GlobalOut` restored, and the source's character-level style array
/// remapped to the destination text's lines. The caller loads the
/// returned tree back into the destination tool.
pub fn apply_style(source: &Value, destination: &Value) -> Result<Value, TextPlusError> {
    let destination = CompSettings::new(destination.clone());
    let text = destination.styled_text()?;
    let global_out = destination.global_out()?;

    let mut merged = CompSettings::new(source.clone());
    merged.set_styled_text(&text)?;

    if let Some(global_out) = global_out {
        merged.set_global_out(global_out)?;
    }

    if let Some(annotations) = merged.style_annotations()? {
        let remapped = remap_annotations(annotations, &text);
        merged.set_style_annotations(remapped)?;
    }

    Ok(merged.into_inner())
}

/// Apply a source composition's styling across many destinations.
///
/// Reports one progress update per destination through the explicit
/// callback. Fails on the first destination that cannot be merged.
pub fn apply_style_to_many(
    source: &Value,
    destinations: &[Value],
    progress: Option<&(dyn Fn(&ProgressUpdate) + Send + Sync)>,
) -> Result<Vec<Value>, TextPlusError> {
    let total = destinations.len();
    tracing::debug!("Copying style to {} clips", total);

    destinations
        .iter()
        .enumerate()
        .map(|(i, destination)| {
            if let Some(report) = progress {
                report(&ProgressUpdate::new(
                    format!("Setting {}/{} Text+ content", i + 1, total),
                    i + 1,
                    total,
                ));
            }

            apply_style(source, destination)
        })
        .collect()
}
