//! Text+ composition settings and style propagation.
//!
//! - **settings**: typed accessors over the JSON-like settings tree the
//!   host editor exposes for a text clip's composition
//! - **style_copy**: the pure merge that carries a template's styling
//!   onto other clips while keeping their text and length

mod settings;
mod style_copy;

pub use settings::{CompSettings, TextPlusError};
pub use style_copy::{apply_style, apply_style_to_many};
