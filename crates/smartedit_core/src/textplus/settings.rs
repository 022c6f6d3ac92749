//! Text+ composition settings access.
//!
//! The host editor hands a text clip's Fusion composition over as a
//! JSON-like settings tree: a `Tools` table keyed by tool name, each tool
//! carrying a `__ctor` type tag and an `Inputs` table. This module wraps
//! that tree with typed accessors for the two tools the engines care
//! about: the `TextPlus` tool itself and the optional `StyledTextCLS`
//! character-level styling tool.

use serde_json::{Map, Value};

use crate::styles::StyleAnnotation;

/// Constructor tag of the Text+ tool.
const TEXTPLUS_CTOR: &str = "TextPlus";
/// Constructor tag of the character-level styling tool.
const CLS_CTOR: &str = "StyledTextCLS";

/// Errors that can occur while reading or writing settings trees.
#[derive(Debug, thiserror::Error)]
pub enum TextPlusError {
    /// The settings tree has no tool with the given constructor.
    #[error("Settings tree has no `{0}` tool")]
    MissingTool(&'static str),

    /// A node does not have the expected shape.
    #[error("Malformed settings: {0}")]
    Malformed(String),
}

impl TextPlusError {
    fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed(message.into())
    }
}

/// A Text+ composition settings tree.
///
/// Owns the tree; accessors read and rewrite it in place. The tree is
/// handed back to the orchestration layer with [`CompSettings::into_inner`]
/// for loading into the host tool.
#[derive(Debug, Clone, PartialEq)]
pub struct CompSettings {
    root: Value,
}

impl CompSettings {
    /// Wrap a settings tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Unwrap back into the raw tree.
    pub fn into_inner(self) -> Value {
        self.root
    }

    /// The `Tools` table.
    fn tools(&self) -> Result<&Map<String, Value>, TextPlusError> {
        self.root
            .get("Tools")
            .and_then(Value::as_object)
            .ok_or_else(|| TextPlusError::malformed("missing Tools table"))
    }

    /// Name of the first tool with the given constructor tag.
    fn find_tool_name(&self, ctor: &str) -> Result<Option<String>, TextPlusError> {
        Ok(self
            .tools()?
            .iter()
            .find(|(_, tool)| tool.get("__ctor").and_then(Value::as_str) == Some(ctor))
            .map(|(name, _)| name.clone()))
    }

    fn tool_inputs_mut(&mut self, name: &str) -> Result<&mut Map<String, Value>, TextPlusError> {
        self.root
            .get_mut("Tools")
            .and_then(|tools| tools.get_mut(name))
            .and_then(|tool| tool.get_mut("Inputs"))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| TextPlusError::malformed(format!("tool `{name}` has no Inputs table")))
    }

    fn tool_inputs(&self, name: &str) -> Result<&Map<String, Value>, TextPlusError> {
        self.tools()?
            .get(name)
            .and_then(|tool| tool.get("Inputs"))
            .and_then(Value::as_object)
            .ok_or_else(|| TextPlusError::malformed(format!("tool `{name}` has no Inputs table")))
    }

    /// Name of the Text+ tool. Every text clip composition has one.
    fn textplus_name(&self) -> Result<String, TextPlusError> {
        self.find_tool_name(TEXTPLUS_CTOR)?
            .ok_or(TextPlusError::MissingTool(TEXTPLUS_CTOR))
    }

    /// Name of the tool and input that carry the styled text.
    ///
    /// With character-level styling present, the CLS tool's `Text` input
    /// is authoritative; otherwise the Text+ `StyledText` input is.
    fn text_input_location(&self) -> Result<(String, &'static str), TextPlusError> {
        if let Some(cls) = self.find_tool_name(CLS_CTOR)? {
            Ok((cls, "Text"))
        } else {
            Ok((self.textplus_name()?, "StyledText"))
        }
    }

    /// The styled text content.
    pub fn styled_text(&self) -> Result<String, TextPlusError> {
        let (tool, input) = self.text_input_location()?;

        self.tool_inputs(&tool)?
            .get(input)
            .and_then(|node| node.get("Value"))
            .and_then(Value::as_str)
            .map(str::to_owned)
            .ok_or_else(|| TextPlusError::malformed(format!("`{tool}.{input}` has no text value")))
    }

    /// Replace the styled text content.
    pub fn set_styled_text(&mut self, text: &str) -> Result<(), TextPlusError> {
        let (tool, input) = self.text_input_location()?;
        let inputs = self.tool_inputs_mut(&tool)?;

        let node = inputs
            .get_mut(input)
            .and_then(Value::as_object_mut)
            .ok_or_else(|| TextPlusError::malformed(format!("`{tool}.{input}` is not a table")))?;

        node.insert("Value".to_string(), Value::String(text.to_owned()));
        Ok(())
    }

    /// The Text+ tool's `GlobalOut` input, which pins the clip length.
    pub fn global_out(&self) -> Result<Option<Value>, TextPlusError> {
        let name = self.textplus_name()?;
        Ok(self.tool_inputs(&name)?.get("GlobalOut").cloned())
    }

    /// Replace the Text+ tool's `GlobalOut` input.
    pub fn set_global_out(&mut self, global_out: Value) -> Result<(), TextPlusError> {
        let name = self.textplus_name()?;
        self.tool_inputs_mut(&name)?
            .insert("GlobalOut".to_string(), global_out);
        Ok(())
    }

    /// Whether the composition has a character-level styling tool.
    pub fn has_character_styling(&self) -> Result<bool, TextPlusError> {
        Ok(self.find_tool_name(CLS_CTOR)?.is_some())
    }

    /// Read the character-level style array as annotations.
    ///
    /// Entries are keyed by 1-based numeric strings; each value is an
    /// array whose elements 2 and 3 are the line start/end offsets. The
    /// whole entry array rides along as the annotation payload so a
    /// write-back preserves the styling fields. Returns `None` when the
    /// composition has no character-level styling tool.
    pub fn style_annotations(
        &self,
    ) -> Result<Option<Vec<StyleAnnotation<Value>>>, TextPlusError> {
        let Some(cls) = self.find_tool_name(CLS_CTOR)? else {
            return Ok(None);
        };

        let array = self
            .tool_inputs(&cls)?
            .get("CharacterLevelStyling")
            .and_then(|node| node.get("Value"))
            .and_then(|value| value.get("Array"))
            .and_then(Value::as_object)
            .ok_or_else(|| TextPlusError::malformed("character styling has no Array table"))?;

        let mut entries: Vec<(u64, &Value)> = Vec::with_capacity(array.len());
        for (key, value) in array {
            let index: u64 = key
                .parse()
                .map_err(|_| TextPlusError::malformed(format!("non-numeric style key `{key}`")))?;
            entries.push((index, value));
        }
        entries.sort_unstable_by_key(|(index, _)| *index);

        let mut annotations = Vec::with_capacity(entries.len());
        for (index, value) in entries {
            annotations.push(annotation_from_entry(index, value)?);
        }

        Ok(Some(annotations))
    }

    /// Write annotations back as the character-level style array.
    ///
    /// Entries are renumbered sequentially from 1 and each payload array's
    /// elements 2 and 3 are rewritten from the annotation's line range.
    pub fn set_style_annotations(
        &mut self,
        annotations: Vec<StyleAnnotation<Value>>,
    ) -> Result<(), TextPlusError> {
        let cls = self
            .find_tool_name(CLS_CTOR)?
            .ok_or(TextPlusError::MissingTool(CLS_CTOR))?;

        let mut array = Map::new();
        for (i, annotation) in annotations.into_iter().enumerate() {
            let entry = entry_from_annotation(annotation)?;
            array.insert((i + 1).to_string(), entry);
        }

        let inputs = self.tool_inputs_mut(&cls)?;
        let node = inputs
            .get_mut("CharacterLevelStyling")
            .and_then(|node| node.get_mut("Value"))
            .and_then(Value::as_object_mut)
            .ok_or_else(|| TextPlusError::malformed("character styling has no Value table"))?;

        node.insert("Array".to_string(), Value::Object(array));
        Ok(())
    }
}

/// Build an annotation from one style-array entry.
fn annotation_from_entry(
    index: u64,
    value: &Value,
) -> Result<StyleAnnotation<Value>, TextPlusError> {
    let elements = value.as_array().ok_or_else(|| {
        TextPlusError::malformed(format!("style entry {index} is not an array"))
    })?;

    let offset = |at: usize| -> Result<usize, TextPlusError> {
        elements
            .get(at)
            .and_then(Value::as_f64)
            .map(|n| n.max(0.0) as usize)
            .ok_or_else(|| {
                TextPlusError::malformed(format!("style entry {index} has no offset at {at}"))
            })
    };

    Ok(StyleAnnotation::new(value.clone(), offset(2)?, offset(3)?))
}

/// Rebuild a style-array entry from an annotation.
fn entry_from_annotation(annotation: StyleAnnotation<Value>) -> Result<Value, TextPlusError> {
    let (line_start, line_end) = annotation.line_range();
    let mut entry = annotation.attributes;

    let elements = entry
        .as_array_mut()
        .ok_or_else(|| TextPlusError::malformed("style payload is not an array"))?;

    if elements.len() < 4 {
        return Err(TextPlusError::malformed("style payload shorter than 4"));
    }

    elements[2] = Value::from(line_start as u64);
    elements[3] = Value::from(line_end as u64);

    Ok(entry)
}
