//! Render snapshot
//!
//! The fields a renderer may read from a text input, serializable to JSON
//! for debug dumps.

use serde::Serialize;

use crate::editable::InputType;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub text: String,
    /// Text to paint (masked in password mode)
    pub display_text: String,
    pub anchor: usize,
    pub caret: usize,
    /// Syllable to underline while composing
    pub assemble_position: Option<usize>,
    pub input_type: InputType,
    pub focused: bool,
    pub disabled: bool,
    pub hovered: bool,
    pub hangul_mode: bool,
    pub show_placeholder: bool,
    pub placeholder: String,
    pub caret_visible: bool,
}

impl RenderSnapshot {
    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
