//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use hangul_textinput::{
    InputType, KeyCode, KeyEvent, Modifiers, Selection, TextInput, TextInputConfig,
};

/// Create a focused input with given text and a collapsed caret
pub fn test_input(text: &str, caret: usize) -> TextInput {
    test_input_with_selection(text, caret, caret)
}

/// Create a focused input with given text and a directional selection
pub fn test_input_with_selection(text: &str, anchor: usize, caret: usize) -> TextInput {
    let mut input = TextInput::with_text(text);
    input.set_focused(true);
    input.set_selection(anchor, caret);
    input
}

/// Create a focused input of the given type
pub fn typed_input(input_type: InputType, text: &str, caret: usize) -> TextInput {
    let config = TextInputConfig::builder()
        .input_type(input_type)
        .default_value(text)
        .build();
    let mut input = TextInput::new(config);
    input.set_focused(true);
    input.set_selection(caret, caret);
    input
}

/// Press a key with modifiers
pub fn press(input: &mut TextInput, key: KeyCode, mods: Modifiers) {
    input.handle_key(&KeyEvent::new(key, mods));
}

/// Type every character of `keys` as an unmodified key press
pub fn type_keys(input: &mut TextInput, keys: &str) {
    for ch in keys.chars() {
        input.handle_key(&KeyEvent::char(ch));
    }
}

pub fn sel(anchor: usize, caret: usize) -> Selection {
    Selection::new(anchor, caret)
}

/// Check the structural invariants every reachable state must satisfy
pub fn assert_invariants(input: &TextInput) {
    let len = input.len();
    let selection = input.selection();
    assert!(
        selection.start() <= selection.end() && selection.end() <= len,
        "selection {:?} out of bounds for len {}",
        selection,
        len
    );
    if let Some(pos) = input.assemble_position() {
        assert!(pos < len, "assemble position {} out of bounds", pos);
        assert!(
            hangul_textinput::hangul::is_hangul(input.chars()[pos]),
            "assemble position {} is not on a Hangul character",
            pos
        );
    }
}
