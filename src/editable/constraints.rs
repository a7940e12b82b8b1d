//! Input modes and length limits.
//!
//! [`InputType`] decides what text a field accepts and how it is displayed;
//! [`EditConstraints`] pairs it with the optional max length.

use serde::{Deserialize, Serialize};

use crate::hangul::keymap;

/// Input mode of the field
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    /// Signed integer literals only
    #[serde(alias = "number")]
    Numeric,
    /// Masked display; records physical keys instead of composing Hangul
    Password,
}

impl InputType {
    /// Check whether inserted text is acceptable in this mode
    pub fn accepts(&self, text: &str) -> bool {
        match self {
            InputType::Numeric => is_integer_literal(text),
            InputType::Text | InputType::Password => true,
        }
    }

    pub fn is_password(&self) -> bool {
        matches!(self, InputType::Password)
    }

    /// Word navigation stops at the buffer ends in password mode
    pub fn has_word_stops(&self) -> bool {
        !self.is_password()
    }

    /// Map incoming text for storage; password fields store the Latin key
    pub fn map_input(&self, text: &str) -> String {
        match self {
            InputType::Password => keymap::text_to_latin(text),
            InputType::Text | InputType::Numeric => text.to_string(),
        }
    }

    /// Text as it should be shown to the user
    pub fn mask(&self, text: &str, password_char: char) -> String {
        match self {
            InputType::Password => text.chars().map(|_| password_char).collect(),
            InputType::Text | InputType::Numeric => text.to_string(),
        }
    }
}

/// `-?[0-9]+`
fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Constraints that limit what edits the field accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditConstraints {
    pub input_type: InputType,

    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,
}

impl EditConstraints {
    pub fn new(input_type: InputType, max_length: Option<usize>) -> Self {
        Self {
            input_type,
            max_length,
        }
    }

    /// Characters still insertable when `replaced` of `current_len` are
    /// about to be overwritten. None means unlimited.
    pub fn remaining_capacity(&self, current_len: usize, replaced: usize) -> Option<usize> {
        self.max_length
            .map(|max| max.saturating_sub(current_len.saturating_sub(replaced)))
    }

    /// Check if a buffer of `len` characters fits
    pub fn fits(&self, len: usize) -> bool {
        self.max_length.map_or(true, |max| len <= max)
    }

    /// Cut `chars` down to what fits after replacing `replaced` characters
    pub fn truncate(&self, chars: &mut Vec<char>, current_len: usize, replaced: usize) {
        if let Some(capacity) = self.remaining_capacity(current_len, replaced) {
            chars.truncate(capacity);
        }
    }
}
