//! Hangul jamo composition.
//!
//! Emulates keystroke-by-keystroke Hangul IME entry on top of the plain
//! character buffer:
//!
//! - [`decompose`] / [`compose`]: algorithmic jamo <-> syllable conversion
//!   over Hangul Compatibility Jamo (U+3131..U+318E) and Hangul Syllables
//!   (U+AC00..U+D7A3)
//! - [`insert_jamo`] / [`delete_jamo`]: edit the buffer around an
//!   *assemble position*, the index of the syllable still being composed
//! - [`keymap`]: the 2-set (dubeolsik) layout used to map jamo to the
//!   physical Latin keys in password fields, and back in Hangul mode

mod assemble;
mod jamo;
pub mod keymap;

pub use assemble::{delete_jamo, insert_jamo, Assembled};
pub use jamo::{compose, decompose};

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;

/// Check if a character belongs to one of the Hangul blocks we compose
pub fn is_hangul(ch: char) -> bool {
    matches!(
        ch as u32,
        0x1100..=0x11FF // Hangul Jamo
            | 0x3130..=0x318F // Hangul Compatibility Jamo
            | SYLLABLE_BASE..=SYLLABLE_LAST
    )
}

/// Check if a character is a fully composed syllable block
pub fn is_complete(ch: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(ch as u32))
}

/// Check if a character is Hangul but not a full syllable (a lone jamo)
pub fn is_incomplete(ch: char) -> bool {
    is_hangul(ch) && !is_complete(ch)
}
