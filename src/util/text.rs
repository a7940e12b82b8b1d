//! Character classification and stop-range computation for word navigation
//!
//! A "stop range" is the maximal run of characters around a position that
//! belong to the same word class. It drives double-click selection as well as
//! Alt/Option word movement and word deletion.

use crate::hangul;

/// Punctuation and whitespace that terminate a word
pub const DELIMITERS: &[char] = &[
    ' ', ',', '.', ';', ':', '/', '[', ']', '-', '\\', '?', '#', '$', '%', '^', '&', '*', '(',
    ')', '!', '@', '+', '=', '|', '~', '`', '{', '}', '"', '\'', '<', '>',
];

/// Check if a character is a word delimiter
pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

/// Character class for word navigation, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// A space (runs of spaces bind to one neighbouring word on each side)
    Space,
    /// Any other delimiter; runs only merge with identical characters
    Delimiter,
    /// A lone jamo or other Hangul code point that is not a full syllable
    IncompleteHangul,
    /// A fully composed Hangul syllable block
    Hangul,
    /// Everything else
    Word,
}

/// Get the class of a character
pub fn char_class(ch: char) -> CharClass {
    if ch == ' ' {
        CharClass::Space
    } else if is_delimiter(ch) {
        CharClass::Delimiter
    } else if hangul::is_incomplete(ch) {
        CharClass::IncompleteHangul
    } else if hangul::is_complete(ch) {
        CharClass::Hangul
    } else {
        CharClass::Word
    }
}

/// Compute the stop range `(start, end)` around `pos`.
///
/// Returns `(pos, pos)` when `pos` does not address a character.
pub fn stop_range(text: &[char], pos: usize) -> (usize, usize) {
    match text.get(pos) {
        None => (pos, pos),
        Some(' ') => space_range(text, pos),
        Some(_) => class_range(text, pos),
    }
}

/// Start of the stop range of the character before `caret` (word-left target)
pub fn word_start_before(text: &[char], caret: usize) -> usize {
    if caret == 0 {
        return 0;
    }
    let caret = caret.min(text.len());
    stop_range(text, caret - 1).0
}

/// End of the stop range of the character at `caret` (word-right target)
pub fn word_end_after(text: &[char], caret: usize) -> usize {
    let caret = caret.min(text.len());
    stop_range(text, caret).1
}

fn class_range(text: &[char], pos: usize) -> (usize, usize) {
    let Some(&ch) = text.get(pos) else {
        return (pos, pos);
    };

    if is_delimiter(ch) {
        return delimiter_range(text, pos, ch);
    }
    if hangul::is_incomplete(ch) {
        return incomplete_hangul_range(text, pos);
    }
    word_range(text, pos, hangul::is_hangul(ch))
}

/// Spaces swallow the run of spaces plus one class range on each side
fn space_range(text: &[char], pos: usize) -> (usize, usize) {
    let mut start = pos;
    let mut end = pos;

    while start > 0 && text[start - 1] == ' ' {
        start -= 1;
    }
    while end < text.len() && text[end] == ' ' {
        end += 1;
    }

    let start = if start == 0 {
        0
    } else {
        class_range(text, start - 1).0
    };
    let end = class_range(text, end).1.max(end);

    (start, end)
}

fn delimiter_range(text: &[char], pos: usize, delimiter: char) -> (usize, usize) {
    let mut start = pos;
    let mut end = pos;

    while start > 0 && text[start - 1] == delimiter {
        start -= 1;
    }
    while end < text.len() && text[end] == delimiter {
        end += 1;
    }

    (start, end)
}

fn incomplete_hangul_range(text: &[char], pos: usize) -> (usize, usize) {
    let mut start = pos;
    let mut end = pos + 1;

    while start > 0 && hangul::is_incomplete(text[start - 1]) {
        start -= 1;
    }
    while end < text.len() && hangul::is_incomplete(text[end]) {
        end += 1;
    }

    (start, end)
}

fn word_range(text: &[char], pos: usize, hangul_start: bool) -> (usize, usize) {
    let stops = |ch: char| {
        is_delimiter(ch)
            || if hangul_start {
                !hangul::is_hangul(ch) || hangul::is_incomplete(ch)
            } else {
                hangul::is_hangul(ch)
            }
    };

    let mut start = pos;
    while start > 0 && !stops(text[start - 1]) {
        start -= 1;
    }

    let mut end = pos + 1;
    while end < text.len() && !stops(text[end]) {
        end += 1;
    }

    (start, end)
}
