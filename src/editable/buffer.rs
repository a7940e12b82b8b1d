//! Code-point buffer for the single-line input.
//!
//! All indices are Unicode scalar values, so a precomposed syllable is one
//! position. Hosts that measure in UTF-16 units must convert at the edge.

use std::fmt;
use std::ops::Range;

/// Single-line text backed by a `Vec<char>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharBuffer {
    chars: Vec<char>,
}

impl CharBuffer {
    pub fn new() -> Self {
        Self { chars: Vec::new() }
    }

    /// Create a CharBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            chars: s.chars().collect(),
        }
    }

    pub fn from_chars(chars: Vec<char>) -> Self {
        Self { chars }
    }

    /// Total length in characters
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Get character at index, None if out of bounds
    pub fn char_at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Get slice of text as String, clamped to the buffer
    pub fn slice(&self, range: Range<usize>) -> String {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        self.chars[start..end].iter().collect()
    }

    /// Get full content as String
    pub fn content(&self) -> String {
        self.chars.iter().collect()
    }

    /// The text that replacing `range` with `insert` would produce
    pub fn spliced(&self, range: Range<usize>, insert: &[char]) -> Vec<char> {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let mut out = Vec::with_capacity(self.len() - (end - start) + insert.len());
        out.extend_from_slice(&self.chars[..start]);
        out.extend_from_slice(insert);
        out.extend_from_slice(&self.chars[end..]);
        out
    }

    /// Set content, replacing everything
    pub fn set_chars(&mut self, chars: Vec<char>) {
        self.chars = chars;
    }
}

impl fmt::Display for CharBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
