//! Utility modules

pub mod text;

pub use text::{char_class, is_delimiter, stop_range, word_end_after, word_start_before, CharClass};
