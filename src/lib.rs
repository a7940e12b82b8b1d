//! Hangul-aware single-line text input engine
//!
//! This crate provides the editing core of a text field: buffer, directional
//! selection, word navigation, Hangul jamo composition and an undo log. It
//! does no rendering and owns no event loop. A host adapter turns platform
//! input into [`TextEditMsg`]s (or [`KeyEvent`]s) and reads a
//! [`RenderSnapshot`] back.

pub mod clipboard;
pub mod config;
pub mod editable;
pub mod hangul;
pub mod keymap;
pub mod snapshot;
pub mod undo;
pub mod util;

// Re-export commonly used types
pub use clipboard::{Clipboard, MemoryClipboard};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use config::{ConfigError, TextInputConfig};
pub use editable::{
    Direction, Effect, InputType, MoveUnit, Selection, TextEditMsg, TextInput, TextInputObserver,
};
pub use keymap::{KeyCode, KeyEvent, Modifiers};
pub use snapshot::RenderSnapshot;
pub use undo::{UndoError, UndoManager};
