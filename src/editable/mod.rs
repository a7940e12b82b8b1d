//! Single-line editable text with Hangul composition.
//!
//! # Architecture
//!
//! The core components are:
//!
//! - [`CharBuffer`]: code-point buffer backing the input
//! - [`Selection`]: directional `(anchor, caret)` pair
//! - [`EditConstraints`] / [`InputType`]: mode-specific acceptance, masking and length limit
//! - [`TextEditMsg`]: the closed command set, answered with an [`Effect`]
//! - [`TextInput`]: the state machine tying them to the compositor and undo log
//!
//! # Example
//!
//! ```
//! use hangul_textinput::{Direction, MoveUnit, TextInput};
//!
//! let mut input = TextInput::with_text("hello");
//! input.set_focused(true);
//! input.move_caret(Direction::Right, false, MoveUnit::Line);
//! for jamo in ['ㅎ', 'ㅏ', 'ㄴ'] {
//!     input.insert_char(jamo);
//! }
//!
//! assert_eq!(input.text(), "hello한");
//! ```

mod buffer;
mod constraints;
mod messages;
mod observer;
mod selection;
mod state;

pub use buffer::CharBuffer;
pub use constraints::{EditConstraints, InputType};
pub use messages::{Direction, Effect, MoveUnit, TextEditMsg};
pub use observer::TextInputObserver;
pub use selection::Selection;
pub use state::TextInput;
