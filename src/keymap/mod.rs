//! Key routing
//!
//! Translates host key presses into the closed [`TextEditMsg`] command set.
//! Routing is a pure function; the focus check lives in
//! [`TextInput::handle_key`](crate::TextInput::handle_key).
//!
//! # Architecture
//!
//! ```text
//! host key event → KeyEvent → route() → TextEditMsg → TextInput::update()
//! ```
//!
//! Shortcuts are recognized on both the Latin and the Korean 2-set layout,
//! so Cmd+ㅊ copies just like Cmd+C.

mod route;
mod types;

pub use route::route;
pub use types::{KeyCode, KeyEvent, Modifiers};
