//! Clipboard access for the host adapter.
//!
//! The text input never touches a clipboard inside a command; it returns
//! [`Effect`](crate::Effect)s that [`TextInput::handle_clipboard`] carries
//! out against one of these.
//!
//! [`TextInput::handle_clipboard`]: crate::TextInput::handle_clipboard

/// A text clipboard
pub trait Clipboard {
    /// Current clipboard text, if any
    fn get(&mut self) -> Option<String>;

    fn set(&mut self, text: &str);
}

/// In-process clipboard for tests and headless hosts
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    text: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn get(&mut self) -> Option<String> {
        self.text.clone()
    }

    fn set(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }
}

/// The platform clipboard via `arboard`
#[cfg(feature = "clipboard")]
#[derive(Debug, Default)]
pub struct SystemClipboard;

#[cfg(feature = "clipboard")]
impl Clipboard for SystemClipboard {
    fn get(&mut self) -> Option<String> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| tracing::warn!("Clipboard unavailable: {}", e))
            .ok()?;
        clipboard.get_text().ok()
    }

    fn set(&mut self, text: &str) {
        match arboard::Clipboard::new() {
            Ok(mut clipboard) => {
                if let Err(e) = clipboard.set_text(text) {
                    tracing::warn!("Failed to write clipboard: {}", e);
                }
            }
            Err(e) => tracing::warn!("Clipboard unavailable: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Effect, TextEditMsg, TextInput};

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        assert_eq!(clipboard.get(), None);
        clipboard.set("hi");
        assert_eq!(clipboard.get(), Some("hi".to_string()));
    }

    #[test]
    fn test_handle_clipboard_copy_then_paste() {
        let mut clipboard = MemoryClipboard::new();
        let mut input = TextInput::with_text("hello");
        input.set_focused(true);
        input.set_selection(0, 5);

        let effect = input.update(TextEditMsg::Cut);
        input.handle_clipboard(effect, &mut clipboard);
        assert_eq!(clipboard.text(), Some("hello"));
        assert_eq!(input.text(), "");

        let effect = input.update(TextEditMsg::RequestPaste);
        assert_eq!(input.handle_clipboard(effect, &mut clipboard), Effect::Changed);
        assert_eq!(input.text(), "hello");
    }

    #[test]
    fn test_handle_clipboard_empty_read() {
        let mut clipboard = MemoryClipboard::new();
        let mut input = TextInput::with_text("x");
        input.set_focused(true);
        let effect = input.update(TextEditMsg::RequestPaste);
        assert_eq!(input.handle_clipboard(effect, &mut clipboard), Effect::None);
        assert_eq!(input.text(), "x");
    }
}
