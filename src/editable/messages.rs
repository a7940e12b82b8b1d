//! Command set accepted by the text input.

use super::constraints::InputType;

/// Horizontal direction of a caret move or deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// Granularity of a caret move or deletion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MoveUnit {
    /// One code point
    #[default]
    Character,
    /// To the nearest stop-range boundary
    Word,
    /// To the start or end of the buffer
    Line,
}

/// Closed set of commands a host adapter can send to a [`TextInput`].
///
/// [`TextInput`]: super::TextInput
#[derive(Debug, Clone, PartialEq)]
pub enum TextEditMsg {
    // === Insertion ===
    /// Insert typed text (one keystroke, or a string from the host)
    InsertText(String),
    /// Replace the whole buffer
    SetText(String),
    /// Insert text read from the clipboard
    Paste(String),

    // === Deletion ===
    /// Delete before the caret (Backspace)
    DeleteBackward(MoveUnit),
    /// Delete after the caret (Delete)
    DeleteForward(MoveUnit),

    // === Movement and selection ===
    MoveCaret {
        direction: Direction,
        extend: bool,
        unit: MoveUnit,
    },
    SelectAll,
    SetSelection {
        anchor: usize,
        caret: usize,
    },
    /// Collapse the selection onto its caret (Escape)
    CancelSelection,

    // === Pointer ===
    PointerDown {
        index: usize,
        click_count: u32,
    },
    PointerMove(usize),
    PointerUp,
    DoubleClick(usize),
    PointerDownOutside,

    // === Clipboard ===
    Copy,
    Cut,
    /// Ask the host to read the clipboard and send back [`TextEditMsg::Paste`]
    RequestPaste,

    // === Undo/Redo ===
    Undo,
    Redo,

    // === Field state ===
    SetType(InputType),
    SetDisabled(bool),
    SetFocused(bool),
    SetHovered(bool),
    ToggleHangulMode,
    /// Enter pressed
    Commit,
}

impl TextEditMsg {
    /// Check if this message can modify the buffer
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertText(_)
                | TextEditMsg::SetText(_)
                | TextEditMsg::Paste(_)
                | TextEditMsg::DeleteBackward(_)
                | TextEditMsg::DeleteForward(_)
                | TextEditMsg::Cut
                | TextEditMsg::Undo
                | TextEditMsg::Redo
        )
    }
}

/// What the host must do after a command ran
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed
    None,
    /// Buffer, selection or field state changed
    Changed,
    /// Write this text to the clipboard (copy or cut)
    WriteClipboard(String),
    /// Read the clipboard and send it back as [`TextEditMsg::Paste`]
    ReadClipboard,
}

impl Effect {
    pub(crate) fn changed(changed: bool) -> Self {
        if changed {
            Effect::Changed
        } else {
            Effect::None
        }
    }
}
