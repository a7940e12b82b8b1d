//! Key press → command table

use crate::editable::{Direction, MoveUnit, TextEditMsg};
use crate::hangul::keymap::jamo_to_latin;

use super::types::{KeyCode, KeyEvent, Modifiers};

/// Translate a key press into a command, or None if the key is ignored.
///
/// Meta selects line granularity, Alt or Ctrl word granularity, and Shift
/// extends the selection. A Meta/Ctrl chord on a character is a shortcut;
/// unknown chords are swallowed rather than typed.
pub fn route(event: &KeyEvent) -> Option<TextEditMsg> {
    let mods = event.mods;
    let unit = unit_for(mods);

    match event.key {
        KeyCode::Backspace => Some(TextEditMsg::DeleteBackward(unit)),
        KeyCode::Delete => Some(TextEditMsg::DeleteForward(unit)),
        KeyCode::Left => Some(move_caret(Direction::Left, mods, unit)),
        KeyCode::Right => Some(move_caret(Direction::Right, mods, unit)),
        KeyCode::Home => Some(move_caret(Direction::Left, mods, MoveUnit::Line)),
        KeyCode::End => Some(move_caret(Direction::Right, mods, MoveUnit::Line)),
        KeyCode::Escape => Some(TextEditMsg::CancelSelection),
        KeyCode::Enter => Some(TextEditMsg::Commit),
        KeyCode::HangulMode => Some(TextEditMsg::ToggleHangulMode),
        KeyCode::Char(c) if mods.shortcut() => shortcut(c, mods.shift()),
        KeyCode::Space if mods.shortcut() => None,
        KeyCode::Char(c) => Some(TextEditMsg::InsertText(c.to_string())),
        KeyCode::Space => Some(TextEditMsg::InsertText(" ".to_string())),
        KeyCode::Tab | KeyCode::Up | KeyCode::Down | KeyCode::Modifier => None,
    }
}

fn unit_for(mods: Modifiers) -> MoveUnit {
    if mods.meta() {
        MoveUnit::Line
    } else if mods.word() {
        MoveUnit::Word
    } else {
        MoveUnit::Character
    }
}

fn move_caret(direction: Direction, mods: Modifiers, unit: MoveUnit) -> TextEditMsg {
    TextEditMsg::MoveCaret {
        direction,
        extend: mods.shift(),
        unit,
    }
}

/// Meta/Ctrl chords; Korean jamo are folded onto their Latin key first
fn shortcut(c: char, shift: bool) -> Option<TextEditMsg> {
    match jamo_to_latin(c).to_ascii_lowercase() {
        'c' => Some(TextEditMsg::Copy),
        'x' => Some(TextEditMsg::Cut),
        'v' => Some(TextEditMsg::RequestPaste),
        'a' => Some(TextEditMsg::SelectAll),
        'z' if shift => Some(TextEditMsg::Redo),
        'z' => Some(TextEditMsg::Undo),
        _ => {
            tracing::trace!(%c, "unbound shortcut swallowed");
            None
        }
    }
}
