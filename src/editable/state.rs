//! TextInput - the single-line editing state machine.
//!
//! Owns the buffer, the directional selection, the Hangul assemble position
//! and the field flags. Every command clamps its inputs, so any sequence of
//! commands leaves the selection and the assemble position inside the buffer.

use std::fmt;

use crate::clipboard::Clipboard;
use crate::config::TextInputConfig;
use crate::hangul::{self, delete_jamo, insert_jamo, keymap as jamo_keys};
use crate::keymap::{self, KeyEvent};
use crate::snapshot::RenderSnapshot;
use crate::undo::{CoalesceMode, UndoError, UndoManager};
use crate::util::text::{stop_range, word_end_after, word_start_before};

use super::buffer::CharBuffer;
use super::constraints::{EditConstraints, InputType};
use super::messages::{Direction, Effect, MoveUnit, TextEditMsg};
use super::observer::TextInputObserver;
use super::selection::Selection;

/// Single-line text input with Hangul composition and undo.
pub struct TextInput {
    buffer: CharBuffer,
    selection: Selection,
    /// Index of the syllable being composed
    assemble: Option<usize>,
    /// Drag anchor armed by pointer-down
    mouse_anchor: Option<usize>,
    constraints: EditConstraints,
    focused: bool,
    disabled: bool,
    hovered: bool,
    hangul_mode: bool,
    /// Seconds since the caret last moved, offset by one blink period
    blink_timer: f32,
    config: TextInputConfig,
    history: Option<UndoManager<String>>,
    observers: Vec<Box<dyn TextInputObserver>>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new(TextInputConfig::default())
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextInput")
            .field("text", &self.buffer.content())
            .field("selection", &self.selection)
            .field("assemble", &self.assemble)
            .field("input_type", &self.constraints.input_type)
            .field("focused", &self.focused)
            .field("disabled", &self.disabled)
            .field("hangul_mode", &self.hangul_mode)
            .finish_non_exhaustive()
    }
}

impl TextInput {
    /// Create an input from its configuration.
    ///
    /// The default value goes through the same numeric and length gates as
    /// [`TextInput::set_text`].
    pub fn new(config: TextInputConfig) -> Self {
        let constraints = EditConstraints::new(config.input_type, config.max_length);

        let mut chars: Vec<char> = if constraints.input_type.accepts(&config.default_value) {
            config.default_value.chars().collect()
        } else {
            Vec::new()
        };
        constraints.truncate(&mut chars, 0, 0);

        let history = config
            .undo_levels
            .map(|levels| UndoManager::with_max_levels(levels).strict(config.strict_undo));

        Self {
            buffer: CharBuffer::from_chars(chars),
            selection: Selection::default(),
            assemble: None,
            mouse_anchor: None,
            constraints,
            focused: false,
            disabled: config.disabled,
            hovered: false,
            hangul_mode: false,
            blink_timer: config.caret_blink_rate,
            history,
            observers: Vec::new(),
            config,
        }
    }

    /// Create a plain text input holding `text`
    pub fn with_text(text: &str) -> Self {
        Self::new(TextInputConfig::builder().default_value(text).build())
    }

    /// Register a listener for focus, hover and commit events
    pub fn add_observer(&mut self, observer: Box<dyn TextInputObserver>) {
        self.observers.push(observer);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the text content as a String
    pub fn text(&self) -> String {
        self.buffer.content()
    }

    pub fn chars(&self) -> &[char] {
        self.buffer.as_chars()
    }

    /// Length in code points
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the buffer is empty and the placeholder should show
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Get the selected text (empty string if no selection)
    pub fn selected_text(&self) -> String {
        self.buffer.slice(self.selection.range())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    /// Index of the syllable under composition, for underline placement
    pub fn assemble_position(&self) -> Option<usize> {
        self.assemble
    }

    pub fn mouse_anchor(&self) -> Option<usize> {
        self.mouse_anchor
    }

    pub fn input_type(&self) -> InputType {
        self.constraints.input_type
    }

    pub fn max_length(&self) -> Option<usize> {
        self.constraints.max_length
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn is_hangul_mode(&self) -> bool {
        self.hangul_mode
    }

    pub fn config(&self) -> &TextInputConfig {
        &self.config
    }

    /// The undo log, if enabled
    pub fn history(&self) -> Option<&UndoManager<String>> {
        self.history.as_ref()
    }

    pub fn can_undo(&self) -> bool {
        self.history.as_ref().is_some_and(|h| h.can_undo())
    }

    pub fn can_redo(&self) -> bool {
        self.history.as_ref().is_some_and(|h| h.can_redo())
    }

    /// Buffer as shown to the user (masked in password mode)
    pub fn display_text(&self) -> String {
        self.constraints
            .input_type
            .mask(&self.buffer.content(), self.config.password_char)
    }

    /// Renderer-readable state
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            text: self.buffer.content(),
            display_text: self.display_text(),
            anchor: self.selection.anchor,
            caret: self.selection.caret,
            assemble_position: self.assemble,
            input_type: self.constraints.input_type,
            focused: self.focused,
            disabled: self.disabled,
            hovered: self.hovered,
            hangul_mode: self.hangul_mode,
            show_placeholder: self.buffer.is_empty(),
            placeholder: self.config.placeholder.clone(),
            caret_visible: self.focused && self.selection.is_empty() && self.caret_visible(),
        }
    }

    // =========================================================================
    // Caret blink
    // =========================================================================

    /// Advance the blink timer
    pub fn tick(&mut self, delta_seconds: f32) {
        self.blink_timer += delta_seconds.max(0.0);
    }

    /// Caret phase of the blink cycle; visible right after any movement
    pub fn caret_visible(&self) -> bool {
        let rate = self.config.caret_blink_rate;
        if rate <= 0.0 {
            return true;
        }
        (self.blink_timer / rate).floor() as u64 % 2 == 1
    }

    fn reset_blink(&mut self) {
        self.blink_timer = self.config.caret_blink_rate;
    }
}

// =============================================================================
// Command dispatch
// =============================================================================

impl TextInput {
    /// Run one command
    pub fn update(&mut self, msg: TextEditMsg) -> Effect {
        match msg {
            TextEditMsg::InsertText(text) => Effect::changed(self.insert_text(&text)),
            TextEditMsg::SetText(text) => Effect::changed(self.set_text(&text)),
            TextEditMsg::Paste(text) => Effect::changed(self.paste(&text)),
            TextEditMsg::DeleteBackward(unit) => Effect::changed(self.delete_backward(unit)),
            TextEditMsg::DeleteForward(unit) => Effect::changed(self.delete_forward(unit)),
            TextEditMsg::MoveCaret {
                direction,
                extend,
                unit,
            } => Effect::changed(self.move_caret(direction, extend, unit)),
            TextEditMsg::SelectAll => Effect::changed(self.select_all()),
            TextEditMsg::SetSelection { anchor, caret } => {
                Effect::changed(self.set_selection(anchor, caret))
            }
            TextEditMsg::CancelSelection => Effect::changed(self.cancel_selection()),
            TextEditMsg::PointerDown { index, click_count } => {
                Effect::changed(self.pointer_down(index, click_count))
            }
            TextEditMsg::PointerMove(index) => {
                Effect::changed(self.extend_selection_to_pointer(index))
            }
            TextEditMsg::PointerUp => Effect::changed(self.pointer_up()),
            TextEditMsg::DoubleClick(index) => Effect::changed(self.double_click(index)),
            TextEditMsg::PointerDownOutside => Effect::changed(self.set_focused(false)),
            TextEditMsg::Copy => self.copy().map_or(Effect::None, Effect::WriteClipboard),
            TextEditMsg::Cut => self.cut().map_or(Effect::None, Effect::WriteClipboard),
            TextEditMsg::RequestPaste => {
                if self.focused {
                    Effect::ReadClipboard
                } else {
                    Effect::None
                }
            }
            TextEditMsg::Undo => Effect::changed(self.undo()),
            TextEditMsg::Redo => Effect::changed(self.redo()),
            TextEditMsg::SetType(input_type) => Effect::changed(self.set_type(input_type)),
            TextEditMsg::SetDisabled(disabled) => Effect::changed(self.set_disabled(disabled)),
            TextEditMsg::SetFocused(focused) => Effect::changed(self.set_focused(focused)),
            TextEditMsg::SetHovered(hovered) => Effect::changed(self.set_hovered(hovered)),
            TextEditMsg::ToggleHangulMode => {
                self.toggle_hangul_mode();
                Effect::Changed
            }
            TextEditMsg::Commit => Effect::changed(self.commit()),
        }
    }

    /// Route a key press through the keymap; ignored while unfocused
    pub fn handle_key(&mut self, event: &KeyEvent) -> Effect {
        if !self.focused {
            tracing::trace!(key = %event, "key ignored: input not focused");
            return Effect::None;
        }
        match keymap::route(event) {
            Some(msg) => {
                tracing::trace!(key = %event, ?msg, "key routed");
                self.update(msg)
            }
            None => Effect::None,
        }
    }

    /// Carry out a clipboard effect against `clipboard`.
    ///
    /// Writes are forwarded; a read request is answered by pasting the
    /// clipboard content. Other effects pass through unchanged.
    pub fn handle_clipboard(&mut self, effect: Effect, clipboard: &mut dyn Clipboard) -> Effect {
        match effect {
            Effect::WriteClipboard(text) => {
                clipboard.set(&text);
                Effect::Changed
            }
            Effect::ReadClipboard => match clipboard.get() {
                Some(text) => Effect::changed(self.paste(&text)),
                None => Effect::None,
            },
            other => other,
        }
    }
}

// =============================================================================
// Insertion
// =============================================================================

impl TextInput {
    /// Replace the whole buffer.
    ///
    /// Numeric fields reject anything but an integer literal or the empty
    /// string. Over-long text is truncated. The caret lands at the end.
    pub fn set_text(&mut self, raw: &str) -> bool {
        if !raw.is_empty() && !self.constraints.input_type.accepts(raw) {
            tracing::trace!(input_type = ?self.constraints.input_type, "set_text rejected");
            return false;
        }

        let mut chars: Vec<char> = raw.chars().collect();
        self.constraints.truncate(&mut chars, 0, 0);

        if chars.as_slice() != self.buffer.as_chars() {
            self.record_edit(false);
        }
        let caret = chars.len();
        self.set_buffer(chars, caret, None);
        true
    }

    /// Insert typed text at the selection.
    ///
    /// A single Hangul code point goes through the compositor (unless the
    /// field is a password field); anything else is inserted literally and
    /// trimmed to the remaining capacity.
    pub fn insert_text(&mut self, text: &str) -> bool {
        self.insert(text, true)
    }

    pub fn insert_char(&mut self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.insert(ch.encode_utf8(&mut buf), true)
    }

    /// Insert clipboard text; same gates as typing, without Hangul-mode key mapping
    pub fn paste(&mut self, text: &str) -> bool {
        self.insert(text, false)
    }

    fn insert(&mut self, text: &str, typed: bool) -> bool {
        if text.is_empty() {
            return false;
        }
        let input_type = self.constraints.input_type;
        if !input_type.accepts(text) {
            tracing::trace!(?input_type, "insertion rejected");
            return false;
        }

        let mut chars: Vec<char> = text.chars().collect();
        if chars.len() == 1 {
            let ch = if typed && self.hangul_mode {
                jamo_keys::latin_to_jamo(chars[0])
            } else {
                chars[0]
            };
            if hangul::is_hangul(ch) && !input_type.is_password() {
                return self.compose(ch);
            }
            chars[0] = ch;
        }
        if input_type.is_password() {
            chars = chars.into_iter().map(jamo_keys::jamo_to_latin).collect();
        }
        self.insert_literal(chars)
    }

    fn insert_literal(&mut self, mut chars: Vec<char>) -> bool {
        let range = self.selection.range();
        self.constraints
            .truncate(&mut chars, self.buffer.len(), range.len());
        if chars.is_empty() {
            tracing::trace!("insertion dropped: max length reached");
            return false;
        }

        let caret = range.start + chars.len();
        let text = self.buffer.spliced(range, &chars);
        self.record_edit(self.has_selection());
        self.set_buffer(text, caret, None);
        true
    }

    /// Feed one Hangul code point to the syllable in progress
    fn compose(&mut self, ch: char) -> bool {
        let result = insert_jamo(
            self.buffer.as_chars(),
            self.selection.range(),
            self.assemble,
            ch,
        );
        if !self.constraints.fits(result.text.len()) {
            tracing::trace!(%ch, "composition dropped: max length reached");
            return false;
        }

        if self.assemble.is_none() {
            tracing::debug!(position = ?result.assemble, "composition started");
        }
        self.record_edit(self.has_selection());
        self.set_buffer(result.text, result.caret, result.assemble);
        true
    }
}

// =============================================================================
// Deletion
// =============================================================================

impl TextInput {
    /// Delete before the caret (Backspace).
    ///
    /// A selection is deleted as a whole. Mid-composition a character
    /// delete removes one jamo instead of the whole syllable.
    pub fn delete_backward(&mut self, unit: MoveUnit) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }

        if unit == MoveUnit::Character {
            if let Some(result) = self
                .assemble
                .and_then(|pos| delete_jamo(self.buffer.as_chars(), pos))
            {
                if result.assemble.is_none() {
                    tracing::debug!("composition ended");
                }
                self.record_edit(false);
                self.set_buffer(result.text, result.caret, result.assemble);
                return true;
            }
        }

        let caret = self.selection.caret;
        let start = match unit {
            MoveUnit::Character => caret.saturating_sub(1),
            MoveUnit::Word if self.constraints.input_type.has_word_stops() => {
                word_start_before(self.buffer.as_chars(), caret)
            }
            MoveUnit::Word | MoveUnit::Line => 0,
        };
        self.delete_range(start, caret)
    }

    /// Delete after the caret (Delete)
    pub fn delete_forward(&mut self, unit: MoveUnit) -> bool {
        if self.has_selection() {
            return self.delete_selection();
        }

        let len = self.buffer.len();
        let caret = self.selection.caret;
        let end = match unit {
            MoveUnit::Character => (caret + 1).min(len),
            MoveUnit::Word if self.constraints.input_type.has_word_stops() => {
                word_end_after(self.buffer.as_chars(), caret)
            }
            MoveUnit::Word | MoveUnit::Line => len,
        };
        self.delete_range(caret, end)
    }

    fn delete_selection(&mut self) -> bool {
        let range = self.selection.range();
        self.delete_range(range.start, range.end)
    }

    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end {
            return self.assemble.take().is_some();
        }
        let text = self.buffer.spliced(start..end, &[]);
        self.record_edit(false);
        self.set_buffer(text, start, None);
        true
    }

    /// Install new buffer content and collapse the selection onto `caret`
    fn set_buffer(&mut self, chars: Vec<char>, caret: usize, assemble: Option<usize>) {
        let len = chars.len();
        self.buffer.set_chars(chars);
        self.assemble = assemble.filter(|&pos| pos < len);
        self.selection = Selection::collapsed(caret.min(len));
        self.reset_blink();
    }
}

// =============================================================================
// Movement and selection
// =============================================================================

impl TextInput {
    /// Move the caret by `unit`; with `extend` only the caret end moves.
    ///
    /// Word jumps while extending never cross the anchor of a selection
    /// that points the other way: they stop on the anchor first.
    pub fn move_caret(&mut self, direction: Direction, extend: bool, unit: MoveUnit) -> bool {
        let len = self.buffer.len();
        let Selection { anchor, caret } = self.selection;

        let next = if self.has_selection() {
            match (direction, extend, unit) {
                (Direction::Right, true, MoveUnit::Line) => Selection::new(self.selection.start(), len),
                (Direction::Left, true, MoveUnit::Line) => Selection::new(self.selection.end(), 0),
                (_, true, MoveUnit::Word) => Selection::new(anchor, self.next_word_stop(direction)),
                (Direction::Right, true, MoveUnit::Character) => Selection::new(anchor, caret + 1),
                (Direction::Left, true, MoveUnit::Character) => {
                    Selection::new(anchor, caret.saturating_sub(1))
                }
                (Direction::Right, false, MoveUnit::Line) => Selection::collapsed(len),
                (Direction::Left, false, MoveUnit::Line) => Selection::collapsed(0),
                (Direction::Right, false, _) => Selection::collapsed(self.selection.end()),
                (Direction::Left, false, _) => Selection::collapsed(self.selection.start()),
            }
        } else {
            let target = self.target(direction, unit, caret);
            if extend {
                Selection::new(caret, target)
            } else {
                Selection::collapsed(target)
            }
        };

        let cleared = self.assemble.take().is_some();
        self.apply_selection(next) || cleared
    }

    /// Where a move from a collapsed caret lands
    fn target(&self, direction: Direction, unit: MoveUnit, caret: usize) -> usize {
        let text = self.buffer.as_chars();
        let word_stops = self.constraints.input_type.has_word_stops();
        match (direction, unit) {
            (Direction::Left, MoveUnit::Character) => caret.saturating_sub(1),
            (Direction::Right, MoveUnit::Character) => caret + 1,
            (Direction::Left, MoveUnit::Word) if word_stops => word_start_before(text, caret),
            (Direction::Right, MoveUnit::Word) if word_stops => word_end_after(text, caret),
            (Direction::Left, _) => 0,
            (Direction::Right, _) => text.len(),
        }
    }

    /// Word stop for extending an existing selection, guarded by its anchor
    fn next_word_stop(&self, direction: Direction) -> usize {
        let text = self.buffer.as_chars();
        let Selection { anchor, caret } = self.selection;
        let word_stops = self.constraints.input_type.has_word_stops();

        match direction {
            Direction::Left => {
                if !word_stops {
                    return 0;
                }
                let stop = word_start_before(text, caret);
                if self.selection.is_forward() && stop < anchor {
                    anchor
                } else {
                    stop
                }
            }
            Direction::Right => {
                if !word_stops {
                    return text.len();
                }
                let stop = word_end_after(text, caret);
                if self.selection.is_reversed() && stop > anchor {
                    anchor
                } else {
                    stop
                }
            }
        }
    }

    /// Select the whole buffer, anchored at 0
    pub fn select_all(&mut self) -> bool {
        let cleared = self.assemble.take().is_some();
        self.apply_selection(Selection::new(0, self.buffer.len())) || cleared
    }

    /// Set both ends; each is clamped into the buffer independently
    pub fn set_selection(&mut self, anchor: usize, caret: usize) -> bool {
        let cleared = self.assemble.take().is_some();
        self.apply_selection(Selection::new(anchor, caret)) || cleared
    }

    /// Collapse the selection onto its caret (Escape)
    pub fn cancel_selection(&mut self) -> bool {
        let caret = self.selection.caret;
        let cleared = self.assemble.take().is_some();
        self.apply_selection(Selection::collapsed(caret)) || cleared
    }

    fn apply_selection(&mut self, selection: Selection) -> bool {
        let selection = selection.clamped(self.buffer.len());
        let changed = selection != self.selection;
        self.selection = selection;
        self.reset_blink();
        changed
    }
}

// =============================================================================
// Pointer
// =============================================================================

impl TextInput {
    /// Press inside the field at `index`.
    ///
    /// Focuses the field and arms the drag anchor. A triple click inside
    /// the current selection selects everything instead.
    pub fn pointer_down(&mut self, index: usize, click_count: u32) -> bool {
        self.assemble = None;
        if self.disabled {
            return self.set_focused(false);
        }
        self.set_focused(true);

        let index = index.min(self.buffer.len());
        if click_count >= 3 && self.has_selection() && self.selection.contains(index) {
            self.mouse_anchor = None;
            self.select_all();
            return true;
        }

        self.mouse_anchor = Some(index);
        self.apply_selection(Selection::collapsed(index));
        true
    }

    /// Drag to `index`; the result is always ordered low to high
    pub fn extend_selection_to_pointer(&mut self, index: usize) -> bool {
        if !self.focused {
            return false;
        }
        let Some(anchor) = self.mouse_anchor else {
            return false;
        };
        let index = index.min(self.buffer.len());
        let cleared = self.assemble.take().is_some();
        self.apply_selection(Selection::new(anchor.min(index), anchor.max(index))) || cleared
    }

    pub fn pointer_up(&mut self) -> bool {
        self.mouse_anchor.take().is_some()
    }

    /// Select the stop-range around `index`; password fields select everything
    pub fn double_click(&mut self, index: usize) -> bool {
        if !self.focused {
            return false;
        }
        if self.constraints.input_type.is_password() {
            return self.select_all();
        }
        let (start, end) = stop_range(self.buffer.as_chars(), index);
        let cleared = self.assemble.take().is_some();
        self.apply_selection(Selection::new(start, end)) || cleared
    }
}

// =============================================================================
// Clipboard
// =============================================================================

impl TextInput {
    /// Selected text for the clipboard.
    ///
    /// None while unfocused, in password mode, or with nothing selected.
    pub fn copy(&self) -> Option<String> {
        if !self.focused || self.constraints.input_type.is_password() || !self.has_selection() {
            return None;
        }
        Some(self.selected_text())
    }

    /// Copy, then delete the selection
    pub fn cut(&mut self) -> Option<String> {
        let text = self.copy()?;
        self.delete_selection();
        Some(text)
    }
}

// =============================================================================
// Field state
// =============================================================================

impl TextInput {
    /// Focus or blur the field.
    ///
    /// Disabled fields cannot gain focus. Blurring collapses the caret to 0
    /// and drops composition and drag state. Observers hear only real
    /// transitions.
    pub fn set_focused(&mut self, focused: bool) -> bool {
        if focused && !self.disabled {
            self.reset_blink();
            if self.focused {
                return false;
            }
            self.focused = true;
            tracing::debug!("text input focused");
            self.notify(|o| o.focus_changed(true));
            return true;
        }

        let was_focused = self.focused;
        self.focused = false;
        self.assemble = None;
        self.mouse_anchor = None;
        self.selection = Selection::collapsed(0);
        if was_focused {
            tracing::debug!("text input blurred");
            self.notify(|o| o.focus_changed(false));
        }
        was_focused
    }

    /// Disabling also blurs and un-hovers the field
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        let changed = self.disabled != disabled;
        self.disabled = disabled;
        if disabled {
            self.set_focused(false);
            self.set_hovered(false);
        }
        if changed {
            tracing::debug!(disabled, "text input disabled state changed");
        }
        changed
    }

    /// Hover tracking; a disabled field never reports hover
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let hovered = hovered && !self.disabled;
        if self.hovered == hovered {
            return false;
        }
        self.hovered = hovered;
        self.notify(|o| o.hover_changed(hovered));
        true
    }

    /// Switch input mode; drops composition and collapses onto the caret
    pub fn set_type(&mut self, input_type: InputType) -> bool {
        let changed = self.constraints.input_type != input_type;
        self.constraints.input_type = input_type;
        self.assemble = None;
        let caret = self.selection.caret;
        self.apply_selection(Selection::collapsed(caret));
        if changed {
            tracing::debug!(?input_type, "input type changed");
        }
        changed
    }

    /// Flip Latin-to-jamo key mapping for typed characters
    pub fn toggle_hangul_mode(&mut self) {
        self.hangul_mode = !self.hangul_mode;
        self.assemble = None;
        tracing::debug!(hangul_mode = self.hangul_mode, "hangul mode toggled");
    }

    /// Enter: notify observers with the current text
    pub fn commit(&mut self) -> bool {
        if !self.focused {
            return false;
        }
        self.assemble = None;
        let text = self.buffer.content();
        self.notify(|o| o.committed(&text));
        true
    }

    fn notify(&mut self, mut event: impl FnMut(&mut dyn TextInputObserver)) {
        for observer in &mut self.observers {
            event(observer.as_mut());
        }
    }
}

// =============================================================================
// Undo/Redo
// =============================================================================

impl TextInput {
    /// Undo the last edit; errors are logged and reported as false
    pub fn undo(&mut self) -> bool {
        Self::logged(self.try_undo())
    }

    pub fn redo(&mut self) -> bool {
        Self::logged(self.try_redo())
    }

    /// Undo the last edit, surfacing manager errors
    pub fn try_undo(&mut self) -> Result<bool, UndoError> {
        let Self {
            history, buffer, ..
        } = self;
        let Some(history) = history.as_mut() else {
            return Ok(false);
        };
        let restored = history.undo(|manager, snapshot| Self::restore(manager, buffer, snapshot))?;
        if restored {
            self.after_history_step();
        }
        Ok(restored)
    }

    /// Redo the last undone edit, surfacing manager errors
    pub fn try_redo(&mut self) -> Result<bool, UndoError> {
        let Self {
            history, buffer, ..
        } = self;
        let Some(history) = history.as_mut() else {
            return Ok(false);
        };
        let restored = history.redo(|manager, snapshot| Self::restore(manager, buffer, snapshot))?;
        if restored {
            self.after_history_step();
        }
        Ok(restored)
    }

    /// Swap in `snapshot`, registering the replaced text as the inverse step
    fn restore(manager: &mut UndoManager<String>, buffer: &mut CharBuffer, snapshot: String) {
        let replaced = std::mem::replace(buffer, CharBuffer::from_text(&snapshot));
        if let Err(e) = manager.register(replaced.content()) {
            tracing::warn!("failed to record inverse snapshot: {}", e);
        }
    }

    fn after_history_step(&mut self) {
        let len = self.buffer.len();
        self.assemble = None;
        self.mouse_anchor = None;
        self.selection = Selection::collapsed(len);
        self.reset_blink();
    }

    fn logged(result: Result<bool, UndoError>) -> bool {
        match result {
            Ok(done) => done,
            Err(e) => {
                tracing::warn!("undo manager: {}", e);
                false
            }
        }
    }

    /// Snapshot the buffer before a mutation.
    ///
    /// Replacing a selection records the pre-delete and post-delete texts as
    /// one group so a single undo restores the replaced text.
    fn record_edit(&mut self, replaces_selection: bool) {
        let before = self.buffer.content();
        let after_delete = replaces_selection.then(|| {
            self.buffer
                .spliced(self.selection.range(), &[])
                .into_iter()
                .collect::<String>()
        });
        let Some(history) = self.history.as_mut() else {
            return;
        };

        let result = match after_delete {
            None => history.register(before),
            Some(after_delete) => {
                history.begin_group(CoalesceMode::None);
                let registered = history
                    .register(before)
                    .and_then(|()| history.register(after_delete));
                history.end_group().and(registered)
            }
        };
        if let Err(e) = result {
            tracing::warn!("failed to record undo snapshot: {}", e);
        }
    }
}
