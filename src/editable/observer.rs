//! Listener interface for field-level notifications.

/// Receives notifications from a [`TextInput`](super::TextInput).
///
/// Every method has an empty default so listeners implement only what they
/// care about. Events fire only on an actual state change.
pub trait TextInputObserver {
    fn focus_changed(&mut self, _focused: bool) {}

    fn hover_changed(&mut self, _hovered: bool) {}

    /// Enter was pressed while focused
    fn committed(&mut self, _text: &str) {}
}
