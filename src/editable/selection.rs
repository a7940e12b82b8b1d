//! Directional selection over a single-line buffer.

use std::ops::Range;

/// A selection with an anchor (fixed end) and a caret (moving end).
///
/// `anchor > caret` means the selection was extended leftward. The pair is
/// only normalized where order matters: deletion, copy, and pointer drags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    /// Where the selection started (fixed point)
    pub anchor: usize,
    /// Where the caret is (moving point)
    pub caret: usize,
}

impl Selection {
    pub fn new(anchor: usize, caret: usize) -> Self {
        Self { anchor, caret }
    }

    /// Create a collapsed selection (caret with no selection)
    pub fn collapsed(pos: usize) -> Self {
        Self {
            anchor: pos,
            caret: pos,
        }
    }

    /// Check if selection is empty (anchor == caret)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.caret
    }

    /// Lower end of the selection
    pub fn start(&self) -> usize {
        self.anchor.min(self.caret)
    }

    /// Upper end of the selection
    pub fn end(&self) -> usize {
        self.anchor.max(self.caret)
    }

    pub fn len(&self) -> usize {
        self.end() - self.start()
    }

    /// Normalized character range
    pub fn range(&self) -> Range<usize> {
        self.start()..self.end()
    }

    /// Caret before anchor
    pub fn is_reversed(&self) -> bool {
        self.caret < self.anchor
    }

    /// Caret after anchor
    pub fn is_forward(&self) -> bool {
        self.anchor < self.caret
    }

    /// Check if a position lies within this selection, bounds included
    pub fn contains(&self, pos: usize) -> bool {
        pos >= self.start() && pos <= self.end()
    }

    /// Both ends clamped into `0..=len`
    pub fn clamped(self, len: usize) -> Self {
        Self {
            anchor: self.anchor.min(len),
            caret: self.caret.min(len),
        }
    }

    /// Collapse selection to caret position
    pub fn collapse(&mut self) {
        self.anchor = self.caret;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_collapsed() {
        let sel = Selection::collapsed(5);
        assert!(sel.is_empty());
        assert_eq!(sel.anchor, sel.caret);
        assert_eq!(sel.len(), 0);
    }

    #[test]
    fn test_selection_start_end() {
        let forward = Selection::new(0, 5);
        assert_eq!(forward.range(), 0..5);
        assert!(forward.is_forward());
        assert!(!forward.is_reversed());

        let backward = Selection::new(5, 0);
        assert_eq!(backward.start(), 0);
        assert_eq!(backward.end(), 5);
        assert!(backward.is_reversed());
    }

    #[test]
    fn test_selection_clamped() {
        let sel = Selection::new(12, 3).clamped(4);
        assert_eq!(sel, Selection::new(4, 3));
    }

    #[test]
    fn test_selection_contains_bounds() {
        let sel = Selection::new(8, 2);
        assert!(!sel.contains(1));
        assert!(sel.contains(2));
        assert!(sel.contains(8));
        assert!(!sel.contains(9));
    }

    #[test]
    fn test_selection_collapse_keeps_caret() {
        let mut sel = Selection::new(0, 10);
        sel.collapse();
        assert_eq!(sel, Selection::collapsed(10));
    }
}
