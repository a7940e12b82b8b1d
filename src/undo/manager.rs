//! The undo manager: two stacks of action groups plus grouping state

use std::fmt;

use super::group::{Action, ActionGroup, CoalesceMode};
use super::UndoError;

/// What the manager is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerState {
    /// Registering new edits
    Collecting,
    /// Replaying an undo group; registrations go to the redo stack
    Undoing,
    /// Replaying a redo group; registrations go to the undo stack
    Redoing,
}

impl fmt::Display for ManagerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ManagerState::Collecting => write!(f, "collecting"),
            ManagerState::Undoing => write!(f, "undoing"),
            ManagerState::Redoing => write!(f, "redoing"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stack {
    Undo,
    Redo,
}

/// Payload validation hook; returning false rejects the registration
pub type PayloadValidator<T> = fn(&T) -> bool;

/// A generic undo/redo log with nested grouping and coalescing.
///
/// Performing a group hands each payload to a consumer that also receives
/// the manager, so the consumer can register the inverse snapshot. While
/// undoing, those registrations land on the redo stack and vice versa.
#[derive(Debug, Clone)]
pub struct UndoManager<T> {
    undo_stack: Vec<ActionGroup<T>>,
    redo_stack: Vec<ActionGroup<T>>,
    state: ManagerState,
    /// Stack holding the outermost open group, if any
    open_on: Option<Stack>,
    depth: usize,
    max_levels: Option<usize>,
    strict: bool,
    validator: Option<PayloadValidator<T>>,
}

impl<T: PartialEq> Default for UndoManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> UndoManager<T> {
    /// Create an unbounded, lenient manager
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            state: ManagerState::Collecting,
            open_on: None,
            depth: 0,
            max_levels: None,
            strict: false,
            validator: None,
        }
    }

    /// Create a manager that keeps at most `levels` undo entries
    pub fn with_max_levels(levels: usize) -> Self {
        let mut manager = Self::new();
        manager.max_levels = Some(levels);
        manager
    }

    /// Report empty-stack undo/redo as errors instead of no-ops
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Reject payloads the validator returns false for
    pub fn with_validator(mut self, validator: PayloadValidator<T>) -> Self {
        self.validator = Some(validator);
        self
    }

    pub fn state(&self) -> ManagerState {
        self.state
    }

    pub fn max_levels(&self) -> Option<usize> {
        self.max_levels
    }

    /// Change the undo depth limit, evicting the oldest entries if needed
    pub fn set_max_levels(&mut self, levels: Option<usize>) {
        self.max_levels = levels;
        self.evict();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty() && self.state == ManagerState::Collecting
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty() && self.state == ManagerState::Collecting
    }

    pub fn undo_count(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_count(&self) -> usize {
        self.redo_stack.len()
    }

    /// Current group nesting depth (0 when no group is open)
    pub fn group_depth(&self) -> usize {
        self.depth
    }

    pub fn clear_undo(&mut self) {
        self.undo_stack.clear();
        if self.open_on == Some(Stack::Undo) {
            self.reset_grouping();
        }
    }

    pub fn clear_redo(&mut self) {
        self.redo_stack.clear();
        if self.open_on == Some(Stack::Redo) {
            self.reset_grouping();
        }
    }

    /// Clear both stacks
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.reset_grouping();
    }

    /// Record a snapshot.
    ///
    /// Inside a group the action joins the innermost open group, subject to
    /// its coalescing mode; otherwise it becomes a stack entry of its own.
    /// A registration made while collecting invalidates the redo stack.
    pub fn register(&mut self, payload: T) -> Result<(), UndoError> {
        if let Some(validator) = self.validator {
            if !validator(&payload) {
                tracing::warn!(state = %self.state, "undo payload rejected");
                return Err(UndoError::RejectedPayload);
            }
        }

        let action = Action::new(payload);
        if self.depth > 0 {
            let depth = self.depth;
            match self.open_group_mut(depth) {
                Some(group) => {
                    if !group.add_action(action) {
                        tracing::trace!(mode = ?group.mode(), "undo action coalesced");
                    }
                }
                None => tracing::trace!("open undo group was evicted, action dropped"),
            }
        } else {
            let group = ActionGroup::with_action(action);
            match self.target_stack() {
                Stack::Redo => self.redo_stack.push(group),
                Stack::Undo => {
                    self.undo_stack.push(group);
                    self.evict();
                }
            }
        }

        if self.state == ManagerState::Collecting {
            self.redo_stack.clear();
        }
        Ok(())
    }

    /// Open a (possibly nested) group
    pub fn begin_group(&mut self, mode: CoalesceMode) {
        let group = ActionGroup::new(mode);

        if self.depth == 0 {
            let stack = self.target_stack();
            self.stack_mut(stack).push(group);
            self.open_on = Some(stack);
        } else {
            let depth = self.depth;
            if let Some(parent) = self.open_group_mut(depth) {
                parent.add_group(group);
            }
        }

        self.depth += 1;
    }

    /// Close the innermost open group
    pub fn end_group(&mut self) -> Result<(), UndoError> {
        if self.depth == 0 {
            tracing::warn!("end_group called without an open group");
            return Err(UndoError::UnbalancedGroup);
        }
        self.close_group();
        Ok(())
    }

    /// Undo the most recent group, handing each payload to `perform`.
    ///
    /// Returns `Ok(false)` when there is nothing to undo and the manager is
    /// lenient.
    pub fn undo<F>(&mut self, perform: F) -> Result<bool, UndoError>
    where
        F: FnMut(&mut Self, T),
    {
        self.ensure_collecting()?;
        self.close_all_groups();

        let Some(group) = self.undo_stack.pop() else {
            return self.empty_result(UndoError::NothingToUndo);
        };

        tracing::debug!(actions = group.len(), "undo");
        self.replay(ManagerState::Undoing, group, perform);
        Ok(true)
    }

    /// Redo the most recently undone group
    pub fn redo<F>(&mut self, perform: F) -> Result<bool, UndoError>
    where
        F: FnMut(&mut Self, T),
    {
        self.ensure_collecting()?;
        self.close_all_groups();

        let Some(group) = self.redo_stack.pop() else {
            return self.empty_result(UndoError::NothingToRedo);
        };

        tracing::debug!(actions = group.len(), "redo");
        self.replay(ManagerState::Redoing, group, perform);
        Ok(true)
    }

    fn replay<F>(&mut self, state: ManagerState, group: ActionGroup<T>, mut perform: F)
    where
        F: FnMut(&mut Self, T),
    {
        self.state = state;
        self.begin_group(CoalesceMode::None);
        group.perform(&mut |payload| perform(self, payload));
        self.close_all_groups();
        self.state = ManagerState::Collecting;
    }

    fn ensure_collecting(&self) -> Result<(), UndoError> {
        if self.state != ManagerState::Collecting {
            tracing::warn!(state = %self.state, "reentrant undo/redo");
            return Err(UndoError::Reentrant(self.state));
        }
        Ok(())
    }

    fn empty_result(&self, error: UndoError) -> Result<bool, UndoError> {
        if self.strict {
            Err(error)
        } else {
            Ok(false)
        }
    }

    fn target_stack(&self) -> Stack {
        if self.state == ManagerState::Undoing {
            Stack::Redo
        } else {
            Stack::Undo
        }
    }

    fn stack_mut(&mut self, stack: Stack) -> &mut Vec<ActionGroup<T>> {
        match stack {
            Stack::Undo => &mut self.undo_stack,
            Stack::Redo => &mut self.redo_stack,
        }
    }

    /// The group `depth` levels deep on the stack holding the open group
    fn open_group_mut(&mut self, depth: usize) -> Option<&mut ActionGroup<T>> {
        let stack = self.open_on?;
        self.stack_mut(stack)
            .last_mut()?
            .open_child_mut(depth.checked_sub(1)?)
    }

    fn close_group(&mut self) {
        self.depth -= 1;

        if self.depth > 0 {
            let depth = self.depth;
            if let Some(parent) = self.open_group_mut(depth) {
                parent.prune_last_empty();
            }
            return;
        }

        if let Some(stack) = self.open_on.take() {
            let entries = self.stack_mut(stack);
            if entries.last().is_some_and(|group| group.is_empty()) {
                entries.pop();
            }
            if stack == Stack::Undo {
                self.evict();
            }
        }
    }

    fn close_all_groups(&mut self) {
        while self.depth > 0 {
            self.close_group();
        }
    }

    fn reset_grouping(&mut self) {
        self.depth = 0;
        self.open_on = None;
    }

    /// Drop the oldest undo entries beyond the limit, never the open group
    fn evict(&mut self) {
        let Some(max) = self.max_levels else {
            return;
        };
        let protected = usize::from(self.open_on == Some(Stack::Undo));
        let keep = max.max(protected);
        if self.undo_stack.len() > keep {
            let excess = self.undo_stack.len() - keep;
            self.undo_stack.drain(..excess);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal host: the payload replaces `current`, and the replaced value is
    /// registered as the inverse.
    fn apply(current: &mut String) -> impl FnMut(&mut UndoManager<String>, String) + '_ {
        move |manager, snapshot| {
            let previous = std::mem::replace(current, snapshot);
            manager.register(previous).unwrap();
        }
    }

    #[test]
    fn test_register_and_undo() {
        let mut manager = UndoManager::new();
        let mut text = String::from("ab");
        manager.register("a".to_string()).unwrap();

        assert!(manager.undo(apply(&mut text)).unwrap());
        assert_eq!(text, "a");
        assert!(!manager.can_undo());
        assert!(manager.can_redo());

        assert!(manager.redo(apply(&mut text)).unwrap());
        assert_eq!(text, "ab");
        assert!(manager.can_undo());
        assert!(!manager.can_redo());
    }

    #[test]
    fn test_group_replays_in_reverse_in_one_pop() {
        let mut manager = UndoManager::new();
        manager.begin_group(CoalesceMode::None);
        manager.register(1).unwrap();
        manager.register(2).unwrap();
        manager.register(3).unwrap();
        manager.end_group().unwrap();
        assert_eq!(manager.undo_count(), 1);

        let mut seen = Vec::new();
        assert!(manager.undo(|_, p| seen.push(p)).unwrap());
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(manager.undo_count(), 0);
    }

    #[test]
    fn test_nested_groups_attach_to_innermost() {
        let mut manager = UndoManager::new();
        manager.begin_group(CoalesceMode::None);
        manager.register(1).unwrap();
        manager.begin_group(CoalesceMode::None);
        manager.register(2).unwrap();
        manager.register(3).unwrap();
        manager.end_group().unwrap();
        manager.register(4).unwrap();
        manager.end_group().unwrap();

        assert_eq!(manager.undo_count(), 1);
        let mut seen = Vec::new();
        manager.undo(|_, p| seen.push(p)).unwrap();
        assert_eq!(seen, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_group_coalescing_mode() {
        let mut manager = UndoManager::new();
        manager.begin_group(CoalesceMode::ConsecutiveDuplicates);
        for p in [1, 1, 2, 2, 1] {
            manager.register(p).unwrap();
        }
        manager.end_group().unwrap();

        let mut seen = Vec::new();
        manager.undo(|_, p| seen.push(p)).unwrap();
        assert_eq!(seen, vec![1, 2, 1]);
    }

    #[test]
    fn test_new_registration_clears_redo() {
        let mut manager = UndoManager::new();
        let mut text = String::from("b");
        manager.register("a".to_string()).unwrap();
        manager.undo(apply(&mut text)).unwrap();
        assert_eq!(manager.redo_count(), 1);

        manager.register("c".to_string()).unwrap();
        assert_eq!(manager.redo_count(), 0);
    }

    #[test]
    fn test_empty_undo_lenient_and_strict() {
        let mut lenient: UndoManager<i32> = UndoManager::new();
        assert_eq!(lenient.undo(|_, _| {}), Ok(false));
        assert_eq!(lenient.redo(|_, _| {}), Ok(false));

        let mut strict: UndoManager<i32> = UndoManager::new().strict(true);
        assert_eq!(strict.undo(|_, _| {}), Err(UndoError::NothingToUndo));
        assert_eq!(strict.redo(|_, _| {}), Err(UndoError::NothingToRedo));
    }

    #[test]
    fn test_reentrant_undo_is_an_error() {
        let mut manager = UndoManager::new();
        manager.register(1).unwrap();
        manager.register(2).unwrap();

        let mut inner = None;
        manager
            .undo(|m, _| {
                inner = Some(m.undo(|_, _| {}));
            })
            .unwrap();
        assert_eq!(
            inner,
            Some(Err(UndoError::Reentrant(ManagerState::Undoing)))
        );
        assert_eq!(manager.state(), ManagerState::Collecting);
    }

    #[test]
    fn test_unbalanced_end_group() {
        let mut manager: UndoManager<i32> = UndoManager::new();
        assert_eq!(manager.end_group(), Err(UndoError::UnbalancedGroup));
    }

    #[test]
    fn test_validator_rejects_payload() {
        let mut manager: UndoManager<String> =
            UndoManager::new().with_validator(|s: &String| !s.contains('\n'));
        assert!(manager.register("ok".to_string()).is_ok());
        assert_eq!(
            manager.register("bad\n".to_string()),
            Err(UndoError::RejectedPayload)
        );
        assert_eq!(manager.undo_count(), 1);
    }

    #[test]
    fn test_max_levels_evicts_oldest() {
        let mut manager = UndoManager::with_max_levels(3);
        for i in 0..5 {
            manager.register(i).unwrap();
        }
        assert_eq!(manager.undo_count(), 3);

        let mut seen = Vec::new();
        while manager.can_undo() {
            manager.undo(|_, p| seen.push(p)).unwrap();
        }
        assert_eq!(seen, vec![4, 3, 2]);
    }

    #[test]
    fn test_set_max_levels_trims_existing() {
        let mut manager = UndoManager::new();
        for i in 0..5 {
            manager.register(i).unwrap();
        }
        manager.set_max_levels(Some(2));
        assert_eq!(manager.undo_count(), 2);
    }

    #[test]
    fn test_redo_stack_not_depth_limited() {
        let mut manager = UndoManager::with_max_levels(2);
        let mut text = String::from("x");
        manager.register("a".to_string()).unwrap();
        manager.register("b".to_string()).unwrap();
        manager.undo(apply(&mut text)).unwrap();
        manager.undo(apply(&mut text)).unwrap();
        assert_eq!(manager.redo_count(), 2);
        assert_eq!(manager.undo_count(), 0);
    }

    #[test]
    fn test_empty_group_is_discarded() {
        let mut manager: UndoManager<i32> = UndoManager::new();
        manager.begin_group(CoalesceMode::None);
        manager.end_group().unwrap();
        assert_eq!(manager.undo_count(), 0);
        assert!(!manager.can_undo());
    }

    #[test]
    fn test_undo_closes_open_groups() {
        let mut manager = UndoManager::new();
        manager.begin_group(CoalesceMode::None);
        manager.register(1).unwrap();

        let mut seen = Vec::new();
        assert!(manager.undo(|_, p| seen.push(p)).unwrap());
        assert_eq!(seen, vec![1]);
        assert_eq!(manager.group_depth(), 0);
    }
}
