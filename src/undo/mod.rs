//! Generic undo/redo action log.
//!
//! Independent of text semantics: the payload is an opaque snapshot. The text
//! input stores full-buffer strings, but any `PartialEq` payload works.
//!
//! - [`UndoManager`]: undo/redo stacks, nested grouping, depth limit
//! - [`ActionGroup`]: composite replayed last-added-first
//! - [`CoalesceMode`]: how a group collapses repeated registrations

mod group;
mod manager;

use thiserror::Error;

pub use group::{Action, ActionGroup, CoalesceMode, Node};
pub use manager::{ManagerState, PayloadValidator, UndoManager};

/// Host integration errors reported by the undo manager
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum UndoError {
    #[error("undo/redo invoked while the manager is {0}")]
    Reentrant(ManagerState),

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("nothing to redo")]
    NothingToRedo,

    #[error("end_group called without an open group")]
    UnbalancedGroup,

    #[error("undo payload rejected by validator")]
    RejectedPayload,
}
