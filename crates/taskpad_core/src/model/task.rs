//! Task domain model.
//!
//! # Responsibility
//! - Define the single to-do entry record and its replacement helpers.
//!
//! # Invariants
//! - `id` is assigned once at creation and never changes afterwards.
//! - `done` starts as `false` for every new task.
//! - Title uniqueness is an insertion-time store concern, not a model one.

use serde::{Deserialize, Serialize};

/// Identifier for a task within one store.
///
/// Derived from wall-clock epoch milliseconds at creation time, so uniqueness
/// is best-effort rather than guaranteed. Kept as a type alias to make
/// semantic intent explicit in signatures.
pub type TaskId = i64;

/// One to-do entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Store-unique ID used by toggle/edit/remove lookups.
    pub id: TaskId,
    /// User-visible text. Mutable via edit; may collide with other tasks
    /// after edits (only the add path enforces uniqueness).
    pub title: String,
    /// Completion flag flipped by the toggle operation.
    pub done: bool,
}

impl Task {
    /// Creates a pending task with the given ID and title.
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Returns a copy with the completion flag inverted.
    pub fn toggled(&self) -> Self {
        Self {
            done: !self.done,
            ..self.clone()
        }
    }

    /// Returns a copy carrying the replacement title.
    ///
    /// The store accepts any text here, including empty strings; see the
    /// edit operation contract.
    pub fn retitled(&self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self.clone()
        }
    }
}
