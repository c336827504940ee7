//! In-memory task store.
//!
//! # Responsibility
//! - Own the canonical ordered task sequence.
//! - Apply add/toggle/edit/remove as single-pass sequence replacements.
//!
//! # Invariants
//! - `add` is the only operation that checks title uniqueness.
//! - Toggle/edit/remove treat unknown IDs as silent no-ops.
//! - Every mutation preserves the relative order of untouched tasks.

use crate::model::task::{Task, TaskId};
use crate::store::id_source::{IdSource, WallClockIds};

/// Result of an add request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// Task appended at the end of the sequence.
    Added(TaskId),
    /// An existing task already carries exactly this title; the sequence is
    /// unchanged and the caller must surface a duplicate notice.
    DuplicateTitle {
        /// The task whose title collided.
        existing_id: TaskId,
    },
}

impl AddOutcome {
    /// Returns the created ID when the add succeeded.
    pub fn created_id(&self) -> Option<TaskId> {
        match self {
            Self::Added(id) => Some(*id),
            Self::DuplicateTitle { .. } => None,
        }
    }
}

/// Owner of the canonical task sequence.
///
/// Mutations rebuild the sequence instead of editing elements in place, so a
/// snapshot handed to a render pass is never changed behind the view's back.
pub struct TaskStore<I: IdSource = WallClockIds> {
    tasks: Vec<Task>,
    ids: I,
}

impl TaskStore<WallClockIds> {
    /// Creates an empty store with wall-clock ID assignment.
    pub fn new() -> Self {
        Self::with_ids(WallClockIds::default())
    }
}

impl Default for TaskStore<WallClockIds> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: IdSource> TaskStore<I> {
    /// Creates an empty store using the provided ID source.
    pub fn with_ids(ids: I) -> Self {
        Self {
            tasks: Vec::new(),
            ids,
        }
    }

    /// Current task sequence in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of tasks, used by the header display.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up one task by ID.
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Appends a new pending task unless the title is already taken.
    ///
    /// # Contract
    /// - Title comparison is exact (callers trim input upstream).
    /// - On duplicate the sequence is untouched and the colliding task's ID
    ///   is reported for diagnostics.
    pub fn add(&mut self, title: &str) -> AddOutcome {
        if let Some(existing) = self.tasks.iter().find(|task| task.title == title) {
            return AddOutcome::DuplicateTitle {
                existing_id: existing.id,
            };
        }

        let id = self.ids.next_id();
        let mut next = self.tasks.clone();
        next.push(Task::new(id, title));
        self.tasks = next;
        AddOutcome::Added(id)
    }

    /// Flips the completion flag of the task with `id`.
    ///
    /// Returns `true` when a task changed, `false` for unknown IDs.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    task.toggled()
                } else {
                    task.clone()
                }
            })
            .collect();
        true
    }

    /// Replaces the title of the task with `id`.
    ///
    /// # Contract
    /// - No duplicate re-check: edits may reintroduce a colliding title.
    /// - Empty titles are accepted; the store does not validate edit text.
    ///
    /// Returns `true` when a task changed, `false` for unknown IDs.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        self.tasks = self
            .tasks
            .iter()
            .map(|task| {
                if task.id == id {
                    task.retitled(new_title)
                } else {
                    task.clone()
                }
            })
            .collect();
        true
    }

    /// Drops the task with `id`, preserving the order of the rest.
    ///
    /// Only the confirmation-gated service path may call this; the store
    /// itself knows nothing about the dialog flow.
    ///
    /// Returns `true` when a task was removed, `false` for unknown IDs.
    pub fn remove_confirmed(&mut self, id: TaskId) -> bool {
        if self.get(id).is_none() {
            return false;
        }

        self.tasks = self
            .tasks
            .iter()
            .filter(|task| task.id != id)
            .cloned()
            .collect();
        true
    }
}
