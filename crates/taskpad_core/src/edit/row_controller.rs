//! Per-row inline edit state machine.
//!
//! # Responsibility
//! - Track `Viewing`/`Editing` phase and the uncommitted draft title.
//! - Hand focus directives and commit payloads back to the host row.
//!
//! # Invariants
//! - The text input must be focused iff the phase is `Editing`; the
//!   controller signals this on every transition but does not own the
//!   widget.
//! - The remove action is disabled exactly while `Editing`.
//! - Cancel discards the draft; only submit produces a commit.

use crate::model::task::TaskId;

/// Edit-mode phase of one row. The machine is re-entrant for the lifetime
/// of the row; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    /// Default presentation; taps toggle, trash removes.
    Viewing,
    /// Inline text entry active; draft edits are live, remove is disabled.
    Editing,
}

/// Focus synchronization the host row must apply to its text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirective {
    Focus,
    Blur,
}

/// Committed edit handed to the host on submit, to be forwarded to
/// `TaskListService::edit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommit {
    pub task_id: TaskId,
    pub title: String,
}

/// Two-state controller for one task row.
pub struct RowEditController {
    task_id: TaskId,
    phase: EditPhase,
    draft: String,
}

impl RowEditController {
    /// Creates a controller for the row showing `task_id`, seeding the
    /// draft with the task's current title.
    pub fn new(task_id: TaskId, current_title: impl Into<String>) -> Self {
        Self {
            task_id,
            phase: EditPhase::Viewing,
            draft: current_title.into(),
        }
    }

    /// Task this row belongs to.
    pub fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Whether the row is in edit mode.
    pub fn is_editing(&self) -> bool {
        self.phase == EditPhase::Editing
    }

    /// Uncommitted draft shown in the text input.
    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Whether the remove action is currently available.
    pub fn remove_enabled(&self) -> bool {
        !self.is_editing()
    }

    /// Enters edit mode, re-seeding the draft from the task's current
    /// title.
    ///
    /// Returns the focus directive for the host, or `None` when already
    /// editing.
    pub fn start_edit(&mut self, current_title: &str) -> Option<FocusDirective> {
        if self.is_editing() {
            return None;
        }
        self.phase = EditPhase::Editing;
        self.draft = current_title.to_string();
        Some(FocusDirective::Focus)
    }

    /// Applies one keystroke's worth of draft change.
    ///
    /// Ignored while viewing; the input is not editable then.
    pub fn change_draft(&mut self, text: impl Into<String>) {
        if self.is_editing() {
            self.draft = text.into();
        }
    }

    /// Leaves edit mode discarding the draft, which resets to the task's
    /// current title.
    ///
    /// Returns the focus directive for the host, or `None` when not
    /// editing.
    pub fn cancel(&mut self, current_title: &str) -> Option<FocusDirective> {
        if !self.is_editing() {
            return None;
        }
        self.phase = EditPhase::Viewing;
        self.draft = current_title.to_string();
        Some(FocusDirective::Blur)
    }

    /// Leaves edit mode committing the draft.
    ///
    /// The host forwards the commit to the service's edit path. Returns
    /// `(None, None)` when not editing.
    pub fn submit(&mut self) -> (Option<FocusDirective>, Option<EditCommit>) {
        if !self.is_editing() {
            return (None, None);
        }
        self.phase = EditPhase::Viewing;
        let commit = EditCommit {
            task_id: self.task_id,
            title: self.draft.clone(),
        };
        (Some(FocusDirective::Blur), Some(commit))
    }
}
