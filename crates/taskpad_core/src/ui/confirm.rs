//! Removal confirmation contract.
//!
//! # Responsibility
//! - Describe the two-choice dialog the remove flow is gated on.
//!
//! # Invariants
//! - Each presented request must be resolved exactly once, eventually, via
//!   `TaskListService::resolve_removal` with the matching ticket.
//! - Declining is a normal outcome, not an error.

use crate::model::task::TaskId;

/// Ticket correlating a presented dialog with its eventual resolution.
pub type TicketId = u64;

/// User choice reported back for a pending removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Proceed with the removal.
    Confirmed,
    /// Keep the task; sequence stays unchanged.
    Declined,
}

/// Copy for the two-choice dialog shown before a removal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
    pub confirm_label: String,
    pub decline_label: String,
}

impl ConfirmPrompt {
    /// Standard copy for the remove-task dialog.
    pub fn remove_task() -> Self {
        Self {
            title: "Remove item".to_string(),
            message: "Are you sure you want to remove this item?".to_string(),
            confirm_label: "Yes".to_string(),
            decline_label: "No".to_string(),
        }
    }
}

/// One pending removal awaiting a user decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalRequest {
    /// Handle the embedder passes back on resolution.
    pub ticket: TicketId,
    /// Task the dialog is about.
    pub task_id: TaskId,
    /// Dialog copy to present.
    pub prompt: ConfirmPrompt,
}

/// Presents removal confirmations to the user.
pub trait ConfirmationDialog {
    /// Presents one request. The implementation must eventually route one
    /// decision for this ticket back into the service.
    fn present(&mut self, request: RemovalRequest);
}
