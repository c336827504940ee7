//! Task list use-case service.
//!
//! # Responsibility
//! - Forward add/toggle/edit intents to the store and push re-renders.
//! - Gate removals behind the confirmation dialog collaborator.
//! - Surface duplicate-add notices through the notice collaborator.
//!
//! # Invariants
//! - The sequence only changes through store operations; every successful
//!   mutation is followed by exactly one render push.
//! - A pending removal is consumed by its first resolution; later
//!   resolutions with the same ticket are ignored.
//! - Log events carry metadata (IDs, counts) only, never task titles.

use crate::model::task::{Task, TaskId};
use crate::store::id_source::IdSource;
use crate::store::task_store::{AddOutcome, TaskStore};
use crate::ui::confirm::{ConfirmPrompt, ConfirmationDialog, Decision, RemovalRequest, TicketId};
use crate::ui::notice::{Notice, NoticePresenter};
use crate::ui::render::RenderSink;
use log::{debug, info};

/// Composition layer between the view and the task store.
///
/// Generic over its collaborators so tests can substitute recording fakes
/// for the platform dialog/notice/render implementations.
pub struct TaskListService<I, C, N, R>
where
    I: IdSource,
    C: ConfirmationDialog,
    N: NoticePresenter,
    R: RenderSink,
{
    store: TaskStore<I>,
    dialog: C,
    notices: N,
    render: R,
    pending: Vec<(TicketId, TaskId)>,
    next_ticket: TicketId,
}

impl<I, C, N, R> TaskListService<I, C, N, R>
where
    I: IdSource,
    C: ConfirmationDialog,
    N: NoticePresenter,
    R: RenderSink,
{
    /// Wires a store to its view-layer collaborators.
    pub fn new(store: TaskStore<I>, dialog: C, notices: N, render: R) -> Self {
        Self {
            store,
            dialog,
            notices,
            render,
            pending: Vec::new(),
            next_ticket: 1,
        }
    }

    /// Read access to the current sequence.
    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    /// Task count for the header display.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Mutable access to the dialog collaborator.
    ///
    /// Embedders that buffer presented requests (the FFI layer does) drain
    /// them through this accessor.
    pub fn dialog_mut(&mut self) -> &mut C {
        &mut self.dialog
    }

    /// Mutable access to the notice collaborator.
    pub fn notices_mut(&mut self) -> &mut N {
        &mut self.notices
    }

    /// Mutable access to the render collaborator.
    pub fn render_mut(&mut self) -> &mut R {
        &mut self.render
    }

    /// Pushes the current sequence to the render sink.
    ///
    /// Used for the initial paint; mutations push on their own.
    pub fn publish(&mut self) {
        self.render.render(self.store.tasks());
    }

    /// Handles an add intent.
    ///
    /// On a title collision the sequence is untouched and a duplicate
    /// notice is presented instead.
    pub fn add(&mut self, title: &str) -> AddOutcome {
        let outcome = self.store.add(title);
        match outcome {
            AddOutcome::Added(id) => {
                info!(
                    "event=task_added module=core id={id} count={}",
                    self.store.len()
                );
                self.publish();
            }
            AddOutcome::DuplicateTitle { existing_id } => {
                debug!("event=duplicate_title_rejected module=core existing_id={existing_id}");
                self.notices.present(Notice::duplicate_task());
            }
        }
        outcome
    }

    /// Handles a toggle intent. Unknown IDs are silent no-ops.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        let changed = self.store.toggle_done(id);
        if changed {
            info!("event=task_toggled module=core id={id}");
            self.publish();
        }
        changed
    }

    /// Handles an edit intent. Unknown IDs are silent no-ops; duplicate
    /// titles are not re-checked on this path.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> bool {
        let changed = self.store.edit(id, new_title);
        if changed {
            info!("event=task_edited module=core id={id}");
            self.publish();
        }
        changed
    }

    /// Handles a remove intent by presenting the confirmation dialog.
    ///
    /// Returns the issued request, or `None` for unknown IDs (no dialog is
    /// presented for a removal that could only no-op).
    pub fn remove(&mut self, id: TaskId) -> Option<RemovalRequest> {
        self.store.get(id)?;

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending.push((ticket, id));

        let request = RemovalRequest {
            ticket,
            task_id: id,
            prompt: ConfirmPrompt::remove_task(),
        };
        debug!("event=removal_prompted module=core id={id} ticket={ticket}");
        self.dialog.present(request.clone());
        Some(request)
    }

    /// Resolves one pending removal.
    ///
    /// The first resolution consumes the ticket; unknown or already consumed
    /// tickets are ignored. Returns `true` only when a task was removed.
    pub fn resolve_removal(&mut self, ticket: TicketId, decision: Decision) -> bool {
        let position = match self.pending.iter().position(|(t, _)| *t == ticket) {
            Some(position) => position,
            None => {
                debug!("event=removal_ticket_ignored module=core ticket={ticket}");
                return false;
            }
        };
        let (_, task_id) = self.pending.remove(position);

        match decision {
            Decision::Declined => {
                debug!("event=removal_declined module=core id={task_id} ticket={ticket}");
                false
            }
            Decision::Confirmed => {
                let removed = self.store.remove_confirmed(task_id);
                if removed {
                    info!(
                        "event=task_removed module=core id={task_id} count={}",
                        self.store.len()
                    );
                    self.publish();
                }
                removed
            }
        }
    }
}
