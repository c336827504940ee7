//! FFI use-case API for the mobile UI.
//!
//! # Responsibility
//! - Expose stable, use-case-level task list functions to Dart via FRB.
//! - Route core collaborator callbacks (dialog, notice) into response
//!   envelopes the UI can present natively.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - All calls are synchronous and run to completion on the caller's
//!   dispatch thread; one process-wide list guarded by a mutex.
//! - Removal prompts issued here must be resolved through
//!   `resolve_remove_task` exactly once per ticket.

use log::debug;
use std::sync::{Mutex, OnceLock};
use taskpad_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AddOutcome, ConfirmationDialog, Decision, Notice, NoticePresenter, RemovalRequest, RenderSink,
    Task, TaskId, TaskListService, TaskStore, WallClockIds,
};

/// Dialog collaborator that hands the pending request to the caller's
/// response envelope instead of presenting anything itself.
#[derive(Default)]
struct ForwardedDialog {
    last: Option<RemovalRequest>,
}

impl ConfirmationDialog for ForwardedDialog {
    fn present(&mut self, request: RemovalRequest) {
        self.last = Some(request);
    }
}

/// Notice collaborator backing the envelope message for rejected adds.
#[derive(Default)]
struct ForwardedNotices {
    last: Option<Notice>,
}

impl NoticePresenter for ForwardedNotices {
    fn present(&mut self, notice: Notice) {
        self.last = Some(notice);
    }
}

/// Render collaborator for the pull-based FFI surface: the UI fetches
/// snapshots on demand, so pushes only leave a trace in the logs.
#[derive(Default)]
struct FrameLog;

impl RenderSink for FrameLog {
    fn render(&mut self, tasks: &[Task]) {
        debug!("event=list_rendered module=ffi count={}", tasks.len());
    }
}

type App = TaskListService<WallClockIds, ForwardedDialog, ForwardedNotices, FrameLog>;

static APP: OnceLock<Mutex<App>> = OnceLock::new();

fn with_app<T>(f: impl FnOnce(&mut App) -> T) -> T {
    let app = APP.get_or_init(|| {
        Mutex::new(TaskListService::new(
            TaskStore::new(),
            ForwardedDialog::default(),
            ForwardedNotices::default(),
            FrameLog,
        ))
    });
    match app.lock() {
        Ok(mut guard) => f(&mut guard),
        // A poisoning panic cannot corrupt the list (mutations are
        // single-pass swaps), so keep serving instead of propagating.
        Err(poisoned) => f(&mut poisoned.into_inner()),
    }
}

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Sync call; may perform small file-system setup work.
/// - Idempotent for repeated calls with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on
///   failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// One task row for list rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

/// Full list snapshot with the header counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListSnapshot {
    /// Tasks in insertion order.
    pub tasks: Vec<TaskView>,
    /// Count shown by the header component.
    pub count: u32,
}

/// Generic action response envelope for task mutations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskActionResponse {
    /// Whether the sequence changed.
    pub ok: bool,
    /// Affected task ID when available.
    pub task_id: Option<i64>,
    /// Human-readable message for diagnostics/UI notices.
    pub message: String,
}

impl TaskActionResponse {
    fn changed(message: impl Into<String>, task_id: TaskId) -> Self {
        Self {
            ok: true,
            task_id: Some(task_id),
            message: message.into(),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            task_id: None,
            message: message.into(),
        }
    }
}

/// Response for a removal request: everything the UI needs to show the
/// native two-choice alert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovalPromptResponse {
    /// Whether a prompt was issued (false for unknown IDs).
    pub ok: bool,
    /// Ticket to pass back through `resolve_remove_task`.
    pub ticket: Option<u64>,
    /// Dialog title.
    pub title: String,
    /// Dialog body.
    pub message: String,
    /// Label of the affirmative choice.
    pub confirm_label: String,
    /// Label of the declining choice.
    pub decline_label: String,
}

/// Returns the current task list and header count.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Snapshot is a copy; later mutations do not affect it.
#[flutter_rust_bridge::frb(sync)]
pub fn list_tasks() -> TaskListSnapshot {
    with_app(|app| {
        let tasks = app
            .tasks()
            .iter()
            .map(|task| TaskView {
                id: task.id,
                title: task.title.clone(),
                done: task.done,
            })
            .collect::<Vec<_>>();
        let count = tasks.len() as u32;
        TaskListSnapshot { tasks, count }
    })
}

/// Adds a new pending task.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Input is trimmed; blank titles are rejected before reaching the store.
/// - Duplicate titles leave the list unchanged and return the notice copy
///   for the UI alert.
#[flutter_rust_bridge::frb(sync)]
pub fn add_task(title: String) -> TaskActionResponse {
    let title = title.trim().to_string();
    if title.is_empty() {
        return TaskActionResponse::rejected("Task title cannot be empty");
    }

    with_app(|app| match app.add(&title) {
        AddOutcome::Added(id) => TaskActionResponse::changed("Task added.", id),
        AddOutcome::DuplicateTitle { .. } => {
            let message = app
                .notices_mut()
                .last
                .take()
                .map(|notice| notice.message)
                .unwrap_or_else(|| "You cannot add a task with the same title".to_string());
            TaskActionResponse::rejected(message)
        }
    })
}

/// Toggles the completion flag of one task.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Unknown IDs report `ok=false` and leave the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn toggle_task(id: i64) -> TaskActionResponse {
    with_app(|app| {
        if app.toggle_done(id) {
            TaskActionResponse::changed("Task toggled.", id)
        } else {
            TaskActionResponse::rejected("Task not found.")
        }
    })
}

/// Replaces the title of one task (inline edit submit path).
///
/// # FFI contract
/// - Sync call, never panics.
/// - Input is trimmed; duplicate titles are not re-checked on this path.
/// - Unknown IDs report `ok=false` and leave the list unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn edit_task(id: i64, title: String) -> TaskActionResponse {
    let title = title.trim().to_string();
    with_app(|app| {
        if app.edit(id, &title) {
            TaskActionResponse::changed("Task updated.", id)
        } else {
            TaskActionResponse::rejected("Task not found.")
        }
    })
}

/// Starts the confirmation-gated removal flow for one task.
///
/// The UI presents the returned prompt as a native alert and must route the
/// user's choice back through `resolve_remove_task` exactly once.
///
/// # FFI contract
/// - Sync call, never panics.
/// - Nothing is removed by this call.
/// - Unknown IDs report `ok=false` without issuing a prompt.
#[flutter_rust_bridge::frb(sync)]
pub fn request_remove_task(id: i64) -> RemovalPromptResponse {
    with_app(|app| {
        if app.remove(id).is_some() {
            // The service presented the request through the dialog
            // collaborator; forward it to the UI as the alert payload.
            if let Some(request) = app.dialog_mut().last.take() {
                return RemovalPromptResponse {
                    ok: true,
                    ticket: Some(request.ticket),
                    title: request.prompt.title,
                    message: request.prompt.message,
                    confirm_label: request.prompt.confirm_label,
                    decline_label: request.prompt.decline_label,
                };
            }
        }
        RemovalPromptResponse {
            ok: false,
            ticket: None,
            title: String::new(),
            message: "Task not found.".to_string(),
            confirm_label: String::new(),
            decline_label: String::new(),
        }
    })
}

/// Resolves one pending removal with the user's dialog choice.
///
/// # FFI contract
/// - Sync call, never panics.
/// - The first resolution consumes the ticket; repeats and unknown tickets
///   report `ok=false` and change nothing.
/// - Declining is a normal outcome (`ok=false`, list unchanged).
#[flutter_rust_bridge::frb(sync)]
pub fn resolve_remove_task(ticket: u64, confirmed: bool) -> TaskActionResponse {
    let decision = if confirmed {
        Decision::Confirmed
    } else {
        Decision::Declined
    };
    with_app(|app| {
        if app.resolve_removal(ticket, decision) {
            TaskActionResponse {
                ok: true,
                task_id: None,
                message: "Task removed.".to_string(),
            }
        } else {
            TaskActionResponse::rejected("Task kept.")
        }
    })
}
