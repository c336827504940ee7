//! Core domain logic for Taskpad.
//! This crate is the single source of truth for task-list invariants.

pub mod edit;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;
pub mod ui;

pub use edit::row_controller::{EditCommit, EditPhase, FocusDirective, RowEditController};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{Task, TaskId};
pub use service::list_service::TaskListService;
pub use store::id_source::{IdSource, SequentialIds, WallClockIds};
pub use store::task_store::{AddOutcome, TaskStore};
pub use ui::confirm::{ConfirmPrompt, ConfirmationDialog, Decision, RemovalRequest, TicketId};
pub use ui::notice::{Notice, NoticePresenter};
pub use ui::render::{NullRender, RenderSink};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
