use taskpad_core::{
    AddOutcome, FocusDirective, RowEditController, SequentialIds, TaskListService, TaskStore,
};
use taskpad_core::{ConfirmationDialog, NoticePresenter, NullRender, RemovalRequest};

#[derive(Default)]
struct DropDialog;

impl ConfirmationDialog for DropDialog {
    fn present(&mut self, _request: RemovalRequest) {}
}

#[derive(Default)]
struct DropNotices;

impl NoticePresenter for DropNotices {
    fn present(&mut self, _notice: taskpad_core::Notice) {}
}

type Service = TaskListService<SequentialIds, DropDialog, DropNotices, NullRender>;

fn service_with(title: &str) -> (Service, taskpad_core::TaskId) {
    let mut service = TaskListService::new(
        TaskStore::with_ids(SequentialIds::default()),
        DropDialog,
        DropNotices,
        NullRender,
    );
    let id = match service.add(title) {
        AddOutcome::Added(id) => id,
        other => panic!("seed add failed: {other:?}"),
    };
    (service, id)
}

#[test]
fn controller_starts_viewing_with_remove_enabled() {
    let controller = RowEditController::new(1, "Buy milk");

    assert!(!controller.is_editing());
    assert!(controller.remove_enabled());
    assert_eq!(controller.draft(), "Buy milk");
}

#[test]
fn start_edit_focuses_and_disables_remove() {
    let mut controller = RowEditController::new(1, "Buy milk");

    let directive = controller.start_edit("Buy milk");
    assert_eq!(directive, Some(FocusDirective::Focus));
    assert!(controller.is_editing());
    assert!(!controller.remove_enabled());

    // Re-entering edit mode is a no-op without a second focus directive.
    assert_eq!(controller.start_edit("Buy milk"), None);
}

#[test]
fn start_edit_reseeds_draft_from_current_title() {
    let mut controller = RowEditController::new(1, "Buy milk");
    controller.start_edit("Buy milk");
    controller.change_draft("scratch");
    controller.cancel("Buy milk");

    // The task was renamed elsewhere between sessions.
    controller.start_edit("Buy oat milk");
    assert_eq!(controller.draft(), "Buy oat milk");
}

#[test]
fn cancel_discards_draft_and_leaves_task_unchanged() {
    let (service, id) = service_with("Buy milk");
    let mut controller = RowEditController::new(id, "Buy milk");

    controller.start_edit("Buy milk");
    controller.change_draft("Buy everything");
    let directive = controller.cancel("Buy milk");

    assert_eq!(directive, Some(FocusDirective::Blur));
    assert!(!controller.is_editing());
    assert_eq!(controller.draft(), "Buy milk");
    assert_eq!(service.tasks()[0].title, "Buy milk");

    // Cancel outside a session yields nothing.
    assert_eq!(controller.cancel("Buy milk"), None);
}

#[test]
fn submit_commits_exactly_the_final_draft() {
    let (mut service, id) = service_with("Buy milk");
    let mut controller = RowEditController::new(id, "Buy milk");

    controller.start_edit("Buy milk");
    controller.change_draft("Buy oat");
    controller.change_draft("Buy oat milk");
    let (directive, commit) = controller.submit();

    assert_eq!(directive, Some(FocusDirective::Blur));
    let commit = commit.expect("submit should produce a commit");
    assert_eq!(commit.task_id, id);
    assert_eq!(commit.title, "Buy oat milk");

    assert!(service.edit(commit.task_id, &commit.title));
    assert_eq!(service.tasks()[0].title, "Buy oat milk");
    assert!(!controller.is_editing());
    assert!(controller.remove_enabled());
}

#[test]
fn submit_outside_session_produces_nothing() {
    let mut controller = RowEditController::new(1, "Buy milk");

    let (directive, commit) = controller.submit();
    assert_eq!(directive, None);
    assert!(commit.is_none());
}

#[test]
fn draft_changes_are_ignored_while_viewing() {
    let mut controller = RowEditController::new(1, "Buy milk");

    controller.change_draft("should not stick");
    assert_eq!(controller.draft(), "Buy milk");
}

#[test]
fn rows_edit_independently() {
    let (mut service, first) = service_with("first");
    let second = match service.add("second") {
        AddOutcome::Added(id) => id,
        other => panic!("seed add failed: {other:?}"),
    };

    let mut row_one = RowEditController::new(first, "first");
    let mut row_two = RowEditController::new(second, "second");

    row_one.start_edit("first");
    assert!(row_one.is_editing());
    assert!(!row_two.is_editing());
    assert!(row_two.remove_enabled());

    row_two.start_edit("second");
    row_two.change_draft("second!");
    let (_, commit) = row_two.submit();
    assert!(row_one.is_editing());
    assert_eq!(commit.expect("commit").title, "second!");
}
