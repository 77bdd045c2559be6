//! Scenario tests for the table controller.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use gridview_core::{
    BulkAction, CommandOutcome, PageJump, SelectionTracker, TableController, ViewCommand,
    ViewError,
};
use gridview_model::{Label, Payment, PaymentStatus, Priority, RecordId, Task, TaskStatus};

fn rid(value: &str) -> RecordId {
    RecordId::new(value).unwrap()
}

fn payments(n: usize) -> Vec<Payment> {
    (1..=n)
        .map(|i| Payment {
            id: rid(&format!("PAY-{i:05}")),
            email: format!("user{i}@example.com"),
            status: PaymentStatus::Pending,
            amount: 50 + i as u32,
        })
        .collect()
}

fn task(id: &str) -> Task {
    Task {
        id: rid(id),
        title: format!("Task {id}"),
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        label: Label::Feature,
        estimated_hours: 1.0,
        created_at: NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
    }
}

#[test]
fn sixty_records_have_six_pages() {
    let mut controller = TableController::new(payments(60));
    assert_eq!(controller.total_pages(), 6);

    assert_eq!(controller.go_to_page(5), Ok(true));
    assert_eq!(
        controller.go_to_page(6),
        Err(ViewError::OutOfRangePage {
            requested: 6,
            total_pages: 6,
        })
    );
    assert_eq!(controller.pagination().page_index(), 5);
    assert_eq!(controller.pagination().draft(), "6");
    assert_eq!(controller.visible_records().len(), 10);
    assert_eq!(controller.visible_records()[0].id, rid("PAY-00051"));
}

#[test]
fn reconcile_after_external_deletion() {
    let mut selection = SelectionTracker::new();
    for id in ["A", "B", "C"] {
        selection.toggle(&rid(id));
    }
    let existing: BTreeSet<RecordId> = [rid("A"), rid("B")].into_iter().collect();
    let stale = selection.reconcile(&existing);
    assert_eq!(stale, vec![rid("C")]);
    assert_eq!(selection.selected_ids(), &existing);
}

#[test]
fn draft_beyond_last_page_resets_to_committed_page() {
    let mut controller = TableController::new(payments(60));
    controller.go_to_page(2).unwrap();
    controller.update_draft("7").unwrap();
    let jump = controller.commit_page_jump();
    assert_eq!(
        jump,
        PageJump::Reverted {
            page_index: 2,
            requested: Some(7),
        }
    );
    assert_eq!(controller.pagination().draft(), "3");
    assert_eq!(controller.pagination().page_index(), 2);
}

#[test]
fn rejected_go_to_page_discards_pending_draft() {
    let mut controller = TableController::new(payments(60));
    controller.go_to_page(2).unwrap();
    controller.update_draft("5").unwrap();
    assert!(controller.dispatch(ViewCommand::GoToPage(9)).is_err());
    assert_eq!(controller.pagination().page_index(), 2);
    assert_eq!(controller.snapshot().draft, "3");
}

#[test]
fn valid_draft_commits() {
    let mut controller = TableController::new(payments(60));
    controller.update_draft("6").unwrap();
    assert_eq!(
        controller.commit_page_jump(),
        PageJump::Committed { page_index: 5 }
    );
    assert!(!controller.snapshot().can_next_page);
}

#[test]
fn status_change_to_done_updates_selected_tasks_only() {
    let mut controller = TableController::new(vec![task("X"), task("Y"), task("Z")]);
    controller.toggle(&rid("X")).unwrap();
    controller.toggle(&rid("Y")).unwrap();

    let report = controller.apply_status_change_str("done").unwrap();
    assert_eq!(report.ids, vec![rid("X"), rid("Y")]);
    assert_eq!(
        report.action,
        BulkAction::SetStatus {
            status: "done".to_string()
        }
    );

    let statuses: Vec<TaskStatus> = controller.records().iter().map(|t| t.status).collect();
    assert_eq!(
        statuses,
        vec![TaskStatus::Done, TaskStatus::Done, TaskStatus::Todo]
    );
    assert!(controller.selection().is_empty());
}

#[test]
fn delete_with_empty_selection_changes_nothing() {
    let mut controller = TableController::new(payments(12));
    controller.next_page();
    let before = controller.snapshot();

    assert_eq!(controller.apply_delete(), Err(ViewError::EmptySelection));
    assert_eq!(controller.snapshot(), before);
    assert_eq!(controller.records().len(), 12);
}

#[test]
fn invalid_status_leaves_selection_and_records_untouched() {
    let mut controller = TableController::new(vec![task("X"), task("Y")]);
    controller.toggle(&rid("X")).unwrap();

    let err = controller.apply_status_change_str("archived").unwrap_err();
    assert_eq!(err, ViewError::InvalidStatus("archived".to_string()));
    assert!(err.is_contract_violation());
    assert_eq!(controller.selection().len(), 1);
    assert!(controller.records().iter().all(|t| t.status == TaskStatus::Todo));
}

#[test]
fn selection_survives_navigation() {
    let mut controller = TableController::new(payments(30));
    controller.go_to_page(1).unwrap();
    controller.toggle(&rid("PAY-00015")).unwrap();
    controller.first_page();
    assert!(controller.is_selected(&rid("PAY-00015")));
    assert_eq!(controller.snapshot().selected_count, 1);
}

#[test]
fn navigation_overwrites_uncommitted_draft() {
    let mut controller = TableController::new(payments(30));
    controller.update_draft("3").unwrap();
    controller.next_page();
    assert_eq!(controller.pagination().draft(), "2");

    // At the last page next_page is a no-op and the edit survives.
    controller.last_page();
    controller.update_draft("1").unwrap();
    assert!(!controller.next_page());
    assert_eq!(controller.pagination().draft(), "1");
}

#[test]
fn empty_store_stays_on_first_page() {
    let mut controller: TableController<Payment> = TableController::new(Vec::new());
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.total_pages, 1);
    assert_eq!(snapshot.page_index, 0);
    assert_eq!(snapshot.row_range, None);
    assert!(!controller.next_page());
    assert!(!controller.last_page());
    assert!(controller.visible_records().is_empty());
}

#[test]
fn dispatch_routes_commands_in_order() {
    let mut controller = TableController::new(payments(60));
    let commands = vec![
        ViewCommand::SetPageSize(20),
        ViewCommand::LastPage,
        ViewCommand::Toggle(rid("PAY-00045")),
        ViewCommand::TogglePageSelection,
        ViewCommand::ApplyStatusChange("failed".to_string()),
    ];
    let outcomes: Vec<CommandOutcome> = commands
        .into_iter()
        .map(|command| controller.dispatch(command).unwrap())
        .collect();

    assert_eq!(outcomes[0], CommandOutcome::Navigated { moved: false });
    assert_eq!(outcomes[1], CommandOutcome::Navigated { moved: true });
    assert_eq!(outcomes[2], CommandOutcome::Selection { selected: 1 });
    assert_eq!(outcomes[3], CommandOutcome::Selection { selected: 20 });
    match &outcomes[4] {
        CommandOutcome::Bulk { report } => assert_eq!(report.count(), 20),
        other => panic!("unexpected outcome: {other:?}"),
    }
    assert_eq!(
        controller
            .records()
            .iter()
            .filter(|p| p.status == PaymentStatus::Failed)
            .count(),
        20
    );
}

#[test]
fn dispatch_reports_recoverable_errors() {
    let mut controller = TableController::new(payments(5));
    assert_eq!(
        controller.dispatch(ViewCommand::PushDraftChar('x')),
        Err(ViewError::InvalidDraftInput("x".to_string()))
    );
    assert_eq!(
        controller.dispatch(ViewCommand::ApplyDelete),
        Err(ViewError::EmptySelection)
    );
    assert_eq!(
        controller.dispatch(ViewCommand::CommitPageJump),
        Ok(CommandOutcome::PageJump {
            jump: PageJump::Committed { page_index: 0 }
        })
    );
}

#[test]
fn snapshot_serializes_for_the_rendering_layer() {
    let mut controller = TableController::new(payments(15));
    controller.toggle(&rid("PAY-00002")).unwrap();
    let json = serde_json::to_value(controller.snapshot()).unwrap();
    assert_eq!(json["page_number"], 1);
    assert_eq!(json["total_pages"], 2);
    assert_eq!(json["selected_ids"][0], "PAY-00002");
    assert_eq!(json["row_range"], serde_json::json!([1, 10]));
}
