//! Property tests for controller invariants.

use std::collections::BTreeSet;

use gridview_core::{PageJump, SelectionTracker, TableController, ViewCommand};
use gridview_model::{Payment, PaymentStatus, RecordId};
use proptest::prelude::*;

const PAGE_SIZES: [usize; 5] = [10, 20, 30, 40, 50];

fn payments(n: usize) -> Vec<Payment> {
    (0..n)
        .map(|i| Payment {
            id: RecordId::new(format!("PAY-{i:05}")).unwrap(),
            email: format!("user{i}@example.com"),
            status: PaymentStatus::Pending,
            amount: 100,
        })
        .collect()
}

fn rid(i: usize) -> RecordId {
    RecordId::new(format!("PAY-{i:05}")).unwrap()
}

fn command_strategy(records: usize) -> impl Strategy<Value = ViewCommand> {
    prop_oneof![
        prop::sample::select(PAGE_SIZES.to_vec()).prop_map(ViewCommand::SetPageSize),
        (0usize..12).prop_map(ViewCommand::GoToPage),
        Just(ViewCommand::NextPage),
        Just(ViewCommand::PreviousPage),
        Just(ViewCommand::FirstPage),
        Just(ViewCommand::LastPage),
        "[0-9]{0,3}".prop_map(ViewCommand::UpdateDraft),
        Just(ViewCommand::CommitPageJump),
        (0..records.max(1)).prop_map(|i| ViewCommand::Toggle(rid(i))),
        Just(ViewCommand::TogglePageSelection),
        Just(ViewCommand::ApplyDelete),
        Just(ViewCommand::ApplyStatusChange("failed".to_string())),
    ]
}

fn assert_invariants(controller: &TableController<Payment>) {
    let snapshot = controller.snapshot();
    assert!(snapshot.page_index < snapshot.total_pages);
    if snapshot.total_records == 0 {
        assert_eq!(snapshot.page_index, 0);
    }
    let existing = controller.store().ids();
    for id in controller.selection().selected_ids() {
        assert!(existing.contains(id), "stale selection {id}");
    }
    assert!(snapshot.draft.chars().all(|c| c.is_ascii_digit()));
}

proptest! {
    #[test]
    fn page_size_change_keeps_index_in_range(
        records in 0usize..200,
        start_page in 0usize..20,
        size in prop::sample::select(PAGE_SIZES.to_vec()),
    ) {
        let mut controller = TableController::new(payments(records));
        let _ = controller.go_to_page(start_page);
        controller.set_page_size(size).unwrap();
        let snapshot = controller.snapshot();
        prop_assert!(snapshot.page_index < snapshot.total_pages);
        prop_assert_eq!(snapshot.total_pages, records.div_ceil(size).max(1));
    }

    #[test]
    fn toggle_is_its_own_inverse(
        preselected in prop::collection::btree_set(0usize..30, 0..10),
        target in 0usize..30,
    ) {
        let mut selection = SelectionTracker::new();
        for i in &preselected {
            selection.toggle(&rid(*i));
        }
        let before = selection.clone();
        selection.toggle(&rid(target));
        selection.toggle(&rid(target));
        prop_assert_eq!(selection, before);
    }

    #[test]
    fn out_of_range_jump_never_moves(
        records in 1usize..120,
        start_page in 0usize..12,
        target in 0usize..1000,
    ) {
        let mut controller = TableController::new(payments(records));
        let _ = controller.go_to_page(start_page);
        let total_pages = controller.total_pages();
        prop_assume!(target == 0 || target > total_pages);
        let before = controller.pagination().page_index();
        controller.update_draft(&target.to_string()).unwrap();
        let jump = controller.commit_page_jump();
        prop_assert_eq!(controller.pagination().page_index(), before);
        prop_assert_eq!(
            jump,
            PageJump::Reverted { page_index: before, requested: Some(target) }
        );
        prop_assert_eq!(controller.pagination().draft(), (before + 1).to_string());
    }

    #[test]
    fn reconcile_removes_exactly_absent_ids(
        selected in prop::collection::btree_set(0usize..40, 0..20),
        existing in prop::collection::btree_set(0usize..40, 0..40),
    ) {
        let mut selection = SelectionTracker::new();
        for i in &selected {
            selection.toggle(&rid(*i));
        }
        let existing_ids: BTreeSet<RecordId> = existing.iter().map(|i| rid(*i)).collect();
        let removed: BTreeSet<RecordId> = selection.reconcile(&existing_ids).into_iter().collect();

        let expected_kept: BTreeSet<RecordId> =
            selected.intersection(&existing).map(|i| rid(*i)).collect();
        let expected_removed: BTreeSet<RecordId> =
            selected.difference(&existing).map(|i| rid(*i)).collect();
        prop_assert_eq!(selection.selected_ids(), &expected_kept);
        prop_assert_eq!(removed, expected_removed);
    }

    #[test]
    fn bulk_actions_clear_selection(
        records in 1usize..80,
        picks in prop::collection::btree_set(0usize..80, 1..10),
        delete in any::<bool>(),
    ) {
        let mut controller = TableController::new(payments(records));
        let picks: Vec<usize> = picks.into_iter().filter(|i| *i < records).collect();
        prop_assume!(!picks.is_empty());
        for i in &picks {
            controller.toggle(&rid(*i)).unwrap();
        }
        let report = if delete {
            controller.apply_delete().unwrap()
        } else {
            controller.apply_status_change(PaymentStatus::Success).unwrap()
        };
        prop_assert_eq!(report.count(), picks.len());
        prop_assert!(controller.selection().is_empty());
        if delete {
            prop_assert_eq!(controller.records().len(), records - picks.len());
        }
        assert_invariants(&controller);
    }

    #[test]
    fn arbitrary_command_sequences_preserve_invariants(
        records in 0usize..90,
        commands in prop::collection::vec(command_strategy(90), 0..40),
    ) {
        let mut controller = TableController::new(payments(records));
        for command in commands {
            let _ = controller.dispatch(command);
            assert_invariants(&controller);
        }
    }
}
