use chrono::NaiveDate;

use perdiem_domain::{
    BudgetStore, Category, DayStatus, Expense, Ledger, MonthKey, MonthSnapshot, SnapshotStore,
};

use crate::{allocation_service::AllocationService, closing_service::ClosingService};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn month(y: i32, m: u32) -> MonthKey {
    MonthKey::new(y, m).unwrap()
}

fn spend(ledger: &mut Ledger, on: NaiveDate, amount: f64) {
    ledger.add_expense(on, Expense::new(amount, Category::Other, ""));
}

#[test]
fn fresh_month_spreads_budget_evenly() {
    let ledger = Ledger::new();
    let budgets = BudgetStore::new().with_month_budget(month(2024, 6), 300.0);
    let snapshots = SnapshotStore::new();

    // 30-day month, nothing spent: 300 / 30.
    let target = AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 6, 1));
    assert_eq!(target, 10.0);
}

#[test]
fn target_adapts_as_spending_accrues() {
    let mut ledger = Ledger::new();
    let budgets = BudgetStore::new().with_month_budget(month(2024, 6), 300.0);
    let snapshots = SnapshotStore::new();
    spend(&mut ledger, date(2024, 6, 1), 10.0);

    let day_two = AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 6, 2));
    assert!((day_two - 290.0 / 29.0).abs() < 1e-9);

    // A day-1 total of 10 against a target of 10 is within the 10% band.
    let day_one = AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 6, 1));
    assert_eq!(
        AllocationService::classify_day(ledger.day_total(date(2024, 6, 1)), day_one),
        DayStatus::OnBudget
    );
}

#[test]
fn overspending_tightens_later_days_down_to_zero() {
    let mut ledger = Ledger::new();
    let budgets = BudgetStore::new().with_month_budget(month(2024, 6), 100.0);
    let snapshots = SnapshotStore::new();
    spend(&mut ledger, date(2024, 6, 1), 250.0);

    // Remaining budget is negative; the target floors at 0 instead.
    let target = AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 6, 2));
    assert_eq!(target, 0.0);
}

#[test]
fn no_budget_month_yields_zero_targets_everywhere() {
    let mut ledger = Ledger::new();
    spend(&mut ledger, date(2024, 6, 10), 42.0);
    let budgets = BudgetStore::new();
    let snapshots = SnapshotStore::new();

    for day in 1..=30 {
        let target =
            AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 6, day));
        assert_eq!(target, 0.0);
        assert_eq!(
            AllocationService::classify_day(ledger.day_total(date(2024, 6, day)), target),
            DayStatus::NoBudget
        );
    }
}

#[test]
fn default_budget_of_zero_never_activates() {
    let ledger = Ledger::new();
    let budgets = BudgetStore::new().with_default_budget(Some(0.0));
    assert_eq!(
        AllocationService::effective_month_budget(&budgets, month(2024, 7)),
        0.0
    );
    let target = AllocationService::daily_target(
        &ledger,
        &budgets,
        &SnapshotStore::new(),
        date(2024, 7, 15),
    );
    assert_eq!(target, 0.0);
}

#[test]
fn classification_uses_symmetric_tolerance_band() {
    // Target 10 with 10% tolerance: band is [9, 11], exclusive at the edges.
    assert_eq!(
        AllocationService::classify_day(8.99, 10.0),
        DayStatus::UnderBudget
    );
    assert_eq!(AllocationService::classify_day(9.0, 10.0), DayStatus::UnderBudget);
    assert_eq!(AllocationService::classify_day(9.01, 10.0), DayStatus::OnBudget);
    assert_eq!(AllocationService::classify_day(10.99, 10.0), DayStatus::OnBudget);
    assert_eq!(AllocationService::classify_day(11.0, 10.0), DayStatus::OverBudget);
    assert_eq!(AllocationService::classify_day(25.0, 10.0), DayStatus::OverBudget);
    assert_eq!(AllocationService::classify_day(5.0, 0.0), DayStatus::NoBudget);
}

#[test]
fn closed_month_reports_static_target() {
    let ledger = Ledger::new();
    let budgets = BudgetStore::new();
    let mut snapshots = SnapshotStore::new();
    snapshots.insert(month(2024, 5), MonthSnapshot::closed(310.0, 310.0, 31));

    for day in [1, 15, 31] {
        let target =
            AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 5, day));
        assert_eq!(target, 10.0);
    }
}

#[test]
fn closed_month_target_ignores_later_ledger_edits() {
    let mut ledger = Ledger::new();
    spend(&mut ledger, date(2024, 5, 10), 120.0);
    let budgets = BudgetStore::new().with_month_budget(month(2024, 5), 310.0);

    let snapshots = ClosingService::close_elapsed_months(
        &ledger,
        &budgets,
        &SnapshotStore::new(),
        date(2024, 6, 1),
    );
    let before =
        AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 5, 10));

    // Books are closed: retroactive edits to the ledger and budget store
    // leave the frozen figures untouched.
    spend(&mut ledger, date(2024, 5, 20), 999.0);
    let budgets = budgets.with_month_budget(month(2024, 5), 1.0);
    let after = AllocationService::daily_target(&ledger, &budgets, &snapshots, date(2024, 5, 10));
    assert_eq!(before, after);

    let snapshot = snapshots.closed(month(2024, 5)).expect("month closed");
    assert_eq!(snapshot.spent, 120.0);
    assert_eq!(snapshot.budget, 310.0);
    assert_eq!(snapshot.days_in_month, 31);
}

#[test]
fn closer_skips_current_and_future_months() {
    let mut ledger = Ledger::new();
    spend(&mut ledger, date(2024, 6, 5), 10.0);
    spend(&mut ledger, date(2024, 7, 5), 10.0);
    let budgets = BudgetStore::new().with_month_budget(month(2024, 8), 100.0);

    let snapshots = ClosingService::close_elapsed_months(
        &ledger,
        &budgets,
        &SnapshotStore::new(),
        date(2024, 6, 15),
    );
    assert!(snapshots.months.is_empty());
}

#[test]
fn closer_covers_months_seen_only_in_the_budget_store() {
    let ledger = Ledger::new();
    let budgets = BudgetStore::new().with_month_budget(month(2024, 4), 200.0);

    let snapshots = ClosingService::close_elapsed_months(
        &ledger,
        &budgets,
        &SnapshotStore::new(),
        date(2024, 6, 1),
    );
    let snapshot = snapshots.closed(month(2024, 4)).expect("april closed");
    assert_eq!(snapshot.budget, 200.0);
    assert_eq!(snapshot.spent, 0.0);
    assert_eq!(snapshot.days_in_month, 30);
}

#[test]
fn closer_is_idempotent_and_respects_existing_snapshots() {
    let mut ledger = Ledger::new();
    spend(&mut ledger, date(2024, 5, 2), 50.0);
    let budgets = BudgetStore::new().with_month_budget(month(2024, 5), 310.0);

    let first = ClosingService::close_elapsed_months(
        &ledger,
        &budgets,
        &SnapshotStore::new(),
        date(2024, 6, 1),
    );
    let second =
        ClosingService::close_elapsed_months(&ledger, &budgets, &first, date(2024, 6, 1));
    assert_eq!(first, second);

    // Even with a grown ledger, the already-closed month stays frozen.
    spend(&mut ledger, date(2024, 5, 3), 75.0);
    let third =
        ClosingService::close_elapsed_months(&ledger, &budgets, &second, date(2024, 6, 1));
    assert_eq!(second, third);
}

#[test]
fn closer_replaces_stale_unclosed_entries() {
    let mut ledger = Ledger::new();
    spend(&mut ledger, date(2024, 5, 2), 50.0);
    let budgets = BudgetStore::new().with_month_budget(month(2024, 5), 310.0);
    let mut snapshots = SnapshotStore::new();
    snapshots.insert(
        month(2024, 5),
        MonthSnapshot {
            budget: 0.0,
            spent: 0.0,
            days_in_month: 31,
            closed: false,
        },
    );

    let closed = ClosingService::close_elapsed_months(&ledger, &budgets, &snapshots, date(2024, 6, 1));
    let snapshot = closed.closed(month(2024, 5)).expect("stale entry replaced");
    assert_eq!(snapshot.budget, 310.0);
    assert_eq!(snapshot.spent, 50.0);
}

#[test]
fn daily_deltas_reconstruct_the_monthly_total() {
    let mut ledger = Ledger::new();
    spend(&mut ledger, date(2024, 6, 1), 12.0);
    spend(&mut ledger, date(2024, 6, 1), 8.0);
    spend(&mut ledger, date(2024, 6, 14), 33.5);
    spend(&mut ledger, date(2024, 6, 30), 6.5);

    let key = month(2024, 6);
    let summed: f64 = (1..=key.days_in_month())
        .map(|day| ledger.day_total(date(2024, 6, day)))
        .sum();
    assert!((summed - AllocationService::monthly_spent(&ledger, key)).abs() < 1e-9);
}

#[test]
fn day_report_bundles_total_target_and_status() {
    let mut ledger = Ledger::new();
    spend(&mut ledger, date(2024, 6, 1), 30.0);
    let budgets = BudgetStore::new().with_month_budget(month(2024, 6), 300.0);
    let snapshots = SnapshotStore::new();

    let report =
        AllocationService::day_report(&ledger, &budgets, &snapshots, date(2024, 6, 1));
    assert_eq!(report.total, 30.0);
    assert_eq!(report.target, 9.0);
    assert_eq!(report.status, DayStatus::OverBudget);
}
