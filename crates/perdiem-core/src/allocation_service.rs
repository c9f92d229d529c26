//! The calculation core: effective budgets, month-to-date sums, the dynamic
//! daily target, and day classification.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use perdiem_domain::{BudgetStore, DayStatus, Ledger, MonthKey, SnapshotStore};

/// Fraction of the daily target treated as "close enough" on either side.
const ON_BUDGET_TOLERANCE: f64 = 0.1;

/// Stateless calculation service over in-memory store values.
///
/// Every function is total over valid calendar dates and well-formed
/// stores; "no budget configured" flows through as the 0 sentinel rather
/// than an error.
pub struct AllocationService;

impl AllocationService {
    /// Resolves the budget for `month` from the explicit/default store.
    pub fn effective_month_budget(budgets: &BudgetStore, month: MonthKey) -> f64 {
        budgets.effective_budget(month)
    }

    /// Total spent across the whole of `month`.
    pub fn monthly_spent(ledger: &Ledger, month: MonthKey) -> f64 {
        ledger.spent_in_month(month)
    }

    /// Month-to-date spend, inclusive of `date` itself.
    pub fn spent_through(ledger: &Ledger, date: NaiveDate) -> f64 {
        ledger.spent_through(date)
    }

    /// The adaptively recomputed maximum recommended spend for `date`.
    ///
    /// Closed months report the static `budget / days_in_month` figure from
    /// their snapshot, ignoring live ledger state. Open months redistribute
    /// whatever budget remains over the days that remain (including `date`),
    /// so overspending early tightens future days and underspending loosens
    /// them.
    pub fn daily_target(
        ledger: &Ledger,
        budgets: &BudgetStore,
        snapshots: &SnapshotStore,
        date: NaiveDate,
    ) -> f64 {
        let month = MonthKey::from_date(date);
        if let Some(snapshot) = snapshots.closed(month) {
            if snapshot.budget > 0.0 && snapshot.days_in_month > 0 {
                return snapshot.budget / snapshot.days_in_month as f64;
            }
            return 0.0;
        }

        let budget = Self::effective_month_budget(budgets, month);
        if budget <= 0.0 {
            return 0.0;
        }
        let days_remaining = month.days_in_month() as i64 - date.day() as i64 + 1;
        if days_remaining <= 0 {
            return 0.0;
        }
        let remaining = budget - Self::spent_through(ledger, date);
        (remaining / days_remaining as f64).max(0.0)
    }

    /// Classifies a day's total against its target using a symmetric,
    /// proportional tolerance band.
    pub fn classify_day(day_total: f64, daily_target: f64) -> DayStatus {
        if daily_target <= 0.0 {
            return DayStatus::NoBudget;
        }
        let tolerance = daily_target * ON_BUDGET_TOLERANCE;
        if day_total <= daily_target - tolerance {
            DayStatus::UnderBudget
        } else if day_total >= daily_target + tolerance {
            DayStatus::OverBudget
        } else {
            DayStatus::OnBudget
        }
    }

    /// Convenience bundle of the figures a front end renders for one day.
    pub fn day_report(
        ledger: &Ledger,
        budgets: &BudgetStore,
        snapshots: &SnapshotStore,
        date: NaiveDate,
    ) -> DayReport {
        let total = ledger.day_total(date);
        let target = Self::daily_target(ledger, budgets, snapshots, date);
        DayReport {
            date,
            total,
            target,
            status: Self::classify_day(total, target),
        }
    }
}

/// The figures rendered for a single day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayReport {
    pub date: NaiveDate,
    pub total: f64,
    pub target: f64,
    pub status: DayStatus,
}
