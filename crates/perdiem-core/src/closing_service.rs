//! Freezes fully-elapsed months into immutable snapshots.

use chrono::NaiveDate;
use std::collections::BTreeSet;
use tracing::debug;

use perdiem_domain::{BudgetStore, Ledger, MonthKey, MonthSnapshot, SnapshotStore};

use crate::allocation_service::AllocationService;

/// Scans for months that have fully elapsed and records their final figures.
pub struct ClosingService;

impl ClosingService {
    /// Closes every month referenced by the ledger or budget store that is
    /// strictly earlier than `reference`'s month and not yet closed.
    ///
    /// Returns the updated snapshot store; persistence stays with the
    /// caller. Idempotent: closed snapshots are never overwritten, so
    /// re-running with a grown ledger never alters an already-closed month.
    pub fn close_elapsed_months(
        ledger: &Ledger,
        budgets: &BudgetStore,
        snapshots: &SnapshotStore,
        reference: NaiveDate,
    ) -> SnapshotStore {
        let current = MonthKey::from_date(reference);
        let mut result = snapshots.clone();

        let mut candidates: BTreeSet<MonthKey> = ledger.month_keys();
        candidates.extend(budgets.monthly.keys().copied());

        for month in candidates {
            if month >= current || result.closed(month).is_some() {
                continue;
            }
            let snapshot = MonthSnapshot::closed(
                AllocationService::effective_month_budget(budgets, month),
                AllocationService::monthly_spent(ledger, month),
                month.days_in_month(),
            );
            debug!(month = %month, budget = snapshot.budget, spent = snapshot.spent, "closing month");
            result.insert(month, snapshot);
        }
        result
    }
}
