//! Frozen month-closing records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::month::MonthKey;

/// The figures that were true for a month at closing time.
///
/// Once `closed` is set the budget, spent total, and day count never change
/// again; the snapshot insulates past days from later edits to the budget
/// store or ledger.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct MonthSnapshot {
    pub budget: f64,
    pub spent: f64,
    pub days_in_month: u32,
    pub closed: bool,
}

impl MonthSnapshot {
    pub fn closed(budget: f64, spent: f64, days_in_month: u32) -> Self {
        Self {
            budget,
            spent,
            days_in_month,
            closed: true,
        }
    }
}

/// One snapshot per fully-elapsed month, keyed by month.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SnapshotStore {
    #[serde(default)]
    pub months: BTreeMap<MonthKey, MonthSnapshot>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The closed snapshot for `month`, if one exists. Stale entries that
    /// never reached `closed` are ignored.
    pub fn closed(&self, month: MonthKey) -> Option<&MonthSnapshot> {
        self.months.get(&month).filter(|snapshot| snapshot.closed)
    }

    pub fn insert(&mut self, month: MonthKey, snapshot: MonthSnapshot) {
        self.months.insert(month, snapshot);
    }
}
