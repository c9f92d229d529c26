//! The expense ledger: per-date lists of expenses plus read-only sums.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{common::Amounted, expense::Expense, month::MonthKey};

/// Maps calendar dates to the expenses filed under them, in insertion order.
///
/// A present date key always carries a non-empty list; removing the last
/// expense for a date drops the key entirely. Moving an expense between
/// dates is not supported (remove + add).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ledger {
    #[serde(default)]
    pub days: BTreeMap<NaiveDate, Vec<Expense>>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Files an expense under `date`, appending to that day's list.
    pub fn add_expense(&mut self, date: NaiveDate, expense: Expense) {
        self.days.entry(date).or_default().push(expense);
    }

    /// Removes the expense with `id` from `date`'s list.
    ///
    /// Returns the removed record, or `None` when no such expense exists.
    /// Drops the date key when its list empties.
    pub fn remove_expense(&mut self, date: NaiveDate, id: Uuid) -> Option<Expense> {
        let entries = self.days.get_mut(&date)?;
        let position = entries.iter().position(|expense| expense.id == id)?;
        let removed = entries.remove(position);
        if entries.is_empty() {
            self.days.remove(&date);
        }
        Some(removed)
    }

    pub fn expenses_on(&self, date: NaiveDate) -> &[Expense] {
        self.days.get(&date).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total amount recorded on a single date.
    pub fn day_total(&self, date: NaiveDate) -> f64 {
        self.expenses_on(date).iter().map(Amounted::amount).sum()
    }

    /// Total amount recorded between the first and last day of `month`,
    /// inclusive on both ends.
    pub fn spent_in_month(&self, month: MonthKey) -> f64 {
        self.days
            .range(month.first_day()..=month.last_day())
            .flat_map(|(_, entries)| entries)
            .map(Amounted::amount)
            .sum()
    }

    /// Month-to-date total: every expense in `date`'s month whose day number
    /// is less than or equal to `date`'s, inclusive of the day itself.
    pub fn spent_through(&self, date: NaiveDate) -> f64 {
        let start = MonthKey::from_date(date).first_day();
        self.days
            .range(start..=date)
            .flat_map(|(_, entries)| entries)
            .map(Amounted::amount)
            .sum()
    }

    /// Every month referenced by at least one ledger entry.
    pub fn month_keys(&self) -> BTreeSet<MonthKey> {
        self.days.keys().map(|date| MonthKey::from_date(*date)).collect()
    }
}
