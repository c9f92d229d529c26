//! Per-month budget amounts with an optional default fallback.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::month::MonthKey;

/// Stores explicit per-month budgets plus the "apply a default budget to all
/// months" fallback pair.
///
/// Operations return a new store value rather than mutating in place, so
/// callers choose whether and when to persist.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetStore {
    #[serde(default)]
    pub monthly: BTreeMap<MonthKey, f64>,
    #[serde(default)]
    pub use_default: bool,
    #[serde(default)]
    pub default_budget: f64,
}

impl BudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Explicit entry for `month`, if one was ever set.
    pub fn explicit_budget(&self, month: MonthKey) -> Option<f64> {
        self.monthly.get(&month).copied()
    }

    /// Resolves the budget for `month`: the explicit entry when present and
    /// non-negative, else the default when enabled and positive, else 0.
    ///
    /// Zero is the "no budget configured" sentinel, never an error.
    pub fn effective_budget(&self, month: MonthKey) -> f64 {
        if let Some(amount) = self.explicit_budget(month) {
            if amount >= 0.0 {
                return amount;
            }
        }
        if self.use_default && self.default_budget > 0.0 {
            return self.default_budget;
        }
        0.0
    }

    /// Returns a store with `month`'s budget set to `amount`, clamped to 0
    /// when negative. Overwrites any existing entry.
    pub fn with_month_budget(&self, month: MonthKey, amount: f64) -> Self {
        let mut next = self.clone();
        next.monthly.insert(month, amount.max(0.0));
        next
    }

    /// Returns a store with `delta` added to `month`'s explicit budget
    /// (missing entries count as 0), saturating at 0.
    pub fn with_month_offset(&self, month: MonthKey, delta: f64) -> Self {
        let current = self.explicit_budget(month).unwrap_or(0.0);
        let mut next = self.clone();
        next.monthly.insert(month, (current + delta).max(0.0));
        next
    }

    /// Returns a store with the default-budget fallback enabled (`Some`) or
    /// disabled (`None`).
    pub fn with_default_budget(&self, default: Option<f64>) -> Self {
        let mut next = self.clone();
        match default {
            Some(amount) => {
                next.use_default = true;
                next.default_budget = amount.max(0.0);
            }
            None => {
                next.use_default = false;
                next.default_budget = 0.0;
            }
        }
        next
    }
}
