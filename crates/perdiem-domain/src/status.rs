//! Day classification against the daily target.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Describes how a day's actual spend compares to its daily target.
pub enum DayStatus {
    NoBudget,
    UnderBudget,
    OnBudget,
    OverBudget,
}

impl fmt::Display for DayStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DayStatus::NoBudget => "No Budget",
            DayStatus::UnderBudget => "Under Budget",
            DayStatus::OnBudget => "On Budget",
            DayStatus::OverBudget => "Over Budget",
        };
        f.write_str(label)
    }
}
