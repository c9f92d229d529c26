//! perdiem-domain
//!
//! Pure domain models (Expense, Ledger, BudgetStore, MonthSnapshot, etc.)
//! plus the calendar math they depend on. No I/O, no CLI, no storage.

pub mod budget;
pub mod common;
pub mod expense;
pub mod ledger;
pub mod month;
pub mod snapshot;
pub mod status;

pub use budget::*;
pub use common::*;
pub use expense::*;
pub use ledger::*;
pub use month::*;
pub use snapshot::*;
pub use status::*;
