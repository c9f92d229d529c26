use perdiem_domain::{BudgetStore, Ledger, SnapshotStore};

use crate::CoreError;

/// Abstraction over persistence backends for the three budgeting stores.
///
/// Each store is read and written whole; there is no partial-update
/// protocol. Backends are expected to fall back to the empty default when
/// persisted state is missing or unreadable, so callers never observe a
/// malformed store.
pub trait StateStorage: Send + Sync {
    fn load_ledger(&self) -> Result<Ledger, CoreError>;
    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError>;

    fn load_budgets(&self) -> Result<BudgetStore, CoreError>;
    fn save_budgets(&self, budgets: &BudgetStore) -> Result<(), CoreError>;

    fn load_snapshots(&self) -> Result<SnapshotStore, CoreError>;
    fn save_snapshots(&self, snapshots: &SnapshotStore) -> Result<(), CoreError>;
}
