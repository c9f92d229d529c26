//! Application context: configuration, storage, and the closing pass.

use std::path::PathBuf;

use tracing::debug;

use perdiem_config::{Config, ConfigManager};
use perdiem_core::{Clock, ClosingService, StateStorage, SystemClock};
use perdiem_domain::{BudgetStore, Ledger, SnapshotStore};
use perdiem_storage_json::JsonStateStorage;

use crate::CliError;

const DATA_DIR_ENV: &str = "PERDIEM_DATA_DIR";
const CONFIG_DIR_ENV: &str = "PERDIEM_CONFIG_DIR";

/// Owns the loaded stores and their persistence timing for one invocation.
///
/// Opening a context runs the month closer against today's date; the pass
/// is idempotent so repeated invocations are harmless.
pub struct AppContext {
    pub config: Config,
    pub ledger: Ledger,
    pub budgets: BudgetStore,
    pub snapshots: SnapshotStore,
    storage: JsonStateStorage,
}

impl AppContext {
    /// Loads config and stores, then closes any elapsed months.
    pub fn open() -> Result<Self, CliError> {
        let config = load_config()?;
        let storage = JsonStateStorage::new(resolve_data_dir(&config))?;

        let ledger = storage.load_ledger()?;
        let budgets = storage.load_budgets()?;
        let snapshots = storage.load_snapshots()?;

        let today = SystemClock.today();
        let closed = ClosingService::close_elapsed_months(&ledger, &budgets, &snapshots, today);
        if closed != snapshots {
            debug!("closing pass produced new snapshots, persisting");
            storage.save_snapshots(&closed)?;
        }

        Ok(Self {
            config,
            ledger,
            budgets,
            snapshots: closed,
            storage,
        })
    }

    pub fn save_ledger(&self) -> Result<(), CliError> {
        self.storage.save_ledger(&self.ledger)?;
        Ok(())
    }

    pub fn save_budgets(&self) -> Result<(), CliError> {
        self.storage.save_budgets(&self.budgets)?;
        Ok(())
    }

    pub fn save_snapshots(&self) -> Result<(), CliError> {
        self.storage.save_snapshots(&self.snapshots)?;
        Ok(())
    }
}

fn load_config() -> Result<Config, CliError> {
    let manager = match std::env::var_os(CONFIG_DIR_ENV) {
        Some(dir) => ConfigManager::with_base_dir(PathBuf::from(dir))?,
        None => ConfigManager::default_location()?,
    };
    Ok(manager.load()?)
}

fn resolve_data_dir(config: &Config) -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    if let Some(dir) = &config.data_dir {
        return dir.clone();
    }
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("perdiem")
}
