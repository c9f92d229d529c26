//! Filesystem-backed JSON persistence for the budgeting stores.
//!
//! One pretty-printed file per store under a single data directory. Writes
//! go through a tmp file and rename so a crash mid-write never corrupts the
//! previous state. Missing or unreadable files load as the empty default.

use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use perdiem_core::{CoreError, StateStorage};
use perdiem_domain::{BudgetStore, Ledger, SnapshotStore};

const LEDGER_FILE: &str = "ledger.json";
const BUDGETS_FILE: &str = "budgets.json";
const SNAPSHOTS_FILE: &str = "snapshots.json";
const TMP_SUFFIX: &str = "tmp";

/// Filesystem-backed JSON persistence for ledger, budgets, and snapshots.
#[derive(Debug, Clone)]
pub struct JsonStateStorage {
    data_dir: PathBuf,
}

impl JsonStateStorage {
    pub fn new(data_dir: PathBuf) -> Result<Self, CoreError> {
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.data_dir.join(LEDGER_FILE)
    }

    pub fn budgets_path(&self) -> PathBuf {
        self.data_dir.join(BUDGETS_FILE)
    }

    pub fn snapshots_path(&self) -> PathBuf {
        self.data_dir.join(SNAPSHOTS_FILE)
    }

    fn load_or_default<T: DeserializeOwned + Default>(&self, path: &Path) -> Result<T, CoreError> {
        if !path.exists() {
            return Ok(T::default());
        }
        let data = fs::read_to_string(path)?;
        match serde_json::from_str(&data) {
            Ok(value) => Ok(value),
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable store, falling back to empty default");
                Ok(T::default())
            }
        }
    }

    fn save<T: Serialize>(&self, path: &Path, value: &T) -> Result<(), CoreError> {
        let json = serde_json::to_string_pretty(value)
            .map_err(|err| CoreError::Serde(err.to_string()))?;
        let tmp = tmp_path(path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

impl StateStorage for JsonStateStorage {
    fn load_ledger(&self) -> Result<Ledger, CoreError> {
        self.load_or_default(&self.ledger_path())
    }

    fn save_ledger(&self, ledger: &Ledger) -> Result<(), CoreError> {
        self.save(&self.ledger_path(), ledger)
    }

    fn load_budgets(&self) -> Result<BudgetStore, CoreError> {
        self.load_or_default(&self.budgets_path())
    }

    fn save_budgets(&self, budgets: &BudgetStore) -> Result<(), CoreError> {
        self.save(&self.budgets_path(), budgets)
    }

    fn load_snapshots(&self) -> Result<SnapshotStore, CoreError> {
        self.load_or_default(&self.snapshots_path())
    }

    fn save_snapshots(&self, snapshots: &SnapshotStore) -> Result<(), CoreError> {
        self.save(&self.snapshots_path(), snapshots)
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
