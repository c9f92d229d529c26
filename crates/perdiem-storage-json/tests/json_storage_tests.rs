use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

use perdiem_core::StateStorage;
use perdiem_domain::{
    BudgetStore, Category, Expense, Ledger, MonthKey, MonthSnapshot, SnapshotStore,
};
use perdiem_storage_json::JsonStateStorage;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn stores_round_trip_through_disk() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStateStorage::new(dir.path().join("data")).expect("create storage");

    let mut ledger = Ledger::new();
    ledger.add_expense(
        date(2024, 6, 3),
        Expense::new(12.5, Category::Food, "lunch"),
    );
    let budgets = BudgetStore::new()
        .with_month_budget(MonthKey::new(2024, 6).unwrap(), 300.0)
        .with_default_budget(Some(250.0));
    let mut snapshots = SnapshotStore::new();
    snapshots.insert(
        MonthKey::new(2024, 5).unwrap(),
        MonthSnapshot::closed(310.0, 295.0, 31),
    );

    storage.save_ledger(&ledger).expect("save ledger");
    storage.save_budgets(&budgets).expect("save budgets");
    storage.save_snapshots(&snapshots).expect("save snapshots");

    assert_eq!(storage.load_ledger().expect("load ledger"), ledger);
    assert_eq!(storage.load_budgets().expect("load budgets"), budgets);
    assert_eq!(storage.load_snapshots().expect("load snapshots"), snapshots);
}

#[test]
fn missing_files_load_as_empty_defaults() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStateStorage::new(dir.path().join("data")).expect("create storage");

    assert!(storage.load_ledger().expect("load ledger").is_empty());
    assert_eq!(storage.load_budgets().expect("load budgets"), BudgetStore::new());
    assert!(storage
        .load_snapshots()
        .expect("load snapshots")
        .months
        .is_empty());
}

#[test]
fn corrupt_files_fall_back_to_empty_defaults() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStateStorage::new(dir.path().to_path_buf()).expect("create storage");

    fs::write(storage.ledger_path(), "{ not json").expect("write garbage");
    fs::write(storage.budgets_path(), "[]").expect("write wrong shape");

    assert!(storage.load_ledger().expect("load ledger").is_empty());
    assert_eq!(storage.load_budgets().expect("load budgets"), BudgetStore::new());
}

#[test]
fn month_keys_serialize_as_strings() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStateStorage::new(dir.path().to_path_buf()).expect("create storage");

    let budgets = BudgetStore::new().with_month_budget(MonthKey::new(2024, 6).unwrap(), 300.0);
    storage.save_budgets(&budgets).expect("save budgets");

    let raw = fs::read_to_string(storage.budgets_path()).expect("read raw file");
    assert!(raw.contains("\"2024-06\""));
}

#[test]
fn saves_replace_rather_than_merge() {
    let dir = tempdir().expect("tempdir");
    let storage = JsonStateStorage::new(dir.path().to_path_buf()).expect("create storage");

    let mut ledger = Ledger::new();
    let expense = Expense::new(5.0, Category::Transport, "bus");
    let id = expense.id;
    let day = date(2024, 6, 3);
    ledger.add_expense(day, expense);
    storage.save_ledger(&ledger).expect("save ledger");

    ledger.remove_expense(day, id);
    storage.save_ledger(&ledger).expect("save again");

    let loaded = storage.load_ledger().expect("load ledger");
    assert!(loaded.is_empty());
}
