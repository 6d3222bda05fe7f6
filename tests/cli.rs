//! End-to-end tests for the `storycash` binary

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn storycash(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("storycash").unwrap();
    cmd.env("STORYCASH_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn ledger_json(data_dir: &TempDir) -> serde_json::Value {
    let contents =
        std::fs::read_to_string(data_dir.path().join("data").join("app_data.json")).unwrap();
    serde_json::from_str(&contents).unwrap()
}

#[test]
fn first_run_creates_default_ledger() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Transactions: 0"))
        .stdout(predicate::str::contains("Categories:   18"));

    let ledger = ledger_json(&data_dir);
    assert_eq!(ledger["categories"].as_array().unwrap().len(), 18);
    assert_eq!(ledger["categories"][0]["title"], "Food");
    assert_eq!(ledger["categories"][0]["type"], "expense");
}

#[test]
fn add_list_and_stats() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["add", "42.50", "--category", "Food", "--date", "2025-01-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$42.50"));

    storycash(&data_dir)
        .args(["add", "1000", "--income", "--date", "2025-01-11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"));

    storycash(&data_dir)
        .args(["list", "--limit", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Showing 2 of 2 transactions"));

    storycash(&data_dir)
        .args(["list", "--type", "income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Showing 1 of 1 transactions"));

    storycash(&data_dir)
        .args(["stats", "--from", "2025-01-01", "--to", "2025-01-31"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$957.50"));

    let ledger = ledger_json(&data_dir);
    let txns = ledger["transactions"].as_array().unwrap();
    assert_eq!(txns.len(), 2);
    assert_eq!(txns[0]["value"], 42.5);
    assert_eq!(txns[0]["category"]["title"], "Food");
}

#[test]
fn delete_unknown_transaction_fails() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["delete", "txn-00000000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Transaction not found"));
}

#[test]
fn negative_amount_is_rejected() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["add", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));
}

#[test]
fn huge_expense_formats_balance() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["add", "1e17", "--date", "2025-01-10"])
        .assert()
        .success();

    storycash(&data_dir)
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("-$100,000,000,000,000,000.00"));
}

#[test]
fn reset_requires_confirmation() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["add", "5", "--date", "2025-01-10"])
        .assert()
        .success();

    storycash(&data_dir).arg("reset").assert().failure();
    assert_eq!(ledger_json(&data_dir)["transactions"].as_array().unwrap().len(), 1);

    storycash(&data_dir)
        .args(["reset", "--yes"])
        .assert()
        .success();
    assert!(ledger_json(&data_dir)["transactions"].as_array().unwrap().is_empty());
}

#[test]
fn export_writes_csv() {
    let data_dir = TempDir::new().unwrap();
    let out_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["add", "12.5", "--category", "Transport", "--date", "2025-03-02"])
        .assert()
        .success();

    storycash(&data_dir)
        .args(["export", "--output"])
        .arg(out_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let entries: Vec<_> = std::fs::read_dir(out_dir.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);

    let contents = std::fs::read_to_string(&entries[0]).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next().unwrap(),
        "id,date,type,value,category_title,category_image,category_color"
    );
    assert!(lines
        .next()
        .unwrap()
        .ends_with(",2025-03-02 00:00:00,expense,12.5,Transport,car.fill,#0A84FF"));
}

#[test]
fn category_add_and_list() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["category", "add", "Pets", "--color", "#AABBCC"])
        .assert()
        .success();

    storycash(&data_dir)
        .args(["category", "list", "--type", "expense"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Pets"))
        .stdout(predicate::str::contains("Salary").not());
}

#[test]
fn tips_fall_back_to_bundled() {
    let data_dir = TempDir::new().unwrap();

    storycash(&data_dir)
        .args(["tips", "--refresh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. "))
        .stdout(predicate::str::contains("(source: bundled)"));

    assert!(data_dir.path().join("data").join("tips_cache.json").exists());

    storycash(&data_dir)
        .arg("tips")
        .assert()
        .success()
        .stdout(predicate::str::contains("(source: cache)"));
}
