//! End-to-end smoke tests for the spendlog binary
//!
//! Each test runs against its own data directory via SPENDLOG_DATA_DIR.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn spendlog(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("spendlog").unwrap();
    cmd.env("SPENDLOG_DATA_DIR", data_dir.path());
    cmd
}

#[test]
fn first_run_seeds_samples() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args(["list", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Big Shopping"))
        .stdout(predicate::str::contains("Trip Ticket"))
        .stdout(predicate::str::contains("Rent Share"))
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("Total Spent (Filtered)"));
}

#[test]
fn add_and_list() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args([
            "add",
            "Groceries",
            "75.25",
            "--date",
            "2025-08-03",
            "--category",
            "food",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added:"))
        .stdout(predicate::str::contains("Groceries"));

    spendlog(&data_dir)
        .args(["list", "--month", "2025-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Groceries"))
        .stdout(predicate::str::contains("75.25"));
}

#[test]
fn add_rejects_invalid_amount() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args(["add", "Broken", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amount must be greater than zero"));

    spendlog(&data_dir)
        .args(["add", "Broken", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid amount"));
}

#[test]
fn custom_category_requires_label() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args(["add", "Latte", "4.50", "--category", "custom"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--label"));

    spendlog(&data_dir)
        .args([
            "add", "Latte", "4.50", "--date", "2025-08-03", "--category", "custom", "--label",
            "Coffee",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Coffee"));
}

#[test]
fn remove_by_id_prefix() {
    let data_dir = TempDir::new().unwrap();

    let output = spendlog(&data_dir)
        .args(["add", "Doomed", "10", "--date", "2025-08-03"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let id = stdout
        .lines()
        .find_map(|line| line.strip_prefix("Expense:  "))
        .expect("add output should contain the expense id")
        .trim()
        .to_string();

    spendlog(&data_dir)
        .args(["remove", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 expense(s)."));

    spendlog(&data_dir)
        .args(["list", "--month", "2025-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Doomed").not());
}

#[test]
fn limit_set_persists_and_warns() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args(["limit", "set", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly limit set to"));

    spendlog(&data_dir)
        .args(["limit", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("100.00"));

    spendlog(&data_dir)
        .args(["add", "Splurge", "600", "--date", "2025-08-10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeds your limit"));
}

#[test]
fn report_shows_breakdown() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .args(["add", "Dinner", "40", "--date", "2025-08-05", "--category", "food"])
        .assert()
        .success();

    spendlog(&data_dir)
        .args(["report", "--month", "2025-08"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monthly Expense Breakdown  2025-08"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("Limit:"));
}

#[test]
fn config_shows_paths() {
    let data_dir = TempDir::new().unwrap();

    spendlog(&data_dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("expenses.json"))
        .stdout(predicate::str::contains("config.json"))
        .stdout(predicate::str::contains("Monthly limit:"));
}
