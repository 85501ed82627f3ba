use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn budget(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("budget").unwrap();
    cmd.env("BUDGET_MANAGER_DATA_DIR", dir.path())
        .env_remove("BUDGET_MANAGER_FILE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn report_on_fresh_ledger() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget Summary Report (USD)"))
        .stdout(predicate::str::contains("No income records found."));
}

#[test]
fn add_entries_and_report_totals() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "add", "1000", "Salary", "--date", "2024-01-05"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-05 - Salary: 1000.00 USD"));
    budget(&dir)
        .args(["expense", "add", "200", "Rent", "--date", "2024-01-06"])
        .assert()
        .success();
    budget(&dir)
        .args(["savings", "add", "Emergency", "100"])
        .assert()
        .success();

    budget(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Income: 1000.00 USD"))
        .stdout(predicate::str::contains("700.00 USD"));

    let saved = fs::read_to_string(dir.path().join("budget_data.json")).unwrap();
    assert!(saved.contains("\"category\": \"Rent\""));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "add", "abc", "Rent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount"));

    assert!(!dir.path().join("budget_data.json").exists());
}

#[test]
fn expense_over_limit_warns() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["limit", "set", "100"]).assert().success();
    budget(&dir)
        .args(["expense", "add", "150", "Rent", "--date", "2024-01-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("exceeded your budget limit"));

    budget(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"));
}

#[test]
fn edit_and_delete_by_position() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["income", "add", "1000", "Salary", "--date", "2024-01-05"])
        .assert()
        .success();

    budget(&dir)
        .args(["income", "edit", "1", "--amount", "1200", "--date", "bad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped date"))
        .stdout(predicate::str::contains("Salary: 1200.00 USD"));

    budget(&dir)
        .args(["income", "edit", "2", "--amount", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid selection 2"));

    budget(&dir)
        .args(["income", "delete", "one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("expected a number"));

    budget(&dir)
        .args(["income", "delete", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted: 2024-01-05 - Salary"));
}

#[test]
fn currency_changes_report() {
    let dir = TempDir::new().unwrap();

    budget(&dir).args(["currency", "eur"]).assert().success();
    budget(&dir)
        .args(["savings", "add", "Trip", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip - 50.00 EUR"));
}

#[test]
fn backup_and_restore() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("No data found to back up."));
    budget(&dir)
        .arg("restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("No backup found."));

    budget(&dir)
        .args(["savings", "add", "Emergency", "100"])
        .assert()
        .success();
    budget(&dir)
        .arg("backup")
        .assert()
        .success()
        .stdout(predicate::str::contains("Backup created"));
    assert!(dir.path().join("budget_data.json.bak").exists());

    budget(&dir)
        .arg("restore")
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 0 income, 0 expense and 1 savings entries."));
}

#[test]
fn clear_requires_yes() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["savings", "add", "Emergency", "100"])
        .assert()
        .success();

    budget(&dir)
        .arg("clear")
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clear cancelled."));
    budget(&dir)
        .args(["savings", "list"])
        .assert()
        .stdout(predicate::str::contains("Emergency"));

    budget(&dir)
        .arg("clear")
        .write_stdin("yes\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("All data cleared."));
    budget(&dir)
        .args(["savings", "list"])
        .assert()
        .stdout(predicate::str::contains("No savings records found."));

    budget(&dir).arg("restore").assert().success();
    budget(&dir)
        .args(["savings", "list"])
        .assert()
        .stdout(predicate::str::contains("Emergency"));
}

#[test]
fn corrupt_ledger_starts_fresh() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("budget_data.json"), "{ not json").unwrap();

    budget(&dir)
        .arg("report")
        .assert()
        .success()
        .stderr(predicate::str::contains("Starting with an empty budget."))
        .stderr(predicate::str::contains("The next change will replace"))
        .stdout(predicate::str::contains("Budget Summary Report (USD)"));

    // Reading alone leaves the damaged file untouched
    let text = fs::read_to_string(dir.path().join("budget_data.json")).unwrap();
    assert_eq!(text, "{ not json");
}

#[test]
fn history_shows_changes() {
    let dir = TempDir::new().unwrap();
    budget(&dir)
        .args(["expense", "add", "20", "Food", "--date", "2024-03-01"])
        .assert()
        .success();

    budget(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("added    expenses #1: Food"));

    budget(&dir).args(["currency", "gbp"]).assert().success();
    budget(&dir)
        .args(["history", "-n", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set      currency"))
        .stdout(predicate::str::contains("USD -> GBP"))
        .stdout(predicate::str::contains("Food").not());
}

#[test]
fn oversized_amounts_are_rejected_without_panicking() {
    let dir = TempDir::new().unwrap();

    budget(&dir)
        .args(["expense", "add", "90000000000000000", "Yacht", "--date", "2024-01-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount out of range"));

    for _ in 0..2 {
        budget(&dir)
            .args(["expense", "add", "9999999999999.99", "Yacht", "--date", "2024-01-01"])
            .assert()
            .success();
    }
    budget(&dir)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total Expenses"))
        .stdout(predicate::str::contains("19999999999999.98 USD"));
}

#[test]
fn invalid_date_format_setting_falls_back() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    budget(&dir)
        .args(["expense", "add", "20", "Food", "--date", "2024-03-01"])
        .assert()
        .success();
    budget(&dir)
        .args(["expense", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01"));
    budget(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("%Y-%m-%d"));
}

#[test]
fn file_flag_overrides_location() {
    let dir = TempDir::new().unwrap();
    let ledger = dir.path().join("other").join("mine.json");

    budget(&dir)
        .arg("--file")
        .arg(&ledger)
        .args(["income", "add", "10", "Gift", "--date", "2024-01-01"])
        .assert()
        .success();

    assert!(ledger.exists());
    assert!(!dir.path().join("budget_data.json").exists());
}

#[test]
fn csv_export() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("report.csv");

    budget(&dir)
        .args(["income", "add", "1000", "Salary", "--date", "2024-01-05"])
        .assert()
        .success();
    budget(&dir)
        .arg("report")
        .arg("--csv")
        .arg(&out)
        .assert()
        .success();

    let text = fs::read_to_string(out).unwrap();
    assert!(text.contains("income,2024-01-05,Salary,1000.00,USD"));
}
