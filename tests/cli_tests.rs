use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use tempfile::TempDir;

const BIN_NAME: &str = "finsmart";

fn finsmart(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin(BIN_NAME).expect("binary exists");
    cmd.env("FINSMART_DATA_DIR", dir);
    cmd.env_remove("FINSMART_LOG");
    cmd
}

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("transaction").and(contains("goal")).and(contains("report")));
}

#[test]
fn init_writes_config_and_seeds_data() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(contains("6 transactions and 3 goals"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data/finsmartai_transactions.json").exists());
    assert!(dir.path().join("data/finsmartai_goals.json").exists());

    finsmart(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(contains("Monthly income:  $4200.00").and(contains("Groceries")));
}

#[test]
fn dashboard_shows_sample_data() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .assert()
        .success()
        .stdout(
            contains("FinSmart Dashboard")
                .and(contains("Total Balance: $8347.52"))
                .and(contains("Grocery Store Purchase"))
                .and(contains("64.0% complete")),
        );
}

#[test]
fn add_transaction_is_classified_and_listed_first() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["transaction", "add", "Uber to airport", "42.10", "--date", "2024-01-20"])
        .assert()
        .success()
        .stdout(contains("Category: Transportation"));

    finsmart(dir.path())
        .args(["transaction", "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("Uber to airport").and(contains("Grocery Store Purchase").not()));
}

#[test]
fn add_transaction_rejects_bad_amount() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["transaction", "add", "Coffee", "lots", "--date", "2024-01-20"])
        .assert()
        .failure()
        .stderr(contains("Invalid input"));

    finsmart(dir.path())
        .args(["txn", "add", "Coffee", "-5", "--date", "2024-01-20"])
        .assert()
        .failure()
        .stderr(contains("cannot be negative"));

    finsmart(dir.path())
        .args(["transaction", "add", "Coffee", "5", "--date", "20/01/2024"])
        .assert()
        .failure()
        .stderr(contains("YYYY-MM-DD"));
}

#[test]
fn over_budget_transaction_raises_alert() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["transaction", "add", "Supermarket haul", "650", "--date", "2024-01-20"])
        .assert()
        .success()
        .stdout(contains("Groceries budget exceeded by $137.32!"));

    finsmart(dir.path())
        .args(["report", "alerts", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains(
            "Groceries budget exceeded by $137.32! Spent $737.32 of $600.00 budget.",
        ));
}

#[test]
fn goals_add_and_list() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["goal", "add", "New Car", "20000", "--current", "5000"])
        .assert()
        .success()
        .stdout(contains("Created goal: New Car"));

    finsmart(dir.path())
        .args(["goal", "list"])
        .assert()
        .success()
        .stdout(contains("Emergency Fund").and(contains("25.0% complete")));
}

#[test]
fn goal_with_zero_target_is_rejected() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["goal", "add", "Nothing", "0"])
        .assert()
        .failure()
        .stderr(contains("target amount must be positive"));
}

#[test]
fn reports_for_sample_month() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["report", "categories", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("Jan 2024").and(contains("Utilities")));

    // Nov and Dec are empty, so the average is 349.07 / 3
    finsmart(dir.path())
        .args(["report", "trend", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("$349.07").and(contains("$122.00")).and(contains("(projected)")));

    finsmart(dir.path())
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(contains("$349.07").and(contains("$3850.93")));
}

#[test]
fn bad_month_is_rejected() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["report", "alerts", "--month", "January"])
        .assert()
        .failure()
        .stderr(contains("Invalid month"));
}

#[test]
fn classify_prints_category() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["transaction", "classify", "NETFLIX monthly"])
        .assert()
        .success()
        .stdout(contains("Entertainment"));
}

#[test]
fn corrupt_data_falls_back_to_samples_without_overwriting() {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("data");
    fs::create_dir_all(&data).unwrap();
    let file = data.join("finsmartai_transactions.json");
    fs::write(&file, "not json").unwrap();

    finsmart(dir.path())
        .args(["transaction", "list"])
        .assert()
        .success()
        .stdout(contains("Amazon Purchase"));

    assert_eq!(fs::read_to_string(&file).unwrap(), "not json");
}

#[test]
fn configured_currency_symbol_is_used_everywhere() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("config.json"), r#"{"currency_symbol": "€"}"#).unwrap();

    finsmart(dir.path())
        .args(["transaction", "add", "Supermarket haul", "650", "--date", "2024-01-20"])
        .assert()
        .success()
        .stdout(contains("Amount:   €650.00").and(contains("exceeded by €137.32!")));

    finsmart(dir.path())
        .args(["report", "alerts", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("Spent €737.32 of €600.00 budget.").and(contains("$").not()));

    finsmart(dir.path())
        .args(["dashboard", "--month", "2024-01"])
        .assert()
        .success()
        .stdout(contains("Total Balance: €8347.52").and(contains("$").not()));

    finsmart(dir.path())
        .args(["report", "summary"])
        .assert()
        .success()
        .stdout(contains("€4200.00").and(contains("$").not()));
}

#[test]
fn oversized_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    finsmart(dir.path())
        .args(["transaction", "add", "grocery a", "90000000000000000", "--date", "2024-01-05"])
        .assert()
        .failure()
        .stderr(contains("too large"));

    finsmart(dir.path())
        .args(["report", "alerts", "--month", "2024-01"])
        .assert()
        .success();
}
