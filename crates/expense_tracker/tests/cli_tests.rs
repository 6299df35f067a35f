mod common;

use std::fs;

use predicates::prelude::*;
use predicates::str::contains;

use common::{et, run_ok, setup_home};

#[test]
fn help_lists_registered_commands() {
    let home = setup_home();

    et(home.path())
        .arg("help")
        .assert()
        .success()
        .stdout(
            contains("Available commands")
                .and(contains("add"))
                .and(contains("budget"))
                .and(contains("export")),
        );
}

#[test]
fn help_for_single_command_shows_usage() {
    let home = setup_home();

    et(home.path())
        .args(["help", "update"])
        .assert()
        .success()
        .stdout(contains("update --id <n>"));
}

#[test]
fn missing_command_fails() {
    let home = setup_home();

    et(home.path())
        .assert()
        .failure()
        .stderr(contains("no command found"));
}

#[test]
fn unknown_command_suggests_closest_match() {
    let home = setup_home();

    et(home.path())
        .arg("sumary")
        .assert()
        .failure()
        .stderr(contains("Did you mean `summary`?"));
}

#[test]
fn add_persists_expenses_with_sequential_ids() {
    let home = setup_home();

    et(home.path())
        .args(["add", "--description", "Lunch", "--amount", "20", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("ID: 0"));
    et(home.path())
        .args(["add", "--description", "Bus", "--amount", "2.5"])
        .assert()
        .success()
        .stdout(contains("ID: 1"));

    let raw = fs::read_to_string(home.path().join("data").join("expenses.json"))
        .expect("expenses file");
    assert!(raw.contains("\"is_deleted\": false"));

    et(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Lunch").and(contains("20.00")).and(contains("Bus")));
}

#[test]
fn add_rejects_empty_and_negative_input() {
    let home = setup_home();

    et(home.path())
        .arg("add")
        .assert()
        .failure()
        .stderr(contains("no expense details were provided"));
    et(home.path())
        .args(["add", "--description", "Refund", "--amount", "-3"])
        .assert()
        .failure()
        .stderr(contains("amount must be zero or greater"));

    et(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("No expenses recorded."));
}

#[test]
fn delete_hides_expense_unless_with_deleted() {
    let home = setup_home();
    run_ok(home.path(), &["add", "--description", "Coffee", "--amount", "3"]);
    run_ok(home.path(), &["add", "--description", "Bagel", "--amount", "4"]);

    run_ok(home.path(), &["delete", "--id", "0"]);
    run_ok(home.path(), &["delete", "--id", "0"]);

    et(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Bagel").and(contains("Coffee").not()));
    et(home.path())
        .args(["list", "--with-deleted"])
        .assert()
        .success()
        .stdout(contains("Coffee").and(contains("(deleted)")));
}

#[test]
fn delete_requires_known_id() {
    let home = setup_home();
    run_ok(home.path(), &["add", "--description", "Coffee", "--amount", "3"]);

    et(home.path())
        .arg("delete")
        .assert()
        .failure()
        .stderr(contains("id not provided"));
    et(home.path())
        .args(["delete", "--id", "1"])
        .assert()
        .failure()
        .stderr(contains("Expense not found: 1"));
    et(home.path())
        .args(["delete", "--id", "-2"])
        .assert()
        .failure()
        .stderr(contains("Expense not found: -2"));
}

#[test]
fn update_keeps_fields_that_were_not_supplied() {
    let home = setup_home();
    run_ok(
        home.path(),
        &["add", "--description", "Groceries", "--amount", "40", "--category", "Food"],
    );

    run_ok(home.path(), &["update", "--id", "0", "--amount", "55"]);

    et(home.path())
        .arg("list")
        .assert()
        .success()
        .stdout(contains("Groceries").and(contains("55.00")).and(contains("Food")));
}

#[test]
fn summary_includes_category_budget() {
    let home = setup_home();
    run_ok(
        home.path(),
        &["add", "--description", "Lunch", "--amount", "10", "--category", "Food"],
    );
    run_ok(
        home.path(),
        &["add", "--description", "Dinner", "--amount", "5", "--category", "Food"],
    );
    run_ok(
        home.path(),
        &["add", "--description", "Fuel", "--amount", "7", "--category", "Gas"],
    );

    et(home.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("Total expenses: 22.00 $"));
    et(home.path())
        .args(["summary", "--category", "Food"])
        .assert()
        .success()
        .stdout(contains("Total expenses: 15.00 $").and(contains("No budget set for 'Food'")));
}

#[test]
fn budget_set_list_remove_roundtrip() {
    let home = setup_home();

    run_ok(
        home.path(),
        &["budget", "set", "--month", "3", "--category", "Food", "--limit", "100"],
    );
    run_ok(
        home.path(),
        &["budget", "set", "--month", "3", "--category", "Food", "--limit", "150"],
    );

    et(home.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("Food").and(contains("150.00")).and(contains("100.00").not()));

    run_ok(
        home.path(),
        &["budget", "remove", "--month", "3", "--category", "Food"],
    );
    et(home.path())
        .args(["budget", "list"])
        .assert()
        .success()
        .stdout(contains("No budgets set."));
    et(home.path())
        .args(["budget", "remove", "--month", "3", "--category", "Food"])
        .assert()
        .failure()
        .stderr(contains("Budget not found"));
}

#[test]
fn budget_set_reports_month_before_other_constraints() {
    let home = setup_home();

    et(home.path())
        .args(["budget", "set", "--month", "0", "--limit", "-5"])
        .assert()
        .failure()
        .stderr(contains("invalid month 0"));
    et(home.path())
        .args(["budget", "set", "--month", "2", "--limit", "5"])
        .assert()
        .failure()
        .stderr(contains("category not set"));
    et(home.path())
        .args(["budget"])
        .assert()
        .failure()
        .stderr(contains("command for budget is not provided"));
}

#[test]
fn export_writes_csv_into_export_dir() {
    let home = setup_home();
    run_ok(
        home.path(),
        &["add", "--description", "Lunch", "--amount", "12", "--category", "Food"],
    );

    et(home.path())
        .args(["export", "--output", "april.csv"])
        .assert()
        .success()
        .stdout(contains("successfully exported"));

    let csv = fs::read_to_string(home.path().join("csv").join("april.csv")).expect("csv file");
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("ID,Date,Description,Amount,Category,Month")
    );
    let row = lines.next().expect("data row");
    assert!(row.starts_with("0,"));
    assert!(row.contains(",Lunch,12.00,Food,"));

    et(home.path())
        .args(["export", "--output", "../escape.csv"])
        .assert()
        .failure()
        .stderr(contains("invalid export file name"));
}

#[test]
fn corrupted_store_is_reported_not_overwritten() {
    let home = setup_home();
    let data = home.path().join("data");
    fs::create_dir_all(&data).expect("mkdir");
    fs::write(data.join("expenses.json"), "[{\"amount\":").expect("seed garbage");

    et(home.path())
        .args(["add", "--description", "Lunch", "--amount", "12"])
        .assert()
        .failure()
        .stderr(contains("Decode error"));

    assert_eq!(
        fs::read_to_string(data.join("expenses.json")).expect("read"),
        "[{\"amount\":"
    );
}

#[test]
fn config_can_relocate_data_dir() {
    let home = setup_home();
    let config_dir = home.path().join("config");
    fs::create_dir_all(&config_dir).expect("mkdir");
    fs::write(
        config_dir.join("config.json"),
        r#"{"data_dir":"ledger","currency":"EUR"}"#,
    )
    .expect("write config");

    run_ok(home.path(), &["add", "--description", "Tram", "--amount", "3"]);

    assert!(home.path().join("ledger").join("expenses.json").exists());
    et(home.path())
        .arg("summary")
        .assert()
        .success()
        .stdout(contains("3.00 EUR"));
}
