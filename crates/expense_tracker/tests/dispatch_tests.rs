use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use et_config::Config;
use et_core::Clock;
use expense_tracker::cli::{
    args::Invocation, commands::build_registry, context::CliContext, dispatch,
};
use expense_tracker::errors::CliError;
use tempfile::TempDir;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

fn context_at(home: &TempDir, year: i32, month: u32) -> CliContext {
    let clock = FixedClock(Utc.with_ymd_and_hms(year, month, 15, 9, 0, 0).unwrap());
    CliContext::new(
        home.path(),
        &Config::default(),
        build_registry(),
        Arc::new(clock),
    )
}

fn run(context: &mut CliContext, args: &[&str]) -> Result<(), CliError> {
    let invocation = Invocation::parse(args)?;
    dispatch(context, &invocation)
}

#[test]
fn add_stamps_expenses_with_clock_month() {
    let home = TempDir::new().expect("tempdir");
    let mut context = context_at(&home, 2024, 11);

    run(
        &mut context,
        &["add", "--description", "Boots", "--amount", "80", "--category", "Clothes"],
    )
    .expect("add");

    let stored = context.expenses.get_by_id(0).expect("stored expense");
    assert_eq!(stored.month, 11);
    assert_eq!(stored.description, "Boots");
}

#[test]
fn budgets_from_different_years_resolve_to_first_inserted() {
    let home = TempDir::new().expect("tempdir");

    let mut last_year = context_at(&home, 2024, 5);
    run(
        &mut last_year,
        &["budget", "set", "--month", "5", "--category", "Food", "--limit", "200"],
    )
    .expect("set last year");

    let mut this_year = context_at(&home, 2025, 5);
    run(
        &mut this_year,
        &["budget", "set", "--month", "5", "--category", "Food", "--limit", "350"],
    )
    .expect("set this year");

    let budgets = this_year.budgets.get_all().expect("budgets");
    assert_eq!(budgets.len(), 2);
    assert_eq!(budgets[0].year, 2024);
    assert_eq!(budgets[1].year, 2025);
    assert_eq!(this_year.budgets.get_limit(5, "Food").expect("limit"), 200.0);
}

#[test]
fn update_merges_unset_fields_from_stored_record() {
    let home = TempDir::new().expect("tempdir");
    let mut context = context_at(&home, 2025, 1);
    run(
        &mut context,
        &["add", "--description", "Rent", "--amount", "900", "--category", "Home"],
    )
    .expect("add");

    run(
        &mut context,
        &["update", "--id", "0", "--description", "", "--category", "Housing"],
    )
    .expect("update");

    let stored = context.expenses.get_by_id(0).expect("stored");
    assert_eq!(stored.amount, 900.0);
    assert_eq!(stored.description, "Rent");
    assert_eq!(stored.category, "Housing");
}

#[test]
fn unknown_commands_are_not_dispatched() {
    let home = TempDir::new().expect("tempdir");
    let mut context = context_at(&home, 2025, 1);

    let err = run(&mut context, &["purge"]).unwrap_err();

    assert!(matches!(err, CliError::UnknownCommand { ref name, .. } if name == "purge"));
}
