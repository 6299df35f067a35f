//! CSV rendering of the expense collection.

use std::{fs, io::Write, path::Path};

use et_domain::Expense;

use crate::errors::CliError;

pub const DEFAULT_EXPORT_FILE: &str = "expenses.csv";
const HEADER: [&str; 6] = ["ID", "Date", "Description", "Amount", "Category", "Month"];

/// Writes every expense, soft-deleted ones included, as CSV rows.
pub fn write_expenses_csv<W: Write>(writer: W, expenses: &[Expense]) -> Result<(), CliError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(HEADER)?;
    for expense in expenses {
        csv.write_record([
            expense.id.to_string(),
            expense.date.to_string(),
            expense.description.clone(),
            format!("{:.2}", expense.amount),
            expense.category.clone(),
            expense.month.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Replaces `path` with a fresh export, creating its directory when needed.
pub fn export_to_file(path: &Path, expenses: &[Expense]) -> Result<(), CliError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_expenses_csv(file, expenses)
}
