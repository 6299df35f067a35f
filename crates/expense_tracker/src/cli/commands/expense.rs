use et_domain::UNSET_AMOUNT;
use tracing::warn;

use crate::cli::args::Invocation;
use crate::cli::context::CliContext;
use crate::cli::formatters::truncate;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Table, TableColumn, TableRenderer};
use crate::errors::{CliError, CommandResult};

const DESCRIPTION_WIDTH: usize = 20;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Adds expense to your tracker",
            "add --description <text> --amount <n> [--category <text>]",
            cmd_add,
        ),
        CommandEntry::new(
            "list",
            "Lists all of the expenses",
            "list [--month <1-12>] [--with-deleted]",
            cmd_list,
        ),
        CommandEntry::new(
            "delete",
            "Deletes expense with provided id",
            "delete --id <n>",
            cmd_delete,
        ),
        CommandEntry::new(
            "update",
            "Updates expense with provided id",
            "update --id <n> [--amount <n>] [--description <text>] [--category <text>]",
            cmd_update,
        ),
    ]
}

fn cmd_add(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let expense = context.expenses.create(
        invocation.amount.unwrap_or(UNSET_AMOUNT),
        invocation.description.clone().unwrap_or_default(),
        invocation.category.clone().unwrap_or_default(),
    )?;
    if let Err(err) = context.expenses.validate(&expense) {
        warn!(%err, "expense rejected");
        return Err(err.into());
    }
    let id = expense.id;
    context.expenses.add(expense)?;
    context.print_success(format!("Expense added successfully (ID: {id})"));
    Ok(())
}

fn cmd_list(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let expenses = context.expenses.get_all()?;
    let mut table = Table::new(
        None::<String>,
        vec![
            TableColumn::new("ID", 4),
            TableColumn::new("Date", 10),
            TableColumn::new("Description", DESCRIPTION_WIDTH),
            TableColumn::new("Amount", 10),
            TableColumn::new("Category", 12),
            TableColumn::new("", 9),
        ],
    );

    for expense in expenses
        .iter()
        .filter(|expense| invocation.with_deleted || !expense.is_deleted)
        .filter(|expense| invocation.month.map_or(true, |month| expense.month == month))
    {
        let marker = if expense.is_deleted {
            context.style.apply_muted_style("(deleted)")
        } else {
            String::new()
        };
        table.add_row(vec![
            expense.id.to_string(),
            context.formatters.format_date(expense.date),
            truncate(&expense.description, DESCRIPTION_WIDTH),
            context.formatters.format_number(expense.amount),
            expense.category.clone(),
            marker,
        ]);
    }

    if table.rows.is_empty() {
        println!("No expenses recorded.");
        return Ok(());
    }
    TableRenderer::render(&table, &context.style);
    Ok(())
}

fn cmd_delete(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let id = required_id(invocation)?;
    context.expenses.delete(id)?;
    context.print_success(format!("Expense {id} deleted."));
    Ok(())
}

/// Fields that were not supplied keep their stored value.
fn cmd_update(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let id = required_id(invocation)?;
    let current = context.expenses.get_by_id(id)?;

    let amount = invocation
        .amount
        .filter(|amount| *amount != UNSET_AMOUNT)
        .unwrap_or(current.amount);
    let description = invocation
        .description
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or(current.description);
    let category = invocation
        .category
        .clone()
        .filter(|text| !text.is_empty())
        .unwrap_or(current.category);

    context.expenses.update(id, amount, description, category)?;
    context.print_success(format!("Expense {id} updated."));
    Ok(())
}

fn required_id(invocation: &Invocation) -> Result<i64, CliError> {
    invocation
        .id
        .ok_or_else(|| CliError::input("id not provided"))
}
