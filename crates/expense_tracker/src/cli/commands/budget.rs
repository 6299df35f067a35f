use crate::cli::args::Invocation;
use crate::cli::context::CliContext;
use crate::cli::formatters::truncate;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{Table, TableColumn, TableRenderer};
use crate::errors::{CliError, CommandResult};

const CATEGORY_WIDTH: usize = 20;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "budget",
        "Sets, lists or removes monthly category budgets",
        "budget <set|list|remove> [--month <1-12>] [--category <text>] [--limit <n>]",
        cmd_budget,
    )]
}

fn cmd_budget(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    match invocation.action() {
        Some("set") => set_budget(context, invocation),
        Some("list") => list_budgets(context),
        Some("remove") => remove_budget(context, invocation),
        Some(other) => Err(CliError::input(format!(
            "unknown budget command `{other}`; expected set, list or remove"
        ))),
        None => Err(CliError::input("command for budget is not provided")),
    }
}

fn set_budget(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let month = invocation
        .month
        .ok_or_else(|| CliError::input("month not provided"))?;
    let limit = invocation
        .limit
        .ok_or_else(|| CliError::input("limit not provided"))?;
    let category = invocation.category.as_deref().unwrap_or_default();

    context.budgets.set(month, category, limit)?;
    context.print_success(format!(
        "Budget for '{category}' set to {}.",
        context.formatters.format_amount(limit)
    ));
    Ok(())
}

fn list_budgets(context: &mut CliContext) -> CommandResult {
    let budgets = context.budgets.get_all()?;
    if budgets.is_empty() {
        println!("No budgets set.");
        return Ok(());
    }

    let mut table = Table::new(
        None::<String>,
        vec![
            TableColumn::new("Month", 6),
            TableColumn::new("Year", 5),
            TableColumn::new("Category", CATEGORY_WIDTH),
            TableColumn::new("Limit", 10),
        ],
    );
    for budget in &budgets {
        table.add_row(vec![
            budget.month.to_string(),
            budget.year.to_string(),
            truncate(&budget.category, CATEGORY_WIDTH),
            context.formatters.format_number(budget.limit),
        ]);
    }
    TableRenderer::render(&table, &context.style);
    Ok(())
}

fn remove_budget(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let month = invocation
        .month
        .ok_or_else(|| CliError::input("month not provided"))?;
    let category = invocation
        .category
        .as_deref()
        .ok_or_else(|| CliError::input("category not provided"))?;

    context.budgets.remove(month, category)?;
    context.print_success(format!("Budget for '{category}' removed."));
    Ok(())
}
