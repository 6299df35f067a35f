use et_core::{CoreError, ExpenseFilter};

use crate::cli::args::Invocation;
use crate::cli::context::CliContext;
use crate::cli::export::{export_to_file, DEFAULT_EXPORT_FILE};
use crate::cli::formatters::month_name;
use crate::cli::registry::CommandEntry;
use crate::errors::{CliError, CommandResult};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "summary",
            "Summarizes all expenses, optionally within a month or category",
            "summary [--month <1-12>] [--category <text>]",
            cmd_summary,
        ),
        CommandEntry::new(
            "export",
            "Exports expenses into a .csv file",
            "export [--output <file name>]",
            cmd_export,
        ),
    ]
}

/// Totals include soft-deleted expenses, matching `sum_by_category`.
fn cmd_summary(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let filter = ExpenseFilter {
        month: invocation.month,
        category: invocation.category.clone().filter(|c| !c.is_empty()),
    };
    let total = context.expenses.total(&filter)?;

    let scope = match filter.month {
        Some(month) => format!("Total expenses in {}", month_name(month)),
        None => "Total expenses".to_string(),
    };
    println!("{scope}: {}", context.formatters.format_amount(total));
    println!();

    let month = filter
        .month
        .unwrap_or_else(|| context.clock.current_month());
    match filter.category.as_deref() {
        Some(category) => print_category_budget(context, month, category, total),
        None if filter.month.is_none() => print_month_budgets(context, month),
        None => Ok(()),
    }
}

fn print_category_budget(
    context: &CliContext,
    month: u32,
    category: &str,
    spent: f64,
) -> CommandResult {
    match context.budgets.get_limit(month, category) {
        Ok(limit) => {
            println!(
                "Budget for '{category}' in {}: {}",
                month_name(month),
                context.formatters.format_amount(limit)
            );
            println!(
                "Current budget stat: {}",
                context.formatters.format_amount(limit - spent)
            );
            Ok(())
        }
        Err(CoreError::BudgetNotFound { .. }) => {
            println!("No budget set for '{category}' in {}.", month_name(month));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn print_month_budgets(context: &CliContext, month: u32) -> CommandResult {
    for budget in context.budgets.get_limits_for_month(month)? {
        let spent = context.expenses.sum_by_category(&budget.category)?;
        println!(
            "  Budget for '{}' in {}: {}",
            budget.category,
            month_name(month),
            context.formatters.format_amount(budget.limit)
        );
        println!(
            "  Current budgeting: {}",
            context.formatters.format_amount(budget.limit - spent)
        );
        println!();
    }
    Ok(())
}

fn cmd_export(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let file_name = invocation.output.as_deref().unwrap_or(DEFAULT_EXPORT_FILE);
    if file_name.is_empty() || file_name.contains(|c: char| c == '/' || c == '\\') {
        return Err(CliError::input(format!(
            "invalid export file name `{file_name}`"
        )));
    }
    let expenses = context.expenses.get_all()?;
    let path = context.export_dir().join(file_name);
    export_to_file(&path, &expenses)?;
    context.print_success(format!(
        "Data has been successfully exported at '{}'",
        path.display()
    ));
    Ok(())
}
