//! Input checks that gate the write paths of the services.

use et_domain::{Expense, UNSET_AMOUNT};

use crate::CoreError;

/// True when no field was supplied at all: sentinel amount and both texts empty.
pub fn is_expense_empty(expense: &Expense) -> bool {
    expense.description.is_empty() && expense.amount == UNSET_AMOUNT && expense.category.is_empty()
}

pub fn is_expense_amount_valid(expense: &Expense) -> bool {
    expense.amount >= 0.0
}

/// Both checks are applied independently; an expense must pass each of them.
pub fn is_expense_valid(expense: &Expense) -> bool {
    is_expense_amount_valid(expense) && !is_expense_empty(expense)
}

/// Same decision as [`is_expense_valid`], reporting the first failed rule.
pub fn validate_expense(expense: &Expense) -> Result<(), CoreError> {
    if is_expense_empty(expense) {
        return Err(CoreError::Validation(
            "no expense details were provided".into(),
        ));
    }
    if !is_expense_amount_valid(expense) {
        return Err(CoreError::Validation(
            "amount must be zero or greater".into(),
        ));
    }
    Ok(())
}

/// Checks budget input in a fixed order: month, then category, then limit.
pub fn validate_budget_params(month: u32, category: &str, limit: f64) -> Result<(), CoreError> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::Validation(format!(
            "invalid month {month}: expected a value between 1 and 12"
        )));
    }
    if category.is_empty() {
        return Err(CoreError::Validation("category not set".into()));
    }
    if !(limit >= 0.0) {
        return Err(CoreError::Validation(
            "limit cannot be less than zero".into(),
        ));
    }
    Ok(())
}
