use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Decode error: {0}")]
    Decode(String),
    #[error("Encode error: {0}")]
    Encode(String),
    #[error("Expense not found: {0}")]
    ExpenseNotFound(i64),
    #[error("Budget not found for month {month} and category `{category}`")]
    BudgetNotFound { month: u32, category: String },
    #[error("Validation failed: {0}")]
    Validation(String),
}

