//! Expense bookkeeping over a whole-collection repository.

use std::sync::Arc;

use et_domain::Expense;
use tracing::{debug, info};

use crate::{validation, Clock, CoreError, RecordRepository};

/// Optional month/category restriction used for totals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFilter {
    pub month: Option<u32>,
    pub category: Option<String>,
}

impl ExpenseFilter {
    pub fn month(mut self, month: u32) -> Self {
        self.month = Some(month);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn accepts(&self, expense: &Expense) -> bool {
        self.month.map_or(true, |month| expense.month == month)
            && self
                .category
                .as_deref()
                .map_or(true, |category| expense.in_category(category))
    }
}

/// Creates, edits, soft-deletes and aggregates expenses.
///
/// Every call reloads the full collection; mutations write it back whole.
pub struct ExpenseService<R> {
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<R> ExpenseService<R>
where
    R: RecordRepository<Expense>,
{
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Builds the next expense without persisting it. The id is the current
    /// collection length, so it must be added before another one is created.
    pub fn create(
        &self,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Expense, CoreError> {
        let expenses = self.repository.load_all()?;
        Ok(Expense::new(
            expenses.len(),
            amount,
            description,
            category,
            self.clock.now(),
        ))
    }

    pub fn is_valid(&self, expense: &Expense) -> bool {
        validation::is_expense_valid(expense)
    }

    pub fn validate(&self, expense: &Expense) -> Result<(), CoreError> {
        validation::validate_expense(expense)
    }

    pub fn add(&self, expense: Expense) -> Result<(), CoreError> {
        let mut expenses = self.repository.load_all()?;
        let id = expense.id;
        expenses.push(expense);
        self.repository.save_all(&expenses)?;
        info!(id, total = expenses.len(), "expense added");
        Ok(())
    }

    /// Returns every expense in insertion order, soft-deleted ones included.
    pub fn get_all(&self) -> Result<Vec<Expense>, CoreError> {
        let expenses = self.repository.load_all()?;
        debug!(count = expenses.len(), "expenses loaded");
        Ok(expenses)
    }

    /// Returns the expense stored at `id`, which may be soft-deleted.
    pub fn get_by_id(&self, id: i64) -> Result<Expense, CoreError> {
        let mut expenses = self.repository.load_all()?;
        let index = checked_index(id, expenses.len())?;
        Ok(expenses.swap_remove(index))
    }

    /// Flags the expense as deleted. Repeating the call rewrites the same content.
    pub fn delete(&self, id: i64) -> Result<(), CoreError> {
        let mut expenses = self.repository.load_all()?;
        let index = checked_index(id, expenses.len())?;
        expenses[index].mark_deleted();
        self.repository.save_all(&expenses)?;
        info!(id, "expense deleted");
        Ok(())
    }

    /// Unconditionally overwrites amount, description and category. Callers
    /// merge "keep existing value" semantics before calling.
    pub fn update(
        &self,
        id: i64,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<(), CoreError> {
        let mut expenses = self.repository.load_all()?;
        let index = checked_index(id, expenses.len())?;
        expenses[index].overwrite(amount, description.into(), category.into());
        self.repository.save_all(&expenses)?;
        info!(id, "expense updated");
        Ok(())
    }

    /// Sums every expense in `category`, soft-deleted ones included.
    pub fn sum_by_category(&self, category: &str) -> Result<f64, CoreError> {
        self.total(&ExpenseFilter::default().category(category))
    }

    /// Sums every expense accepted by `filter`, soft-deleted ones included.
    pub fn total(&self, filter: &ExpenseFilter) -> Result<f64, CoreError> {
        let expenses = self.repository.load_all()?;
        Ok(expenses
            .iter()
            .filter(|expense| filter.accepts(expense))
            .map(|expense| expense.amount)
            .sum())
    }
}

fn checked_index(id: i64, len: usize) -> Result<usize, CoreError> {
    usize::try_from(id)
        .ok()
        .filter(|index| *index < len)
        .ok_or(CoreError::ExpenseNotFound(id))
}
