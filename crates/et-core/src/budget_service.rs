//! Monthly per-category limits with upsert semantics.

use std::sync::Arc;

use et_domain::Budget;
use tracing::info;

use crate::{validation, Clock, CoreError, RecordRepository};

/// Sets, queries and removes budgets.
///
/// Queries match on `(month, category)` only. When the same month and category
/// exist for several years, the first one in insertion order wins.
pub struct BudgetService<R> {
    repository: R,
    clock: Arc<dyn Clock>,
}

impl<R> BudgetService<R>
where
    R: RecordRepository<Budget>,
{
    pub fn new(repository: R, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// Validates the input, then inserts or overwrites the limit for the
    /// current year. An existing record keeps its original year.
    pub fn set(&self, month: u32, category: &str, limit: f64) -> Result<(), CoreError> {
        validation::validate_budget_params(month, category, limit)?;

        let mut budgets = self.repository.load_all()?;
        let year = self.clock.current_year();
        match budgets
            .iter_mut()
            .find(|budget| budget.occupies(month, year, category))
        {
            Some(existing) => existing.limit = limit,
            None => budgets.push(Budget::new(month, year, category, limit)),
        }
        self.repository.save_all(&budgets)?;
        info!(month, year, category, limit, "budget set");
        Ok(())
    }

    pub fn get_all(&self) -> Result<Vec<Budget>, CoreError> {
        self.repository.load_all()
    }

    pub fn get(&self, month: u32, category: &str) -> Result<Budget, CoreError> {
        let budgets = self.repository.load_all()?;
        find_position(&budgets, month, category)
            .map(|index| budgets[index].clone())
            .ok_or_else(|| not_found(month, category))
    }

    pub fn get_limit(&self, month: u32, category: &str) -> Result<f64, CoreError> {
        self.get(month, category).map(|budget| budget.limit)
    }

    /// Every budget for `month`, regardless of year.
    pub fn get_limits_for_month(&self, month: u32) -> Result<Vec<Budget>, CoreError> {
        let budgets = self.repository.load_all()?;
        Ok(budgets
            .into_iter()
            .filter(|budget| budget.month == month)
            .collect())
    }

    /// Removes the record [`get`](Self::get) would return.
    pub fn remove(&self, month: u32, category: &str) -> Result<(), CoreError> {
        let mut budgets = self.repository.load_all()?;
        let index =
            find_position(&budgets, month, category).ok_or_else(|| not_found(month, category))?;
        let removed = budgets.remove(index);
        self.repository.save_all(&budgets)?;
        info!(month, year = removed.year, category, "budget removed");
        Ok(())
    }
}

fn find_position(budgets: &[Budget], month: u32, category: &str) -> Option<usize> {
    budgets
        .iter()
        .position(|budget| budget.matches(month, category))
}

fn not_found(month: u32, category: &str) -> CoreError {
    CoreError::BudgetNotFound {
        month,
        category: category.to_string(),
    }
}
