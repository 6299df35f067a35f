//! Domain model for a single recorded expense.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

/// Amount value that marks "not provided" during partial updates.
pub const UNSET_AMOUNT: f64 = -1.0;

/// A single expense entry.
///
/// `id` equals the record's position in the persisted collection. Records are
/// only ever soft-deleted, so the position never shifts once assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    #[serde(serialize_with = "crate::finite::serialize")]
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub id: usize,
    pub month: u32,
    #[serde(default)]
    pub is_deleted: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
}

impl Expense {
    /// Builds a live expense stamped with `date`; `month` is derived from it.
    pub fn new(
        id: usize,
        amount: f64,
        description: impl Into<String>,
        category: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            amount,
            date,
            id,
            month: date.month(),
            is_deleted: false,
            description: description.into(),
            category: category.into(),
        }
    }

    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    /// Overwrites the editable fields. Identity, timestamp and deletion flag stay put.
    pub fn overwrite(&mut self, amount: f64, description: String, category: String) {
        self.amount = amount;
        self.description = description;
        self.category = category;
    }

    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
