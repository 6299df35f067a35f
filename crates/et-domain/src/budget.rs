//! Domain model for monthly per-category spending limits.

use serde::{Deserialize, Serialize};

/// Spending limit for one category in one month of one year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub month: u32,
    pub year: i32,
    pub category: String,
    #[serde(serialize_with = "crate::finite::serialize")]
    pub limit: f64,
}

impl Budget {
    pub fn new(month: u32, year: i32, category: impl Into<String>, limit: f64) -> Self {
        Self {
            month,
            year,
            category: category.into(),
            limit,
        }
    }

    /// Lookup key used by queries. Year is deliberately not part of it.
    pub fn matches(&self, month: u32, category: &str) -> bool {
        self.month == month && self.category == category
    }

    /// Uniqueness key used when upserting.
    pub fn occupies(&self, month: u32, year: i32, category: &str) -> bool {
        self.matches(month, category) && self.year == year
    }
}
