#![doc(test(attr(deny(warnings))))]

//! Expense Tracker records expenses, tracks per-category monthly budgets, and
//! prints summaries and CSV exports from the command line.

pub mod cli;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing once per process.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("expense tracker tracing initialized");
    });
}
