//! et-domain
//!
//! Record types persisted by the expense tracker (expenses and monthly budgets).
//! No I/O, no CLI, no storage. Only data types and their invariants.

pub mod budget;
pub mod expense;
mod finite;

pub use budget::*;
pub use expense::*;
