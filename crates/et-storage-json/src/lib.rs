//! et-storage-json
//!
//! Flat-file persistence for the expense tracker: a byte-level blob store and a
//! JSON record repository layered on top of it.

mod blob;
mod repository;

pub use blob::{replace_file, BlobStore, FileBlobStore};
pub use repository::JsonRepository;

/// Resource name of the expense collection.
pub const EXPENSES_FILE: &str = "expenses.json";
/// Resource name of the budget collection.
pub const BUDGETS_FILE: &str = "budgets.json";
