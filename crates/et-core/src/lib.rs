//! et-core
//!
//! Business logic for the expense tracker: expense and budget services.
//! Depends on et-domain. No CLI, no terminal I/O, no direct storage interactions;
//! persistence goes through [`storage::RecordRepository`].

pub mod budget_service;
pub mod error;
pub mod expense_service;
pub mod storage;
pub mod time;
pub mod validation;

pub use budget_service::*;
pub use error::CoreError;
pub use expense_service::*;
pub use storage::RecordRepository;
pub use time::Clock;
