//! et-config
//!
//! Persistent settings for the expense tracker: where the record files live,
//! where exports go, and how amounts are rendered.

pub mod error;
pub mod manager;
pub mod model;

pub use error::ConfigError;
pub use manager::ConfigManager;
pub use model::Config;
