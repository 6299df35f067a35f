pub mod args;
pub mod commands;
pub mod context;
pub mod export;
pub mod formatters;
pub mod help;
pub mod registry;
pub mod shell;
pub mod system_clock;
pub mod ui;

pub use shell::{dispatch, run_cli};
