use et_config::ConfigError;
use et_core::CoreError;
use thiserror::Error;

/// User-facing CLI error wrapper.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Input(String),
    #[error("`{name}` is not a command{}", suggestion_hint(.suggestion))]
    UnknownCommand {
        name: String,
        suggestion: Option<String>,
    },
    #[error("Export failed: {0}")]
    Export(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CommandResult = Result<(), CliError>;

impl CliError {
    pub fn input(message: impl Into<String>) -> Self {
        CliError::Input(message.into())
    }
}

fn suggestion_hint(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(best) => format!(". Did you mean `{best}`?"),
        None => ". Type `et help` to see available commands.".into(),
    }
}
