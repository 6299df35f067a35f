use std::sync::Arc;

use et_config::ConfigManager;
use tracing::debug;

use crate::cli::{
    args::Invocation, commands, context::CliContext, system_clock::SystemClock,
};
use crate::errors::{CliError, CommandResult};

/// Parses `args` (without the program name), loads configuration and runs one command.
pub fn run_cli(args: Vec<String>) -> CommandResult {
    let invocation = Invocation::parse(&args)?;
    let manager = ConfigManager::from_env()?;
    let config = manager.load()?;
    debug!(base = %manager.base_dir().display(), "configuration loaded");

    let mut context = CliContext::new(
        manager.base_dir(),
        &config,
        commands::build_registry(),
        Arc::new(SystemClock),
    );
    dispatch(&mut context, &invocation)
}

/// Looks the command up in the context's registry and runs its handler.
pub fn dispatch(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let Some(handler) = context.registry.handler(&invocation.command) else {
        return Err(CliError::UnknownCommand {
            name: invocation.command.clone(),
            suggestion: context
                .registry
                .suggest(&invocation.command)
                .map(str::to_string),
        });
    };
    debug!(command = %invocation.command, "dispatching");
    handler(context, invocation)
}
