use crate::cli::args::Invocation;
use crate::cli::context::CliContext;
use crate::cli::help;
use crate::cli::registry::CommandEntry;
use crate::errors::{CliError, CommandResult};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "help",
            "Shows available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("version", "Shows the program version", "version", cmd_version),
    ]
}

fn cmd_help(context: &mut CliContext, invocation: &Invocation) -> CommandResult {
    let Some(topic) = invocation.action().map(str::to_lowercase) else {
        help::print_overview(&context.registry, &context.style);
        return Ok(());
    };
    match context.registry.get(&topic) {
        Some(entry) => {
            help::print_command(entry, &context.style);
            Ok(())
        }
        None => Err(CliError::UnknownCommand {
            suggestion: context.registry.suggest(&topic).map(str::to_string),
            name: topic,
        }),
    }
}

fn cmd_version(_context: &mut CliContext, _invocation: &Invocation) -> CommandResult {
    println!("et {}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
