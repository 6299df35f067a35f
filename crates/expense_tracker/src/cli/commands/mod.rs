pub mod budget;
pub mod expense;
pub mod report;
pub mod system;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_entries() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(expense::definitions());
    commands.extend(report::definitions());
    commands.extend(budget::definitions());
    commands.extend(system::definitions());
    commands
}

/// Builds the command table used by the dispatcher.
pub fn build_registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for entry in all_entries() {
        registry.register(entry);
    }
    registry
}
