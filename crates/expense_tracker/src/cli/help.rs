use crate::cli::registry::{CommandEntry, CommandRegistry};
use crate::cli::ui::UiStyle;

pub fn print_overview(registry: &CommandRegistry, style: &UiStyle) {
    println!("Usage: et <command> [--flag value] ...");
    println!("  Example: et add --description \"Lunch\" --amount 20");
    println!();
    println!("{}", style.apply_header_style("Available commands"));
    let width = registry.names().map(str::len).max().unwrap_or(0);
    for entry in registry.list() {
        println!("  {:width$}  {}", entry.name, entry.description, width = width);
    }
    println!();
    println!("Use `et help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry, style: &UiStyle) {
    println!("{}", style.apply_header_style(&format!("Help: {}", entry.name)));
    println!("  description  {}", entry.description);
    println!("  usage        et {}", entry.usage);
}
