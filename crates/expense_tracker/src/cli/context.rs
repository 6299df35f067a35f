use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use et_config::Config;
use et_core::{BudgetService, Clock, ExpenseService};
use et_domain::{Budget, Expense};
use et_storage_json::JsonRepository;

use crate::cli::{formatters::CliFormatters, registry::CommandRegistry, ui::UiStyle};

pub type ExpenseStore = ExpenseService<JsonRepository<Expense>>;
pub type BudgetStore = BudgetService<JsonRepository<Budget>>;

/// Everything a command handler needs for one invocation.
pub struct CliContext {
    pub registry: CommandRegistry,
    pub expenses: ExpenseStore,
    pub budgets: BudgetStore,
    pub clock: Arc<dyn Clock>,
    pub formatters: CliFormatters,
    pub style: UiStyle,
    export_dir: PathBuf,
}

impl CliContext {
    pub fn new(
        base_dir: &Path,
        config: &Config,
        registry: CommandRegistry,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let data_dir = config.resolve_data_dir(base_dir);
        let export_dir = config.resolve_export_dir(base_dir);
        let expenses = ExpenseService::new(
            JsonRepository::open(&data_dir, config.expenses_file.clone()),
            Arc::clone(&clock),
        );
        let budgets = BudgetService::new(
            JsonRepository::open(&data_dir, config.budgets_file.clone()),
            Arc::clone(&clock),
        );
        Self {
            registry,
            formatters: CliFormatters::new(config),
            style: UiStyle::detect(config.ui_color_enabled),
            expenses,
            budgets,
            clock,
            export_dir,
        }
    }

    pub fn export_dir(&self) -> &Path {
        &self.export_dir
    }

    pub fn print_success(&self, message: impl AsRef<str>) {
        println!("{}", self.style.apply_success_style(message.as_ref()));
    }
}
