use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User-configurable storage locations and display preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Directory holding the record files. Defaults to `<base>/data`.
    pub data_dir: Option<PathBuf>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Directory receiving CSV exports. Defaults to `<base>/csv`.
    pub export_dir: Option<PathBuf>,

    #[serde(default = "Config::default_expenses_file")]
    pub expenses_file: String,
    #[serde(default = "Config::default_budgets_file")]
    pub budgets_file: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default = "Config::default_currency_precision")]
    pub currency_precision: u8,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            export_dir: None,
            expenses_file: Self::default_expenses_file(),
            budgets_file: Self::default_budgets_file(),
            currency: Self::default_currency(),
            currency_precision: Self::default_currency_precision(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_expenses_file() -> String {
        "expenses.json".into()
    }

    pub fn default_budgets_file() -> String {
        "budgets.json".into()
    }

    pub fn default_currency() -> String {
        "$".into()
    }

    pub fn default_currency_precision() -> u8 {
        2
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Relative paths are taken against `base`.
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        resolve(base, self.data_dir.as_deref(), "data")
    }

    pub fn resolve_export_dir(&self, base: &Path) -> PathBuf {
        resolve(base, self.export_dir.as_deref(), "csv")
    }
}

fn resolve(base: &Path, configured: Option<&Path>, fallback: &str) -> PathBuf {
    match configured {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => base.join(path),
        None => base.join(fallback),
    }
}
