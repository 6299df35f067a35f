use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use et_storage_json::replace_file;

use crate::{Config, ConfigError};

/// Environment variable overriding the base directory.
pub const HOME_ENV: &str = "ET_HOME";
const APP_DIR_NAME: &str = "expense-tracker";

/// Handles persistence for [`Config`] and owns the base directory it resolves against.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base_dir: PathBuf,
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(base_dir: PathBuf, config_path: PathBuf) -> Self {
        Self {
            base_dir,
            config_path,
        }
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        let config_path = base.join("config").join("config.json");
        Ok(Self::new(base, config_path))
    }

    /// Uses `ET_HOME` when set, otherwise the platform's local data directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::with_base_dir(default_base_dir())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Reads the stored settings. A missing file means nothing was customised yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let data = match fs::read(&self.config_path) {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Config::default()),
            Err(err) => return Err(err.into()),
        };
        serde_json::from_slice(&data).map_err(|err| ConfigError::Serde(err.to_string()))
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let data = serde_json::to_vec_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        if let Some(dir) = self.config_path.parent() {
            fs::create_dir_all(dir)?;
        }
        replace_file(&self.config_path, &data)?;
        Ok(())
    }
}

fn default_base_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
        return PathBuf::from(home);
    }
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}
