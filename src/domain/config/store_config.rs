//! Store configuration loaded from `projmeta.toml`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Default data root under which per-project metadata directories live.
pub const DEFAULT_DATA_ROOT: &str = "/file-watcher/fwdata/projects/";

/// Default shared log root.
pub const DEFAULT_LOG_ROOT: &str = "/codewind-workspace/.logs/";

/// Top-level configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjmetaConfig {
    /// Metadata store locations.
    #[serde(default)]
    pub store: StoreConfig,
}

impl ProjmetaConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        self.store.validate()
    }
}

/// Locations the metadata store derives every path from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreConfig {
    /// Directory holding one `<projectID>/` directory per project.
    #[serde(default = "default_data_root")]
    pub data_root: PathBuf,
    /// Directory shared by all projects for logs.
    #[serde(default = "default_log_root")]
    pub log_root: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { data_root: default_data_root(), log_root: default_log_root() }
    }
}

impl StoreConfig {
    pub fn new(data_root: impl Into<PathBuf>, log_root: impl Into<PathBuf>) -> Self {
        Self { data_root: data_root.into(), log_root: log_root.into() }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_root("data_root", &self.data_root)?;
        validate_root("log_root", &self.log_root)?;
        Ok(())
    }
}

fn validate_root(name: &str, root: &Path) -> Result<(), AppError> {
    if root.as_os_str().is_empty() {
        return Err(AppError::config_error(format!("store.{name} must not be empty")));
    }
    if !root.is_absolute() {
        return Err(AppError::config_error(format!(
            "store.{name} must be an absolute path, got '{}'",
            root.display()
        )));
    }
    Ok(())
}

fn default_data_root() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_ROOT)
}

fn default_log_root() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_ROOT)
}
