//! Store configuration loading from file and environment.

use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::config::parse_config_content;
use crate::domain::{AppError, StoreConfig};

/// Names the config file when no explicit path is given.
pub const CONFIG_PATH_ENV: &str = "PROJMETA_CONFIG";
/// Overrides `store.data_root`.
pub const DATA_ROOT_ENV: &str = "PROJMETA_DATA_ROOT";
/// Overrides `store.log_root`.
pub const LOG_ROOT_ENV: &str = "PROJMETA_LOG_ROOT";

/// Load the store configuration.
///
/// Reads `path` (or the file named by `PROJMETA_CONFIG`) when given, falls
/// back to defaults otherwise, then applies environment overrides.
pub fn load_config(path: Option<&Path>) -> Result<StoreConfig, AppError> {
    let path =
        path.map(Path::to_path_buf).or_else(|| env::var_os(CONFIG_PATH_ENV).map(PathBuf::from));

    let mut config = match path {
        Some(path) => {
            let content = fs::read_to_string(&path).map_err(|err| {
                AppError::config_error(format!(
                    "Failed to read config file {}: {}",
                    path.display(),
                    err
                ))
            })?;
            parse_config_content(&content)?.store
        }
        None => StoreConfig::default(),
    };

    apply_env_overrides(&mut config, |key| env::var_os(key));
    config.validate()?;
    Ok(config)
}

fn apply_env_overrides(config: &mut StoreConfig, lookup: impl Fn(&str) -> Option<OsString>) {
    if let Some(data_root) = lookup(DATA_ROOT_ENV).filter(|value| !value.is_empty()) {
        config.data_root = PathBuf::from(data_root);
    }
    if let Some(log_root) = lookup(LOG_ROOT_ENV).filter(|value| !value.is_empty()) {
        config.log_root = PathBuf::from(log_root);
    }
}
