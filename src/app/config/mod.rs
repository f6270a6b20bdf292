//! Environment-backed configuration loading.
//!
//! Pure schema parsing lives in `domain::config`.

mod load_config;

pub use load_config::{CONFIG_PATH_ENV, DATA_ROOT_ENV, LOG_ROOT_ENV, load_config};
