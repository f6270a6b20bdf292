pub mod parse;
mod store_config;

pub use parse::parse_config_content;
pub use store_config::{DEFAULT_DATA_ROOT, DEFAULT_LOG_ROOT, ProjmetaConfig, StoreConfig};
