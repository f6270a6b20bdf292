//! Pure parse/validate for store configuration (`projmeta.toml`).

use crate::domain::{AppError, ProjmetaConfig};

/// Parse and validate store configuration from TOML content.
pub fn parse_config_content(content: &str) -> Result<ProjmetaConfig, AppError> {
    let config: ProjmetaConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
