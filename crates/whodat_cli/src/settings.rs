use std::path::Path;

use tracing::{debug, info};
use whodat::config::AppConfig;

use crate::error::CliError;

pub const CATALOG_URL_ENV: &str = "WHODAT_CATALOG_URL";

/// Read the config file if it exists; a missing file means defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, CliError> {
    let shown = path.display().to_string();
    if !path.exists() {
        debug!(path = %shown, "no config file, using defaults");
        return Ok(AppConfig::default());
    }

    let text = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
        path: shown.clone(),
        source,
    })?;
    let cfg = AppConfig::from_json_str(&text).map_err(|source| CliError::ConfigParse {
        path: shown.clone(),
        source,
    })?;
    info!(path = %shown, "loaded config");
    Ok(cfg)
}

/// File settings, then the environment on top.
pub fn effective_config(path: &Path) -> Result<AppConfig, CliError> {
    let env_url = std::env::var(CATALOG_URL_ENV).ok();
    Ok(load_config(path)?.with_base_url_override(env_url.as_deref()))
}
