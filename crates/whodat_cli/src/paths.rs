//! Cross-platform application paths
//!
//! - Linux: ~/.config/whodat/
//! - Windows: %APPDATA%\whodat\
//! - MacOS: ~/Library/Application Support/whodat/

use std::path::PathBuf;

use crate::error::CliError;

#[derive(Debug, Clone)]
pub struct AppPaths {
    config_dir: PathBuf,
}

impl AppPaths {
    pub fn new() -> Result<Self, CliError> {
        let base = dirs::config_dir().ok_or(CliError::NoConfigDir)?;
        Ok(Self::with_config_dir(base.join("whodat")))
    }

    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }
}
