//! Loads `config.toml`.

use std::fs;

use eduvision_core::config::AppConfig;
use eduvision_core::error::Result;

use crate::paths::EduPaths;

/// Reads application settings from `config.toml`.
#[derive(Debug, Clone, Default)]
pub struct ConfigService {
    paths: EduPaths,
}

impl ConfigService {
    pub fn new(paths: EduPaths) -> Self {
        Self { paths }
    }

    /// Loads the configuration, returning defaults when the file is absent.
    pub fn load(&self) -> Result<AppConfig> {
        let path = self.paths.config_file()?;
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;
        tracing::debug!(
            model = %config.model.name,
            max_dimension = config.image.max_dimension,
            "Loaded config from {}",
            path.display()
        );
        Ok(config)
    }
}
