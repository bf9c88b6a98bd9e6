//! Path management for EduVision configuration files.
//!
//! ```text
//! ~/.config/eduvision/
//! ├── config.toml    # model, image and subject settings
//! └── secret.json    # API keys
//! ```

use std::path::{Path, PathBuf};

use eduvision_core::EduError;

const APP_DIR: &str = "eduvision";
const CONFIG_FILE: &str = "config.toml";
const SECRET_FILE: &str = "secret.json";

/// Resolves configuration paths, optionally under an explicit base directory.
#[derive(Debug, Clone)]
pub struct EduPaths {
    base: Option<PathBuf>,
}

impl EduPaths {
    /// `base` replaces the platform config directory (used by tests and
    /// the `--config-dir` flag).
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf, EduError> {
        if let Some(base) = &self.base {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| EduError::config("Cannot find configuration directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf, EduError> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    /// Path to the secrets file.
    ///
    /// The file should only be readable by its owner.
    pub fn secret_file(&self) -> Result<PathBuf, EduError> {
        Ok(self.config_dir()?.join(SECRET_FILE))
    }
}

impl Default for EduPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_override() {
        let paths = EduPaths::new(Some(Path::new("/tmp/edu")));
        assert_eq!(paths.config_file().unwrap(), PathBuf::from("/tmp/edu/config.toml"));
        assert_eq!(paths.secret_file().unwrap(), PathBuf::from("/tmp/edu/secret.json"));
    }
}
