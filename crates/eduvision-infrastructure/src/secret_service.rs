//! Loads API keys from `secret.json` or the environment.

use std::fs;

use eduvision_core::EduError;
use eduvision_core::config::{GeminiSecret, SecretConfig};
use eduvision_core::error::Result;

use crate::paths::EduPaths;

/// Environment variable that overrides the key stored in `secret.json`.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Reads secrets. Key material is never logged.
#[derive(Debug, Clone, Default)]
pub struct SecretService {
    paths: EduPaths,
}

impl SecretService {
    pub fn new(paths: EduPaths) -> Self {
        Self { paths }
    }

    /// Loads `secret.json`. A missing file yields an empty config.
    pub fn load_secrets(&self) -> Result<SecretConfig> {
        let path = self.paths.secret_file()?;
        if !path.exists() {
            return Ok(SecretConfig::default());
        }
        let content = fs::read_to_string(&path)?;
        let secrets: SecretConfig = serde_json::from_str(&content)?;
        Ok(secrets)
    }

    /// Resolves the Gemini credentials, preferring `GEMINI_API_KEY`.
    pub fn gemini(&self) -> Result<GeminiSecret> {
        self.gemini_with_env(std::env::var(GEMINI_API_KEY_ENV).ok())
    }

    /// Same as [`gemini`](Self::gemini) with the environment value passed in.
    pub fn gemini_with_env(&self, env_key: Option<String>) -> Result<GeminiSecret> {
        let from_file = self.load_secrets()?.gemini;

        if let Some(api_key) = env_key.filter(|key| !key.trim().is_empty()) {
            tracing::debug!("Using Gemini API key from {}", GEMINI_API_KEY_ENV);
            return Ok(GeminiSecret {
                api_key,
                model_name: from_file.and_then(|secret| secret.model_name),
            });
        }

        match from_file {
            Some(secret) if !secret.api_key.trim().is_empty() => Ok(secret),
            _ => Err(EduError::config(format!(
                "Gemini API key not configured. Set {} or add it to {}",
                GEMINI_API_KEY_ENV,
                self.paths.secret_file()?.display()
            ))),
        }
    }
}
