//! Configuration schemas.
//!
//! `config.toml` holds non-sensitive settings, `secret.json` holds API keys.
//! Loading lives in `eduvision-infrastructure`.

use serde::{Deserialize, Serialize};

use crate::prepared_image::DEFAULT_MAX_DIMENSION;
use crate::subject::Subject;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Root of `config.toml`. Every field has a default so a missing or partial
/// file is valid.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub image: ImageConfig,
    pub default_subject: Subject,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ModelConfig {
    /// Model used for text-only requests.
    pub name: String,
    /// Model used when an image is attached. Falls back to `name`.
    pub vision_name: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_GEMINI_MODEL.to_string(),
            vision_name: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ImageConfig {
    /// Bound for the longest side of an uploaded image.
    pub max_dimension: u32,
}

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            max_dimension: DEFAULT_MAX_DIMENSION,
        }
    }
}

/// Root structure of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiSecret>,
}

/// Gemini API credentials.
#[derive(Deserialize, Serialize, Clone)]
pub struct GeminiSecret {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl std::fmt::Debug for GeminiSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiSecret")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
default_subject = "science"

[image]
max_dimension = 512
"#,
        )
        .unwrap();

        assert_eq!(config.default_subject, Subject::Science);
        assert_eq!(config.image.max_dimension, 512);
        assert_eq!(config.model, ModelConfig::default());
    }

    #[test]
    fn test_secret_debug_redacts_key() {
        let secret = GeminiSecret {
            api_key: "super-secret".into(),
            model_name: None,
        };
        assert!(!format!("{secret:?}").contains("super-secret"));
    }
}
