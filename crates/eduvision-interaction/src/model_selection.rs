//! Text/vision model choice.

use eduvision_core::config::{DEFAULT_GEMINI_MODEL, ModelConfig};

/// Which Gemini model serves a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub text_model: String,
    pub vision_model: Option<String>,
}

impl ModelSelection {
    pub fn from_config(config: &ModelConfig) -> Self {
        Self {
            text_model: config.name.clone(),
            vision_model: config.vision_name.clone(),
        }
    }

    /// The vision model when an image is attached and one is configured,
    /// otherwise the text model.
    pub fn model_for(&self, has_image: bool) -> &str {
        match (&self.vision_model, has_image) {
            (Some(vision), true) => vision.as_str(),
            _ => self.text_model.as_str(),
        }
    }
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            text_model: DEFAULT_GEMINI_MODEL.to_string(),
            vision_model: None,
        }
    }
}
