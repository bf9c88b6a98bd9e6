//! The external generative model seam.

use async_trait::async_trait;
use thiserror::Error;

use crate::prepared_image::PreparedImage;

/// Text plus optional image sent to the model.
#[derive(Debug, Clone)]
pub struct GenerationPrompt {
    pub text: String,
    pub image: Option<PreparedImage>,
}

impl GenerationPrompt {
    pub fn new(text: impl Into<String>, image: Option<PreparedImage>) -> Self {
        Self {
            text: text.into(),
            image,
        }
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// A failed model call.
///
/// Only the human-readable message is available; callers classify it by
/// substring (see [`crate::failure::classify_fault`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", .message.as_deref().unwrap_or("Unknown error occurred"))]
pub struct ClientFault {
    pub message: Option<String>,
}

impl ClientFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    /// A fault that carries no message at all.
    pub fn unknown() -> Self {
        Self { message: None }
    }
}

/// A hosted model that turns a multimodal prompt into text.
///
/// `Ok(None)` means the call succeeded but produced no text.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    async fn generate(&self, prompt: GenerationPrompt) -> Result<Option<String>, ClientFault>;
}
