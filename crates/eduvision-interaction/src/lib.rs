//! Hosted model clients for EduVision.

pub mod gemini_api_client;
pub mod model_selection;

pub use gemini_api_client::GeminiApiClient;
pub use model_selection::ModelSelection;
