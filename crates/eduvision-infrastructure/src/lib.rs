//! File-backed configuration for EduVision.

pub mod config_service;
pub mod paths;
pub mod secret_service;

pub use config_service::ConfigService;
pub use paths::EduPaths;
pub use secret_service::SecretService;
