pub mod ask;
pub mod catalog;

use std::path::Path;

use anyhow::Result;
use eduvision_core::Subject;
use eduvision_core::config::AppConfig;
use eduvision_infrastructure::{ConfigService, EduPaths};

/// Settings shared by all commands.
pub struct Context {
    pub paths: EduPaths,
    pub config: AppConfig,
    pub subject: Subject,
}

impl Context {
    pub fn load(config_dir: Option<&Path>, subject: Option<Subject>) -> Result<Self> {
        let paths = EduPaths::new(config_dir);
        let config = ConfigService::new(paths.clone()).load()?;
        let subject = subject.unwrap_or(config.default_subject);
        tracing::debug!(subject = %subject, model = %config.model.name, "Loaded CLI context");
        Ok(Self {
            paths,
            config,
            subject,
        })
    }
}
