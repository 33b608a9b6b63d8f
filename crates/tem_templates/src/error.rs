//! Error types for templates.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template operations.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("`TEMplates` directory does not exist on the current or any upper level")]
    TemplatesRootNotFound,

    #[error("No such template: {0}")]
    NotFound(String),

    #[error("Invalid manifest in template {template}: {message}")]
    InvalidManifest { template: String, message: String },

    #[error("Cannot read manifest {}", .path.display())]
    ManifestUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Copy failed: {0}")]
    Copy(#[from] fs_extra::error::Error),
}

impl TemplateError {
    pub(crate) fn invalid_manifest(template: &str, message: impl Into<String>) -> Self {
        TemplateError::InvalidManifest {
            template: template.to_string(),
            message: message.into(),
        }
    }
}
