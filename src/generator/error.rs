use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a generation run.
///
/// Generation halts at the first error; files written before it stay on disk.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invalid entity name {name:?}: {reason}")]
    InvalidEntityName { name: String, reason: String },

    #[error("failed to create directory {}: {source}", path.display())]
    DirectoryCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to create file {}: {source}", path.display())]
    FileCreationFailed { path: PathBuf, source: io::Error },

    #[error("failed to parse template {template}: {source}")]
    TemplateParseFailed {
        template: &'static str,
        source: minijinja::Error,
    },

    #[error("failed to render template {template}: {source}")]
    TemplateRenderFailed {
        template: &'static str,
        source: minijinja::Error,
    },

    #[error("failed to read template override {}: {source}", path.display())]
    TemplateOverrideUnreadable { path: PathBuf, source: io::Error },
}
