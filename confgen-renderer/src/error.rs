//! Error types for confgen-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise from template rendering operations.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The template file is missing or unreadable. Display text must keep
    /// the "not found" fragment — downstream tooling matches on it.
    #[error("template not found at {}: {source}", .path.display())]
    TemplateNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building the tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
