//! Error types for confgen-core.

use thiserror::Error;

/// All errors that can arise from environment validation.
///
/// Display text is part of the contract: downstream tooling matches on the
/// "expected ..." fragments, so the wording here must not drift.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither exporter endpoint variable is set.
    #[error("expected OTLP_ENDPOINT or ELASTICSEARCH_ENDPOINT to be set")]
    MissingEndpoint,

    /// An endpoint is set but neither API key variable is.
    #[error("expected OTLP_API_KEY or ELASTICSEARCH_API_KEY to be set")]
    MissingApiKey,
}
