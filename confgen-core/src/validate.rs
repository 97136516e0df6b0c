//! Pre-render validation of the environment snapshot.

use crate::env::{keys, EnvVars};
use crate::error::ConfigError;

/// Check that the environment carries enough credentials to render a config.
///
/// Rules, in order:
/// 1. at least one of `OTLP_ENDPOINT` / `ELASTICSEARCH_ENDPOINT` is set;
/// 2. at least one of `OTLP_API_KEY` / `ELASTICSEARCH_API_KEY` is set.
///
/// The two checks are independent: an OTLP endpoint paired with only an
/// Elasticsearch key passes. That leniency is long-standing observed
/// behaviour and is pinned by tests; do not tighten it here.
pub fn validate_environment(env: &EnvVars) -> Result<(), ConfigError> {
    if !env.is_set(keys::OTLP_ENDPOINT) && !env.is_set(keys::ELASTICSEARCH_ENDPOINT) {
        return Err(ConfigError::MissingEndpoint);
    }
    if !env.is_set(keys::OTLP_API_KEY) && !env.is_set(keys::ELASTICSEARCH_API_KEY) {
        return Err(ConfigError::MissingApiKey);
    }
    Ok(())
}
