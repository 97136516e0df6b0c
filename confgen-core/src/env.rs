//! Immutable snapshot of the environment inputs confgen reads.
//!
//! Validation and context building never touch `std::env` directly; they
//! take an [`EnvVars`] so tests (and callers embedding the library) can
//! inject any environment they like.

use std::collections::BTreeMap;

/// Names of every environment variable confgen consumes.
pub mod keys {
    pub const OTLP_ENDPOINT: &str = "OTLP_ENDPOINT";
    pub const OTLP_API_KEY: &str = "OTLP_API_KEY";
    pub const ELASTICSEARCH_ENDPOINT: &str = "ELASTICSEARCH_ENDPOINT";
    pub const ELASTICSEARCH_API_KEY: &str = "ELASTICSEARCH_API_KEY";
    pub const MONITORING_OTLP_ENDPOINT: &str = "MONITORING_OTLP_ENDPOINT";
    pub const MONITORING_API_KEY: &str = "MONITORING_API_KEY";
    pub const NUM_INSTANCES: &str = "NUM_INSTANCES";
}

/// A read-once snapshot of environment variables.
///
/// Values are stored verbatim — no trimming, no shape validation. A key set
/// to the empty string is *present* for [`EnvVars::get`] but counts as unset
/// for [`EnvVars::is_set`], matching how the validator treats empty inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(BTreeMap<String, String>);

impl EnvVars {
    /// Snapshot the current process environment.
    pub fn from_process() -> Self {
        Self(std::env::vars().collect())
    }

    /// The raw value for `key`, verbatim, or `None` when absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// True when `key` is present with a non-empty value.
    pub fn is_set(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }
}

impl FromIterator<(String, String)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for EnvVars {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_values_verbatim() {
        let env = EnvVars::from([("OTLP_ENDPOINT", "  https://otlp ")]);
        assert_eq!(env.get(keys::OTLP_ENDPOINT), Some("  https://otlp "));
        assert_eq!(env.get(keys::OTLP_API_KEY), None);
    }

    #[test]
    fn empty_value_is_present_but_not_set() {
        let env = EnvVars::from([("OTLP_API_KEY", "")]);
        assert_eq!(env.get(keys::OTLP_API_KEY), Some(""));
        assert!(!env.is_set(keys::OTLP_API_KEY));
    }

    #[test]
    fn is_set_requires_non_empty() {
        let env = EnvVars::from([("NUM_INSTANCES", "5")]);
        assert!(env.is_set(keys::NUM_INSTANCES));
        assert!(!env.is_set(keys::MONITORING_API_KEY));
    }
}
