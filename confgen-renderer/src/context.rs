//! Template context — serializable rendering payload built from [`EnvVars`].

use confgen_core::{keys, EnvVars};
use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Instance count used when `NUM_INSTANCES` is absent or unusable.
pub const DEFAULT_NUM_INSTANCES: u32 = 3;

/// Flat rendering payload.
///
/// Absent environment inputs become empty strings, never missing fields, so
/// templates can test `!= ""` without caring whether a variable existed.
/// Building a context is total — it cannot fail, whatever the environment
/// looks like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateContext {
    pub otlp_endpoint: String,
    pub otlp_api_key: String,
    pub elasticsearch_endpoint: String,
    pub elasticsearch_api_key: String,
    pub monitoring_otlp_endpoint: String,
    pub monitoring_api_key: String,
    /// Fan-out count, always >= 1.
    pub num_instances: u32,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from an environment snapshot.
    ///
    /// String fields are read verbatim. `NUM_INSTANCES` must parse to an
    /// integer >= 1; anything else falls back to [`DEFAULT_NUM_INSTANCES`]
    /// with a warning rather than failing the build.
    pub fn from_env(env: &EnvVars) -> Self {
        let var = |key: &str| env.get(key).unwrap_or("").to_owned();
        TemplateContext {
            otlp_endpoint: var(keys::OTLP_ENDPOINT),
            otlp_api_key: var(keys::OTLP_API_KEY),
            elasticsearch_endpoint: var(keys::ELASTICSEARCH_ENDPOINT),
            elasticsearch_api_key: var(keys::ELASTICSEARCH_API_KEY),
            monitoring_otlp_endpoint: var(keys::MONITORING_OTLP_ENDPOINT),
            monitoring_api_key: var(keys::MONITORING_API_KEY),
            num_instances: parse_num_instances(env.get(keys::NUM_INSTANCES)),
        }
    }

    /// Convert to a [`tera::Context`] for rendering.
    ///
    /// Injects the derived `instances` array (`[1, 2, ..., num_instances]`,
    /// ascending) that templates iterate over for per-instance fan-out.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        let mut ctx = tera::Context::from_serialize(self).map_err(RenderError::from)?;
        let instances: Vec<u32> = (1..=self.num_instances).collect();
        ctx.insert("instances", &instances);
        Ok(ctx)
    }
}

impl Default for TemplateContext {
    fn default() -> Self {
        Self::from_env(&EnvVars::default())
    }
}

fn parse_num_instances(raw: Option<&str>) -> u32 {
    let Some(raw) = raw else {
        return DEFAULT_NUM_INSTANCES;
    };
    match raw.parse::<u32>() {
        Ok(n) if n >= 1 => n,
        _ => {
            log::warn!(
                "NUM_INSTANCES={raw:?} is not a positive integer; \
                 using default {DEFAULT_NUM_INSTANCES}"
            );
            DEFAULT_NUM_INSTANCES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_environment_yields_defaults() {
        let ctx = TemplateContext::from_env(&EnvVars::default());
        assert_eq!(ctx.otlp_endpoint, "");
        assert_eq!(ctx.otlp_api_key, "");
        assert_eq!(ctx.elasticsearch_endpoint, "");
        assert_eq!(ctx.elasticsearch_api_key, "");
        assert_eq!(ctx.monitoring_otlp_endpoint, "");
        assert_eq!(ctx.monitoring_api_key, "");
        assert_eq!(ctx.num_instances, 3);
    }

    #[test]
    fn fields_read_verbatim() {
        let env = EnvVars::from([
            ("OTLP_ENDPOINT", "http://otlp"),
            ("OTLP_API_KEY", "otlp-key"),
            ("ELASTICSEARCH_ENDPOINT", "http://es"),
            ("ELASTICSEARCH_API_KEY", "es-key"),
            ("MONITORING_OTLP_ENDPOINT", "http://mon"),
            ("MONITORING_API_KEY", "mon-key"),
        ]);
        let ctx = TemplateContext::from_env(&env);
        assert_eq!(ctx.otlp_endpoint, "http://otlp");
        assert_eq!(ctx.otlp_api_key, "otlp-key");
        assert_eq!(ctx.elasticsearch_endpoint, "http://es");
        assert_eq!(ctx.elasticsearch_api_key, "es-key");
        assert_eq!(ctx.monitoring_otlp_endpoint, "http://mon");
        assert_eq!(ctx.monitoring_api_key, "mon-key");
    }

    #[test]
    fn num_instances_from_env() {
        let env = EnvVars::from([("NUM_INSTANCES", "7")]);
        assert_eq!(TemplateContext::from_env(&env).num_instances, 7);
    }

    #[test]
    fn unusable_num_instances_falls_back_to_default() {
        for bad in ["", "abc", "0", "-2", "3.5", " 4"] {
            let env = EnvVars::from([("NUM_INSTANCES", bad)]);
            assert_eq!(
                TemplateContext::from_env(&env).num_instances,
                DEFAULT_NUM_INSTANCES,
                "NUM_INSTANCES={bad:?} must fall back"
            );
        }
    }

    #[test]
    fn tera_context_carries_ascending_instances() {
        let env = EnvVars::from([("NUM_INSTANCES", "4")]);
        let ctx = TemplateContext::from_env(&env)
            .to_tera_context()
            .expect("context conversion");
        let instances = ctx.get("instances").expect("instances key");
        assert_eq!(instances, &serde_json::json!([1, 2, 3, 4]));
    }
}
