//! Tera rendering engine — template resolution and [`generate_config`].
//!
//! # Template contract
//!
//! The engine reads one file, `collector-config.yaml.tera`, from the caller's
//! template directory. The template receives the [`TemplateContext`] fields
//! plus the derived `instances` array and is responsible for the textual
//! layout; which blocks appear (exporters, pipelines, self-monitoring) is
//! driven entirely by the context:
//!
//! | Context state                        | Rendered blocks (per instance i)           |
//! |--------------------------------------|--------------------------------------------|
//! | always                               | `hostmetrics/i`, `transform/i`, `batch`,   |
//! |                                      | `resourcedetection`                        |
//! | `otlp_endpoint` non-empty            | `otlp/i` exporter + `metrics/otlp/i`       |
//! | `elasticsearch_endpoint` non-empty   | `elasticsearch/i` + `metrics/elasticsearch/i` |
//! | `monitoring_otlp_endpoint` non-empty | telemetry metric `readers:` block          |
//! | `monitoring_otlp_endpoint` empty     | telemetry logging `level: none`            |
//!
//! `${env:...}` tokens in the template are not Tera syntax and pass through
//! verbatim; the collector resolves them at its own runtime.

use std::path::Path;

use tera::Tera;

use confgen_core::EnvVars;

use crate::context::TemplateContext;
use crate::error::RenderError;

/// Well-known template file name resolved inside the template directory.
pub const TEMPLATE_FILE_NAME: &str = "collector-config.yaml.tera";

/// Tera-based engine bound to one collector-config template.
///
/// Create with [`TemplateEngine::from_dir`] and reuse across renders; the
/// template is parsed once.
#[derive(Debug)]
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    /// Load and parse `collector-config.yaml.tera` from `template_dir`.
    ///
    /// A missing or unreadable file yields [`RenderError::TemplateNotFound`].
    pub fn from_dir(template_dir: &Path) -> Result<Self, RenderError> {
        let path = template_dir.join(TEMPLATE_FILE_NAME);
        let raw = std::fs::read_to_string(&path)
            .map_err(|source| RenderError::TemplateNotFound { path: path.clone(), source })?;
        log::debug!("loaded template from {}", path.display());

        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_FILE_NAME, &raw)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the collector configuration for `ctx`.
    ///
    /// Deterministic: identical contexts produce byte-identical output.
    pub fn render(&self, ctx: &TemplateContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(TEMPLATE_FILE_NAME, &tera_ctx)?)
    }
}

/// One-shot render: derive the context from `env`, then render the template
/// found in `template_dir`.
pub fn generate_config(template_dir: &Path, env: &EnvVars) -> Result<String, RenderError> {
    let ctx = TemplateContext::from_env(env);
    generate_config_with_context(template_dir, &ctx)
}

/// One-shot render with a caller-provided [`TemplateContext`].
pub fn generate_config_with_context(
    template_dir: &Path,
    ctx: &TemplateContext,
) -> Result<String, RenderError> {
    let engine = TemplateEngine::from_dir(template_dir)?;
    engine.render(ctx)
}
