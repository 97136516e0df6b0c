//! # confgen-renderer
//!
//! Tera-based engine that renders an OpenTelemetry Collector configuration
//! from environment-derived context data.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use confgen_core::EnvVars;
//! use confgen_renderer::generate_config;
//!
//! fn render(template_dir: &std::path::Path) {
//!     let env = EnvVars::from_process();
//!     match generate_config(template_dir, &env) {
//!         Ok(doc) => print!("{doc}"),
//!         Err(e) => eprintln!("{e}"),
//!     }
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::{TemplateContext, DEFAULT_NUM_INSTANCES};
pub use engine::{generate_config, generate_config_with_context, TemplateEngine, TEMPLATE_FILE_NAME};
pub use error::RenderError;
