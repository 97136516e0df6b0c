//! Confgen core library — environment snapshot, validation, errors.
//!
//! Public API surface:
//! - [`env`] — [`EnvVars`] snapshot and the input key constants
//! - [`error`] — [`ConfigError`]
//! - [`validate`] — [`validate_environment`]

pub mod env;
pub mod error;
pub mod validate;

pub use env::{keys, EnvVars};
pub use error::ConfigError;
pub use validate::validate_environment;
