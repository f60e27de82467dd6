//! Configuration management for evaldash.
//!
//! This crate provides the constants, types and loaders that describe how the
//! dashboard reaches the evaluation service. The operator credential is never
//! part of the configuration; it lives only in the client session.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none, validate_base_url};
pub use types::{Config, ConnectionConfig};
