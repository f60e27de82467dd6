//! Configuration loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Enforce the `DOTENV_DISABLED` gate so tests never pick up a local `.env`.
//! - Validate and normalize the configured base URL.
//!
//! Invariants / Assumptions:
//! - Later layers win: the CLI applies flags after `from_env()`.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod builder;
mod env;
mod error;

pub use builder::{ConfigLoader, validate_base_url};
pub use env::env_var_or_none;
pub use error::ConfigError;

#[cfg(test)]
mod tests;
