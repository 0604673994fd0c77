//! Configuration management infrastructure
//!
//! Hierarchical configuration using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Credential fallbacks from conventional env vars
//! - Configuration validation

pub mod loader;

pub use loader::{ConfigError, ConfigLoader};
