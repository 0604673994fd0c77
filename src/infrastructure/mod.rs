//! Infrastructure layer module
//!
//! - Configuration management (figment)
//! - Logging infrastructure (tracing)
//!
//! The HTTP adapters satisfying the domain ports live in [`crate::adapters`].

pub mod config;
pub mod logging;
