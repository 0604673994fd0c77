//! Domain layer for repo-advisor
//!
//! Core data model, error taxonomy, and the port traits external
//! collaborators are reached through.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{
    AgentError, CompletionError, InterpretationError, Interruption, ResolutionError, SearchError,
};
