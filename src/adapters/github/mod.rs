//! GitHub repository search adapter.
//!
//! Implements [`RepositorySearch`](crate::domain::ports::RepositorySearch)
//! against the GitHub REST API search endpoint.

pub mod client;
pub mod models;

pub use client::GitHubSearchClient;
