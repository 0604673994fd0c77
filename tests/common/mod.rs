//! Common test utilities for integration tests
//!
//! Shared fixtures used across multiple integration test files.

use repo_advisor::domain::models::RepositoryCandidate;

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Candidates `org/repo-{i}` carrying the given star counts, in order.
#[allow(dead_code)]
pub fn candidates(stars: &[u64]) -> Vec<RepositoryCandidate> {
    stars
        .iter()
        .enumerate()
        .map(|(i, &s)| {
            RepositoryCandidate::new(
                i as u64,
                format!("org/repo-{i}"),
                s,
                format!("https://github.com/org/repo-{i}"),
            )
            .with_description(format!("Repository number {i}"))
        })
        .collect()
}
