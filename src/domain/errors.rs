//! Error types for the recommendation pipeline.
//!
//! Each external boundary has its own error enum. [`ResolutionError`]
//! aggregates them into the tier-failure taxonomy the orchestrator logs
//! before falling through to the next tier. None of these ever escape
//! [`resolve`](crate::services::RecommendationOrchestrator::resolve).

use reqwest::StatusCode;
use thiserror::Error;

/// Failures reported by the repository search provider.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Transport(String),

    #[error("Search provider returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Search response could not be parsed: {0}")]
    MalformedResponse(String),
}

/// Failures reported by the completion provider.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key is configured
    #[error("Completion provider is not configured")]
    NotConfigured,

    /// Invalid request parameters or malformed request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Authentication failed due to invalid or missing API key
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// API server encountered an internal error
    #[error("API server error {0}: {1}")]
    ServerError(StatusCode, String),

    /// Any other non-success status
    #[error("Unexpected status {0}: {1}")]
    UnexpectedStatus(StatusCode, String),

    /// Network error occurred during request
    #[error("Network error: {0}")]
    Transport(String),

    /// Success status but the body did not contain usable text
    #[error("Malformed completion response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Create error from HTTP status code and response body
    ///
    /// - 400: Invalid request
    /// - 401, 403: Authentication failed
    /// - 429: Rate limit exceeded
    /// - 5xx: Server error
    pub fn from_status(status: StatusCode, body: String) -> Self {
        match status {
            StatusCode::BAD_REQUEST => Self::InvalidRequest(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::AuthenticationFailed(body),
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            status if status.is_server_error() => Self::ServerError(status, body),
            status => Self::UnexpectedStatus(status, body),
        }
    }
}

/// Failures reported by the enhanced agent recommender.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("Agent request failed: {0}")]
    Transport(String),

    #[error("Agent returned {status}: {body}")]
    Http { status: StatusCode, body: String },

    #[error("Agent response could not be parsed: {0}")]
    MalformedResponse(String),

    #[error("Agent failed: {0}")]
    Failed(String),
}

/// Why a completion text could not be turned into recommendations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpretationError {
    #[error("No JSON array found in completion text")]
    NoJsonArray,

    #[error("JSON array could not be parsed: {0}")]
    InvalidJson(String),
}

/// How a boundary call was cut short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interruption {
    DeadlineExceeded,
    Cancelled,
}

impl std::fmt::Display for Interruption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeadlineExceeded => write!(f, "deadline exceeded"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A tier-level failure. Logged by the orchestrator, never returned to callers.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("Enhanced agent is not configured")]
    AgentNotConfigured,

    #[error("Enhanced agent failed: {0}")]
    AgentFailure(#[from] AgentError),

    #[error("Enhanced agent returned no recommendations")]
    AgentEmpty,

    #[error("Search failed: {0}")]
    SearchFailure(#[from] SearchError),

    #[error("No search candidates to rank")]
    NoCandidates,

    #[error("Completion provider not configured (no API key)")]
    ConfigurationAbsent,

    #[error("Completion failed: {0}")]
    CompletionFailure(#[from] CompletionError),

    #[error("Interpretation failed: {0}")]
    InterpretationFailure(#[from] InterpretationError),

    #[error("Completion produced no recommendations")]
    EmptyInterpretation,

    #[error("{boundary} call interrupted: {reason}")]
    Interrupted {
        boundary: &'static str,
        reason: Interruption,
    },
}

pub type ResolutionOutcome<T> = Result<T, ResolutionError>;
