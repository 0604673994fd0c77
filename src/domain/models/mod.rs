pub mod candidate;
pub mod config;
pub mod preferences;
pub mod prompt;
pub mod recommendation;

pub use candidate::RepositoryCandidate;
pub use config::{
    AgentConfig, CompletionConfig, Config, LogFormat, LoggingConfig, ResolutionConfig,
    RotationPolicy, SearchConfig,
};
pub use preferences::{ExperienceLevel, UserPreferences};
pub use prompt::{GenerationParameters, PromptMessage, Role};
pub use recommendation::{
    Recommendation, RecommendationSource, ResolutionResult, MAX_RECOMMENDATIONS,
};
