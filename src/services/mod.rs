//! Service layer: the recommendation pipeline.
//!
//! Every service talks to the outside world only through the port traits
//! in [`crate::domain::ports`].

pub mod call_budget;
pub mod candidate_search;
pub mod completion_invoker;
pub mod heuristic;
pub mod orchestrator;
pub mod prompt_builder;
pub mod response_interpreter;

pub use call_budget::CallBudget;
pub use candidate_search::{detect_language, CandidateSearch};
pub use completion_invoker::CompletionInvoker;
pub use heuristic::{fallback_rank, heuristic_reason};
pub use orchestrator::RecommendationOrchestrator;
pub use prompt_builder::build_prompt;
pub use response_interpreter::{extract_json_array, interpret, locate_json_array};
