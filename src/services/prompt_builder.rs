//! Prompt construction for the completion tier.
//!
//! Pure functions: identical inputs always produce identical prompts.

use std::fmt::Write as _;

use crate::domain::models::{PromptMessage, RepositoryCandidate, UserPreferences};

/// Candidates listed in a prompt, at most.
pub const PROMPT_CANDIDATE_LIMIT: usize = 5;

const ADVISOR_ROLE: &str = "You are an expert open-source advisor who recommends GitHub repositories. \
Prioritize well-maintained, popular repositories that match the user's tech stack and experience level.";

const OUTPUT_CONTRACT: &str =
    "Respond only with a JSON array of objects, each with \"name\", \"description\", and \"reason\" fields.";

const NOT_SPECIFIED: &str = "not specified";
const NO_DESCRIPTION: &str = "No description provided";

/// Build the two-message prompt: system instruction, then user request.
///
/// The system message carries the advisor role, the user's preferences when
/// given, and the output contract. The user message carries the query and up
/// to [`PROMPT_CANDIDATE_LIMIT`] numbered candidates in their given order.
pub fn build_prompt(
    query: &str,
    candidates: &[RepositoryCandidate],
    preferences: Option<&UserPreferences>,
) -> [PromptMessage; 2] {
    [
        PromptMessage::system(system_instruction(preferences)),
        PromptMessage::user(user_request(query, candidates)),
    ]
}

fn system_instruction(preferences: Option<&UserPreferences>) -> String {
    let mut text = String::from(ADVISOR_ROLE);

    if let Some(prefs) = preferences {
        let experience = prefs
            .experience_level
            .map_or_else(|| NOT_SPECIFIED.to_string(), |level| level.to_string());
        let _ = write!(
            text,
            "\n\nUser's tech stack: {}\nExperience level: {}\nInterests: {}",
            join_or_unspecified(&prefs.tech_stack),
            experience,
            join_or_unspecified(&prefs.interests),
        );
    }

    text.push_str("\n\n");
    text.push_str(OUTPUT_CONTRACT);
    text
}

fn user_request(query: &str, candidates: &[RepositoryCandidate]) -> String {
    let mut text = format!("Find repositories for: {query}\n\nCandidate repositories:");

    for (index, candidate) in candidates.iter().take(PROMPT_CANDIDATE_LIMIT).enumerate() {
        let description = match candidate.description_or_empty() {
            "" => NO_DESCRIPTION,
            d => d,
        };
        let _ = write!(
            text,
            "\n{}. {} ({} stars) - {}",
            index + 1,
            candidate.full_name,
            candidate.stars,
            description
        );
    }

    text.push_str("\n\nPick the top 3 repositories for this query and explain why each one fits.");
    text
}

fn join_or_unspecified(items: &[String]) -> String {
    let joined = items
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    if joined.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        joined
    }
}
