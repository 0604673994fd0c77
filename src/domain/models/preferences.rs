//! Caller-supplied recommendation preferences.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported experience level of the person asking for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" | "expert" => Ok(Self::Advanced),
            other => Err(format!(
                "unknown experience level '{other}' (expected beginner, intermediate, or advanced)"
            )),
        }
    }
}

/// Structured preferences that weight a recommendation request.
///
/// Consumed read-only by the prompt builder and the language hint
/// derivation; never mutated or stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    /// Languages and frameworks the user works with, most important first.
    #[serde(default)]
    pub tech_stack: Vec<String>,
    /// Experience level, if known.
    #[serde(default)]
    pub experience_level: Option<ExperienceLevel>,
    /// Topics of interest.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Preferred license family (e.g. "MIT").
    #[serde(default)]
    pub license_preference: Option<String>,
    /// Preferred maintenance activity (e.g. "active").
    #[serde(default)]
    pub activity_preference: Option<String>,
    /// Preferred project size (e.g. "small").
    #[serde(default)]
    pub size_preference: Option<String>,
}

impl UserPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tech_stack<I, S>(mut self, stack: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_stack = stack.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_experience_level(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    pub fn with_interests<I, S>(mut self, interests: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.interests = interests.into_iter().map(Into::into).collect();
        self
    }

    /// First tech-stack entry, used as a language hint of last resort.
    pub fn primary_stack_entry(&self) -> Option<&str> {
        self.tech_stack
            .first()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }
}
