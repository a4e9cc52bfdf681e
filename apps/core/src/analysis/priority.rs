//! Priority classification by ordered phrase scanning.
//!
//! Urgency phrases are checked before deferral phrases; the first hit decides.
//! The medium-priority phrases in the lexicon are never consulted, so `Medium`
//! is only ever the default.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use super::lexicon::KeywordLexicon;
use crate::error::AppError;

/// Task urgency level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Priority {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Priority::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown priority: {}", s)))
    }
}

/// Phrase-based priority classifier
#[derive(Debug, Clone)]
pub struct PriorityClassifier {
    lexicon: Arc<KeywordLexicon>,
}

impl Default for PriorityClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityClassifier {
    pub fn new() -> Self {
        Self::with_lexicon(KeywordLexicon::shared_default())
    }

    pub fn with_lexicon(lexicon: Arc<KeywordLexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify the urgency of a text.
    pub fn classify(&self, text: &str) -> Priority {
        let lower = text.to_lowercase();

        for level in [Priority::High, Priority::Low] {
            if let Some(phrase) = self
                .lexicon
                .priority_phrases(level)
                .iter()
                .find(|phrase| lower.contains(phrase.as_str()))
            {
                debug!(priority = %level, %phrase, "priority phrase matched");
                return level;
            }
        }

        Priority::Medium
    }
}
