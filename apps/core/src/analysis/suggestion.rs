//! Follow-up task suggestions.
//!
//! Looks at which categories the existing tasks cover and proposes the first
//! missing routine task. When no rule applies, a generic suggestion is drawn
//! at random so that asking again gives a different answer.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::{Category, CategoryClassifier};

pub const ONBOARDING_SUGGESTION: &str = "Add your first task!";
pub const FOLLOW_UP_SUGGESTION: &str = "Follow up on previous work tasks";
pub const EXERCISE_SUGGESTION: &str = "Schedule exercise time";
pub const GROCERY_SUGGESTION: &str = "Create grocery shopping list";

/// Generic suggestions used when no coverage rule applies
pub const SHUFFLE_POOL: &[&str] = &[
    "Plan your next week's tasks",
    "Set a reminder for upcoming deadlines",
    "Check in with team members",
    "Review your goals for this month",
    "Organize your workspace",
];

/// Which rule produced a suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    /// No tasks exist yet
    Onboarding,
    /// Work tasks exist but none mentions "follow up"
    FollowUp,
    /// Personal tasks exist but none mentions "exercise"
    Exercise,
    /// Shopping tasks exist but none mentions "grocery"
    Grocery,
    /// Random pick from the generic pool
    Shuffle,
}

/// A suggested task and the rule behind it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub text: String,
    pub kind: SuggestionKind,
}

impl Suggestion {
    fn new(text: &str, kind: SuggestionKind) -> Self {
        Self {
            text: text.to_string(),
            kind,
        }
    }
}

/// Coverage rules, checked in order. (category, marker phrase, suggestion, kind)
const COVERAGE_RULES: &[(Category, &str, &str, SuggestionKind)] = &[
    (
        Category::Work,
        "follow up",
        FOLLOW_UP_SUGGESTION,
        SuggestionKind::FollowUp,
    ),
    (
        Category::Personal,
        "exercise",
        EXERCISE_SUGGESTION,
        SuggestionKind::Exercise,
    ),
    (
        Category::Shopping,
        "grocery",
        GROCERY_SUGGESTION,
        SuggestionKind::Grocery,
    ),
];

/// Suggestion generator built on the category classifier
#[derive(Debug, Clone, Default)]
pub struct SuggestionGenerator {
    classifier: CategoryClassifier,
}

impl SuggestionGenerator {
    pub fn new(classifier: CategoryClassifier) -> Self {
        Self { classifier }
    }

    /// Suggest a follow-up task, drawing the fallback from `rng`.
    ///
    /// Not deterministic unless `rng` is: the shuffle fallback is meant to vary
    /// between calls.
    pub fn suggest_with_rng<S, R>(&self, titles: &[S], rng: &mut R) -> Suggestion
    where
        S: AsRef<str>,
        R: Rng + ?Sized,
    {
        if titles.is_empty() {
            return Suggestion::new(ONBOARDING_SUGGESTION, SuggestionKind::Onboarding);
        }

        let mut present = [false; Category::ALL.len()];
        for title in titles {
            present[self.classifier.classify(title.as_ref()).index()] = true;
        }
        debug!(
            work = present[Category::Work.index()],
            personal = present[Category::Personal.index()],
            shopping = present[Category::Shopping.index()],
            "suggestion coverage"
        );

        for (category, marker, text, kind) in COVERAGE_RULES {
            // Case-sensitive on the raw title.
            if present[category.index()] && !titles.iter().any(|t| t.as_ref().contains(marker)) {
                return Suggestion::new(text, *kind);
            }
        }

        let text = SHUFFLE_POOL
            .choose(rng)
            .copied()
            .unwrap_or(SHUFFLE_POOL[0]);
        Suggestion::new(text, SuggestionKind::Shuffle)
    }

    /// Suggest a follow-up task using the thread-local RNG.
    pub fn suggest<S: AsRef<str>>(&self, titles: &[S]) -> Suggestion {
        self.suggest_with_rng(titles, &mut rand::thread_rng())
    }
}
