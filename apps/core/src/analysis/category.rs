//! Category classification by loose keyword matching.
//!
//! Every token (and its stem) is compared to each category's keyword list in
//! both substring directions, so "meetings", "meet" and "meeting" all count
//! toward `work`. The category with the strictly highest score wins; ties go
//! to the category declared first.

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

use super::lexicon::KeywordLexicon;
use super::tokenizer::{self, Token};
use crate::error::AppError;

/// Task category. Declaration order is the tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Work,
    Personal,
    Shopping,
    /// Fallback when no keyword matched. Never scored.
    Other,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Work,
        Category::Personal,
        Category::Shopping,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Work => "work",
            Category::Personal => "personal",
            Category::Shopping => "shopping",
            Category::Other => "other",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Category::Work => 0,
            Category::Personal => 1,
            Category::Shopping => 2,
            Category::Other => 3,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::Validation(format!("Unknown category: {}", s)))
    }
}

/// Per-category match counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryScores {
    counts: [u32; 4],
}

// Serialized as {"work": n, "personal": n, ...}.
impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.counts.len()))?;
        for (category, score) in self.iter() {
            map.serialize_entry(category.label(), &score)?;
        }
        map.end()
    }
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> u32 {
        self.counts[category.index()]
    }

    fn increment(&mut self, category: Category) {
        self.counts[category.index()] += 1;
    }

    /// Scores paired with their category, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    /// Highest-scoring category; first in declaration order on ties, `Other` when all are zero.
    pub fn best(&self) -> Category {
        let mut best = Category::Other;
        let mut best_score = 0;

        for (category, score) in self.iter() {
            if score > best_score {
                best_score = score;
                best = category;
            }
        }

        best
    }
}

/// Keyword-based category classifier.
#[derive(Debug, Clone)]
pub struct CategoryClassifier {
    lexicon: Arc<KeywordLexicon>,
}

impl Default for CategoryClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryClassifier {
    /// Create a classifier over the built-in keyword lexicon
    pub fn new() -> Self {
        Self::with_lexicon(KeywordLexicon::shared_default())
    }

    /// Create a classifier over a custom lexicon
    pub fn with_lexicon(lexicon: Arc<KeywordLexicon>) -> Self {
        Self { lexicon }
    }

    /// Classify a text into one category.
    pub fn classify(&self, text: &str) -> Category {
        let scores = self.scores(text);
        let category = scores.best();
        debug!(?category, ?scores, "category classified");
        category
    }

    /// Score every category against a text.
    pub fn scores(&self, text: &str) -> CategoryScores {
        let tokens = tokenizer::tokenize(text);
        let mut scores = CategoryScores::default();

        for token in &tokens {
            for category in Category::ALL {
                let keywords = self.lexicon.category_keywords(category);
                if keywords.iter().any(|keyword| loosely_matches(token, keyword)) {
                    scores.increment(category);
                }
            }
        }

        scores
    }
}

/// Substring containment in either direction, on the surface form or the stem.
fn loosely_matches(token: &Token, keyword: &str) -> bool {
    keyword.contains(token.word.as_str())
        || token.word.contains(keyword)
        || keyword.contains(token.stem.as_str())
        || token.stem.contains(keyword)
}
