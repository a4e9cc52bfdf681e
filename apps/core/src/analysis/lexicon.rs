//! Keyword and polarity lexicons.
//!
//! Both lexicons are immutable once built. The built-in defaults are compiled
//! into the binary; custom lexicons can be read from JSON files and are shared
//! between classifiers through `Arc`.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::{Arc, LazyLock};
use tracing::{error, info};

use super::category::Category;
use super::priority::Priority;
use crate::error::Result;

const WORK_KEYWORDS: &[&str] = &[
    "meeting",
    "project",
    "deadline",
    "report",
    "client",
    "presentation",
    "email",
    "call",
    "boss",
    "colleague",
];

const PERSONAL_KEYWORDS: &[&str] = &[
    "health",
    "exercise",
    "family",
    "friend",
    "hobby",
    "home",
    "self",
    "life",
    "doctor",
    "appointment",
];

const SHOPPING_KEYWORDS: &[&str] = &[
    "buy", "purchase", "shop", "store", "grocery", "item", "list", "cart", "online", "order",
    "deliver",
];

const HIGH_PRIORITY_PHRASES: &[&str] = &[
    "urgent",
    "important",
    "critical",
    "asap",
    "deadline",
    "tomorrow",
    "today",
    "soon",
    "immediately",
    "emergency",
];

// Defined for completeness; the priority decision never reads this list.
const MEDIUM_PRIORITY_PHRASES: &[&str] = &[
    "next week",
    "this week",
    "soon",
    "follow up",
    "check",
    "review",
];

const LOW_PRIORITY_PHRASES: &[&str] = &[
    "sometime",
    "when possible",
    "eventually",
    "later",
    "consider",
    "maybe",
    "if time",
];

/// Tokens that flip the polarity of the word that follows them.
const NEGATORS: &[&str] = &[
    "cant", "can't", "dont", "don't", "doesnt", "doesn't", "not", "non", "wont", "won't", "isnt",
    "isn't",
];

/// AFINN-165 word weights.
const AFINN_JSON: &str = include_str!("../../data/afinn-165.json");

static DEFAULT_KEYWORD_LEXICON: LazyLock<Arc<KeywordLexicon>> =
    LazyLock::new(|| Arc::new(KeywordLexicon::builtin()));

static DEFAULT_POLARITY_LEXICON: LazyLock<Arc<PolarityLexicon>> =
    LazyLock::new(|| Arc::new(PolarityLexicon::builtin()));

fn to_owned_list(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

/// Keyword lists per scoring category. `other` has no list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryKeywords {
    pub work: Vec<String>,
    pub personal: Vec<String>,
    pub shopping: Vec<String>,
}

/// Phrase lists per priority level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityKeywords {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

/// Keyword configuration for the category and priority classifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordLexicon {
    pub categories: CategoryKeywords,
    pub priorities: PriorityKeywords,
}

impl KeywordLexicon {
    /// The built-in keyword tables.
    pub fn builtin() -> Self {
        Self {
            categories: CategoryKeywords {
                work: to_owned_list(WORK_KEYWORDS),
                personal: to_owned_list(PERSONAL_KEYWORDS),
                shopping: to_owned_list(SHOPPING_KEYWORDS),
            },
            priorities: PriorityKeywords {
                high: to_owned_list(HIGH_PRIORITY_PHRASES),
                medium: to_owned_list(MEDIUM_PRIORITY_PHRASES),
                low: to_owned_list(LOW_PRIORITY_PHRASES),
            },
        }
    }

    /// Shared handle to the process-wide built-in lexicon.
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_KEYWORD_LEXICON)
    }

    /// Parse a lexicon from JSON. Keywords are lowercased; lists left out are empty.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut lexicon: KeywordLexicon = serde_json::from_str(json)?;
        lexicon.normalize();
        Ok(lexicon)
    }

    /// Read and parse a lexicon file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let lexicon = Self::from_json(&raw)?;
        info!(
            "Loaded keyword lexicon from {} ({} category keywords)",
            path.display(),
            lexicon.categories.work.len()
                + lexicon.categories.personal.len()
                + lexicon.categories.shopping.len()
        );
        Ok(lexicon)
    }

    /// Keywords scored for a category. Always empty for `Category::Other`.
    pub fn category_keywords(&self, category: Category) -> &[String] {
        match category {
            Category::Work => &self.categories.work,
            Category::Personal => &self.categories.personal,
            Category::Shopping => &self.categories.shopping,
            Category::Other => &[],
        }
    }

    /// Phrases declared for a priority level.
    pub fn priority_phrases(&self, priority: Priority) -> &[String] {
        match priority {
            Priority::High => &self.priorities.high,
            Priority::Medium => &self.priorities.medium,
            Priority::Low => &self.priorities.low,
        }
    }

    // Empty keywords would match every token as a substring.
    fn normalize(&mut self) {
        for list in [
            &mut self.categories.work,
            &mut self.categories.personal,
            &mut self.categories.shopping,
            &mut self.priorities.high,
            &mut self.priorities.medium,
            &mut self.priorities.low,
        ] {
            list.retain(|k| !k.trim().is_empty());
            for keyword in list.iter_mut() {
                *keyword = keyword.trim().to_lowercase();
            }
        }
    }
}

/// Word → weight table plus the negator set used by the sentiment scorer.
#[derive(Debug, Clone, Default)]
pub struct PolarityLexicon {
    weights: HashMap<String, i32>,
    negators: HashSet<String>,
}

impl PolarityLexicon {
    /// The embedded AFINN weights with the English negators.
    ///
    /// A corrupt embedded table degrades to an empty lexicon: every score is 0.
    pub fn builtin() -> Self {
        let weights = match serde_json::from_str::<HashMap<String, i32>>(AFINN_JSON) {
            Ok(weights) => weights,
            Err(e) => {
                error!("Embedded polarity lexicon is invalid, sentiment disabled: {}", e);
                HashMap::new()
            }
        };
        Self::new(weights, NEGATORS.iter().map(|n| n.to_string()).collect())
    }

    /// Build a lexicon from explicit tables.
    pub fn new(weights: HashMap<String, i32>, negators: HashSet<String>) -> Self {
        let weights = weights
            .into_iter()
            .map(|(word, weight)| (word.to_lowercase(), weight))
            .collect();
        Self { weights, negators }
    }

    /// Shared handle to the process-wide built-in lexicon.
    pub fn shared_default() -> Arc<Self> {
        Arc::clone(&DEFAULT_POLARITY_LEXICON)
    }

    /// Copy of this lexicon with `extras` overriding or adding word weights.
    pub fn with_extras(&self, extras: HashMap<String, i32>) -> Self {
        let mut merged = self.clone();
        for (word, weight) in extras {
            merged.weights.insert(word.to_lowercase(), weight);
        }
        merged
    }

    /// Read a JSON object of word → weight overrides.
    pub fn read_extras(path: &Path) -> Result<HashMap<String, i32>> {
        let raw = fs::read_to_string(path)?;
        let extras: HashMap<String, i32> = serde_json::from_str(&raw)?;
        info!("Loaded {} sentiment overrides from {}", extras.len(), path.display());
        Ok(extras)
    }

    pub fn weight(&self, word: &str) -> Option<i32> {
        self.weights.get(word).copied()
    }

    pub fn is_negator(&self, word: &str) -> bool {
        self.negators.contains(word)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_keyword_tables() {
        let lexicon = KeywordLexicon::builtin();
        assert_eq!(lexicon.category_keywords(Category::Work).len(), 10);
        assert_eq!(lexicon.category_keywords(Category::Shopping).len(), 11);
        assert!(lexicon.category_keywords(Category::Other).is_empty());
        assert_eq!(lexicon.priority_phrases(Priority::High)[0], "urgent");
        assert!(lexicon
            .priority_phrases(Priority::Medium)
            .contains(&"follow up".to_string()));
    }

    #[test]
    fn test_partial_json_lexicon() {
        let lexicon =
            KeywordLexicon::from_json(r#"{"categories": {"work": ["Standup", "  ", "sprint"]}}"#)
                .unwrap();
        assert_eq!(lexicon.categories.work, vec!["standup", "sprint"]);
        assert!(lexicon.categories.personal.is_empty());
        assert!(lexicon.priorities.high.is_empty());
    }

    #[test]
    fn test_invalid_json_lexicon() {
        assert!(KeywordLexicon::from_json("[1, 2").is_err());
    }

    #[test]
    fn test_embedded_polarity_lexicon_parses() {
        let lexicon = PolarityLexicon::builtin();
        assert!(!lexicon.is_empty());
        assert_eq!(lexicon.weight("love"), Some(3));
        assert_eq!(lexicon.weight("wonderful"), Some(4));
        assert_eq!(lexicon.weight("bad"), Some(-3));
        assert_eq!(lexicon.weight("table"), None);
        assert!(lexicon.len() > 3000);
        assert!(lexicon.is_negator("don't"));
        assert!(!lexicon.is_negator("do"));
    }

    #[test]
    fn test_embedded_polarity_lexicon_covers_afinn() {
        let lexicon = PolarityLexicon::builtin();
        let expected = [
            ("problems", -2),
            ("kill", -3),
            ("cancel", -1),
            ("pay", -1),
            ("gift", 2),
            ("outstanding", 5),
            ("bastard", -5),
            ("help", 2),
            ("stuck", -2),
            ("postponed", -1),
        ];
        for (word, weight) in expected {
            assert_eq!(lexicon.weight(word), Some(weight), "weight of '{}'", word);
        }
    }

    #[test]
    fn test_extras_override_weights() {
        let base = PolarityLexicon::builtin();
        let mut extras = HashMap::new();
        extras.insert("Deadline".to_string(), -2);
        extras.insert("love".to_string(), 1);
        let merged = base.with_extras(extras);
        assert_eq!(merged.weight("deadline"), Some(-2));
        assert_eq!(merged.weight("love"), Some(1));
        assert_eq!(base.weight("love"), Some(3));
    }
}
