//! # Analysis Module
//!
//! Deterministic, keyword and lexicon driven analysis of task text.
//! Runs synchronously on every request; no model, no network.
//!
//! ## Components
//! - `tokenizer` / `stemmer`: lowercase word tokens with Porter stems
//! - `lexicon`: keyword tables and the AFINN polarity lexicon
//! - `category`: loose keyword scoring into work / personal / shopping / other
//! - `priority`: ordered urgency / deferral phrase scan
//! - `sentiment`: polarity sum and assessment buckets
//! - `suggestion`: follow-up task suggestions from existing titles
//! - `result`: output data structures
//! - `analyzer`: main orchestrator

pub mod analyzer;
pub mod category;
pub mod lexicon;
pub mod priority;
pub mod result;
pub mod sentiment;
pub mod stemmer;
pub mod suggestion;
pub mod tokenizer;

use std::sync::LazyLock;

pub use analyzer::TaskAnalyzer;
pub use category::{Category, CategoryClassifier, CategoryScores};
pub use lexicon::{KeywordLexicon, PolarityLexicon};
pub use priority::{Priority, PriorityClassifier};
pub use result::{AnalysisExplanation, AnalysisResult};
pub use sentiment::{SentimentAssessment, SentimentResult, SentimentScorer};
pub use suggestion::{Suggestion, SuggestionGenerator, SuggestionKind};

/// Analyzer over the built-in lexicons, shared by the free functions below.
static DEFAULT_ANALYZER: LazyLock<TaskAnalyzer> = LazyLock::new(TaskAnalyzer::new);

/// Classify a task text into a category using the built-in keywords.
pub fn classify_category(text: &str) -> Category {
    DEFAULT_ANALYZER.classify_category(text)
}

/// Classify the urgency of a task text using the built-in phrases.
pub fn classify_priority(text: &str) -> Priority {
    DEFAULT_ANALYZER.classify_priority(text)
}

/// Score the sentiment of a text with the built-in AFINN lexicon.
pub fn score_sentiment(text: &str) -> SentimentResult {
    DEFAULT_ANALYZER.score_sentiment(text)
}

/// Suggest one follow-up task. Random when no coverage rule applies.
pub fn suggest_follow_up<S: AsRef<str>>(existing_titles: &[S]) -> String {
    DEFAULT_ANALYZER.suggest(existing_titles).text
}

/// Category, priority and sentiment of a task text.
pub fn analyze(text: &str) -> AnalysisResult {
    DEFAULT_ANALYZER.analyze(text)
}
