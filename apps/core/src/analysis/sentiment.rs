//! Lexicon-based sentiment scoring.
//!
//! Sums AFINN word weights over the tokens of a text. A weight is negated when
//! the preceding token is a negator ("not good" scores -3). The integer total
//! is bucketed into a five-level assessment.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, LazyLock};
use tracing::debug;

use super::lexicon::PolarityLexicon;

// Characters replaced by spaces before splitting. Apostrophes and hyphens survive.
// NOTE: expect() is acceptable here, the pattern is a compile-time constant.
static PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.,/#!?$%^&*;:{}=_`"~()]"#).expect("Invalid regex: sentiment punctuation")
});

/// Qualitative bucket for a sentiment score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentAssessment {
    #[serde(rename = "very positive")]
    VeryPositive,
    #[serde(rename = "positive")]
    Positive,
    #[serde(rename = "neutral")]
    Neutral,
    #[serde(rename = "negative")]
    Negative,
    #[serde(rename = "very negative")]
    VeryNegative,
}

impl SentimentAssessment {
    /// Bucket a score: >2, >0, <-2, <0, otherwise neutral.
    pub fn from_score(score: i32) -> Self {
        if score > 2 {
            SentimentAssessment::VeryPositive
        } else if score > 0 {
            SentimentAssessment::Positive
        } else if score < -2 {
            SentimentAssessment::VeryNegative
        } else if score < 0 {
            SentimentAssessment::Negative
        } else {
            SentimentAssessment::Neutral
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SentimentAssessment::VeryPositive => "very positive",
            SentimentAssessment::Positive => "positive",
            SentimentAssessment::Neutral => "neutral",
            SentimentAssessment::Negative => "negative",
            SentimentAssessment::VeryNegative => "very negative",
        }
    }
}

impl fmt::Display for SentimentAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Outcome of scoring one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    /// Sum of word weights
    pub score: i32,
    /// Bucketed score
    pub assessment: SentimentAssessment,
    /// Score divided by the number of tokens (0.0 for no tokens)
    pub comparative: f32,
    /// Words that contributed a positive weight, last occurrence first
    pub positive: Vec<String>,
    /// Words that contributed a negative weight, last occurrence first
    pub negative: Vec<String>,
}

impl SentimentResult {
    pub fn neutral() -> Self {
        Self {
            score: 0,
            assessment: SentimentAssessment::Neutral,
            comparative: 0.0,
            positive: vec![],
            negative: vec![],
        }
    }
}

/// Sentiment scorer over a polarity lexicon
#[derive(Debug, Clone)]
pub struct SentimentScorer {
    lexicon: Arc<PolarityLexicon>,
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer {
    /// Create a scorer over the embedded AFINN lexicon
    pub fn new() -> Self {
        Self::with_lexicon(PolarityLexicon::shared_default())
    }

    pub fn with_lexicon(lexicon: Arc<PolarityLexicon>) -> Self {
        Self { lexicon }
    }

    fn tokenize(text: &str) -> Vec<String> {
        let lower = text.to_lowercase();
        PUNCTUATION
            .replace_all(&lower, " ")
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }

    /// Score a text.
    pub fn score(&self, text: &str) -> SentimentResult {
        let tokens = Self::tokenize(text);
        if tokens.is_empty() {
            return SentimentResult::neutral();
        }

        let mut score: i32 = 0;
        let mut positive = Vec::new();
        let mut negative = Vec::new();

        // Walk from the last token; the word lists come out in reverse text order.
        for (i, token) in tokens.iter().enumerate().rev() {
            let Some(mut weight) = self.lexicon.weight(token) else {
                continue;
            };

            if i > 0 && self.lexicon.is_negator(&tokens[i - 1]) {
                weight = weight.saturating_neg();
            }

            if weight > 0 {
                positive.push(token.clone());
            } else if weight < 0 {
                negative.push(token.clone());
            }
            // Extras files may carry arbitrary weights.
            score = score.saturating_add(weight);
        }

        let assessment = SentimentAssessment::from_score(score);
        debug!(score, %assessment, "sentiment scored");

        SentimentResult {
            score,
            assessment,
            comparative: score as f32 / tokens.len() as f32,
            positive,
            negative,
        }
    }
}
