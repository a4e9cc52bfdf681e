//! Analysis Result - Output structure for task text analysis.

use serde::{Deserialize, Serialize};

use super::category::{Category, CategoryScores};
use super::priority::Priority;
use super::sentiment::{SentimentAssessment, SentimentResult};

/// Combined attributes derived from one task text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub category: Category,
    pub priority: Priority,
    /// Qualitative sentiment bucket
    pub sentiment: SentimentAssessment,
    pub sentiment_score: i32,
}

impl Default for AnalysisResult {
    fn default() -> Self {
        Self {
            category: Category::Other,
            priority: Priority::Medium,
            sentiment: SentimentAssessment::Neutral,
            sentiment_score: 0,
        }
    }
}

/// Analysis result with the evidence behind each attribute
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisExplanation {
    #[serde(flatten)]
    pub result: AnalysisResult,
    pub category_scores: CategoryScores,
    pub sentiment_detail: SentimentResult,
}
