//! TaskSense core.
//!
//! Auto-tags personal tasks with a category, a priority and a sentiment score
//! using keyword and lexicon heuristics, and suggests follow-up tasks.
//! Persistence and transport are left to the caller.

pub mod analysis;
pub mod config;
pub mod enrich;
pub mod error;
pub mod logging;
pub mod models;

#[cfg(test)]
mod tests;

pub use analysis::{
    analyze, classify_category, classify_priority, score_sentiment, suggest_follow_up,
    AnalysisResult, Category, Priority, SentimentAssessment, SentimentResult, Suggestion,
    TaskAnalyzer,
};
pub use config::AppConfig;
pub use error::{AppError, Result};
pub use models::{EnrichedTask, NewTask, TaskUpdate};
