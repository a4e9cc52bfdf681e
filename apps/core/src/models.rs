use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::analysis::{Category, Priority};

/// A task as submitted for creation, before enrichment.
#[derive(Debug, Serialize, Deserialize, Clone, Validate)]
pub struct NewTask {
    /// The task text.
    #[validate(length(min = 1))]
    pub title: String,
    /// Whether the task starts out completed.
    #[serde(default)]
    pub completed: bool,
    /// Caller-chosen category. Missing or `other` lets the classifier decide.
    #[serde(default)]
    pub category: Option<Category>,
    /// Caller-chosen priority. Missing lets the classifier decide.
    #[serde(default)]
    pub priority: Option<Priority>,
    /// Ignored on creation; the score is always recomputed from the title.
    #[serde(default)]
    pub sentiment_score: Option<i32>,
}

impl NewTask {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            completed: false,
            category: None,
            priority: None,
            sentiment_score: None,
        }
    }
}

/// A partial update to an existing task. Absent fields are left untouched.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq, Validate)]
pub struct TaskUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentiment_score: Option<i32>,
}

/// A new task with every attribute resolved, ready to be stored.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct EnrichedTask {
    pub title: String,
    pub completed: bool,
    pub category: Category,
    pub priority: Priority,
    pub sentiment_score: i32,
}
