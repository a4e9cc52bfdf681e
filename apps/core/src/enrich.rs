//! Task enrichment.
//!
//! Fills in the attributes a caller left out of a task draft, using the
//! analyzer. Storage of the result is the caller's business.

use tracing::debug;
use validator::Validate;

use crate::analysis::{Category, TaskAnalyzer};
use crate::error::Result;
use crate::models::{EnrichedTask, NewTask, TaskUpdate};

impl TaskAnalyzer {
    /// Resolve category, priority and sentiment for a task about to be created.
    ///
    /// A missing category, or an explicit `other`, is replaced by the
    /// classifier's pick. A missing priority is classified. The sentiment score
    /// is always recomputed from the title.
    pub fn enrich_new_task(&self, task: NewTask) -> Result<EnrichedTask> {
        task.validate()?;

        let category = match task.category {
            Some(category) if category != Category::Other => category,
            _ => self.classify_category(&task.title),
        };
        let priority = task
            .priority
            .unwrap_or_else(|| self.classify_priority(&task.title));
        let sentiment_score = self.score_sentiment(&task.title).score;

        debug!(%category, %priority, sentiment_score, "new task enriched");

        Ok(EnrichedTask {
            title: task.title,
            completed: task.completed,
            category,
            priority,
            sentiment_score,
        })
    }

    /// Recompute derived attributes for an update that changes the title.
    ///
    /// Updates without a title pass through unchanged. With a title, missing
    /// category and priority are classified and the sentiment score is always
    /// recomputed.
    pub fn enrich_task_update(&self, mut update: TaskUpdate) -> Result<TaskUpdate> {
        update.validate()?;

        let Some(title) = update.title.as_deref() else {
            return Ok(update);
        };

        if update.category.is_none() {
            update.category = Some(self.classify_category(title));
        }
        if update.priority.is_none() {
            update.priority = Some(self.classify_priority(title));
        }
        update.sentiment_score = Some(self.score_sentiment(title).score);

        debug!(?update, "task update enriched");
        Ok(update)
    }
}
