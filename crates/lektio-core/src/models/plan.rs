use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A single lesson-plan generation request: the free-text syllabus details
/// for one unit, exactly as the user typed them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonPlanRequest {
    pub syllabus: String,
}

impl LessonPlanRequest {
    pub fn new(syllabus: impl Into<String>) -> Self {
        Self {
            syllabus: syllabus.into(),
        }
    }

    /// Reject empty or whitespace-only syllabus details before any model
    /// call is made. The renderer itself accepts empty input (it produces
    /// an empty document), so this guard belongs to the caller.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.syllabus.trim().is_empty() {
            return Err(CoreError::EmptySyllabus);
        }
        Ok(())
    }
}

/// A generated lesson plan: the model's markdown-subset text plus the
/// model that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonPlan {
    pub model_id: String,
    /// Newline-separated source text in the constrained markdown subset
    /// (pipe tables, `**bold**` headings, `* ` bullets, plain paragraphs).
    pub text: String,
}
