//! Blocking Gemini `generateContent` client.
//!
//! The whole pipeline is synchronous by design: one user action → one
//! model call → one render. `ureq` keeps that model without dragging in
//! an async runtime.

use serde::{Deserialize, Serialize};
use tracing::info;

use lektio_core::models::plan::{LessonPlan, LessonPlanRequest};

use crate::config::GenerationConfig;
use crate::error::GeminiError;
use crate::prompt::build_lesson_plan_prompt;

/// Default model for lesson-plan generation.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A configured Gemini client. Credentials and generation parameters are
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    api_key: String,
    model_id: String,
    config: GenerationConfig,
}

impl GeminiClient {
    pub fn new(
        api_key: impl Into<String>,
        model_id: impl Into<String>,
        config: GenerationConfig,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            model_id: model_id.into(),
            config,
        }
    }

    pub fn model_id(&self) -> &str {
        &self.model_id
    }

    /// Generate a lesson plan for a validated request.
    pub fn generate_lesson_plan(
        &self,
        request: &LessonPlanRequest,
    ) -> Result<LessonPlan, GeminiError> {
        let prompt = build_lesson_plan_prompt(&request.syllabus);
        let text = self.generate(&prompt)?;
        Ok(LessonPlan {
            model_id: self.model_id.clone(),
            text,
        })
    }

    /// Send one `generateContent` request and return the first candidate's
    /// text, trimmed.
    pub fn generate(&self, prompt: &str) -> Result<String, GeminiError> {
        let url = format!("{API_BASE}/models/{}:generateContent", self.model_id);
        let request = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.config.clone(),
        };

        info!(model_id = %self.model_id, "sending generateContent request");

        let mut response = ureq::post(&url)
            .config()
            .http_status_as_error(false)
            .build()
            .header("x-goog-api-key", self.api_key.as_str())
            .send_json(&request)
            .map_err(|e| GeminiError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .body_mut()
                .read_to_string()
                .unwrap_or_default();
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message: extract_api_error(&body),
            });
        }

        let parsed: GenerateContentResponse = response
            .body_mut()
            .read_json()
            .map_err(|e| GeminiError::ResponseParse(e.to_string()))?;

        let candidate = parsed
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| GeminiError::ResponseParse("no candidates in response".to_string()))?;

        let text = candidate
            .content
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            let reason = candidate
                .finish_reason
                .unwrap_or_else(|| "unknown".to_string());
            return Err(GeminiError::ResponseParse(format!(
                "candidate contained no text (finish reason: {reason})"
            )));
        }

        info!(chars = text.len(), "lesson plan generated");

        Ok(text.trim().to_string())
    }
}

/// Pull the human-readable message out of an API error body, falling back
/// to the raw body when it isn't the documented `{"error": {"message"}}`
/// shape.
fn extract_api_error(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|envelope| envelope.error.message)
        .unwrap_or_else(|_| body.to_string())
}

// ── Wire types ───────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<RequestContent>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct RequestContent {
    role: &'static str,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}
