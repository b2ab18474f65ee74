//! Live integration test against the real Gemini API.
//!
//! Requires a valid key in `GEMINI_API_KEY`.
//!
//! Run with: `cargo test -p lektio-gemini --test generate_live -- --ignored`

use lektio_core::models::plan::LessonPlanRequest;
use lektio_gemini::{DEFAULT_MODEL, GeminiClient, GenerationConfig};

fn build_client() -> GeminiClient {
    let api_key = std::env::var("GEMINI_API_KEY").expect("GEMINI_API_KEY must be set");
    GeminiClient::new(api_key, DEFAULT_MODEL, GenerationConfig::default())
}

#[test]
#[ignore]
fn generate_lesson_plan_returns_markdown_subset() {
    let client = build_client();
    let request = LessonPlanRequest::new(
        "Unit 1: Introduction to Artificial Intelligence. Topics: history of AI, \
         search strategies, knowledge representation. Total: 3 hours.",
    );
    request.validate().expect("request should validate");

    let plan = client
        .generate_lesson_plan(&request)
        .expect("generation should succeed");

    assert_eq!(plan.model_id, DEFAULT_MODEL);
    assert!(!plan.text.trim().is_empty());
    // The prompt pins the output grammar; a real plan carries at least one
    // session heading and one pipe table.
    assert!(plan.text.contains("**Session"), "no session headings:\n{}", plan.text);
    assert!(plan.text.contains('|'), "no pipe tables:\n{}", plan.text);
}

#[test]
#[ignore]
fn bad_api_key_surfaces_api_error() {
    let client = GeminiClient::new("invalid-key", DEFAULT_MODEL, GenerationConfig::default());
    let err = client.generate("hello").expect_err("should fail");
    assert!(matches!(err, lektio_gemini::GeminiError::Api { .. }), "{err}");
}
