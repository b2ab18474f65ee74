use serde::{Deserialize, Serialize};

/// Generation parameters sent with every `generateContent` request.
///
/// An explicit object passed at client construction — never ambient state.
/// Field names serialize in the camelCase form the API expects
/// (`topP`, `maxOutputTokens`, …).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f32,
    pub top_p: f32,
    pub top_k: u32,
    pub max_output_tokens: u32,
    pub response_mime_type: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 50,
            max_output_tokens: 2000,
            response_mime_type: "text/plain".to_string(),
        }
    }
}
