use lektio_gemini::GenerationConfig;

#[test]
fn defaults_match_the_shipping_tool() {
    let config = GenerationConfig::default();
    assert_eq!(config.temperature, 0.7);
    assert_eq!(config.top_p, 0.95);
    assert_eq!(config.top_k, 50);
    assert_eq!(config.max_output_tokens, 2000);
    assert_eq!(config.response_mime_type, "text/plain");
}

/// The API expects camelCase keys inside `generationConfig`.
#[test]
fn config_serializes_to_camel_case() {
    let value = serde_json::to_value(GenerationConfig::default()).expect("serialize");
    let object = value.as_object().expect("object");
    assert!(object.contains_key("topP"));
    assert!(object.contains_key("topK"));
    assert!(object.contains_key("maxOutputTokens"));
    assert!(object.contains_key("responseMimeType"));
}
