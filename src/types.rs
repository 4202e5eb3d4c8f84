// src/types.rs
use serde::{Deserialize, Serialize};

// =============================================================================
// CHAT COMPLETIONS WIRE TYPES
// =============================================================================
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// Response envelope. OpenAI-compatible servers put an `error` object here
/// on failure, sometimes even alongside a 200, so both halves are optional.
#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    pub error: Option<ApiErrorDetail>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
pub struct ChatMessageResponse {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub message: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_model_and_messages() {
        let request = ChatCompletionRequest {
            model: "gpt-5-nano".to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: "be brief".to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: "diff goes here".to_string(),
                },
            ],
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"model\":\"gpt-5-nano\""));
        assert!(json.contains("\"role\":\"system\""));
        assert!(json.contains("\"content\":\"diff goes here\""));
    }

    #[test]
    fn response_deserializes_choices() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"fix: x"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices.len(), 1);
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("fix: x")
        );
        assert!(response.error.is_none());
    }

    #[test]
    fn response_tolerates_missing_choices() {
        let json = r#"{"error":{"message":"Invalid API key","type":"invalid_request_error"}}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(response.choices.is_empty());
        let error = response.error.unwrap();
        assert_eq!(error.message.as_deref(), Some("Invalid API key"));
        assert_eq!(error.kind.as_deref(), Some("invalid_request_error"));
    }

    #[test]
    fn response_tolerates_null_content() {
        let json = r#"{"choices":[{"message":{"content":null}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(response.choices[0].message.content.is_none());
    }

    #[test]
    fn response_ignores_unknown_fields() {
        let json = r#"{"id":"chatcmpl-1","object":"chat.completion","usage":{"total_tokens":9},"choices":[{"index":0,"finish_reason":"stop","message":{"role":"assistant","content":"ok"}}]}"#;
        let response: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.choices[0].message.content.as_deref(), Some("ok"));
    }
}
