// src/client.rs
use std::time::Duration;

use reqwest::Client;

use crate::config::ResolvedConfig;
use crate::error::ClientError;
use crate::types::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

/// Hard cap on how much of a response body is read. Everything past it is
/// discarded; a well-formed completion is nowhere near this size.
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// How much of an unparseable body makes it into error messages.
const PREVIEW_CHARS: usize = 500;

pub struct LlmClient {
    http: Client,
    endpoint: String,
    api_key: String,
    model: String,
    timeout_secs: u64,
}

impl LlmClient {
    /// The request deadline comes from `ai-commit.timeoutSeconds` and covers
    /// the whole exchange, connect included.
    pub fn new(config: &ResolvedConfig) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ClientError::Network)?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    /// One POST to the chat-completions endpoint: a system message, a user
    /// message, and the first choice of the answer back. No retries, no
    /// streaming.
    pub async fn chat(&self, system: &str, user: &str) -> Result<String, ClientError> {
        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
        };

        let mut builder = self
            .http
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(&request);
        if !self.api_key.is_empty() {
            builder = builder.header("Authorization", format!("Bearer {}", self.api_key));
        }

        log::debug!("POST {} (model {})", self.endpoint, self.model);
        let response = builder.send().await.map_err(|e| self.request_error(e))?;
        let status = response.status();
        let body = self.read_body_capped(response).await?;
        log::debug!("HTTP {status}, {} body bytes", body.len());

        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                message: error_message(&body).unwrap_or_else(|| preview(&body)),
            });
        }

        let parsed: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| ClientError::MalformedResponse {
                source: e,
                preview: preview(&body),
            })?;
        // Some servers report failures in the envelope with a 200 status.
        if let Some(error) = parsed.error {
            if let Some(message) = error.message.filter(|m| !m.trim().is_empty()) {
                log::debug!(
                    "API error type: {}",
                    error.kind.as_deref().unwrap_or("unknown")
                );
                return Err(ClientError::Api { message });
            }
        }
        let first = parsed.choices.first().ok_or(ClientError::NoChoices)?;
        Ok(first.message.content.clone().unwrap_or_default())
    }

    async fn read_body_capped(&self, mut response: reqwest::Response) -> Result<String, ClientError> {
        let mut buf: Vec<u8> = Vec::new();
        while let Some(chunk) = response.chunk().await.map_err(|e| self.request_error(e))? {
            let room = MAX_RESPONSE_BYTES - buf.len();
            if chunk.len() >= room {
                buf.extend_from_slice(&chunk[..room]);
                break;
            }
            buf.extend_from_slice(&chunk);
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn request_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout {
                seconds: self.timeout_secs,
            }
        } else {
            ClientError::Network(err)
        }
    }
}

/// Message from an OpenAI-style error envelope, if the body carries one.
fn error_message(body: &str) -> Option<String> {
    let parsed: ChatCompletionResponse = serde_json::from_str(body).ok()?;
    parsed
        .error
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
}

fn preview(body: &str) -> String {
    body.trim().chars().take(PREVIEW_CHARS).collect()
}
