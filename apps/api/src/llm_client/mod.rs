//! LLM client: the single point of entry for all OpenAI API calls in Compass.
//!
//! ARCHITECTURAL RULE: No other module may call the OpenAI API directly.
//! All LLM interactions MUST go through this module.
//!
//! Model: gpt-4o (hardcoded, do not make configurable to prevent drift)

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
/// The model used for all LLM calls in Compass.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gpt-4o";
const MAX_TOKENS: u32 = 4096;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The API rejected the request for quota or billing reasons.
    /// Surfaced separately so callers can show an actionable message.
    #[error("Quota exceeded: {0}")]
    Quota(String),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat<'a>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat<'a> {
    #[serde(rename = "type")]
    format_type: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the text content of the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct OpenAiError {
    error: OpenAiErrorBody,
}

#[derive(Debug, Deserialize)]
struct OpenAiErrorBody {
    message: String,
    #[serde(rename = "type")]
    error_type: Option<String>,
    code: Option<String>,
}

/// The single LLM client used by all services in Compass.
/// Wraps the chat completions API with structured JSON output helpers.
/// Calls are single-shot: the advisor flow has no retry or backoff.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single call to the chat completions API in JSON mode,
    /// returning the full response object.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<ChatResponse, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_api_error(status.as_u16(), &body));
        }

        let chat_response: ChatResponse = response.json().await?;

        debug!(
            "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
            chat_response.usage.prompt_tokens, chat_response.usage.completion_tokens
        );

        Ok(chat_response)
    }

    /// Convenience method that calls the LLM and deserializes the text response as JSON.
    /// The prompt must instruct the model to return valid JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, LlmError> {
        let response = self.call(prompt, system).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(LlmError::Parse)
    }
}

/// Maps a non-success API response to an `LlmError`, separating quota/billing
/// rejections (402, or error type/code `insufficient_quota`) from other failures.
fn classify_api_error(status: u16, body: &str) -> LlmError {
    let parsed = serde_json::from_str::<OpenAiError>(body).ok();

    let message = parsed
        .as_ref()
        .map(|e| e.error.message.clone())
        .unwrap_or_else(|| body.to_string());

    let quota_marker = parsed.as_ref().is_some_and(|e| {
        e.error.error_type.as_deref() == Some("insufficient_quota")
            || e.error.code.as_deref() == Some("insufficient_quota")
    });

    if status == 402 || quota_marker {
        LlmError::Quota(message)
    } else {
        LlmError::Api { status, message }
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_chat_response_text_extraction() {
        let json = r#"{
            "choices": [{"message": {"content": "{\"ok\": true}"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5}
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text(), Some("{\"ok\": true}"));
    }

    #[test]
    fn test_classify_insufficient_quota_as_quota_error() {
        let body = r#"{"error": {"message": "You exceeded your current quota", "type": "insufficient_quota", "code": "insufficient_quota"}}"#;
        match classify_api_error(429, body) {
            LlmError::Quota(msg) => assert!(msg.contains("quota")),
            other => panic!("expected Quota, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_402_as_quota_error() {
        let body = r#"{"error": {"message": "Payment required", "type": "billing", "code": null}}"#;
        assert!(matches!(classify_api_error(402, body), LlmError::Quota(_)));
    }

    #[test]
    fn test_classify_plain_429_as_api_error() {
        let body = r#"{"error": {"message": "Rate limit reached", "type": "rate_limit_error", "code": null}}"#;
        match classify_api_error(429, body) {
            LlmError::Api { status, message } => {
                assert_eq!(status, 429);
                assert!(message.contains("Rate limit"));
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }

    #[test]
    fn test_classify_unparseable_body_keeps_raw_text() {
        match classify_api_error(500, "upstream exploded") {
            LlmError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "upstream exploded");
            }
            other => panic!("expected Api, got {other:?}"),
        }
    }
}
