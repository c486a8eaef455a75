/// LLM Client — the single point of entry for all scoring-backend calls
/// in MockPro.
///
/// ARCHITECTURAL RULE: No other module may call the AI gateway directly.
/// All model interactions MUST go through this module.
///
/// Model: google/gemini-2.5-flash (hardcoded — do not make configurable
/// to prevent drift between the rubric prompt and the model it was tuned
/// against).
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GATEWAY_URL: &str = "https://ai.gateway.lovable.dev/v1/chat/completions";
/// The model used for all evaluation calls in MockPro.
pub const MODEL: &str = "google/gemini-2.5-flash";
const TEMPERATURE: f32 = 0.7;
/// Bounded per-request timeout. Each evaluation is exactly one attempt;
/// there is no retry loop, so a hung gateway must fail within this window.
const REQUEST_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    #[error("Request timed out after {REQUEST_TIMEOUT_SECS}s")]
    Timeout,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Http(e)
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ChatResponse {
    pub choices: Vec<Choice>,
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
pub struct ResponseMessage {
    pub content: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

impl ChatResponse {
    /// Extracts the assistant text from the first choice.
    pub fn text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.message.content.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct GatewayError {
    error: GatewayErrorBody,
}

#[derive(Debug, Deserialize)]
struct GatewayErrorBody {
    message: String,
}

/// The single LLM client used by the evaluation service.
/// Wraps an OpenAI-compatible chat-completions gateway. Every call is one
/// independent request: no retries, no caching of identical inputs.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Makes a single chat-completion call and returns the assistant text.
    pub async fn chat(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let request_body = ChatRequest {
            model: MODEL,
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
            temperature: TEMPERATURE,
        };

        let response = self
            .client
            .post(GATEWAY_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Surface the gateway's own message when it sends one
            let message = serde_json::from_str::<GatewayError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let chat_response: ChatResponse = response.json().await.map_err(LlmError::from)?;

        if let Some(usage) = &chat_response.usage {
            debug!(
                "LLM call succeeded: prompt_tokens={}, completion_tokens={}",
                usage.prompt_tokens, usage.completion_tokens
            );
        }

        chat_response
            .text()
            .map(str::to_owned)
            .ok_or(LlmError::EmptyContent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_reads_first_choice() {
        let response = ChatResponse {
            choices: vec![Choice {
                message: ResponseMessage {
                    content: Some("hello".to_string()),
                },
            }],
            usage: None,
        };
        assert_eq!(response.text(), Some("hello"));
    }

    #[test]
    fn test_text_none_when_no_choices() {
        let response = ChatResponse {
            choices: vec![],
            usage: None,
        };
        assert_eq!(response.text(), None);
    }

    #[test]
    fn test_chat_response_deserializes_gateway_shape() {
        let raw = r#"{
            "choices": [{"message": {"role": "assistant", "content": "{\"ok\":true}"}}],
            "usage": {"prompt_tokens": 120, "completion_tokens": 45}
        }"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.text(), Some("{\"ok\":true}"));
        assert_eq!(parsed.usage.unwrap().completion_tokens, 45);
    }
}
