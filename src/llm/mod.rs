//! LLM integration for Interview Assist.
//!
//! The service treats the model as an opaque function: system prompt and user
//! prompt in, text out. The concrete provider speaks the OpenAI
//! chat-completions API over `reqwest`; everything above it depends only on
//! the `LlmProvider` trait so tests can swap in a canned implementation.

pub mod speech;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::LlmError;

const CHAT_COMPLETIONS_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Configuration for creating an LLM provider.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: SecretString,
    pub model: String,
}

/// Opaque text-completion seam.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    fn model_name(&self) -> &str;

    /// One round-trip: system prompt + user prompt in, trimmed text out.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError>;
}

/// OpenAI chat-completions provider.
pub struct OpenAiProvider {
    client: reqwest::Client,
    api_key: SecretString,
    model: String,
}

impl OpenAiProvider {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAiProvider {
    fn model_name(&self) -> &str {
        &self.model
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, LlmError> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": prompt },
            ],
        });

        let response = self
            .client
            .post(CHAT_COMPLETIONS_URL)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Network {
                provider: "openai".to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| LlmError::Network {
            provider: "openai".to_string(),
            reason: e.to_string(),
        })?;

        if !status.is_success() {
            return Err(LlmError::Http {
                provider: "openai".to_string(),
                status: status.as_u16(),
                body: text.chars().take(500).collect(),
            });
        }

        let parsed: ChatResponse =
            serde_json::from_str(&text).map_err(|e| LlmError::InvalidResponse {
                provider: "openai".to_string(),
                reason: format!("Failed to parse response: {e}"),
            })?;

        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .ok_or_else(|| LlmError::InvalidResponse {
                provider: "openai".to_string(),
                reason: "response contained no message content".to_string(),
            })
    }
}

/// OpenAI chat-completions response format.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_construction_keeps_the_model_name() {
        // Auth failures only happen at request time; construction accepts any key.
        let config = LlmConfig {
            api_key: SecretString::from("sk-test"),
            model: "gpt-4o".to_string(),
        };
        let provider = OpenAiProvider::new(&config);
        assert_eq!(provider.model_name(), "gpt-4o");
    }

    #[test]
    fn chat_response_parses_the_wire_format() {
        let json = r#"{
            "model": "gpt-4o",
            "choices": [{ "message": { "role": "assistant", "content": " hello " }, "finish_reason": "stop" }]
        }"#;
        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some(" hello ")
        );
    }
}
