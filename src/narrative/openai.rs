//! OpenAI-compatible chat completions provider.

use super::http::{api_key, check_status, http_client, invalid_response, network_error};
use super::provider::{NarrativeProvider, DEFAULT_TIMEOUT};
use crate::error::Result;
use crate::model::NarrativeSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the API key.
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

const CONTEXT: &str = "openai";

/// Client configuration for any endpoint speaking `/chat/completions`.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: f32,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            timeout: DEFAULT_TIMEOUT,
            temperature: 0.7,
        }
    }
}

pub struct OpenAiProvider {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiProvider {
    pub fn new(config: OpenAiConfig) -> Result<Self> {
        let client = http_client(CONTEXT, config.timeout)?;
        Ok(Self { client, config })
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

#[async_trait]
impl NarrativeProvider for OpenAiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let key = api_key(CONTEXT, OPENAI_API_KEY_ENV)?;
        let url = format!("{}/chat/completions", self.config.api_base.trim_end_matches('/'));
        let body = ChatRequest {
            model: &self.config.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.config.temperature,
        };

        tracing::debug!(model = %self.config.model, "Requesting OpenAI narrative");
        let response = self
            .client
            .post(&url)
            .bearer_auth(key)
            .json(&body)
            .send()
            .await
            .map_err(|e| network_error(CONTEXT, e))?;
        let response = check_status(CONTEXT, response).await?;

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| invalid_response(CONTEXT, e.to_string()))?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| invalid_response(CONTEXT, "no choices in response"))
    }

    fn name(&self) -> &str {
        CONTEXT
    }

    fn source(&self) -> NarrativeSource {
        NarrativeSource::OpenAi
    }
}
