//! Google Gemini provider.

use super::http::{api_key, check_status, http_client, invalid_response, network_error};
use super::provider::{NarrativeProvider, DEFAULT_TIMEOUT};
use crate::error::Result;
use crate::model::NarrativeSource;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the Gemini API key.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

const CONTEXT: &str = "gemini";

/// Gemini client configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_base: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Calls `models/{model}:generateContent`. The API key is read from
/// [`GEMINI_API_KEY_ENV`] on every request.
pub struct GeminiProvider {
    client: Client,
    config: GeminiConfig,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = http_client(CONTEXT, config.timeout)?;
        Ok(Self { client, config })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Content<'a> {
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().map(|p| p.text).collect();
        Some(text)
    }
}

#[async_trait]
impl NarrativeProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let key = api_key(CONTEXT, GEMINI_API_KEY_ENV)?;
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.api_base.trim_end_matches('/'),
            self.config.model
        );
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: prompt }],
            }],
        };

        tracing::debug!(model = %self.config.model, "Requesting Gemini narrative");
        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", key)
            .json(&body)
            .send()
            .await
            .map_err(|e| network_error(CONTEXT, e))?;
        let response = check_status(CONTEXT, response).await?;

        let parsed: GenerateResponse = response
            .json()
            .await
            .map_err(|e| invalid_response(CONTEXT, e.to_string()))?;
        parsed
            .into_text()
            .ok_or_else(|| invalid_response(CONTEXT, "no candidates in response"))
    }

    fn name(&self) -> &str {
        CONTEXT
    }

    fn source(&self) -> NarrativeSource {
        NarrativeSource::Gemini
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_text_joins_parts() {
        let json = r#"{"candidates":[{"content":{"parts":[{"text":"RESUMO "},{"text":"EXECUTIVO"}]}}]}"#;
        let parsed: GenerateResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.into_text().as_deref(), Some("RESUMO EXECUTIVO"));
    }

    #[test]
    fn test_blocked_response_has_no_text() {
        let parsed: GenerateResponse = serde_json::from_str(r#"{"promptFeedback":{}}"#).unwrap();
        assert!(parsed.into_text().is_none());
    }

    #[test]
    fn test_request_shape() {
        let body = GenerateRequest {
            contents: [Content {
                parts: [Part { text: "olá" }],
            }],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["contents"][0]["parts"][0]["text"], "olá");
    }
}
