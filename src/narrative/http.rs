//! Shared HTTP plumbing for remote providers.

use crate::error::{AssessError, NarrativeErrorKind, Result};
use reqwest::{Client, Response, StatusCode};
use std::time::Duration;

pub(crate) fn network_error(context: &str, err: reqwest::Error) -> AssessError {
    AssessError::narrative(context, NarrativeErrorKind::NetworkError(err.to_string()))
}

pub(crate) fn invalid_response(context: &str, message: impl Into<String>) -> AssessError {
    AssessError::narrative(context, NarrativeErrorKind::InvalidResponse(message.into()))
}

pub(crate) fn unavailable(context: &str, message: impl Into<String>) -> AssessError {
    AssessError::narrative(context, NarrativeErrorKind::ProviderUnavailable(message.into()))
}

pub(crate) fn http_client(context: &str, timeout: Duration) -> Result<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()
        .map_err(|e| {
            AssessError::config(format!("{context}: failed to build HTTP client: {e}"))
        })
}

/// Read an API key from the environment; blank values count as absent.
pub(crate) fn api_key(context: &str, var: &str) -> Result<String> {
    match std::env::var(var) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => Err(unavailable(context, format!("{var} is not set"))),
    }
}

/// Map non-success statuses to narrative errors.
pub(crate) async fn check_status(context: &str, response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = format!("{} returned status {}: {}", context, status.as_u16(), truncate(&body, 300));
    let kind = if status == StatusCode::TOO_MANY_REQUESTS {
        NarrativeErrorKind::RateLimited(message)
    } else {
        NarrativeErrorKind::ApiError(message)
    };
    Err(AssessError::narrative(context, kind))
}

fn truncate(text: &str, max_chars: usize) -> &str {
    text.char_indices()
        .nth(max_chars)
        .map_or(text, |(idx, _)| &text[..idx])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate("ação", 2), "aç");
        assert_eq!(truncate("abc", 10), "abc");
    }

    #[test]
    fn test_missing_key_is_unavailable() {
        let err = api_key("test", "ITSM_ASSESS_TEST_KEY_THAT_IS_NEVER_SET").unwrap_err();
        assert!(matches!(
            err,
            AssessError::Narrative {
                source: NarrativeErrorKind::ProviderUnavailable(_),
                ..
            }
        ));
    }
}
