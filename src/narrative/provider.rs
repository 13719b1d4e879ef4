//! Narrative providers and the ordered fallback chain.

use super::fallback::Narrative;
use super::postprocess::parse_response;
use crate::error::{AssessError, NarrativeErrorKind, Result};
use crate::model::NarrativeSource;
use async_trait::async_trait;
use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Default delay before the first retry; doubles on each further attempt.
pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(1);

/// An external text generator.
#[async_trait]
pub trait NarrativeProvider: Send + Sync {
    /// Generate raw text for a prompt.
    ///
    /// Providers without credentials return
    /// [`NarrativeErrorKind::ProviderUnavailable`].
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging.
    fn name(&self) -> &str;

    /// Source recorded on the analysis when this provider succeeds.
    fn source(&self) -> NarrativeSource;
}

/// Narrative plus the branch that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    pub narrative: Narrative,
    pub source: NarrativeSource,
}

/// Tries providers in order and falls back to deterministic text.
///
/// Requests are sequential: the next provider is only tried once the
/// previous one failed or returned an unusable response.
pub struct NarrativeChain {
    providers: Vec<Box<dyn NarrativeProvider>>,
    timeout: Duration,
    max_retries: u32,
    retry_backoff: Duration,
}

impl Default for NarrativeChain {
    fn default() -> Self {
        Self::offline()
    }
}

impl NarrativeChain {
    /// A chain with no providers; always uses the fallback.
    #[must_use]
    pub fn offline() -> Self {
        Self {
            providers: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            max_retries: 0,
            retry_backoff: DEFAULT_RETRY_BACKOFF,
        }
    }

    #[must_use]
    pub fn with_provider(mut self, provider: Box<dyn NarrativeProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Extra attempts per provider after the first failure.
    #[must_use]
    pub const fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    #[must_use]
    pub const fn with_retry_backoff(mut self, backoff: Duration) -> Self {
        self.retry_backoff = backoff;
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.providers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Provider names in call order.
    pub fn provider_names(&self) -> impl Iterator<Item = &str> {
        self.providers.iter().map(|p| p.name())
    }

    /// Run the chain. Never fails: `fallback` is used when every provider
    /// fails or none is configured.
    pub async fn generate<F>(&self, prompt: &str, fallback: F) -> ChainOutcome
    where
        F: FnOnce() -> Narrative + Send,
    {
        for provider in &self.providers {
            match self.attempt(provider.as_ref(), prompt).await {
                Ok(narrative) => {
                    tracing::info!(provider = provider.name(), "Narrative generated");
                    return ChainOutcome {
                        narrative,
                        source: provider.source(),
                    };
                }
                Err(e) if is_unavailable(&e) => {
                    tracing::debug!(provider = provider.name(), "Provider not configured, skipping");
                }
                Err(e) => {
                    tracing::warn!(provider = provider.name(), error = %e, "Narrative provider failed");
                }
            }
        }

        tracing::info!("Using rule-based narrative");
        ChainOutcome {
            narrative: fallback(),
            source: NarrativeSource::Fallback,
        }
    }

    async fn attempt(&self, provider: &dyn NarrativeProvider, prompt: &str) -> Result<Narrative> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = self.retry_backoff * 2u32.saturating_pow(attempt - 1);
                tokio::time::sleep(delay).await;
            }

            match self.attempt_once(provider, prompt).await {
                Ok(narrative) => return Ok(narrative),
                Err(e) if is_unavailable(&e) => return Err(e),
                Err(e) => {
                    if attempt < self.max_retries {
                        tracing::warn!(
                            "{} request failed (attempt {}/{}), retrying...",
                            provider.name(),
                            attempt + 1,
                            self.max_retries + 1
                        );
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AssessError::narrative(provider.name(), NarrativeErrorKind::Unusable)
        }))
    }

    async fn attempt_once(&self, provider: &dyn NarrativeProvider, prompt: &str) -> Result<Narrative> {
        let raw = tokio::time::timeout(self.timeout, provider.generate(prompt))
            .await
            .map_err(|_| {
                AssessError::narrative(provider.name(), NarrativeErrorKind::Timeout(self.timeout))
            })??;

        let narrative = parse_response(&raw);
        if narrative.is_usable() {
            Ok(narrative)
        } else {
            tracing::debug!(provider = provider.name(), chars = raw.len(), "Unusable response");
            Err(AssessError::narrative(provider.name(), NarrativeErrorKind::Unusable))
        }
    }
}

fn is_unavailable(error: &AssessError) -> bool {
    matches!(
        error,
        AssessError::Narrative {
            source: NarrativeErrorKind::ProviderUnavailable(_),
            ..
        }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct Scripted {
        responses: Vec<Result<String>>,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl NarrativeProvider for Scripted {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            let n = self.calls.fetch_add(1, Ordering::SeqCst);
            match self.responses.get(n.min(self.responses.len() - 1)) {
                Some(Ok(text)) => Ok(text.clone()),
                _ => Err(AssessError::narrative(
                    "scripted",
                    NarrativeErrorKind::ApiError("500".into()),
                )),
            }
        }

        fn name(&self) -> &str {
            "scripted"
        }

        fn source(&self) -> NarrativeSource {
            NarrativeSource::Gemini
        }
    }

    fn fallback() -> Narrative {
        Narrative {
            summary: "fallback".into(),
            analysis: "fallback".into(),
        }
    }

    #[tokio::test]
    async fn test_retry_then_success() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = NarrativeChain::offline()
            .with_max_retries(1)
            .with_retry_backoff(Duration::ZERO)
            .with_provider(Box::new(Scripted {
                responses: vec![
                    Err(AssessError::validation("boom")),
                    Ok("RESUMO EXECUTIVO\nR.\nANÁLISE DETALHADA\nA.".into()),
                ],
                calls: Arc::clone(&calls),
            }));

        let outcome = chain.generate("prompt", fallback).await;
        assert_eq!(outcome.source, NarrativeSource::Gemini);
        assert_eq!(outcome.narrative.summary, "R.");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_no_retry_by_default() {
        let calls = Arc::new(AtomicUsize::new(0));
        let chain = NarrativeChain::offline().with_provider(Box::new(Scripted {
            responses: vec![Err(AssessError::validation("boom"))],
            calls: Arc::clone(&calls),
        }));

        let outcome = chain.generate("prompt", fallback).await;
        assert_eq!(outcome.source, NarrativeSource::Fallback);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_offline_chain_uses_fallback() {
        let chain = NarrativeChain::offline();
        assert!(chain.is_empty());
        let outcome = chain.generate("prompt", fallback).await;
        assert_eq!(outcome.source, NarrativeSource::Fallback);
        assert_eq!(outcome.narrative, fallback());
    }
}
