//! Executive summary and detailed analysis prose.
//!
//! A prompt built from the structured analysis is sent through a
//! [`NarrativeChain`] of remote providers. Responses are cleaned by
//! [`postprocess`] and must contain both sections; otherwise the next
//! provider is tried, and finally [`generate_fallback`] produces
//! deterministic text.
//!
//! Remote providers require the `remote-narrative` feature.

mod fallback;
#[cfg(feature = "remote-narrative")]
mod gemini;
#[cfg(feature = "remote-narrative")]
mod http;
#[cfg(feature = "remote-narrative")]
mod openai;
pub mod postprocess;
mod prompt;
mod provider;

pub use fallback::{generate_fallback, Narrative};
#[cfg(feature = "remote-narrative")]
pub use gemini::{GeminiConfig, GeminiProvider, GEMINI_API_KEY_ENV};
#[cfg(feature = "remote-narrative")]
pub use openai::{OpenAiConfig, OpenAiProvider, OPENAI_API_KEY_ENV};
pub use prompt::{build_prompt, ANALYSIS_HEADER, SUMMARY_HEADER};
pub use provider::{
    ChainOutcome, NarrativeChain, NarrativeProvider, DEFAULT_RETRY_BACKOFF, DEFAULT_TIMEOUT,
};
