//! Configuration types for itsm-assess.

use crate::model::RubricEdition;
use crate::narrative::{NarrativeChain, DEFAULT_RETRY_BACKOFF};
use crate::reports::ReportFormat;
use crate::scoring::{DETAIL_GAP_COUNT, PRIORITY_GAP_COUNT};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Default score at or above which a dimension is a strength.
pub const DEFAULT_STRONG_THRESHOLD: f64 = 3.5;

/// Default provider request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Which rubric to score against
    pub rubric: RubricConfig,
    /// Gap selection and highlight thresholds
    pub analysis: AnalysisConfig,
    /// Remote narrative providers
    pub narrative: NarrativeConfig,
    /// Output format and destination
    pub output: OutputConfig,
}

impl AppConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Select a built-in rubric edition.
    pub const fn edition(mut self, edition: RubricEdition) -> Self {
        self.config.rubric.edition = edition;
        self
    }

    /// Load the rubric from a file instead of a built-in edition.
    pub fn rubric_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.rubric.file = file;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable or disable remote narrative providers.
    pub const fn narrative_enabled(mut self, enabled: bool) -> Self {
        self.config.narrative.enabled = enabled;
        self
    }

    /// Set the provider request timeout.
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.narrative.timeout_secs = secs;
        self
    }

    /// Set the strong-dimension threshold.
    pub const fn strong_threshold(mut self, threshold: f64) -> Self {
        self.config.analysis.strong_threshold = threshold;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Rubric selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct RubricConfig {
    /// Built-in edition used when no file is given
    pub edition: RubricEdition,
    /// Custom rubric document (YAML or JSON)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

/// Analysis tuning
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Gaps used for strategic priorities and the roadmap
    #[schemars(range(min = 1))]
    pub priority_gaps: usize,
    /// Gaps used for the per-dimension diagnosis
    #[schemars(range(min = 1))]
    pub detail_gaps: usize,
    /// Dimensions scoring at or above this are strengths
    #[schemars(range(min = 1.0, max = 5.0))]
    pub strong_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            priority_gaps: PRIORITY_GAP_COUNT,
            detail_gaps: DETAIL_GAP_COUNT,
            strong_threshold: DEFAULT_STRONG_THRESHOLD,
        }
    }
}

/// Remote narrative provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    #[serde(rename = "openai")]
    #[value(name = "openai")]
    OpenAi,
}

/// Remote narrative configuration.
///
/// API keys are never stored here; providers read them from the
/// environment on each request.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Use remote providers (if false, only the rule-based narrative)
    pub enabled: bool,
    /// First provider tried
    pub primary: ProviderKind,
    /// Provider tried after the primary fails
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<ProviderKind>,
    /// Per-request timeout in seconds
    #[schemars(range(min = 1))]
    pub timeout_secs: u64,
    /// Extra attempts per provider
    pub max_retries: u32,
    pub gemini_model: String,
    pub gemini_api_base: String,
    pub openai_model: String,
    pub openai_api_base: String,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary: ProviderKind::Gemini,
            secondary: Some(ProviderKind::OpenAi),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            max_retries: 0,
            gemini_model: "gemini-1.5-flash".to_string(),
            gemini_api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            openai_model: "gpt-4o-mini".to_string(),
            openai_api_base: "https://api.openai.com/v1".to_string(),
        }
    }
}

impl NarrativeConfig {
    /// Request timeout as a `Duration`.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Providers in call order, without duplicates.
    #[must_use]
    pub fn providers(&self) -> Vec<ProviderKind> {
        if !self.enabled {
            return Vec::new();
        }
        let mut kinds = vec![self.primary];
        if let Some(secondary) = self.secondary {
            if secondary != self.primary {
                kinds.push(secondary);
            }
        }
        kinds
    }

    /// Build the provider chain for this configuration.
    ///
    /// Without the `remote-narrative` feature the chain is always offline.
    pub fn build_chain(&self) -> crate::error::Result<NarrativeChain> {
        #[cfg_attr(not(feature = "remote-narrative"), allow(unused_mut))]
        let mut chain = NarrativeChain::offline()
            .with_timeout(self.timeout())
            .with_max_retries(self.max_retries)
            .with_retry_backoff(DEFAULT_RETRY_BACKOFF);

        #[cfg(feature = "remote-narrative")]
        for kind in self.providers() {
            use crate::narrative::{GeminiConfig, GeminiProvider, OpenAiConfig, OpenAiProvider};

            chain = match kind {
                ProviderKind::Gemini => chain.with_provider(Box::new(GeminiProvider::new(
                    GeminiConfig {
                        api_base: self.gemini_api_base.clone(),
                        model: self.gemini_model.clone(),
                        timeout: self.timeout(),
                    },
                )?)),
                ProviderKind::OpenAi => chain.with_provider(Box::new(OpenAiProvider::new(
                    OpenAiConfig {
                        api_base: self.openai_api_base.clone(),
                        model: self.openai_model.clone(),
                        timeout: self.timeout(),
                        ..OpenAiConfig::default()
                    },
                )?)),
            };
        }

        #[cfg(not(feature = "remote-narrative"))]
        if self.enabled {
            tracing::debug!("Built without remote-narrative; using rule-based narrative only");
        }

        Ok(chain)
    }
}

/// Output-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.rubric.edition, RubricEdition::Full);
        assert_eq!(config.analysis.priority_gaps, 5);
        assert_eq!(config.analysis.detail_gaps, 10);
        assert_eq!(config.narrative.timeout_secs, 60);
        assert_eq!(config.narrative.max_retries, 0);
        assert_eq!(config.output.format, ReportFormat::Summary);
    }

    #[test]
    fn test_provider_order() {
        let mut narrative = NarrativeConfig::default();
        assert_eq!(
            narrative.providers(),
            vec![ProviderKind::Gemini, ProviderKind::OpenAi]
        );

        narrative.secondary = Some(ProviderKind::Gemini);
        assert_eq!(narrative.providers(), vec![ProviderKind::Gemini]);

        narrative.enabled = false;
        assert!(narrative.providers().is_empty());
    }

    #[test]
    fn test_disabled_narrative_builds_offline_chain() {
        let narrative = NarrativeConfig {
            enabled: false,
            ..NarrativeConfig::default()
        };
        assert!(narrative.build_chain().unwrap().is_empty());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .edition(RubricEdition::Poc)
            .output_format(ReportFormat::Json)
            .narrative_enabled(false)
            .timeout_secs(5)
            .build();
        assert_eq!(config.rubric.edition, RubricEdition::Poc);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(!config.narrative.enabled);
        assert_eq!(config.narrative.timeout(), Duration::from_secs(5));
    }
}
