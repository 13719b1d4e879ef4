//! Structured analysis output consumed by report renderers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Diagnosis for a dimension scoring below the maturity threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CriticalPoint {
    pub dimension_id: String,
    /// Dimension display name
    pub dimension: String,
    /// Dimension score (2 decimals)
    pub score: f64,
    pub diagnosis: String,
    /// Weakest practices of the dimension among the top gaps (at most 3)
    pub practices: Vec<String>,
    /// Never empty
    pub risks: Vec<String>,
    /// Never empty
    pub mitigations: Vec<String>,
}

/// Investment effort label attached to a roadmap phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, JsonSchema)]
pub enum InvestmentLevel {
    #[serde(rename = "Baixo")]
    Low,
    #[serde(rename = "Médio")]
    Medium,
    #[serde(rename = "Alto")]
    High,
}

impl InvestmentLevel {
    /// Baseline effort for a total score.
    #[must_use]
    pub fn for_total(total: f64) -> Self {
        if total < 2.0 {
            Self::High
        } else if total < 3.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// One tier higher, saturating at `High`.
    #[must_use]
    pub const fn raised(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium | Self::High => Self::High,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Baixo",
            Self::Medium => "Médio",
            Self::High => "Alto",
        }
    }
}

impl fmt::Display for InvestmentLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One of the three time-boxed improvement stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RoadmapPhase {
    /// 1-3
    pub phase: u8,
    pub name: String,
    pub timeframe: String,
    pub investment: InvestmentLevel,
    pub actions: Vec<String>,
    pub kpis: Vec<String>,
}

/// Strong and critical dimensions by display name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct DimensionHighlights {
    pub fortes: Vec<String>,
    pub criticas: Vec<String>,
}

/// Which branch of the narrative chain produced the prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NarrativeSource {
    Gemini,
    OpenAi,
    /// Deterministic rule-based text
    Fallback,
}

impl NarrativeSource {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gemini => "gemini",
            Self::OpenAi => "openai",
            Self::Fallback => "fallback",
        }
    }
}

/// The complete analysis handed to report renderers.
///
/// Every list is present (possibly empty) and every string is non-null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AiAnalysis {
    /// Company sector as supplied
    pub segment: String,
    /// Company name
    pub organization: String,
    pub maturity_score: f64,
    /// Maturity band name
    pub maturity_level: String,
    pub dimension_highlights: DimensionHighlights,
    pub critical_points: Vec<CriticalPoint>,
    pub strategic_priorities: Vec<String>,
    pub main_risks: Vec<String>,
    pub roadmap: Vec<RoadmapPhase>,
    pub executive_summary: String,
    pub analysis: String,
    pub narrative_source: NarrativeSource,
}
