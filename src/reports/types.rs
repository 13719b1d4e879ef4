//! Report type definitions.

use crate::model::{AnswerMap, CompanyInfo, MaturityBand, Rubric};
use crate::scoring::{classify, compute_scores, rank_gaps, PracticeGap, Scores};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Compact terminal summary
    #[default]
    Summary,
    /// Structured JSON output
    Json,
    /// Human-readable Markdown
    #[value(alias = "md")]
    Markdown,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Summary => write!(f, "summary"),
            Self::Json => write!(f, "json"),
            Self::Markdown => write!(f, "markdown"),
        }
    }
}

/// Metadata attached to every report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Assessment file the report was produced from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_path: Option<String>,
    /// Tool version
    pub tool_version: String,
}

impl ReportMetadata {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_input_path(mut self, path: impl Into<String>) -> Self {
        self.input_path = Some(path.into());
        self
    }
}

/// Scores, band and largest gaps for one assessment.
///
/// This is everything the `score` command prints and the header every
/// analysis report starts with.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreReport {
    pub company: CompanyInfo,
    /// Rubric edition label
    pub edition: String,
    /// Rubric practices with an answer
    pub answered: usize,
    pub practice_count: usize,
    pub scores: Scores,
    pub band: MaturityBand,
    pub top_gaps: Vec<PracticeGap>,
    #[serde(skip)]
    pub metadata: ReportMetadata,
}

impl ScoreReport {
    /// Score `answers` against `rubric` and keep the `gap_count` largest gaps.
    #[must_use]
    pub fn new(rubric: &Rubric, company: CompanyInfo, answers: &AnswerMap, gap_count: usize) -> Self {
        let scores = compute_scores(answers, &rubric.dimensions);
        let band = classify(scores.total, &rubric.bands).clone();
        let top_gaps = rank_gaps(answers, rubric, gap_count);
        let answered = rubric
            .practices
            .iter()
            .filter(|p| answers.level(&p.id).is_some())
            .count();

        Self {
            company,
            edition: rubric.edition.clone(),
            answered,
            practice_count: rubric.practice_count(),
            scores,
            band,
            top_gaps,
            metadata: ReportMetadata::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: ReportMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Whether every rubric practice was answered.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.answered == self.practice_count
    }
}
