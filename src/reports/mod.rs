//! Report generation for assessment results.
//!
//! Three output formats are available:
//! - Summary: compact, optionally colored terminal output
//! - JSON: structured data for programmatic integration
//! - Markdown: human-readable documentation
//!
//! Each format renders three kinds of report: a [`ScoreReport`] (scores,
//! band and largest gaps), the full [`AiAnalysis`] on top of a score report,
//! and the rubric itself.
//!
//! # Security
//!
//! The `escape` module provides utilities for safe Markdown output.
//! Company names, sectors and narrative text are escaped before being
//! embedded in Markdown reports.

pub mod escape;
mod json;
mod markdown;
mod summary;
mod types;

pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::{ReportFormat, ReportMetadata, ScoreReport};

use crate::model::{AiAnalysis, Rubric};
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render scores, band and top gaps.
    fn generate_score_report(&self, report: &ScoreReport) -> Result<String, ReportError>;

    /// Render a complete analysis, headed by its score report.
    fn generate_analysis_report(
        &self,
        report: &ScoreReport,
        analysis: &AiAnalysis,
    ) -> Result<String, ReportError>;

    /// Render the rubric: dimensions, practices and maturity bands.
    fn generate_rubric_report(&self, rubric: &Rubric) -> Result<String, ReportError>;

    /// Write a score report to a writer
    fn write_score_report(
        &self,
        report: &ScoreReport,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let rendered = self.generate_score_report(report)?;
        writer.write_all(rendered.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}
