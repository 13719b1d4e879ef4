//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator, ReportMetadata, ScoreReport};
use crate::model::{AiAnalysis, Rubric};
use chrono::Utc;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: String,
}

#[derive(Serialize)]
struct JsonReportMetadata {
    tool: ToolInfo,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    input_path: Option<String>,
}

impl JsonReportMetadata {
    fn from_metadata(metadata: &ReportMetadata) -> Self {
        Self {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: if metadata.tool_version.is_empty() {
                    env!("CARGO_PKG_VERSION").to_string()
                } else {
                    metadata.tool_version.clone()
                },
            },
            generated_at: Utc::now().to_rfc3339(),
            input_path: metadata.input_path.clone(),
        }
    }
}

#[derive(Serialize)]
struct JsonScoreReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    report: &'a ScoreReport,
}

#[derive(Serialize)]
struct JsonAnalysisReport<'a> {
    metadata: JsonReportMetadata,
    #[serde(flatten)]
    report: &'a ScoreReport,
    analysis: &'a AiAnalysis,
}

#[derive(Serialize)]
struct JsonRubricReport<'a> {
    metadata: JsonReportMetadata,
    rubric: &'a Rubric,
}

impl ReportGenerator for JsonReporter {
    fn generate_score_report(&self, report: &ScoreReport) -> Result<String, ReportError> {
        self.render(&JsonScoreReport {
            metadata: JsonReportMetadata::from_metadata(&report.metadata),
            report,
        })
    }

    fn generate_analysis_report(
        &self,
        report: &ScoreReport,
        analysis: &AiAnalysis,
    ) -> Result<String, ReportError> {
        self.render(&JsonAnalysisReport {
            metadata: JsonReportMetadata::from_metadata(&report.metadata),
            report,
            analysis,
        })
    }

    fn generate_rubric_report(&self, rubric: &Rubric) -> Result<String, ReportError> {
        self.render(&JsonRubricReport {
            metadata: JsonReportMetadata::from_metadata(&ReportMetadata::new()),
            rubric,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerMap, CompanyInfo};
    use serde_json::Value;

    fn report() -> ScoreReport {
        let rubric = Rubric::poc();
        let answers = AnswerMap::new().with("central_servicos", 3);
        ScoreReport::new(&rubric, CompanyInfo::new("ACME", "Varejo"), &answers, 2)
            .with_metadata(ReportMetadata::new().with_input_path("acme.json"))
    }

    #[test]
    fn test_score_report_envelope() {
        let json = JsonReporter::new().generate_score_report(&report()).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["metadata"]["tool"]["name"], env!("CARGO_PKG_NAME"));
        assert!(value["metadata"]["generated_at"].is_string());
        assert_eq!(value["metadata"]["input_path"], "acme.json");
        assert_eq!(value["company"]["name"], "ACME");
        assert_eq!(value["answered"], 1);
        assert_eq!(value["top_gaps"].as_array().unwrap().len(), 2);
        assert!(value["scores"]["by_dimension"]["operacional"].is_object());
    }

    #[test]
    fn test_compact_output() {
        let json = JsonReporter::new()
            .pretty(false)
            .generate_rubric_report(&Rubric::poc())
            .unwrap();
        assert!(!json.contains('\n'));
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["rubric"]["practices"].as_array().unwrap().len(), 6);
    }
}
