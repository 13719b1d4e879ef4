//! Loading assessments from disk.

use super::answers::{AnswerMap, CompanyInfo};
use crate::error::{AssessError, ErrorContext, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A completed (or partial) assessment as exchanged with collaborators.
///
/// ```json
/// {
///   "company": { "name": "Hospital Central", "sector": "Saúde" },
///   "answers": { "central_servicos": 2, "gestao_incidentes": 3 }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Assessment {
    pub company: CompanyInfo,
    #[serde(default)]
    pub answers: AnswerMap,
}

/// Document syntax, detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSyntax {
    Json,
    Yaml,
}

impl DocumentSyntax {
    /// `.yaml`/`.yml` are YAML; everything else is treated as JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }
}

impl Assessment {
    /// Parse an assessment document in the given syntax.
    pub fn parse(content: &str, syntax: DocumentSyntax) -> Result<Self> {
        let assessment = match syntax {
            DocumentSyntax::Json => serde_json::from_str(content)?,
            DocumentSyntax::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(assessment)
    }

    /// Load an assessment from a JSON or YAML file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AssessError::io(path, e))?;
        let assessment = Self::parse(&content, DocumentSyntax::from_path(path))
            .with_context(|| format!("reading {}", path.display()))?;
        tracing::debug!(
            "Loaded assessment for '{}' with {} answers",
            assessment.company.name,
            assessment.answers.len()
        );
        Ok(assessment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_syntax_detection() {
        assert_eq!(
            DocumentSyntax::from_path(Path::new("a.YML")),
            DocumentSyntax::Yaml
        );
        assert_eq!(
            DocumentSyntax::from_path(Path::new("a.yaml")),
            DocumentSyntax::Yaml
        );
        assert_eq!(
            DocumentSyntax::from_path(Path::new("answers")),
            DocumentSyntax::Json
        );
    }

    #[test]
    fn test_parse_yaml_assessment() {
        let yaml = "company:\n  name: Loja\n  sector: Varejo\nanswers:\n  central_servicos: 2\n";
        let assessment = Assessment::parse(yaml, DocumentSyntax::Yaml).unwrap();
        assert_eq!(assessment.company.sector, "Varejo");
        assert_eq!(assessment.answers.level("central_servicos"), Some(2));
    }

    #[test]
    fn test_missing_answers_means_empty_map() {
        let json = r#"{"company":{"name":"X","sector":""}}"#;
        let assessment = Assessment::parse(json, DocumentSyntax::Json).unwrap();
        assert!(assessment.answers.is_empty());
    }

    #[test]
    fn test_malformed_file_reports_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();

        match Assessment::from_path(&path) {
            Err(AssessError::Input {
                context,
                source: InputErrorKind::InvalidJson(_),
            }) => assert!(context.contains("broken.json")),
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = Assessment::from_path(Path::new("/nonexistent/answers.json"));
        assert!(matches!(result, Err(AssessError::Io { .. })));
    }
}
