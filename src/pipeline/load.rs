//! Rubric and assessment loading with context for error messages.

use crate::config::RubricConfig;
use crate::model::{Assessment, Rubric};
use anyhow::{Context, Result};
use std::path::Path;

/// Resolve the rubric for a run: a custom file when configured, otherwise
/// the selected built-in edition.
pub fn load_rubric(config: &RubricConfig) -> Result<Rubric> {
    let rubric = match config.file {
        Some(ref path) => {
            tracing::info!("Loading rubric: {}", path.display());
            Rubric::from_path(path)
                .with_context(|| format!("Failed to load rubric: {}", path.display()))?
        }
        None => config.edition.rubric(),
    };
    tracing::debug!(
        "Using rubric '{}' with {} practices",
        rubric.edition,
        rubric.practice_count()
    );
    Ok(rubric)
}

/// Load an assessment file, warning about answers the rubric does not know.
pub fn load_assessment(path: &Path, rubric: &Rubric) -> Result<Assessment> {
    tracing::info!("Reading assessment: {}", path.display());
    let assessment = Assessment::from_path(path)
        .with_context(|| format!("Failed to read assessment: {}", path.display()))?;

    let unknown: Vec<&str> = assessment
        .answers
        .iter()
        .map(|(id, _)| id)
        .filter(|id| rubric.practice(id).is_none())
        .collect();
    if !unknown.is_empty() {
        tracing::warn!(
            "Ignoring {} answer(s) not in the rubric: {}",
            unknown.len(),
            unknown.join(", ")
        );
    }

    Ok(assessment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RubricEdition;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_edition() {
        let config = RubricConfig {
            edition: RubricEdition::Poc,
            file: None,
        };
        assert_eq!(load_rubric(&config).unwrap().practice_count(), 6);
    }

    #[test]
    fn test_rubric_file_round_trip() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rubric.json");
        std::fs::write(&path, Rubric::poc().to_json().unwrap()).unwrap();

        let config = RubricConfig {
            edition: RubricEdition::Full,
            file: Some(path),
        };
        assert_eq!(load_rubric(&config).unwrap(), Rubric::poc());
    }

    #[test]
    fn test_missing_assessment_has_context() {
        let err = load_assessment(Path::new("/nonexistent/answers.json"), &Rubric::poc())
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read assessment"));
    }

    #[test]
    fn test_assessment_with_unknown_answers_loads() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("answers.yaml");
        std::fs::write(
            &path,
            "company:\n  name: ACME\n  sector: Varejo\nanswers:\n  central_servicos: 3\n  legacy_practice: 2\n",
        )
        .unwrap();

        let assessment = load_assessment(&path, &Rubric::poc()).unwrap();
        assert_eq!(assessment.answers.len(), 2);
        assert_eq!(assessment.company.sector, "Varejo");
    }
}
