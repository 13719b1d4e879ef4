//! Configuration validation for itsm-assess.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{AnalysisConfig, AppConfig, NarrativeConfig, OutputConfig, RubricConfig};
use crate::model::{MAX_LEVEL, MIN_LEVEL};

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.rubric.validate());
        errors.extend(self.analysis.validate());
        errors.extend(self.narrative.validate());
        errors.extend(self.output.validate());
        errors
    }
}

impl Validatable for RubricConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if let Some(ref file) = self.file {
            if !file.exists() {
                errors.push(ConfigError::new(
                    "rubric.file",
                    format!("Rubric file does not exist: {}", file.display()),
                ));
            }
        }
        errors
    }
}

impl Validatable for AnalysisConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.priority_gaps == 0 {
            errors.push(ConfigError::new(
                "analysis.priority_gaps",
                "Must select at least one gap",
            ));
        }
        if self.detail_gaps == 0 {
            errors.push(ConfigError::new(
                "analysis.detail_gaps",
                "Must select at least one gap",
            ));
        }
        let range = f64::from(MIN_LEVEL)..=f64::from(MAX_LEVEL);
        if !range.contains(&self.strong_threshold) {
            errors.push(ConfigError::new(
                "analysis.strong_threshold",
                format!(
                    "Threshold must be between {MIN_LEVEL} and {MAX_LEVEL}, got {}",
                    self.strong_threshold
                ),
            ));
        }
        errors
    }
}

impl Validatable for NarrativeConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.timeout_secs == 0 {
            errors.push(ConfigError::new(
                "narrative.timeout_secs",
                "Timeout must be at least 1 second",
            ));
        }
        if self.max_retries > 10 {
            errors.push(ConfigError::new(
                "narrative.max_retries",
                format!("At most 10 retries are allowed, got {}", self.max_retries),
            ));
        }
        for (field, base) in [
            ("narrative.gemini_api_base", &self.gemini_api_base),
            ("narrative.openai_api_base", &self.openai_api_base),
        ] {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                errors.push(ConfigError::new(
                    field,
                    format!("Expected an http(s) URL, got '{base}'"),
                ));
            }
        }
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file {
            if let Some(parent) = file_path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    errors.push(ConfigError::new(
                        "output.file",
                        format!("Parent directory does not exist: {}", parent.display()),
                    ));
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_analysis_bounds() {
        let config = AnalysisConfig {
            priority_gaps: 0,
            detail_gaps: 10,
            strong_threshold: 6.0,
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "analysis.priority_gaps");
        assert_eq!(errors[1].field, "analysis.strong_threshold");
    }

    #[test]
    fn test_narrative_bounds() {
        let config = NarrativeConfig {
            timeout_secs: 0,
            max_retries: 50,
            openai_api_base: "localhost:1234".to_string(),
            ..NarrativeConfig::default()
        };
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "narrative.timeout_secs",
                "narrative.max_retries",
                "narrative.openai_api_base"
            ]
        );
    }

    #[test]
    fn test_missing_paths() {
        let rubric = RubricConfig {
            file: Some(PathBuf::from("/nonexistent/rubric.yaml")),
            ..RubricConfig::default()
        };
        assert!(!rubric.is_valid());

        let output = OutputConfig {
            file: Some(PathBuf::from("/nonexistent/dir/report.json")),
            ..OutputConfig::default()
        };
        assert!(!output.is_valid());
    }

    #[test]
    fn test_error_display() {
        let err = ConfigError::new("output.file", "bad");
        assert_eq!(err.to_string(), "output.file: bad");
    }
}
