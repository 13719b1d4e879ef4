//! Unified error types for itsm-assess.
//!
//! The scoring and diagnostic engine is infallible by construction; errors
//! only arise at the edges: loading rubrics and assessments, configuration,
//! and talking to remote narrative providers.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for itsm-assess operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AssessError {
    /// Errors while loading or validating a rubric
    #[error("Invalid rubric: {context}")]
    Rubric {
        context: String,
        #[source]
        source: RubricErrorKind,
    },

    /// Errors while reading an assessment (company info + answers)
    #[error("Failed to read assessment: {context}")]
    Input {
        context: String,
        #[source]
        source: InputErrorKind,
    },

    /// Errors from a remote narrative provider
    #[error("Narrative generation failed: {context}")]
    Narrative {
        context: String,
        #[source]
        source: NarrativeErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific rubric error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RubricErrorKind {
    #[error("Dimension weights sum to {0}, expected 1.0")]
    WeightSum(f64),

    #[error("Practice '{0}' is listed more than once")]
    DuplicatePractice(String),

    #[error("Practice '{0}' is referenced by a dimension but not defined")]
    UnknownPractice(String),

    #[error("Practice '{0}' is not referenced by any dimension")]
    OrphanPractice(String),

    #[error("Expected 5 maturity bands, found {0}")]
    BandCount(usize),

    #[error("Maturity bands are not contiguous over [1, 5]: {0}")]
    BandCoverage(String),

    #[error("Invalid rubric document: {0}")]
    InvalidDocument(String),
}

/// Specific input error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InputErrorKind {
    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),
}

/// Specific narrative provider error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NarrativeErrorKind {
    #[error("API request failed: {0}")]
    ApiError(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("Response is empty or missing the expected sections")]
    Unusable,
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for itsm-assess operations
pub type Result<T> = std::result::Result<T, AssessError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl AssessError {
    /// Create a rubric error with context
    pub fn rubric(context: impl Into<String>, source: RubricErrorKind) -> Self {
        Self::Rubric {
            context: context.into(),
            source,
        }
    }

    /// Create an input error with context
    pub fn input(context: impl Into<String>, source: InputErrorKind) -> Self {
        Self::Input {
            context: context.into(),
            source,
        }
    }

    /// Create a narrative provider error
    pub fn narrative(context: impl Into<String>, source: NarrativeErrorKind) -> Self {
        Self::Narrative {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for AssessError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for AssessError {
    fn from(err: serde_json::Error) -> Self {
        Self::input(
            "JSON deserialization",
            InputErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for AssessError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::input(
            "YAML deserialization",
            InputErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to the error's existing context,
/// creating a chain that shows the path through the code.
///
/// ```ignore
/// use itsm_assess::error::ErrorContext;
///
/// let content = std::fs::read_to_string(path)
///     .with_context(|| format!("reading assessment {}", path.display()))?;
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure (lazy evaluation).
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<AssessError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: AssessError, new_ctx: &str) -> AssessError {
    match err {
        AssessError::Rubric {
            context: existing,
            source,
        } => AssessError::Rubric {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessError::Input {
            context: existing,
            source,
        } => AssessError::Input {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessError::Narrative {
            context: existing,
            source,
        } => AssessError::Narrative {
            context: chain_context(new_ctx, &existing),
            source,
        },
        AssessError::Io {
            path,
            message,
            source,
        } => AssessError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        AssessError::Config(msg) => AssessError::Config(chain_context(new_ctx, &msg)),
        AssessError::Validation(msg) => AssessError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AssessError::rubric("loading rubric", RubricErrorKind::WeightSum(0.9));
        assert!(err.to_string().contains("Invalid rubric"));

        let err = AssessError::narrative("gemini", NarrativeErrorKind::Unusable);
        assert!(err.to_string().contains("gemini"));
    }

    #[test]
    fn test_io_error_keeps_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = AssessError::io("/path/to/answers.json", io_err);
        assert!(err.to_string().contains("/path/to/answers.json"));
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(AssessError::input(
                "base",
                InputErrorKind::InvalidJson("eof".to_string()),
            ))
        }

        fn outer() -> Result<()> {
            inner().context("middle layer").context("outer layer")
        }

        match outer() {
            Err(AssessError::Input { context, .. }) => {
                assert_eq!(context, "outer layer: middle layer: base");
            }
            other => panic!("Expected Input error, got {other:?}"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;
        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
    }
}
