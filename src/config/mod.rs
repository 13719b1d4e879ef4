//! Configuration module for itsm-assess.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use itsm_assess::config::{AppConfig, Validatable};
//! use itsm_assess::model::RubricEdition;
//!
//! let config = AppConfig::builder()
//!     .edition(RubricEdition::Poc)
//!     .narrative_enabled(false)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.itsm-assess.yaml` file in your working directory or `~/.config/itsm-assess/`:
//!
//! ```yaml
//! rubric:
//!   edition: poc
//! narrative:
//!   primary: openai
//!   timeout_secs: 30
//! ```

pub mod file;
mod types;
mod validation;

pub use types::{
    AnalysisConfig, AppConfig, AppConfigBuilder, NarrativeConfig, OutputConfig, ProviderKind,
    RubricConfig, DEFAULT_STRONG_THRESHOLD, DEFAULT_TIMEOUT_SECS,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, user_config_dir, ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// Documents every option accepted in `.itsm-assess.yaml`, for editor
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_schema_lists_sections() {
        let schema = generate_json_schema();
        for section in ["rubric", "analysis", "narrative", "output"] {
            assert!(schema.contains(section), "{section}");
        }
    }
}
