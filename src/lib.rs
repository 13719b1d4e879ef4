//! **Maturity scoring and gap analysis for IT service management.**
//!
//! `itsm-assess` turns an ITIL 4 practice self-assessment (one 1-5 level per
//! practice) into a weighted maturity score, a maturity band, a ranked list
//! of practice gaps, per-dimension diagnoses with risks and mitigations, a
//! three-phase improvement roadmap and an executive narrative.
//!
//! ## Key Features
//!
//! - **Weighted Scoring**: Dimension means blended by rubric weights into a
//!   0-5 total, classified into five maturity bands.
//! - **Gap Ranking**: Practices ordered by weighted distance from level 5.
//! - **Rule-Based Diagnosis**: Sector-aware problem statements, risks and
//!   mitigations for every dimension below 3.0.
//! - **Roadmap Synthesis**: Three time-boxed phases with actions, KPIs and an
//!   investment level, adjusted for the weakest dimensions and practices.
//! - **Narratives**: Gemini or any OpenAI-compatible endpoint, with a
//!   deterministic sector-specific fallback that never fails.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: The [`Rubric`] (dimensions, practices, bands), the inputs
//!   ([`AnswerMap`], [`CompanyInfo`]) and the [`AiAnalysis`] output.
//! - **[`scoring`]**: Pure functions [`compute_scores`], [`classify`] and
//!   [`rank_gaps`].
//! - **[`diagnostics`]**: [`diagnose`] and its sector and practice rule tables.
//! - **[`roadmap`]**: [`build_roadmap`].
//! - **[`narrative`]**: The provider chain and the fallback narrative.
//! - **[`analysis`]**: [`AssessmentEngine`], composing all of the above.
//! - **[`reports`]**: Summary, JSON and Markdown renderers.
//!
//! ## Getting Started
//!
//! ```
//! use itsm_assess::{classify, compute_scores, rank_gaps, AnswerMap, Rubric};
//!
//! let rubric = Rubric::full();
//! let answers = AnswerMap::new()
//!     .with("central_servicos", 2)
//!     .with("gestao_incidentes", 3);
//!
//! let scores = compute_scores(&answers, &rubric.dimensions);
//! let band = classify(scores.total, &rubric.bands);
//! let gaps = rank_gaps(&answers, &rubric, 5);
//!
//! println!("{:.2} ({}), largest gap: {}", scores.total, band.name, gaps[0].practice_name);
//! ```
//!
//! ## Full Analysis
//!
//! ```no_run
//! use itsm_assess::{AppConfig, AssessmentEngine, Assessment, Rubric};
//! use std::path::Path;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let assessment = Assessment::from_path(Path::new("assessment.json"))?;
//! let chain = AppConfig::default().narrative.build_chain()?;
//!
//! let engine = AssessmentEngine::new(Rubric::full()).with_chain(chain);
//! let scores = engine.compute_scores(&assessment.answers);
//! let analysis = engine
//!     .generate_analysis(&scores, &assessment.company, &assessment.answers)
//!     .await;
//!
//! println!("{}", analysis.executive_summary);
//! # Ok(())
//! # }
//! ```
//!
//! ## Feature Flags
//!
//! - `remote-narrative` (default): Gemini and OpenAI-compatible providers.
//!   This adds the `reqwest` dependency. Without it, analyses always use the
//!   rule-based narrative.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::cast_precision_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod model;
pub mod narrative;
pub mod pipeline;
pub mod reports;
pub mod roadmap;
pub mod scoring;

// Re-export main types for convenience
pub use analysis::AssessmentEngine;
pub use config::{AppConfig, AppConfigBuilder, ConfigError, Validatable};
pub use diagnostics::diagnose;
pub use error::{AssessError, ErrorContext, Result};
pub use model::{
    AiAnalysis, AnswerMap, Assessment, CompanyInfo, CriticalPoint, MaturityBand, NarrativeSource,
    Rubric, RubricEdition,
};
pub use narrative::{generate_fallback, NarrativeChain, NarrativeProvider};
pub use reports::{ReportFormat, ReportGenerator};
pub use roadmap::build_roadmap;
pub use scoring::{classify, compute_scores, rank_gaps, PracticeGap, Scores};
