//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod analyze;
mod rubric;
mod score;

pub use analyze::run_analyze;
pub use rubric::run_rubric;
pub use score::run_score;

use crate::config::AppConfig;
use crate::model::{Assessment, Rubric};
use crate::pipeline::{load_assessment, load_rubric, should_use_color, OutputTarget};
use crate::reports::{
    create_reporter_with_options, ReportGenerator, ReportMetadata, ScoreReport,
};
use anyhow::Result;
use std::path::Path;

/// Everything a report-producing command needs after loading its inputs.
struct Prepared {
    rubric: Rubric,
    assessment: Assessment,
    report: ScoreReport,
    target: OutputTarget,
    reporter: Box<dyn ReportGenerator>,
}

fn prepare(config: &AppConfig, input: &Path) -> Result<Prepared> {
    let rubric = load_rubric(&config.rubric)?;
    let assessment = load_assessment(input, &rubric)?;

    let report = ScoreReport::new(
        &rubric,
        assessment.company.clone(),
        &assessment.answers,
        config.analysis.priority_gaps,
    )
    .with_metadata(ReportMetadata::new().with_input_path(input.display().to_string()));

    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = create_reporter_with_options(
        config.output.format,
        should_use_color(config.output.no_color, &target),
    );

    Ok(Prepared {
        rubric,
        assessment,
        report,
        target,
        reporter,
    })
}
