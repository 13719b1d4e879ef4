//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: the full analysis with diagnosis,
//! roadmap and narrative.

use super::prepare;
use crate::analysis::AssessmentEngine;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, write_output};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the analyze command, returning the desired exit code.
///
/// Narrative providers are only contacted when `config.narrative.enabled`;
/// their failures never fail the command.
pub fn run_analyze(config: &AppConfig, input: &Path) -> Result<i32> {
    let prepared = prepare(config, input)?;

    let chain = config
        .narrative
        .build_chain()
        .context("Failed to set up narrative providers")?;
    if !chain.is_empty() {
        tracing::debug!(
            "Narrative providers: {}",
            chain.provider_names().collect::<Vec<_>>().join(" → ")
        );
    }

    let engine = AssessmentEngine::new(prepared.rubric)
        .with_chain(chain)
        .with_config(config.analysis.clone());

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let assessment = &prepared.assessment;
    let analysis = runtime.block_on(engine.generate_analysis(
        &prepared.report.scores,
        &assessment.company,
        &assessment.answers,
    ));

    tracing::info!(
        "Analysis for '{}': {} ({} critical dimension(s), narrative: {})",
        analysis.organization,
        analysis.maturity_level,
        analysis.critical_points.len(),
        analysis.narrative_source.name()
    );

    let output = prepared
        .reporter
        .generate_analysis_report(&prepared.report, &analysis)?;
    write_output(&output, &prepared.target)?;

    Ok(exit_codes::SUCCESS)
}
