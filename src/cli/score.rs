//! Score command handler.
//!
//! Implements the `score` subcommand: scores, band and largest gaps,
//! without the narrative.

use super::prepare;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, write_output};
use anyhow::Result;
use std::path::Path;

/// Run the score command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_score(config: &AppConfig, input: &Path, min_score: Option<f64>) -> Result<i32> {
    let prepared = prepare(config, input)?;
    let report = &prepared.report;

    tracing::info!(
        "Scored {}/{} practices: total {:.2} ({})",
        report.answered,
        report.practice_count,
        report.scores.total,
        report.band.name
    );

    let output = prepared.reporter.generate_score_report(report)?;
    write_output(&output, &prepared.target)?;

    if let Some(threshold) = min_score {
        if report.scores.total < threshold {
            tracing::error!(
                "Maturity score {:.2} is below minimum threshold {:.2}",
                report.scores.total,
                threshold
            );
            return Ok(exit_codes::BELOW_MIN_SCORE);
        }
    }

    Ok(exit_codes::SUCCESS)
}
