//! Rubric command handler.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_rubric, should_use_color, write_output, OutputTarget};
use crate::reports::create_reporter_with_options;
use anyhow::Result;

/// Print the configured rubric: dimensions, practices and maturity bands.
pub fn run_rubric(config: &AppConfig) -> Result<i32> {
    let rubric = load_rubric(&config.rubric)?;
    let target = OutputTarget::from_option(config.output.file.clone());
    let reporter = create_reporter_with_options(
        config.output.format,
        should_use_color(config.output.no_color, &target),
    );

    let output = reporter.generate_rubric_report(&rubric)?;
    write_output(&output, &target)?;
    Ok(exit_codes::SUCCESS)
}
