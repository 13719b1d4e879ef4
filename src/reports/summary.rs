//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{ReportError, ReportFormat, ReportGenerator, ScoreReport};
use crate::model::{AiAnalysis, Rubric, MAX_LEVEL};
use crate::scoring::CRITICAL_THRESHOLD;
use unicode_width::UnicodeWidthStr;

const BAR_WIDTH: usize = 20;
const RULE_WIDTH: usize = 60;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Color used for a score on the 0-5 scale.
fn score_color(score: f64) -> &'static str {
    if score < 2.0 {
        "red"
    } else if score < CRITICAL_THRESHOLD {
        "yellow"
    } else {
        "green"
    }
}

/// Pad `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    format!("{text}{}", " ".repeat(width.saturating_sub(used)))
}

fn bar(score: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let filled = ((score / f64::from(MAX_LEVEL)) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn heading(&self, lines: &mut Vec<String>, title: &str) {
        lines.push(String::new());
        lines.push(self.color(title, "bold"));
    }

    fn bullets(&self, lines: &mut Vec<String>, items: &[String]) {
        if items.is_empty() {
            lines.push(format!("  {}", self.color("(nenhum)", "dim")));
        }
        for item in items {
            lines.push(format!("  • {item}"));
        }
    }

    fn score_lines(&self, report: &ScoreReport) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(self.color("Avaliação de Maturidade ITSM", "bold"));
        lines.push(self.color("─".repeat(RULE_WIDTH).as_str(), "dim"));

        lines.push(format!(
            "{}  {} ({})",
            self.color("Organização:", "cyan"),
            report.company.name,
            report.company.sector
        ));
        lines.push(format!(
            "{}      {} ({}/{} práticas respondidas)",
            self.color("Rubrica:", "cyan"),
            report.edition,
            report.answered,
            report.practice_count
        ));
        if let Some(ref path) = report.metadata.input_path {
            lines.push(format!("{}      {path}", self.color("Arquivo:", "cyan")));
        }

        lines.push(String::new());
        let total = format!("{:.2}", report.scores.total);
        lines.push(format!(
            "{} {} / 5.00  → Nível {} - {}",
            self.color("Pontuação geral:", "bold"),
            self.color(&total, score_color(report.scores.total)),
            report.band.level,
            self.color(&report.band.name, "bold")
        ));

        let name_width = report
            .scores
            .by_dimension
            .values()
            .map(|d| UnicodeWidthStr::width(d.name.as_str()))
            .max()
            .unwrap_or(0);

        self.heading(&mut lines, "Dimensões");
        for dimension in report.scores.by_dimension.values() {
            let score = format!("{:.2}", dimension.score);
            lines.push(format!(
                "  {}  {}  {}  {}",
                pad(&dimension.name, name_width),
                self.color(&score, score_color(dimension.score)),
                self.color(&bar(dimension.score), "dim"),
                format_args!("peso {:.0}%", dimension.weight * 100.0)
            ));
        }

        if !report.top_gaps.is_empty() {
            self.heading(&mut lines, "Maiores lacunas");
            for (rank, gap) in report.top_gaps.iter().enumerate() {
                lines.push(format!(
                    "  {:>2}. {} {} nível {}, lacuna {:.2}",
                    rank + 1,
                    gap.practice_name,
                    self.color(&format!("({})", gap.dimension_name), "dim"),
                    gap.level,
                    gap.gap
                ));
            }
        }

        lines
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_score_report(&self, report: &ScoreReport) -> Result<String, ReportError> {
        let mut lines = self.score_lines(report);
        lines.push(String::new());
        lines.push(format!(
            "{} {}",
            self.color("Características:", "cyan"),
            report.band.characteristics
        ));
        lines.push(format!(
            "{} {}",
            self.color("Riscos:", "cyan"),
            report.band.risks
        ));
        Ok(lines.join("\n"))
    }

    fn generate_analysis_report(
        &self,
        report: &ScoreReport,
        analysis: &AiAnalysis,
    ) -> Result<String, ReportError> {
        let mut lines = self.score_lines(report);

        self.heading(&mut lines, "Resumo executivo");
        lines.push(analysis.executive_summary.clone());

        self.heading(&mut lines, "Destaques");
        lines.push(format!(
            "  {} {}",
            self.color("Fortes:", "green"),
            if analysis.dimension_highlights.fortes.is_empty() {
                "-".to_string()
            } else {
                analysis.dimension_highlights.fortes.join(", ")
            }
        ));
        lines.push(format!(
            "  {} {}",
            self.color("Críticas:", "red"),
            if analysis.dimension_highlights.criticas.is_empty() {
                "-".to_string()
            } else {
                analysis.dimension_highlights.criticas.join(", ")
            }
        ));

        if !analysis.critical_points.is_empty() {
            self.heading(&mut lines, "Pontos críticos");
            for point in &analysis.critical_points {
                let score = format!("{:.2}", point.score);
                lines.push(format!(
                    "  {} {}",
                    self.color(&point.dimension, "bold"),
                    self.color(&score, score_color(point.score))
                ));
                lines.push(format!("    {}", point.diagnosis));
                for risk in &point.risks {
                    lines.push(format!("    {} {risk}", self.color("!", "red")));
                }
                for mitigation in &point.mitigations {
                    lines.push(format!("    {} {mitigation}", self.color("→", "green")));
                }
            }
        }

        self.heading(&mut lines, "Prioridades estratégicas");
        self.bullets(&mut lines, &analysis.strategic_priorities);

        self.heading(&mut lines, "Principais riscos");
        self.bullets(&mut lines, &analysis.main_risks);

        self.heading(&mut lines, "Roadmap");
        for phase in &analysis.roadmap {
            lines.push(format!(
                "  {} {} ({}, investimento {})",
                self.color(&format!("Fase {}:", phase.phase), "cyan"),
                phase.name,
                phase.timeframe,
                phase.investment
            ));
            for action in &phase.actions {
                lines.push(format!("    - {action}"));
            }
            lines.push(format!(
                "    {} {}",
                self.color("KPIs:", "dim"),
                phase.kpis.join("; ")
            ));
        }

        self.heading(&mut lines, "Análise detalhada");
        lines.push(analysis.analysis.clone());
        lines.push(String::new());
        lines.push(self.color(
            &format!("Narrativa: {}", analysis.narrative_source.name()),
            "dim",
        ));

        Ok(lines.join("\n"))
    }

    fn generate_rubric_report(&self, rubric: &Rubric) -> Result<String, ReportError> {
        let mut lines = Vec::new();
        lines.push(self.color(&format!("Rubrica: {}", rubric.edition), "bold"));
        lines.push(self.color("─".repeat(RULE_WIDTH).as_str(), "dim"));

        for dimension in &rubric.dimensions {
            self.heading(
                &mut lines,
                &format!("{} (peso {:.0}%)", dimension.name, dimension.weight * 100.0),
            );
            if !dimension.description.is_empty() {
                lines.push(format!("  {}", self.color(&dimension.description, "dim")));
            }
            for id in &dimension.practice_ids {
                lines.push(format!(
                    "  • {} {}",
                    rubric.practice_name(id),
                    self.color(&format!("[{id}]"), "dim")
                ));
            }
        }

        self.heading(&mut lines, "Níveis de maturidade");
        for band in &rubric.bands {
            lines.push(format!(
                "  {} {} ({:.2} - {:.2})",
                self.color(&format!("{}.", band.level), "cyan"),
                band.name,
                band.score_range.0,
                band.score_range.1
            ));
        }

        Ok(lines.join("\n"))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerMap, CompanyInfo};

    fn report() -> ScoreReport {
        let rubric = Rubric::poc();
        let answers: AnswerMap = rubric.practices.iter().map(|p| (p.id.clone(), 2)).collect();
        ScoreReport::new(&rubric, CompanyInfo::new("ACME", "Varejo"), &answers, 3)
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("Saúde", 7), "Saúde  ");
        assert_eq!(pad("longer", 2), "longer");
    }

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0), "░".repeat(BAR_WIDTH));
        assert_eq!(bar(5.0), "█".repeat(BAR_WIDTH));
        assert_eq!(bar(2.5).chars().filter(|c| *c == '█').count(), 10);
    }

    #[test]
    fn test_score_report_plain() {
        let text = SummaryReporter::new()
            .no_color()
            .generate_score_report(&report())
            .unwrap();
        assert!(text.contains("Organização:  ACME (Varejo)"));
        assert!(text.contains("6/6 práticas respondidas"));
        assert!(text.contains("2.00 / 5.00  → Nível 2 - Reativo"));
        assert!(text.contains("Maiores lacunas"));
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_colored_output_has_escapes() {
        let text = SummaryReporter::new().generate_score_report(&report()).unwrap();
        assert!(text.contains("\x1b[33m2.00\x1b[0m"));
    }

    #[test]
    fn test_rubric_report_lists_practices_and_bands() {
        let text = SummaryReporter::new()
            .no_color()
            .generate_rubric_report(&Rubric::poc())
            .unwrap();
        assert!(text.contains("[central_servicos]"));
        assert!(text.contains("1. Inicial (1.00 - 1.80)"));
    }
}
