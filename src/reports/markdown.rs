//! Markdown report generator.

use super::escape::{escape_markdown_block, escape_markdown_inline, escape_markdown_table};
use super::{ReportError, ReportFormat, ReportGenerator, ScoreReport};
use crate::model::{AiAnalysis, Rubric};
use std::fmt::Write;

/// Markdown report generator
pub struct MarkdownReporter {
    /// Include the rubric practice ids in rubric reports
    include_ids: bool,
}

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { include_ids: true }
    }

    /// Hide practice ids in rubric reports
    #[must_use]
    pub const fn without_ids(mut self) -> Self {
        self.include_ids = false;
        self
    }

    fn write_score_sections(&self, md: &mut String, report: &ScoreReport) -> std::fmt::Result {
        writeln!(
            md,
            "# Avaliação de Maturidade ITSM: {}\n",
            escape_markdown_inline(&report.company.name)
        )?;

        writeln!(md, "| Campo | Valor |")?;
        writeln!(md, "|-------|-------|")?;
        writeln!(
            md,
            "| Setor | {} |",
            escape_markdown_table(&report.company.sector)
        )?;
        writeln!(md, "| Rubrica | {} |", escape_markdown_table(&report.edition))?;
        writeln!(
            md,
            "| Práticas respondidas | {}/{} |",
            report.answered, report.practice_count
        )?;
        writeln!(md, "| Pontuação geral | **{:.2}** / 5.00 |", report.scores.total)?;
        writeln!(
            md,
            "| Nível de maturidade | {} - {} |",
            report.band.level,
            escape_markdown_table(&report.band.name)
        )?;
        if let Some(ref path) = report.metadata.input_path {
            writeln!(md, "| Arquivo | `{}` |", escape_markdown_table(path))?;
        }
        writeln!(md)?;

        writeln!(md, "## Dimensões\n")?;
        writeln!(md, "| Dimensão | Pontuação | Peso |")?;
        writeln!(md, "|----------|-----------|------|")?;
        for dimension in report.scores.by_dimension.values() {
            writeln!(
                md,
                "| {} | {:.2} | {:.0}% |",
                escape_markdown_table(&dimension.name),
                dimension.score,
                dimension.weight * 100.0
            )?;
        }
        writeln!(md)?;

        if !report.top_gaps.is_empty() {
            writeln!(md, "## Maiores lacunas\n")?;
            writeln!(md, "| # | Prática | Dimensão | Nível | Lacuna |")?;
            writeln!(md, "|---|---------|----------|-------|--------|")?;
            for (rank, gap) in report.top_gaps.iter().enumerate() {
                writeln!(
                    md,
                    "| {} | {} | {} | {} | {:.2} |",
                    rank + 1,
                    escape_markdown_table(&gap.practice_name),
                    escape_markdown_table(&gap.dimension_name),
                    gap.level,
                    gap.gap
                )?;
            }
            writeln!(md)?;
        }

        Ok(())
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

fn write_list(md: &mut String, items: &[String]) -> std::fmt::Result {
    if items.is_empty() {
        writeln!(md, "_Nenhum item._")?;
    }
    for item in items {
        writeln!(md, "- {}", escape_markdown_inline(item))?;
    }
    writeln!(md)
}

impl ReportGenerator for MarkdownReporter {
    fn generate_score_report(&self, report: &ScoreReport) -> Result<String, ReportError> {
        let mut md = String::new();
        self.write_score_sections(&mut md, report)?;

        writeln!(md, "## Características do nível\n")?;
        writeln!(md, "{}\n", escape_markdown_block(&report.band.characteristics))?;
        writeln!(md, "**Riscos:** {}", escape_markdown_inline(&report.band.risks))?;

        Ok(md)
    }

    fn generate_analysis_report(
        &self,
        report: &ScoreReport,
        analysis: &AiAnalysis,
    ) -> Result<String, ReportError> {
        let mut md = String::new();
        self.write_score_sections(&mut md, report)?;

        writeln!(md, "## Resumo executivo\n")?;
        writeln!(md, "{}\n", escape_markdown_block(&analysis.executive_summary))?;

        writeln!(md, "## Destaques por dimensão\n")?;
        writeln!(md, "**Fortes:**\n")?;
        write_list(&mut md, &analysis.dimension_highlights.fortes)?;
        writeln!(md, "**Críticas:**\n")?;
        write_list(&mut md, &analysis.dimension_highlights.criticas)?;

        if !analysis.critical_points.is_empty() {
            writeln!(md, "## Pontos críticos\n")?;
            for point in &analysis.critical_points {
                writeln!(
                    md,
                    "### {} ({:.2})\n",
                    escape_markdown_inline(&point.dimension),
                    point.score
                )?;
                writeln!(md, "{}\n", escape_markdown_inline(&point.diagnosis))?;
                writeln!(md, "**Riscos:**\n")?;
                write_list(&mut md, &point.risks)?;
                writeln!(md, "**Mitigações:**\n")?;
                write_list(&mut md, &point.mitigations)?;
            }
        }

        writeln!(md, "## Prioridades estratégicas\n")?;
        for (i, priority) in analysis.strategic_priorities.iter().enumerate() {
            writeln!(md, "{}. {}", i + 1, escape_markdown_inline(priority))?;
        }
        writeln!(md)?;

        writeln!(md, "## Principais riscos\n")?;
        write_list(&mut md, &analysis.main_risks)?;

        writeln!(md, "## Roadmap\n")?;
        for phase in &analysis.roadmap {
            writeln!(
                md,
                "### Fase {}: {}\n",
                phase.phase,
                escape_markdown_inline(&phase.name)
            )?;
            writeln!(
                md,
                "*Prazo:* {} · *Investimento:* {}\n",
                escape_markdown_inline(&phase.timeframe),
                phase.investment
            )?;
            write_list(&mut md, &phase.actions)?;
            writeln!(md, "**KPIs:**\n")?;
            write_list(&mut md, &phase.kpis)?;
        }

        writeln!(md, "## Análise detalhada\n")?;
        writeln!(md, "{}\n", escape_markdown_block(&analysis.analysis))?;

        writeln!(md, "---\n")?;
        writeln!(
            md,
            "*Narrativa gerada por: {}*",
            analysis.narrative_source.name()
        )?;

        Ok(md)
    }

    fn generate_rubric_report(&self, rubric: &Rubric) -> Result<String, ReportError> {
        let mut md = String::new();
        writeln!(md, "# Rubrica: {}\n", escape_markdown_inline(&rubric.edition))?;

        for dimension in &rubric.dimensions {
            writeln!(
                md,
                "## {} ({:.0}%)\n",
                escape_markdown_inline(&dimension.name),
                dimension.weight * 100.0
            )?;
            if !dimension.description.is_empty() {
                writeln!(md, "{}\n", escape_markdown_inline(&dimension.description))?;
            }
            for id in &dimension.practice_ids {
                let name = escape_markdown_inline(rubric.practice_name(id));
                if self.include_ids {
                    writeln!(md, "- {name} (`{id}`)")?;
                } else {
                    writeln!(md, "- {name}")?;
                }
            }
            writeln!(md)?;
        }

        writeln!(md, "## Níveis de maturidade\n")?;
        writeln!(md, "| Nível | Nome | Faixa | Características |")?;
        writeln!(md, "|-------|------|-------|-----------------|")?;
        for band in &rubric.bands {
            writeln!(
                md,
                "| {} | {} | {:.2} - {:.2} | {} |",
                band.level,
                escape_markdown_table(&band.name),
                band.score_range.0,
                band.score_range.1,
                escape_markdown_table(&band.characteristics)
            )?;
        }

        Ok(md)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Markdown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerMap, CompanyInfo};

    #[test]
    fn test_score_report_escapes_company() {
        let rubric = Rubric::poc();
        let report = ScoreReport::new(
            &rubric,
            CompanyInfo::new("ACME | *Lab*", "Varejo"),
            &AnswerMap::new().with("central_servicos", 4),
            3,
        );
        let md = MarkdownReporter::new().generate_score_report(&report).unwrap();

        assert!(md.starts_with("# Avaliação de Maturidade ITSM: ACME \\| \\*Lab\\*"));
        assert!(md.contains("| Práticas respondidas | 1/6 |"));
        assert!(md.contains("## Maiores lacunas"));
        assert!(md.contains("| Operacional Core |"));
    }

    #[test]
    fn test_rubric_report_ids() {
        let rubric = Rubric::poc();
        let with_ids = MarkdownReporter::new().generate_rubric_report(&rubric).unwrap();
        assert!(with_ids.contains("- Central de Serviços (`central_servicos`)"));

        let without = MarkdownReporter::new()
            .without_ids()
            .generate_rubric_report(&rubric)
            .unwrap();
        assert!(without.contains("- Central de Serviços\n"));
        assert!(without.contains("| 5 | Otimizado | 4.21 - 5.00 |"));
    }
}
