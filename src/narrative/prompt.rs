//! Prompt construction for remote providers.

use crate::model::{CompanyInfo, CriticalPoint, MaturityBand};
use crate::scoring::{PracticeGap, Scores};
use std::fmt::Write as _;

/// Section header the provider must emit before the summary.
pub const SUMMARY_HEADER: &str = "RESUMO EXECUTIVO";
/// Section header the provider must emit before the analysis.
pub const ANALYSIS_HEADER: &str = "ANÁLISE DETALHADA";

/// Build the provider prompt from the structured analysis inputs.
#[must_use]
pub fn build_prompt(
    company: &CompanyInfo,
    scores: &Scores,
    band: &MaturityBand,
    top_gaps: &[PracticeGap],
    critical_points: &[CriticalPoint],
) -> String {
    let mut prompt = String::with_capacity(2048);

    let _ = writeln!(
        prompt,
        "Você é um consultor sênior de gestão de serviços de TI (ITIL 4). \
         Escreva uma análise de maturidade em português do Brasil, em prosa corrida, \
         sem markdown, sem listas e sem títulos além dos indicados."
    );
    prompt.push('\n');

    let _ = writeln!(prompt, "Organização: {}", company.name);
    let _ = writeln!(prompt, "Setor: {}", company.sector);
    let _ = writeln!(
        prompt,
        "Pontuação geral: {:.2} de 5.00 (nível {} - {})",
        scores.total, band.level, band.name
    );
    prompt.push('\n');

    let _ = writeln!(prompt, "Pontuação por dimensão:");
    for dimension in scores.by_dimension.values() {
        let _ = writeln!(
            prompt,
            "- {}: {:.2} (peso {:.0}%)",
            dimension.name,
            dimension.score,
            dimension.weight * 100.0
        );
    }
    prompt.push('\n');

    if !top_gaps.is_empty() {
        let _ = writeln!(prompt, "Práticas com maiores lacunas:");
        for gap in top_gaps {
            let _ = writeln!(
                prompt,
                "- {} ({}): nível {}, lacuna ponderada {:.2}",
                gap.practice_name, gap.dimension_name, gap.level, gap.gap
            );
        }
        prompt.push('\n');
    }

    if !critical_points.is_empty() {
        let _ = writeln!(prompt, "Pontos críticos identificados:");
        for point in critical_points {
            let _ = writeln!(prompt, "- {} ({:.2}): {}", point.dimension, point.score, point.diagnosis);
        }
        prompt.push('\n');
    }

    let _ = writeln!(
        prompt,
        "Responda exatamente com duas seções, nesta ordem:\n\
         {SUMMARY_HEADER}\n\
         Um parágrafo de 4 a 6 frases para a alta direção.\n\
         {ANALYSIS_HEADER}\n\
         De 3 a 5 parágrafos relacionando as lacunas ao contexto do setor, \
         com riscos, impactos financeiros e recomendações."
    );

    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AnswerMap, Rubric};
    use crate::scoring::{classify, compute_scores, rank_gaps};

    #[test]
    fn test_prompt_contains_inputs_and_headers() {
        let rubric = Rubric::poc();
        let answers = AnswerMap::new().with("gestao_estrategia", 2);
        let scores = compute_scores(&answers, &rubric.dimensions);
        let band = classify(scores.total, &rubric.bands);
        let gaps = rank_gaps(&answers, &rubric, rubric.practice_count());
        let company = CompanyInfo::new("ACME", "Varejo");

        let prompt = build_prompt(&company, &scores, band, &gaps, &[]);
        assert!(prompt.contains("Organização: ACME"));
        assert!(prompt.contains("Setor: Varejo"));
        assert!(prompt.contains("Operacional Core: 0.00 (peso 40%)"));
        assert!(prompt.contains(
            "- Gestão de Estratégia (Estratégica): nível 2, lacuna ponderada 0.90"
        ));
        assert!(prompt.contains(SUMMARY_HEADER));
        assert!(prompt.contains(ANALYSIS_HEADER));
        assert!(!prompt.contains("Pontos críticos"));
    }

    #[test]
    fn test_prompt_lists_only_the_given_gaps() {
        let rubric = Rubric::poc();
        let answers = AnswerMap::new().with("gestao_estrategia", 2);
        let scores = compute_scores(&answers, &rubric.dimensions);
        let band = classify(scores.total, &rubric.bands);
        // unanswered practices outrank the answered one
        let gaps = rank_gaps(&answers, &rubric, 5);
        assert!(gaps.iter().all(|g| g.practice_id != "gestao_estrategia"));

        let prompt = build_prompt(&CompanyInfo::new("ACME", "Varejo"), &scores, band, &gaps, &[]);
        assert!(!prompt.contains("Gestão de Estratégia (Estratégica): nível 2"));
        assert_eq!(prompt.matches("lacuna ponderada").count(), 5);
    }
}
