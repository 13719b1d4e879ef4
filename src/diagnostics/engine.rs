//! Critical-point derivation for below-threshold dimensions.

use super::rules::{dimension_rule, practice_rules_for};
use super::sector::Sector;
use crate::model::{CriticalPoint, Rubric};
use crate::scoring::{PracticeGap, Scores, CRITICAL_THRESHOLD};

/// Maximum weak practices, risks and mitigations per critical point.
pub const MAX_ITEMS_PER_POINT: usize = 3;

/// Build one [`CriticalPoint`] per dimension scoring below
/// [`CRITICAL_THRESHOLD`], in rubric order.
///
/// `top_gaps` selects which practices are named in each diagnosis (zero gaps
/// are ignored). Risks and
/// mitigations are never empty: dimensions without a matching practice rule
/// use the dimension table.
#[must_use]
pub fn diagnose(
    scores: &Scores,
    rubric: &Rubric,
    sector: &str,
    top_gaps: &[PracticeGap],
) -> Vec<CriticalPoint> {
    let sector = Sector::new(sector);

    let points: Vec<CriticalPoint> = scores
        .by_dimension
        .iter()
        .filter(|(_, score)| score.score < CRITICAL_THRESHOLD)
        .map(|(id, score)| {
            let practices: Vec<String> = top_gaps
                .iter()
                .filter(|gap| &gap.dimension_id == id && gap.gap > 0.0)
                .take(MAX_ITEMS_PER_POINT)
                .map(|gap| gap.practice_name.clone())
                .collect();

            let name = rubric
                .dimension(id)
                .map_or(score.name.as_str(), |d| d.name.as_str());

            CriticalPoint {
                dimension_id: id.clone(),
                dimension: name.to_string(),
                score: score.score,
                diagnosis: diagnosis_text(id, name, score.score, &practices, &sector),
                risks: risks_for(id, &practices, &sector),
                mitigations: mitigations_for(id, &practices),
                practices,
            }
        })
        .collect();

    tracing::debug!(
        critical = points.len(),
        sector = ?sector.kind,
        "Derived critical points"
    );
    points
}

fn diagnosis_text(
    dimension_id: &str,
    dimension_name: &str,
    score: f64,
    practices: &[String],
    sector: &Sector<'_>,
) -> String {
    let problem = if practices.is_empty() {
        format!(
            "A dimensão {dimension_name} obteve pontuação {score:.2}, abaixo do patamar de maturidade esperado."
        )
    } else {
        dimension_rule(dimension_id)
            .problem
            .replace("{practices}", &practices.join(", "))
    };
    format!("{problem} {}", sector.diagnosis_clause())
}

fn risks_for(dimension_id: &str, practices: &[String], sector: &Sector<'_>) -> Vec<String> {
    let mut risks = Vec::new();
    for practice in practices {
        for rule in practice_rules_for(practice) {
            extend_unique(&mut risks, rule.risks.iter().map(|r| (*r).to_string()));
        }
    }
    if risks.is_empty() {
        let rule = dimension_rule(dimension_id);
        extend_unique(&mut risks, rule.risks.iter().map(|r| (*r).to_string()));
    }
    extend_unique(&mut risks, sector.risks());
    risks.truncate(MAX_ITEMS_PER_POINT);
    risks
}

fn mitigations_for(dimension_id: &str, practices: &[String]) -> Vec<String> {
    let mut mitigations = Vec::new();
    for practice in practices {
        for rule in practice_rules_for(practice) {
            extend_unique(&mut mitigations, rule.mitigations.iter().map(|m| (*m).to_string()));
        }
    }
    if mitigations.is_empty() {
        let rule = dimension_rule(dimension_id);
        extend_unique(&mut mitigations, rule.mitigations.iter().map(|m| (*m).to_string()));
    }
    mitigations.truncate(MAX_ITEMS_PER_POINT);
    mitigations
}

/// Append items not already present, keeping first-seen order.
pub(crate) fn extend_unique<I>(target: &mut Vec<String>, items: I)
where
    I: IntoIterator<Item = String>,
{
    for item in items {
        if !target.contains(&item) {
            target.push(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AnswerMap;
    use crate::scoring::{compute_scores, rank_gaps, DETAIL_GAP_COUNT};

    fn run(answers: &AnswerMap, rubric: &Rubric, sector: &str) -> Vec<CriticalPoint> {
        let scores = compute_scores(answers, &rubric.dimensions);
        let gaps = rank_gaps(answers, rubric, DETAIL_GAP_COUNT);
        diagnose(&scores, rubric, sector, &gaps)
    }

    fn all_at(rubric: &Rubric, level: u8) -> AnswerMap {
        rubric.practices.iter().map(|p| (p.id.clone(), level)).collect()
    }

    #[test]
    fn test_no_critical_points_at_threshold() {
        let rubric = Rubric::poc();
        assert!(run(&all_at(&rubric, 3), &rubric, "Saúde").is_empty());
    }

    #[test]
    fn test_single_weak_dimension() {
        let rubric = Rubric::poc();
        let answers = all_at(&rubric, 5).with("gestao_estrategia", 1);
        let points = run(&answers, &rubric, "Saúde");

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.dimension_id, "estrategica");
        assert_eq!(point.score, 1.0);
        assert_eq!(point.practices, vec!["Gestão de Estratégia".to_string()]);
        assert!(point.diagnosis.contains("Gestão de Estratégia"));
        assert!(point.diagnosis.contains("setor de saúde"));
    }

    #[test]
    fn test_practice_rule_risks_then_sector_risks() {
        let rubric = Rubric::poc();
        let answers = all_at(&rubric, 5).with("gestao_estrategia", 1);
        let point = &run(&answers, &rubric, "Banco Central")[0];

        assert_eq!(point.risks.len(), 3);
        assert_eq!(
            point.risks[0],
            "Investimentos em TI desconectados dos objetivos do negócio"
        );
        assert!(point.risks[2].contains("Banco Central"));
        assert_eq!(point.mitigations.len(), 2);
    }

    #[test]
    fn test_dimension_fallback_when_no_rule_matches() {
        let rubric = Rubric::full();
        // only unmatched technology practices are weak
        let answers = all_at(&rubric, 5)
            .with("design_servicos", 1)
            .with("validacao_testes", 1)
            .with("gestao_implantacao", 1)
            .with("catalogo_servicos", 1);
        let points = run(&answers, &rubric, "");

        assert_eq!(points.len(), 1);
        let point = &points[0];
        assert_eq!(point.dimension_id, "tecnologia");
        assert_eq!(
            point.risks[0],
            "Obsolescência tecnológica e aumento da dívida técnica"
        );
        assert_eq!(point.mitigations[0], "Elaborar roadmap de modernização tecnológica");
    }

    #[test]
    fn test_weak_dimension_without_top_gaps() {
        let rubric = Rubric::poc();
        let answers = all_at(&rubric, 2);
        let scores = compute_scores(&answers, &rubric.dimensions);
        let points = diagnose(&scores, &rubric, "xyz", &[]);

        assert_eq!(points.len(), 3);
        for point in &points {
            assert!(point.practices.is_empty());
            assert!(point.diagnosis.contains("2.00"));
            assert!(point.diagnosis.contains("setor de xyz"));
            assert!(!point.risks.is_empty());
            assert!(!point.mitigations.is_empty());
        }
    }

    #[test]
    fn test_lists_are_deduplicated_and_capped() {
        let rubric = Rubric::full();
        let points = run(&AnswerMap::new(), &rubric, "Hospital");
        assert_eq!(points.len(), 5);
        for point in &points {
            assert!(point.practices.len() <= MAX_ITEMS_PER_POINT);
            assert!(point.risks.len() <= MAX_ITEMS_PER_POINT);
            assert!(point.mitigations.len() <= MAX_ITEMS_PER_POINT);
            let mut unique = point.risks.clone();
            unique.dedup();
            assert_eq!(unique.len(), point.risks.len());
        }
    }

    #[test]
    fn test_extend_unique_keeps_first_order() {
        let mut items = vec!["a".to_string()];
        extend_unique(&mut items, ["b", "a", "c", "b"].map(String::from));
        assert_eq!(items, vec!["a", "b", "c"]);
    }
}
