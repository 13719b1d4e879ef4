//! Property-based tests for scoring, classification and diagnosis.
//!
//! Answers are drawn per practice from the full rubric, with `None` standing
//! for an unanswered practice.

use itsm_assess::{
    classify, compute_scores, diagnose, generate_fallback, rank_gaps, AnswerMap, Rubric,
};
use proptest::prelude::*;
use std::sync::LazyLock;

static FULL: LazyLock<Rubric> = LazyLock::new(Rubric::full);

fn answers_strategy() -> impl Strategy<Value = Vec<Option<u8>>> {
    prop::collection::vec(prop::option::weighted(0.9, 1u8..=5), FULL.practice_count())
}

fn to_answers(levels: &[Option<u8>]) -> AnswerMap {
    FULL.practices
        .iter()
        .zip(levels)
        .filter_map(|(practice, level)| level.map(|l| (practice.id.clone(), l)))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn total_is_within_scale(levels in answers_strategy()) {
        let scores = compute_scores(&to_answers(&levels), &FULL.dimensions);
        prop_assert!((0.0..=5.0).contains(&scores.total), "total {}", scores.total);
        for dimension in scores.by_dimension.values() {
            prop_assert!((0.0..=5.0).contains(&dimension.score));
        }
    }

    #[test]
    fn fully_answered_total_classifies_inside_a_band(
        levels in prop::collection::vec(1u8..=5, FULL.practice_count())
    ) {
        let answers: AnswerMap = FULL
            .practices
            .iter()
            .zip(&levels)
            .map(|(p, l)| (p.id.clone(), *l))
            .collect();
        let scores = compute_scores(&answers, &FULL.dimensions);
        let band = classify(scores.total, &FULL.bands);
        prop_assert!(band.contains(scores.total), "{} not in {:?}", scores.total, band.score_range);
    }

    #[test]
    fn raising_an_answer_never_lowers_the_total(
        levels in answers_strategy(),
        index in 0usize..34,
    ) {
        let before = compute_scores(&to_answers(&levels), &FULL.dimensions);

        let mut raised = levels.clone();
        let slot = &mut raised[index % levels.len()];
        *slot = Some(slot.map_or(1, |l| (l + 1).min(5)));
        let after = compute_scores(&to_answers(&raised), &FULL.dimensions);

        prop_assert!(after.total >= before.total, "{} < {}", after.total, before.total);
        let before_band = classify(before.total, &FULL.bands).level;
        let after_band = classify(after.total, &FULL.bands).level;
        prop_assert!(after_band >= before_band);
    }

    #[test]
    fn gaps_are_sorted_descending_and_truncated(
        levels in answers_strategy(),
        n in 0usize..40,
    ) {
        let gaps = rank_gaps(&to_answers(&levels), &FULL, n);
        prop_assert_eq!(gaps.len(), n.min(FULL.practice_count()));
        for pair in gaps.windows(2) {
            prop_assert!(pair[0].gap >= pair[1].gap);
        }
        for gap in &gaps {
            prop_assert!(gap.gap >= 0.0);
            prop_assert!((1..=5).contains(&gap.level));
        }
    }

    #[test]
    fn critical_points_always_carry_risks_and_mitigations(
        levels in answers_strategy(),
        sector in "\\PC{0,40}",
    ) {
        let answers = to_answers(&levels);
        let scores = compute_scores(&answers, &FULL.dimensions);
        let gaps = rank_gaps(&answers, &FULL, 10);

        for point in diagnose(&scores, &FULL, &sector, &gaps) {
            prop_assert!(point.score < 3.0);
            prop_assert!((1..=3).contains(&point.risks.len()));
            prop_assert!((1..=3).contains(&point.mitigations.len()));
            prop_assert!(point.practices.len() <= 3);
            prop_assert!(!point.diagnosis.trim().is_empty());
        }
    }

    #[test]
    fn fallback_narrative_is_never_empty(
        sector in "\\PC{0,40}",
        level in "(Inicial|Reativo|Definido|Gerenciado|Otimizado)",
        critical in prop::collection::vec("\\PC{1,20}", 0..4),
        strong in prop::collection::vec("\\PC{1,20}", 0..4),
    ) {
        let narrative = generate_fallback(&sector, &level, &critical, &strong);
        prop_assert!(narrative.is_usable());
        prop_assert!(
            !narrative.summary.contains("{sector}"),
            "sector placeholder left in summary: {}",
            narrative.summary
        );
        prop_assert!(
            !narrative.analysis.contains("{sector}"),
            "sector placeholder left in analysis: {}",
            narrative.analysis
        );
    }

    #[test]
    fn scoring_and_diagnosis_are_idempotent(
        levels in answers_strategy(),
        sector in "(Saúde|Banco|Indústria|Varejo|Educação)",
    ) {
        let answers = to_answers(&levels);
        let first = compute_scores(&answers, &FULL.dimensions);
        let second = compute_scores(&answers, &FULL.dimensions);
        prop_assert_eq!(&first, &second);

        let gaps = rank_gaps(&answers, &FULL, 10);
        prop_assert_eq!(
            diagnose(&first, &FULL, &sector, &gaps),
            diagnose(&second, &FULL, &sector, &gaps)
        );
    }
}

#[test]
fn every_two_decimal_score_has_a_band() {
    let rubric = Rubric::full();
    for cents in 100..=500 {
        let score = f64::from(cents) / 100.0;
        let band = classify(score, &rubric.bands);
        assert!(band.contains(score), "{score} not in {:?}", band.score_range);
    }
}

#[test]
fn builtin_weights_sum_to_one() {
    for rubric in [Rubric::full(), Rubric::poc()] {
        assert!((rubric.weight_sum() - 1.0).abs() < 1e-9, "{}", rubric.edition);
        rubric.validate().expect("built-in rubric should validate");
    }
}
