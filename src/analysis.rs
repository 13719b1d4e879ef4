//! Assessment engine: scoring, diagnosis, roadmap and narrative in one call.
//!
//! [`AssessmentEngine`] owns a [`Rubric`] and a [`NarrativeChain`] and
//! composes the pure scoring and rule modules into an [`AiAnalysis`].
//!
//! ```
//! use itsm_assess::analysis::AssessmentEngine;
//! use itsm_assess::model::{AnswerMap, CompanyInfo, NarrativeSource, Rubric};
//!
//! # tokio_test_block(async {
//! let engine = AssessmentEngine::new(Rubric::poc());
//! let answers = AnswerMap::new().with("central_servicos", 2);
//! let scores = engine.compute_scores(&answers);
//!
//! let analysis = engine
//!     .generate_analysis(&scores, &CompanyInfo::new("ACME", "Varejo"), &answers)
//!     .await;
//! assert_eq!(analysis.roadmap.len(), 3);
//! assert_eq!(analysis.narrative_source, NarrativeSource::Fallback);
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) -> F::Output {
//! #     tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap().block_on(f)
//! # }
//! ```

use crate::config::AnalysisConfig;
use crate::diagnostics::{diagnose, extend_unique};
use crate::model::{AiAnalysis, AnswerMap, CompanyInfo, DimensionHighlights, MaturityBand, Rubric};
use crate::narrative::{build_prompt, generate_fallback, NarrativeChain};
use crate::roadmap::build_roadmap;
use crate::scoring::{self, rank_gaps, PracticeGap, Scores, CRITICAL_THRESHOLD};

/// Upper bound on `main_risks`.
pub const MAX_MAIN_RISKS: usize = 5;

/// Scores assessments and produces full analyses against one rubric.
pub struct AssessmentEngine {
    rubric: Rubric,
    chain: NarrativeChain,
    config: AnalysisConfig,
}

impl AssessmentEngine {
    /// Engine with default tuning and the rule-based narrative only.
    #[must_use]
    pub fn new(rubric: Rubric) -> Self {
        Self {
            rubric,
            chain: NarrativeChain::offline(),
            config: AnalysisConfig::default(),
        }
    }

    /// Use `chain` for the narrative sections.
    #[must_use]
    pub fn with_chain(mut self, chain: NarrativeChain) -> Self {
        self.chain = chain;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: AnalysisConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub const fn rubric(&self) -> &Rubric {
        &self.rubric
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn compute_scores(&self, answers: &AnswerMap) -> Scores {
        scoring::compute_scores(answers, &self.rubric.dimensions)
    }

    #[must_use]
    pub fn classify(&self, total: f64) -> &MaturityBand {
        scoring::classify(total, &self.rubric.bands)
    }

    /// Build the complete analysis.
    ///
    /// Never fails. Provider errors are logged and the rule-based narrative
    /// is used instead; [`AiAnalysis::narrative_source`] records which
    /// branch produced the prose.
    pub async fn generate_analysis(
        &self,
        scores: &Scores,
        company: &CompanyInfo,
        answers: &AnswerMap,
    ) -> AiAnalysis {
        let band = self.classify(scores.total);
        let detail_gaps = rank_gaps(answers, &self.rubric, self.config.detail_gaps);
        let priority_gaps = rank_gaps(answers, &self.rubric, self.config.priority_gaps);

        let highlights = self.highlights(scores);
        let critical_points = diagnose(scores, &self.rubric, &company.sector, &detail_gaps);
        let roadmap = build_roadmap(scores, &critical_points, &company.sector, &priority_gaps);

        let mut main_risks = Vec::new();
        for point in &critical_points {
            extend_unique(&mut main_risks, point.risks.iter().cloned());
        }
        main_risks.truncate(MAX_MAIN_RISKS);
        if main_risks.is_empty() && !band.risks.is_empty() {
            main_risks.push(band.risks.clone());
        }

        let prompt = build_prompt(company, scores, band, &priority_gaps, &critical_points);
        let outcome = self
            .chain
            .generate(&prompt, || {
                generate_fallback(
                    &company.sector,
                    &band.name,
                    &highlights.criticas,
                    &highlights.fortes,
                )
            })
            .await;

        tracing::debug!(
            total = scores.total,
            band = %band.name,
            critical = critical_points.len(),
            source = outcome.source.name(),
            "Analysis complete"
        );

        AiAnalysis {
            segment: company.sector.clone(),
            organization: company.name.clone(),
            maturity_score: scores.total,
            maturity_level: band.name.clone(),
            dimension_highlights: highlights,
            critical_points,
            strategic_priorities: strategic_priorities(&priority_gaps),
            main_risks,
            roadmap,
            executive_summary: outcome.narrative.summary,
            analysis: outcome.narrative.analysis,
            narrative_source: outcome.source,
        }
    }

    /// Strong dimensions (at or above the configured threshold) and critical
    /// ones (below 3.0), by display name in rubric order.
    fn highlights(&self, scores: &Scores) -> DimensionHighlights {
        let mut highlights = DimensionHighlights::default();
        for dimension in scores.by_dimension.values() {
            if dimension.score >= self.config.strong_threshold {
                highlights.fortes.push(dimension.name.clone());
            } else if dimension.score < CRITICAL_THRESHOLD {
                highlights.criticas.push(dimension.name.clone());
            }
        }
        highlights
    }
}

/// One priority per non-zero gap, largest first.
fn strategic_priorities(gaps: &[PracticeGap]) -> Vec<String> {
    gaps.iter()
        .filter(|gap| gap.gap > 0.0)
        .map(|gap| {
            format!(
                "Elevar a maturidade de {} ({}), hoje no nível {}",
                gap.practice_name, gap.dimension_name, gap.level
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NarrativeSource;

    fn uniform(rubric: &Rubric, level: u8) -> AnswerMap {
        rubric.practices.iter().map(|p| (p.id.clone(), level)).collect()
    }

    #[tokio::test]
    async fn test_analysis_for_weak_assessment() {
        let engine = AssessmentEngine::new(Rubric::poc());
        let answers = uniform(engine.rubric(), 1);
        let scores = engine.compute_scores(&answers);

        let analysis = engine
            .generate_analysis(&scores, &CompanyInfo::new("ACME", "Varejo"), &answers)
            .await;

        assert_eq!(analysis.organization, "ACME");
        assert_eq!(analysis.segment, "Varejo");
        assert_eq!(analysis.maturity_level, "Inicial");
        assert_eq!(analysis.dimension_highlights.criticas.len(), 3);
        assert!(analysis.dimension_highlights.fortes.is_empty());
        assert_eq!(analysis.critical_points.len(), 3);
        assert_eq!(analysis.strategic_priorities.len(), 5);
        assert!(!analysis.main_risks.is_empty());
        assert!(analysis.main_risks.len() <= MAX_MAIN_RISKS);
        assert_eq!(analysis.roadmap.len(), 3);
        assert_eq!(analysis.narrative_source, NarrativeSource::Fallback);
        assert!(!analysis.executive_summary.is_empty());
        assert!(!analysis.analysis.is_empty());
    }

    #[tokio::test]
    async fn test_analysis_for_optimised_assessment() {
        let engine = AssessmentEngine::new(Rubric::poc());
        let answers = uniform(engine.rubric(), 5);
        let scores = engine.compute_scores(&answers);

        let analysis = engine
            .generate_analysis(&scores, &CompanyInfo::new("ACME", "Varejo"), &answers)
            .await;

        assert_eq!(analysis.maturity_level, "Otimizado");
        assert_eq!(analysis.dimension_highlights.fortes.len(), 3);
        assert!(analysis.critical_points.is_empty());
        assert!(analysis.strategic_priorities.is_empty());
        // no critical points: the band risk text stands in
        assert_eq!(analysis.main_risks, vec![engine.classify(5.0).risks.clone()]);
    }

    #[test]
    fn test_highlights_respect_threshold() {
        let engine = AssessmentEngine::new(Rubric::poc()).with_config(AnalysisConfig {
            strong_threshold: 4.0,
            ..AnalysisConfig::default()
        });
        let answers = uniform(engine.rubric(), 1)
            .with("gestao_estrategia", 4)
            .with("gestao_riscos", 3)
            .with("seguranca_informacao", 4);
        let highlights = engine.highlights(&engine.compute_scores(&answers));

        assert_eq!(highlights.fortes, vec!["Estratégica"]);
        assert_eq!(highlights.criticas, vec!["Operacional Core"]);
    }

    #[test]
    fn test_priorities_skip_zero_gaps() {
        let rubric = Rubric::poc();
        let answers = uniform(&rubric, 5).with("controle_mudancas", 2);
        let priorities = strategic_priorities(&rank_gaps(&answers, &rubric, 5));
        assert_eq!(priorities.len(), 1);
        assert!(priorities[0].contains("Controle de Mudanças"));
        assert!(priorities[0].ends_with("nível 2"));
    }
}
