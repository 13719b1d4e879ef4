//! Weighted maturity scorer.
//!
//! Dimension score is the mean practice level (missing answers count as 0);
//! the total is the weight-blended sum of the unrounded dimension scores.

use crate::model::{AnswerMap, Dimension};
use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Scoring engine version
pub const SCORING_ENGINE_VERSION: &str = "1.0";

/// Score of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DimensionScore {
    pub name: String,
    /// Mean practice level, rounded to 2 decimals
    pub score: f64,
    pub weight: f64,
}

/// Immutable scoring snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[must_use]
pub struct Scores {
    /// Weighted overall score, rounded to 2 decimals
    pub total: f64,
    /// Dimension id → score, in rubric order
    pub by_dimension: IndexMap<String, DimensionScore>,
}

impl Scores {
    /// Score of a dimension by id.
    #[must_use]
    pub fn dimension(&self, id: &str) -> Option<&DimensionScore> {
        self.by_dimension.get(id)
    }

    /// Whether the named dimension scored strictly below `threshold`.
    ///
    /// Unknown dimensions are never below threshold.
    #[must_use]
    pub fn is_below(&self, id: &str, threshold: f64) -> bool {
        self.dimension(id).is_some_and(|d| d.score < threshold)
    }
}

/// Round half away from zero to 2 decimal places.
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute per-dimension and overall scores.
///
/// Never fails: an empty map yields a total of 0, and dimensions without
/// practices are skipped entirely.
pub fn compute_scores(answers: &AnswerMap, dimensions: &[Dimension]) -> Scores {
    let mut by_dimension = IndexMap::with_capacity(dimensions.len());
    let mut total = 0.0;

    for dimension in dimensions {
        if dimension.practice_ids.is_empty() {
            continue;
        }

        let sum: f64 = dimension
            .practice_ids
            .iter()
            .map(|id| f64::from(answers.level(id).unwrap_or(0)))
            .sum();
        let score = sum / dimension.practice_ids.len() as f64;

        total += score * dimension.weight;
        by_dimension.insert(
            dimension.id.clone(),
            DimensionScore {
                name: dimension.name.clone(),
                score: round2(score),
                weight: dimension.weight,
            },
        );
    }

    Scores {
        total: round2(total),
        by_dimension,
    }
}
