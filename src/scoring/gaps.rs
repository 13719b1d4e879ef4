//! Practice gap ranking.
//!
//! A practice's gap is its weighted distance from the maximum level:
//! `(5 - level) * dimension_weight`. Unanswered practices are ranked as
//! level 1, unlike the scorer which counts them as 0.

use crate::model::{AnswerMap, Dimension, Rubric, MAX_LEVEL, MIN_LEVEL};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Default number of gaps used for strategic priorities and the roadmap.
pub const PRIORITY_GAP_COUNT: usize = 5;

/// Default number of gaps used for the detailed diagnosis.
pub const DETAIL_GAP_COUNT: usize = 10;

/// Weighted shortfall of one practice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PracticeGap {
    pub practice_id: String,
    pub practice_name: String,
    pub dimension_id: String,
    pub dimension_name: String,
    pub gap: f64,
    /// Level used for the gap (1 when unanswered)
    pub level: u8,
}

/// Rank practices by weighted gap, largest first, keeping the top `n`.
///
/// Ties keep rubric iteration order (stable sort).
#[must_use]
pub fn rank_gaps(answers: &AnswerMap, rubric: &Rubric, n: usize) -> Vec<PracticeGap> {
    let mut gaps = practice_gaps(answers, &rubric.dimensions, |id| {
        rubric.practice_name(id).to_string()
    });
    gaps.sort_by(|a, b| {
        b.gap
            .partial_cmp(&a.gap)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    gaps.truncate(n);
    gaps
}

/// Unsorted gaps for every practice, in rubric order.
fn practice_gaps<F>(answers: &AnswerMap, dimensions: &[Dimension], name_of: F) -> Vec<PracticeGap>
where
    F: Fn(&str) -> String,
{
    dimensions
        .iter()
        .flat_map(|dimension| {
            let name_of = &name_of;
            dimension.practice_ids.iter().map(move |id| {
                let level = answers.level(id).unwrap_or(MIN_LEVEL);
                PracticeGap {
                    practice_id: id.clone(),
                    practice_name: name_of(id),
                    dimension_id: dimension.id.clone(),
                    dimension_name: dimension.name.clone(),
                    gap: (f64::from(MAX_LEVEL) - f64::from(level)) * dimension.weight,
                    level,
                }
            })
        })
        .collect()
}
