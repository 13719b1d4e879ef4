//! Maturity scoring.
//!
//! Pure, synchronous functions over a [`Rubric`](crate::model::Rubric):
//!
//! - [`compute_scores`]: per-dimension mean levels and the weighted total
//! - [`classify`]: total score → maturity band
//! - [`rank_gaps`]: practices ordered by weighted distance from level 5
//!
//! # Usage
//!
//! ```
//! use itsm_assess::model::{AnswerMap, Rubric};
//! use itsm_assess::scoring::{classify, compute_scores, rank_gaps};
//!
//! let rubric = Rubric::poc();
//! let answers: AnswerMap = rubric
//!     .practices
//!     .iter()
//!     .map(|p| (p.id.clone(), 3))
//!     .collect();
//!
//! let scores = compute_scores(&answers, &rubric.dimensions);
//! assert_eq!(scores.total, 3.0);
//! assert_eq!(classify(scores.total, &rubric.bands).name, "Definido");
//!
//! let gaps = rank_gaps(&answers, &rubric, 5);
//! assert_eq!(gaps.len(), 5);
//! ```

mod classifier;
mod gaps;
mod scorer;

pub use classifier::classify;
pub use gaps::{rank_gaps, PracticeGap, DETAIL_GAP_COUNT, PRIORITY_GAP_COUNT};
pub use scorer::{compute_scores, round2, DimensionScore, Scores, SCORING_ENGINE_VERSION};

/// Dimensions scoring strictly below this value are critical.
pub const CRITICAL_THRESHOLD: f64 = 3.0;
