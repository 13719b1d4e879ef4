//! Data model for maturity assessments.
//!
//! - [`Rubric`]: immutable reference data (dimensions, practices, bands)
//! - [`AnswerMap`] and [`CompanyInfo`]: the inputs collected from the user
//! - [`AiAnalysis`]: the structured output handed to report renderers

mod analysis;
mod answers;
mod editions;
mod input;
mod rubric;

pub use analysis::{
    AiAnalysis, CriticalPoint, DimensionHighlights, InvestmentLevel, NarrativeSource,
    RoadmapPhase,
};
pub use answers::{AnswerMap, CompanyInfo};
pub use editions::{standard_bands, RubricEdition};
pub use input::{Assessment, DocumentSyntax};
pub use rubric::{
    Dimension, MaturityBand, Practice, Rubric, MAX_LEVEL, MIN_LEVEL, WEIGHT_TOLERANCE,
};
