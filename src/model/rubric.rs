//! Rubric reference data: dimensions, practices and maturity bands.
//!
//! A [`Rubric`] is constructed once and passed by reference into every
//! engine function. It is never mutated after construction.

use crate::error::{AssessError, ErrorContext, InputErrorKind, Result, RubricErrorKind};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Tolerance applied when checking that dimension weights sum to 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Lowest and highest answer level on the 1-5 scale.
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;

/// A weighted group of related practices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Dimension {
    /// Stable identifier (e.g. `estrategica`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Short description of what the dimension covers
    #[serde(default)]
    pub description: String,
    /// Relative weight; weights across the rubric sum to 1.0
    pub weight: f64,
    /// Identifiers of the practices evaluated under this dimension
    pub practice_ids: Vec<String>,
}

/// A single evaluated capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Practice {
    pub id: String,
    pub name: String,
}

/// One of the five named maturity ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MaturityBand {
    /// Level 1-5
    pub level: u8,
    /// Band name (e.g. "Definido")
    pub name: String,
    /// Inclusive score range `(low, high)`
    pub score_range: (f64, f64),
    /// What organizations at this level typically look like
    pub characteristics: String,
    /// Risks typical of this level
    pub risks: String,
}

impl MaturityBand {
    /// Inclusive range membership.
    #[must_use]
    pub fn contains(&self, score: f64) -> bool {
        score >= self.score_range.0 && score <= self.score_range.1
    }
}

/// Immutable rubric: dimensions, practice catalog and maturity bands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Rubric {
    /// Human-readable edition name
    pub edition: String,
    pub dimensions: Vec<Dimension>,
    pub practices: Vec<Practice>,
    pub bands: Vec<MaturityBand>,
}

impl Rubric {
    /// Look up a practice by id.
    #[must_use]
    pub fn practice(&self, id: &str) -> Option<&Practice> {
        self.practices.iter().find(|p| p.id == id)
    }

    /// Practice display name, falling back to the id for unknown practices.
    #[must_use]
    pub fn practice_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.practice(id).map_or(id, |p| p.name.as_str())
    }

    /// Look up a dimension by id.
    #[must_use]
    pub fn dimension(&self, id: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.id == id)
    }

    /// Total number of practices referenced by the dimensions.
    #[must_use]
    pub fn practice_count(&self) -> usize {
        self.dimensions.iter().map(|d| d.practice_ids.len()).sum()
    }

    /// Sum of the dimension weights.
    #[must_use]
    pub fn weight_sum(&self) -> f64 {
        self.dimensions.iter().map(|d| d.weight).sum()
    }

    /// Check the structural invariants of the rubric.
    ///
    /// - dimension weights sum to 1.0
    /// - every practice is defined once and referenced by exactly one dimension
    /// - five bands, contiguous on the two-decimal grid, covering [1, 5]
    pub fn validate(&self) -> Result<()> {
        let sum = self.weight_sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(AssessError::rubric(
                &self.edition,
                RubricErrorKind::WeightSum(sum),
            ));
        }

        let mut defined = HashSet::new();
        for practice in &self.practices {
            if !defined.insert(practice.id.as_str()) {
                return Err(AssessError::rubric(
                    &self.edition,
                    RubricErrorKind::DuplicatePractice(practice.id.clone()),
                ));
            }
        }

        let mut referenced = HashSet::new();
        for dimension in &self.dimensions {
            for id in &dimension.practice_ids {
                if !defined.contains(id.as_str()) {
                    return Err(AssessError::rubric(
                        &self.edition,
                        RubricErrorKind::UnknownPractice(id.clone()),
                    ));
                }
                if !referenced.insert(id.as_str()) {
                    return Err(AssessError::rubric(
                        &self.edition,
                        RubricErrorKind::DuplicatePractice(id.clone()),
                    ));
                }
            }
        }
        if let Some(orphan) = self
            .practices
            .iter()
            .find(|p| !referenced.contains(p.id.as_str()))
        {
            return Err(AssessError::rubric(
                &self.edition,
                RubricErrorKind::OrphanPractice(orphan.id.clone()),
            ));
        }

        self.validate_bands()
    }

    fn validate_bands(&self) -> Result<()> {
        if self.bands.len() != 5 {
            return Err(AssessError::rubric(
                &self.edition,
                RubricErrorKind::BandCount(self.bands.len()),
            ));
        }

        let coverage = |msg: String| {
            AssessError::rubric(&self.edition, RubricErrorKind::BandCoverage(msg))
        };

        let first = &self.bands[0];
        let last = &self.bands[self.bands.len() - 1];
        if (first.score_range.0 - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(coverage(format!(
                "first band starts at {}",
                first.score_range.0
            )));
        }
        if (last.score_range.1 - 5.0).abs() > WEIGHT_TOLERANCE {
            return Err(coverage(format!("last band ends at {}", last.score_range.1)));
        }

        for pair in self.bands.windows(2) {
            let (prev, next) = (&pair[0], &pair[1]);
            let step = next.score_range.0 - prev.score_range.1;
            if (step - 0.01).abs() > WEIGHT_TOLERANCE {
                return Err(coverage(format!(
                    "gap or overlap between level {} ({}) and level {} ({})",
                    prev.level, prev.score_range.1, next.level, next.score_range.0
                )));
            }
            if next.level != prev.level + 1 {
                return Err(coverage(format!(
                    "levels out of order: {} followed by {}",
                    prev.level, next.level
                )));
            }
        }

        Ok(())
    }

    /// Parse a rubric document (YAML is a superset of JSON, so both work).
    pub fn from_str_document(content: &str) -> Result<Self> {
        let rubric: Self = serde_yaml::from_str(content).map_err(|e| {
            AssessError::rubric(
                "parsing rubric document",
                RubricErrorKind::InvalidDocument(e.to_string()),
            )
        })?;
        rubric.validate()?;
        Ok(rubric)
    }

    /// Load and validate a rubric from a YAML or JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            std::fs::read_to_string(path).map_err(|e| AssessError::io(path, e))?;
        Self::from_str_document(&content)
            .with_context(|| format!("loading rubric from {}", path.display()))
    }

    /// Serialize the rubric as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            AssessError::input("serializing rubric", InputErrorKind::InvalidJson(e.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_contains_is_inclusive() {
        let band = MaturityBand {
            level: 3,
            name: "Definido".to_string(),
            score_range: (2.61, 3.40),
            characteristics: String::new(),
            risks: String::new(),
        };
        assert!(band.contains(2.61));
        assert!(band.contains(3.40));
        assert!(!band.contains(3.41));
    }

    #[test]
    fn test_builtin_editions_validate() {
        Rubric::full().validate().unwrap();
        Rubric::poc().validate().unwrap();
    }

    #[test]
    fn test_weight_sum_violation_is_reported() {
        let mut rubric = Rubric::poc();
        rubric.dimensions[0].weight = 0.5;
        let err = rubric.validate().unwrap_err();
        assert!(matches!(
            err,
            AssessError::Rubric {
                source: RubricErrorKind::WeightSum(_),
                ..
            }
        ));
    }

    #[test]
    fn test_duplicate_reference_is_reported() {
        let mut rubric = Rubric::poc();
        let stolen = rubric.dimensions[1].practice_ids[0].clone();
        rubric.dimensions[0].practice_ids.push(stolen);
        assert!(rubric.validate().is_err());
    }

    #[test]
    fn test_band_gap_is_reported() {
        let mut rubric = Rubric::poc();
        rubric.bands[2].score_range.0 = 2.70;
        let err = rubric.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid rubric"));
    }

    #[test]
    fn test_document_roundtrip_through_yaml() {
        let rubric = Rubric::poc();
        let yaml = serde_yaml::to_string(&rubric).unwrap();
        let parsed = Rubric::from_str_document(&yaml).unwrap();
        assert_eq!(parsed, rubric);
    }

    #[test]
    fn test_practice_name_falls_back_to_id() {
        let rubric = Rubric::poc();
        assert_eq!(rubric.practice_name("central_servicos"), "Central de Serviços");
        assert_eq!(rubric.practice_name("nao_existe"), "nao_existe");
    }
}
