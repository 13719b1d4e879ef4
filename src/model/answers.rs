//! Assessment inputs: the sparse answer map and company information.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Practice id → answered level (1-5).
///
/// Unanswered practices are absent from the map. Levels outside 1-5 are not
/// rejected; callers are expected to constrain them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnswerMap(BTreeMap<String, u8>);

impl AnswerMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or overwrite) the answer for a practice.
    pub fn set(&mut self, practice_id: impl Into<String>, level: u8) {
        self.0.insert(practice_id.into(), level);
    }

    /// Builder-style variant of [`AnswerMap::set`].
    #[must_use]
    pub fn with(mut self, practice_id: impl Into<String>, level: u8) -> Self {
        self.set(practice_id, level);
        self
    }

    /// Answered level, if any.
    #[must_use]
    pub fn level(&self, practice_id: &str) -> Option<u8> {
        self.0.get(practice_id).copied()
    }

    /// Forget an answer.
    pub fn remove(&mut self, practice_id: &str) -> Option<u8> {
        self.0.remove(practice_id)
    }

    /// Reset the assessment.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}

impl<K: Into<String>> FromIterator<(K, u8)> for AnswerMap {
    fn from_iter<I: IntoIterator<Item = (K, u8)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Free-text company information supplied with an assessment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CompanyInfo {
    pub name: String,
    /// Natural-language sector, matched by keyword heuristics
    #[serde(default)]
    pub sector: String,
}

impl CompanyInfo {
    pub fn new(name: impl Into<String>, sector: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sector: sector.into(),
        }
    }
}
