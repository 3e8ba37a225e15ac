use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Divisor applied to the contribution of a halved criterion.
pub const HALVING_DIVISOR: f64 = 2.0;

/// Deployment-level scoring adjustments.
///
/// `halved_criteria` lists criteria whose weighted contribution is divided by
/// [`HALVING_DIVISOR`]. The shipped configuration leaves it empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringPolicy {
    #[serde(default)]
    pub halved_criteria: BTreeSet<String>,
}

impl ScoringPolicy {
    pub fn with_halved<I, S>(criteria: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            halved_criteria: criteria.into_iter().map(Into::into).collect(),
        }
    }

    pub fn divisor_for(&self, criterion_id: &str) -> f64 {
        if self.halved_criteria.contains(criterion_id) {
            HALVING_DIVISOR
        } else {
            1.0
        }
    }
}
