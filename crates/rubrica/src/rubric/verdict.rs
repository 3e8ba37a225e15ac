use super::catalog::{RubricCatalog, SectionKey};
use super::criteria::CriteriaMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest final grade that passes.
pub const PASSING_GRADE: f64 = 5.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Aprobado,
    Reprobado,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Aprobado => "APROBADO",
            Verdict::Reprobado => "REPROBADO",
        }
    }

    pub fn is_pass(self) -> bool {
        matches!(self, Verdict::Aprobado)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn determine_verdict(final_grade: f64) -> Verdict {
    if final_grade >= PASSING_GRADE {
        Verdict::Aprobado
    } else {
        Verdict::Reprobado
    }
}

/// Criterion that still needs a grade before the evaluation can be finalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MissingCriterion {
    pub id: &'static str,
    pub name: &'static str,
    pub section: SectionKey,
    pub section_name: &'static str,
}

pub(crate) fn missing_criteria(
    catalog: &RubricCatalog,
    criteria: &CriteriaMap,
) -> Vec<MissingCriterion> {
    catalog
        .criteria()
        .filter(|(_, criterion)| !criteria.is_graded(criterion.id))
        .map(|(section, criterion)| MissingCriterion {
            id: criterion.id,
            name: criterion.name,
            section: section.key,
            section_name: section.name,
        })
        .collect()
}

pub(crate) fn is_complete(catalog: &RubricCatalog, criteria: &CriteriaMap) -> bool {
    catalog
        .criteria()
        .all(|(_, criterion)| criteria.is_graded(criterion.id))
}

/// Raised when an evaluation is locked before every criterion has a grade.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinalizeError {
    #[error("evaluation is incomplete: {} criteria without a grade ({})", missing.len(), summarize(missing))]
    Incomplete { missing: Vec<MissingCriterion> },
}

fn summarize(missing: &[MissingCriterion]) -> String {
    missing
        .iter()
        .map(|entry| format!("{} / {}", entry.section_name, entry.name))
        .collect::<Vec<_>>()
        .join("; ")
}
