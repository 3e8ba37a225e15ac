use super::catalog::RubricCatalog;
use super::criteria::CriteriaMap;
use super::record::EvaluationRecord;
use super::scale::QualitativeScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Where a restored criteria map came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CriteriaSource {
    /// A saved per-criterion draft.
    Exact,
    /// Synthesised from the four persisted section scores.
    Approximated,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedCriteria {
    pub source: CriteriaSource,
    pub criteria: CriteriaMap,
}

impl ResolvedCriteria {
    pub fn is_approximated(&self) -> bool {
        self.source == CriteriaSource::Approximated
    }
}

/// Per-criterion snapshot saved while a teacher was filling the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub criteria: CriteriaMap,
    pub saved_at: DateTime<Utc>,
}

/// Most recent draft that holds at least one grade.
pub fn latest_draft(drafts: &[DraftSnapshot]) -> Option<&DraftSnapshot> {
    drafts
        .iter()
        .filter(|draft| draft.criteria.has_grades())
        .max_by_key(|draft| draft.saved_at)
}

/// Gives every criterion of a section the label of that section's rounded score.
pub(crate) fn approximate_criteria_map(
    catalog: &RubricCatalog,
    record: &EvaluationRecord,
) -> CriteriaMap {
    let mut criteria = CriteriaMap::new().with_metadata(record.metadata());

    for section in catalog.sections() {
        let calificacion = record.section_score(section.key);
        match QualitativeScore::from_value(calificacion) {
            Some(score) => {
                for criterion in section.criteria {
                    criteria.set(criterion.id, score);
                }
            }
            None => debug!(
                section = %section.key,
                calificacion,
                "section score outside the scale; criteria left ungraded"
            ),
        }
    }

    criteria
}

pub(crate) fn resolve_criteria(
    catalog: &RubricCatalog,
    drafts: &[DraftSnapshot],
    record: Option<&EvaluationRecord>,
) -> Option<ResolvedCriteria> {
    if let Some(draft) = latest_draft(drafts) {
        let mut criteria = draft.criteria.clone();
        if let Some(record) = record {
            criteria.metadata_mut().fill_missing_from(&record.metadata());
        }
        debug!(saved_at = %draft.saved_at, "restoring criteria from draft");
        return Some(ResolvedCriteria {
            source: CriteriaSource::Exact,
            criteria,
        });
    }

    let record = record?;
    warn!(
        nota_final = record.nota_final,
        "no draft available; approximating criteria from section scores"
    );
    Some(ResolvedCriteria {
        source: CriteriaSource::Approximated,
        criteria: approximate_criteria_map(catalog, record),
    })
}
