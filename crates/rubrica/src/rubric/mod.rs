//! Weighted rubric scoring: qualitative grades per criterion are aggregated into section
//! scores, a final grade and a pass/fail verdict, and persisted section scores can be
//! expanded back into an editable criteria map.

mod aggregate;
mod approximate;
pub mod catalog;
pub mod criteria;
mod policy;
mod record;
pub mod scale;
mod verdict;

#[cfg(test)]
mod tests;

pub use aggregate::{round2, score_criterion, GroupBreakdown, RubricBreakdown, SectionBreakdown};
pub use approximate::{latest_draft, CriteriaSource, DraftSnapshot, ResolvedCriteria};
pub use catalog::{Criterion, CriterionGroup, RubricCatalog, Section, SectionKey};
pub use criteria::{
    CriteriaMap, EvaluationMetadata, FormEntries, TeacherId, INTERNAL_KEY_PREFIX, METADATA_KEYS,
};
pub use policy::{ScoringPolicy, HALVING_DIVISOR};
pub use record::EvaluationRecord;
pub use scale::{to_color, to_label, to_number, QualitativeScore, UnknownLabel, UNGRADED_COLOR};
pub use verdict::{determine_verdict, FinalizeError, MissingCriterion, Verdict, PASSING_GRADE};

use serde::Serialize;
use tracing::debug;

/// Stateless scorer applying a catalog and scoring policy to criteria maps.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    catalog: RubricCatalog,
    policy: ScoringPolicy,
}

impl ScoringEngine {
    pub fn new(catalog: RubricCatalog, policy: ScoringPolicy) -> Self {
        Self { catalog, policy }
    }

    /// Shipped catalog with no scoring adjustments.
    pub fn standard() -> Self {
        Self::new(RubricCatalog::standard(), ScoringPolicy::default())
    }

    pub fn catalog(&self) -> &RubricCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &ScoringPolicy {
        &self.policy
    }

    pub fn score_group(&self, criteria: &CriteriaMap, section: &Section, group_id: &str) -> f64 {
        aggregate::score_group(criteria, section, group_id, &self.policy)
    }

    pub fn score_section(&self, criteria: &CriteriaMap, section: &Section) -> f64 {
        aggregate::score_section(criteria, section, &self.policy)
    }

    pub fn score_all_sections(&self, criteria: &CriteriaMap) -> RubricBreakdown {
        aggregate::score_all_sections(&self.catalog, criteria, &self.policy)
    }

    /// Final grade from any subset of section scores.
    pub fn final_grade_from_sections<I>(&self, totals: I) -> f64
    where
        I: IntoIterator<Item = (SectionKey, f64)>,
    {
        aggregate::final_grade(&self.catalog, totals)
    }

    pub fn final_grade_from_values(
        &self,
        presentacion: f64,
        sustentacion: f64,
        documentacion: f64,
        innovacion: f64,
    ) -> f64 {
        aggregate::final_grade(
            &self.catalog,
            [
                (SectionKey::Presentacion, presentacion),
                (SectionKey::Sustentacion, sustentacion),
                (SectionKey::Documentacion, documentacion),
                (SectionKey::Innovacion, innovacion),
            ],
        )
    }

    pub fn is_complete(&self, criteria: &CriteriaMap) -> bool {
        verdict::is_complete(&self.catalog, criteria)
    }

    pub fn missing_criteria(&self, criteria: &CriteriaMap) -> Vec<MissingCriterion> {
        verdict::missing_criteria(&self.catalog, criteria)
    }

    pub fn evaluate(&self, criteria: &CriteriaMap) -> EvaluationOutcome {
        let breakdown = self.score_all_sections(criteria);
        let final_grade = self.final_grade_from_sections(breakdown.totals());
        let verdict = determine_verdict(final_grade);
        let missing = self.missing_criteria(criteria);

        debug!(
            final_grade,
            %verdict,
            missing = missing.len(),
            "evaluation scored"
        );

        EvaluationOutcome {
            breakdown,
            final_grade,
            verdict,
            missing,
        }
    }

    /// Strict gate for locking an evaluation: every catalog criterion must be graded.
    pub fn finalize(&self, criteria: &CriteriaMap) -> Result<EvaluationRecord, FinalizeError> {
        let outcome = self.evaluate(criteria);
        if !outcome.is_complete() {
            return Err(FinalizeError::Incomplete {
                missing: outcome.missing,
            });
        }
        Ok(outcome.to_record(criteria.metadata()))
    }

    /// Lossy inverse of [`EvaluationRecord`]; see [`Self::resolve_criteria`].
    pub fn approximate_criteria_map(&self, record: &EvaluationRecord) -> CriteriaMap {
        approximate::approximate_criteria_map(&self.catalog, record)
    }

    /// Prefers the latest graded draft and falls back to approximating the record.
    pub fn resolve_criteria(
        &self,
        drafts: &[DraftSnapshot],
        record: Option<&EvaluationRecord>,
    ) -> Option<ResolvedCriteria> {
        approximate::resolve_criteria(&self.catalog, drafts, record)
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}

/// Scores derived from one criteria map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationOutcome {
    pub breakdown: RubricBreakdown,
    pub final_grade: f64,
    pub verdict: Verdict,
    pub missing: Vec<MissingCriterion>,
}

impl EvaluationOutcome {
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn to_record(&self, metadata: &EvaluationMetadata) -> EvaluationRecord {
        EvaluationRecord::new(&self.breakdown, self.final_grade, self.verdict, metadata)
    }
}
