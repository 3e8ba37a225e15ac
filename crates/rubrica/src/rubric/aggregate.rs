use super::catalog::{Criterion, RubricCatalog, Section, SectionKey};
use super::criteria::CriteriaMap;
use super::policy::ScoringPolicy;
use super::scale::QualitativeScore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Rounds to two decimal places, the precision every derived grade is reported in.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Weighted contribution of a single grade; ungraded criteria contribute nothing.
pub fn score_criterion(score: Option<QualitativeScore>, weight: f64) -> f64 {
    score
        .map(|score| f64::from(score.value()) * weight)
        .unwrap_or(0.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupBreakdown {
    pub name: String,
    pub calificacion: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBreakdown {
    pub name: String,
    pub calificacion: f64,
    #[serde(default)]
    pub groups: BTreeMap<String, GroupBreakdown>,
}

/// Section and group scores for the whole rubric, keyed by section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RubricBreakdown {
    sections: BTreeMap<SectionKey, SectionBreakdown>,
}

impl RubricBreakdown {
    pub fn section(&self, key: SectionKey) -> Option<&SectionBreakdown> {
        self.sections.get(&key)
    }

    /// Section score, `0.0` when the section is absent.
    pub fn calificacion(&self, key: SectionKey) -> f64 {
        self.section(key)
            .map(|section| section.calificacion)
            .unwrap_or(0.0)
    }

    pub fn sections(&self) -> impl Iterator<Item = (SectionKey, &SectionBreakdown)> {
        self.sections.iter().map(|(key, section)| (*key, section))
    }

    pub fn totals(&self) -> impl Iterator<Item = (SectionKey, f64)> + '_ {
        self.sections
            .iter()
            .map(|(key, section)| (*key, section.calificacion))
    }
}

/// Weighted mean over the graded criteria only, so partial input is not penalised.
fn renormalized<'a, I>(criteria: &CriteriaMap, policy: &ScoringPolicy, items: I) -> f64
where
    I: IntoIterator<Item = &'a Criterion>,
{
    let mut weighted = 0.0;
    let mut graded_weight = 0.0;

    for criterion in items {
        if let Some(score) = criteria.get(criterion.id) {
            weighted +=
                score_criterion(Some(score), criterion.weight) / policy.divisor_for(criterion.id);
            graded_weight += criterion.weight;
        }
    }

    if graded_weight <= 0.0 {
        return 0.0;
    }
    round2(weighted / graded_weight)
}

pub(crate) fn score_group(
    criteria: &CriteriaMap,
    section: &Section,
    group_id: &str,
    policy: &ScoringPolicy,
) -> f64 {
    renormalized(criteria, policy, section.criteria_in_group(group_id))
}

pub(crate) fn score_section(
    criteria: &CriteriaMap,
    section: &Section,
    policy: &ScoringPolicy,
) -> f64 {
    renormalized(criteria, policy, section.criteria)
}

pub(crate) fn score_all_sections(
    catalog: &RubricCatalog,
    criteria: &CriteriaMap,
    policy: &ScoringPolicy,
) -> RubricBreakdown {
    let sections = catalog
        .sections()
        .iter()
        .map(|section| {
            let groups = section
                .groups
                .iter()
                .map(|group| {
                    let breakdown = GroupBreakdown {
                        name: group.name.to_string(),
                        calificacion: score_group(criteria, section, group.id, policy),
                    };
                    (group.id.to_string(), breakdown)
                })
                .collect();

            let breakdown = SectionBreakdown {
                name: section.name.to_string(),
                calificacion: score_section(criteria, section, policy),
                groups,
            };
            (section.key, breakdown)
        })
        .collect();

    RubricBreakdown { sections }
}

/// Weighted combination of section scores, renormalised when only some sections are given.
///
/// A section listed more than once counts once, with its last score.
pub(crate) fn final_grade<I>(catalog: &RubricCatalog, totals: I) -> f64
where
    I: IntoIterator<Item = (SectionKey, f64)>,
{
    let mut latest = BTreeMap::new();
    for (key, calificacion) in totals {
        if latest.insert(key, calificacion).is_some() {
            debug!(section = %key, "duplicate section score; keeping the last value");
        }
    }

    let mut weighted = 0.0;
    let mut weight_present = 0.0;

    for (key, calificacion) in latest {
        if let Some(section) = catalog.section(key) {
            weighted += calificacion * section.weight;
            weight_present += section.weight;
        }
    }

    if weight_present <= 0.0 {
        return 0.0;
    }
    if (weight_present - 1.0).abs() > WEIGHT_TOLERANCE {
        weighted /= weight_present;
    }
    round2(weighted)
}
