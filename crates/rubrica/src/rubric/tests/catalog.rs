use std::collections::BTreeSet;

use crate::rubric::{RubricCatalog, SectionKey};

const TOLERANCE: f64 = 1e-9;

#[test]
fn section_weights_sum_to_one() {
    let total: f64 = RubricCatalog::standard()
        .sections()
        .iter()
        .map(|section| section.weight)
        .sum();
    assert!((total - 1.0).abs() < TOLERANCE, "total weight {total}");
}

#[test]
fn criteria_weights_match_their_section() {
    for section in RubricCatalog::standard().sections() {
        let total: f64 = section.criteria.iter().map(|c| c.weight).sum();
        assert!(
            (total - section.weight).abs() < TOLERANCE,
            "{} criteria sum to {total}, section declares {}",
            section.name,
            section.weight
        );
    }
}

#[test]
fn group_totals_match_their_criteria() {
    for section in RubricCatalog::standard().sections() {
        for group in section.groups {
            let total: f64 = section.criteria_in_group(group.id).map(|c| c.weight).sum();
            assert!(
                (total - group.total_weight).abs() < TOLERANCE,
                "group {} sums to {total}",
                group.id
            );
        }
        for criterion in section.criteria {
            if let Some(group_id) = criterion.group {
                assert!(
                    section.group(group_id).is_some(),
                    "{} references undeclared group {group_id}",
                    criterion.id
                );
            }
        }
    }
}

#[test]
fn criterion_ids_are_unique() {
    let catalog = RubricCatalog::standard();
    let ids: BTreeSet<&str> = catalog.criteria().map(|(_, c)| c.id).collect();
    assert_eq!(ids.len(), catalog.criteria().count());
    assert_eq!(ids.len(), 18);
}

#[test]
fn sections_follow_catalog_order() {
    let keys: Vec<SectionKey> = RubricCatalog::standard()
        .sections()
        .iter()
        .map(|section| section.key)
        .collect();
    assert_eq!(keys, SectionKey::ALL.to_vec());
}

#[test]
fn lookup_by_criterion_id_returns_owning_section() {
    let catalog = RubricCatalog::standard();
    let (section, criterion) = catalog.criterion("sus_metodologia").expect("known criterion");
    assert_eq!(section.key, SectionKey::Sustentacion);
    assert_eq!(criterion.group, Some("dominio"));
    assert!(catalog.criterion("docente_id").is_none());
}
