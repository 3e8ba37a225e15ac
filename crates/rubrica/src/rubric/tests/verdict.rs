use super::common::*;
use crate::rubric::{
    determine_verdict, CriteriaMap, FinalizeError, QualitativeScore, SectionKey, Verdict,
};

#[test]
fn threshold_is_inclusive_at_five_point_one() {
    assert_eq!(determine_verdict(5.10), Verdict::Aprobado);
    assert_eq!(determine_verdict(5.09), Verdict::Reprobado);
    assert_eq!(determine_verdict(10.0), Verdict::Aprobado);
    assert_eq!(determine_verdict(0.0), Verdict::Reprobado);
}

#[test]
fn verdict_serializes_in_upper_case() {
    assert_eq!(
        serde_json::to_string(&Verdict::Aprobado).expect("serializes"),
        "\"APROBADO\""
    );
    assert_eq!(Verdict::Reprobado.to_string(), "REPROBADO");
    assert!(!Verdict::Reprobado.is_pass());
}

#[test]
fn single_missing_criterion_blocks_completion() {
    let engine = engine();
    let mut criteria = uniform_map(QualitativeScore::Bueno);
    assert!(engine.is_complete(&criteria));

    criteria.clear("doc_marco");

    assert!(!engine.is_complete(&criteria));
    let missing = engine.missing_criteria(&criteria);
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].id, "doc_marco");
    assert_eq!(missing[0].section, SectionKey::Documentacion);
    assert_eq!(missing[0].section_name, "Documentación");
}

#[test]
fn missing_criteria_follow_catalog_order() {
    let engine = engine();
    let missing = engine.missing_criteria(&CriteriaMap::new());

    assert_eq!(missing.len(), 18);
    assert_eq!(missing[0].id, "pres_claridad");
    assert_eq!(missing[17].id, "inn_aplicabilidad");
    let sections: Vec<SectionKey> = missing.iter().map(|entry| entry.section).collect();
    let mut sorted = sections.clone();
    sorted.sort();
    assert_eq!(sections, sorted, "entries are grouped by section");
}

#[test]
fn finalize_refuses_incomplete_evaluations() {
    let engine = engine();
    let mut criteria = uniform_map(QualitativeScore::Excelente);
    criteria.clear("inn_originalidad");

    let err = engine.finalize(&criteria).expect_err("incomplete map rejected");

    match &err {
        FinalizeError::Incomplete { missing } => {
            assert_eq!(missing.len(), 1);
            assert_eq!(missing[0].id, "inn_originalidad");
        }
    }
    assert!(err.to_string().contains("Originalidad de la propuesta"));
}

#[test]
fn finalize_produces_flat_record() {
    let engine = engine();
    let mut criteria = uniform_map(QualitativeScore::Bueno).with_metadata(metadata());
    criteria.set("inn_originalidad", QualitativeScore::Sobresaliente);
    criteria.set("inn_aplicabilidad", QualitativeScore::Sobresaliente);

    let record = engine.finalize(&criteria).expect("complete map finalizes");

    assert_eq!(record.presentacion, 7.0);
    assert_eq!(record.sustentacion, 7.0);
    assert_eq!(record.documentacion, 7.0);
    assert_eq!(record.innovacion, 10.0);
    assert_eq!(record.nota_final, 7.3);
    assert_eq!(record.resultado, Verdict::Aprobado);
    assert_eq!(record.metadata(), metadata());
}
