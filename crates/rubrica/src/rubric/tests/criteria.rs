use serde_json::json;

use super::common::*;
use crate::rubric::{CriteriaMap, QualitativeScore, TeacherId};

#[test]
fn form_entries_split_grades_from_metadata() {
    let entries = form(&[
        ("pres_claridad", json!("EXCELENTE")),
        ("pres_lenguaje", json!("")),
        ("pres_postura", json!("regular")),
        ("docente_id", json!(7)),
        ("observaciones", json!("x")),
        ("comentarios", json!("y")),
        ("_autosave_token", json!("abc")),
    ]);

    let criteria = CriteriaMap::from_form_entries(entries);

    assert_eq!(criteria.graded_count(), 1);
    assert_eq!(
        criteria.get("pres_claridad"),
        Some(QualitativeScore::Excelente)
    );
    assert!(!criteria.is_graded("pres_lenguaje"));
    assert!(!criteria.is_graded("pres_postura"));
    assert!(!criteria.is_graded("docente_id"));
    assert!(!criteria.is_graded("_autosave_token"));
    assert_eq!(
        criteria.metadata().docente_id,
        Some(TeacherId::Number(7))
    );
    assert_eq!(criteria.metadata().observaciones.as_deref(), Some("x"));
    assert_eq!(criteria.metadata().comentarios.as_deref(), Some("y"));
}

#[test]
fn metadata_never_changes_scores() {
    let engine = engine();
    let graded = [
        ("pres_claridad", json!("EXCELENTE")),
        ("sus_conocimiento", json!("BUENO")),
        ("doc_marco", json!("ACEPTABLE")),
        ("inn_originalidad", json!("MUY BUENO")),
    ];
    let mut with_metadata = graded.to_vec();
    with_metadata.push(("docente_id", json!(7)));
    with_metadata.push(("observaciones", json!("x")));
    with_metadata.push(("comentarios", json!("y")));

    let bare = engine.evaluate(&CriteriaMap::from_form_entries(form(&graded)));
    let mixed = engine.evaluate(&CriteriaMap::from_form_entries(form(&with_metadata)));

    assert_eq!(bare, mixed);
}

#[test]
fn deserializes_directly_from_form_json() {
    let criteria: CriteriaMap = serde_json::from_str(
        r#"{"doc_redaccion": "muy bueno", "docente_id": "DOC-12", "observaciones": null}"#,
    )
    .expect("form json parses");

    assert_eq!(
        criteria.get("doc_redaccion"),
        Some(QualitativeScore::MuyBueno)
    );
    assert_eq!(
        criteria.metadata().docente_id,
        Some(TeacherId::Text("DOC-12".to_string()))
    );
    assert_eq!(criteria.metadata().observaciones, None);
}

#[test]
fn form_entries_include_metadata_and_canonical_labels() {
    let mut criteria = CriteriaMap::new().with_metadata(metadata());
    criteria.set("inn_aplicabilidad", QualitativeScore::BasicamenteAceptable);

    let entries = criteria.to_form_entries();

    assert_eq!(entries["inn_aplicabilidad"], json!("BÁSICAMENTE ACEPTABLE"));
    assert_eq!(entries["docente_id"], json!(7));
    assert_eq!(entries["comentarios"], json!("Revisar referencias"));
    assert_eq!(CriteriaMap::from_form_entries(entries), criteria);
}

#[test]
fn blank_label_clears_a_criterion() {
    let mut criteria = CriteriaMap::new();
    assert!(criteria.set_label("doc_problema", "bueno"));
    assert!(criteria.is_graded("doc_problema"));

    assert!(!criteria.set_label("doc_problema", "  "));
    assert!(!criteria.is_graded("doc_problema"));
    assert!(!criteria.has_grades());
}

#[test]
fn numeric_teacher_id_keeps_its_json_type() {
    let engine = engine();
    let mut entries = uniform_map(QualitativeScore::Bueno).to_form_entries();
    entries.insert("docente_id".to_string(), json!(7));
    let criteria = CriteriaMap::from_form_entries(entries);

    let record = engine.finalize(&criteria).expect("complete map finalizes");
    let stored = serde_json::to_value(&record).expect("record serializes");
    assert_eq!(stored["docente_id"], json!(7));

    let restored = engine.approximate_criteria_map(&record);
    assert_eq!(restored.to_form_entries()["docente_id"], json!(7));

    let reloaded: crate::rubric::EvaluationRecord =
        serde_json::from_value(stored).expect("record reloads");
    assert_eq!(reloaded.docente_id, Some(TeacherId::Number(7)));
}

#[test]
fn textual_teacher_id_is_kept_verbatim() {
    let criteria: CriteriaMap =
        serde_json::from_str(r#"{"docente_id": "007"}"#).expect("form json parses");

    assert_eq!(
        criteria.metadata().docente_id,
        Some(TeacherId::Text("007".to_string()))
    );
    assert_eq!(criteria.to_form_entries()["docente_id"], json!("007"));
}
