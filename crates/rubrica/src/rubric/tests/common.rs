use serde_json::Value;

use crate::rubric::{
    CriteriaMap, EvaluationMetadata, EvaluationRecord, FormEntries, QualitativeScore,
    RubricCatalog, ScoringEngine, Section, SectionKey, TeacherId,
};

pub(super) fn engine() -> ScoringEngine {
    ScoringEngine::standard()
}

pub(super) fn section(key: SectionKey) -> &'static Section {
    RubricCatalog::standard()
        .section(key)
        .expect("standard catalog defines every section")
}

pub(super) fn uniform_map(score: QualitativeScore) -> CriteriaMap {
    let mut criteria = CriteriaMap::new();
    for (_, criterion) in RubricCatalog::standard().criteria() {
        criteria.set(criterion.id, score);
    }
    criteria
}

pub(super) fn metadata() -> EvaluationMetadata {
    EvaluationMetadata {
        docente_id: Some(TeacherId::Number(7)),
        observaciones: Some("Buen manejo del tiempo".to_string()),
        comentarios: Some("Revisar referencias".to_string()),
    }
}

pub(super) fn form(entries: &[(&str, Value)]) -> FormEntries {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

pub(super) fn record(
    presentacion: f64,
    sustentacion: f64,
    documentacion: f64,
    innovacion: f64,
) -> EvaluationRecord {
    let engine = engine();
    let nota_final =
        engine.final_grade_from_values(presentacion, sustentacion, documentacion, innovacion);
    let meta = metadata();
    EvaluationRecord {
        presentacion,
        sustentacion,
        documentacion,
        innovacion,
        nota_final,
        resultado: crate::rubric::determine_verdict(nota_final),
        observaciones: meta.observaciones,
        comentarios: meta.comentarios,
        docente_id: meta.docente_id,
    }
}
