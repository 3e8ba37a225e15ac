use super::aggregate::RubricBreakdown;
use super::catalog::SectionKey;
use super::criteria::{deserialize_teacher_id, EvaluationMetadata, TeacherId};
use super::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// Flattened evaluation as stored by the persistence layer.
///
/// Only the four section scores survive, so per-criterion detail cannot be recovered
/// from a record alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub presentacion: f64,
    pub sustentacion: f64,
    pub documentacion: f64,
    pub innovacion: f64,
    pub nota_final: f64,
    pub resultado: Verdict,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub comentarios: Option<String>,
    #[serde(default, deserialize_with = "deserialize_teacher_id")]
    pub docente_id: Option<TeacherId>,
}

impl EvaluationRecord {
    pub fn new(
        breakdown: &RubricBreakdown,
        nota_final: f64,
        resultado: Verdict,
        metadata: &EvaluationMetadata,
    ) -> Self {
        Self {
            presentacion: breakdown.calificacion(SectionKey::Presentacion),
            sustentacion: breakdown.calificacion(SectionKey::Sustentacion),
            documentacion: breakdown.calificacion(SectionKey::Documentacion),
            innovacion: breakdown.calificacion(SectionKey::Innovacion),
            nota_final,
            resultado,
            observaciones: metadata.observaciones.clone(),
            comentarios: metadata.comentarios.clone(),
            docente_id: metadata.docente_id.clone(),
        }
    }

    pub fn section_score(&self, key: SectionKey) -> f64 {
        match key {
            SectionKey::Presentacion => self.presentacion,
            SectionKey::Sustentacion => self.sustentacion,
            SectionKey::Documentacion => self.documentacion,
            SectionKey::Innovacion => self.innovacion,
        }
    }

    pub fn section_totals(&self) -> [(SectionKey, f64); 4] {
        SectionKey::ALL.map(|key| (key, self.section_score(key)))
    }

    pub fn metadata(&self) -> EvaluationMetadata {
        EvaluationMetadata {
            docente_id: self.docente_id.clone(),
            observaciones: self.observaciones.clone(),
            comentarios: self.comentarios.clone(),
        }
    }
}
