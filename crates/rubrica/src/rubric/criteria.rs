use super::scale::QualitativeScore;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::debug;

/// Form keys that travel alongside criterion grades but are never scored.
pub const METADATA_KEYS: [&str; 3] = ["docente_id", "observaciones", "comentarios"];

/// Keys starting with this marker belong to the form layer and are ignored.
pub const INTERNAL_KEY_PREFIX: char = '_';

/// Mixed key/value shape exchanged with the scoring form.
pub type FormEntries = BTreeMap<String, Value>;

pub fn is_metadata_key(key: &str) -> bool {
    METADATA_KEYS.contains(&key)
}

/// Teacher reference as sent by the form; numeric and textual ids keep their JSON type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TeacherId {
    Number(i64),
    Text(String),
}

impl TeacherId {
    pub fn to_value(&self) -> Value {
        match self {
            TeacherId::Number(id) => Value::from(*id),
            TeacherId::Text(id) => Value::String(id.clone()),
        }
    }
}

/// Non-scoring details attached to an evaluation attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationMetadata {
    #[serde(default, deserialize_with = "deserialize_teacher_id")]
    pub docente_id: Option<TeacherId>,
    #[serde(default)]
    pub observaciones: Option<String>,
    #[serde(default)]
    pub comentarios: Option<String>,
}

impl EvaluationMetadata {
    pub(crate) fn fill_missing_from(&mut self, fallback: &EvaluationMetadata) {
        if self.docente_id.is_none() {
            self.docente_id = fallback.docente_id.clone();
        }
        if self.observaciones.is_none() {
            self.observaciones = fallback.observaciones.clone();
        }
        if self.comentarios.is_none() {
            self.comentarios = fallback.comentarios.clone();
        }
    }
}

/// Per-criterion grades for one evaluation attempt.
///
/// Scores and metadata are kept apart so aggregation never has to filter keys. Criteria
/// without an entry are ungraded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "FormEntries", into = "FormEntries")]
pub struct CriteriaMap {
    scores: BTreeMap<String, QualitativeScore>,
    metadata: EvaluationMetadata,
}

impl CriteriaMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metadata(mut self, metadata: EvaluationMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builds a map from the form shape, where grades and metadata share one namespace.
    ///
    /// Empty or unrecognized labels leave the criterion ungraded.
    pub fn from_form_entries(entries: FormEntries) -> Self {
        let mut map = Self::default();
        for (key, value) in entries {
            match key.as_str() {
                "docente_id" => map.metadata.docente_id = teacher_id_from_value(&value),
                "observaciones" => map.metadata.observaciones = text_from_value(value),
                "comentarios" => map.metadata.comentarios = text_from_value(value),
                _ if key.starts_with(INTERNAL_KEY_PREFIX) => {
                    debug!(key = %key, "skipping internal form entry");
                }
                _ => match value.as_str().and_then(QualitativeScore::parse) {
                    Some(score) => {
                        map.scores.insert(key, score);
                    }
                    None => {
                        debug!(criterion = %key, value = %value, "criterion left ungraded");
                    }
                },
            }
        }
        map
    }

    pub fn to_form_entries(&self) -> FormEntries {
        let mut entries: FormEntries = self
            .scores
            .iter()
            .map(|(id, score)| (id.clone(), Value::String(score.label().to_string())))
            .collect();

        if let Some(id) = &self.metadata.docente_id {
            entries.insert("docente_id".to_string(), id.to_value());
        }
        if let Some(text) = &self.metadata.observaciones {
            entries.insert("observaciones".to_string(), Value::String(text.clone()));
        }
        if let Some(text) = &self.metadata.comentarios {
            entries.insert("comentarios".to_string(), Value::String(text.clone()));
        }
        entries
    }

    pub fn set(&mut self, criterion_id: impl Into<String>, score: QualitativeScore) {
        self.scores.insert(criterion_id.into(), score);
    }

    /// Applies a raw form label. Empty or unknown labels clear the criterion.
    pub fn set_label(&mut self, criterion_id: impl Into<String>, label: &str) -> bool {
        let criterion_id = criterion_id.into();
        match QualitativeScore::parse(label) {
            Some(score) => {
                self.scores.insert(criterion_id, score);
                true
            }
            None => {
                self.scores.remove(&criterion_id);
                false
            }
        }
    }

    pub fn clear(&mut self, criterion_id: &str) -> Option<QualitativeScore> {
        self.scores.remove(criterion_id)
    }

    pub fn get(&self, criterion_id: &str) -> Option<QualitativeScore> {
        self.scores.get(criterion_id).copied()
    }

    pub fn is_graded(&self, criterion_id: &str) -> bool {
        self.scores.contains_key(criterion_id)
    }

    pub fn scores(&self) -> impl Iterator<Item = (&str, QualitativeScore)> {
        self.scores.iter().map(|(id, score)| (id.as_str(), *score))
    }

    pub fn graded_count(&self) -> usize {
        self.scores.len()
    }

    pub fn has_grades(&self) -> bool {
        !self.scores.is_empty()
    }

    pub fn metadata(&self) -> &EvaluationMetadata {
        &self.metadata
    }

    pub fn metadata_mut(&mut self) -> &mut EvaluationMetadata {
        &mut self.metadata
    }
}

impl From<FormEntries> for CriteriaMap {
    fn from(entries: FormEntries) -> Self {
        Self::from_form_entries(entries)
    }
}

impl From<CriteriaMap> for FormEntries {
    fn from(map: CriteriaMap) -> Self {
        map.to_form_entries()
    }
}

fn teacher_id_from_value(value: &Value) -> Option<TeacherId> {
    match value {
        Value::Number(number) => Some(
            number
                .as_i64()
                .map(TeacherId::Number)
                .unwrap_or_else(|| TeacherId::Text(number.to_string())),
        ),
        Value::String(raw) if !raw.trim().is_empty() => Some(TeacherId::Text(raw.clone())),
        _ => None,
    }
}

fn text_from_value(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

/// Accepts `docente_id` as either a JSON number or a string.
pub(crate) fn deserialize_teacher_id<'de, D>(deserializer: D) -> Result<Option<TeacherId>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(teacher_id_from_value))
}
