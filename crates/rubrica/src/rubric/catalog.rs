use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level rubric divisions, in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Presentacion,
    Sustentacion,
    Documentacion,
    Innovacion,
}

impl SectionKey {
    pub const ALL: [SectionKey; 4] = [
        SectionKey::Presentacion,
        SectionKey::Sustentacion,
        SectionKey::Documentacion,
        SectionKey::Innovacion,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Presentacion => "presentacion",
            SectionKey::Sustentacion => "sustentacion",
            SectionKey::Documentacion => "documentacion",
            SectionKey::Innovacion => "innovacion",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Smallest scorable rubric item. `weight` is a fraction of the whole rubric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Criterion {
    pub id: &'static str,
    pub name: &'static str,
    pub weight: f64,
    pub group: Option<&'static str>,
}

/// Display sub-division of a section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub total_weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Section {
    pub key: SectionKey,
    pub name: &'static str,
    pub weight: f64,
    pub criteria: &'static [Criterion],
    pub groups: &'static [CriterionGroup],
}

impl Section {
    pub fn group(&self, group_id: &str) -> Option<&'static CriterionGroup> {
        self.groups.iter().find(|group| group.id == group_id)
    }

    pub fn criteria_in_group<'a>(
        &'a self,
        group_id: &'a str,
    ) -> impl Iterator<Item = &'static Criterion> + 'a {
        self.criteria
            .iter()
            .filter(move |criterion| criterion.group == Some(group_id))
    }
}

/// Read-only view over a static rubric table.
#[derive(Debug, Clone, Copy)]
pub struct RubricCatalog {
    sections: &'static [Section],
}

impl RubricCatalog {
    pub const fn new(sections: &'static [Section]) -> Self {
        Self { sections }
    }

    /// The rubric shipped with the application.
    pub fn standard() -> Self {
        Self::new(&STANDARD_SECTIONS)
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn section(&self, key: SectionKey) -> Option<&'static Section> {
        self.sections.iter().find(|section| section.key == key)
    }

    /// Every criterion paired with its section, in catalog order.
    pub fn criteria(&self) -> impl Iterator<Item = (&'static Section, &'static Criterion)> {
        let sections: &'static [Section] = self.sections;
        sections.iter().flat_map(|section| {
            section
                .criteria
                .iter()
                .map(move |criterion| (section, criterion))
        })
    }

    pub fn criterion(&self, id: &str) -> Option<(&'static Section, &'static Criterion)> {
        self.criteria().find(|(_, criterion)| criterion.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.criterion(id).is_some()
    }
}

impl Default for RubricCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

const fn criterion(
    id: &'static str,
    name: &'static str,
    weight: f64,
    group: Option<&'static str>,
) -> Criterion {
    Criterion {
        id,
        name,
        weight,
        group,
    }
}

static STANDARD_SECTIONS: [Section; 4] = [
    Section {
        key: SectionKey::Presentacion,
        name: "Presentación",
        weight: 0.30,
        criteria: &[
            criterion(
                "pres_claridad",
                "Claridad y fluidez en la exposición",
                0.05,
                Some("expresion"),
            ),
            criterion(
                "pres_lenguaje",
                "Uso de lenguaje técnico apropiado",
                0.05,
                Some("expresion"),
            ),
            criterion(
                "pres_postura",
                "Postura, contacto visual y manejo del escenario",
                0.05,
                Some("expresion"),
            ),
            criterion(
                "pres_material",
                "Calidad del material visual de apoyo",
                0.05,
                Some("recursos"),
            ),
            criterion(
                "pres_estructura",
                "Estructura lógica de la presentación",
                0.05,
                Some("recursos"),
            ),
            criterion(
                "pres_tiempo",
                "Manejo del tiempo asignado",
                0.05,
                Some("recursos"),
            ),
        ],
        groups: &[
            CriterionGroup {
                id: "expresion",
                name: "Expresión oral",
                total_weight: 0.15,
            },
            CriterionGroup {
                id: "recursos",
                name: "Recursos de apoyo",
                total_weight: 0.15,
            },
        ],
    },
    Section {
        key: SectionKey::Sustentacion,
        name: "Sustentación",
        weight: 0.30,
        criteria: &[
            criterion(
                "sus_conocimiento",
                "Dominio conceptual del proyecto",
                0.10,
                Some("dominio"),
            ),
            criterion(
                "sus_metodologia",
                "Justificación de la metodología empleada",
                0.10,
                Some("dominio"),
            ),
            criterion(
                "sus_respuestas",
                "Pertinencia de las respuestas al jurado",
                0.05,
                Some("defensa"),
            ),
            criterion(
                "sus_argumentacion",
                "Solidez de la argumentación",
                0.05,
                Some("defensa"),
            ),
        ],
        groups: &[
            CriterionGroup {
                id: "dominio",
                name: "Dominio del tema",
                total_weight: 0.20,
            },
            CriterionGroup {
                id: "defensa",
                name: "Defensa ante el jurado",
                total_weight: 0.10,
            },
        ],
    },
    Section {
        key: SectionKey::Documentacion,
        name: "Documentación",
        weight: 0.30,
        criteria: &[
            criterion(
                "doc_problema",
                "Planteamiento del problema y objetivos",
                0.05,
                Some("contenido"),
            ),
            criterion(
                "doc_marco",
                "Marco teórico y estado del arte",
                0.05,
                Some("contenido"),
            ),
            criterion(
                "doc_resultados",
                "Análisis de resultados",
                0.05,
                Some("contenido"),
            ),
            criterion(
                "doc_conclusiones",
                "Conclusiones y recomendaciones",
                0.05,
                Some("contenido"),
            ),
            criterion(
                "doc_redaccion",
                "Redacción y ortografía",
                0.05,
                Some("forma"),
            ),
            criterion(
                "doc_referencias",
                "Normas de citación y referencias",
                0.05,
                Some("forma"),
            ),
        ],
        groups: &[
            CriterionGroup {
                id: "contenido",
                name: "Contenido",
                total_weight: 0.20,
            },
            CriterionGroup {
                id: "forma",
                name: "Forma",
                total_weight: 0.10,
            },
        ],
    },
    Section {
        key: SectionKey::Innovacion,
        name: "Innovación",
        weight: 0.10,
        criteria: &[
            criterion(
                "inn_originalidad",
                "Originalidad de la propuesta",
                0.05,
                None,
            ),
            criterion(
                "inn_aplicabilidad",
                "Aplicabilidad e impacto",
                0.05,
                None,
            ),
        ],
        groups: &[],
    },
];
