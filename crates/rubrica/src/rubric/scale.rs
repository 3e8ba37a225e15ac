use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Color returned for ungraded or unrecognized labels.
pub const UNGRADED_COLOR: &str = "#ffffff";

/// Ten-step qualitative grade, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum QualitativeScore {
    MuyDeficiente,
    Deficiente,
    Insuficiente,
    BasicamenteAceptable,
    Aceptable,
    Satisfactorio,
    Bueno,
    MuyBueno,
    Excelente,
    Sobresaliente,
}

impl QualitativeScore {
    /// Every grade, best first, as presented in scoring forms.
    pub const ALL: [QualitativeScore; 10] = [
        QualitativeScore::Sobresaliente,
        QualitativeScore::Excelente,
        QualitativeScore::MuyBueno,
        QualitativeScore::Bueno,
        QualitativeScore::Satisfactorio,
        QualitativeScore::Aceptable,
        QualitativeScore::BasicamenteAceptable,
        QualitativeScore::Insuficiente,
        QualitativeScore::Deficiente,
        QualitativeScore::MuyDeficiente,
    ];

    pub fn value(self) -> u8 {
        match self {
            QualitativeScore::MuyDeficiente => 1,
            QualitativeScore::Deficiente => 2,
            QualitativeScore::Insuficiente => 3,
            QualitativeScore::BasicamenteAceptable => 4,
            QualitativeScore::Aceptable => 5,
            QualitativeScore::Satisfactorio => 6,
            QualitativeScore::Bueno => 7,
            QualitativeScore::MuyBueno => 8,
            QualitativeScore::Excelente => 9,
            QualitativeScore::Sobresaliente => 10,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualitativeScore::MuyDeficiente => "MUY DEFICIENTE",
            QualitativeScore::Deficiente => "DEFICIENTE",
            QualitativeScore::Insuficiente => "INSUFICIENTE",
            QualitativeScore::BasicamenteAceptable => "BÁSICAMENTE ACEPTABLE",
            QualitativeScore::Aceptable => "ACEPTABLE",
            QualitativeScore::Satisfactorio => "SATISFACTORIO",
            QualitativeScore::Bueno => "BUENO",
            QualitativeScore::MuyBueno => "MUY BUENO",
            QualitativeScore::Excelente => "EXCELENTE",
            QualitativeScore::Sobresaliente => "SOBRESALIENTE",
        }
    }

    /// Display color used by scoring forms and exported reports.
    pub fn color(self) -> &'static str {
        match self {
            QualitativeScore::MuyDeficiente => "#c62828",
            QualitativeScore::Deficiente => "#e53935",
            QualitativeScore::Insuficiente => "#f4511e",
            QualitativeScore::BasicamenteAceptable => "#fb8c00",
            QualitativeScore::Aceptable => "#ffb300",
            QualitativeScore::Satisfactorio => "#fdd835",
            QualitativeScore::Bueno => "#c0ca33",
            QualitativeScore::MuyBueno => "#7cb342",
            QualitativeScore::Excelente => "#43a047",
            QualitativeScore::Sobresaliente => "#2e7d32",
        }
    }

    /// Rounds to the nearest integer and maps it back onto the scale.
    ///
    /// Returns `None` for non-finite input or anything that rounds outside 1..=10.
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }
        let rounded = value.round();
        if !(1.0..=10.0).contains(&rounded) {
            return None;
        }
        let index = 10 - rounded as usize;
        Some(Self::ALL[index])
    }

    /// Lenient label parser: ignores case, surrounding and repeated whitespace, and the
    /// accent on "BÁSICAMENTE".
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_uppercase();

        let score = match normalized.as_str() {
            "SOBRESALIENTE" => QualitativeScore::Sobresaliente,
            "EXCELENTE" => QualitativeScore::Excelente,
            "MUY BUENO" => QualitativeScore::MuyBueno,
            "BUENO" => QualitativeScore::Bueno,
            "SATISFACTORIO" => QualitativeScore::Satisfactorio,
            "ACEPTABLE" => QualitativeScore::Aceptable,
            "BÁSICAMENTE ACEPTABLE" | "BASICAMENTE ACEPTABLE" => {
                QualitativeScore::BasicamenteAceptable
            }
            "INSUFICIENTE" => QualitativeScore::Insuficiente,
            "DEFICIENTE" => QualitativeScore::Deficiente,
            "MUY DEFICIENTE" => QualitativeScore::MuyDeficiente,
            _ => return None,
        };
        Some(score)
    }
}

impl fmt::Display for QualitativeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown qualitative label '{0}'")]
pub struct UnknownLabel(pub String);

impl FromStr for QualitativeScore {
    type Err = UnknownLabel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownLabel(s.to_string()))
    }
}

impl TryFrom<String> for QualitativeScore {
    type Error = UnknownLabel;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<QualitativeScore> for String {
    fn from(value: QualitativeScore) -> Self {
        value.label().to_string()
    }
}

/// Numeric value of a form label, `0` when the label is absent or unknown.
pub fn to_number(label: Option<&str>) -> u8 {
    label
        .and_then(QualitativeScore::parse)
        .map(QualitativeScore::value)
        .unwrap_or(0)
}

/// Canonical label for a numeric grade, empty when it rounds outside the scale.
pub fn to_label(value: Option<f64>) -> &'static str {
    value
        .and_then(QualitativeScore::from_value)
        .map(QualitativeScore::label)
        .unwrap_or("")
}

/// Display color for a form label, white when the label is absent or unknown.
pub fn to_color(label: Option<&str>) -> &'static str {
    label
        .and_then(QualitativeScore::parse)
        .map(QualitativeScore::color)
        .unwrap_or(UNGRADED_COLOR)
}
