use crate::rubric::{RubricCatalog, ScoringPolicy};
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the scoring tools.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub scoring: ScoringPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let format = match env::var("APP_LOG_FORMAT") {
            Ok(raw) => LogFormat::parse(&raw).ok_or(ConfigError::InvalidLogFormat(raw))?,
            Err(_) => LogFormat::Compact,
        };

        let scoring = match env::var("APP_HALVED_CRITERIA") {
            Ok(raw) => parse_halved_criteria(&raw, &RubricCatalog::standard())?,
            Err(_) => ScoringPolicy::default(),
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level, format },
            scoring,
        })
    }
}

fn parse_halved_criteria(
    raw: &str,
    catalog: &RubricCatalog,
) -> Result<ScoringPolicy, ConfigError> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            if catalog.contains(id) {
                Ok(id.to_string())
            } else {
                Err(ConfigError::UnknownCriterion(id.to_string()))
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ScoringPolicy::with_halved(ids))
}

/// Output layout for log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "compact" | "text" => Some(Self::Compact),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLogFormat(String),
    UnknownCriterion(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLogFormat(value) => {
                write!(f, "APP_LOG_FORMAT must be 'compact' or 'json', got '{value}'")
            }
            ConfigError::UnknownCriterion(id) => {
                write!(f, "APP_HALVED_CRITERIA names unknown criterion '{id}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
