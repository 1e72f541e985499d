use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid logger config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for a [`DatabricksLogger`](crate::DatabricksLogger).
///
/// The level is kept as the raw string and resolved when the logger is set
/// up, so unknown names still fall back to `DEBUG`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerConfig {
    pub name: String,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "DEBUG".to_string()
}

impl LoggerConfig {
    pub fn new<T: Into<String>>(name: T) -> Self {
        LoggerConfig {
            name: name.into(),
            level: default_level(),
        }
    }

    /// Sets the logging level name, e.g. `"info"`.
    pub fn level<T: Into<String>>(mut self, level: T) -> Self {
        self.level = level.into();
        self
    }

    /// Parses a config such as `{"name": "ingest", "level": "warning"}`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}
