//! JSON application settings (`appsettings.json`).

use std::path::Path;

use serde::Deserialize;

/// Connection string key read from the `ConnectionStrings` section.
pub const DEFAULT_CONNECTION: &str = "DefaultConnection";

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings JSON")]
    Parse(#[from] serde_json::Error),
    #[error("connection string `{0}` is missing or empty")]
    MissingConnection(String),
}

/// Settings document, e.g.
///
/// ```json
/// { "ConnectionStrings": { "DefaultConnection": "sqlite://catalog.db?mode=rwc" } }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AppSettings {
    #[serde(default)]
    pub connection_strings: std::collections::BTreeMap<String, String>,
}

impl AppSettings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Look up a named connection string; blank values count as missing.
    pub fn connection_string(&self, name: &str) -> Result<&str, SettingsError> {
        self.connection_strings
            .get(name)
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| SettingsError::MissingConnection(name.to_owned()))
    }

    pub fn default_connection(&self) -> Result<&str, SettingsError> {
        self.connection_string(DEFAULT_CONNECTION)
    }
}
