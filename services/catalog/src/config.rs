use std::path::PathBuf;

use bookstore_core::config::{AppSettings, SettingsError};
use bookstore_core::session::{SessionError, SessionFactory};

/// Catalog configuration loaded from environment variables.
#[derive(Debug)]
pub struct CatalogConfig {
    /// Settings file with `ConnectionStrings.DefaultConnection`
    /// (default `appsettings.json`). Env var: `APPSETTINGS_PATH`.
    pub settings_path: PathBuf,
    /// Takes precedence over the settings file when set. Env var: `DATABASE_URL`.
    pub database_url: Option<String>,
}

impl CatalogConfig {
    pub fn from_env() -> Self {
        Self {
            settings_path: std::env::var("APPSETTINGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("appsettings.json")),
            database_url: std::env::var("DATABASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty()),
        }
    }

    /// Connection URL from the override, else from the settings file.
    pub fn connection_url(&self) -> Result<String, SettingsError> {
        if let Some(url) = &self.database_url {
            return Ok(url.clone());
        }
        let settings = AppSettings::load(&self.settings_path)?;
        Ok(settings.default_connection()?.to_owned())
    }

    pub async fn open_sessions(&self) -> Result<SessionFactory, SessionError> {
        let url = self.connection_url()?;
        Ok(SessionFactory::connect(&url).await?)
    }
}
