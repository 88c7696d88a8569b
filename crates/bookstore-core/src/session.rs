//! Unit-of-work sessions over a pooled sea-orm connection.

use std::path::Path;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait,
};
use tracing::debug;

use crate::config::{AppSettings, SettingsError};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error("failed to connect to database")]
    Connect(#[from] DbErr),
}

/// Hands out one short-lived session per logical operation.
///
/// A session is a `DatabaseTransaction` holding a connection checked out of
/// the pool. Callers commit it on success; dropping it on any other path
/// rolls back and returns the connection, so every exit releases it.
#[derive(Debug, Clone)]
pub struct SessionFactory {
    db: DatabaseConnection,
}

impl SessionFactory {
    /// Build connection options in-process and open the pool.
    pub async fn connect(url: &str) -> Result<Self, DbErr> {
        Self::connect_with(connect_options(url)).await
    }

    pub async fn connect_with(options: ConnectOptions) -> Result<Self, DbErr> {
        let db = Database::connect(options).await?;
        Ok(Self { db })
    }

    /// Open the pool using `ConnectionStrings.DefaultConnection`.
    pub async fn from_settings(settings: &AppSettings) -> Result<Self, SessionError> {
        let url = settings.default_connection()?;
        Ok(Self::connect(url).await?)
    }

    /// Read a settings file and open the pool it points at.
    pub async fn from_settings_file(path: impl AsRef<Path>) -> Result<Self, SessionError> {
        let settings = AppSettings::load(path)?;
        Self::from_settings(&settings).await
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Begin a new session. Nothing is shared between sessions.
    pub async fn begin(&self) -> Result<DatabaseTransaction, DbErr> {
        debug!("begin session");
        self.db.begin().await
    }

    /// Underlying pool, for schema migrations.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

/// Default pool options for a connection URL.
///
/// In-memory SQLite databases live inside a single connection, so the pool is
/// pinned to one connection that never expires.
pub fn connect_options(url: &str) -> ConnectOptions {
    let mut options = ConnectOptions::new(url.to_owned());
    options
        .connect_timeout(Duration::from_secs(10))
        .sqlx_logging(false);
    if url.starts_with("sqlite::memory:") || url.contains("mode=memory") {
        options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(Duration::from_secs(24 * 60 * 60))
            .max_lifetime(Duration::from_secs(24 * 60 * 60));
    }
    options
}
