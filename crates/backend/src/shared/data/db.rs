use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::path::Path;
use std::time::Duration;

use crate::shared::config::{self, Config, IN_MEMORY_DATABASE};

pub fn build_sqlite_url(path: &Path) -> String {
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    format!("sqlite://{}{}?mode=rwc", prefix, normalized)
}

/// Open the store described by the configuration.
/// The returned handle is a pool; clone it into request state, never into a global.
pub async fn connect(cfg: &Config) -> anyhow::Result<DatabaseConnection> {
    let db_path = config::get_database_path(cfg);
    if db_path == Path::new(IN_MEMORY_DATABASE) {
        tracing::warn!("Using in-memory database, data is lost on exit");
        return connect_in_memory().await;
    }

    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    tracing::info!("Opening database: {}", db_path.display());
    let mut options = ConnectOptions::new(build_sqlite_url(&db_path));
    options.sqlx_logging(false);
    Ok(Database::connect(options).await?)
}

/// Recycling the only in-memory connection would drop the whole database
const IN_MEMORY_KEEP_ALIVE: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// In-memory SQLite behind a single pooled connection, so every clone of the
/// handle sees the same database
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(IN_MEMORY_KEEP_ALIVE)
        .max_lifetime(IN_MEMORY_KEEP_ALIVE)
        .sqlx_logging(false);
    Ok(Database::connect(options).await?)
}
