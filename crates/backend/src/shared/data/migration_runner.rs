use sea_orm::DatabaseConnection;
use sqlx::migrate::Migrator;
use sqlx::sqlite::SqlitePool;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Tables the service cannot run without
const REQUIRED_TABLES: [&str; 3] = ["habits", "tags", "habit_tags"];

async fn has_table(pool: &SqlitePool, table_name: &str) -> anyhow::Result<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(1) FROM sqlite_master WHERE type='table' AND name = ?1",
    )
    .bind(table_name)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}

async fn apply(pool: &SqlitePool) -> anyhow::Result<()> {
    MIGRATOR.run(pool).await?;

    for table in REQUIRED_TABLES {
        if !has_table(pool, table).await? {
            anyhow::bail!("table '{}' is missing after migrations", table);
        }
    }
    Ok(())
}

/// Apply pending migrations on the connection's pool and make sure the schema is usable.
/// Failures are logged and returned; startup must not continue past them.
pub async fn run_migrations(conn: &DatabaseConnection) -> anyhow::Result<()> {
    let pool = conn.get_sqlite_connection_pool();

    if let Err(e) = apply(pool).await {
        tracing::error!("Migrations have failed: {:#}", e);
        return Err(e);
    }

    tracing::info!("Migrations applied successfully");
    Ok(())
}
