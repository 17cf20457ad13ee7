use color_eyre::{eyre::WrapErr, Result};
use sqlx::SqlitePool;

/// Schema files applied in order. A version is recorded in
/// `schema_migrations` in the same transaction as its SQL.
const MIGRATIONS: &[(&str, &str)] = &[
    ("V1", include_str!("../../migrations/V1__init.sql")),
    ("V2", include_str!("../../migrations/V2__unique_question_order.sql")),
];

pub async fn run(pool: &SqlitePool) -> Result<()> {
    apply(pool, MIGRATIONS).await
}

async fn apply(pool: &SqlitePool, migrations: &[(&str, &str)]) -> Result<()> {
    sqlx::raw_sql(
        "CREATE TABLE IF NOT EXISTS schema_migrations (
            version TEXT PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )",
    )
    .execute(pool)
    .await?;

    let applied: Vec<String> = sqlx::query_scalar("SELECT version FROM schema_migrations")
        .fetch_all(pool)
        .await?;

    for &(version, sql) in migrations {
        if applied.iter().any(|v| v == version) {
            continue;
        }

        let mut tx = pool.begin().await?;
        sqlx::raw_sql(sql)
            .execute(&mut *tx)
            .await
            .wrap_err_with(|| format!("migration {version} failed"))?;
        sqlx::query("INSERT INTO schema_migrations (version) VALUES (?)")
            .bind(version)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(version, "applied database migration");
    }

    Ok(())
}
