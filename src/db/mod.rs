// Database module - provides data access layer

use std::str::FromStr;

use color_eyre::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

// Re-export models for convenience
pub mod models;
pub use models::*;

// Internal modules
mod lead;
mod migrations;
mod question;
mod quiz;
mod report;
mod seed;

pub use lead::NewLead;
pub use question::NewQuestion;
pub use quiz::{NewQuiz, QuizUpdate};

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

// Main database handle
#[derive(Clone)]
pub struct Db {
    pool: SqlitePool,
}

impl Db {
    pub async fn new(url: &str) -> Result<Self> {
        Self::with_max_connections(url, DEFAULT_MAX_CONNECTIONS).await
    }

    pub async fn with_max_connections(url: &str, max_connections: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        // Verify connection
        let one: i32 = sqlx::query_scalar("SELECT 1").fetch_one(&pool).await?;
        color_eyre::eyre::ensure!(one == 1, "connection check failed");

        migrations::run(&pool).await?;

        tracing::info!("database connection has been verified");

        Ok(Self { pool })
    }
}

/// Whether a store error came from a UNIQUE constraint.
pub fn is_unique_violation(err: &color_eyre::Report) -> bool {
    matches!(
        err.downcast_ref::<sqlx::Error>(),
        Some(sqlx::Error::Database(e)) if e.is_unique_violation()
    )
}
