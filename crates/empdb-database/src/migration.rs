//! Database migration runner.

use sqlx::PgPool;
use tracing::{info, warn};

use empdb_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop every application table (and the migration ledger) and re-run
/// all migrations from scratch.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    warn!("Resetting database: dropping all tables");

    sqlx::query(
        "DROP TABLE IF EXISTS salaries, employees, departments, users, _sqlx_migrations CASCADE",
    )
    .execute(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Failed to drop tables: {e}"), e)
    })?;

    run_migrations(pool).await
}
