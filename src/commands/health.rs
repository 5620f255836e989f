//! Database connectivity check.

use empdb_core::config::AppConfig;
use empdb_core::error::AppError;
use empdb_database::connection::DatabasePool;

use crate::output;

/// Execute the health command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = DatabasePool::connect(&config.database).await?;

    if pool.health_check().await? {
        output::print_success("Database connection OK");
    } else {
        output::print_error("Database responded with an unexpected result");
    }

    pool.close().await;
    Ok(())
}
