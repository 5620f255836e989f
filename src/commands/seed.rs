//! Seed the canonical sample dataset.

use empdb_core::config::AppConfig;
use empdb_core::error::AppError;

use crate::output;

/// Execute the seed command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;

    println!("Seeding database...");
    empdb_database::seed::seed(&pool).await?;
    output::print_success("Seed data loaded.");

    Ok(())
}
