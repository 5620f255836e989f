//! CLI command definitions and dispatch.

pub mod backup;
pub mod department;
pub mod employee;
pub mod health;
pub mod migrate;
pub mod seed;
pub mod user;

use clap::{Parser, Subcommand};

use empdb_core::config::AppConfig;
use empdb_core::error::AppError;

use crate::output::OutputFormat;

/// empdb — employee directory database administration
#[derive(Debug, Parser)]
#[command(name = "empdb", version, about, long_about = None)]
pub struct Cli {
    /// Configuration environment (merges config/<env>.toml over config/default.toml)
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Load the canonical sample dataset
    Seed,
    /// Check database connectivity
    Health,
    /// Employee management
    Employee(employee::EmployeeArgs),
    /// Department management
    Department(department::DepartmentArgs),
    /// User account management
    User(user::UserArgs),
    /// Database dump and import
    Backup(backup::BackupArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Migrate(args) => migrate::execute(args, config).await,
            Commands::Seed => seed::execute(config).await,
            Commands::Health => health::execute(config).await,
            Commands::Employee(args) => employee::execute(args, config, self.format).await,
            Commands::Department(args) => department::execute(args, config, self.format).await,
            Commands::User(args) => user::execute(args, config, self.format).await,
            Commands::Backup(args) => backup::execute(args, config).await,
        }
    }
}

/// Helper: create database pool from config
pub async fn create_db_pool(config: &AppConfig) -> Result<sqlx::PgPool, AppError> {
    let pool = empdb_database::connection::DatabasePool::connect(&config.database).await?;
    Ok(pool.into_pool())
}
