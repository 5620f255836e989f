//! Database dump and import commands.
//!
//! Thin wrappers over the PostgreSQL client tools; paths and binary
//! names come from the `[backup]` configuration section.

use std::path::PathBuf;

use chrono::Utc;
use clap::{Args, Subcommand};
use tokio::process::Command;

use empdb_core::config::AppConfig;
use empdb_core::error::AppError;

use crate::output;

/// Arguments for backup commands
#[derive(Debug, Args)]
pub struct BackupArgs {
    /// Backup subcommand
    #[command(subcommand)]
    pub command: BackupCommand,
}

/// Backup subcommands
#[derive(Debug, Subcommand)]
pub enum BackupCommand {
    /// Write a pg_dump snapshot into the dump directory
    Dump {
        /// Output file (defaults to a timestamped file in the dump directory)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replay SQL files against the database
    Import {
        /// Specific file to import (defaults to every .sql file in the import directory)
        file: Option<PathBuf>,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute backup commands
pub async fn execute(args: &BackupArgs, config: &AppConfig) -> Result<(), AppError> {
    match &args.command {
        BackupCommand::Dump { output } => dump(config, output.as_deref()).await,
        BackupCommand::Import { file, force } => import(config, file.as_deref(), *force).await,
    }
}

async fn dump(config: &AppConfig, output: Option<&std::path::Path>) -> Result<(), AppError> {
    let path = match output {
        Some(p) => p.to_path_buf(),
        None => {
            let stamp = Utc::now().format("%Y%m%d%H%M%S");
            PathBuf::from(&config.backup.dump_dir).join(format!("empdb-{stamp}.sql"))
        }
    };

    if let Some(dir) = path.parent() {
        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| AppError::internal(format!("Failed to create dump directory: {e}")))?;
    }

    println!("Dumping database to {}...", path.display());
    let result = Command::new(&config.backup.pg_dump)
        .arg(&config.database.url)
        .arg("--file")
        .arg(&path)
        .output()
        .await
        .map_err(|e| {
            AppError::internal(format!("Failed to run {}: {e}", config.backup.pg_dump))
        })?;

    if !result.status.success() {
        return Err(AppError::internal(format!(
            "{} exited with {}: {}",
            config.backup.pg_dump,
            result.status,
            String::from_utf8_lossy(&result.stderr).trim()
        )));
    }

    output::print_success(&format!("Database dumped to {}", path.display()));
    Ok(())
}

async fn import(
    config: &AppConfig,
    file: Option<&std::path::Path>,
    force: bool,
) -> Result<(), AppError> {
    let files = match file {
        Some(f) => vec![f.to_path_buf()],
        None => sql_files_in(&config.backup.import_dir).await?,
    };

    if files.is_empty() {
        println!("No .sql files found in {}.", config.backup.import_dir);
        return Ok(());
    }

    if !force {
        let confirm = dialoguer::Confirm::new()
            .with_prompt(format!(
                "Import {} file(s) into the database. Continue?",
                files.len()
            ))
            .default(false)
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

        if !confirm {
            println!("Cancelled.");
            return Ok(());
        }
    }

    for path in &files {
        println!("Importing {}...", path.display());
        let result = Command::new(&config.backup.psql)
            .arg(&config.database.url)
            .arg("-v")
            .arg("ON_ERROR_STOP=1")
            .arg("-f")
            .arg(path)
            .output()
            .await
            .map_err(|e| {
                AppError::internal(format!("Failed to run {}: {e}", config.backup.psql))
            })?;

        if !result.status.success() {
            return Err(AppError::internal(format!(
                "{} exited with {} while importing {}: {}",
                config.backup.psql,
                result.status,
                path.display(),
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }
    }

    output::print_success(&format!("Imported {} file(s)", files.len()));
    Ok(())
}

/// List `.sql` files in a directory, sorted by name so imports replay in
/// a predictable order.
async fn sql_files_in(dir: &str) -> Result<Vec<PathBuf>, AppError> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| AppError::internal(format!("Failed to read {dir}: {e}")))?;

    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| AppError::internal(format!("Failed to read {dir}: {e}")))?
    {
        let path = entry.path();
        if path.extension().is_some_and(|ext| ext == "sql") {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
