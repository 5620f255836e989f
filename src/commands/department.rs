//! Department management commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use empdb_core::config::AppConfig;
use empdb_core::error::AppError;
use empdb_core::types::pagination::PageRequest;
use empdb_core::types::Envelope;
use empdb_database::repositories::DepartmentRepository;
use empdb_entity::department::CreateDepartment;
use empdb_service::DepartmentsService;

use crate::output;
use crate::output::OutputFormat;

/// Arguments for department commands
#[derive(Debug, Args)]
pub struct DepartmentArgs {
    /// Department subcommand
    #[command(subcommand)]
    pub command: DepartmentCommand,
}

/// Department subcommands
#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    /// List departments, one page at a time
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Page size (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<u64>,
    },
    /// Show one department
    Show {
        /// Department number (e.g. d001)
        dept_no: String,
    },
    /// Create a department
    Create {
        /// Department number (e.g. d010)
        dept_no: String,
        /// Department name
        dept_name: String,
    },
    /// Delete a department
    Remove {
        /// Department number
        dept_no: String,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute department commands
pub async fn execute(
    args: &DepartmentArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let departments = Arc::new(
        DepartmentRepository::new(pool).with_default_page_size(config.api.default_page_size),
    );
    let service = DepartmentsService::new(departments);

    match &args.command {
        DepartmentCommand::List { page, page_size } => {
            let request = PageRequest::new(
                *page,
                page_size.unwrap_or(config.api.default_page_size),
            );
            let page = service.list(&request).await?;
            output::print_item(&Envelope::paginated(page, &request), format);
        }
        DepartmentCommand::Show { dept_no } => {
            let department = service.find_one(dept_no).await?;
            output::print_item(&Envelope::ok(department), format);
        }
        DepartmentCommand::Create { dept_no, dept_name } => {
            let request = CreateDepartment {
                dept_no: dept_no.clone(),
                dept_name: dept_name.clone(),
            };
            let department = service.create(&request).await?;
            output::print_item(&Envelope::created(department), format);
        }
        DepartmentCommand::Remove { dept_no, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete department {}?", dept_no))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            service.remove(dept_no).await?;
            output::print_success(&format!("Department {} removed", dept_no));
        }
    }

    Ok(())
}
