//! Employee management commands.

use std::sync::Arc;

use chrono::NaiveDate;
use clap::{Args, Subcommand};

use empdb_core::config::AppConfig;
use empdb_core::error::AppError;
use empdb_core::types::pagination::PageRequest;
use empdb_core::types::Envelope;
use empdb_database::repositories::{EmployeeRepository, SalaryRepository};
use empdb_entity::employee::Gender;
use empdb_service::EmployeesService;

use crate::output;
use crate::output::OutputFormat;

/// Arguments for employee commands
#[derive(Debug, Args)]
pub struct EmployeeArgs {
    /// Employee subcommand
    #[command(subcommand)]
    pub command: EmployeeCommand,
}

/// Employee subcommands
#[derive(Debug, Subcommand)]
pub enum EmployeeCommand {
    /// List employees, one page at a time
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Page size (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<u64>,
        /// Only list employees of this gender (M or F)
        #[arg(long)]
        gender: Option<String>,
    },
    /// Show one employee
    Show {
        /// Employee number
        emp_no: i32,
    },
    /// Show an employee's salary history
    Salaries {
        /// Employee number
        emp_no: i32,
    },
    /// Change the amount of one salary period
    AdjustSalary {
        /// Employee number
        emp_no: i32,
        /// Start date of the period to adjust (YYYY-MM-DD)
        from_date: NaiveDate,
        /// New salary amount
        salary: i32,
    },
    /// Delete an employee
    Remove {
        /// Employee number
        emp_no: i32,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute employee commands
pub async fn execute(
    args: &EmployeeArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let employees = Arc::new(
        EmployeeRepository::new(pool.clone())
            .with_default_page_size(config.api.default_page_size),
    );
    let salaries = Arc::new(SalaryRepository::new(pool));
    let service = EmployeesService::new(employees, salaries);

    match &args.command {
        EmployeeCommand::List {
            page,
            page_size,
            gender,
        } => match gender {
            Some(g) => {
                let rows = service.find_by_gender(parse_gender(g)?).await?;
                output::print_item(&Envelope::ok(rows), format);
            }
            None => {
                let request = PageRequest::new(
                    *page,
                    page_size.unwrap_or(config.api.default_page_size),
                );
                let page = service.list(&request).await?;
                output::print_item(&Envelope::paginated(page, &request), format);
            }
        },
        EmployeeCommand::Show { emp_no } => {
            let employee = service.find_one(*emp_no).await?;
            output::print_item(&Envelope::ok(employee), format);
        }
        EmployeeCommand::Salaries { emp_no } => {
            let history = service.salary_history(*emp_no).await?;
            output::print_item(&Envelope::ok(history), format);
        }
        EmployeeCommand::AdjustSalary {
            emp_no,
            from_date,
            salary,
        } => {
            let adjusted = service.adjust_salary(*emp_no, *from_date, *salary).await?;
            output::print_item(&Envelope::ok(adjusted), format);
        }
        EmployeeCommand::Remove { emp_no, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete employee {}?", emp_no))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            service.remove(*emp_no).await?;
            output::print_success(&format!("Employee {} removed", emp_no));
        }
    }

    Ok(())
}

fn parse_gender(raw: &str) -> Result<Gender, AppError> {
    match raw.to_ascii_uppercase().as_str() {
        "M" => Ok(Gender::M),
        "F" => Ok(Gender::F),
        other => Err(AppError::validation(format!(
            "Unknown gender '{other}' (expected M or F)"
        ))),
    }
}
