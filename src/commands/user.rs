//! User account management commands.
//!
//! Credentials are stored as opaque pre-computed hashes; this tool never
//! hashes or verifies passwords itself.

use std::sync::Arc;

use clap::{Args, Subcommand};

use empdb_core::config::AppConfig;
use empdb_core::error::AppError;
use empdb_core::types::pagination::PageRequest;
use empdb_core::types::Envelope;
use empdb_database::repositories::UserRepository;
use empdb_entity::user::CreateUser;
use empdb_service::UsersService;

use crate::output;
use crate::output::OutputFormat;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List user accounts, one page at a time
    List {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Page size (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<u64>,
    },
    /// Show one user account by username
    Show {
        /// Username
        username: String,
    },
    /// Create a user account
    Create {
        /// Username
        #[arg(short, long)]
        username: Option<String>,
        /// Email
        #[arg(short, long)]
        email: Option<String>,
        /// Pre-computed credential hash (will prompt if not provided)
        #[arg(long)]
        password_hash: Option<String>,
        /// Full name
        #[arg(long)]
        full_name: Option<String>,
    },
    /// Delete a user account
    Remove {
        /// User id
        id: i64,
        /// Skip confirmation prompt
        #[arg(long)]
        force: bool,
    },
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let pool = super::create_db_pool(config).await?;
    let users =
        Arc::new(UserRepository::new(pool).with_default_page_size(config.api.default_page_size));
    let service = UsersService::new(users);

    match &args.command {
        UserCommand::List { page, page_size } => {
            let request = PageRequest::new(
                *page,
                page_size.unwrap_or(config.api.default_page_size),
            );
            let page = service.list(&request).await?;
            output::print_item(&Envelope::paginated(page, &request), format);
        }
        UserCommand::Show { username } => {
            let user = service.find_by_username(username).await?;
            output::print_item(&Envelope::ok(user), format);
        }
        UserCommand::Create {
            username,
            email,
            password_hash,
            full_name,
        } => {
            let username = match username {
                Some(u) => u.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Username")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let email = match email {
                Some(e) => e.clone(),
                None => dialoguer::Input::new()
                    .with_prompt("Email")
                    .interact_text()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let password_hash = match password_hash {
                Some(h) => h.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Credential hash")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?,
            };

            let request = CreateUser {
                username: username.clone(),
                password_hash,
                email,
                phone: None,
                full_name: full_name.clone(),
            };

            let user = service.create(&request).await?;
            output::print_item(&Envelope::created(user), format);
        }
        UserCommand::Remove { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!("Delete user {}?", id))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            service.remove(*id).await?;
            output::print_success(&format!("User {} removed", id));
        }
    }

    Ok(())
}
