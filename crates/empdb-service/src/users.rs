//! User account operations.
//!
//! Credential hashes are stored opaquely; authentication and token
//! issuance live outside this system.

use std::sync::Arc;

use tracing::info;

use empdb_core::error::AppError;
use empdb_core::result::AppResult;
use empdb_core::types::pagination::{PageRequest, Paginated};
use empdb_database::repositories::UserRepository;
use empdb_entity::user::{CreateUser, UpdateUser, User};

/// Handles user account CRUD.
#[derive(Debug, Clone)]
pub struct UsersService {
    users: Arc<UserRepository>,
}

impl UsersService {
    /// Create a new users service.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// List users (capped at the default page size).
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.users.find_all(None).await
    }

    /// List one page of users with the total row count attached.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Paginated<User>> {
        self.users.find_page(page).await
    }

    /// Look up one user by id.
    pub async fn find_one(&self, id: i64) -> AppResult<User> {
        self.users
            .find_one(&id.into())
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))
    }

    /// Look up one user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<User> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::not_found(format!("User '{username}' not found")))
    }

    /// Create a user account. Duplicate usernames/emails surface as
    /// conflicts.
    pub async fn create(&self, request: &CreateUser) -> AppResult<User> {
        let user = self.users.create_user(request).await?;
        info!(user_id = user.id, username = %user.username, "User created");
        Ok(user)
    }

    /// Update a user's profile fields.
    pub async fn update(&self, id: i64, request: &UpdateUser) -> AppResult<User> {
        let updated = self
            .users
            .update(&id.into(), &request.field_map())
            .await?
            .ok_or_else(|| AppError::not_found(format!("User {id} not found")))?;

        info!(user_id = id, "User updated");
        Ok(updated)
    }

    /// Delete a user account.
    pub async fn remove(&self, id: i64) -> AppResult<()> {
        let removed = self.users.remove(&id.into()).await?;
        if removed == 0 {
            return Err(AppError::not_found(format!("User {id} not found")));
        }
        info!(user_id = id, "User removed");
        Ok(())
    }
}
