//! User repository.

use std::ops::Deref;

use sqlx::PgPool;

use empdb_core::error::AppError;
use empdb_core::result::AppResult;
use empdb_core::types::FieldMap;
use empdb_entity::user::{CreateUser, User};

use super::generic::GenericRepository;

/// Typed repository for the users table.
#[derive(Debug, Clone)]
pub struct UserRepository {
    inner: GenericRepository<User>,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: GenericRepository::new(pool),
        }
    }

    /// Override the page size used by unpaginated list reads.
    pub fn with_default_page_size(mut self, page_size: u64) -> Self {
        self.inner = self.inner.with_default_page_size(page_size);
        self
    }

    /// Find a user by username.
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let filter = FieldMap::new().set("username", username);
        let matches = self.inner.find_by_condition(&filter, None).await?;
        Ok(matches.into_iter().next())
    }

    /// Create a user, translating unique-constraint violations on
    /// username/email into conflicts.
    pub async fn create_user(&self, data: &CreateUser) -> AppResult<User> {
        self.inner.create(&data.field_map()).await.map_err(|e| {
            match constraint_of(&e) {
                Some("users_username_key") => {
                    AppError::conflict(format!("Username '{}' already exists", data.username))
                }
                Some("users_email_key") => AppError::conflict("Email already in use".to_string()),
                _ => e,
            }
        })
    }
}

impl Deref for UserRepository {
    type Target = GenericRepository<User>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

/// Extract the violated constraint name from a propagated storage error.
fn constraint_of(error: &AppError) -> Option<&str> {
    let source = error.source.as_ref()?;
    match source.downcast_ref::<sqlx::Error>()? {
        sqlx::Error::Database(db_err) => db_err.constraint(),
        _ => None,
    }
}
