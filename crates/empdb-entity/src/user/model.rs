//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use empdb_core::traits::Entity;
use empdb_core::types::{ColumnDef, ColumnType, EntityDescriptor, FieldMap};

static DESCRIPTOR: EntityDescriptor = EntityDescriptor::new(
    "users",
    &[
        ColumnDef::new("id", ColumnType::BigInt).primary(),
        ColumnDef::new("username", ColumnType::Varchar(50)),
        ColumnDef::new("password_hash", ColumnType::Varchar(255)).sensitive(),
        ColumnDef::new("email", ColumnType::Varchar(255)),
        ColumnDef::new("phone", ColumnType::Varchar(20)),
        ColumnDef::new("full_name", ColumnType::Varchar(100)),
        ColumnDef::new("created_at", ColumnType::DateTime),
        ColumnDef::new("updated_at", ColumnType::DateTime),
    ],
);

/// An application user account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Generated user identifier.
    pub id: i64,
    /// Unique login name.
    pub username: String,
    /// Credential hash; never serialized outward.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Unique email address.
    pub email: String,
    /// Phone number.
    pub phone: Option<String>,
    /// Human-readable full name.
    pub full_name: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Entity for User {
    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

/// Data required to create a user. The credential hash is produced by
/// the caller; this crate stores it opaquely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Desired username.
    pub username: String,
    /// Pre-hashed credential.
    pub password_hash: String,
    /// Email address.
    pub email: String,
    /// Phone number (optional).
    pub phone: Option<String>,
    /// Full name (optional).
    pub full_name: Option<String>,
}

impl CreateUser {
    /// Render as a column/value payload. Timestamps are DB-defaulted.
    pub fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new()
            .set("username", self.username.clone())
            .set("password_hash", self.password_hash.clone())
            .set("email", self.email.clone());
        if let Some(phone) = &self.phone {
            map = map.set("phone", phone.clone());
        }
        if let Some(full_name) = &self.full_name {
            map = map.set("full_name", full_name.clone());
        }
        map
    }
}

/// Data for updating a user's profile fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateUser {
    /// New email address.
    pub email: Option<String>,
    /// New phone number.
    pub phone: Option<String>,
    /// New full name.
    pub full_name: Option<String>,
}

impl UpdateUser {
    /// Render the present fields as a column/value payload.
    pub fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        if let Some(email) = &self.email {
            map = map.set("email", email.clone());
        }
        if let Some(phone) = &self.phone {
            map = map.set("phone", phone.clone());
        }
        if let Some(full_name) = &self.full_name {
            map = map.set("full_name", full_name.clone());
        }
        map
    }
}
