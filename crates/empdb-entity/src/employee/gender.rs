//! Employee gender enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use empdb_core::types::Value;

/// Gender as recorded in the employees table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "VARCHAR")]
pub enum Gender {
    /// Male.
    M,
    /// Female.
    F,
}

/// The storage-level value set for the `gender` column.
pub const GENDER_VALUES: &[&str] = &["M", "F"];

impl Gender {
    /// The single-letter storage representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::M => "M",
            Self::F => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Gender> for Value {
    fn from(gender: Gender) -> Self {
        Value::Text(gender.as_str().to_string())
    }
}
