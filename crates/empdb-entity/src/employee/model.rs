//! Employee entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use empdb_core::traits::Entity;
use empdb_core::types::{ColumnDef, ColumnType, EntityDescriptor, FieldMap};

use super::gender::{GENDER_VALUES, Gender};

static DESCRIPTOR: EntityDescriptor = EntityDescriptor::new(
    "employees",
    &[
        ColumnDef::new("emp_no", ColumnType::Integer).primary(),
        ColumnDef::new("birth_date", ColumnType::Date),
        ColumnDef::new("first_name", ColumnType::Varchar(14)),
        ColumnDef::new("last_name", ColumnType::Varchar(16)),
        ColumnDef::new("gender", ColumnType::Enum(GENDER_VALUES)),
        ColumnDef::new("hire_date", ColumnType::Date),
    ],
);

/// One employee record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Employee number (primary key, assigned by the service layer).
    pub emp_no: i32,
    /// Date of birth (calendar date, no time component).
    pub birth_date: NaiveDate,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gender.
    pub gender: Gender,
    /// Hiring date (calendar date, no time component).
    pub hire_date: NaiveDate,
}

impl Entity for Employee {
    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

/// Data required to create a new employee.
///
/// The date fields accept full timestamps; the repository truncates them
/// to calendar dates on the way into storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// Date of birth.
    pub birth_date: DateTime<Utc>,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Gender.
    pub gender: Gender,
    /// Hiring date.
    pub hire_date: DateTime<Utc>,
}

impl CreateEmployee {
    /// Render as a column/value payload. The employee number is assigned
    /// by the caller and added separately.
    pub fn field_map(&self) -> FieldMap {
        FieldMap::new()
            .set("birth_date", self.birth_date)
            .set("first_name", self.first_name.clone())
            .set("last_name", self.last_name.clone())
            .set("gender", self.gender)
            .set("hire_date", self.hire_date)
    }
}

/// Data for updating an existing employee; absent fields are untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEmployee {
    /// New date of birth.
    pub birth_date: Option<DateTime<Utc>>,
    /// New first name.
    pub first_name: Option<String>,
    /// New last name.
    pub last_name: Option<String>,
    /// New gender.
    pub gender: Option<Gender>,
    /// New hiring date.
    pub hire_date: Option<DateTime<Utc>>,
}

impl UpdateEmployee {
    /// Render the present fields as a column/value payload.
    pub fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        if let Some(birth_date) = self.birth_date {
            map = map.set("birth_date", birth_date);
        }
        if let Some(first_name) = &self.first_name {
            map = map.set("first_name", first_name.clone());
        }
        if let Some(last_name) = &self.last_name {
            map = map.set("last_name", last_name.clone());
        }
        if let Some(gender) = self.gender {
            map = map.set("gender", gender);
        }
        if let Some(hire_date) = self.hire_date {
            map = map.set("hire_date", hire_date);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_payload_only_carries_present_fields() {
        let patch = UpdateEmployee {
            last_name: Some("Simmel".to_string()),
            ..Default::default()
        };
        let map = patch.field_map();
        assert_eq!(map.columns(), vec!["last_name"]);

        assert!(UpdateEmployee::default().field_map().is_empty());
    }
}
