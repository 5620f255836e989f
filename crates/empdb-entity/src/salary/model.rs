//! Salary history entity model.
//!
//! The salaries table has no primary key; rows are addressed by the
//! `(emp_no, from_date)` pair through condition-based repository
//! operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use empdb_core::traits::Entity;
use empdb_core::types::{ColumnDef, ColumnType, EntityDescriptor, FieldMap};

static DESCRIPTOR: EntityDescriptor = EntityDescriptor::new(
    "salaries",
    &[
        ColumnDef::new("emp_no", ColumnType::Integer),
        ColumnDef::new("salary", ColumnType::Integer),
        ColumnDef::new("from_date", ColumnType::Date),
        ColumnDef::new("to_date", ColumnType::Date),
    ],
);

/// One salary period for an employee.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Salary {
    /// Employee number this period belongs to.
    pub emp_no: i32,
    /// Annual salary for the period.
    pub salary: i32,
    /// Period start.
    pub from_date: NaiveDate,
    /// Period end.
    pub to_date: NaiveDate,
}

impl Entity for Salary {
    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

/// Data required to record a salary period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSalary {
    /// Employee number.
    pub emp_no: i32,
    /// Annual salary.
    pub salary: i32,
    /// Period start.
    pub from_date: NaiveDate,
    /// Period end.
    pub to_date: NaiveDate,
}

impl CreateSalary {
    /// Render as a column/value payload.
    pub fn field_map(&self) -> FieldMap {
        FieldMap::new()
            .set("emp_no", self.emp_no)
            .set("salary", self.salary)
            .set("from_date", self.from_date)
            .set("to_date", self.to_date)
    }
}
