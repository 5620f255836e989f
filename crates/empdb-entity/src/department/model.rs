//! Department entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use empdb_core::traits::Entity;
use empdb_core::types::{ColumnDef, ColumnType, EntityDescriptor, FieldMap};

static DESCRIPTOR: EntityDescriptor = EntityDescriptor::new(
    "departments",
    &[
        ColumnDef::new("dept_no", ColumnType::Char(4)).primary(),
        ColumnDef::new("dept_name", ColumnType::Varchar(40)),
    ],
);

/// One department record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Department {
    /// Department number (primary key, e.g. `d001`).
    pub dept_no: String,
    /// Unique department name.
    pub dept_name: String,
}

impl Entity for Department {
    fn descriptor() -> &'static EntityDescriptor {
        &DESCRIPTOR
    }
}

/// Data required to create a new department. The department number is
/// caller-supplied, not generated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDepartment {
    /// Department number.
    pub dept_no: String,
    /// Department name.
    pub dept_name: String,
}

impl CreateDepartment {
    /// Render as a column/value payload.
    pub fn field_map(&self) -> FieldMap {
        FieldMap::new()
            .set("dept_no", self.dept_no.clone())
            .set("dept_name", self.dept_name.clone())
    }
}

/// Data for renaming a department.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateDepartment {
    /// New department name.
    pub dept_name: Option<String>,
}

impl UpdateDepartment {
    /// Render the present fields as a column/value payload.
    pub fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        if let Some(dept_name) = &self.dept_name {
            map = map.set("dept_name", dept_name.clone());
        }
        map
    }
}
