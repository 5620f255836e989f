//! # empdb-entity
//!
//! Domain entity models for empdb. Every entity struct represents a
//! database table row, derives `Debug`, `Clone`, `Serialize`,
//! `Deserialize`, and `sqlx::FromRow`, and carries a static
//! [`EntityDescriptor`](empdb_core::types::EntityDescriptor) describing
//! its table.

pub mod department;
pub mod employee;
pub mod salary;
pub mod user;

use empdb_core::result::AppResult;
use empdb_core::traits::Entity;
use empdb_core::types::EntityDescriptor;

/// All registered table descriptors.
pub fn registry() -> Vec<&'static EntityDescriptor> {
    vec![
        employee::Employee::descriptor(),
        department::Department::descriptor(),
        salary::Salary::descriptor(),
        user::User::descriptor(),
    ]
}

/// Validate every registered descriptor. Run once at startup.
pub fn validate_registry() -> AppResult<()> {
    for descriptor in registry() {
        descriptor.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_descriptors_are_well_formed() {
        validate_registry().expect("registered descriptors must validate");
    }

    #[test]
    fn primary_keys_resolve_as_declared() {
        let pk = |d: &'static EntityDescriptor| d.primary_key().map(|c| c.name);
        assert_eq!(pk(employee::Employee::descriptor()), Some("emp_no"));
        assert_eq!(pk(department::Department::descriptor()), Some("dept_no"));
        assert_eq!(pk(salary::Salary::descriptor()), None);
        assert_eq!(pk(user::User::descriptor()), Some("id"));
    }
}
