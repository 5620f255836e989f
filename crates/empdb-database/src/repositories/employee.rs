//! Employee repository.

use std::ops::Deref;

use sqlx::PgPool;

use empdb_core::result::AppResult;
use empdb_core::types::FieldMap;
use empdb_entity::employee::{Employee, Gender};

use super::generic::GenericRepository;

/// Typed repository for the employees table. Derefs to the generic
/// engine for the uniform operation set.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    inner: GenericRepository<Employee>,
}

impl EmployeeRepository {
    /// Create a new employee repository.
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

    /// List employees of the given gender.
    pub async fn find_by_gender(&self, gender: Gender) -> AppResult<Vec<Employee>> {
        let filter = FieldMap::new().set("gender", gender);
        self.inner.find_by_condition(&filter, None).await
    }
}

impl Deref for EmployeeRepository {
    type Target = GenericRepository<Employee>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
