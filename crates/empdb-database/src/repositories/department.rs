//! Department repository.

use std::ops::Deref;

use sqlx::PgPool;

use empdb_core::result::AppResult;
use empdb_core::types::FieldMap;
use empdb_entity::department::Department;

use super::generic::GenericRepository;

/// Typed repository for the departments table.
#[derive(Debug, Clone)]
pub struct DepartmentRepository {
    inner: GenericRepository<Department>,
}

impl DepartmentRepository {
    /// Create a new department repository.
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

    /// Find a department by its unique name.
    pub async fn find_by_name(&self, dept_name: &str) -> AppResult<Option<Department>> {
        let filter = FieldMap::new().set("dept_name", dept_name);
        let matches = self.inner.find_by_condition(&filter, None).await?;
        Ok(matches.into_iter().next())
    }
}

impl Deref for DepartmentRepository {
    type Target = GenericRepository<Department>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
