//! Salary history repository.
//!
//! The salaries table has no primary key, so every operation here goes
//! through the condition-based paths of the generic engine; the
//! key-based operations would fail with a configuration error.

use std::ops::Deref;

use chrono::NaiveDate;
use sqlx::PgPool;

use empdb_core::error::{AppError, ErrorKind};
use empdb_core::result::AppResult;
use empdb_core::types::FieldMap;
use empdb_entity::salary::{CreateSalary, Salary};

use super::generic::GenericRepository;

/// Typed repository for the salaries table.
#[derive(Debug, Clone)]
pub struct SalaryRepository {
    inner: GenericRepository<Salary>,
}

impl SalaryRepository {
    /// Create a new salary repository.
    pub fn new(pool: PgPool) -> Self {
        Self {
            inner: GenericRepository::new(pool),
        }
    }

    /// Salary periods recorded for one employee.
    pub async fn history_for(&self, emp_no: i32) -> AppResult<Vec<Salary>> {
        let filter = FieldMap::new().set("emp_no", emp_no);
        self.inner.find_by_condition(&filter, None).await
    }

    /// Record a new salary period. The table has no primary key, so the
    /// insert cannot go through the generic create/re-read path.
    pub async fn record(&self, data: &CreateSalary) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO salaries (emp_no, salary, from_date, to_date) VALUES ($1, $2, $3, $4)",
        )
        .bind(data.emp_no)
        .bind(data.salary)
        .bind(data.from_date)
        .bind(data.to_date)
        .execute(self.inner.pool())
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to insert salary period", e)
        })?;
        Ok(())
    }

    /// Change the amount of the period identified by employee and start
    /// date; returns the updated row, or `None` when no period matched.
    pub async fn adjust(
        &self,
        emp_no: i32,
        from_date: NaiveDate,
        new_salary: i32,
    ) -> AppResult<Option<Salary>> {
        let filter = FieldMap::new().set("emp_no", emp_no).set("from_date", from_date);
        let patch = FieldMap::new().set("salary", new_salary);
        self.inner.update_one_by_condition(&filter, &patch).await
    }
}

impl Deref for SalaryRepository {
    type Target = GenericRepository<Salary>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}
