//! Department operations.

use std::sync::Arc;

use tracing::info;

use empdb_core::error::AppError;
use empdb_core::result::AppResult;
use empdb_core::types::pagination::{PageRequest, Paginated};
use empdb_database::repositories::DepartmentRepository;
use empdb_entity::department::{CreateDepartment, Department, UpdateDepartment};

/// Handles department CRUD.
#[derive(Debug, Clone)]
pub struct DepartmentsService {
    departments: Arc<DepartmentRepository>,
}

impl DepartmentsService {
    /// Create a new departments service.
    pub fn new(departments: Arc<DepartmentRepository>) -> Self {
        Self { departments }
    }

    /// List departments (capped at the default page size).
    pub async fn find_all(&self) -> AppResult<Vec<Department>> {
        self.departments.find_all(None).await
    }

    /// List one page of departments with the total row count attached.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Paginated<Department>> {
        self.departments.find_page(page).await
    }

    /// Look up one department by number.
    pub async fn find_one(&self, dept_no: &str) -> AppResult<Department> {
        self.departments
            .find_one(&dept_no.into())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Department {dept_no} not found")))
    }

    /// Create a department. The department number is caller-supplied.
    pub async fn create(&self, request: &CreateDepartment) -> AppResult<Department> {
        if let Some(existing) = self.departments.find_by_name(&request.dept_name).await? {
            return Err(AppError::conflict(format!(
                "Department name '{}' is already taken by {}",
                request.dept_name, existing.dept_no
            )));
        }

        let department = self.departments.create(&request.field_map()).await?;
        info!(dept_no = %department.dept_no, "Department created");
        Ok(department)
    }

    /// Rename a department.
    pub async fn update(&self, dept_no: &str, request: &UpdateDepartment) -> AppResult<Department> {
        let updated = self
            .departments
            .update(&dept_no.into(), &request.field_map())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Department {dept_no} not found")))?;

        info!(dept_no, "Department updated");
        Ok(updated)
    }

    /// Delete a department.
    pub async fn remove(&self, dept_no: &str) -> AppResult<()> {
        let removed = self.departments.remove(&dept_no.into()).await?;
        if removed == 0 {
            return Err(AppError::not_found(format!("Department {dept_no} not found")));
        }
        info!(dept_no, "Department removed");
        Ok(())
    }
}
