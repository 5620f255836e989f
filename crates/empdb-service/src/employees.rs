//! Employee operations.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::info;

use empdb_core::error::AppError;
use empdb_core::result::AppResult;
use empdb_core::types::pagination::{PageRequest, Paginated};
use empdb_database::repositories::{EmployeeRepository, SalaryRepository};
use empdb_entity::employee::{CreateEmployee, Employee, Gender, UpdateEmployee};
use empdb_entity::salary::Salary;

/// Employee numbers start here; new numbers are derived from the
/// current row count.
const FIRST_EMP_NO: i32 = 10001;

/// Handles employee CRUD and salary history.
#[derive(Debug, Clone)]
pub struct EmployeesService {
    employees: Arc<EmployeeRepository>,
    salaries: Arc<SalaryRepository>,
}

impl EmployeesService {
    /// Create a new employees service.
    pub fn new(employees: Arc<EmployeeRepository>, salaries: Arc<SalaryRepository>) -> Self {
        Self {
            employees,
            salaries,
        }
    }

    /// List employees. Without a page request the read is capped at the
    /// repository's default page size.
    pub async fn find_all(&self) -> AppResult<Vec<Employee>> {
        self.employees.find_all(None).await
    }

    /// List one page of employees with the total row count attached.
    pub async fn list(&self, page: &PageRequest) -> AppResult<Paginated<Employee>> {
        self.employees.find_page(page).await
    }

    /// Look up one employee; not finding one is a user-facing error here,
    /// not in the repository.
    pub async fn find_one(&self, emp_no: i32) -> AppResult<Employee> {
        self.employees
            .find_one(&emp_no.into())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {emp_no} not found")))
    }

    /// Create an employee, assigning the next employee number.
    pub async fn create(&self, request: &CreateEmployee) -> AppResult<Employee> {
        let emp_no = self.next_emp_no().await?;
        let data = request.field_map().set("emp_no", emp_no);
        let employee = self.employees.create(&data).await?;

        info!(
            emp_no = employee.emp_no,
            name = %format!("{} {}", employee.first_name, employee.last_name),
            "Employee created"
        );
        Ok(employee)
    }

    /// Update an employee's fields.
    pub async fn update(&self, emp_no: i32, request: &UpdateEmployee) -> AppResult<Employee> {
        let updated = self
            .employees
            .update(&emp_no.into(), &request.field_map())
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee {emp_no} not found")))?;

        info!(emp_no, "Employee updated");
        Ok(updated)
    }

    /// Delete an employee.
    pub async fn remove(&self, emp_no: i32) -> AppResult<()> {
        let removed = self.employees.remove(&emp_no.into()).await?;
        if removed == 0 {
            return Err(AppError::not_found(format!("Employee {emp_no} not found")));
        }
        info!(emp_no, "Employee removed");
        Ok(())
    }

    /// List employees of the given gender.
    pub async fn find_by_gender(&self, gender: Gender) -> AppResult<Vec<Employee>> {
        self.employees.find_by_gender(gender).await
    }

    /// Salary periods recorded for an employee.
    pub async fn salary_history(&self, emp_no: i32) -> AppResult<Vec<Salary>> {
        // Surface a not-found for unknown employees rather than an
        // empty history.
        self.find_one(emp_no).await?;
        self.salaries.history_for(emp_no).await
    }

    /// Change the amount of one salary period.
    pub async fn adjust_salary(
        &self,
        emp_no: i32,
        from_date: NaiveDate,
        new_salary: i32,
    ) -> AppResult<Salary> {
        let adjusted = self
            .salaries
            .adjust(emp_no, from_date, new_salary)
            .await?
            .ok_or_else(|| {
                AppError::not_found(format!(
                    "Salary period for employee {emp_no} starting {from_date} not found"
                ))
            })?;

        info!(emp_no, %from_date, new_salary, "Salary adjusted");
        Ok(adjusted)
    }

    async fn next_emp_no(&self) -> AppResult<i32> {
        let count = self.employees.count().await?;
        Ok(FIRST_EMP_NO + count as i32)
    }
}
