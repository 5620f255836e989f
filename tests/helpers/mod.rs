//! Shared test helpers for integration tests.
//!
//! These tests need a scratch PostgreSQL database, named by the
//! `EMPDB_TEST_DATABASE_URL` environment variable, and are `#[ignore]`d
//! by default. Each test re-migrates, wipes, and re-seeds the schema,
//! so run them single-threaded: `cargo test -- --ignored --test-threads=1`.

use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use empdb_database::repositories::{
    DepartmentRepository, EmployeeRepository, SalaryRepository, UserRepository,
};
use empdb_service::{DepartmentsService, EmployeesService, UsersService};

/// Test database context
pub struct TestDb {
    /// Pool for direct queries
    pub pool: PgPool,
}

impl TestDb {
    /// Connect to the scratch database, migrate, wipe, and seed the
    /// canonical dataset.
    pub async fn new() -> Self {
        let url = std::env::var("EMPDB_TEST_DATABASE_URL")
            .expect("EMPDB_TEST_DATABASE_URL must point at a scratch database");

        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await
            .expect("Failed to connect to test database");

        empdb_database::migration::run_migrations(&pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&pool).await;

        empdb_database::seed::seed(&pool)
            .await
            .expect("Failed to seed test database");

        Self { pool }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let tables = ["salaries", "employees", "departments", "users"];

        for table in &tables {
            let query = format!("DELETE FROM {}", table);
            let _ = sqlx::query(&query).execute(pool).await;
        }
    }

    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.pool.clone())
    }

    pub fn departments(&self) -> DepartmentRepository {
        DepartmentRepository::new(self.pool.clone())
    }

    pub fn salaries(&self) -> SalaryRepository {
        SalaryRepository::new(self.pool.clone())
    }

    pub fn users(&self) -> UserRepository {
        UserRepository::new(self.pool.clone())
    }

    pub fn employees_service(&self) -> EmployeesService {
        EmployeesService::new(Arc::new(self.employees()), Arc::new(self.salaries()))
    }

    pub fn departments_service(&self) -> DepartmentsService {
        DepartmentsService::new(Arc::new(self.departments()))
    }

    pub fn users_service(&self) -> UsersService {
        UsersService::new(Arc::new(self.users()))
    }
}
