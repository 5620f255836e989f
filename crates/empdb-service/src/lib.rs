//! # empdb-service
//!
//! Thin business services over the repository layer. Services own the
//! decisions repositories must not make: turning "no row matched" into
//! user-facing not-found errors, assigning employee numbers, and
//! shaping paginated reads.

pub mod departments;
pub mod employees;
pub mod users;

pub use departments::DepartmentsService;
pub use employees::EmployeesService;
pub use users::UsersService;
