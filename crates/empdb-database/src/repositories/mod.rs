//! Repository implementations.
//!
//! [`generic::GenericRepository`] carries all shared CRUD/query logic;
//! the per-entity modules wrap it with typed helpers, the way the
//! surrounding services expect to consume them.

pub mod department;
pub mod employee;
pub mod generic;
pub mod salary;
pub mod user;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use generic::GenericRepository;
pub use salary::SalaryRepository;
pub use user::UserRepository;
