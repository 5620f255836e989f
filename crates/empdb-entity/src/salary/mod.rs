//! Salary history entity.

pub mod model;

pub use model::{CreateSalary, Salary};
