//! Employee entity.

pub mod gender;
pub mod model;

pub use gender::Gender;
pub use model::{CreateEmployee, Employee, UpdateEmployee};
