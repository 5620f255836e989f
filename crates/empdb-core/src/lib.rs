//! # empdb-core
//!
//! Core crate for empdb. Contains configuration schemas, the entity
//! descriptor model, dynamic column values, pagination and envelope
//! types, the repository trait seam, and the unified error system.
//!
//! This crate has **no** internal dependencies on other empdb crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
