//! # empdb-database
//!
//! PostgreSQL connection management, the generic descriptor-driven
//! repository engine, per-entity repository wrappers, migrations, and
//! seed data for empdb.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

pub use connection::DatabasePool;
