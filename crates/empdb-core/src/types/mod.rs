//! Core type definitions used across the empdb workspace.

pub mod descriptor;
pub mod envelope;
pub mod pagination;
pub mod value;

pub use descriptor::{ColumnDef, ColumnType, EntityDescriptor};
pub use envelope::{Envelope, PageMeta};
pub use pagination::{DEFAULT_PAGE_SIZE, PageRequest, Paginated};
pub use value::{FieldMap, Value};
