//! The entity capability trait.

use serde::Serialize;
use sqlx::postgres::PgRow;

use crate::types::descriptor::EntityDescriptor;

/// A persisted entity type.
///
/// Bundles the row-decoding and serialization capabilities the generic
/// repository needs with the static table descriptor for the entity.
/// Implemented once per table in `empdb-entity`.
pub trait Entity:
    for<'r> sqlx::FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    /// The static descriptor for this entity's table.
    fn descriptor() -> &'static EntityDescriptor;
}
