//! Generic repository trait for database access.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::traits::entity::Entity;
use crate::types::pagination::{PageRequest, Paginated};
use crate::types::value::{FieldMap, Value};

/// The uniform data-access operation set, parameterized per entity.
///
/// Contracts:
/// - lookups that find nothing return `None`/empty, never an error;
/// - operations that need a primary key fail with a configuration
///   error when the bound entity has none;
/// - condition maps must be non-empty and reference only declared
///   columns, checked before any statement is issued.
#[async_trait]
pub trait Repository<E: Entity>: Send + Sync {
    /// Find one row by primary key.
    async fn find_one(&self, key: &Value) -> AppResult<Option<E>>;

    /// List rows in natural storage order. `None` falls back to the
    /// system-wide default page size at offset 0.
    async fn find_all(&self, page: Option<&PageRequest>) -> AppResult<Vec<E>>;

    /// List one page of rows together with the total row count.
    async fn find_page(&self, page: &PageRequest) -> AppResult<Paginated<E>>;

    /// List rows matching a conjunction of equality predicates.
    async fn find_by_condition(
        &self,
        filter: &FieldMap,
        page: Option<&PageRequest>,
    ) -> AppResult<Vec<E>>;

    /// Insert a row and return it, re-read by its primary key.
    async fn create(&self, data: &FieldMap) -> AppResult<E>;

    /// Update one row by primary key and return it, or `None` when no
    /// row matched.
    async fn update(&self, key: &Value, patch: &FieldMap) -> AppResult<Option<E>>;

    /// Update at most one row matching the condition and return it, or
    /// `None` when no row matched.
    async fn update_one_by_condition(
        &self,
        filter: &FieldMap,
        patch: &FieldMap,
    ) -> AppResult<Option<E>>;

    /// Delete by primary key; returns the number of rows removed.
    async fn remove(&self, key: &Value) -> AppResult<u64>;

    /// Total row count for the bound table.
    async fn count(&self) -> AppResult<u64>;
}
