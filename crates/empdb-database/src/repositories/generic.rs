//! The generic descriptor-driven repository engine.
//!
//! [`GenericRepository`] provides uniform CRUD and query operations over
//! any entity with a static table descriptor, so per-entity repositories
//! never repeat query boilerplate. The primary-key column is resolved
//! once at construction; input payloads are validated against the
//! descriptor and date-times are truncated to calendar dates before any
//! statement is issued.

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{PgPool, Postgres, Row};

use empdb_core::error::{AppError, ErrorKind};
use empdb_core::result::AppResult;
use empdb_core::traits::{Entity, Repository};
use empdb_core::types::pagination::{DEFAULT_PAGE_SIZE, PageRequest, Paginated};
use empdb_core::types::{ColumnDef, ColumnType, EntityDescriptor, FieldMap, Value};

/// Uniform data access for one entity, bound to a shared pool.
///
/// The pool is externally owned; dropping a repository never closes
/// connections. Instances are cheap to clone and share.
#[derive(Debug, Clone)]
pub struct GenericRepository<E: Entity> {
    pool: PgPool,
    descriptor: &'static EntityDescriptor,
    primary_key: Option<&'static ColumnDef>,
    default_page_size: u64,
    _entity: PhantomData<E>,
}

impl<E: Entity> GenericRepository<E> {
    /// Bind a pool to this entity's descriptor. Resolves the primary-key
    /// column once; the resolution never changes for the instance's
    /// lifetime.
    pub fn new(pool: PgPool) -> Self {
        let descriptor = E::descriptor();
        Self {
            pool,
            descriptor,
            primary_key: descriptor.primary_key(),
            default_page_size: DEFAULT_PAGE_SIZE,
            _entity: PhantomData,
        }
    }

    /// Override the page size used by unpaginated list reads.
    pub fn with_default_page_size(mut self, page_size: u64) -> Self {
        self.default_page_size = page_size.max(1);
        self
    }

    /// The descriptor this repository is bound to.
    pub fn descriptor(&self) -> &'static EntityDescriptor {
        self.descriptor
    }

    /// The shared connection pool this repository issues statements on.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    fn require_primary_key(&self) -> AppResult<&'static ColumnDef> {
        self.primary_key.ok_or_else(|| {
            AppError::configuration(format!(
                "Table '{}' has no primary key; the requested operation requires one",
                self.descriptor.table
            ))
        })
    }

    fn db_err(&self, action: &str) -> impl Fn(sqlx::Error) -> AppError + '_ {
        let table = self.descriptor.table;
        let action = action.to_string();
        move |e| AppError::with_source(ErrorKind::Database, format!("Failed to {action} '{table}'"), e)
    }

    /// List rows in natural storage order.
    pub async fn find_all(&self, page: Option<&PageRequest>) -> AppResult<Vec<E>> {
        let limit = page.map_or(self.default_page_size, PageRequest::limit);
        let offset = page.map_or(0, PageRequest::offset);

        let sql = select_all_sql(self.descriptor.table);
        sqlx::query_as::<_, E>(&sql)
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(self.db_err("list rows from"))
    }

    /// List one page of rows together with the total row count, so the
    /// response-shaping layer never needs a second count query.
    pub async fn find_page(&self, page: &PageRequest) -> AppResult<Paginated<E>> {
        let total_count = self.count().await?;
        let rows = self.find_all(Some(page)).await?;
        Ok(Paginated::new(rows, total_count))
    }

    /// Total row count for the bound table, ignoring any filters.
    pub async fn count(&self) -> AppResult<u64> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.descriptor.table);
        let count: i64 = sqlx::query_scalar(&sql)
            .fetch_one(&self.pool)
            .await
            .map_err(self.db_err("count rows in"))?;
        Ok(count as u64)
    }

    /// Find one row by primary key; `None` when no row matches.
    pub async fn find_one(&self, key: &Value) -> AppResult<Option<E>> {
        let pk = self.require_primary_key()?;
        let sql = select_by_key_sql(self.descriptor.table, pk.name);
        bind_value_as(sqlx::query_as::<_, E>(&sql), key)
            .fetch_optional(&self.pool)
            .await
            .map_err(self.db_err("find row in"))
    }

    /// List rows matching a conjunction of equality predicates.
    pub async fn find_by_condition(
        &self,
        filter: &FieldMap,
        page: Option<&PageRequest>,
    ) -> AppResult<Vec<E>> {
        if filter.is_empty() {
            return Err(AppError::validation(format!(
                "At least one filter field is required to query '{}'",
                self.descriptor.table
            )));
        }
        check_columns(self.descriptor, filter)?;

        let limit = page.map_or(self.default_page_size, PageRequest::limit);
        let offset = page.map_or(0, PageRequest::offset);

        let columns = filter.columns();
        let sql = select_by_condition_sql(self.descriptor.table, &columns);
        let mut query = sqlx::query_as::<_, E>(&sql);
        for value in filter.values() {
            query = bind_value_as(query, value);
        }
        query
            .bind(limit as i64)
            .bind(offset as i64)
            .fetch_all(&self.pool)
            .await
            .map_err(self.db_err("query rows from"))
    }

    /// Insert a row and return it, re-read by its (generated or echoed)
    /// primary key.
    pub async fn create(&self, data: &FieldMap) -> AppResult<E> {
        let pk = self.require_primary_key()?;
        if data.is_empty() {
            return Err(AppError::validation(format!(
                "At least one field is required to insert into '{}'",
                self.descriptor.table
            )));
        }
        let data = transform_input(self.descriptor, data)?;

        let columns = data.columns();
        let sql = insert_sql(self.descriptor.table, &columns, pk.name);
        let mut query = sqlx::query(&sql);
        for value in data.values() {
            query = bind_value(query, value);
        }
        let row = query
            .fetch_one(&self.pool)
            .await
            .map_err(self.db_err("insert row into"))?;

        let key = decode_key(&row, pk).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!(
                    "Insert into '{}' succeeded but the generated key could not be read",
                    self.descriptor.table
                ),
                e,
            )
        })?;

        self.find_one(&key).await?.ok_or_else(|| {
            AppError::configuration(format!(
                "Row inserted into '{}' could not be re-read by its primary key",
                self.descriptor.table
            ))
        })
    }

    /// Update one row by primary key and re-read it; `None` when no row
    /// matched the key.
    pub async fn update(&self, key: &Value, patch: &FieldMap) -> AppResult<Option<E>> {
        let pk = self.require_primary_key()?;
        if patch.is_empty() {
            return Err(AppError::validation(format!(
                "At least one field to update is required for '{}'",
                self.descriptor.table
            )));
        }
        let patch = transform_input(self.descriptor, patch)?;

        let columns = patch.columns();
        let sql = update_by_key_sql(self.descriptor.table, &columns, pk.name);
        let mut query = sqlx::query(&sql);
        for value in patch.values() {
            query = bind_value(query, value);
        }
        let result = bind_value(query, key)
            .execute(&self.pool)
            .await
            .map_err(self.db_err("update row in"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        self.find_one(key).await
    }

    /// Update at most one row matching the condition, then re-read by
    /// the same condition and return the first match.
    pub async fn update_one_by_condition(
        &self,
        filter: &FieldMap,
        patch: &FieldMap,
    ) -> AppResult<Option<E>> {
        if filter.is_empty() {
            return Err(AppError::validation(format!(
                "At least one condition field is required to update '{}'",
                self.descriptor.table
            )));
        }
        if patch.is_empty() {
            return Err(AppError::validation(format!(
                "At least one field to update is required for '{}'",
                self.descriptor.table
            )));
        }
        check_columns(self.descriptor, filter)?;
        let patch = transform_input(self.descriptor, patch)?;

        let set_columns = patch.columns();
        let cond_columns = filter.columns();
        let sql = update_one_by_condition_sql(self.descriptor.table, &set_columns, &cond_columns);
        let mut query = sqlx::query(&sql);
        for value in patch.values() {
            query = bind_value(query, value);
        }
        for value in filter.values() {
            query = bind_value(query, value);
        }
        let result = query
            .execute(&self.pool)
            .await
            .map_err(self.db_err("update row in"))?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        let matches = self
            .find_by_condition(filter, Some(&PageRequest::new(1, 1)))
            .await?;
        Ok(matches.into_iter().next())
    }

    /// Delete by primary key; returns the number of rows removed (0 or 1
    /// for a well-formed key). Calling it again for the same key returns
    /// 0, never an error.
    pub async fn remove(&self, key: &Value) -> AppResult<u64> {
        let pk = self.require_primary_key()?;
        let sql = delete_by_key_sql(self.descriptor.table, pk.name);
        let result = bind_value(sqlx::query(&sql), key)
            .execute(&self.pool)
            .await
            .map_err(self.db_err("delete row from"))?;
        Ok(result.rows_affected())
    }
}

#[async_trait]
impl<E: Entity> Repository<E> for GenericRepository<E> {
    async fn find_one(&self, key: &Value) -> AppResult<Option<E>> {
        Self::find_one(self, key).await
    }

    async fn find_all(&self, page: Option<&PageRequest>) -> AppResult<Vec<E>> {
        Self::find_all(self, page).await
    }

    async fn find_page(&self, page: &PageRequest) -> AppResult<Paginated<E>> {
        Self::find_page(self, page).await
    }

    async fn find_by_condition(
        &self,
        filter: &FieldMap,
        page: Option<&PageRequest>,
    ) -> AppResult<Vec<E>> {
        Self::find_by_condition(self, filter, page).await
    }

    async fn create(&self, data: &FieldMap) -> AppResult<E> {
        Self::create(self, data).await
    }

    async fn update(&self, key: &Value, patch: &FieldMap) -> AppResult<Option<E>> {
        Self::update(self, key, patch).await
    }

    async fn update_one_by_condition(
        &self,
        filter: &FieldMap,
        patch: &FieldMap,
    ) -> AppResult<Option<E>> {
        Self::update_one_by_condition(self, filter, patch).await
    }

    async fn remove(&self, key: &Value) -> AppResult<u64> {
        Self::remove(self, key).await
    }

    async fn count(&self) -> AppResult<u64> {
        Self::count(self).await
    }
}

/// Reject any field that does not name a column on the table.
fn check_columns(descriptor: &EntityDescriptor, fields: &FieldMap) -> AppResult<()> {
    for (name, _) in fields.iter() {
        if descriptor.column(name).is_none() {
            return Err(AppError::validation(format!(
                "Unknown column '{name}' for table '{}'",
                descriptor.table
            )));
        }
    }
    Ok(())
}

/// Normalize a write payload against the descriptor.
///
/// Validates every field name and truncates date-time values bound for
/// calendar-date columns, so no time-of-day or timezone component ever
/// reaches storage through a date column. Runs on every create and
/// update path, uniformly.
fn transform_input(descriptor: &EntityDescriptor, data: &FieldMap) -> AppResult<FieldMap> {
    let mut out = FieldMap::new();
    for (name, value) in data.iter() {
        let column = descriptor.column(name).ok_or_else(|| {
            AppError::validation(format!(
                "Unknown column '{name}' for table '{}'",
                descriptor.table
            ))
        })?;
        let value = if column.ty.is_calendar_date() {
            value.clone().truncate_to_date()
        } else {
            value.clone()
        };
        out = out.set(name, value);
    }
    Ok(out)
}

/// Decode the key column returned by `INSERT ... RETURNING <pk>`.
fn decode_key(row: &PgRow, column: &ColumnDef) -> Result<Value, sqlx::Error> {
    Ok(match column.ty {
        ColumnType::Integer => Value::Int(i64::from(row.try_get::<i32, _>(0)?)),
        ColumnType::BigInt => Value::Int(row.try_get::<i64, _>(0)?),
        ColumnType::Decimal => Value::Float(row.try_get::<f64, _>(0)?),
        ColumnType::Char(_) | ColumnType::Varchar(_) | ColumnType::Enum(_) => {
            Value::Text(row.try_get::<String, _>(0)?)
        }
        ColumnType::Date => Value::Date(row.try_get(0)?),
        ColumnType::DateTime => Value::DateTime(row.try_get(0)?),
    })
}

fn bind_value<'q>(
    query: Query<'q, Postgres, PgArguments>,
    value: &'q Value,
) -> Query<'q, Postgres, PgArguments> {
    match value {
        Value::Int(v) => query.bind(*v),
        Value::Float(v) => query.bind(*v),
        Value::Text(v) => query.bind(v.as_str()),
        Value::Date(v) => query.bind(*v),
        Value::DateTime(v) => query.bind(*v),
        Value::Null => query.bind(Option::<String>::None),
    }
}

fn bind_value_as<'q, E>(
    query: QueryAs<'q, Postgres, E, PgArguments>,
    value: &'q Value,
) -> QueryAs<'q, Postgres, E, PgArguments> {
    match value {
        Value::Int(v) => query.bind(*v),
        Value::Float(v) => query.bind(*v),
        Value::Text(v) => query.bind(v.as_str()),
        Value::Date(v) => query.bind(*v),
        Value::DateTime(v) => query.bind(*v),
        Value::Null => query.bind(Option::<String>::None),
    }
}

fn where_conjunction(columns: &[&str], first_index: usize) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c} = ${}", first_index + i))
        .collect::<Vec<_>>()
        .join(" AND ")
}

fn set_clause(columns: &[&str]) -> String {
    columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{c} = ${}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

fn select_all_sql(table: &str) -> String {
    format!("SELECT * FROM {table} LIMIT $1 OFFSET $2")
}

fn select_by_key_sql(table: &str, key: &str) -> String {
    format!("SELECT * FROM {table} WHERE {key} = $1 LIMIT 1")
}

fn select_by_condition_sql(table: &str, columns: &[&str]) -> String {
    let n = columns.len();
    format!(
        "SELECT * FROM {table} WHERE {} LIMIT ${} OFFSET ${}",
        where_conjunction(columns, 1),
        n + 1,
        n + 2
    )
}

fn insert_sql(table: &str, columns: &[&str], key: &str) -> String {
    let placeholders = (1..=columns.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders}) RETURNING {key}",
        columns.join(", ")
    )
}

fn update_by_key_sql(table: &str, set_columns: &[&str], key: &str) -> String {
    format!(
        "UPDATE {table} SET {} WHERE {key} = ${}",
        set_clause(set_columns),
        set_columns.len() + 1
    )
}

/// Single-row conditional update. PostgreSQL has no `UPDATE ... LIMIT`,
/// so the row is pinned through its ctid.
fn update_one_by_condition_sql(table: &str, set_columns: &[&str], cond_columns: &[&str]) -> String {
    format!(
        "UPDATE {table} SET {} WHERE ctid = (SELECT ctid FROM {table} WHERE {} LIMIT 1)",
        set_clause(set_columns),
        where_conjunction(cond_columns, set_columns.len() + 1)
    )
}

fn delete_by_key_sql(table: &str, key: &str) -> String {
    format!("DELETE FROM {table} WHERE {key} = $1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use empdb_core::error::ErrorKind;

    static PERIODS: EntityDescriptor = EntityDescriptor::new(
        "periods",
        &[
            ColumnDef::new("emp_no", ColumnType::Integer),
            ColumnDef::new("started_on", ColumnType::Date),
            ColumnDef::new("logged_at", ColumnType::DateTime),
        ],
    );

    #[derive(serde::Serialize, sqlx::FromRow)]
    struct Period {
        emp_no: i32,
        started_on: chrono::NaiveDate,
        logged_at: chrono::DateTime<Utc>,
    }

    impl Entity for Period {
        fn descriptor() -> &'static EntityDescriptor {
            &PERIODS
        }
    }

    /// Lazy pool: opens no connection unless a statement is issued, so
    /// reject-before-statement paths can be exercised offline.
    fn detached_repo() -> GenericRepository<Period> {
        let pool = PgPool::connect_lazy("postgres://localhost:1/unreachable")
            .expect("lazy pool construction never connects");
        GenericRepository::new(pool)
    }

    #[tokio::test]
    async fn empty_condition_map_is_rejected_before_any_statement() {
        let repo = detached_repo();

        let err = repo
            .find_by_condition(&FieldMap::new(), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[tokio::test]
    async fn conditional_update_requires_condition_and_patch_fields() {
        let repo = detached_repo();

        let patch = FieldMap::new().set("emp_no", 1);
        let err = repo
            .update_one_by_condition(&FieldMap::new(), &patch)
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let filter = FieldMap::new().set("emp_no", 1);
        let err = repo
            .update_one_by_condition(&filter, &FieldMap::new())
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn select_sql_shapes() {
        assert_eq!(
            select_all_sql("employees"),
            "SELECT * FROM employees LIMIT $1 OFFSET $2"
        );
        assert_eq!(
            select_by_key_sql("departments", "dept_no"),
            "SELECT * FROM departments WHERE dept_no = $1 LIMIT 1"
        );
        assert_eq!(
            select_by_condition_sql("employees", &["gender", "last_name"]),
            "SELECT * FROM employees WHERE gender = $1 AND last_name = $2 LIMIT $3 OFFSET $4"
        );
    }

    #[test]
    fn insert_sql_returns_the_key() {
        assert_eq!(
            insert_sql("departments", &["dept_no", "dept_name"], "dept_no"),
            "INSERT INTO departments (dept_no, dept_name) VALUES ($1, $2) RETURNING dept_no"
        );
    }

    #[test]
    fn update_sql_places_the_key_after_the_set_list() {
        assert_eq!(
            update_by_key_sql("employees", &["first_name", "last_name"], "emp_no"),
            "UPDATE employees SET first_name = $1, last_name = $2 WHERE emp_no = $3"
        );
    }

    #[test]
    fn conditional_update_is_limited_to_one_row() {
        assert_eq!(
            update_one_by_condition_sql("salaries", &["salary"], &["emp_no", "from_date"]),
            "UPDATE salaries SET salary = $1 WHERE ctid = \
             (SELECT ctid FROM salaries WHERE emp_no = $2 AND from_date = $3 LIMIT 1)"
        );
    }

    #[test]
    fn delete_sql_shape() {
        assert_eq!(
            delete_by_key_sql("employees", "emp_no"),
            "DELETE FROM employees WHERE emp_no = $1"
        );
    }

    #[test]
    fn unknown_columns_are_rejected_before_any_statement() {
        let filter = FieldMap::new().set("salarry", 1000);
        let err = check_columns(&PERIODS, &filter).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);

        let err = transform_input(&PERIODS, &filter).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Validation);
    }

    #[test]
    fn transform_truncates_datetimes_only_for_date_columns() {
        let stamp = Utc.with_ymd_and_hms(1986, 6, 26, 13, 37, 0).unwrap();
        let data = FieldMap::new()
            .set("emp_no", 10001)
            .set("started_on", stamp)
            .set("logged_at", stamp);
        let out = transform_input(&PERIODS, &data).unwrap();

        let values: Vec<_> = out.values().cloned().collect();
        assert_eq!(values[0], Value::Int(10001));
        assert_eq!(values[1], Value::Date(stamp.date_naive()));
        assert_eq!(values[2], Value::DateTime(stamp));
    }
}
