//! Static entity descriptors.
//!
//! Every persisted table is described once, at compile time, by an
//! [`EntityDescriptor`]: the table name, the ordered column set, and
//! which column (if any) is the primary key. Repositories consume the
//! descriptor instead of reflecting over live table objects.

use crate::error::AppError;
use crate::result::AppResult;

/// Semantic column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// 32-bit integer.
    Integer,
    /// 64-bit integer (including generated identity columns).
    BigInt,
    /// Arbitrary-precision numeric.
    Decimal,
    /// Fixed-length string of the given width.
    Char(u32),
    /// Variable-length string capped at the given width.
    Varchar(u32),
    /// String restricted to a fixed set of values.
    Enum(&'static [&'static str]),
    /// Calendar date with no time-of-day component.
    Date,
    /// Point in time with timezone.
    DateTime,
}

impl ColumnType {
    /// Whether this type stores a calendar date with no time-of-day.
    pub fn is_calendar_date(&self) -> bool {
        matches!(self, Self::Date)
    }
}

/// One column of a persisted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    /// Column name as it appears in SQL.
    pub name: &'static str,
    /// Semantic type.
    pub ty: ColumnType,
    /// Whether this column is the designated primary key.
    pub primary: bool,
    /// Whether this column must never be serialized outward.
    pub sensitive: bool,
}

impl ColumnDef {
    /// Define a plain column.
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Self {
            name,
            ty,
            primary: false,
            sensitive: false,
        }
    }

    /// Mark this column as the primary key.
    pub const fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    /// Mark this column as sensitive (stripped from outbound rows).
    pub const fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// Static description of one persisted table.
///
/// Constructed once per entity type and shared read-only by every
/// repository instance bound to that entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityDescriptor {
    /// Table name.
    pub table: &'static str,
    /// Ordered column set.
    pub columns: &'static [ColumnDef],
}

impl EntityDescriptor {
    /// Define a descriptor.
    pub const fn new(table: &'static str, columns: &'static [ColumnDef]) -> Self {
        Self { table, columns }
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&'static ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Resolve the primary-key column.
    ///
    /// Scans for the column flagged primary; if none is flagged, falls
    /// back to a column literally named `id`; otherwise returns `None`.
    /// Callers depend on receiving `None` (not an error) when no primary
    /// key exists, and on the `id` fallback taking priority over absence.
    pub fn primary_key(&self) -> Option<&'static ColumnDef> {
        self.columns
            .iter()
            .find(|c| c.primary)
            .or_else(|| self.columns.iter().find(|c| c.name == "id"))
    }

    /// Validate the descriptor invariants: column names are unique and
    /// at most one column is flagged primary. Run once at startup for
    /// every registered entity.
    pub fn validate(&self) -> AppResult<()> {
        for (i, col) in self.columns.iter().enumerate() {
            if self.columns[..i].iter().any(|c| c.name == col.name) {
                return Err(AppError::configuration(format!(
                    "Table '{}' declares column '{}' more than once",
                    self.table, col.name
                )));
            }
        }
        let primaries = self.columns.iter().filter(|c| c.primary).count();
        if primaries > 1 {
            return Err(AppError::configuration(format!(
                "Table '{}' declares {primaries} primary-key columns",
                self.table
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const FLAGGED: EntityDescriptor = EntityDescriptor::new(
        "flagged",
        &[
            ColumnDef::new("id", ColumnType::BigInt),
            ColumnDef::new("code", ColumnType::Char(4)).primary(),
        ],
    );

    const ID_FALLBACK: EntityDescriptor = EntityDescriptor::new(
        "fallback",
        &[
            ColumnDef::new("name", ColumnType::Varchar(20)),
            ColumnDef::new("id", ColumnType::BigInt),
        ],
    );

    const KEYLESS: EntityDescriptor = EntityDescriptor::new(
        "keyless",
        &[
            ColumnDef::new("left", ColumnType::Integer),
            ColumnDef::new("right", ColumnType::Integer),
        ],
    );

    #[test]
    fn flagged_primary_wins_over_id_column() {
        assert_eq!(FLAGGED.primary_key().map(|c| c.name), Some("code"));
    }

    #[test]
    fn id_named_column_is_the_fallback() {
        assert_eq!(ID_FALLBACK.primary_key().map(|c| c.name), Some("id"));
    }

    #[test]
    fn missing_primary_key_resolves_to_none() {
        assert!(KEYLESS.primary_key().is_none());
    }

    #[test]
    fn validate_accepts_well_formed_descriptors() {
        assert!(FLAGGED.validate().is_ok());
        assert!(KEYLESS.validate().is_ok());
    }

    #[test]
    fn validate_rejects_duplicate_column_names() {
        const DUP: EntityDescriptor = EntityDescriptor::new(
            "dup",
            &[
                ColumnDef::new("a", ColumnType::Integer),
                ColumnDef::new("a", ColumnType::Integer),
            ],
        );
        let err = DUP.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn validate_rejects_multiple_primary_flags() {
        const TWO_PK: EntityDescriptor = EntityDescriptor::new(
            "two_pk",
            &[
                ColumnDef::new("a", ColumnType::Integer).primary(),
                ColumnDef::new("b", ColumnType::Integer).primary(),
            ],
        );
        let err = TWO_PK.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::Configuration);
    }

    #[test]
    fn column_lookup_by_name() {
        assert!(FLAGGED.column("code").is_some());
        assert!(FLAGGED.column("missing").is_none());
    }
}
