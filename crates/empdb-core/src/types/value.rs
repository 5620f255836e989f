//! Dynamic column values for condition maps and write payloads.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A dynamically typed column value.
///
/// Carries the native value types the schema uses (numbers, strings,
/// dates) so that condition filters and insert/update payloads can be
/// expressed uniformly across entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// An integer value.
    Int(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value.
    Text(String),
    /// A calendar date (no time-of-day).
    Date(NaiveDate),
    /// A point in time.
    DateTime(DateTime<Utc>),
    /// Null / no value.
    Null,
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Self::DateTime(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl Value {
    /// Truncate a date-time to its calendar date. Other variants pass
    /// through unchanged.
    pub fn truncate_to_date(self) -> Self {
        match self {
            Self::DateTime(dt) => Self::Date(dt.date_naive()),
            other => other,
        }
    }
}

/// An ordered mapping of column name to value.
///
/// Used both as a conjunction-of-equalities filter and as the payload of
/// insert/update operations. Insertion order is preserved so generated
/// SQL is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldMap {
    fields: Vec<(String, Value)>,
}

impl FieldMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing any existing entry with the same name.
    pub fn set(mut self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        let column = column.into();
        self.fields.retain(|(name, _)| *name != column);
        self.fields.push((column, value.into()));
        self
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the map holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(column, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Column names in insertion order.
    pub fn columns(&self) -> Vec<&str> {
        self.fields.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn truncate_discards_time_of_day() {
        let dt = Utc.with_ymd_and_hms(1953, 9, 2, 23, 45, 1).unwrap();
        let truncated = Value::DateTime(dt).truncate_to_date();
        assert_eq!(
            truncated,
            Value::Date(NaiveDate::from_ymd_opt(1953, 9, 2).unwrap())
        );
    }

    #[test]
    fn truncate_leaves_other_variants_alone() {
        assert_eq!(Value::Int(7).truncate_to_date(), Value::Int(7));
        let date = NaiveDate::from_ymd_opt(1986, 6, 26).unwrap();
        assert_eq!(Value::Date(date).truncate_to_date(), Value::Date(date));
    }

    #[test]
    fn set_replaces_duplicates_and_keeps_order() {
        let map = FieldMap::new()
            .set("first_name", "Georgi")
            .set("last_name", "Facello")
            .set("first_name", "Bezalel");
        assert_eq!(map.len(), 2);
        assert_eq!(map.columns(), vec!["last_name", "first_name"]);
    }

    #[test]
    fn option_none_maps_to_null() {
        let value: Value = Option::<i64>::None.into();
        assert_eq!(value, Value::Null);
    }
}
