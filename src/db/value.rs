//! # SQL Values and Rows
//!
//! Generic row representation returned by the query execution gate, with the
//! fixed null-handling policy applied by the typed row mappers: NULL text
//! columns read as `""`, NULL numeric columns read as `0` / `0.0`. The policy
//! is uniform across every entity and must stay that way for output
//! compatibility with existing API consumers.

use rusqlite::types::{ToSqlOutput, Value, ValueRef};
use rusqlite::ToSql;

/// A single scalar cell in a result row
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
}

impl SqlValue {
    /// Build a value from a raw SQLite cell reference
    pub fn from_value_ref(value: ValueRef<'_>) -> Self {
        match value {
            ValueRef::Null => SqlValue::Null,
            ValueRef::Integer(i) => SqlValue::Integer(i),
            ValueRef::Real(f) => SqlValue::Real(f),
            ValueRef::Text(t) => SqlValue::Text(String::from_utf8_lossy(t).into_owned()),
            // The diet schema carries no blob columns; treat one as absent.
            ValueRef::Blob(_) => SqlValue::Null,
        }
    }
}

impl ToSql for SqlValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            SqlValue::Null => ToSqlOutput::Owned(Value::Null),
            SqlValue::Integer(i) => ToSqlOutput::Owned(Value::Integer(*i)),
            SqlValue::Real(f) => ToSqlOutput::Owned(Value::Real(*f)),
            SqlValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
        })
    }
}

impl From<i64> for SqlValue {
    fn from(v: i64) -> Self {
        SqlValue::Integer(v)
    }
}

impl From<&str> for SqlValue {
    fn from(v: &str) -> Self {
        SqlValue::Text(v.to_string())
    }
}

/// One row of a result set, in column order
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    values: Vec<SqlValue>,
}

impl Row {
    pub fn new(values: Vec<SqlValue>) -> Self {
        Self { values }
    }

    /// Number of columns in the row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read a text column; NULL (or a missing column) reads as `""`
    pub fn text(&self, idx: usize) -> String {
        match self.values.get(idx) {
            Some(SqlValue::Text(s)) => s.clone(),
            Some(SqlValue::Integer(i)) => i.to_string(),
            Some(SqlValue::Real(f)) => f.to_string(),
            Some(SqlValue::Null) | None => String::new(),
        }
    }

    /// Read an integer column; NULL (or a missing column) reads as `0`
    pub fn integer(&self, idx: usize) -> i64 {
        match self.values.get(idx) {
            Some(SqlValue::Integer(i)) => *i,
            Some(SqlValue::Real(f)) => *f as i64,
            Some(SqlValue::Text(s)) => s.parse().unwrap_or(0),
            Some(SqlValue::Null) | None => 0,
        }
    }

    /// Read a real column; NULL (or a missing column) reads as `0.0`
    pub fn real(&self, idx: usize) -> f64 {
        match self.values.get(idx) {
            Some(SqlValue::Real(f)) => *f,
            Some(SqlValue::Integer(i)) => *i as f64,
            Some(SqlValue::Text(s)) => s.parse().unwrap_or(0.0),
            Some(SqlValue::Null) | None => 0.0,
        }
    }
}
