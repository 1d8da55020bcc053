//! # Database Errors
//!
//! Error taxonomy for the query execution gate.

use thiserror::Error;

/// Result type for gate operations
pub type DbResult<T> = Result<T, DbError>;

/// Errors surfaced by the query execution gate
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DbError {
    /// No live connection is held by the gate
    #[error("database not connected")]
    NotConnected,

    /// The store rejected or failed the statement
    #[error("query failed: {0}")]
    Query(String),
}

impl From<rusqlite::Error> for DbError {
    fn from(err: rusqlite::Error) -> Self {
        DbError::Query(err.to_string())
    }
}
