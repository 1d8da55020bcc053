//! # Database Access Module
//!
//! Serialized access to the single shared SQLite connection.
//!
//! All database traffic in the process flows through [`QueryGate`], which
//! guards one `rusqlite::Connection` with a mutex. Callers submit SQL with
//! bound parameters through the [`SqlExecutor`] trait and get back generic
//! [`Row`] values; typed records are built on top in the `records` module.

pub mod errors;
pub mod gate;
pub mod schema;
pub mod value;

pub use errors::{DbError, DbResult};
pub use gate::{QueryGate, SqlExecutor};
pub use value::{Row, SqlValue};
