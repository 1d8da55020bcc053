//! # Query Execution Gate
//!
//! Serializes all database access behind one shared connection.
//!
//! The HTTP server runs one task per inbound connection, but the process
//! holds exactly one SQLite handle. Every `query`/`execute` call acquires the
//! gate's mutex, touches the connection, and releases the lock before the
//! caller observes the result — on every exit path, including errors.
//! Operations therefore execute in lock-acquisition order; no two callers'
//! statements ever interleave on the connection. No query-level timeout is
//! enforced: a stalled statement stalls every concurrent caller.
//!
//! Values are always bound as parameters, never interpolated into the SQL
//! text.

use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use rusqlite::Connection;

use super::errors::{DbError, DbResult};
use super::value::{Row, SqlValue};

/// Parameterized SQL execution seam
///
/// The assembler and the bulk-insert coordinator depend on this trait rather
/// than on [`QueryGate`] directly, so tests can substitute a fault-injecting
/// executor.
pub trait SqlExecutor: Send + Sync {
    /// Run a SELECT and collect the full result set
    fn query(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>>;

    /// Run a statement and return the affected-row count
    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize>;
}

/// Lock-guarded owner of the process's single database connection
pub struct QueryGate {
    conn: Mutex<Option<Connection>>,
    operations: AtomicU64,
}

impl QueryGate {
    /// Open (or create) the database file at `path`
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self::with_connection(conn))
    }

    /// Open an in-memory database (fixtures and tests)
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::with_connection(conn))
    }

    /// Build a gate with no live connection; every call fails with
    /// [`DbError::NotConnected`] until one is attached
    pub fn disconnected() -> Self {
        Self {
            conn: Mutex::new(None),
            operations: AtomicU64::new(0),
        }
    }

    fn with_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(Some(conn)),
            operations: AtomicU64::new(0),
        }
    }

    /// Whether a live connection is currently held
    pub fn is_connected(&self) -> bool {
        self.conn.lock().map(|g| g.is_some()).unwrap_or(false)
    }

    /// Total `query`/`execute` calls that reached the connection
    pub fn operation_count(&self) -> u64 {
        self.operations.load(Ordering::Relaxed)
    }

    /// Drop the connection at shutdown; later calls fail with `NotConnected`
    pub fn close(&self) {
        if let Ok(mut guard) = self.conn.lock() {
            if guard.take().is_some() {
                tracing::info!("database connection closed");
            }
        }
    }
}

impl SqlExecutor for QueryGate {
    fn query(&self, sql: &str, params: &[SqlValue]) -> DbResult<Vec<Row>> {
        let guard = self.conn.lock().map_err(|_| DbError::NotConnected)?;
        let conn = guard.as_ref().ok_or(DbError::NotConnected)?;
        self.operations.fetch_add(1, Ordering::Relaxed);

        let mut stmt = conn.prepare(sql)?;
        let column_count = stmt.column_count();
        let mut raw = stmt.query(rusqlite::params_from_iter(params.iter()))?;

        let mut rows = Vec::new();
        while let Some(row) = raw.next()? {
            let mut values = Vec::with_capacity(column_count);
            for idx in 0..column_count {
                values.push(SqlValue::from_value_ref(row.get_ref(idx)?));
            }
            rows.push(Row::new(values));
        }
        Ok(rows)
    }

    fn execute(&self, sql: &str, params: &[SqlValue]) -> DbResult<usize> {
        let guard = self.conn.lock().map_err(|_| DbError::NotConnected)?;
        let conn = guard.as_ref().ok_or(DbError::NotConnected)?;
        self.operations.fetch_add(1, Ordering::Relaxed);

        let affected = conn.execute(sql, rusqlite::params_from_iter(params.iter()))?;
        Ok(affected)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn seeded_gate() -> QueryGate {
        let gate = QueryGate::open_in_memory().unwrap();
        gate.execute("CREATE TABLE samples (id INTEGER PRIMARY KEY, label TEXT)", &[])
            .unwrap();
        gate
    }

    #[test]
    fn test_disconnected_gate_fails_without_io() {
        let gate = QueryGate::disconnected();
        assert_eq!(gate.query("SELECT 1", &[]), Err(DbError::NotConnected));
        assert_eq!(gate.execute("SELECT 1", &[]), Err(DbError::NotConnected));
        assert_eq!(gate.operation_count(), 0);
    }

    #[test]
    fn test_query_returns_rows_in_order() {
        let gate = seeded_gate();
        gate.execute(
            "INSERT INTO samples (id, label) VALUES (?1, ?2)",
            &[SqlValue::Integer(2), SqlValue::from("b")],
        )
        .unwrap();
        gate.execute(
            "INSERT INTO samples (id, label) VALUES (?1, ?2)",
            &[SqlValue::Integer(1), SqlValue::from("a")],
        )
        .unwrap();

        let rows = gate
            .query("SELECT id, label FROM samples ORDER BY id", &[])
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].integer(0), 1);
        assert_eq!(rows[0].text(1), "a");
        assert_eq!(rows[1].integer(0), 2);
    }

    #[test]
    fn test_execute_reports_affected_count() {
        let gate = seeded_gate();
        for id in 1..=3 {
            gate.execute(
                "INSERT INTO samples (id, label) VALUES (?1, 'x')",
                &[SqlValue::Integer(id)],
            )
            .unwrap();
        }
        let affected = gate.execute("UPDATE samples SET label = 'y'", &[]).unwrap();
        assert_eq!(affected, 3);
    }

    #[test]
    fn test_bad_sql_releases_lock() {
        let gate = seeded_gate();
        assert!(matches!(
            gate.query("SELECT FROM nowhere", &[]),
            Err(DbError::Query(_))
        ));
        // The lock must have been released on the error path.
        let rows = gate.query("SELECT COUNT(*) FROM samples", &[]).unwrap();
        assert_eq!(rows[0].integer(0), 0);
    }

    #[test]
    fn test_operation_counter_tracks_calls() {
        let gate = seeded_gate();
        let before = gate.operation_count();
        gate.query("SELECT 1", &[]).unwrap();
        gate.execute("INSERT INTO samples (id) VALUES (9)", &[]).unwrap();
        assert_eq!(gate.operation_count(), before + 2);
    }

    #[test]
    fn test_close_disconnects() {
        let gate = seeded_gate();
        gate.close();
        assert!(!gate.is_connected());
        assert_eq!(gate.query("SELECT 1", &[]), Err(DbError::NotConnected));
    }

    #[test]
    fn test_concurrent_callers_serialize_on_one_connection() {
        let gate = Arc::new(seeded_gate());
        let workers = 8;
        let per_worker = 25;

        let handles: Vec<_> = (0..workers)
            .map(|w| {
                let gate = Arc::clone(&gate);
                thread::spawn(move || {
                    for i in 0..per_worker {
                        gate.execute(
                            "INSERT INTO samples (id, label) VALUES (?1, ?2)",
                            &[
                                SqlValue::Integer((w * per_worker + i) as i64),
                                SqlValue::from("concurrent"),
                            ],
                        )
                        .unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let rows = gate.query("SELECT COUNT(*) FROM samples", &[]).unwrap();
        assert_eq!(rows[0].integer(0), (workers * per_worker) as i64);
        // Every call went through the gate exactly once: the seed CREATE,
        // then one execute per insert, then the count query.
        assert_eq!(
            gate.operation_count(),
            1 + (workers * per_worker) as u64 + 1
        );
    }
}
