//! # Bulk Insert Coordinator
//!
//! Validates a benchmark batch and inserts it row by row through the query
//! execution gate. The batch envelope (numeric `meal_id` plus an `items`
//! array) is checked before any database access; after that, each item is
//! validated and inserted independently. A malformed item or a failed insert
//! skips that row and the loop continues — the batch is never transactional,
//! so a partially inserted batch is expected behavior.

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::db::{SqlExecutor, SqlValue};

const INSERT_ITEM: &str = "INSERT INTO diet_meal_items \
     (meal_id, food_item_id, portion_grams_min, portion_grams_max, sort_order) \
     VALUES (?1, ?2, ?3, ?4, ?5)";

/// Batch rejection before any row is attempted
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BulkInsertError {
    /// Body is not `{meal_id: number, items: [...]}`
    #[error("invalid request format")]
    InvalidFormat,
}

/// Per-batch result counts
///
/// `inserted` is the contract value; zero is a valid outcome, meaning no row
/// in the batch both validated and inserted. `skipped` and `failed` feed the
/// benchmark logs.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct BulkInsertOutcome {
    pub inserted: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Read a field as a number, truncating reals toward zero
///
/// Any JSON number qualifies; a `meal_id` of `20.9` means meal 20, matching
/// how the API has always read numeric fields.
fn number_field(value: &Value, key: &str) -> Option<i64> {
    value.get(key).and_then(Value::as_f64).map(|n| n as i64)
}

/// Drives per-row benchmark inserts through the gate
pub struct BulkInsertCoordinator {
    executor: Arc<dyn SqlExecutor>,
}

impl BulkInsertCoordinator {
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        Self { executor }
    }

    /// Validate the batch envelope and insert each well-formed item
    pub fn insert_batch(&self, body: &Value) -> Result<BulkInsertOutcome, BulkInsertError> {
        let meal_id = number_field(body, "meal_id").ok_or(BulkInsertError::InvalidFormat)?;
        let items = body
            .get("items")
            .and_then(Value::as_array)
            .ok_or(BulkInsertError::InvalidFormat)?;

        let mut outcome = BulkInsertOutcome {
            inserted: 0,
            skipped: 0,
            failed: 0,
        };

        for (position, item) in items.iter().enumerate() {
            // Shape check per item; a bad row is skipped, not fatal.
            let (food_item_id, portion_min, portion_max) = match (
                number_field(item, "food_item_id"),
                number_field(item, "portion_grams_min"),
                number_field(item, "portion_grams_max"),
            ) {
                (Some(food), Some(min), Some(max)) => (food, min, max),
                _ => {
                    outcome.skipped += 1;
                    continue;
                }
            };

            let sort_order = number_field(item, "sort_order").unwrap_or(position as i64);

            match self.executor.execute(
                INSERT_ITEM,
                &[
                    SqlValue::Integer(meal_id),
                    SqlValue::Integer(food_item_id),
                    SqlValue::Integer(portion_min),
                    SqlValue::Integer(portion_max),
                    SqlValue::Integer(sort_order),
                ],
            ) {
                Ok(_) => outcome.inserted += 1,
                Err(err) => {
                    tracing::warn!(position, %err, "bulk insert row failed, continuing");
                    outcome.failed += 1;
                }
            }
        }

        Ok(outcome)
    }
}
