//! # Hierarchical Assembler
//!
//! Orchestrates the four dependent fetches that rebuild a template document.
//!
//! Failure handling is two-tiered. The template and day fetches decide
//! whether the resource exists at all, so a store failure there fails the
//! whole operation. The per-day meal fetch and per-meal item fetch only
//! affect completeness of an existing resource: a failure at those levels is
//! swallowed, the affected node gets an empty child list, and assembly moves
//! on to the next sibling.
//!
//! Fan-out at the day and meal levels is capped; children beyond the cap are
//! silently dropped, never reported as an error. Item fan-out is unbounded.
//!
//! Ordering (`day_number`, `meal_order`, `sort_order`) comes from the SQL;
//! the assembler preserves result order and never re-sorts.

use std::sync::Arc;

use thiserror::Error;

use crate::db::{DbError, SqlExecutor, SqlValue};
use crate::records::{DayRecord, MealItemRecord, MealRecord, TemplateRecord};

use super::tree::{DayNode, MealNode, TemplateTree};

/// Days processed per template; rows beyond this are silently dropped
pub const MAX_DAYS_PER_TEMPLATE: usize = 100;

/// Meals processed per day; rows beyond this are silently dropped
pub const MAX_MEALS_PER_DAY: usize = 50;

const SELECT_TEMPLATE: &str = "SELECT id, code, name, description, segment, type, \
     duration_days, calories_target FROM diet_templates WHERE id = ?1";

const SELECT_DAYS: &str = "SELECT id, day_number, day_name FROM diet_days \
     WHERE template_id = ?1 ORDER BY day_number";

const SELECT_MEALS: &str = "SELECT id, meal_type, meal_order, time_suggestion \
     FROM diet_meals WHERE day_id = ?1 ORDER BY meal_order";

const SELECT_ITEMS: &str = "SELECT mi.id, mi.food_item_id, f.name, \
     mi.portion_grams_min, mi.portion_grams_max \
     FROM diet_meal_items mi \
     JOIN food_items f ON mi.food_item_id = f.id \
     WHERE mi.meal_id = ?1 ORDER BY mi.sort_order";

/// Failures of the whole aggregation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssembleError {
    /// No template row with the requested id
    #[error("template not found")]
    NotFound,

    /// The store failed at a fetch that defines resource existence
    #[error(transparent)]
    Database(#[from] DbError),
}

/// Builds nested template documents through the query execution gate
pub struct TemplateAssembler {
    executor: Arc<dyn SqlExecutor>,
}

impl TemplateAssembler {
    pub fn new(executor: Arc<dyn SqlExecutor>) -> Self {
        Self { executor }
    }

    /// Fetch the full nested document for one template
    ///
    /// The multi-step read is best-effort, not a snapshot: rows committed
    /// between steps may or may not appear.
    pub fn template_full(&self, id: i64) -> Result<TemplateTree, AssembleError> {
        let rows = self
            .executor
            .query(SELECT_TEMPLATE, &[SqlValue::Integer(id)])?;
        let template = match rows.first() {
            Some(row) => TemplateRecord::from_row(row),
            None => return Err(AssembleError::NotFound),
        };

        // A failure here would leave a misleading half-built document, so it
        // is fatal, unlike the inner fetches below.
        let day_rows = self.executor.query(SELECT_DAYS, &[SqlValue::Integer(id)])?;

        let days = day_rows
            .iter()
            .take(MAX_DAYS_PER_TEMPLATE)
            .map(|row| {
                let day = DayRecord::from_row(row);
                let meals = self.meals_for_day(day.id);
                DayNode { day, meals }
            })
            .collect();

        Ok(TemplateTree { template, days })
    }

    /// Meals for one day; a store failure degrades to an empty list
    fn meals_for_day(&self, day_id: i64) -> Vec<MealNode> {
        let rows = match self.executor.query(SELECT_MEALS, &[SqlValue::Integer(day_id)]) {
            Ok(rows) => rows,
            Err(err) => {
                tracing::warn!(day_id, %err, "meal fetch failed, emitting day without meals");
                return Vec::new();
            }
        };

        rows.iter()
            .take(MAX_MEALS_PER_DAY)
            .map(|row| {
                let meal = MealRecord::from_row(row);
                let items = self.items_for_meal(meal.id);
                MealNode { meal, items }
            })
            .collect()
    }

    /// Items for one meal; a store failure degrades to an empty list
    fn items_for_meal(&self, meal_id: i64) -> Vec<MealItemRecord> {
        match self.executor.query(SELECT_ITEMS, &[SqlValue::Integer(meal_id)]) {
            Ok(rows) => rows.iter().map(MealItemRecord::from_row).collect(),
            Err(err) => {
                tracing::warn!(meal_id, %err, "item fetch failed, emitting meal without items");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::schema::apply_schema;
    use crate::db::QueryGate;

    fn fixture_gate() -> Arc<QueryGate> {
        let gate = Arc::new(QueryGate::open_in_memory().unwrap());
        apply_schema(gate.as_ref()).unwrap();
        gate
    }

    fn insert_template(gate: &QueryGate, id: i64, name: &str) {
        gate.execute(
            "INSERT INTO diet_templates (id, code, name, duration_days, calories_target) \
             VALUES (?1, 'T', ?2, 7, 2000)",
            &[SqlValue::Integer(id), SqlValue::from(name)],
        )
        .unwrap();
    }

    fn insert_day(gate: &QueryGate, id: i64, template_id: i64, number: i64) {
        gate.execute(
            "INSERT INTO diet_days (id, template_id, day_number, day_name) \
             VALUES (?1, ?2, ?3, 'Day')",
            &[
                SqlValue::Integer(id),
                SqlValue::Integer(template_id),
                SqlValue::Integer(number),
            ],
        )
        .unwrap();
    }

    #[test]
    fn test_missing_template_is_not_found() {
        let gate = fixture_gate();
        let assembler = TemplateAssembler::new(gate);
        assert_eq!(assembler.template_full(999), Err(AssembleError::NotFound));
    }

    #[test]
    fn test_template_with_no_days_succeeds_empty() {
        let gate = fixture_gate();
        insert_template(&gate, 1, "Empty plan");
        let assembler = TemplateAssembler::new(gate);

        let tree = assembler.template_full(1).unwrap();
        assert_eq!(tree.template.name, "Empty plan");
        assert!(tree.days.is_empty());
    }

    #[test]
    fn test_days_come_back_ordered_by_day_number() {
        let gate = fixture_gate();
        insert_template(&gate, 1, "Plan");
        // Inserted out of order on purpose.
        insert_day(&gate, 10, 1, 3);
        insert_day(&gate, 11, 1, 1);
        insert_day(&gate, 12, 1, 2);
        let assembler = TemplateAssembler::new(gate);

        let tree = assembler.template_full(1).unwrap();
        let numbers: Vec<i64> = tree.days.iter().map(|d| d.day.day_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn test_day_fanout_truncates_at_bound() {
        let gate = fixture_gate();
        insert_template(&gate, 1, "Plan");
        for n in 1..=(MAX_DAYS_PER_TEMPLATE as i64 + 5) {
            insert_day(&gate, n, 1, n);
        }
        let assembler = TemplateAssembler::new(gate);

        let tree = assembler.template_full(1).unwrap();
        assert_eq!(tree.days.len(), MAX_DAYS_PER_TEMPLATE);
        assert_eq!(tree.days.last().unwrap().day.day_number, 100);
    }

    #[test]
    fn test_disconnected_store_is_fatal() {
        let gate = Arc::new(QueryGate::disconnected());
        let assembler = TemplateAssembler::new(gate);
        assert_eq!(
            assembler.template_full(1),
            Err(AssembleError::Database(DbError::NotConnected))
        );
    }
}
