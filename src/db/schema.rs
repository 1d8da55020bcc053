//! # Relational Schema Bootstrap
//!
//! DDL for the diet tables, applied at startup and from test fixtures. The
//! statements are idempotent so re-running them against an existing database
//! is safe.

use super::errors::DbResult;
use super::gate::SqlExecutor;

/// Create-table statements, in dependency order
const SCHEMA: &[&str] = &[
    "CREATE TABLE IF NOT EXISTS food_categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        icon TEXT,
        color TEXT,
        sort_order INTEGER
    )",
    "CREATE TABLE IF NOT EXISTS food_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        category_id INTEGER REFERENCES food_categories(id),
        calories_per_100g REAL,
        protein_per_100g REAL,
        carbs_per_100g REAL,
        fat_per_100g REAL
    )",
    "CREATE TABLE IF NOT EXISTS diet_templates (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        code TEXT,
        name TEXT,
        description TEXT,
        segment TEXT,
        type TEXT,
        duration_days INTEGER,
        calories_target INTEGER
    )",
    "CREATE TABLE IF NOT EXISTS diet_days (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        template_id INTEGER NOT NULL REFERENCES diet_templates(id),
        day_number INTEGER,
        day_name TEXT
    )",
    "CREATE TABLE IF NOT EXISTS diet_meals (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        day_id INTEGER NOT NULL REFERENCES diet_days(id),
        meal_type TEXT,
        meal_order INTEGER,
        time_suggestion TEXT
    )",
    "CREATE TABLE IF NOT EXISTS diet_meal_items (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        meal_id INTEGER NOT NULL REFERENCES diet_meals(id),
        food_item_id INTEGER NOT NULL REFERENCES food_items(id),
        portion_grams_min INTEGER,
        portion_grams_max INTEGER,
        sort_order INTEGER
    )",
    "CREATE INDEX IF NOT EXISTS idx_diet_days_template ON diet_days(template_id)",
    "CREATE INDEX IF NOT EXISTS idx_diet_meals_day ON diet_meals(day_id)",
    "CREATE INDEX IF NOT EXISTS idx_diet_meal_items_meal ON diet_meal_items(meal_id)",
];

/// Apply the diet schema through the gate
pub fn apply_schema(executor: &dyn SqlExecutor) -> DbResult<()> {
    for ddl in SCHEMA {
        executor.execute(ddl, &[])?;
    }
    Ok(())
}
