//! # Typed Records
//!
//! One record type per entity kind, each built from a generic [`Row`] by a
//! pure mapper. Column order in `from_row` matches the SELECT column lists in
//! the route and assembler modules. The null policy is the row's: NULL text
//! reads as `""`, NULL numerics as `0`.
//!
//! The records double as response bodies; field names here are the wire
//! names.

use serde::Serialize;

use crate::db::Row;

/// A diet template header row (`diet_templates`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TemplateRecord {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub description: String,
    pub segment: String,
    #[serde(rename = "type")]
    pub template_type: String,
    pub duration_days: i64,
    pub calories_target: i64,
}

impl TemplateRecord {
    /// Columns: id, code, name, description, segment, type, duration_days,
    /// calories_target
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.integer(0),
            code: row.text(1),
            name: row.text(2),
            description: row.text(3),
            segment: row.text(4),
            template_type: row.text(5),
            duration_days: row.integer(6),
            calories_target: row.integer(7),
        }
    }
}

/// A day row (`diet_days`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DayRecord {
    pub id: i64,
    pub day_number: i64,
    pub day_name: String,
}

impl DayRecord {
    /// Columns: id, day_number, day_name
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.integer(0),
            day_number: row.integer(1),
            day_name: row.text(2),
        }
    }
}

/// A meal row (`diet_meals`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealRecord {
    pub id: i64,
    pub meal_type: String,
    pub meal_order: i64,
    pub time_suggestion: String,
}

impl MealRecord {
    /// Columns: id, meal_type, meal_order, time_suggestion
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.integer(0),
            meal_type: row.text(1),
            meal_order: row.integer(2),
            time_suggestion: row.text(3),
        }
    }
}

/// A meal item row joined to its food (`diet_meal_items` x `food_items`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MealItemRecord {
    pub id: i64,
    pub food_item_id: i64,
    pub food_name: String,
    pub portion_grams_min: i64,
    pub portion_grams_max: i64,
}

impl MealItemRecord {
    /// Columns: id, food_item_id, food name, portion_grams_min,
    /// portion_grams_max
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.integer(0),
            food_item_id: row.integer(1),
            food_name: row.text(2),
            portion_grams_min: row.integer(3),
            portion_grams_max: row.integer(4),
        }
    }
}

/// A food item row (`food_items`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FoodRecord {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl FoodRecord {
    /// Columns: id, name, category_id, calories_per_100g, protein_per_100g,
    /// carbs_per_100g, fat_per_100g
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.integer(0),
            name: row.text(1),
            category_id: row.integer(2),
            calories: row.real(3),
            protein: row.real(4),
            carbs: row.real(5),
            fat: row.real(6),
        }
    }
}

/// A food category row (`food_categories`)
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryRecord {
    pub id: i64,
    pub name: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i64,
}

impl CategoryRecord {
    /// Columns: id, name, icon, color, sort_order
    pub fn from_row(row: &Row) -> Self {
        Self {
            id: row.integer(0),
            name: row.text(1),
            icon: row.text(2),
            color: row.text(3),
            sort_order: row.integer(4),
        }
    }
}
