//! # Food Item Routes
//!
//! Flat list/get endpoints over `food_items`. The list endpoint supports
//! filtering by category, substring search on name, and a bounded limit.
//!
//! The search term and both filters are bound as parameters; caller-supplied
//! text never reaches the SQL string. Query parameters parse leniently:
//! a non-numeric `category_id` filters on category 0 and a non-numeric or
//! out-of-range `limit` falls back to the default, so a malformed filter
//! still gets a well-formed 200 rather than an extractor rejection.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::{SqlExecutor, SqlValue};
use crate::records::FoodRecord;

use super::errors::{ApiError, ApiResult};
use super::lenient_id;
use super::server::AppState;

const FOOD_COLUMNS: &str = "id, name, category_id, calories_per_100g, \
     protein_per_100g, carbs_per_100g, fat_per_100g";

/// Fallback and upper bound for the list limit
const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

#[derive(Debug, Serialize)]
pub struct FoodListResponse {
    pub success: bool,
    pub foods: Vec<FoodRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FoodResponse {
    pub success: bool,
    pub food: FoodRecord,
}

/// Create food routes
pub fn food_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/foods", get(list_foods_handler))
        .route("/foods/:id", get(get_food_handler))
}

/// List foods with optional category/search filters
async fn list_foods_handler(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> ApiResult<Json<FoodListResponse>> {
    let mut sql = format!("SELECT {FOOD_COLUMNS} FROM food_items");
    let mut params: Vec<SqlValue> = Vec::new();
    let mut clauses: Vec<&str> = Vec::new();

    if let Some(raw) = query.get("category_id") {
        params.push(SqlValue::Integer(lenient_id(raw)));
        clauses.push("category_id = ?1");
    }
    if let Some(search) = query.get("search").map(String::as_str).filter(|s| !s.is_empty()) {
        params.push(SqlValue::Text(format!("%{search}%")));
        clauses.push(if clauses.is_empty() {
            "name LIKE ?1"
        } else {
            "name LIKE ?2"
        });
    }
    if !clauses.is_empty() {
        sql.push_str(" WHERE ");
        sql.push_str(&clauses.join(" AND "));
    }

    // Out-of-range or unparsable limits fall back to the default rather
    // than erroring.
    let limit = query
        .get("limit")
        .and_then(|v| v.parse::<i64>().ok())
        .filter(|l| *l > 0 && *l <= MAX_LIMIT)
        .unwrap_or(DEFAULT_LIMIT);
    params.push(SqlValue::Integer(limit));
    sql.push_str(&format!(" ORDER BY name LIMIT ?{}", params.len()));

    let rows = state.gate.query(&sql, &params)?;
    let foods: Vec<FoodRecord> = rows.iter().map(FoodRecord::from_row).collect();
    let count = foods.len();

    Ok(Json(FoodListResponse {
        success: true,
        foods,
        count,
    }))
}

/// Get one food by id
async fn get_food_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<FoodResponse>> {
    let sql = format!("SELECT {FOOD_COLUMNS} FROM food_items WHERE id = ?1");
    let rows = state
        .gate
        .query(&sql, &[SqlValue::Integer(lenient_id(&id))])?;
    let row = rows.first().ok_or(ApiError::NotFound("Food"))?;

    Ok(Json(FoodResponse {
        success: true,
        food: FoodRecord::from_row(row),
    }))
}
