//! # Food Category Routes
//!
//! Flat list/get endpoints over `food_categories`: one query, one mapped
//! row set, one JSON envelope.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::db::{SqlExecutor, SqlValue};
use crate::records::CategoryRecord;

use super::errors::{ApiError, ApiResult};
use super::lenient_id;
use super::server::AppState;

const SELECT_CATEGORIES: &str =
    "SELECT id, name, icon, color, sort_order FROM food_categories ORDER BY sort_order";

const SELECT_CATEGORY: &str =
    "SELECT id, name, icon, color, sort_order FROM food_categories WHERE id = ?1";

#[derive(Debug, Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<CategoryRecord>,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    pub success: bool,
    pub category: CategoryRecord,
}

/// Create category routes
pub fn category_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/categories", get(list_categories_handler))
        .route("/categories/:id", get(get_category_handler))
}

/// List all categories ordered by sort_order
async fn list_categories_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<CategoryListResponse>> {
    let rows = state.gate.query(SELECT_CATEGORIES, &[])?;
    let categories: Vec<CategoryRecord> = rows.iter().map(CategoryRecord::from_row).collect();
    let count = categories.len();

    Ok(Json(CategoryListResponse {
        success: true,
        categories,
        count,
    }))
}

/// Get one category by id
async fn get_category_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<CategoryResponse>> {
    let rows = state
        .gate
        .query(SELECT_CATEGORY, &[SqlValue::Integer(lenient_id(&id))])?;
    let row = rows.first().ok_or(ApiError::NotFound("Category"))?;

    Ok(Json(CategoryResponse {
        success: true,
        category: CategoryRecord::from_row(row),
    }))
}
