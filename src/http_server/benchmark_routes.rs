//! # Benchmark Routes
//!
//! Bulk-insert endpoint used for insert-throughput benchmarking.
//!
//! The body is taken as raw text so the three 400 cases stay distinct:
//! empty body ("Missing request body"), unparsable body ("Invalid JSON"),
//! parsed body with the wrong shape ("Invalid request format"). Shape
//! validation beyond that belongs to the coordinator.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;

use crate::benchmark::BulkInsertCoordinator;

use super::errors::{ApiError, ApiResult};
use super::server::AppState;

#[derive(Debug, Serialize)]
pub struct BulkInsertResponse {
    pub success: bool,
    pub inserted_count: usize,
}

/// Create benchmark routes
pub fn benchmark_routes() -> Router<Arc<AppState>> {
    Router::new().route("/benchmark/bulk-insert", post(bulk_insert_handler))
}

/// Insert a batch of meal items, one row at a time
async fn bulk_insert_handler(
    State(state): State<Arc<AppState>>,
    body: String,
) -> ApiResult<(StatusCode, Json<BulkInsertResponse>)> {
    if body.is_empty() {
        return Err(ApiError::MissingBody);
    }
    let payload: Value = serde_json::from_str(&body).map_err(|_| ApiError::InvalidJson)?;

    let coordinator = BulkInsertCoordinator::new(state.gate.clone());
    let outcome = coordinator.insert_batch(&payload)?;
    tracing::info!(
        inserted = outcome.inserted,
        skipped = outcome.skipped,
        failed = outcome.failed,
        "bulk insert batch processed"
    );

    Ok((
        StatusCode::CREATED,
        Json(BulkInsertResponse {
            success: true,
            inserted_count: outcome.inserted,
        }),
    ))
}
