//! # HTTP Server Module
//!
//! Axum server exposing the diet API. One router per resource, merged into a
//! single [`HttpServer`] with CORS and a shared [`AppState`] carrying the
//! query execution gate.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/categories`, `GET /api/categories/:id` - Food categories
//! - `GET /api/foods`, `GET /api/foods/:id` - Food items
//! - `GET /api/templates/:id/full` - Nested template document
//! - `POST /api/benchmark/bulk-insert` - Bulk insert benchmark

pub mod benchmark_routes;
pub mod category_routes;
pub mod errors;
pub mod food_routes;
pub mod server;
pub mod template_routes;

pub use errors::{ApiError, ApiResult};
pub use server::{AppState, HttpServer};

/// Lenient id parsing for path and query segments: non-numeric text reads
/// as 0, which matches no row and falls through to the not-found envelope
/// instead of an extractor rejection outside the JSON contract.
pub(crate) fn lenient_id(raw: &str) -> i64 {
    raw.trim().parse().unwrap_or(0)
}
