//! # HTTP Server
//!
//! Combines the resource routers into one Axum application and runs it with
//! graceful shutdown: a ctrl-c drains in-flight requests before the caller
//! closes the query execution gate.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};

use crate::config::Config;
use crate::db::QueryGate;

use super::benchmark_routes::benchmark_routes;
use super::category_routes::category_routes;
use super::errors::ErrorEnvelope;
use super::food_routes::food_routes;
use super::template_routes::template_routes;

/// Process-scoped context shared by every handler
pub struct AppState {
    pub gate: Arc<QueryGate>,
}

impl AppState {
    pub fn new(gate: Arc<QueryGate>) -> Self {
        Self { gate }
    }
}

/// HTTP server for the diet API
pub struct HttpServer {
    config: Config,
    router: Router,
}

impl HttpServer {
    /// Build the server around a live (or deliberately disconnected) gate
    pub fn new(config: Config, gate: Arc<QueryGate>) -> Self {
        let router = Self::build_router(Arc::new(AppState::new(gate)));
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    pub fn build_router(state: Arc<AppState>) -> Router {
        // Consumed cross-origin by browser dashboards; CORS stays permissive.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let api = category_routes()
            .merge(food_routes())
            .merge(template_routes())
            .merge(benchmark_routes());

        Router::new()
            .route("/health", get(health_handler))
            .nest("/api", api)
            .fallback(fallback_handler)
            .layer(cors)
            .with_state(state)
    }

    /// Socket address the server will bind to
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Router accessor (for tests)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until ctrl-c, then drain in-flight requests
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(%addr, "diet API server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
    }
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("shutdown signal received, draining requests");
    }
}

/// Health check response
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        service: "diet-api",
    })
}

/// Unknown routes still answer with the JSON envelope
async fn fallback_handler() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorEnvelope {
            success: false,
            error: "Not found".to_string(),
        }),
    )
}
