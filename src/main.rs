//! diet-api server entry point
//!
//! Loads configuration, opens the database gate, applies the schema, and
//! serves HTTP until a shutdown signal drains in-flight requests. A database
//! that fails to open is logged and the server starts anyway; every request
//! that needs the store then answers with the database-error envelope.

use std::sync::Arc;

use diet_api::config::Config;
use diet_api::db::{schema, QueryGate};
use diet_api::http_server::HttpServer;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::from_env();

    let gate = match QueryGate::open(&config.db_path) {
        Ok(gate) => {
            tracing::info!(path = %config.db_path, "database opened");
            Arc::new(gate)
        }
        Err(err) => {
            tracing::error!(%err, "failed to open database, continuing without a store");
            Arc::new(QueryGate::disconnected())
        }
    };

    if gate.is_connected() {
        if let Err(err) = schema::apply_schema(gate.as_ref()) {
            tracing::error!(%err, "schema bootstrap failed");
            std::process::exit(1);
        }
    }

    let server = HttpServer::new(config, Arc::clone(&gate));
    if let Err(err) = server.start().await {
        tracing::error!(%err, "server error");
        std::process::exit(1);
    }

    // Graceful drain has completed; release the connection last.
    gate.close();
}
