//! # Template Routes
//!
//! The hierarchical endpoint: hands the id to the assembler and wraps the
//! resulting tree in the success envelope.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::templates::{TemplateAssembler, TemplateTree};

use super::errors::ApiResult;
use super::lenient_id;
use super::server::AppState;

#[derive(Debug, Serialize)]
pub struct TemplateFullResponse {
    pub success: bool,
    pub template: TemplateTree,
}

/// Create template routes
pub fn template_routes() -> Router<Arc<AppState>> {
    Router::new().route("/templates/:id/full", get(get_template_full_handler))
}

/// Get the full nested document for one template
async fn get_template_full_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<TemplateFullResponse>> {
    let assembler = TemplateAssembler::new(state.gate.clone());
    let template = assembler.template_full(lenient_id(&id))?;

    Ok(Json(TemplateFullResponse {
        success: true,
        template,
    }))
}
