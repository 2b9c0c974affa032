//! Main HTTP Gateway Server.
//!
//! Owns the shared state, the route table, and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use askforge_answer::AnswerService;
use askforge_config::Config;
use askforge_understanding::OcrEngine;

use crate::{answer_api, debug_api, ocr_api};

/// Application state shared across routes. Cheap to clone; everything inside
/// is immutable after construction, so handlers are freely re-entrant.
#[derive(Clone)]
pub struct GatewayState {
    pub answer: Arc<AnswerService>,
    pub ocr: Arc<dyn OcrEngine>,
    pub config: Arc<Config>,
}

/// Uniform JSON error body: `{"error": ..., "details"?: ...}`.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Build the Axum router with all API routes.
pub fn build_router(state: GatewayState) -> Router {
    Router::new()
        .route("/api/answer", post(answer_api::post_answer))
        .route("/api/ocr", post(ocr_api::post_ocr))
        .route("/api/debug", get(debug_api::get_debug))
        .route("/api/test", get(debug_api::get_test))
        .route("/api/health", get(health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the gateway until the process exits.
pub async fn start_server(addr: SocketAddr, state: GatewayState) -> Result<()> {
    let app = build_router(state);

    info!("Gateway HTTP server listening on {}", addr);
    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Liveness endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "askforge",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(ApiError::new("Not found")))
}
