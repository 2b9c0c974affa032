//! Introspection endpoints: `GET /api/debug` and `GET /api/test`.
//!
//! The debug report exposes credential *presence*, never credential values;
//! the key preview goes through `mask_secret` before it leaves the process.
//! The test endpoint probes backend connectivity by listing models; like the
//! answer path it always replies 200 and puts the outcome in the body.

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{json, Value};

use askforge_config::mask_secret;

use crate::server::GatewayState;

#[derive(Debug, Serialize)]
pub struct DebugReport {
    pub environment: String,
    pub openai_key_configured: bool,
    pub openai_key_length: usize,
    pub openai_key_preview: String,
    pub ocr_key_configured: bool,
    pub server_time: DateTime<Utc>,
}

/// Handler for `GET /api/debug`.
pub async fn get_debug(State(state): State<GatewayState>) -> Json<DebugReport> {
    let key = state.config.openai_api_key.as_deref().unwrap_or("");

    Json(DebugReport {
        environment: state.config.environment.clone(),
        openai_key_configured: state.config.openai_key_configured(),
        openai_key_length: key.chars().count(),
        openai_key_preview: if key.is_empty() {
            "none".to_string()
        } else {
            mask_secret(key)
        },
        ocr_key_configured: state.config.ocr_key_configured(),
        server_time: Utc::now(),
    })
}

/// Handler for `GET /api/test`, the backend connectivity probe.
pub async fn get_test(State(state): State<GatewayState>) -> Json<Value> {
    let Some(provider) = state.answer.provider() else {
        return Json(json!({
            "status": "error",
            "error": "OpenAI API key not found in environment variables",
        }));
    };

    match provider.list_models().await {
        Ok(models) => Json(json!({
            "status": "success",
            "message": "Successfully connected to OpenAI API",
            "model_count": models.len(),
            "first_few_models": models.iter().take(3).collect::<Vec<_>>(),
        })),
        Err(err) => Json(json!({
            "status": "error",
            "message": "Failed to connect to OpenAI API",
            "error": err.to_string(),
            "hint": "Check if your API key is valid and has sufficient permissions",
        })),
    }
}
