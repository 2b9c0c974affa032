//! `POST /api/answer`: the question-answering endpoint.
//!
//! Nearly every outcome is HTTP 200 with a renderable `answer` field; only a
//! missing/empty question earns a 400. Clients render `answer` verbatim and
//! never branch on status for backend failures.

use axum::{extract::State, http::StatusCode, response::IntoResponse, response::Response, Json};
use serde::Deserialize;
use tracing::{error, info};
use uuid::Uuid;

use askforge_core::AskError;

use crate::server::{ApiError, GatewayState};

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    /// Missing and empty are equivalent; both fail validation.
    #[serde(default)]
    pub question: String,
}

/// Handler for `POST /api/answer`.
pub async fn post_answer(
    State(state): State<GatewayState>,
    Json(payload): Json<AnswerRequest>,
) -> Response {
    let request_id = Uuid::new_v4();
    info!(%request_id, length = payload.question.len(), "Received question");

    match state.answer.answer(&payload.question).await {
        Ok(generated) => {
            info!(%request_id, degraded = generated.error.is_some(), "Answer ready");
            (StatusCode::OK, Json(generated)).into_response()
        }
        Err(AskError::Validation(message)) => {
            (StatusCode::BAD_REQUEST, Json(ApiError::new(message))).into_response()
        }
        Err(err) => {
            error!(%request_id, error = %err, "Answer handler failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Failed to process question").with_details(err.to_string())),
            )
                .into_response()
        }
    }
}
