//! `POST /api/ocr`: image upload and text extraction.
//!
//! Accepts a multipart form with an `image` field and hands the bytes to the
//! configured [`OcrEngine`]. Form-parsing failures are the one place this
//! service returns a 500.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, info};

use crate::server::{ApiError, GatewayState};

#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub text: String,
}

/// Handler for `POST /api/ocr`.
pub async fn post_ocr(State(state): State<GatewayState>, mut multipart: Multipart) -> Response {
    let mut image: Option<(Vec<u8>, Option<String>)> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().map(str::to_string);
                if name.as_deref() != Some("image") {
                    continue;
                }
                let mime_type = field.content_type().map(str::to_string);
                match field.bytes().await {
                    Ok(bytes) => {
                        image = Some((bytes.to_vec(), mime_type));
                        break;
                    }
                    Err(err) => return processing_failure(err.to_string()),
                }
            }
            Ok(None) => break,
            Err(err) => return processing_failure(err.to_string()),
        }
    }

    let Some((bytes, mime_type)) = image else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ApiError::new("No image file provided")),
        )
            .into_response();
    };

    info!(bytes = bytes.len(), engine = state.ocr.name(), "Extracting text from upload");

    match state.ocr.extract_text(&bytes, mime_type.as_deref()).await {
        Ok(text) => (StatusCode::OK, Json(OcrResponse { text })).into_response(),
        Err(err) => processing_failure(err.to_string()),
    }
}

fn processing_failure(details: String) -> Response {
    error!(details = %details, "Image processing failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiError::new("Failed to process image").with_details(details)),
    )
        .into_response()
}
