//! askforge Gateway HTTP API Server
//!
//! Provides the question-answering endpoint, the OCR upload endpoint, and the
//! introspection surface (debug, connectivity test, health).

pub mod answer_api;
pub mod debug_api;
pub mod ocr_api;
pub mod server;

pub use server::{build_router, start_server, ApiError, GatewayState};
