//! HTTP handlers, organized by what they act on:
//! - `board`: the page itself
//! - `jobs`: intake submission, stage advance and delete
//! - `resumes`: resume downloads
//!
//! Every mutating handler answers with a redirect to the board so the
//! next render reads fresh state.

pub mod board;
pub mod jobs;
pub mod resumes;

use axum::Json;
use serde_json::{json, Value};

/// GET /health
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "jobtrack-web"
    }))
}
