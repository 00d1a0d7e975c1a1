use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{self, board, jobs, resumes};
use crate::state::AppState;

/// Largest accepted intake submission, resume included.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(board::show_board))
        .route("/health", get(handlers::health_handler))
        .route(
            "/jobs",
            post(jobs::submit_job).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route("/jobs/:id/advance", post(jobs::advance_job))
        .route("/jobs/:id/delete", post(jobs::delete_job))
        .route("/jobs/:id/resume", get(resumes::download_resume))
        .with_state(state)
}
