use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use tracing::instrument;

use crate::error::AppError;
use crate::state::AppState;

/// `Content-Disposition` value naming the download. Characters that cannot
/// appear in a quoted header string are replaced.
fn attachment_disposition(filename: &str) -> String {
    let safe: String = filename
        .chars()
        .map(|c| {
            if c.is_ascii_graphic() && c != '"' && c != '\\' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("attachment; filename=\"{safe}\"")
}

/// GET /jobs/:id/resume
#[instrument(skip(state))]
pub async fn download_resume(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let download = state
        .run(move |tracker| tracker.resume(id))
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No resume available for job {id}")))?;

    Ok((
        [
            (header::CONTENT_TYPE, download.content_type),
            (
                header::CONTENT_DISPOSITION,
                attachment_disposition(&download.filename),
            ),
        ],
        download.bytes,
    )
        .into_response())
}
