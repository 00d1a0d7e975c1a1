use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use chrono::NaiveDate;
use jobtrack::application::DATE_FORMAT;
use jobtrack::{IntakeForm, Stage, Upload};
use tracing::instrument;

use crate::error::AppError;
use crate::render::{self, FormValues};
use crate::state::AppState;

/// The intake form as it arrived, before it is turned into an `IntakeForm`.
#[derive(Debug)]
struct IntakeInput {
    values: FormValues,
    upload: Option<Upload>,
}

impl IntakeInput {
    fn to_form(&self) -> IntakeForm {
        IntakeForm {
            company: self.values.company.clone(),
            position: self.values.position.clone(),
            stage: self.values.stage,
            resume: self.upload.clone(),
            date_discovered: self.values.date,
        }
    }
}

async fn read_intake(mut multipart: Multipart) -> Result<IntakeInput, AppError> {
    let mut values = FormValues::blank();
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Multipart error: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("resume") => {
                let filename = field.file_name().map(str::to_string).unwrap_or_default();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read resume: {e}")))?;
                // An untouched file input still sends an empty part.
                if !filename.is_empty() {
                    upload = Some(Upload {
                        filename,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            Some(other) => {
                let key = other.to_string();
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(format!("Failed to read {key}: {e}")))?;
                match key.as_str() {
                    "company" => values.company = text,
                    "position" => values.position = text,
                    "stage" => {
                        values.stage = text
                            .parse::<Stage>()
                            .map_err(|e| AppError::BadRequest(e.to_string()))?;
                    }
                    "date" if !text.is_empty() => {
                        values.date = NaiveDate::parse_from_str(&text, DATE_FORMAT)
                            .map_err(|e| AppError::BadRequest(format!("Invalid date {text:?}: {e}")))?;
                    }
                    _ => {} // Ignore unknown fields.
                }
            }
            None => {}
        }
    }

    Ok(IntakeInput { values, upload })
}

/// POST /jobs
///
/// On success redirects to the board, which clears the form. On a
/// validation failure the board is rendered with the message and the
/// user's input kept in place.
#[instrument(skip(state, multipart))]
pub async fn submit_job(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let input = read_intake(multipart).await?;
    let form = input.to_form();

    match state.run(move |tracker| tracker.submit(&form)).await {
        Ok(submission) => {
            Ok(Redirect::to(&format!("/?added={}", submission.id)).into_response())
        }
        Err(AppError::Validation(e)) => {
            tracing::info!("Rejected submission: {e}");
            let board = state.run(|tracker| tracker.board()).await?;
            let html = render::page(&board, &input.values, None, Some(&e.to_string()));
            Ok((StatusCode::BAD_REQUEST, Html(html)).into_response())
        }
        Err(e) => Err(e),
    }
}

/// POST /jobs/:id/advance
#[instrument(skip(state))]
pub async fn advance_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.run(move |tracker| tracker.advance(id)).await?;
    Ok(Redirect::to("/"))
}

/// POST /jobs/:id/delete
#[instrument(skip(state))]
pub async fn delete_job(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Redirect, AppError> {
    state.run(move |tracker| tracker.delete(id)).await?;
    Ok(Redirect::to("/"))
}
