use axum::extract::{Query, State};
use axum::response::Html;
use jobtrack::intake::confirmation;
use serde::Deserialize;
use tracing::instrument;

use crate::error::AppError;
use crate::render::{self, FormValues};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BoardQuery {
    /// Id of an application that was just added; shows the confirmation once.
    pub added: Option<i64>,
}

/// GET /
#[instrument(skip(state))]
pub async fn show_board(
    State(state): State<AppState>,
    Query(query): Query<BoardQuery>,
) -> Result<Html<String>, AppError> {
    let (board, notice) = state
        .run(move |tracker| {
            let board = tracker.board()?;
            // A record that is gone or unreadable just gets no confirmation.
            let notice = query
                .added
                .and_then(|id| tracker.find(id).ok().flatten())
                .map(|app| confirmation(&app.position, &app.company));
            Ok((board, notice))
        })
        .await?;

    Ok(Html(render::page(
        &board,
        &FormValues::blank(),
        notice.as_deref(),
        None,
    )))
}
