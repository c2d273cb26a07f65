//! Genre catalog and selection endpoints
//!
//! The genre selection is the single piece of mutable application state.
//! These handlers are its only writers; every derived-value handler takes a
//! read snapshot at entry.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;
use vgsd_common::{Error, GenreSelection, KNOWN_GENRES};

use crate::AppState;

/// Genre catalog response with the current selection
#[derive(Debug, Serialize)]
pub struct GenresResponse {
    pub genres: Vec<String>,
    pub selected: Vec<String>,
}

/// Selection replacement request
#[derive(Debug, Deserialize)]
pub struct SelectionRequest {
    pub genres: Vec<String>,
}

/// GET /api/genres
///
/// Returns the fixed genre catalog and the current selection.
pub async fn get_genres(State(state): State<AppState>) -> Json<GenresResponse> {
    let selection = state.selection.read().await;
    Json(genres_response(&selection))
}

/// PUT /api/selection
///
/// Replaces the selection. Rejects unknown genre labels with 400; the prior
/// selection is left unchanged on rejection. An empty list is a valid
/// selection yielding empty derived views.
pub async fn put_selection(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> Result<Json<GenresResponse>, SelectionError> {
    let new_selection = GenreSelection::new(request.genres).map_err(|e| match e {
        Error::InvalidInput(msg) => SelectionError::UnknownGenre(msg),
        other => SelectionError::Internal(other.to_string()),
    })?;

    let mut selection = state.selection.write().await;
    *selection = new_selection;
    info!(
        "Selection replaced: [{}]",
        selection.labels().collect::<Vec<_>>().join(", ")
    );
    Ok(Json(genres_response(&selection)))
}

/// POST /api/selection/reset
///
/// Restores the default selection unconditionally, regardless of prior state.
pub async fn reset_selection(State(state): State<AppState>) -> Json<GenresResponse> {
    let mut selection = state.selection.write().await;
    selection.reset();
    info!("Selection reset to default");
    Json(genres_response(&selection))
}

fn genres_response(selection: &GenreSelection) -> GenresResponse {
    GenresResponse {
        genres: KNOWN_GENRES.iter().map(|g| g.to_string()).collect(),
        selected: selection.labels().map(|g| g.to_string()).collect(),
    }
}

/// Selection API errors
#[derive(Debug)]
pub enum SelectionError {
    UnknownGenre(String),
    Internal(String),
}

impl IntoResponse for SelectionError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            SelectionError::UnknownGenre(msg) => (StatusCode::BAD_REQUEST, msg),
            SelectionError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
