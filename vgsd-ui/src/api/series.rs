//! Time-series endpoint: global sales grouped by (year, genre)

use axum::{extract::State, Json};
use serde::Serialize;
use vgsd_common::aggregate::{global_sales_series, SeriesPoint};
use vgsd_common::filter::filtered_view;

use crate::AppState;

/// Grouped series response, ordered by year ascending then genre lexical
#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub points: Vec<SeriesPoint>,
}

/// GET /api/series
///
/// Sum of global sales per (year, genre) partition of the current filtered
/// view. The chart keys its line series by genre.
pub async fn get_series(State(state): State<AppState>) -> Json<SeriesResponse> {
    let selection = state.selection.read().await.clone();
    let view = filtered_view(&state.dataset, &selection);

    Json(SeriesResponse {
        points: global_sales_series(&view),
    })
}
