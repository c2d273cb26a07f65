//! Summary card endpoint: regional sales sums over the filtered view

use axum::{extract::State, Json};
use serde::Serialize;
use vgsd_common::aggregate::{format_sales_card, regional_sum, Region};
use vgsd_common::filter::filtered_view;

use crate::AppState;

/// Summary response: one formatted card string per region
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    /// Number of rows in the current filtered view
    pub record_count: usize,
    pub na_sales: String,
    pub eu_sales: String,
    pub jp_sales: String,
}

/// GET /api/summary
///
/// Regional sales sums over the current filtered view, rendered as card
/// strings. An empty view is valid and yields "$0 million" cards.
pub async fn get_summary(State(state): State<AppState>) -> Json<SummaryResponse> {
    let selection = state.selection.read().await.clone();
    let view = filtered_view(&state.dataset, &selection);

    Json(SummaryResponse {
        record_count: view.len(),
        na_sales: format_sales_card(regional_sum(&view, Region::NorthAmerica)),
        eu_sales: format_sales_card(regional_sum(&view, Region::Europe)),
        jp_sales: format_sales_card(regional_sum(&view, Region::Japan)),
    })
}
