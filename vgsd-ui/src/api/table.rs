//! Data grid endpoint with pagination and sorting
//!
//! Serves the filtered view, all columns, 100 rows/page. Without a sort
//! parameter the original dataset row order is preserved; sorts are stable,
//! so equal keys keep that order too.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::cmp::Ordering;
use vgsd_common::SalesRecord;
use vgsd_common::filter::filtered_view;

use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// Column headers, in dataset order
const COLUMNS: [&str; 11] = [
    "Rank",
    "Name",
    "Platform",
    "Year",
    "Genre",
    "Publisher",
    "NA_Sales",
    "EU_Sales",
    "JP_Sales",
    "Other_Sales",
    "Global_Sales",
];

/// Query parameters for the data grid
#[derive(Debug, Deserialize)]
pub struct TableQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Column to sort by (optional)
    pub sort: Option<String>,

    /// Sort order: "asc" or "desc"
    #[serde(default = "default_order")]
    pub order: String,
}

fn default_page() -> usize {
    1
}

fn default_order() -> String {
    "asc".to_string()
}

/// Table data response
#[derive(Debug, Serialize)]
pub struct TableDataResponse {
    pub total_rows: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

/// GET /api/table
///
/// Returns one page of the current filtered view with optional sorting.
pub async fn get_table_data(
    State(state): State<AppState>,
    Query(query): Query<TableQuery>,
) -> Result<Json<TableDataResponse>, TableError> {
    let selection = state.selection.read().await.clone();
    let mut view = filtered_view(&state.dataset, &selection);

    if let Some(sort_column) = &query.sort {
        let compare = column_comparator(sort_column)
            .ok_or_else(|| TableError::InvalidColumn(sort_column.clone()))?;

        if query.order.to_lowercase() == "desc" {
            view.sort_by(|a, b| compare(b, a));
        } else {
            view.sort_by(|a, b| compare(a, b));
        }
    }

    let total_rows = view.len();
    let p = calculate_pagination(total_rows, query.page);

    let rows: Vec<Vec<Value>> = view
        .iter()
        .skip(p.offset)
        .take(PAGE_SIZE)
        .map(|r| record_to_row(r))
        .collect();

    Ok(Json(TableDataResponse {
        total_rows,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
        rows,
    }))
}

/// One grid row in column order; missing year renders as null
fn record_to_row(r: &SalesRecord) -> Vec<Value> {
    vec![
        json!(r.rank),
        Value::String(r.name.clone()),
        Value::String(r.platform.clone()),
        r.year.map(|y| json!(y)).unwrap_or(Value::Null),
        Value::String(r.genre.clone()),
        Value::String(r.publisher.clone()),
        json!(r.na_sales),
        json!(r.eu_sales),
        json!(r.jp_sales),
        json!(r.other_sales),
        json!(r.global_sales),
    ]
}

type Comparator = fn(&&SalesRecord, &&SalesRecord) -> Ordering;

/// Ascending comparator for a column name, or None for an unknown column
fn column_comparator(column: &str) -> Option<Comparator> {
    let compare: Comparator = match column {
        "Rank" => |a, b| a.rank.cmp(&b.rank),
        "Name" => |a, b| a.name.cmp(&b.name),
        "Platform" => |a, b| a.platform.cmp(&b.platform),
        // None sorts before any year
        "Year" => |a, b| a.year.cmp(&b.year),
        "Genre" => |a, b| a.genre.cmp(&b.genre),
        "Publisher" => |a, b| a.publisher.cmp(&b.publisher),
        "NA_Sales" => |a, b| float_cmp(a.na_sales, b.na_sales),
        "EU_Sales" => |a, b| float_cmp(a.eu_sales, b.eu_sales),
        "JP_Sales" => |a, b| float_cmp(a.jp_sales, b.jp_sales),
        "Other_Sales" => |a, b| float_cmp(a.other_sales, b.other_sales),
        "Global_Sales" => |a, b| float_cmp(a.global_sales, b.global_sales),
        _ => return None,
    };
    Some(compare)
}

fn float_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Table API errors
#[derive(Debug)]
pub enum TableError {
    InvalidColumn(String),
}

impl IntoResponse for TableError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            TableError::InvalidColumn(col) => {
                (StatusCode::BAD_REQUEST, format!("Invalid column: {}", col))
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
