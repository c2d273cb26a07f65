//! Aggregation over the filtered view
//!
//! Regional sales sums for the summary cards and the (year, genre) grouped
//! series for the time-series chart. All functions are pure; an empty view
//! is a valid input yielding zero-valued aggregates, never an error.

use crate::dataset::SalesRecord;
use serde::Serialize;
use std::collections::BTreeMap;

/// Sales region selector for the summary cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    NorthAmerica,
    Europe,
    Japan,
}

impl Region {
    fn sales(&self, record: &SalesRecord) -> f64 {
        match self {
            Region::NorthAmerica => record.na_sales,
            Region::Europe => record.eu_sales,
            Region::Japan => record.jp_sales,
        }
    }
}

/// Sum of one region's sales over the view, in millions of units
pub fn regional_sum(view: &[&SalesRecord], region: Region) -> f64 {
    view.iter().map(|r| region.sales(r)).sum()
}

/// Render a sales sum as a summary card string, e.g. `"$4 million"`.
///
/// Ties round to even (banker's rounding): 2.5 renders "$2 million",
/// 3.5 renders "$4 million".
pub fn format_sales_card(sum_millions: f64) -> String {
    format!("${} million", sum_millions.round_ties_even() as i64)
}

/// One point of the grouped time series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub year: u16,
    pub genre: String,
    pub global_sales: f64,
}

/// Sum of global sales grouped by (year, genre), ordered by year ascending
/// then genre lexical for deterministic rendering.
///
/// Rows without a year cannot be placed on the time axis and are excluded
/// here; they still count toward the regional sums and the data table.
pub fn global_sales_series(view: &[&SalesRecord]) -> Vec<SeriesPoint> {
    let mut groups: BTreeMap<(u16, &str), f64> = BTreeMap::new();
    for record in view {
        if let Some(year) = record.year {
            *groups.entry((year, record.genre.as_str())).or_insert(0.0) += record.global_sales;
        }
    }

    groups
        .into_iter()
        .map(|((year, genre), global_sales)| SeriesPoint {
            year,
            genre: genre.to_string(),
            global_sales,
        })
        .collect()
}
