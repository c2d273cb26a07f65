//! vgsd-ui library - Sales Dashboard module
//!
//! Serves the embedded dashboard UI and the JSON API it consumes. The parsed
//! dataset is shared immutable state; the genre selection is the single piece
//! of mutable application state.

use axum::Router;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_http::trace::TraceLayer;
use vgsd_common::{Dataset, GenreSelection};

pub mod api;
pub mod pagination;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Parsed sales table, loaded once at startup, never mutated
    pub dataset: Arc<Dataset>,
    /// Current genre selection; written only by the selection endpoints
    pub selection: Arc<RwLock<GenreSelection>>,
}

impl AppState {
    /// Create application state with the default selection
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            selection: Arc::new(RwLock::new(GenreSelection::default())),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post, put};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/static/style.css", get(api::serve_style_css))
        .route("/api/buildinfo", get(api::get_build_info))
        .route("/api/genres", get(api::get_genres))
        .route("/api/selection", put(api::put_selection))
        .route("/api/selection/reset", post(api::reset_selection))
        .route("/api/summary", get(api::get_summary))
        .route("/api/series", get(api::get_series))
        .route("/api/table", get(api::get_table_data))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
