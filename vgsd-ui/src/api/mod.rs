//! HTTP API handlers for vgsd-ui

pub mod buildinfo;
pub mod genres;
pub mod health;
pub mod series;
pub mod summary;
pub mod table;
pub mod ui;

pub use buildinfo::get_build_info;
pub use genres::{get_genres, put_selection, reset_selection};
pub use health::health_routes;
pub use series::get_series;
pub use summary::get_summary;
pub use table::get_table_data;
pub use ui::{serve_app_js, serve_index, serve_style_css};
