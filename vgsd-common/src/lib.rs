//! # VGSD Common Library
//!
//! Shared code for the VGSD dashboard including:
//! - Sales record data model and CSV loader
//! - Genre catalog and selection state
//! - Pure filtering and aggregation pipeline
//! - Configuration resolution
//! - Error types

pub mod aggregate;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod genres;

pub use dataset::{Dataset, SalesRecord};
pub use error::{Error, Result};
pub use genres::{GenreSelection, KNOWN_GENRES};
