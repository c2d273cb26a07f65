//! Sales record data model and CSV loader
//!
//! [REQ-SD-F-020]: Dataset parsed once at startup, shared immutable thereafter
//! [REQ-SD-NF-010]: Load failure is fatal, no retry

use crate::genres::KNOWN_GENRES;
use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{info, warn};

/// One row of the video game sales table.
///
/// Sales figures are in millions of units. Rows are never mutated after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    #[serde(rename = "Rank")]
    pub rank: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Platform")]
    pub platform: String,
    /// Release year; None where the source file has "N/A" or a non-numeric value
    #[serde(rename = "Year", deserialize_with = "year_or_none")]
    pub year: Option<u16>,
    #[serde(rename = "Genre")]
    pub genre: String,
    #[serde(rename = "Publisher")]
    pub publisher: String,
    #[serde(rename = "NA_Sales")]
    pub na_sales: f64,
    #[serde(rename = "EU_Sales")]
    pub eu_sales: f64,
    #[serde(rename = "JP_Sales")]
    pub jp_sales: f64,
    #[serde(rename = "Other_Sales")]
    pub other_sales: f64,
    #[serde(rename = "Global_Sales")]
    pub global_sales: f64,
}

/// Tolerant year parser: "N/A", blank, and non-numeric values become None
fn year_or_none<'de, D>(deserializer: D) -> std::result::Result<Option<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.trim().parse::<f64>().ok()).map(|y| y as u16))
}

/// The loaded sales table. Immutable for the process lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<SalesRecord>,
}

impl Dataset {
    /// Parse the CSV dataset at `path`.
    ///
    /// Missing/unreadable file yields [`Error::Load`]; a malformed row yields
    /// [`Error::Parse`]. Genre labels outside the known catalog are logged
    /// once each (they can never be selected, so they are otherwise invisible).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::Load {
                path: path.to_path_buf(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "dataset file not found"),
            });
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;

        let mut records = Vec::new();
        for row in reader.deserialize() {
            let record: SalesRecord = row.map_err(|e| Error::Parse {
                path: path.to_path_buf(),
                source: e,
            })?;
            records.push(record);
        }

        let unknown: BTreeSet<&str> = records
            .iter()
            .map(|r| r.genre.as_str())
            .filter(|g| !KNOWN_GENRES.contains(g))
            .collect();
        for genre in unknown {
            warn!("Dataset contains genre not in selector catalog: {}", genre);
        }

        info!("Loaded {} sales records from {}", records.len(), path.display());
        Ok(Self { records })
    }

    /// Build a dataset from in-memory records (tests)
    pub fn from_records(records: Vec<SalesRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[SalesRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales
1,Wii Sports,Wii,2006,Sports,Nintendo,41.49,29.02,3.77,8.46,82.74
2,Super Mario Bros.,NES,1985,Platform,Nintendo,29.08,3.58,6.81,0.77,40.24
3,Rock Band,X360,N/A,Misc,Electronic Arts,1.93,0.34,0.0,0.21,2.48
";

    fn write_sample(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_parses_all_rows() {
        let file = write_sample(SAMPLE);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.len(), 3);

        let first = &dataset.records()[0];
        assert_eq!(first.rank, 1);
        assert_eq!(first.name, "Wii Sports");
        assert_eq!(first.year, Some(2006));
        assert_eq!(first.genre, "Sports");
        assert!((first.na_sales - 41.49).abs() < 1e-9);
    }

    #[test]
    fn test_missing_year_becomes_none() {
        let file = write_sample(SAMPLE);
        let dataset = Dataset::load(file.path()).unwrap();
        assert_eq!(dataset.records()[2].year, None);
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let err = Dataset::load(Path::new("/nonexistent/vgsales.csv")).unwrap_err();
        assert!(matches!(err, Error::Load { .. }));
    }

    /// Data-integrity check: every genre in the bundled dataset is in the
    /// known catalog, so selecting the full catalog matches every row
    #[test]
    fn test_bundled_dataset_genres_are_all_known() {
        let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../data/vgsales.csv"));
        let dataset = Dataset::load(path).unwrap();
        assert!(!dataset.is_empty());
        for record in dataset.records() {
            assert!(
                KNOWN_GENRES.contains(&record.genre.as_str()),
                "genre {:?} (rank {}) missing from catalog",
                record.genre,
                record.rank
            );
        }
    }

    #[test]
    fn test_malformed_row_is_parse_error() {
        let file = write_sample(
            "Rank,Name,Platform,Year,Genre,Publisher,NA_Sales,EU_Sales,JP_Sales,Other_Sales,Global_Sales\n\
             not-a-number,Foo,Wii,2006,Sports,Nintendo,1.0,1.0,1.0,1.0,4.0\n",
        );
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
