//! Genre catalog and selection state
//!
//! [REQ-SD-F-010]: Multi-select genre filter restricted to the known catalog
//! [REQ-SD-F-040]: Reset restores the default selection from any state

use crate::{Error, Result};
use serde::Serialize;
use std::collections::BTreeSet;

/// The eleven genre labels the selector offers, in display order.
///
/// Fixed catalog; labels found in the dataset but absent from this list are
/// never selectable (see `Dataset::load` which logs them at startup).
pub const KNOWN_GENRES: [&str; 11] = [
    "Action",
    "Adventure",
    "Fighting",
    "Misc",
    "Platform",
    "Puzzle",
    "Racing",
    "Role-Playing",
    "Shooter",
    "Simulation",
    "Sports",
];

/// Default selection shown on first load and after reset
pub const DEFAULT_GENRE: &str = "Action";

/// The user-chosen subset of genre labels driving filtering.
///
/// Invariant: always a subset of [`KNOWN_GENRES`] (enforced by [`GenreSelection::new`]).
/// The empty selection is valid and yields empty derived views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreSelection(BTreeSet<String>);

impl GenreSelection {
    /// Build a selection from arbitrary labels, rejecting any label not in
    /// the known catalog.
    pub fn new<I, S>(labels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = BTreeSet::new();
        let mut unknown = Vec::new();
        for label in labels {
            let label = label.into();
            if KNOWN_GENRES.contains(&label.as_str()) {
                set.insert(label);
            } else {
                unknown.push(label);
            }
        }
        if !unknown.is_empty() {
            return Err(Error::InvalidInput(format!(
                "Unknown genre(s): {}",
                unknown.join(", ")
            )));
        }
        Ok(Self(set))
    }

    /// The empty selection (valid state, matches nothing)
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Restore the default selection unconditionally, regardless of prior state
    pub fn reset(&mut self) {
        self.0.clear();
        self.0.insert(DEFAULT_GENRE.to_string());
    }

    /// Membership test used by the filter (pure, no catalog validation)
    pub fn contains(&self, genre: &str) -> bool {
        self.0.contains(genre)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Labels in lexical order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for GenreSelection {
    fn default() -> Self {
        let mut sel = Self::empty();
        sel.reset();
        sel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_action() {
        let sel = GenreSelection::default();
        assert_eq!(sel.len(), 1);
        assert!(sel.contains("Action"));
    }

    #[test]
    fn test_new_accepts_known_labels() {
        let sel = GenreSelection::new(["Racing", "Sports"]).unwrap();
        assert_eq!(sel.len(), 2);
        assert!(sel.contains("Racing"));
        assert!(sel.contains("Sports"));
        assert!(!sel.contains("Action"));
    }

    #[test]
    fn test_new_rejects_unknown_labels() {
        let err = GenreSelection::new(["Action", "Polka"]).unwrap_err();
        assert!(err.to_string().contains("Polka"));
    }

    #[test]
    fn test_new_empty_is_valid() {
        let sel = GenreSelection::new(Vec::<String>::new()).unwrap();
        assert!(sel.is_empty());
    }

    #[test]
    fn test_reset_from_empty() {
        let mut sel = GenreSelection::empty();
        sel.reset();
        assert_eq!(sel, GenreSelection::default());
    }

    #[test]
    fn test_reset_from_full_set() {
        let mut sel = GenreSelection::new(KNOWN_GENRES).unwrap();
        assert_eq!(sel.len(), 11);
        sel.reset();
        assert_eq!(sel, GenreSelection::default());
    }

    #[test]
    fn test_labels_are_lexically_ordered() {
        let sel = GenreSelection::new(["Sports", "Adventure", "Misc"]).unwrap();
        let labels: Vec<&str> = sel.labels().collect();
        assert_eq!(labels, vec!["Adventure", "Misc", "Sports"]);
    }
}
