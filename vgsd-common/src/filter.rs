//! Filtered-view computation
//!
//! [REQ-SD-F-030]: Pure, order-preserving genre filter over the loaded table

use crate::dataset::{Dataset, SalesRecord};
use crate::genres::GenreSelection;

/// The rows of `dataset` whose genre is a member of `selection`.
///
/// Pure and deterministic: original row order is preserved, an empty
/// selection yields an empty view (no implicit match-all), and the test is
/// plain set membership with no catalog validation. Rows carrying a genre
/// label outside the known catalog are excluded unless that label were in
/// the selection.
pub fn filtered_view<'a>(dataset: &'a Dataset, selection: &GenreSelection) -> Vec<&'a SalesRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| selection.contains(&r.genre))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genres::KNOWN_GENRES;

    fn record(rank: u32, genre: &str, na: f64) -> SalesRecord {
        SalesRecord {
            rank,
            name: format!("Game {}", rank),
            platform: "Wii".to_string(),
            year: Some(2006),
            genre: genre.to_string(),
            publisher: "Nintendo".to_string(),
            na_sales: na,
            eu_sales: 0.5,
            jp_sales: 0.25,
            other_sales: 0.1,
            global_sales: na + 0.85,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_records(vec![
            record(1, "Sports", 1.0),
            record(2, "Racing", 2.0),
            record(3, "Sports", 3.0),
            record(4, "Puzzle", 4.0),
            record(5, "Racing", 5.0),
        ])
    }

    #[test]
    fn test_only_selected_genres_and_counts_add_up() {
        let dataset = sample();
        let selection = GenreSelection::new(["Racing", "Sports"]).unwrap();
        let view = filtered_view(&dataset, &selection);

        assert!(view.iter().all(|r| selection.contains(&r.genre)));

        let per_genre: usize = ["Racing", "Sports"]
            .iter()
            .map(|g| dataset.records().iter().filter(|r| &r.genre == g).count())
            .sum();
        assert_eq!(view.len(), per_genre);
    }

    #[test]
    fn test_empty_selection_yields_empty_view() {
        let dataset = sample();
        let view = filtered_view(&dataset, &GenreSelection::empty());
        assert!(view.is_empty());
    }

    #[test]
    fn test_full_catalog_matches_every_row() {
        let dataset = sample();
        let selection = GenreSelection::new(KNOWN_GENRES).unwrap();
        let view = filtered_view(&dataset, &selection);
        assert_eq!(view.len(), dataset.len());
    }

    #[test]
    fn test_row_order_is_preserved() {
        let dataset = sample();
        let selection = GenreSelection::new(["Racing", "Sports"]).unwrap();
        let ranks: Vec<u32> = filtered_view(&dataset, &selection)
            .iter()
            .map(|r| r.rank)
            .collect();
        assert_eq!(ranks, vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_idempotence() {
        let dataset = sample();
        let selection = GenreSelection::new(["Sports"]).unwrap();
        let once = filtered_view(&dataset, &selection);

        let refiltered = Dataset::from_records(once.iter().map(|r| (*r).clone()).collect());
        let twice = filtered_view(&refiltered, &selection);
        assert_eq!(once.len(), twice.len());
        assert!(once.iter().zip(twice.iter()).all(|(a, b)| a == b));
    }

    #[test]
    fn test_unknown_genre_in_data_is_excluded() {
        let dataset = Dataset::from_records(vec![record(1, "Sports", 1.0), record(2, "Polka", 2.0)]);
        let selection = GenreSelection::new(KNOWN_GENRES).unwrap();
        let view = filtered_view(&dataset, &selection);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].genre, "Sports");
    }
}
