//! Sort state and row ordering for the movie table.

use std::cmp::Ordering;

use payloads::responses::Movie;

/// Direction of a column sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// The movie columns a sort can be keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Title,
    Reviews,
    FilmCompany,
    Cost,
    ReleaseYear,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Title => "Title",
            SortKey::Reviews => "Review Average",
            SortKey::FilmCompany => "Film Company",
            SortKey::Cost => "Cost",
            SortKey::ReleaseYear => "Release Year",
        }
    }
}

/// The (order, key) pair driving the table sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub order: SortOrder,
    pub order_by: SortKey,
}

impl Default for SortState {
    fn default() -> Self {
        Self {
            order: SortOrder::Ascending,
            order_by: SortKey::Title,
        }
    }
}

impl SortState {
    /// Clicking the active column while ascending flips to descending;
    /// anything else starts an ascending sort on the clicked column.
    pub fn toggle(self, key: SortKey) -> Self {
        let order =
            if self.order_by == key && self.order == SortOrder::Ascending {
                SortOrder::Descending
            } else {
                SortOrder::Ascending
            };
        Self {
            order,
            order_by: key,
        }
    }
}

/// Arithmetic mean of a movie's review scores. NaN when there are no
/// reviews, which `total_cmp` orders after every real mean.
pub fn review_average(reviews: &[f64]) -> f64 {
    reviews.iter().sum::<f64>() / reviews.len() as f64
}

/// Three-way ordering function for the given sort state. The reviews
/// column compares by average score rather than the raw list.
pub fn comparator(state: SortState) -> impl Fn(&Movie, &Movie) -> Ordering {
    move |a, b| {
        let ordering = match state.order_by {
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Reviews => review_average(&a.reviews)
                .total_cmp(&review_average(&b.reviews)),
            SortKey::FilmCompany => {
                a.film_company_id.0.cmp(&b.film_company_id.0)
            }
            SortKey::Cost => a.cost.total_cmp(&b.cost),
            SortKey::ReleaseYear => a.release_year.cmp(&b.release_year),
        };
        match state.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

/// Returns the rows in sorted order, leaving the fetched data untouched.
pub fn sorted_rows(rows: &[Movie], state: SortState) -> Vec<Movie> {
    let mut sorted = rows.to_vec();
    sorted.sort_by(comparator(state));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::{CompanyId, MovieId};

    fn movie(id: &str, title: &str, reviews: &[f64]) -> Movie {
        // Derive the remaining fields from the numeric id so every
        // sortable column has distinct values.
        let n: u32 = id.parse().unwrap();
        Movie {
            id: MovieId(id.to_string()),
            title: title.to_string(),
            reviews: reviews.to_vec(),
            film_company_id: CompanyId(id.to_string()),
            cost: 100.0 * n as f64,
            release_year: 2000 + n,
        }
    }

    fn titles(rows: &[Movie]) -> Vec<&str> {
        rows.iter().map(|row| row.title.as_str()).collect()
    }

    #[test]
    fn sorts_reviews_by_average() {
        // mean 4 vs mean 3: the lower mean sorts first ascending even
        // though its individual scores straddle the other's.
        let rows = vec![movie("1", "A", &[4.0, 4.0, 4.0]), movie(
            "2",
            "B",
            &[1.0, 5.0],
        )];
        let state = SortState {
            order: SortOrder::Ascending,
            order_by: SortKey::Reviews,
        };
        assert_eq!(titles(&sorted_rows(&rows, state)), vec!["B", "A"]);
    }

    #[test]
    fn review_scenario_matches_expected_order() {
        let rows =
            vec![movie("1", "A", &[2.0, 4.0]), movie("2", "B", &[10.0])];

        let asc = SortState {
            order: SortOrder::Ascending,
            order_by: SortKey::Reviews,
        };
        assert_eq!(titles(&sorted_rows(&rows, asc)), vec!["A", "B"]);

        let desc = SortState {
            order: SortOrder::Descending,
            order_by: SortKey::Reviews,
        };
        assert_eq!(titles(&sorted_rows(&rows, desc)), vec!["B", "A"]);
    }

    #[test]
    fn descending_reverses_ascending() {
        let rows = vec![
            movie("1", "Carol", &[3.0]),
            movie("2", "Alfie", &[5.0]),
            movie("3", "Blade", &[1.0]),
        ];
        for order_by in [
            SortKey::Title,
            SortKey::Reviews,
            SortKey::FilmCompany,
            SortKey::Cost,
            SortKey::ReleaseYear,
        ] {
            let asc = sorted_rows(&rows, SortState {
                order: SortOrder::Ascending,
                order_by,
            });
            let mut desc = sorted_rows(&rows, SortState {
                order: SortOrder::Descending,
                order_by,
            });
            desc.reverse();
            assert_eq!(titles(&asc), titles(&desc));
        }
    }

    #[test]
    fn empty_reviews_order_last_ascending() {
        let rows = vec![movie("1", "A", &[]), movie("2", "B", &[9.5])];
        let state = SortState {
            order: SortOrder::Ascending,
            order_by: SortKey::Reviews,
        };
        assert_eq!(titles(&sorted_rows(&rows, state)), vec!["B", "A"]);
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let rows = vec![movie("1", "B", &[2.0]), movie("2", "A", &[1.0])];
        let state = SortState {
            order: SortOrder::Ascending,
            order_by: SortKey::Title,
        };
        let sorted = sorted_rows(&rows, state);
        assert_eq!(titles(&sorted), vec!["A", "B"]);
        assert_eq!(titles(&rows), vec!["B", "A"]);
    }

    #[test]
    fn toggle_flips_then_resets() {
        let initial = SortState::default();
        assert_eq!(initial.order_by, SortKey::Title);
        assert_eq!(initial.order, SortOrder::Ascending);

        let flipped = initial.toggle(SortKey::Title);
        assert_eq!(flipped.order, SortOrder::Descending);
        assert_eq!(flipped.order_by, SortKey::Title);

        // Toggling a descending column starts over ascending.
        let again = flipped.toggle(SortKey::Title);
        assert_eq!(again.order, SortOrder::Ascending);

        // Switching columns always starts ascending.
        let other = flipped.toggle(SortKey::Cost);
        assert_eq!(other.order, SortOrder::Ascending);
        assert_eq!(other.order_by, SortKey::Cost);
    }
}
