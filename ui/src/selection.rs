//! Row selection state for the movie table.

use payloads::MovieId;
use payloads::responses::Movie;

/// The currently selected table row. `id` is `None` when nothing is
/// selected, with `title` holding the placeholder shown by the review
/// section.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedRow {
    pub id: Option<MovieId>,
    pub title: String,
}

impl Default for SelectedRow {
    fn default() -> Self {
        Self {
            id: None,
            title: "No Movie Selected".to_string(),
        }
    }
}

impl SelectedRow {
    pub fn is_selected(&self, id: &MovieId) -> bool {
        self.id.as_ref() == Some(id)
    }

    /// Clicking the selected row again deselects it. An id not present in
    /// `rows` also resets to the no-selection placeholder, never a
    /// partially populated selection.
    pub fn select(&self, rows: &[Movie], id: &MovieId) -> Self {
        if self.is_selected(id) {
            return Self::default();
        }
        match rows.iter().find(|row| &row.id == id) {
            Some(row) => Self {
                id: Some(row.id.clone()),
                title: row.title.clone(),
            },
            None => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use payloads::CompanyId;

    fn movie(id: &str, title: &str) -> Movie {
        Movie {
            id: MovieId(id.to_string()),
            title: title.to_string(),
            reviews: vec![5.0],
            film_company_id: CompanyId("1".to_string()),
            cost: 100.0,
            release_year: 2000,
        }
    }

    #[test]
    fn selecting_a_row_carries_its_title() {
        let rows = vec![movie("1", "A"), movie("2", "B")];
        let selected =
            SelectedRow::default().select(&rows, &MovieId("2".to_string()));
        assert_eq!(selected.id, Some(MovieId("2".to_string())));
        assert_eq!(selected.title, "B");
    }

    #[test]
    fn selecting_twice_toggles_back_to_none() {
        let rows = vec![movie("1", "A")];
        let id = MovieId("1".to_string());
        let first = SelectedRow::default().select(&rows, &id);
        assert!(first.is_selected(&id));

        let second = first.select(&rows, &id);
        assert_eq!(second, SelectedRow::default());
    }

    #[test]
    fn selecting_a_missing_id_resets_to_none() {
        let rows = vec![movie("1", "A")];
        let selected = SelectedRow::default()
            .select(&rows, &MovieId("missing".to_string()));
        assert_eq!(selected, SelectedRow::default());
        assert_eq!(selected.title, "No Movie Selected");
    }
}
