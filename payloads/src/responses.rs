use crate::{CompanyId, MovieId};
use serde::{Deserialize, Serialize};

/// One movie record as returned by the catalog backend.
///
/// The backend serves camelCase field names; `reviews` holds the
/// individual scores and is read-only on the client, with the displayed
/// average derived at render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub reviews: Vec<f64>,
    pub film_company_id: CompanyId,
    pub cost: f64,
    pub release_year: u32,
}

/// A film company referenced by `Movie::film_company_id`. The reference
/// is not enforced; an unmatched id simply renders as absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCompany {
    pub id: CompanyId,
    pub name: String,
}

/// Server acknowledgement carrying a human-readable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuccessMessage {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movie_deserializes_from_backend_json() {
        let json = r#"{
            "id": "1",
            "reviews": [6, 8, 3, 9, 8, 7, 8],
            "title": "A Testing Of Movies",
            "filmCompanyId": "2",
            "cost": 534,
            "releaseYear": 2005
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.id, MovieId("1".to_string()));
        assert_eq!(movie.title, "A Testing Of Movies");
        assert_eq!(movie.film_company_id, CompanyId("2".to_string()));
        assert_eq!(movie.reviews.len(), 7);
        assert_eq!(movie.cost, 534.0);
        assert_eq!(movie.release_year, 2005);
    }

    #[test]
    fn movie_company_deserializes_from_backend_json() {
        let json = r#"[{"id": "1", "name": "Test Productions"}]"#;
        let companies: Vec<MovieCompany> =
            serde_json::from_str(json).unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].name, "Test Productions");
    }
}
