use serde::{Deserialize, Serialize};

/// A review of the currently selected movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitReview {
    pub review: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_review_wire_format() {
        let body = SubmitReview {
            review: "Great movie!".to_string(),
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"review":"Great movie!"}"#
        );
    }
}
