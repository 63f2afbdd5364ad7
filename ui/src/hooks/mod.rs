pub mod use_fetch;
pub mod use_movie_companies;
pub mod use_movies;
pub mod use_submit_review;

pub use use_fetch::{FetchHookReturn, use_fetch};
pub use use_movie_companies::use_movie_companies;
pub use use_movies::use_movies;
pub use use_submit_review::{SubmitReviewHookReturn, use_submit_review};

/// Distinguishes "never fetched" from "fetched but possibly empty".
///
/// Failed fetches leave the previous value in place, so a refetch error
/// never blanks out data that is already on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState<T> {
    #[default]
    NotFetched,
    Fetched(T),
}

impl<T> FetchState<T> {
    pub fn as_ref(&self) -> Option<&T> {
        match self {
            FetchState::NotFetched => None,
            FetchState::Fetched(data) => Some(data),
        }
    }
}
