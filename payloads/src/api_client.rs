use reqwest::StatusCode;
use serde::Serialize;

use crate::{requests, responses};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the catalog backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch the full movie catalog.
    pub async fn list_movies(
        &self,
    ) -> Result<Vec<responses::Movie>, ClientError> {
        let response = self.empty_get("movies").await?;
        ok_body(response).await
    }

    /// Fetch the film companies referenced by the catalog.
    pub async fn list_movie_companies(
        &self,
    ) -> Result<Vec<responses::MovieCompany>, ClientError> {
        let response = self.empty_get("movieCompanies").await?;
        ok_body(response).await
    }

    /// Submit a review, returning the server's acknowledgement message.
    pub async fn submit_review(
        &self,
        details: &requests::SubmitReview,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("submitReview", details).await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}
