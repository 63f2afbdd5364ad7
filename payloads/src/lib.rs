use derive_more::Display;
use serde::{Deserialize, Serialize};

mod api_client;
pub mod requests;
pub mod responses;

pub use api_client::{APIClient, ClientError, ok_body};

/// Identifier of a movie record. Opaque string assigned by the backend.
#[derive(
    Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct MovieId(pub String);

/// Identifier of a film company.
#[derive(
    Debug, Display, Clone, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct CompanyId(pub String);
