use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Fetches the film companies once on mount; refetch is manual.
#[hook]
pub fn use_movie_companies() -> FetchHookReturn<Vec<responses::MovieCompany>>
{
    use_fetch((), || async move {
        let api_client = get_api_client();
        api_client
            .list_movie_companies()
            .await
            .map_err(|e| e.to_string())
    })
}
