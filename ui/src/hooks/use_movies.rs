use payloads::responses;
use yew::prelude::*;

use crate::get_api_client;
use crate::hooks::{FetchHookReturn, use_fetch};

/// Fetches the movie catalog once on mount; refetch is manual.
#[hook]
pub fn use_movies() -> FetchHookReturn<Vec<responses::Movie>> {
    use_fetch((), || async move {
        let api_client = get_api_client();
        api_client.list_movies().await.map_err(|e| e.to_string())
    })
}
