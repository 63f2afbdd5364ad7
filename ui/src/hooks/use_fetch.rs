use std::future::Future;
use std::rc::Rc;

use yew::prelude::*;

use super::FetchState;

/// Generic fetch hook return type
pub struct FetchHookReturn<T> {
    pub data: FetchState<T>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub refetch: Callback<()>,
}

/// Generic fetch hook composer.
///
/// Automatically fetches on mount and whenever `deps` changes, and
/// exposes manual refetch. Overlapping requests are resolved by tagging
/// each with a monotonic generation counter; only the latest
/// generation's response is applied, so a slow stale response can never
/// overwrite a newer one.
///
/// On failure only `error` is set: `data` keeps whatever the last
/// successful fetch produced.
///
/// # Example
///
/// ```ignore
/// #[hook]
/// pub fn use_movies() -> FetchHookReturn<Vec<responses::Movie>> {
///     use_fetch((), || async move {
///         let api_client = get_api_client();
///         api_client.list_movies().await.map_err(|e| e.to_string())
///     })
/// }
/// ```
#[hook]
pub fn use_fetch<T, D, F, Fut>(deps: D, fetch_fn: F) -> FetchHookReturn<T>
where
    T: Clone + 'static,
    D: PartialEq + Clone + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T, String>> + 'static,
{
    let data = use_state(|| FetchState::NotFetched);
    let error = use_state(|| None::<String>);
    let is_loading = use_state(|| false);
    let generation = use_mut_ref(|| 0u64);

    let refetch = {
        let data = data.clone();
        let error = error.clone();
        let is_loading = is_loading.clone();
        let generation = generation.clone();
        let fetch_fn = Rc::new(fetch_fn);

        use_callback(deps.clone(), move |_, _| {
            let data = data.clone();
            let error = error.clone();
            let is_loading = is_loading.clone();
            let generation = generation.clone();
            let fetch_fn = fetch_fn.clone();

            let this_generation = {
                let mut current = generation.borrow_mut();
                *current += 1;
                *current
            };

            yew::platform::spawn_local(async move {
                is_loading.set(true);
                error.set(None);

                let result = fetch_fn().await;

                // A newer request superseded this one; drop the response
                // and let the newer request settle the loading flag.
                if *generation.borrow() != this_generation {
                    return;
                }

                match result {
                    Ok(fetched) => {
                        data.set(FetchState::Fetched(fetched));
                        error.set(None);
                    }
                    Err(e) => {
                        tracing::warn!("fetch failed: {e}");
                        error.set(Some(e));
                    }
                }

                is_loading.set(false);
            });
        })
    };

    // Auto-fetch on mount and when deps change
    {
        let refetch = refetch.clone();
        let is_loading_clone = is_loading.clone();

        use_effect_with(deps, move |_| {
            if !*is_loading_clone {
                refetch.emit(());
            }
        });
    }

    FetchHookReturn {
        data: (*data).clone(),
        is_loading: *is_loading,
        error: (*error).clone(),
        refetch: Callback::from(move |_| refetch.emit(())),
    }
}
