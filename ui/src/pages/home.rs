use payloads::MovieId;
use yew::prelude::*;

use crate::components::{MovieTable, RefreshButton, ReviewForm};
use crate::hooks::{use_movie_companies, use_movies};
use crate::selection::SelectedRow;
use crate::sorting::{SortKey, SortState};

/// The catalog page: movie table, refresh control and review form.
#[function_component]
pub fn HomePage() -> Html {
    let movies = use_movies();
    let companies = use_movie_companies();

    let selected = use_state(SelectedRow::default);
    let sort = use_state(SortState::default);
    let success_message = use_state(|| None::<String>);

    let on_sort = {
        let sort = sort.clone();
        Callback::from(move |key: SortKey| sort.set((*sort).toggle(key)))
    };

    let on_row_click = {
        let selected = selected.clone();
        let success_message = success_message.clone();
        let rows = movies.data.clone();

        Callback::from(move |id: MovieId| {
            success_message.set(None);
            let rows = rows.as_ref().map(Vec::as_slice).unwrap_or(&[]);
            selected.set(selected.select(rows, &id));
        })
    };

    let on_refresh = {
        let selected = selected.clone();
        let sort = sort.clone();
        let success_message = success_message.clone();
        let refetch_movies = movies.refetch.clone();
        let refetch_companies = companies.refetch.clone();

        Callback::from(move |_| {
            selected.set(SelectedRow::default());
            sort.set(SortState::default());
            success_message.set(None);
            refetch_movies.emit(());
            refetch_companies.emit(());
        })
    };

    let set_success_message = {
        let success_message = success_message.clone();
        Callback::from(move |message: Option<String>| {
            success_message.set(message);
        })
    };

    let fetch_error = movies.error.is_some() || companies.error.is_some();
    let is_loading = movies.is_loading || companies.is_loading;

    let movie_count = if fetch_error {
        "N/A".to_string()
    } else {
        movies.data.as_ref().map(Vec::len).unwrap_or(0).to_string()
    };

    html! {
        <main class="max-w-5xl mx-auto px-4 py-8">
            <h2 class="text-3xl font-bold mb-6">
                {"Welcome to Movie database!"}
            </h2>
            <div class="flex items-center justify-between mb-4">
                <h3 class="text-xl">
                    { format!("Total movies displayed: {movie_count}") }
                </h3>
                <RefreshButton {is_loading} on_refresh={on_refresh} />
            </div>

            {if fetch_error {
                html! {
                    <p class="text-red-700 dark:text-red-400">
                        {"Error fetching data!"}
                    </p>
                }
            } else if is_loading {
                html! {
                    <p class="text-neutral-600 dark:text-neutral-400">
                        {"Fetching table..."}
                    </p>
                }
            } else {
                html! {
                    <MovieTable
                        rows={movies.data.as_ref().cloned().unwrap_or_default()}
                        companies={companies.data.as_ref().cloned().unwrap_or_default()}
                        selected={(*selected).id.clone()}
                        sort={*sort}
                        on_sort={on_sort}
                        on_row_click={on_row_click}
                    />
                }
            }}

            <ReviewForm
                selected={(*selected).clone()}
                success_message={(*success_message).clone()}
                set_success_message={set_success_message}
            />
        </main>
    }
}
