use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Disabled while either fetch is in flight.
    pub is_loading: bool,
    pub on_refresh: Callback<()>,
}

#[function_component]
pub fn RefreshButton(props: &Props) -> Html {
    let onclick = {
        let on_refresh = props.on_refresh.clone();
        Callback::from(move |_: MouseEvent| on_refresh.emit(()))
    };

    html! {
        <button
            class="px-4 py-2 rounded-md bg-neutral-900 text-white \
                   dark:bg-neutral-100 dark:text-neutral-900 \
                   disabled:opacity-50"
            disabled={props.is_loading}
            {onclick}
        >
            {"Refresh"}
        </button>
    }
}
