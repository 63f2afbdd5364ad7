use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::hooks::use_submit_review;
use crate::selection::SelectedRow;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub selected: SelectedRow,
    /// Server acknowledgement from the last successful submission.
    pub success_message: Option<String>,
    pub set_success_message: Callback<Option<String>>,
}

/// Builds the acknowledgement callback for a submission. The draft is
/// cleared only here, on the success path; a failed submission keeps the
/// user's text alongside the form error.
fn success_callback(
    clear_draft: Callback<()>,
    set_success_message: Callback<Option<String>>,
) -> Callback<String> {
    Callback::from(move |message: String| {
        clear_draft.emit(());
        set_success_message.emit(Some(message));
    })
}

#[function_component]
pub fn ReviewForm(props: &Props) -> Html {
    let review_input = use_state(String::new);
    let validation_error = use_state(|| None::<String>);

    let submission = use_submit_review(success_callback(
        {
            let review_input = review_input.clone();
            Callback::from(move |_| review_input.set(String::new()))
        },
        props.set_success_message.clone(),
    ));

    let on_input = {
        let review_input = review_input.clone();
        let validation_error = validation_error.clone();

        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            review_input.set(input.value());
            validation_error.set(None);
        })
    };

    let on_submit = {
        let review_input = review_input.clone();
        let validation_error = validation_error.clone();
        let set_success_message = props.set_success_message.clone();
        let submit = submission.submit.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let review = (*review_input).clone();
            if review.trim().is_empty() {
                validation_error
                    .set(Some("Please enter a review".to_string()));
                return;
            }

            // Clear any stale acknowledgement before posting.
            set_success_message.emit(None);
            submit.emit(review);
        })
    };

    let no_selection = props.selected.id.is_none();
    let form_error =
        (*validation_error).clone().or_else(|| submission.error.clone());

    html! {
        <div class="mt-8 space-y-3">
            <h3 class="text-lg font-semibold">
                { format!("Submit a review for: {}", props.selected.title) }
            </h3>
            {if let Some(message) = &props.success_message {
                html! {
                    <p class="text-green-700 dark:text-green-400">
                        {message}
                    </p>
                }
            } else {
                html! {}
            }}
            <form onsubmit={on_submit} class="space-y-3">
                <textarea
                    class="w-full p-2 rounded-md border border-neutral-300 \
                           dark:border-neutral-700 dark:bg-neutral-900"
                    rows="3"
                    placeholder="Write your review..."
                    value={(*review_input).clone()}
                    oninput={on_input}
                    disabled={no_selection}
                />
                {if let Some(error) = form_error {
                    html! {
                        <p class="text-sm text-red-700 dark:text-red-400">
                            {error}
                        </p>
                    }
                } else {
                    html! {}
                }}
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md bg-neutral-900 text-white \
                           dark:bg-neutral-100 dark:text-neutral-900 \
                           disabled:opacity-50"
                    disabled={submission.is_submitting || no_selection}
                >
                    {if submission.is_submitting {
                        "Submitting..."
                    } else {
                        "Submit Review"
                    }}
                </button>
            </form>
        </div>
    }
}
