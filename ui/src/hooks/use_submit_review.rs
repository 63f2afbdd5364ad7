use payloads::requests;
use yew::prelude::*;

use crate::get_api_client;

/// Return type of [`use_submit_review`].
pub struct SubmitReviewHookReturn {
    pub submit: Callback<String>,
    pub is_submitting: bool,
    pub error: Option<String>,
}

/// Posts a review to the backend.
///
/// The server's acknowledgement message is delivered through
/// `on_success`; failures surface as a form-level error instead of
/// propagating to the caller. `is_submitting` resets on completion
/// either way.
#[hook]
pub fn use_submit_review(
    on_success: Callback<String>,
) -> SubmitReviewHookReturn {
    let is_submitting = use_state(|| false);
    let error = use_state(|| None::<String>);

    let submit = {
        let is_submitting = is_submitting.clone();
        let error = error.clone();

        use_callback(on_success, move |review: String, on_success| {
            let is_submitting = is_submitting.clone();
            let error = error.clone();
            let on_success = on_success.clone();

            yew::platform::spawn_local(async move {
                is_submitting.set(true);
                error.set(None);

                let api_client = get_api_client();
                let request = requests::SubmitReview { review };
                match api_client.submit_review(&request).await {
                    Ok(response) => {
                        on_success.emit(response.message);
                    }
                    Err(e) => {
                        tracing::warn!("review submission failed: {e}");
                        error.set(Some("Submission Error".to_string()));
                    }
                }

                is_submitting.set(false);
            });
        })
    };

    SubmitReviewHookReturn {
        submit,
        is_submitting: *is_submitting,
        error: (*error).clone(),
    }
}
