//! Contact Form Component
//!
//! Posts the form data to the configured endpoint and swaps in a success
//! message without leaving the page. Failures show a dismissable inline
//! error and re-enable submission.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::Deserialize;
use wasm_bindgen::JsCast;

use crate::config::SiteConfig;

const SUBMIT_ERROR_TEXT: &str = "Something went wrong. Please try again or email directly.";

/// Response shape the form endpoint returns
#[derive(Debug, Deserialize)]
struct SubmitResponse {
    #[serde(default)]
    success: bool,
}

async fn submit(endpoint: &str, form_data: web_sys::FormData) -> bool {
    let request = match gloo_net::http::Request::post(endpoint).body(form_data) {
        Ok(request) => request,
        Err(_) => return false,
    };
    let response = match request.send().await {
        Ok(response) => response,
        Err(_) => return false,
    };
    match response.json::<SubmitResponse>().await {
        Ok(parsed) => parsed.success,
        Err(_) => false,
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    // StoredValue is Copy, which keeps the submit handler reusable across
    // re-renders of the surrounding Show
    let endpoint = StoredValue::new(config.contact_endpoint);

    let (sending, set_sending) = signal(false);
    let (submitted, set_submitted) = signal(false);
    let (failed, set_failed) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let form = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlFormElement>().ok());
        let Some(form) = form else { return };
        let Ok(form_data) = web_sys::FormData::new_with_form(&form) else {
            return;
        };
        let endpoint = endpoint.get_value();

        set_failed.set(false);
        set_sending.set(true);
        spawn_local(async move {
            let ok = match endpoint {
                Some(endpoint) => submit(&endpoint, form_data).await,
                None => false,
            };
            set_sending.set(false);
            if ok {
                set_submitted.set(true);
            } else {
                set_failed.set(true);
            }
        });
    };

    view! {
        <div class="contact">
            <Show when=move || !submitted.get()>
                <form class="contact-form" on:submit=on_submit>
                    <label>
                        "Name"
                        <input type="text" name="name" required />
                    </label>
                    <label>
                        "Email"
                        <input type="email" name="email" required />
                    </label>
                    <label>
                        "Message"
                        <textarea name="message" rows="6" required></textarea>
                    </label>
                    <button type="submit" class="submit-btn" disabled=move || sending.get()>
                        {move || if sending.get() { "Sending..." } else { "Submit" }}
                    </button>
                </form>
                <Show when=move || failed.get()>
                    <p class="form-error" role="alert">
                        {SUBMIT_ERROR_TEXT}
                        <button
                            type="button"
                            class="form-error-dismiss"
                            aria-label="Dismiss"
                            on:click=move |_| set_failed.set(false)
                        >
                            "×"
                        </button>
                    </p>
                </Show>
            </Show>
            <Show when=move || submitted.get()>
                <p class="form-success">"Thanks for reaching out! I'll get back to you soon."</p>
            </Show>
        </div>
    }
}
