//! Email + password login page.
//!
//! Credentials are sent as typed; there is no client-side validation and a
//! failed attempt is only logged. Success persists the token and moves to
//! the course list.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api::{self, ApiConfig};
use crate::net::error::ApiError;
use crate::net::types::Credentials;
use crate::state::session::SessionState;
use crate::util::storage::{BrowserStorage, KeyValueStore};

/// Route the login page leads to.
pub const COURSES_PATH: &str = "/courses";

/// Settle an authentication attempt.
///
/// Returns `true` when the token was stored and the caller should navigate
/// to [`COURSES_PATH`].
pub fn complete_login(
    session: &mut SessionState,
    store: &impl KeyValueStore,
    result: Result<String, ApiError>,
) -> bool {
    match result {
        Ok(token) => {
            session.store_token(store, token);
            true
        }
        Err(e) => {
            leptos::logging::error!("Login failed: {e}");
            false
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let navigate = use_navigate();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let config = config.get_value();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = api::authenticate(&config, &credentials).await;
            let signed_in = session
                .try_update(|s| complete_login(s, &BrowserStorage, result))
                .unwrap_or(false);
            if signed_in {
                navigate(COURSES_PATH, NavigateOptions::default());
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit">
                        "Login"
                    </button>
                </form>
            </div>
        </div>
    }
}
