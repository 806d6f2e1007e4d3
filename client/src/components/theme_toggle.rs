//! Light/dark toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::storage::BrowserStorage;
use crate::util::theme_dom;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    let on_toggle = move |_| {
        if let Some(mode) = theme.try_update(|t| t.toggle(&BrowserStorage)) {
            theme_dom::apply(mode);
        }
    };

    view! {
        <button class="btn theme-toggle" on:click=on_toggle title="Toggle dark mode">
            {move || theme.get().mode().toggle_icon()}
        </button>
    }
}
