//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::theme_toggle::ThemeToggle;
use crate::net::api::ApiConfig;
use crate::pages::{courses::CoursesPage, login::LoginPage};
use crate::state::{session::SessionState, theme::ThemeState};
use crate::util::storage::BrowserStorage;
use crate::util::theme_dom;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session, theme and API config contexts and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::load(&BrowserStorage));
    // Starts light so the server render and first hydration pass agree; the
    // persisted choice is applied once mounted.
    let theme = RwSignal::new(ThemeState::default());

    provide_context(session);
    provide_context(theme);
    provide_context(ApiConfig::from_build_env());

    Effect::new(move || {
        let loaded = ThemeState::load(&BrowserStorage);
        theme_dom::apply(loaded.mode());
        theme.set(loaded);
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/course-admin.css"/>
        <Title text="Course Admin"/>

        <Router>
            <header class="app-header">
                <span class="app-header__title">"Course Admin"</span>
                <ThemeToggle/>
            </header>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=LoginPage/>
                    <Route path=StaticSegment("courses") view=CoursesPage/>
                </Routes>
            </main>
        </Router>
    }
}
