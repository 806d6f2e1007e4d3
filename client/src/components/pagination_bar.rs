//! Page selector for the in-memory course list.

use leptos::prelude::*;

use crate::state::courses::CoursesState;

#[component]
pub fn PaginationBar(state: RwSignal<CoursesState>) -> impl IntoView {
    let page_count = Memo::new(move |_| state.with(CoursesState::page_count));
    let current = Memo::new(move |_| state.with(|s| s.page));

    view! {
        <nav class="pagination" aria-label="Course pages">
            {move || {
                (1..=page_count.get())
                    .map(|page| {
                        view! {
                            <button
                                class="pagination__page"
                                class:pagination__page--active=move || current.get() == page
                                on:click=move |_| state.update(|s| s.set_page(page))
                            >
                                {page}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}
