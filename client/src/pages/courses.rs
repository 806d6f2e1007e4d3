//! Course list page: paged grid, detail dialog, edit panel and create modal.
//!
//! ARCHITECTURE
//! ============
//! The page owns one `RwSignal<CoursesState>` and one `RwSignal<DraftState>`.
//! Every mutation that reaches the server is followed by a full re-fetch of
//! the collection; nothing is patched locally. Requests are not guarded, so
//! repeated clicks may overlap and the last response to land wins.
//!
//! While the list is loading or failed, the status text replaces all
//! content: grid, dialogs, edit panel and the add button.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::course_detail_dialog::CourseDetailDialog;
use crate::components::course_form::{CourseCreateDialog, CourseEditPanel};
use crate::components::pagination_bar::PaginationBar;
use crate::net::api::{self, ApiConfig};
use crate::net::types::Course;
use crate::state::courses::{ActionOutcome, CourseAction, CoursesState, delete_outcome, edit_outcome};
use crate::state::draft::DraftState;
use crate::state::session::SessionState;
use crate::util::browser;

const LOADING_TEXT: &str = "Loading...";

/// Apply a settled card action to the draft.
///
/// Returns `true` when the collection must be re-fetched.
pub fn apply_outcome(draft: &mut DraftState, outcome: ActionOutcome) -> bool {
    match outcome {
        ActionOutcome::Edit(course) => {
            draft.begin_edit(course);
            false
        }
        ActionOutcome::Refetch => true,
        ActionOutcome::Alert(message) => {
            browser::alert(&message);
            false
        }
    }
}

#[component]
pub fn CoursesPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let courses = RwSignal::new(CoursesState::default());
    let draft = RwSignal::new(DraftState::default());

    let token = move || session.with_untracked(|s| s.token().map(str::to_owned));

    let refetch = Callback::new(move |()| {
        courses.update(CoursesState::begin_load);
        let config = config.get_value();
        let token = token();
        leptos::task::spawn_local(async move {
            let result = api::fetch_courses(&config, token.as_deref()).await;
            courses.update(|s| s.finish_load(result));
        });
    });

    Effect::new(move || {
        if session.with_untracked(CoursesState::should_fetch_on_mount) {
            refetch.run(());
        }
    });

    let on_open = Callback::new(move |course: Course| courses.update(|s| s.open_detail(course)));
    let on_close = Callback::new(move |()| courses.update(CoursesState::close_detail));

    let on_action = Callback::new(move |(id, action): (i64, CourseAction)| {
        let config = config.get_value();
        let token = token();
        leptos::task::spawn_local(async move {
            let outcome = match action {
                CourseAction::Edit => edit_outcome(api::fetch_course(&config, token.as_deref(), id).await),
                CourseAction::Delete => delete_outcome(api::delete_course(&config, token.as_deref(), id).await),
            };
            if draft.try_update(|d| apply_outcome(d, outcome)).unwrap_or(false) {
                refetch.run(());
            }
        });
    });

    let on_save = Callback::new(move |()| {
        let submission = match draft.with_untracked(DraftState::submission) {
            Ok(submission) => submission,
            Err(e) => {
                leptos::logging::error!("Error creating/updating course: {e}");
                return;
            }
        };
        let config = config.get_value();
        let token = token();
        leptos::task::spawn_local(async move {
            let result = api::save_course(&config, token.as_deref(), submission).await;
            if draft.try_update(|d| d.finish_save(&result)).unwrap_or(false) {
                refetch.run(());
            }
        });
    });

    view! {
        <div class="courses-page">
            <Show when=move || !courses.with(CoursesState::is_loading) fallback=|| view! { <p class="courses-page__status">{LOADING_TEXT}</p> }>
                <Show
                    when=move || courses.with(CoursesState::shows_content)
                    fallback=move || {
                        view! {
                            <p class="courses-page__error">
                                {move || courses.with(|s| s.error().unwrap_or_default().to_owned())}
                            </p>
                        }
                    }
                >
                    <div class="courses-page__grid">
                        {move || {
                            courses
                                .with(|s| {
                                    s.visible()
                                        .iter()
                                        .cloned()
                                        .map(|course| view! { <CourseCard course=course on_open=on_open on_action=on_action/> })
                                        .collect::<Vec<_>>()
                                })
                        }}
                    </div>
                    <PaginationBar state=courses/>

                    {move || {
                        courses
                            .with(|s| s.detail.clone())
                            .map(|course| view! { <CourseDetailDialog course=course on_close=on_close/> })
                    }}

                    <Show when=move || draft.with(|d| d.is_editing)>
                        <CourseEditPanel draft=draft on_save=on_save/>
                    </Show>

                    <Show when=move || draft.with(DraftState::can_open_create)>
                        <button
                            class="btn btn--primary courses-page__add"
                            title="Add course"
                            on:click=move |_| draft.update(DraftState::open_create)
                        >
                            "+"
                        </button>
                    </Show>

                    <Show when=move || draft.with(|d| d.create_open)>
                        <CourseCreateDialog draft=draft on_save=on_save/>
                    </Show>
                </Show>
            </Show>
        </div>
    }
}
