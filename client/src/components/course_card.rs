//! Card for one course in the list grid.

use leptos::prelude::*;

use crate::net::types::Course;
use crate::state::courses::CourseAction;

/// A clickable course summary with update and delete actions.
///
/// Clicking the card body opens the detail dialog; the action buttons stop
/// propagation so they never open it.
#[component]
pub fn CourseCard(
    course: Course,
    on_open: Callback<Course>,
    on_action: Callback<(i64, CourseAction)>,
) -> impl IntoView {
    let id = course.id;
    let cover = course.cover_image.clone().unwrap_or_default();
    let title = course.title.clone();
    let alt = course.title.clone();
    let summary = course.short_description.clone();
    let category = course.category_id.to_string();
    let price = course.price_label();
    let rating = course.rating_label();

    view! {
        <article class="course-card" on:click=move |_| on_open.run(course.clone())>
            <img class="course-card__cover" src=cover alt=alt/>
            <div class="course-card__body">
                <h3 class="course-card__title">{title}</h3>
                <p class="course-card__summary">{summary}</p>
                <div class="course-card__meta">
                    <span class="course-card__category">{category}</span>
                    <span class="course-card__price">{price}</span>
                </div>
                <p class="course-card__rating">{rating}</p>
            </div>
            <div class="course-card__actions">
                <button
                    class="btn"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_action.run((id, CourseAction::Edit));
                    }
                >
                    "Update"
                </button>
                <button
                    class="btn btn--danger"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.stop_propagation();
                        on_action.run((id, CourseAction::Delete));
                    }
                >
                    "Delete"
                </button>
            </div>
        </article>
    }
}
