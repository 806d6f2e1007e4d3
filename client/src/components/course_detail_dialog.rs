//! Read-only course detail modal.

use leptos::prelude::*;

use crate::net::types::Course;

const NO_DESCRIPTION: &str = "No description available.";

#[component]
pub fn CourseDetailDialog(course: Course, on_close: Callback<()>) -> impl IntoView {
    let description = if course.description.is_empty() {
        NO_DESCRIPTION.to_owned()
    } else {
        course.description.clone()
    };
    let category = format!("Category: {}", course.category_id);
    let price = format!("Price: {}", course.price_label());
    let rating = course.rating_label();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog course-detail" on:click=move |ev| ev.stop_propagation()>
                <header class="course-detail__header">
                    <h2>{course.title}</h2>
                    <button class="btn course-detail__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </header>
                <h3>"Full Description"</h3>
                <p class="course-detail__description">{description}</p>
                <div class="course-detail__meta">
                    <span>{category}</span>
                    <span>{price}</span>
                </div>
                <p class="course-detail__rating">{rating}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
