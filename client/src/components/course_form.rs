//! Course form shared by the inline edit panel and the create dialog.
//!
//! Both presentations render [`CourseFields`] over the one page-owned
//! `RwSignal<DraftState>` and call the same `on_save` callback; the draft's
//! mode decides POST or PUT.

use leptos::prelude::*;

use crate::net::types::COURSE_CATEGORIES;
use crate::state::draft::{CourseField, DraftState};

/// Every editable input of the draft course.
#[component]
pub fn CourseFields(draft: RwSignal<DraftState>) -> impl IntoView {
    let text_inputs = CourseField::FORM_ORDER
        .into_iter()
        .map(|field| {
            view! {
                <label class="dialog__label">
                    {field.name()}
                    <input
                        class="dialog__input"
                        type=field.input_type()
                        name=field.name()
                        prop:value=move || draft.with(|d| d.field_text(field))
                        on:input=move |ev| {
                            let raw = event_target_value(&ev);
                            draft.update(|d| {
                                d.set_field(field, &raw);
                            });
                        }
                    />
                </label>
            }
        })
        .collect::<Vec<_>>();

    let category_options = COURSE_CATEGORIES
        .into_iter()
        .map(|category| {
            view! {
                <option
                    value=category.to_string()
                    prop:selected=move || draft.with(|d| d.course.category_id == category)
                >
                    {format!("Category {category}")}
                </option>
            }
        })
        .collect::<Vec<_>>();

    let on_cover_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let Some(raw) = crate::util::browser::selected_file(&ev) else {
                return;
            };
            leptos::task::spawn_local(async move {
                match crate::util::browser::read_pending_file(raw).await {
                    Ok(file) => draft.update(|d| d.set_cover(file)),
                    Err(e) => leptos::logging::error!("Error reading cover file: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = ev;
    };

    // Keyed on the row count only, so typing in a row does not rebuild it.
    let spec_count = Memo::new(move |_| draft.with(|d| d.course.item_specifications.len()));

    view! {
        <div class="course-form__fields">
            {text_inputs}
            <label class="dialog__label">
                "categoryId"
                <select
                    class="dialog__input"
                    name="categoryId"
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        draft.update(|d| {
                            d.set_category_input(&raw);
                        });
                    }
                >
                    {category_options}
                </select>
            </label>
            <label class="dialog__label dialog__label--inline">
                <input
                    type="checkbox"
                    name="isFree"
                    prop:checked=move || draft.with(|d| d.course.is_free)
                    on:change=move |ev| draft.update(|d| d.set_free(event_target_checked(&ev)))
                />
                "Is Free"
            </label>
            <label class="dialog__label">
                "coverFile"
                <input class="dialog__input" type="file" name="coverFile" accept="image/*" on:change=on_cover_change/>
                <span class="course-form__file-name">
                    {move || draft.with(|d| d.pending_cover_name().map(str::to_owned))}
                </span>
            </label>
            <fieldset class="course-form__specs">
                <legend>"itemSpecifications"</legend>
                {move || {
                    (0..spec_count.get())
                        .map(|index| {
                            view! {
                                <div class="course-form__spec">
                                    <input
                                        class="dialog__input"
                                        type="text"
                                        prop:value=move || {
                                            draft
                                                .with(|d| {
                                                    d.course
                                                        .item_specifications
                                                        .get(index)
                                                        .map(|s| s.value.clone())
                                                        .unwrap_or_default()
                                                })
                                        }
                                        on:input=move |ev| {
                                            let raw = event_target_value(&ev);
                                            draft.update(|d| {
                                                d.set_specification(index, &raw);
                                            });
                                        }
                                    />
                                    <button
                                        type="button"
                                        class="btn"
                                        on:click=move |_| draft.update(|d| {
                                            d.remove_specification(index);
                                        })
                                    >
                                        "Remove"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <button type="button" class="btn" on:click=move |_| draft.update(DraftState::add_specification)>
                    "Add specification"
                </button>
            </fieldset>
        </div>
    }
}

/// Inline panel shown while editing a fetched course.
#[component]
pub fn CourseEditPanel(draft: RwSignal<DraftState>, on_save: Callback<()>) -> impl IntoView {
    view! {
        <section class="course-edit">
            <h2>"Update Course"</h2>
            <form
                class="course-form"
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_save.run(());
                }
            >
                <CourseFields draft=draft/>
                <div class="dialog__actions">
                    <button class="btn btn--primary" type="submit">
                        "Update Course"
                    </button>
                    <button class="btn" type="button" on:click=move |_| draft.update(DraftState::cancel_edit)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </section>
    }
}

/// Modal for creating a new course.
#[component]
pub fn CourseCreateDialog(draft: RwSignal<DraftState>, on_save: Callback<()>) -> impl IntoView {
    let on_cancel = move |_| draft.update(DraftState::close_create);

    view! {
        <div class="dialog-backdrop" on:click=on_cancel>
            <div class="dialog course-create" on:click=move |ev| ev.stop_propagation()>
                <h2>"Add a New Course"</h2>
                <form
                    class="course-form"
                    on:submit=move |ev: leptos::ev::SubmitEvent| {
                        ev.prevent_default();
                        on_save.run(());
                    }
                >
                    <CourseFields draft=draft/>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=on_cancel>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Add Course"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
