use super::*;
use crate::net::api::HttpMethod;
use crate::net::course_form::{COVER_FILE_PART, ID_PART};

fn fetched_course() -> Course {
    Course {
        id: 42,
        slug: "rust-101".to_owned(),
        title: "Rust 101".to_owned(),
        cover_file: Some(CoverFile::Remote("https://cdn.example.com/rust.png".to_owned())),
        cover_image: Some("https://cdn.example.com/rust-thumb.png".to_owned()),
        item_specifications: vec![ItemSpecification { value: "12 hours".to_owned() }],
        ..Course::default()
    }
}

fn png() -> PendingFile {
    PendingFile {
        name: "cover.png".to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![1, 2, 3],
    }
}

// =============================================================
// Mode transitions
// =============================================================

#[test]
fn default_draft_is_empty_and_idle() {
    let draft = DraftState::default();
    assert_eq!(draft.course, Course::default());
    assert!(!draft.is_editing);
    assert!(!draft.create_open);
    assert_eq!(draft.mode(), SaveMode::Create);
}

#[test]
fn begin_edit_populates_draft_and_enters_edit_mode() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    assert!(draft.is_editing);
    assert_eq!(draft.course.id, 42);
    assert_eq!(draft.mode(), SaveMode::Update);
    assert!(!draft.can_open_create());
}

#[test]
fn create_dialog_is_unavailable_while_editing() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    draft.open_create();
    assert!(!draft.create_open);
}

#[test]
fn begin_edit_closes_create_dialog() {
    let mut draft = DraftState::default();
    draft.open_create();
    draft.begin_edit(fetched_course());
    assert!(draft.is_editing);
    assert!(!draft.create_open);
}

#[test]
fn cancel_edit_resets_to_empty_draft() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    draft.cancel_edit();
    assert_eq!(draft, DraftState::default());
}

#[test]
fn open_then_close_create_leaves_state_untouched() {
    let mut draft = DraftState::default();
    draft.open_create();
    assert!(draft.create_open);
    draft.set_field(CourseField::Title, "Half typed");
    draft.close_create();
    assert_eq!(draft, DraftState::default());
}

// =============================================================
// Field edits
// =============================================================

#[test]
fn text_fields_take_raw_input() {
    let mut draft = DraftState::default();
    assert!(draft.set_field(CourseField::Slug, "go-201"));
    assert!(draft.set_field(CourseField::Title, "Go 201"));
    assert!(draft.set_field(CourseField::ShortDescription, "Short"));
    assert!(draft.set_field(CourseField::Description, "  Long  "));
    assert_eq!(draft.course.slug, "go-201");
    assert_eq!(draft.course.title, "Go 201");
    assert_eq!(draft.course.short_description, "Short");
    assert_eq!(draft.course.description, "  Long  ");
}

#[test]
fn numeric_fields_parse_input() {
    let mut draft = DraftState::default();
    assert!(draft.set_field(CourseField::Price, "19.99"));
    assert!(draft.set_field(CourseField::Discount, "5"));
    assert!(draft.set_field(CourseField::ExpireYear, "2027"));
    assert!(draft.set_field(CourseField::ExpireMonth, "12"));
    assert!(draft.set_field(CourseField::ExpireDay, "31"));
    assert!((draft.course.price - 19.99).abs() < f64::EPSILON);
    assert!((draft.course.discount - 5.0).abs() < f64::EPSILON);
    assert_eq!(draft.course.expire_year, 2027);
    assert_eq!(draft.course.expire_month, 12);
    assert_eq!(draft.course.expire_day, 31);
}

#[test]
fn cleared_numeric_input_becomes_zero() {
    let mut draft = DraftState::default();
    draft.set_field(CourseField::Price, "10");
    assert!(draft.set_field(CourseField::Price, ""));
    assert!(draft.course.price.abs() < f64::EPSILON);
}

#[test]
fn unparseable_numeric_input_is_ignored() {
    let mut draft = DraftState::default();
    draft.set_field(CourseField::ExpireYear, "2026");
    assert!(!draft.set_field(CourseField::ExpireYear, "20x6"));
    assert!(!draft.set_field(CourseField::Price, "NaN"));
    assert_eq!(draft.course.expire_year, 2026);
}

#[test]
fn partial_numeric_input_is_shown_as_typed() {
    let mut draft = DraftState::default();
    draft.set_field(CourseField::Discount, "5");
    assert!(!draft.set_field(CourseField::Discount, "-"));
    assert_eq!(draft.field_text(CourseField::Discount), "-");
    assert!((draft.course.discount - 5.0).abs() < f64::EPSILON);

    assert!(draft.set_field(CourseField::Price, "1."));
    assert_eq!(draft.field_text(CourseField::Price), "1.");
    assert!((draft.course.price - 1.0).abs() < f64::EPSILON);

    assert!(draft.set_field(CourseField::Price, "1.5"));
    assert_eq!(draft.field_text(CourseField::Price), "1.5");
}

#[test]
fn cleared_numeric_input_stays_blank() {
    let mut draft = DraftState::default();
    draft.set_field(CourseField::ExpireYear, "2026");
    draft.set_field(CourseField::ExpireYear, "");
    assert_eq!(draft.field_text(CourseField::ExpireYear), "");
    assert_eq!(draft.course.expire_year, 0);
}

#[test]
fn loading_a_record_discards_typed_text() {
    let mut draft = DraftState::default();
    draft.open_create();
    draft.set_field(CourseField::Price, "9.");
    draft.begin_edit(Course { price: 25.0, ..fetched_course() });
    assert_eq!(draft.field_text(CourseField::Price), "25");
    assert_eq!(draft.field_text(CourseField::Title), "Rust 101");

    draft.set_field(CourseField::Price, "3.");
    draft.cancel_edit();
    assert_eq!(draft.field_text(CourseField::Price), "0");
}

#[test]
fn field_display_matches_record() {
    let mut draft = DraftState::default();
    draft.set_field(CourseField::Price, "12.5");
    draft.set_field(CourseField::Title, "T");
    assert_eq!(CourseField::Price.display(&draft.course), "12.5");
    assert_eq!(CourseField::Title.display(&draft.course), "T");
    assert_eq!(CourseField::ExpireDay.display(&draft.course), "0");
}

#[test]
fn field_metadata_is_consistent() {
    assert_eq!(CourseField::FORM_ORDER.len(), 9);
    assert_eq!(CourseField::ShortDescription.name(), "shortDescription");
    assert_eq!(CourseField::Price.input_type(), "number");
    assert_eq!(CourseField::ExpireMonth.input_type(), "number");
    assert_eq!(CourseField::Slug.input_type(), "text");
}

#[test]
fn category_is_limited_to_fixed_set() {
    let mut draft = DraftState::default();
    assert!(draft.set_category(6));
    assert_eq!(draft.course.category_id, 6);
    assert!(!draft.set_category(7));
    assert!(!draft.set_category(0));
    assert_eq!(draft.course.category_id, 6);
    assert!(draft.set_category_input("2"));
    assert!(!draft.set_category_input("two"));
    assert_eq!(draft.course.category_id, 2);
}

#[test]
fn free_flag_is_not_reconciled_with_price() {
    let mut draft = DraftState::default();
    draft.set_field(CourseField::Price, "30");
    draft.set_free(true);
    assert!(draft.course.is_free);
    assert!((draft.course.price - 30.0).abs() < f64::EPSILON);
}

#[test]
fn picking_a_file_replaces_remote_cover() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    assert_eq!(draft.pending_cover_name(), None);
    draft.set_cover(png());
    assert_eq!(draft.pending_cover_name(), Some("cover.png"));
    assert_eq!(draft.course.cover_image.as_deref(), Some("https://cdn.example.com/rust-thumb.png"));
}

#[test]
fn specification_rows_can_be_edited() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    draft.add_specification();
    assert!(draft.set_specification(1, "Certificate"));
    assert!(!draft.set_specification(5, "nope"));
    assert_eq!(
        draft.course.item_specifications.iter().map(|s| s.value.as_str()).collect::<Vec<_>>(),
        vec!["12 hours", "Certificate"]
    );
    assert!(draft.remove_specification(0));
    assert!(!draft.remove_specification(3));
    assert_eq!(draft.course.item_specifications[0].value, "Certificate");
}

// =============================================================
// Submission
// =============================================================

#[test]
fn create_submission_posts_without_id() {
    let mut draft = DraftState::default();
    draft.open_create();
    draft.set_field(CourseField::Title, "New");
    let submission = draft.submission().unwrap();
    assert_eq!(submission.method(), HttpMethod::Post);
    assert!(!submission.has_part(ID_PART));
    assert_eq!(submission.text("title"), Some("New"));
}

#[test]
fn update_submission_puts_with_draft_id() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    let submission = draft.submission().unwrap();
    assert_eq!(submission.method(), HttpMethod::Put);
    assert_eq!(submission.text(ID_PART), Some("42"));
}

#[test]
fn edited_record_with_remote_cover_sends_no_file() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    let submission = draft.submission().unwrap();
    assert!(!submission.has_part(COVER_FILE_PART));
}

#[test]
fn edited_record_with_new_file_sends_it() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    draft.set_cover(png());
    let submission = draft.submission().unwrap();
    assert_eq!(submission.file(), Some(&png()));
}

#[test]
fn successful_save_resets_and_requests_refetch() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    assert!(draft.finish_save(&Ok(())));
    assert_eq!(draft, DraftState::default());

    draft.open_create();
    assert!(draft.finish_save(&Ok(())));
    assert!(!draft.create_open);
}

#[test]
fn failed_save_keeps_draft() {
    let mut draft = DraftState::default();
    draft.begin_edit(fetched_course());
    let before = draft.clone();
    assert!(!draft.finish_save(&Err(ApiError::Status { status: 400 })));
    assert_eq!(draft, before);
}
