use super::*;
use crate::net::types::ItemSpecification;

fn sample_course() -> Course {
    Course {
        id: 42,
        slug: "rust-101".to_owned(),
        title: "Rust 101".to_owned(),
        short_description: "Intro".to_owned(),
        description: "Ownership".to_owned(),
        category_id: 4,
        price: 49.5,
        discount: 5.0,
        is_free: false,
        cover_file: None,
        expire_year: 2027,
        expire_month: 6,
        expire_day: 30,
        item_specifications: vec![
            ItemSpecification { value: "12 hours".to_owned() },
            ItemSpecification { value: "Certificate".to_owned() },
        ],
        cover_image: None,
        rate: Some(4.0),
    }
}

fn pending_file() -> PendingFile {
    PendingFile {
        name: "cover.png".to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![0x89, 0x50, 0x4e, 0x47],
    }
}

// =============================================================
// Mode
// =============================================================

#[test]
fn save_mode_selects_verb() {
    assert_eq!(SaveMode::from_editing(false), SaveMode::Create);
    assert_eq!(SaveMode::from_editing(true), SaveMode::Update);
    assert_eq!(SaveMode::Create.method(), HttpMethod::Post);
    assert_eq!(SaveMode::Update.method(), HttpMethod::Put);
}

#[test]
fn create_submission_has_no_id_part() {
    let submission = CourseSubmission::build(&Course::default(), SaveMode::Create).unwrap();
    assert_eq!(submission.method(), HttpMethod::Post);
    assert!(!submission.has_part(ID_PART));
}

#[test]
fn update_submission_appends_id_matching_draft() {
    let submission = CourseSubmission::build(&sample_course(), SaveMode::Update).unwrap();
    assert_eq!(submission.method(), HttpMethod::Put);
    assert_eq!(submission.text(ID_PART), Some("42"));
    assert_eq!(submission.parts.last().map(FormPart::name), Some(ID_PART));
}

// =============================================================
// Field serialization
// =============================================================

#[test]
fn scalar_fields_are_stringified() {
    let submission = CourseSubmission::build(&sample_course(), SaveMode::Update).unwrap();
    assert_eq!(submission.text("slug"), Some("rust-101"));
    assert_eq!(submission.text("title"), Some("Rust 101"));
    assert_eq!(submission.text("shortDescription"), Some("Intro"));
    assert_eq!(submission.text("description"), Some("Ownership"));
    assert_eq!(submission.text("categoryId"), Some("4"));
    assert_eq!(submission.text("price"), Some("49.5"));
    assert_eq!(submission.text("discount"), Some("5"));
    assert_eq!(submission.text("isFree"), Some("false"));
    assert_eq!(submission.text("expireYear"), Some("2027"));
    assert_eq!(submission.text("expireMonth"), Some("6"));
    assert_eq!(submission.text("expireDay"), Some("30"));
}

#[test]
fn specifications_are_a_single_json_part() {
    let submission = CourseSubmission::build(&sample_course(), SaveMode::Create).unwrap();
    let count = submission.parts.iter().filter(|p| p.name() == SPECIFICATIONS_PART).count();
    assert_eq!(count, 1);
    let decoded: serde_json::Value = serde_json::from_str(submission.text(SPECIFICATIONS_PART).unwrap()).unwrap();
    assert_eq!(decoded, serde_json::json!([{ "value": "12 hours" }, { "value": "Certificate" }]));
}

#[test]
fn empty_specifications_serialize_as_empty_array() {
    let submission = CourseSubmission::build(&Course::default(), SaveMode::Create).unwrap();
    assert_eq!(submission.text(SPECIFICATIONS_PART), Some("[]"));
}

#[test]
fn rate_is_never_submitted() {
    let submission = CourseSubmission::build(&sample_course(), SaveMode::Update).unwrap();
    assert!(!submission.has_part("rate"));
}

#[test]
fn free_course_keeps_its_price() {
    let course = Course { is_free: true, price: 30.0, ..sample_course() };
    let submission = CourseSubmission::build(&course, SaveMode::Update).unwrap();
    assert_eq!(submission.text("isFree"), Some("true"));
    assert_eq!(submission.text("price"), Some("30"));
}

// =============================================================
// Cover attachment
// =============================================================

#[test]
fn pending_cover_is_attached_as_file_part() {
    let course = Course { cover_file: Some(CoverFile::Pending(pending_file())), ..sample_course() };
    let submission = CourseSubmission::build(&course, SaveMode::Create).unwrap();
    assert_eq!(submission.file(), Some(&pending_file()));
    assert!(submission.has_part(COVER_FILE_PART));
    assert!(submission.text(COVER_FILE_PART).is_none());
}

#[test]
fn remote_cover_url_omits_file_part() {
    let course = Course {
        cover_file: Some(CoverFile::Remote("https://cdn.example.com/a.png".to_owned())),
        ..sample_course()
    };
    let submission = CourseSubmission::build(&course, SaveMode::Update).unwrap();
    assert!(submission.file().is_none());
    assert!(!submission.has_part(COVER_FILE_PART));
}

#[test]
fn absent_cover_omits_file_part() {
    let submission = CourseSubmission::build(&sample_course(), SaveMode::Create).unwrap();
    assert!(submission.file().is_none());
}

#[test]
fn existing_cover_image_url_is_echoed() {
    let course = Course { cover_image: Some("https://cdn.example.com/t.png".to_owned()), ..sample_course() };
    let submission = CourseSubmission::build(&course, SaveMode::Update).unwrap();
    assert_eq!(submission.text("coverImage"), Some("https://cdn.example.com/t.png"));
}
