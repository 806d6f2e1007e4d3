//! The single draft course shared by the inline edit panel and the create
//! dialog.
//!
//! DESIGN
//! ======
//! Exactly one `DraftState` lives in the courses page. `is_editing` selects
//! the inline panel, `create_open` the modal; the two are never true
//! together. Both presentations mutate the same record through the methods
//! below and submit through one handler parameterized by `SaveMode`.
//!
//! Numeric inputs keep the text as typed next to the parsed value, so
//! partial entries like `-` or `1.` are not overwritten while editing. The
//! record always holds the last value that parsed.
//!
//! `is_free` is not reconciled with `price`/`discount`.

#[cfg(test)]
#[path = "draft_test.rs"]
mod draft_test;

use std::collections::BTreeMap;

use crate::net::course_form::{CourseSubmission, SaveMode};
use crate::net::error::ApiError;
use crate::net::types::{COURSE_CATEGORIES, Course, CoverFile, ItemSpecification, PendingFile};

/// Free-text and numeric inputs rendered by the course form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum CourseField {
    Slug,
    Title,
    ShortDescription,
    Description,
    Price,
    Discount,
    ExpireYear,
    ExpireMonth,
    ExpireDay,
}

impl CourseField {
    pub const FORM_ORDER: [Self; 9] = [
        Self::Slug,
        Self::Title,
        Self::ShortDescription,
        Self::Description,
        Self::Price,
        Self::Discount,
        Self::ExpireYear,
        Self::ExpireMonth,
        Self::ExpireDay,
    ];

    /// Record key, also used as the input label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Slug => "slug",
            Self::Title => "title",
            Self::ShortDescription => "shortDescription",
            Self::Description => "description",
            Self::Price => "price",
            Self::Discount => "discount",
            Self::ExpireYear => "expireYear",
            Self::ExpireMonth => "expireMonth",
            Self::ExpireDay => "expireDay",
        }
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Self::Slug | Self::Title | Self::ShortDescription | Self::Description)
    }

    pub fn input_type(self) -> &'static str {
        if self.is_numeric() { "number" } else { "text" }
    }

    /// Current value of this field in `course`, as shown in the input.
    pub fn display(self, course: &Course) -> String {
        match self {
            Self::Slug => course.slug.clone(),
            Self::Title => course.title.clone(),
            Self::ShortDescription => course.short_description.clone(),
            Self::Description => course.description.clone(),
            Self::Price => course.price.to_string(),
            Self::Discount => course.discount.to_string(),
            Self::ExpireYear => course.expire_year.to_string(),
            Self::ExpireMonth => course.expire_month.to_string(),
            Self::ExpireDay => course.expire_day.to_string(),
        }
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0.0);
    }
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_integer(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Some(0);
    }
    raw.parse::<i32>().ok()
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DraftState {
    pub course: Course,
    pub is_editing: bool,
    pub create_open: bool,
    /// Raw text of numeric inputs edited since the record was loaded.
    numeric_text: BTreeMap<CourseField, String>,
}

impl DraftState {
    pub fn mode(&self) -> SaveMode {
        SaveMode::from_editing(self.is_editing)
    }

    /// Whether the floating "add" affordance is offered.
    pub fn can_open_create(&self) -> bool {
        !self.is_editing
    }

    /// Show the create dialog over the current (empty) draft.
    pub fn open_create(&mut self) {
        if self.can_open_create() {
            self.create_open = true;
        }
    }

    /// Dismiss the create dialog and discard the draft.
    pub fn close_create(&mut self) {
        self.create_open = false;
        self.reset();
    }

    /// Load an authoritative record into the inline edit panel.
    pub fn begin_edit(&mut self, course: Course) {
        self.create_open = false;
        self.course = course;
        self.numeric_text.clear();
        self.is_editing = true;
    }

    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    /// Back to the empty draft, out of edit mode.
    pub fn reset(&mut self) {
        self.course = Course::default();
        self.numeric_text.clear();
        self.is_editing = false;
    }

    /// Apply raw input text to `field`.
    ///
    /// Numeric fields accept an empty string as zero and keep their previous
    /// value when the text does not parse. Returns whether the draft changed.
    pub fn set_field(&mut self, field: CourseField, raw: &str) -> bool {
        if field.is_numeric() {
            self.numeric_text.insert(field, raw.to_owned());
        }
        let course = &mut self.course;
        match field {
            CourseField::Slug => course.slug = raw.to_owned(),
            CourseField::Title => course.title = raw.to_owned(),
            CourseField::ShortDescription => course.short_description = raw.to_owned(),
            CourseField::Description => course.description = raw.to_owned(),
            CourseField::Price => match parse_decimal(raw) {
                Some(v) => course.price = v,
                None => return false,
            },
            CourseField::Discount => match parse_decimal(raw) {
                Some(v) => course.discount = v,
                None => return false,
            },
            CourseField::ExpireYear => match parse_integer(raw) {
                Some(v) => course.expire_year = v,
                None => return false,
            },
            CourseField::ExpireMonth => match parse_integer(raw) {
                Some(v) => course.expire_month = v,
                None => return false,
            },
            CourseField::ExpireDay => match parse_integer(raw) {
                Some(v) => course.expire_day = v,
                None => return false,
            },
        }
        true
    }

    /// Text shown in the input for `field`: what was typed for numeric
    /// fields, otherwise the record value.
    pub fn field_text(&self, field: CourseField) -> String {
        match self.numeric_text.get(&field) {
            Some(raw) => raw.clone(),
            None => field.display(&self.course),
        }
    }

    /// Select a category; identifiers outside the fixed set are ignored.
    pub fn set_category(&mut self, category_id: i64) -> bool {
        if COURSE_CATEGORIES.contains(&category_id) {
            self.course.category_id = category_id;
            true
        } else {
            false
        }
    }

    /// `set_category` from a `<select>` value.
    pub fn set_category_input(&mut self, raw: &str) -> bool {
        raw.trim().parse::<i64>().is_ok_and(|id| self.set_category(id))
    }

    pub fn set_free(&mut self, is_free: bool) {
        self.course.is_free = is_free;
    }

    /// Replace the cover slot with a freshly picked file.
    pub fn set_cover(&mut self, file: PendingFile) {
        self.course.cover_file = Some(CoverFile::Pending(file));
    }

    /// Name of the pending upload, if one was picked.
    pub fn pending_cover_name(&self) -> Option<&str> {
        self.course
            .cover_file
            .as_ref()
            .and_then(CoverFile::pending)
            .map(|file| file.name.as_str())
    }

    pub fn add_specification(&mut self) {
        self.course.item_specifications.push(ItemSpecification::default());
    }

    pub fn set_specification(&mut self, index: usize, value: &str) -> bool {
        match self.course.item_specifications.get_mut(index) {
            Some(spec) => {
                spec.value = value.to_owned();
                true
            }
            None => false,
        }
    }

    pub fn remove_specification(&mut self, index: usize) -> bool {
        if index < self.course.item_specifications.len() {
            self.course.item_specifications.remove(index);
            true
        } else {
            false
        }
    }

    /// Multipart payload for the current draft and mode.
    ///
    /// # Errors
    ///
    /// Propagates `ApiError::Encode` from the payload builder.
    pub fn submission(&self) -> Result<CourseSubmission, ApiError> {
        CourseSubmission::build(&self.course, self.mode())
    }

    /// Settle a save. Success resets the draft, leaves edit mode, and closes
    /// the create dialog; failure is logged and keeps the draft.
    ///
    /// Returns `true` when the course list must be re-fetched.
    pub fn finish_save(&mut self, result: &Result<(), ApiError>) -> bool {
        match result {
            Ok(()) => {
                self.create_open = false;
                self.reset();
                true
            }
            Err(e) => {
                leptos::logging::error!("Error creating/updating course: {e}");
                false
            }
        }
    }
}
