//! Multipart serialization of a draft course.
//!
//! DESIGN
//! ======
//! The part list is built as plain data so create/update payloads can be
//! asserted without a browser; `api::send` turns it into `FormData`.
//!
//! Part order mirrors the record layout. `ItemSpecifications` is one JSON
//! text part, `CoverFile` only appears for a freshly picked file, and `Id`
//! only appears when updating.

#[cfg(test)]
#[path = "course_form_test.rs"]
mod course_form_test;

use super::api::HttpMethod;
use super::error::ApiError;
use super::types::{Course, CoverFile, PendingFile};

pub const ID_PART: &str = "Id";
pub const COVER_FILE_PART: &str = "CoverFile";
pub const SPECIFICATIONS_PART: &str = "ItemSpecifications";

/// Whether a submission creates a new course or updates an existing one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveMode {
    Create,
    Update,
}

impl SaveMode {
    pub fn from_editing(is_editing: bool) -> Self {
        if is_editing { Self::Update } else { Self::Create }
    }

    pub fn method(self) -> HttpMethod {
        match self {
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
        }
    }
}

/// A single multipart entry.
#[derive(Clone, Debug, PartialEq)]
pub enum FormPart {
    Text { name: String, value: String },
    File { name: String, file: PendingFile },
}

impl FormPart {
    fn text(name: &str, value: impl ToString) -> Self {
        Self::Text { name: name.to_owned(), value: value.to_string() }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. } | Self::File { name, .. } => name,
        }
    }
}

/// Ready-to-send course payload.
#[derive(Clone, Debug, PartialEq)]
pub struct CourseSubmission {
    pub mode: SaveMode,
    pub parts: Vec<FormPart>,
}

impl CourseSubmission {
    /// Serialize every submitted field of `course` for `mode`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Encode` if the specification list cannot be
    /// rendered as JSON.
    pub fn build(course: &Course, mode: SaveMode) -> Result<Self, ApiError> {
        let specifications =
            serde_json::to_string(&course.item_specifications).map_err(|e| ApiError::Encode(e.to_string()))?;

        let mut parts = vec![
            FormPart::text("id", course.id),
            FormPart::text("slug", &course.slug),
            FormPart::text("title", &course.title),
            FormPart::text("shortDescription", &course.short_description),
            FormPart::text("description", &course.description),
            FormPart::text("categoryId", course.category_id),
            FormPart::text("price", course.price),
            FormPart::text("discount", course.discount),
            FormPart::text("isFree", course.is_free),
            FormPart::text("expireYear", course.expire_year),
            FormPart::text("expireMonth", course.expire_month),
            FormPart::text("expireDay", course.expire_day),
            FormPart::text(SPECIFICATIONS_PART, specifications),
        ];

        if let Some(url) = &course.cover_image {
            parts.push(FormPart::text("coverImage", url));
        }
        if let Some(CoverFile::Pending(file)) = &course.cover_file {
            parts.push(FormPart::File { name: COVER_FILE_PART.to_owned(), file: file.clone() });
        }
        if mode == SaveMode::Update {
            parts.push(FormPart::text(ID_PART, course.id));
        }

        Ok(Self { mode, parts })
    }

    pub fn method(&self) -> HttpMethod {
        self.mode.method()
    }

    /// Value of the first text part called `name`.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.parts.iter().find_map(|part| match part {
            FormPart::Text { name: n, value } if n == name => Some(value.as_str()),
            _ => None,
        })
    }

    /// The attached cover file, if any.
    pub fn file(&self) -> Option<&PendingFile> {
        self.parts.iter().find_map(|part| match part {
            FormPart::File { file, .. } => Some(file),
            FormPart::Text { .. } => None,
        })
    }

    pub fn has_part(&self, name: &str) -> bool {
        self.parts.iter().any(|part| part.name() == name)
    }
}
