//! Wire DTOs shared by the course list, the course form, and the REST API.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. `Course` is also the
//! in-memory draft record, so it carries client-only state (a pending
//! `cover_file`); outgoing records are encoded by `course_form`, not serde.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Closed set of category identifiers the form offers.
pub const COURSE_CATEGORIES: [i64; 6] = [1, 2, 3, 4, 5, 6];

/// A course as listed, fetched, and edited.
///
/// `id == 0` marks a draft that has not been saved yet.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(default, deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub slug: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub short_description: String,
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub description: String,
    #[serde(default = "default_category", deserialize_with = "deserialize_i64_from_number")]
    pub category_id: i64,
    #[serde(default, deserialize_with = "deserialize_f64_from_number")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_f64_from_number")]
    pub discount: f64,
    #[serde(default, deserialize_with = "deserialize_bool_or_null")]
    pub is_free: bool,
    /// Pending upload or echoed server URL.
    #[serde(default, deserialize_with = "deserialize_cover_file")]
    pub cover_file: Option<CoverFile>,
    #[serde(default, deserialize_with = "deserialize_i32_from_number")]
    pub expire_year: i32,
    #[serde(default, deserialize_with = "deserialize_i32_from_number")]
    pub expire_month: i32,
    #[serde(default, deserialize_with = "deserialize_i32_from_number")]
    pub expire_day: i32,
    #[serde(default, deserialize_with = "deserialize_specifications")]
    pub item_specifications: Vec<ItemSpecification>,
    /// Server-supplied display URL; only present on fetched records.
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Display-only rating.
    #[serde(default, deserialize_with = "deserialize_rate")]
    pub rate: Option<f64>,
}

impl Default for Course {
    fn default() -> Self {
        Self {
            id: 0,
            slug: String::new(),
            title: String::new(),
            short_description: String::new(),
            description: String::new(),
            category_id: default_category(),
            price: 0.0,
            discount: 0.0,
            is_free: false,
            cover_file: None,
            expire_year: 0,
            expire_month: 0,
            expire_day: 0,
            item_specifications: Vec::new(),
            cover_image: None,
            rate: None,
        }
    }
}

impl Course {
    /// Rating label used by cards and the detail dialog.
    pub fn rating_label(&self) -> String {
        match self.rate {
            Some(rate) => format!("Rating: {rate}★"),
            None => "Rating: No rating★".to_owned(),
        }
    }

    /// Price label used by cards and the detail dialog.
    pub fn price_label(&self) -> String {
        format!("${}", self.price)
    }
}

fn default_category() -> i64 {
    COURSE_CATEGORIES[0]
}

/// One free-form attribute line of a course.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSpecification {
    #[serde(default, deserialize_with = "deserialize_string_or_null")]
    pub value: String,
}

/// The cover attachment slot of a draft.
#[derive(Clone, Debug, PartialEq)]
pub enum CoverFile {
    /// A file picked locally and not uploaded yet.
    Pending(PendingFile),
    /// A URL string echoed back by the server.
    Remote(String),
}

impl CoverFile {
    pub fn pending(&self) -> Option<&PendingFile> {
        match self {
            Self::Pending(file) => Some(file),
            Self::Remote(_) => None,
        }
    }
}

/// In-memory copy of a locally chosen file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// `GET /courses` envelope.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct CourseCollection {
    #[serde(default, deserialize_with = "deserialize_course_list")]
    pub data: Vec<Course>,
}

/// `POST /users/authenticate` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /users/authenticate` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    pub token: String,
}

fn deserialize_string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_bool_or_null<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_cover_file<'de, D>(deserializer: D) -> Result<Option<CoverFile>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.is_empty()).map(CoverFile::Remote))
}

fn deserialize_specifications<'de, D>(deserializer: D) -> Result<Vec<ItemSpecification>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ItemSpecification>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A non-array `data` payload is treated as an empty collection.
fn deserialize_course_list<'de, D>(deserializer: D) -> Result<Vec<Course>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Array(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(Vec::new()),
    }
}

fn deserialize_rate<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(raw) => raw.trim().parse::<f64>().ok(),
        _ => None,
    })
}

fn deserialize_f64_from_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| D::Error::custom("expected finite number")),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| D::Error::custom(format!("expected numeric string, got {raw:?}"))),
        serde_json::Value::Null => Ok(0.0),
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_i32_from_number<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = deserialize_i64_from_number(deserializer)?;
    i32::try_from(value).map_err(|_| D::Error::custom(format!("value {value} out of range for i32")))
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| D::Error::custom(format!("expected integer string, got {raw:?}"))),
        serde_json::Value::Null => Ok(0),
        _ => Err(D::Error::custom("expected number")),
    }
}
