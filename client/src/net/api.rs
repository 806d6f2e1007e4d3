//! REST API helpers for the course backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `send` returns `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! DESIGN
//! ======
//! Every call is split into a pure `*_request` builder producing an
//! `ApiRequest` value and the shared `send` executor. Builders and response
//! decoders are unit-tested; `send` is the only browser-bound piece.
//!
//! ERROR HANDLING
//! ==============
//! Calls are fire-once: no retry, no timeout, no token refresh. Any failure
//! comes back as an `ApiError` for the caller to log or surface.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::course_form::{CourseSubmission, FormPart};
use super::error::ApiError;
use super::types::{AuthResponse, Course, CourseCollection, Credentials};

pub const DEFAULT_API_BASE_URL: &str = "https://stapiadmn.mathyoucan.com";

/// Location of the external course API, provided as context from the root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Base URL baked in at build time via `COURSE_API_BASE_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("COURSE_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    Empty,
    Json(serde_json::Value),
    Multipart(Vec<FormPart>),
}

/// A fully described HTTP call, ready for `send`.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub url: String,
    /// Complete `Authorization` header value, when a token is known.
    pub authorization: Option<String>,
    pub body: RequestBody,
}

fn bearer(token: Option<&str>) -> Option<String> {
    token.map(|t| format!("Bearer {t}"))
}

fn course_endpoint(id: i64) -> String {
    format!("/courses/{id}")
}

/// `POST /users/authenticate` with a JSON credentials body.
///
/// # Errors
///
/// Returns `ApiError::Encode` if the credentials cannot be serialized.
pub fn authenticate_request(config: &ApiConfig, credentials: &Credentials) -> Result<ApiRequest, ApiError> {
    let body = serde_json::to_value(credentials).map_err(|e| ApiError::Encode(e.to_string()))?;
    Ok(ApiRequest {
        method: HttpMethod::Post,
        url: config.url("/users/authenticate"),
        authorization: None,
        body: RequestBody::Json(body),
    })
}

/// `GET /courses`.
pub fn list_courses_request(config: &ApiConfig, token: Option<&str>) -> ApiRequest {
    ApiRequest {
        method: HttpMethod::Get,
        url: config.url("/courses"),
        authorization: bearer(token),
        body: RequestBody::Empty,
    }
}

/// `GET /courses/{id}`.
pub fn course_request(config: &ApiConfig, token: Option<&str>, id: i64) -> ApiRequest {
    ApiRequest {
        method: HttpMethod::Get,
        url: config.url(&course_endpoint(id)),
        authorization: bearer(token),
        body: RequestBody::Empty,
    }
}

/// `DELETE /courses/{id}`.
pub fn delete_course_request(config: &ApiConfig, token: Option<&str>, id: i64) -> ApiRequest {
    ApiRequest {
        method: HttpMethod::Delete,
        url: config.url(&course_endpoint(id)),
        authorization: bearer(token),
        body: RequestBody::Empty,
    }
}

/// `POST /courses` (create) or `PUT /courses` (update) with a multipart body.
pub fn save_course_request(config: &ApiConfig, token: Option<&str>, submission: CourseSubmission) -> ApiRequest {
    ApiRequest {
        method: submission.method(),
        url: config.url("/courses"),
        authorization: bearer(token),
        body: RequestBody::Multipart(submission.parts),
    }
}

/// Decode the login response into its token.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not `{ "token": ... }`.
pub fn decode_token(body: &str) -> Result<String, ApiError> {
    let resp: AuthResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(resp.token)
}

/// Decode `{ data: Course[] }`; a non-array `data` yields an empty list.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not a JSON object.
pub fn decode_collection(body: &str) -> Result<Vec<Course>, ApiError> {
    let collection: CourseCollection = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(collection.data)
}

/// Decode a single course record.
///
/// # Errors
///
/// Returns `ApiError::Decode` when the body is not a course object.
pub fn decode_course(body: &str) -> Result<Course, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Execute `request` and return the raw response text of a 2xx response.
///
/// # Errors
///
/// Returns `Network` when no response arrives, `Status` for non-2xx,
/// `Encode` when the body cannot be built, and `Unavailable` off-browser.
pub async fn send(request: ApiRequest) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let mut builder = match request.method {
            HttpMethod::Get => Request::get(&request.url),
            HttpMethod::Post => Request::post(&request.url),
            HttpMethod::Put => Request::put(&request.url),
            HttpMethod::Delete => Request::delete(&request.url),
        };
        if let Some(authorization) = &request.authorization {
            builder = builder.header("Authorization", authorization);
        }
        let prepared = match request.body {
            RequestBody::Empty => builder.build(),
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(parts) => builder.body(form_data(&parts)?),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;

        let resp = prepared.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
        ApiError::check_status(resp.status())?;
        resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
fn form_data(parts: &[FormPart]) -> Result<web_sys::FormData, ApiError> {
    let encode = |e: wasm_bindgen::JsValue| ApiError::Encode(format!("{e:?}"));
    let form = web_sys::FormData::new().map_err(encode)?;
    for part in parts {
        match part {
            FormPart::Text { name, value } => form.append_with_str(name, value).map_err(encode)?,
            FormPart::File { name, file } => {
                let blob = gloo_file::Blob::new_with_options(file.bytes.as_slice(), Some(&file.content_type));
                let raw: web_sys::Blob = blob.into();
                form.append_with_blob_and_filename(name, &raw, &file.name)
                    .map_err(encode)?;
            }
        }
    }
    Ok(form)
}

/// Exchange credentials for a token via `POST /users/authenticate`.
///
/// # Errors
///
/// Returns any `ApiError` from encoding, transport, status, or decoding.
pub async fn authenticate(config: &ApiConfig, credentials: &Credentials) -> Result<String, ApiError> {
    let body = send(authenticate_request(config, credentials)?).await?;
    decode_token(&body)
}

/// Fetch the full course collection via `GET /courses`.
///
/// # Errors
///
/// Returns any `ApiError` from transport, status, or decoding.
pub async fn fetch_courses(config: &ApiConfig, token: Option<&str>) -> Result<Vec<Course>, ApiError> {
    let body = send(list_courses_request(config, token)).await?;
    decode_collection(&body)
}

/// Fetch one authoritative course record via `GET /courses/{id}`.
///
/// # Errors
///
/// Returns any `ApiError` from transport, status, or decoding.
pub async fn fetch_course(config: &ApiConfig, token: Option<&str>, id: i64) -> Result<Course, ApiError> {
    let body = send(course_request(config, token, id)).await?;
    decode_course(&body)
}

/// Delete a course via `DELETE /courses/{id}`.
///
/// # Errors
///
/// Returns any `ApiError` from transport or status.
pub async fn delete_course(config: &ApiConfig, token: Option<&str>, id: i64) -> Result<(), ApiError> {
    send(delete_course_request(config, token, id)).await.map(|_| ())
}

/// Create or update a course with a multipart body.
///
/// # Errors
///
/// Returns any `ApiError` from encoding, transport, or status.
pub async fn save_course(
    config: &ApiConfig,
    token: Option<&str>,
    submission: CourseSubmission,
) -> Result<(), ApiError> {
    send(save_course_request(config, token, submission)).await.map(|_| ())
}
