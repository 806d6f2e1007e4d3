//! Failure type for REST calls.
//!
//! Views collapse every variant into the same outcome (a generic list error,
//! a console line, or a blocking alert); the variants only sharpen logs.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// The response body could not be decoded.
    #[error("decode failed: {0}")]
    Decode(String),

    /// The request body could not be assembled.
    #[error("encode failed: {0}")]
    Encode(String),

    /// HTTP is only available in the browser build.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Map a response status to `Ok(())` for 2xx, `Status` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` when `status` is outside `200..300`.
    pub fn check_status(status: u16) -> Result<(), Self> {
        if (200..300).contains(&status) {
            Ok(())
        } else {
            Err(Self::Status { status })
        }
    }
}
