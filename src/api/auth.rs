//! API-Key Authentication
//!
//! Static shared-secret check applied to mutating routes before any
//! handler logic runs.

use axum::http::HeaderMap;

use crate::error::{ApiError, Result};

/// Name of the header carrying the candidate key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Rejects the request unless the `x-api-key` header exactly matches the
/// configured secret.
///
/// A missing header, a non-UTF8 value and a mismatched key all fail the
/// same way, so the response does not reveal which check tripped.
pub fn require_api_key(headers: &HeaderMap, expected: &str) -> Result<()> {
    let candidate = headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match candidate {
        Some(key) if key == expected => Ok(()),
        _ => Err(ApiError::Validation(
            "Invalid or missing API key".to_string(),
        )),
    }
}
