//! Query parameter parsing shared by the planner endpoints
//!
//! Parameters arrive as raw strings so malformed values produce the same JSON
//! 400 body as every other error instead of axum's plain-text rejection.

use crate::error::{ApiError, ApiResult};

/// Parse a required integer id parameter
pub fn required_id(name: &str, value: Option<&str>) -> ApiResult<i64> {
    let raw = value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("Missing required parameter '{}'", name)))?;

    raw.parse::<i64>()
        .map_err(|_| ApiError::BadRequest(format!("Parameter '{}' is not an integer: {}", name, raw)))
}

/// Parse a comma-separated id list, e.g. `"12, 7,12"`
///
/// Order and duplicates are preserved. A blank string is an empty list; a
/// missing parameter or any non-integer element is a bad request.
pub fn id_list(name: &str, value: Option<&str>) -> ApiResult<Vec<i64>> {
    let raw = value
        .ok_or_else(|| ApiError::BadRequest(format!("Missing required parameter '{}'", name)))?;

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    raw.split(',')
        .map(|part| {
            let part = part.trim();
            part.parse::<i64>().map_err(|_| {
                ApiError::BadRequest(format!("Parameter '{}' has a non-integer id: '{}'", name, part))
            })
        })
        .collect()
}
