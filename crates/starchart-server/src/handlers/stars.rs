use axum::http::{header, HeaderValue};
use axum::response::{IntoResponse, Response};

use starchart_core::CATALOG;

use crate::error::ApiError;

/// `GET /api/v1/stars`
///
/// Serializes the fixed catalog as a JSON array, in catalog order.
///
/// # Errors
///
/// Returns [`ApiError::Serialization`] if the catalog cannot be encoded.
pub async fn stars() -> Result<Response, ApiError> {
    let body = serde_json::to_vec(CATALOG)?;

    Ok((
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response())
}
