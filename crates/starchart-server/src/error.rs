use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors a request handler can return.
///
/// The cause is logged; clients only ever see a generic 500.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to serialize response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

/// Fatal errors raised while starting or running the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(std::io::Error),
}
