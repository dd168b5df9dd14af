mod health;
mod stars;

use axum::http::StatusCode;

pub use health::{health, HEALTH_BODY};
pub use stars::stars;

/// Fallback for unknown paths and unsupported methods.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
