/// Fixed body of the health endpoint.
pub const HEALTH_BODY: &str = "I want a Camel Blue";

/// Health check endpoint.
pub async fn health() -> &'static str {
    HEALTH_BODY
}
