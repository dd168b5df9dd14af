use axum::{middleware::from_fn, routing::get, Router};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use crate::handlers;
use crate::middleware;

/// Create the main application router with all routes.
pub fn create_router() -> Router {
    let routes = Router::new()
        .route(
            "/api/v1/health",
            get(handlers::health).fallback(handlers::not_found),
        )
        .route(
            "/api/v1/stars",
            get(handlers::stars).fallback(handlers::not_found),
        )
        .fallback(handlers::not_found);

    with_middleware(routes)
}

/// Wrap `router` in the service middleware stack.
///
/// Outermost first: client IP, request log, CORS, panic recovery.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(middleware::handle_panic))
        // CORS: allow any origin, no credentials
        .layer(CorsLayer::permissive())
        .layer(from_fn(middleware::log_requests))
        .layer(from_fn(middleware::resolve_client_ip))
}
