//! Request middleware shared by every route.
//!
//! - [`resolve_client_ip`]: records the originating client address
//! - [`log_requests`]: one log line per request with status and latency
//! - [`handle_panic`]: turns a handler panic into a 500

use std::any::Any;
use std::net::{IpAddr, SocketAddr};
use std::time::Instant;

use axum::extract::{ConnectInfo, Request};
use axum::http::{HeaderMap, HeaderName, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{error, info, warn};

const TRUE_CLIENT_IP: HeaderName = HeaderName::from_static("true-client-ip");
const X_REAL_IP: HeaderName = HeaderName::from_static("x-real-ip");
const X_FORWARDED_FOR: HeaderName = HeaderName::from_static("x-forwarded-for");

/// Originating client address, stored as a request extension.
///
/// Only used for logging. Never trust it for authorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub IpAddr);

impl std::fmt::Display for ClientIp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Client address announced by a proxy, if any.
///
/// Checks `True-Client-IP`, `X-Real-IP` and then the first hop of
/// `X-Forwarded-For`. Unparseable values are skipped.
pub fn forwarded_ip(headers: &HeaderMap) -> Option<IpAddr> {
    [TRUE_CLIENT_IP, X_REAL_IP, X_FORWARDED_FOR]
        .iter()
        .find_map(|name| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.split(',').next())
                .and_then(|v| v.trim().parse().ok())
        })
}

/// Resolve the client IP from proxy headers, falling back to the peer address.
pub async fn resolve_client_ip(mut req: Request, next: Next) -> Response {
    let peer = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip());

    if let Some(ip) = forwarded_ip(req.headers()).or(peer) {
        req.extensions_mut().insert(ClientIp(ip));
    }

    next.run(req).await
}

/// Log method, path, status, latency and client IP for every request.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();
    let client_ip = req
        .extensions()
        .get::<ClientIp>()
        .map_or_else(|| "-".to_owned(), ToString::to_string);

    let start = Instant::now();
    let resp = next.run(req).await;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    let status = resp.status().as_u16();

    if resp.status().is_success() {
        info!(%method, %path, status, latency_ms, %client_ip, "request completed");
    } else {
        warn!(%method, %path, status, latency_ms, %client_ip, "request completed");
    }

    resp
}

/// Response for a panicked handler, used with `CatchPanicLayer::custom`.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic payload"
    };

    error!(panic = detail, "handler panicked");
    (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
}
