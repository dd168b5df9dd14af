//! HTTP service for the starchart API.
//!
//! Routes:
//!
//! - `GET /api/v1/health`
//! - `GET /api/v1/stars`
//!
//! Every route runs behind the same middleware stack: client IP
//! resolution, request logging, permissive CORS and panic recovery.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod telemetry;
