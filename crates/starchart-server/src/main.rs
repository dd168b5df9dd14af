use std::net::SocketAddr;

use clap::Parser;
use tokio::signal;

use starchart_server::config::ServerConfig;
use starchart_server::error::ServerError;
use starchart_server::telemetry;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = ServerConfig::parse();
    telemetry::init_tracing(config.log_format);

    let app = starchart_server::router::create_router();

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("starchart server listening on {addr}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(ServerError::Serve)?;

    Ok(())
}

/// Resolves on Ctrl-C so in-flight requests can drain.
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
