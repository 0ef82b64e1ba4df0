//! Metrics exposition endpoint.
//!
//! Serves the registry in Prometheus text format for an external scraper,
//! plus a small JSON liveness document.

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use prometheus::{Encoder, Registry, TextEncoder, TEXT_FORMAT};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::schema::ExpositionConfig;

/// Liveness document served at `/status`.
#[derive(Serialize)]
pub struct ServiceStatus {
    pub version: &'static str,
    pub status: &'static str,
}

/// Build the exposition router over a shared registry.
pub fn exposition_router(registry: Arc<Registry>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .route("/status", get(status_handler))
        .with_state(registry)
        .layer(TraceLayer::new_for_http())
}

/// Serve the exposition router on the given listener.
pub async fn serve(listener: TcpListener, registry: Arc<Registry>) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!(address = %addr, "Metrics exposition listening");

    axum::serve(listener, exposition_router(registry)).await
}

/// Bind and serve per configuration. Returns immediately when disabled.
pub async fn serve_from_config(
    config: &ExpositionConfig,
    registry: Arc<Registry>,
) -> Result<(), std::io::Error> {
    if !config.enabled {
        tracing::info!("Metrics exposition disabled");
        return Ok(());
    }

    let listener = TcpListener::bind(&config.bind_address).await?;
    serve(listener, registry).await
}

async fn metrics_handler(State(registry): State<Arc<Registry>>) -> impl IntoResponse {
    let families = registry.gather();
    let mut buffer = Vec::new();

    if let Err(e) = TextEncoder::new().encode(&families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return (StatusCode::INTERNAL_SERVER_ERROR, "encoding failed").into_response();
    }

    ([(header::CONTENT_TYPE, TEXT_FORMAT)], buffer).into_response()
}

async fn status_handler() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        version: env!("CARGO_PKG_VERSION"),
        status: "operational",
    })
}
