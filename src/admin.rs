//! Operational HTTP API: health probe and Prometheus metrics.

use crate::error::{FranzError, Result};
use crate::observability::observability;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub async fn run_admin_api(addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    run_admin_api_on_listener(listener).await
}

pub async fn run_admin_api_on_listener(listener: TcpListener) -> Result<()> {
    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/metrics", get(metrics));

    axum::serve(listener, app)
        .await
        .map_err(|e| FranzError::Protocol(e.to_string()))
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn metrics() -> String {
    observability().render_prometheus()
}
