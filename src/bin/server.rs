//! Franz server binary: runs the Kafka protocol listener.
//!
//! Optional: set FRANZ_ADMIN_ADDR (e.g. 127.0.0.1:9644) to also serve the
//! operational HTTP API (health probe, Prometheus metrics).

use franz::{admin, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("franz=info".parse()?))
        .init();

    if let Ok(admin_addr) = std::env::var("FRANZ_ADMIN_ADDR") {
        tokio::spawn(async move {
            if let Err(e) = admin::run_admin_api(&admin_addr).await {
                tracing::error!("admin api error: {}", e);
            }
        });
    }

    let addr = std::env::var("FRANZ_ADDR").unwrap_or_else(|_| "0.0.0.0:9092".to_string());
    server::run_server(&addr).await?;
    Ok(())
}
