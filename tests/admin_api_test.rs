//! Admin HTTP surface: health probe and Prometheus metrics.

use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[tokio::test]
async fn metrics_endpoint_exposes_prometheus_metrics() {
    // Drive one exchange through the Kafka listener so the counters move.
    let kafka_listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let kafka_addr = kafka_listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = franz::server::run_server_on_listener(kafka_listener).await;
    });

    let mut request = Vec::new();
    request.extend_from_slice(&8u32.to_be_bytes());
    request.extend_from_slice(&18u16.to_be_bytes());
    request.extend_from_slice(&999u16.to_be_bytes());
    request.extend_from_slice(&1u32.to_be_bytes());
    let mut stream = TcpStream::connect(kafka_addr).await.unwrap();
    stream.write_all(&request).await.unwrap();
    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    assert_eq!(response.len(), 10);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        franz::admin::run_admin_api_on_listener(listener).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(150)).await;

    let body = reqwest::get(format!("http://{}/metrics", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(body.contains("franz_requests_total"));
    assert!(body.contains("franz_request_errors_total"));
    assert!(body.contains("franz_unsupported_version_total 1"));
    assert!(body.contains("franz_response_bytes_total"));
    assert!(body.contains("franz_request_latency_p99_ms"));

    server.abort();
}

#[tokio::test]
async fn healthz_reports_ok() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        franz::admin::run_admin_api_on_listener(listener).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(150)).await;

    let body = reqwest::get(format!("http://{}/healthz", addr))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("\"status\":\"ok\""));

    server.abort();
}
