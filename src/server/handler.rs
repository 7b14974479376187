//! TCP server that answers exactly one Kafka request per connection.
//!
//! Per connection: buffer one length-prefixed frame, parse the header, build
//! the framed response, write it, close. A partial frame at EOF aborts the
//! connection without a response, since no correlation id can be trusted.

use crate::error::{FranzError, Result};
use crate::observability::observability;
use crate::protocol::{
    build_response, frame_response, is_supported_version, read_request_header, ApiVersionEntry,
    API_VERSION_TABLE,
};
use bytes::BytesMut;
use std::time::Instant;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info};

const MAX_FRAME_LEN: usize = 100 * 1024 * 1024; // 100MB

/// Run the server loop (binds to addr).
pub async fn run_server(addr: &str) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    run_server_on_listener(listener).await
}

/// Run the server loop on an existing listener (e.g. from bind("127.0.0.1:0")).
pub async fn run_server_on_listener(listener: TcpListener) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Franz Kafka protocol server listening on {}", addr);
    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(x) => x,
            Err(e) => {
                error!("accept error: {}", e);
                continue;
            }
        };
        tokio::spawn(async move {
            if let Err(e) = handle_connection(stream, API_VERSION_TABLE).await {
                error!("connection {} error: {}", peer, e);
            }
        });
    }
}

/// Read one length-prefixed request frame, length prefix included.
///
/// Returns None if the peer closes before sending anything. EOF mid-frame is
/// a malformed request. The declared length decides frame completeness but is
/// otherwise not validated against the header the frame claims to carry.
async fn read_request(stream: &mut TcpStream) -> Result<Option<BytesMut>> {
    let mut read_buf = BytesMut::with_capacity(4096);
    loop {
        if read_buf.len() >= 4 {
            let len =
                u32::from_be_bytes([read_buf[0], read_buf[1], read_buf[2], read_buf[3]]) as usize;
            if len > MAX_FRAME_LEN {
                return Err(FranzError::Protocol("frame too large".into()));
            }
            if read_buf.len() >= 4 + len {
                return Ok(Some(read_buf.split_to(4 + len)));
            }
        }
        read_buf.reserve(4096);
        let n = stream.read_buf(&mut read_buf).await?;
        if n == 0 {
            if read_buf.is_empty() {
                return Ok(None);
            }
            return Err(FranzError::MalformedRequest(format!(
                "connection closed with incomplete frame ({} bytes buffered)",
                read_buf.len()
            )));
        }
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    table: &'static [ApiVersionEntry],
) -> Result<()> {
    let started = Instant::now();
    let request = match read_request(&mut stream).await {
        Ok(Some(frame)) => frame,
        Ok(None) => return Ok(()),
        Err(e) => {
            observability().record_request(started.elapsed(), false);
            return Err(e);
        }
    };
    let header = match read_request_header(&request) {
        Ok(h) => h,
        Err(e) => {
            observability().record_request(started.elapsed(), false);
            return Err(e);
        }
    };
    let framed = {
        let span = tracing::info_span!(
            "franz.request",
            api_key = header.api_key,
            version = header.api_version,
            correlation_id = header.correlation_id
        );
        let _entered = span.enter();
        info!(api_key = header.api_key, version = header.api_version, "kafka request");
        if !is_supported_version(header.api_key, header.api_version) {
            observability().record_unsupported_version();
        }
        let framed = frame_response(build_response(&header, table));
        observability().record_request(started.elapsed(), true);
        observability().record_response_bytes(framed.len());
        info!(len = framed.len(), "kafka response");
        framed
    };
    stream.write_all(&framed).await?;
    stream.flush().await?;
    Ok(())
}
