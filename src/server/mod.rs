//! TCP server: accept connections, answer one Kafka request each.

mod handler;

pub use handler::{run_server, run_server_on_listener};
