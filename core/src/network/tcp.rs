//! TCP connectivity probing.

use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;
use tokio::time::timeout;

/// Outcome of a single connectivity probe.
///
/// There is deliberately no error variant: refusals, timeouts, DNS
/// failures and unreachable hosts all fold into [`PortState::Closed`].
/// A target with every port closed and a target that cannot be reached
/// at all are indistinguishable to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortState {
    Open,
    Closed,
}

impl PortState {
    pub fn is_open(&self) -> bool {
        matches!(self, PortState::Open)
    }
}

/// Transport seam for the port scanner.
///
/// The scanner only ever talks to a `Connector`, which lets tests swap
/// the real TCP handshake for a scripted one.
#[async_trait]
pub trait Connector: Send + Sync {
    async fn connect(&self, host: &str, port: u16, timeout: Duration) -> PortState;
}

/// Probes by completing a full TCP handshake, then dropping the stream
/// immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    async fn connect(&self, host: &str, port: u16, probe_timeout: Duration) -> PortState {
        match timeout(probe_timeout, TcpStream::connect((host, port))).await {
            Ok(Ok(_stream)) => PortState::Open,
            Ok(Err(_)) | Err(_) => PortState::Closed,
        }
    }
}
