//! Simulated robot transport.
//!
//! [`SocketTransport`] implements the [`Transport`] trait for simulated
//! HRP peers listening on a local TCP port. The simulated robot plays
//! the request/reply role of the real device: the client writes one
//! frame, the peer answers with one frame.
//!
//! Writes while disconnected are silent no-ops, mirroring the physical
//! transport's swallow-on-failure contract.

use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use hrplib_core::error::{Error, Result};
use hrplib_core::transport::Transport;

/// Bound on establishing the TCP connection.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// TCP transport to a simulated HRP robot on localhost.
pub struct SocketTransport {
    /// The peer's TCP port on localhost.
    port: u16,
    /// The open stream, `None` while disconnected.
    stream: Option<TcpStream>,
}

impl SocketTransport {
    /// Create a transport targeting `127.0.0.1:port`. Does not connect.
    pub fn new(port: u16) -> Self {
        SocketTransport { port, stream: None }
    }

    /// The target port.
    pub fn port(&self) -> u16 {
        self.port
    }
}

#[async_trait]
impl Transport for SocketTransport {
    async fn connect(&mut self) -> Result<bool> {
        if self.stream.is_some() {
            return Ok(false);
        }

        let addr = ("127.0.0.1", self.port);
        let stream = tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect(addr))
            .await
            .map_err(|_| {
                tracing::error!(port = self.port, "connection to simulated robot timed out");
                Error::Timeout
            })?
            .map_err(|e| {
                tracing::error!(port = self.port, error = %e, "connection to simulated robot failed");
                Error::Transport(format!("cannot connect to 127.0.0.1:{}: {e}", self.port))
            })?;

        // Frames are tiny and latency-sensitive.
        if let Err(e) = stream.set_nodelay(true) {
            tracing::warn!(port = self.port, error = %e, "failed to set TCP_NODELAY");
        }

        tracing::info!(port = self.port, "connected to simulated robot");
        self.stream = Some(stream);
        Ok(true)
    }

    async fn disconnect(&mut self) -> bool {
        match self.stream.take() {
            Some(_) => {
                tracing::debug!(port = self.port, "simulated robot connection closed");
                true
            }
            None => false,
        }
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let Some(stream) = self.stream.as_mut() else {
            tracing::trace!(port = self.port, "write while disconnected dropped");
            return Ok(());
        };

        tracing::trace!(port = self.port, bytes = data.len(), "sending frame");
        stream.write_all(data).await.map_err(|e| {
            tracing::error!(port = self.port, error = %e, "socket write failed");
            Error::Io(e)
        })?;
        stream.flush().await.map_err(Error::Io)
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        match tokio::time::timeout(timeout, stream.read(buf)).await {
            Ok(Ok(0)) => {
                tracing::debug!(port = self.port, "peer closed the connection");
                Err(Error::Transport("connection closed by peer".into()))
            }
            Ok(Ok(n)) => {
                tracing::trace!(port = self.port, bytes = n, "received frame");
                Ok(n)
            }
            Ok(Err(e)) => {
                tracing::error!(port = self.port, error = %e, "socket read failed");
                Err(Error::Io(e))
            }
            Err(_) => Err(Error::Timeout),
        }
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}
