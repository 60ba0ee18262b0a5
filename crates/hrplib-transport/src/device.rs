//! Physical device transport.
//!
//! [`DeviceTransport`] implements the [`Transport`] trait for robots
//! that present as serial devices (USB virtual COM ports, RS-232
//! adapters). The device is addressed by its path; `connect()`
//! enumerates the available ports first, so an absent device is
//! reported as [`Error::DeviceUnavailable`] before any open is
//! attempted.
//!
//! Write errors are swallowed: a frame written to a device that just
//! died must not break the caller's in-flight wait. The pending
//! operation then completes through its reply timeout instead.

use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio_serial::{SerialPortBuilderExt, SerialStream};

use hrplib_core::error::{Error, Result};
use hrplib_core::transport::Transport;

/// Default baud rate for HRP serial devices.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Serial device transport for a physical HRP robot.
pub struct DeviceTransport {
    /// Device path (e.g. `/dev/ttyACM0`, `COM4`).
    path: String,
    /// Baud rate used when opening the device.
    baud_rate: u32,
    /// The open device stream, `None` while disconnected.
    stream: Option<SerialStream>,
}

impl DeviceTransport {
    /// Create a transport for the given device path with the default
    /// baud rate. Does not open the device; call
    /// [`connect`](Transport::connect).
    pub fn new(path: &str) -> Self {
        Self::with_baud_rate(path, DEFAULT_BAUD_RATE)
    }

    /// Create a transport with an explicit baud rate.
    pub fn with_baud_rate(path: &str, baud_rate: u32) -> Self {
        DeviceTransport {
            path: path.to_string(),
            baud_rate,
            stream: None,
        }
    }

    /// The device path this transport targets.
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[async_trait]
impl Transport for DeviceTransport {
    async fn connect(&mut self) -> Result<bool> {
        if self.stream.is_some() {
            return Ok(false);
        }

        // Enumerate before opening so a missing device is reported
        // distinctly from an open failure on a present one.
        let ports = tokio_serial::available_ports()
            .map_err(|e| Error::DeviceUnavailable(format!("enumeration failed: {e}")))?;
        if !ports.iter().any(|p| p.port_name == self.path) {
            tracing::debug!(path = %self.path, "device not present");
            return Err(Error::DeviceUnavailable(format!(
                "{} not present",
                self.path
            )));
        }

        let stream = tokio_serial::new(&self.path, self.baud_rate)
            .open_native_async()
            .map_err(|e| {
                tracing::error!(path = %self.path, error = %e, "failed to open device");
                Error::DeviceUnavailable(format!("cannot open {}: {e}", self.path))
            })?;

        tracing::info!(path = %self.path, baud_rate = self.baud_rate, "device opened");
        self.stream = Some(stream);
        Ok(true)
    }

    async fn disconnect(&mut self) -> bool {
        match self.stream.take() {
            Some(_) => {
                // Dropping the stream closes the device.
                tracing::debug!(path = %self.path, "device closed");
                true
            }
            None => false,
        }
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let Some(stream) = self.stream.as_mut() else {
            tracing::warn!(path = %self.path, "write on disconnected device dropped");
            return Ok(());
        };

        tracing::trace!(path = %self.path, bytes = data.len(), "sending frame bytes");

        // Swallow write failures: the in-flight exchange completes via
        // its timeout instead of surfacing a transport crash.
        if let Err(e) = stream.write_all(data).await {
            tracing::warn!(path = %self.path, error = %e, "device write failed, dropped");
            return Ok(());
        }
        if let Err(e) = stream.flush().await {
            tracing::warn!(path = %self.path, error = %e, "device flush failed, dropped");
        }
        Ok(())
    }

    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize> {
        let stream = self.stream.as_mut().ok_or(Error::NotConnected)?;

        match tokio::time::timeout(timeout, stream.read(buf)).await {
            Ok(Ok(n)) => {
                tracing::trace!(path = %self.path, bytes = n, "received data");
                Ok(n)
            }
            Ok(Err(e)) => {
                tracing::error!(path = %self.path, error = %e, "device read failed");
                Err(Error::Io(e))
            }
            Err(_) => {
                tracing::trace!(path = %self.path, timeout_ms = timeout.as_millis(), "read timed out");
                Err(Error::Timeout)
            }
        }
    }

    fn is_connected(&self) -> bool {
        self.stream.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let transport = DeviceTransport::new("/dev/ttyACM0");
        assert_eq!(transport.path(), "/dev/ttyACM0");
        assert!(!transport.is_connected());
    }

    #[tokio::test]
    async fn connect_to_absent_device_reports_unavailable() {
        let mut transport = DeviceTransport::new("/dev/hrp-no-such-device");
        let result = transport.connect().await;
        assert!(matches!(result, Err(Error::DeviceUnavailable(_))));
        assert!(!transport.is_connected());
    }

    #[tokio::test]
    async fn disconnect_when_disconnected_is_false() {
        let mut transport = DeviceTransport::new("/dev/hrp-no-such-device");
        assert!(!transport.disconnect().await);
    }

    #[tokio::test]
    async fn send_while_disconnected_is_a_no_op() {
        let mut transport = DeviceTransport::new("/dev/hrp-no-such-device");
        // Must not error: disconnected writes are dropped.
        transport.send(b":HRP:CA:").await.unwrap();
    }

    #[tokio::test]
    async fn receive_while_disconnected_errors() {
        let mut transport = DeviceTransport::new("/dev/hrp-no-such-device");
        let mut buf = [0u8; 16];
        let result = transport.receive(&mut buf, Duration::from_millis(10)).await;
        assert!(matches!(result, Err(Error::NotConnected)));
    }
}
