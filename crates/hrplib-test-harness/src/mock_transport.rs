//! Mock transports for deterministic testing of the protocol driver.
//!
//! [`MockTransport`] implements the [`Transport`] trait with pre-loaded
//! request/response pairs. This lets you test HRP frame encoding, the
//! request state machine, and reply parsing without real hardware.
//!
//! The mock is a cheap clone around shared state, so a test can hand one
//! handle to the driver (boxed as `dyn Transport`) and keep another for
//! loading expectations and inspecting what was sent.
//!
//! # Example
//!
//! ```
//! use hrplib_test_harness::MockTransport;
//!
//! let mock = MockTransport::new();
//! // Pre-load: when the driver sends this frame, return this reply.
//! mock.expect(":HRP:G:J:007:", ":HRP:GA:J:007:12.50:");
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use hrplib_core::error::{Error, Result};
use hrplib_core::transport::Transport;

/// A pre-loaded request/response pair for the mock transport.
#[derive(Debug, Clone)]
struct Expectation {
    /// The exact frame we expect to be sent.
    request: String,
    /// The frame to return when the matching request is received.
    response: String,
}

#[derive(Debug, Default)]
struct Inner {
    /// Ordered queue of expected request/response pairs.
    expectations: VecDeque<Expectation>,
    /// The reply frame pending for the next `receive()` call.
    pending_response: Option<String>,
    /// Whether the transport is "connected".
    connected: bool,
    /// When set, `connect()` fails instead of succeeding.
    fail_connect: bool,
    /// When set, `send()` fails with a broken-pipe I/O error.
    fail_send: bool,
    /// Log of every frame sent through this transport.
    sent_log: Vec<String>,
}

/// A mock [`Transport`] for testing the driver without hardware.
///
/// Expectations are consumed in order. When `send()` is called, the sent
/// frame is recorded and matched against the next expectation. The
/// corresponding reply is then returned by the next `receive()` call.
///
/// A send that matches no expectation, or a receive with no pending
/// reply, behaves like a silent peer and surfaces as a timeout.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    inner: Arc<Mutex<Inner>>,
}

impl MockTransport {
    /// Create a new mock transport in the disconnected state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mock transport already in the connected state.
    ///
    /// Convenient for tests that exercise request flows without the
    /// connect cycle.
    pub fn connected() -> Self {
        let mock = Self::new();
        mock.inner.lock().unwrap().connected = true;
        mock
    }

    /// Add an expected request/response pair.
    ///
    /// When `send()` is called with a frame matching `request`, the
    /// subsequent `receive()` call will return `response`.
    pub fn expect(&self, request: &str, response: &str) {
        self.inner.lock().unwrap().expectations.push_back(Expectation {
            request: request.to_string(),
            response: response.to_string(),
        });
    }

    /// Make subsequent `connect()` calls fail with
    /// [`Error::DeviceUnavailable`].
    pub fn fail_connect(&self) {
        self.inner.lock().unwrap().fail_connect = true;
    }

    /// Control whether `send()` fails with a broken-pipe I/O error.
    ///
    /// Models a peer that closes the channel between connect and write.
    pub fn set_fail_send(&self, fail: bool) {
        self.inner.lock().unwrap().fail_send = fail;
    }

    /// Return every frame that has been sent through this transport, in
    /// order.
    pub fn sent_frames(&self) -> Vec<String> {
        self.inner.lock().unwrap().sent_log.clone()
    }

    /// Return the number of expectations that have not yet been consumed.
    pub fn remaining_expectations(&self) -> usize {
        self.inner.lock().unwrap().expectations.len()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn connect(&mut self) -> Result<bool> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_connect {
            return Err(Error::DeviceUnavailable("mock connect failure".into()));
        }
        if inner.connected {
            return Ok(false);
        }
        inner.connected = true;
        Ok(true)
    }

    async fn disconnect(&mut self) -> bool {
        let mut inner = self.inner.lock().unwrap();
        let was_connected = inner.connected;
        inner.connected = false;
        inner.pending_response = None;
        was_connected
    }

    async fn send(&mut self, data: &[u8]) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if inner.fail_send {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "mock send failure",
            )));
        }
        let frame = String::from_utf8_lossy(data).into_owned();
        inner.sent_log.push(frame.clone());

        if let Some(expectation) = inner.expectations.front() {
            if expectation.request == frame {
                let expectation = inner.expectations.pop_front().unwrap();
                inner.pending_response = Some(expectation.response);
            } else {
                // Unmatched frame: the peer stays silent.
                tracing::debug!(sent = %frame, expected = %expectation.request, "mock send mismatch");
            }
        }
        Ok(())
    }

    async fn receive(&mut self, buf: &mut [u8], _timeout: Duration) -> Result<usize> {
        let mut inner = self.inner.lock().unwrap();
        if !inner.connected {
            return Err(Error::NotConnected);
        }
        match inner.pending_response.take() {
            Some(response) => {
                let bytes = response.as_bytes();
                let n = bytes.len().min(buf.len());
                buf[..n].copy_from_slice(&bytes[..n]);
                Ok(n)
            }
            None => Err(Error::Timeout),
        }
    }

    fn is_connected(&self) -> bool {
        self.inner.lock().unwrap().connected
    }
}

/// A connected transport whose peer never answers.
///
/// `receive()` never resolves, so the driver's reply timer is the only
/// thing that can end the wait. Used with a paused runtime clock to pin
/// down exactly when a request times out.
#[derive(Debug, Default)]
pub struct SilentTransport {
    connected: bool,
}

impl SilentTransport {
    /// Create a new silent transport in the disconnected state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new silent transport already in the connected state.
    pub fn connected() -> Self {
        SilentTransport { connected: true }
    }
}

#[async_trait]
impl Transport for SilentTransport {
    async fn connect(&mut self) -> Result<bool> {
        if self.connected {
            return Ok(false);
        }
        self.connected = true;
        Ok(true)
    }

    async fn disconnect(&mut self) -> bool {
        std::mem::take(&mut self.connected)
    }

    async fn send(&mut self, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    async fn receive(&mut self, _buf: &mut [u8], _timeout: Duration) -> Result<usize> {
        std::future::pending().await
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}
