//! Transport trait for robot communication.
//!
//! The [`Transport`] trait abstracts over the link to an HRP peer.
//! Implementations exist for physical serial devices, simulated TCP
//! robots, and mock transports for testing.
//!
//! The protocol driver (`hrplib-protocol`) operates on a `Transport`
//! rather than directly on a device handle, so the same state machine
//! and request coordination drive real hardware and simulated peers
//! alike.

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

/// Asynchronous byte-level transport to an HRP peer.
///
/// Unlike a transport that is opened once at construction, an HRP link is
/// cycled explicitly: the compliance probe connects, exchanges one frame,
/// and disconnects, so `connect()`/`disconnect()` are part of the trait
/// surface with idempotence contracts.
///
/// Frame boundaries follow the underlying channel's message boundaries:
/// peers write one frame per `send()`, and one completed `receive()`
/// carries one whole frame.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Establish the underlying channel.
    ///
    /// Returns `Ok(true)` when a new connection was made and `Ok(false)`
    /// without side effect when already connected. Fails with
    /// [`Error::DeviceUnavailable`](crate::error::Error::DeviceUnavailable)
    /// when the physical device is absent or cannot be opened.
    async fn connect(&mut self) -> Result<bool>;

    /// Release the underlying channel.
    ///
    /// Returns `true` when a connection was released, `false` when
    /// already disconnected.
    async fn disconnect(&mut self) -> bool;

    /// Send one encoded frame as raw bytes.
    ///
    /// Implementations decide how send failures surface; the physical
    /// transport swallows write errors so a dead device cannot break an
    /// in-flight wait (the operation then completes via its timeout).
    async fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Receive bytes from the peer into the provided buffer.
    ///
    /// Returns the number of bytes read. Waits up to `timeout` for data;
    /// returns [`Error::Timeout`](crate::error::Error::Timeout) if
    /// nothing arrives within the deadline.
    async fn receive(&mut self, buf: &mut [u8], timeout: Duration) -> Result<usize>;

    /// Whether the transport is currently connected. Pure observer.
    fn is_connected(&self) -> bool;
}
