//! Transport implementations for hrplib.
//!
//! Two concrete [`Transport`](hrplib_core::transport::Transport)
//! implementations are provided:
//!
//! - [`DeviceTransport`] — a serial connection to a physical robot,
//! - [`SocketTransport`] — a TCP connection to a simulated robot on
//!   localhost.
//!
//! Both preserve frame boundaries: each `send` call writes exactly one
//! frame, and each `receive` call yields at most one peer frame.

pub mod device;
pub mod socket;

pub use device::{DeviceTransport, DEFAULT_BAUD_RATE};
pub use socket::SocketTransport;
