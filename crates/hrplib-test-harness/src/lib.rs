//! hrplib-test-harness: Test utilities and simulated peers for hrplib.
//!
//! This crate provides [`MockTransport`] and [`SilentTransport`] for
//! deterministic unit testing of the protocol driver without hardware,
//! and [`VirtualRobot`], a protocol-aware TCP peer for end-to-end tests
//! over loopback.

pub mod mock_transport;
pub mod virtual_robot;

pub use mock_transport::{MockTransport, SilentTransport};
pub use virtual_robot::{scara_arm, VirtualRobot};
