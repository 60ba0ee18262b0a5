//! # hrplib -- Async HRP Robot Control
//!
//! `hrplib` is an asynchronous Rust library for talking to robot arms
//! that speak HRP, a `:`-delimited ASCII request/response protocol.
//! The same driver works against a physical arm on a serial device and
//! a simulated arm listening on a local TCP port.
//!
//! ## Quick Start
//!
//! Add `hrplib` to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hrplib = "0.1"
//! tokio = { version = "1", features = ["full"] }
//! ```
//!
//! Probe a device and read its joints:
//!
//! ```no_run
//! use hrplib::RobotBuilder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut robot = RobotBuilder::new("/dev/ttyACM0").build()?;
//!
//!     if robot.is_hrp().await {
//!         robot.connect().await?;
//!         let info = robot.get_robot_info().await?;
//!         println!("{} {} ({} DoF)", info.brand, info.model, info.degrees_of_freedom);
//!
//!         for (id, position) in robot.get_joints().await?.iter() {
//!             println!("joint {id}: {position}");
//!         }
//!         robot.disconnect().await;
//!     }
//!     Ok(())
//! }
//! ```
//!
//! For a simulated robot, build with the `"virtual"` path and a port:
//!
//! ```no_run
//! use hrplib::RobotBuilder;
//! # fn example() -> hrplib::Result<()> {
//! let robot = RobotBuilder::new("virtual").port(5555).build()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized as a workspace of focused crates:
//!
//! | Crate                 | Purpose                                      |
//! |-----------------------|----------------------------------------------|
//! | `hrplib-core`         | [`Transport`] trait, types, errors, protocol state machine |
//! | `hrplib-transport`    | Serial and TCP transport implementations     |
//! | `hrplib-protocol`     | HRP frame codec and the [`Robot`] driver     |
//! | `hrplib-test-harness` | Mock transports and a simulated robot peer   |
//! | **`hrplib`**          | This facade crate -- re-exports everything   |
//!
//! ## Concurrency Model
//!
//! One [`Robot`] owns one connection, and at most one request is in
//! flight on it at a time. An operation started while another is
//! outstanding fails with [`Error::ProtocolBusy`]; nothing is written
//! to the wire. Every request is raced against a reply timer, so a
//! silent peer resolves the exchange rather than hanging it.

pub use hrplib_core::*;

/// HRP frame codec and protocol driver.
///
/// Provides [`Robot`](protocol::Robot), [`RobotBuilder`](protocol::RobotBuilder),
/// and the [`frame`](protocol::frame) codec module for peers that only
/// need to encode and decode the grammar.
pub mod protocol {
    pub use hrplib_protocol::*;
}

/// Serial and TCP transport implementations.
///
/// Provides [`DeviceTransport`](transport::DeviceTransport) for physical
/// arms and [`SocketTransport`](transport::SocketTransport) for
/// simulated arms on localhost.
pub mod transport {
    pub use hrplib_transport::*;
}

pub use hrplib_protocol::{Robot, RobotBuilder, DEFAULT_REPLY_TIMEOUT};
pub use hrplib_transport::{DeviceTransport, SocketTransport};
