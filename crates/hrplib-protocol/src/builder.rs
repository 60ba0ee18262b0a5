//! `RobotBuilder` -- fluent builder for [`Robot`] connections.
//!
//! Separates endpoint configuration from the driver itself. The path
//! string selects the transport mode: the literal `"virtual"` picks the
//! simulated TCP transport (and then a port is mandatory); anything
//! else is treated as a physical device path.
//!
//! # Example
//!
//! ```no_run
//! use hrplib_protocol::builder::RobotBuilder;
//! use std::time::Duration;
//!
//! # fn example() -> hrplib_core::Result<()> {
//! // Simulated robot on localhost:5555, with a shorter reply timeout.
//! let robot = RobotBuilder::new("virtual")
//!     .port(5555)
//!     .reply_timeout(Duration::from_millis(250))
//!     .build()?;
//!
//! // Physical robot on a serial device path.
//! let robot = RobotBuilder::new("/dev/ttyACM0").build()?;
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use hrplib_core::error::{Error, Result};
use hrplib_core::transport::Transport;
use hrplib_transport::{DeviceTransport, SocketTransport};

use crate::robot::{Robot, DEFAULT_REPLY_TIMEOUT};

/// Path literal that selects the simulated transport.
pub const VIRTUAL_PATH: &str = "virtual";

/// Fluent builder for [`Robot`].
pub struct RobotBuilder {
    path: String,
    port: Option<u16>,
    reply_timeout: Duration,
}

impl RobotBuilder {
    /// Create a builder for the given endpoint path.
    pub fn new(path: &str) -> Self {
        RobotBuilder {
            path: path.to_string(),
            port: None,
            reply_timeout: DEFAULT_REPLY_TIMEOUT,
        }
    }

    /// Set the TCP port of a simulated robot.
    ///
    /// Ignored for physical paths.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Override the reply timeout (default 1000 ms).
    pub fn reply_timeout(mut self, timeout: Duration) -> Self {
        self.reply_timeout = timeout;
        self
    }

    /// Whether this builder targets the simulated transport.
    pub fn is_virtual(&self) -> bool {
        self.path == VIRTUAL_PATH
    }

    /// Construct the [`Robot`], selecting the transport from the path.
    ///
    /// Does not connect; call [`Robot::connect`] (or let
    /// [`Robot::is_hrp`] manage the link itself). Fails with
    /// [`Error::InvalidArgument`] when the path is `"virtual"` and no
    /// port was provided.
    pub fn build(self) -> Result<Robot> {
        let transport: Box<dyn Transport> = if self.is_virtual() {
            let port = self.port.ok_or_else(|| {
                Error::InvalidArgument("simulated robot requires a port".into())
            })?;
            Box::new(SocketTransport::new(port))
        } else {
            Box::new(DeviceTransport::new(&self.path))
        };

        Ok(Robot::with_transport(transport, self.reply_timeout))
    }

    /// Construct the [`Robot`] over an explicitly provided transport,
    /// bypassing path selection. Used by tests with mock transports.
    pub fn build_with_transport(self, transport: Box<dyn Transport>) -> Robot {
        Robot::with_transport(transport, self.reply_timeout)
    }
}
