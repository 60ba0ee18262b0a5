//! `Robot` -- the HRP request coordinator.
//!
//! Ties the frame codec to a [`Transport`] and a per-connection
//! [`StateMachine`]. Every public operation follows the same cycle:
//! transition the state machine (which implies exactly one frame write),
//! race the next inbound frame against the reply timer, then transition
//! back to idle and interpret the outcome.
//!
//! One `Robot` owns one connection. At most one request is in flight at
//! a time; `&mut self` on every operation makes concurrent calls on the
//! same connection impossible to express, and the state machine enforces
//! the same rule dynamically so a caller holding the connection in a
//! non-idle state gets [`Error::ProtocolBusy`] rather than interleaved
//! frames.

use std::time::Duration;

use tracing::{debug, trace, warn};

use hrplib_core::error::{Error, Result};
use hrplib_core::state::{ConnectionState, ProtocolEvent, StateMachine};
use hrplib_core::transport::Transport;
use hrplib_core::types::{JointState, RobotInfo};

use crate::frame;

/// Default bound on waiting for a reply frame.
pub const DEFAULT_REPLY_TIMEOUT: Duration = Duration::from_millis(1000);

/// Outcome of one read cycle: either a frame arrived, or the timer won.
///
/// A timeout is a value, not an error -- a silent peer is an expected
/// condition that each operation interprets for itself.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Reply {
    /// The next inbound frame, decoded as UTF-8.
    Frame(String),
    /// No frame arrived within the reply timeout.
    TimedOut,
}

/// A connection to one HRP robot.
///
/// Constructed via [`RobotBuilder`](crate::builder::RobotBuilder). The
/// transport decides whether the peer is a physical device or a
/// simulated robot; the protocol flow is identical for both.
pub struct Robot {
    transport: Box<dyn Transport>,
    machine: StateMachine,
    reply_timeout: Duration,
}

impl Robot {
    /// Create a robot driver over an already-constructed transport.
    ///
    /// Called by [`RobotBuilder`](crate::builder::RobotBuilder); useful
    /// directly when injecting a mock transport in tests.
    pub fn with_transport(transport: Box<dyn Transport>, reply_timeout: Duration) -> Self {
        Robot {
            transport,
            machine: StateMachine::new(),
            reply_timeout,
        }
    }

    /// The configured reply timeout.
    pub fn reply_timeout(&self) -> Duration {
        self.reply_timeout
    }

    /// The connection's current protocol state.
    pub fn state(&self) -> ConnectionState {
        self.machine.current()
    }

    /// Whether the underlying transport is connected.
    pub fn is_connected(&self) -> bool {
        self.transport.is_connected()
    }

    /// Connect the underlying transport.
    ///
    /// Returns `Ok(false)` without side effect when already connected.
    pub async fn connect(&mut self) -> Result<bool> {
        self.transport.connect().await
    }

    /// Disconnect the underlying transport.
    ///
    /// Returns `false` when already disconnected.
    pub async fn disconnect(&mut self) -> bool {
        self.transport.disconnect().await
    }

    /// Write one encoded frame to the peer.
    async fn write_frame(&mut self, frame: &str) -> Result<()> {
        trace!(frame, "writing frame");
        self.transport.send(&frame::frame_bytes(frame)).await
    }

    /// Await the next inbound frame, bounded by the reply timer.
    ///
    /// The two waits race; the first to complete wins. A frame that
    /// arrives after the timer has fired is dropped with the rest of the
    /// exchange -- the pending slot is gone by then.
    ///
    /// Peers emit one frame per transport write, so a single completed
    /// receive carries one whole frame.
    async fn read_reply(&mut self) -> Reply {
        let mut buf = [0u8; 1024];
        let deadline = self.reply_timeout;

        match tokio::time::timeout(deadline, self.transport.receive(&mut buf, deadline)).await {
            Ok(Ok(n)) if n > 0 => {
                let msg = String::from_utf8_lossy(&buf[..n]).into_owned();
                trace!(frame = %msg, "frame received");
                Reply::Frame(msg)
            }
            Ok(Ok(_)) => {
                debug!("transport yielded no data, treating as no reply");
                Reply::TimedOut
            }
            Ok(Err(Error::Timeout)) | Err(_) => {
                debug!(timeout_ms = deadline.as_millis(), "reply timer expired");
                Reply::TimedOut
            }
            Ok(Err(e)) => {
                warn!(error = %e, "transport error while awaiting reply");
                Reply::TimedOut
            }
        }
    }

    /// Probe whether the peer speaks HRP.
    ///
    /// The probe manages its own link cycle: connect, send the
    /// compliance ack, await the echoed ack, disconnect. It resolves
    /// `false` for every failure mode (busy connection, unreachable
    /// device, wrong reply, timeout) instead of erroring, so probes
    /// across many candidate connections can be aggregated with
    /// `join_all` and friends.
    pub async fn is_hrp(&mut self) -> bool {
        if !self.machine.is_idle() {
            return false;
        }

        match self.transport.connect().await {
            Ok(true) => {}
            Ok(false) => {
                debug!("probe refused: connection already open");
                return false;
            }
            Err(e) => {
                debug!(error = %e, "probe connect failed");
                return false;
            }
        }

        // is_idle() was checked above; the transition cannot fail.
        if self.machine.fire(ProtocolEvent::SendAck).is_err() {
            return false;
        }
        if let Err(e) = self.write_frame(&frame::compliance_ack()).await {
            warn!(error = %e, "probe write failed");
        }

        let reply = self.read_reply().await;
        self.transport.disconnect().await;
        let _ = self.machine.fire(ProtocolEvent::AckReceived);

        matches!(reply, Reply::Frame(msg) if msg == frame::compliance_ack())
    }

    /// Request the robot's metadata.
    ///
    /// Fails with [`Error::ProtocolBusy`] while another request is
    /// outstanding, [`Error::NotConnected`] on a closed connection,
    /// [`Error::Timeout`] when the peer stays silent, and
    /// [`Error::MalformedFrame`] when the reply does not decode.
    pub async fn get_robot_info(&mut self) -> Result<RobotInfo> {
        if !self.machine.is_idle() {
            return Err(Error::ProtocolBusy);
        }
        if !self.transport.is_connected() {
            return Err(Error::NotConnected);
        }

        self.machine.fire(ProtocolEvent::RequestRobotInfo)?;
        if let Err(e) = self.write_frame(&frame::robot_info_request()).await {
            // The pending slot must clear on every exit path, including
            // a failed write.
            let _ = self.machine.fire(ProtocolEvent::GotRobotInfo);
            return Err(e);
        }

        let reply = self.read_reply().await;
        self.machine.fire(ProtocolEvent::GotRobotInfo)?;

        match reply {
            Reply::TimedOut => Err(Error::Timeout),
            Reply::Frame(msg) => {
                if !msg.starts_with(&frame::robot_info_request()) {
                    return Err(Error::MalformedFrame(format!(
                        "unexpected reply to info request: {msg:?}"
                    )));
                }
                frame::parse_robot_info(&msg)
            }
        }
    }

    /// Command a differential end-effector move.
    ///
    /// Resolves `Ok(true)` when the robot acknowledges, `Ok(false)` when
    /// it stays silent past the timeout or answers with anything other
    /// than the general ack.
    pub async fn set_end_effector_delta(&mut self, deltas: [f64; 3]) -> Result<bool> {
        if !self.machine.is_idle() {
            return Err(Error::ProtocolBusy);
        }
        if !self.transport.is_connected() {
            return Err(Error::NotConnected);
        }

        // Encode before transitioning: an argument error must leave the
        // connection idle and write nothing.
        let command = frame::set_end_effector_delta(&deltas)?;

        self.machine.fire(ProtocolEvent::SetEndEffectorDelta)?;
        if let Err(e) = self.write_frame(&command).await {
            let _ = self.machine.fire(ProtocolEvent::AckReceived);
            return Err(e);
        }

        let reply = self.read_reply().await;
        self.machine.fire(ProtocolEvent::AckReceived)?;

        Ok(matches!(reply, Reply::Frame(msg) if msg == frame::general_ack()))
    }

    /// Poll the positions of all joints.
    pub async fn get_joints(&mut self) -> Result<JointState> {
        if !self.machine.is_idle() {
            return Err(Error::ProtocolBusy);
        }
        if !self.transport.is_connected() {
            return Err(Error::NotConnected);
        }

        self.machine.fire(ProtocolEvent::GetJoints)?;
        if let Err(e) = self.write_frame(&frame::get_all_joints()).await {
            let _ = self.machine.fire(ProtocolEvent::GotJoints);
            return Err(e);
        }

        let reply = self.read_reply().await;
        self.machine.fire(ProtocolEvent::GotJoints)?;

        match reply {
            Reply::TimedOut => Err(Error::Timeout),
            Reply::Frame(msg) => frame::parse_joints_frame(&msg),
        }
    }
}
