//! Error types for hrplib.
//!
//! All fallible operations across the library return [`Result<T>`], which
//! uses [`Error`] as the error type. Encode-time argument errors, protocol
//! state violations, transport failures, and decode errors are all
//! captured here.

/// The error type for all hrplib operations.
///
/// Variants cover the failure modes of an HRP link: rejected frame
/// arguments, a busy per-connection state machine, device open failures,
/// missing connections, reply timeouts, and malformed inbound frames.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A frame encoder was called with an argument it refuses to put on
    /// the wire (joint id out of range, wrong delta vector length).
    ///
    /// Reported synchronously to the caller; nothing is written.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// An operation was attempted while another request is outstanding
    /// on the same connection.
    #[error("protocol busy: a request is already in flight")]
    ProtocolBusy,

    /// The physical device could not be enumerated or opened.
    #[error("device unavailable: {0}")]
    DeviceUnavailable(String),

    /// An operation was attempted on a disconnected connection.
    #[error("not connected")]
    NotConnected,

    /// No reply arrived within the configured bound.
    ///
    /// A timeout is an expected outcome of talking to a silent peer, not
    /// a crash: probe operations resolve `false` instead of surfacing it.
    #[error("timeout waiting for reply")]
    Timeout,

    /// An inbound frame could not be decoded (unrecognized tag, odd
    /// pair-list length, non-numeric field).
    #[error("malformed frame: {0}")]
    MalformedFrame(String),

    /// A transport-level error (serial port, TCP socket).
    #[error("transport error: {0}")]
    Transport(String),

    /// An underlying I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_invalid_argument() {
        let e = Error::InvalidArgument("joint id 1400 out of range".into());
        assert_eq!(e.to_string(), "invalid argument: joint id 1400 out of range");
    }

    #[test]
    fn error_display_protocol_busy() {
        let e = Error::ProtocolBusy;
        assert_eq!(e.to_string(), "protocol busy: a request is already in flight");
    }

    #[test]
    fn error_display_device_unavailable() {
        let e = Error::DeviceUnavailable("/dev/hidraw3 not present".into());
        assert_eq!(e.to_string(), "device unavailable: /dev/hidraw3 not present");
    }

    #[test]
    fn error_display_not_connected() {
        assert_eq!(Error::NotConnected.to_string(), "not connected");
    }

    #[test]
    fn error_display_timeout() {
        assert_eq!(Error::Timeout.to_string(), "timeout waiting for reply");
    }

    #[test]
    fn error_display_malformed_frame() {
        let e = Error::MalformedFrame("unknown tag Q".into());
        assert_eq!(e.to_string(), "malformed frame: unknown tag Q");
    }

    #[test]
    fn error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe broken");
        let e: Error = io_err.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().contains("pipe broken"));
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<Error>();
    }
}
