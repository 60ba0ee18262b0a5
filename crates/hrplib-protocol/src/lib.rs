//! HRP protocol engine for hrplib.
//!
//! This crate implements HRP, a `:`-delimited ASCII request/response
//! protocol for robot arms. It provides:
//!
//! - **Frame codec** ([`frame`]) -- pure encode/decode of every HRP
//!   frame kind, including the fixed-point decimal rendering and the
//!   tag-keyed robot info parser. Peers that only need to *speak* the
//!   grammar (e.g. a simulated robot) can depend on this module alone.
//! - **Robot driver** ([`robot`]) -- the request coordinator: one
//!   connection, one request in flight, each exchange raced against a
//!   reply timer.
//! - **Builder** ([`builder`]) -- endpoint configuration and transport
//!   selection (physical device path vs `"virtual"` + port).
//!
//! # Example
//!
//! ```
//! use hrplib_protocol::frame;
//!
//! // Build a get-joint request.
//! let cmd = frame::get_joint(7).unwrap();
//! assert_eq!(cmd, ":HRP:G:J:007:");
//!
//! // Decode a joints reply from the robot.
//! let state = frame::parse_joints_frame(":HRP:GA:J:010:2.34:023:0.34:").unwrap();
//! assert_eq!(state.len(), 2);
//! ```

pub mod builder;
pub mod frame;
pub mod robot;

// Re-export the primary types for ergonomic `use hrplib_protocol::*`.
pub use builder::RobotBuilder;
pub use robot::{Robot, DEFAULT_REPLY_TIMEOUT};
