//! hrplib-core: Core traits, types, and error definitions for hrplib.
//!
//! This crate defines the transport-agnostic abstractions the HRP
//! protocol driver builds on. Applications that only need the structured
//! types (joint ids, robot info, joint state) can depend on this crate
//! without pulling in any transport.
//!
//! # Key types
//!
//! - [`Transport`] -- byte-level channel to an HRP peer
//! - [`StateMachine`] / [`ConnectionState`] -- one-request-in-flight guard
//! - [`RobotInfo`], [`JointInfo`], [`JointState`], [`JointId`] -- data model
//! - [`Error`] / [`Result`] -- error handling

pub mod error;
pub mod state;
pub mod transport;
pub mod types;

// Re-export key types at crate root for ergonomic `use hrplib_core::*`.
pub use error::{Error, Result};
pub use state::{ConnectionState, ProtocolEvent, StateMachine};
pub use transport::Transport;
pub use types::{JointId, JointInfo, JointState, RobotInfo};
