//! Per-connection protocol state machine.
//!
//! HRP allows at most one outstanding request per connection. The machine
//! tracks what reply (if any) the connection is waiting for; firing an
//! event whose source state does not match the current state fails with
//! [`Error::ProtocolBusy`] and has no side effect.
//!
//! The machine itself is pure: it owns no transport and writes nothing.
//! The request coordinator fires the entry event, and on success performs
//! the single frame write that the transition implies.

use crate::error::{Error, Result};

/// The waiting state of one HRP connection.
///
/// Exactly one instance exists per connection; it is created with the
/// connection and never shared across connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionState {
    /// No request outstanding. Initial and terminal state.
    #[default]
    Idle,
    /// A compliance probe or end-effector command was sent; waiting for
    /// an ack frame.
    AwaitingAck,
    /// A robot info request was sent; waiting for the info response.
    AwaitingRobotInfo,
    /// A get-all-joints request was sent; waiting for the joints frame.
    AwaitingJoints,
}

/// Events that drive [`ConnectionState`] transitions.
///
/// Entry events (`Idle -> Awaiting*`) each imply exactly one frame write,
/// performed by the coordinator synchronously with the transition. Return
/// events (`Awaiting* -> Idle`) imply none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolEvent {
    /// Send the compliance probe.
    SendAck,
    /// The probe reply (or its timeout) was consumed.
    AckReceived,
    /// Send the robot info request.
    RequestRobotInfo,
    /// The info reply (or its timeout) was consumed.
    GotRobotInfo,
    /// Send an end-effector delta command.
    SetEndEffectorDelta,
    /// Send the get-all-joints request.
    GetJoints,
    /// The joints reply (or its timeout) was consumed.
    GotJoints,
}

impl ProtocolEvent {
    /// The transition table: `(event, from) -> to`.
    ///
    /// Returns the target state if `from` is the event's source state,
    /// otherwise [`Error::ProtocolBusy`].
    pub fn target(self, from: ConnectionState) -> Result<ConnectionState> {
        use ConnectionState::*;
        use ProtocolEvent::*;

        match (self, from) {
            (SendAck, Idle) => Ok(AwaitingAck),
            (SetEndEffectorDelta, Idle) => Ok(AwaitingAck),
            (AckReceived, AwaitingAck) => Ok(Idle),
            (RequestRobotInfo, Idle) => Ok(AwaitingRobotInfo),
            (GotRobotInfo, AwaitingRobotInfo) => Ok(Idle),
            (GetJoints, Idle) => Ok(AwaitingJoints),
            (GotJoints, AwaitingJoints) => Ok(Idle),
            _ => Err(Error::ProtocolBusy),
        }
    }
}

/// A [`ConnectionState`] with checked event application.
#[derive(Debug, Default)]
pub struct StateMachine {
    current: ConnectionState,
}

impl StateMachine {
    /// Create a machine in the initial `Idle` state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state.
    pub fn current(&self) -> ConnectionState {
        self.current
    }

    /// Whether the connection is free to start a new request.
    pub fn is_idle(&self) -> bool {
        self.current == ConnectionState::Idle
    }

    /// Fire an event, advancing the state on success.
    ///
    /// On a source-state mismatch the machine is left untouched and
    /// [`Error::ProtocolBusy`] is returned.
    pub fn fire(&mut self, event: ProtocolEvent) -> Result<ConnectionState> {
        let next = event.target(self.current)?;
        self.current = next;
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::ConnectionState::*;
    use super::ProtocolEvent::*;
    use super::*;

    #[test]
    fn initial_state_is_idle() {
        let machine = StateMachine::new();
        assert_eq!(machine.current(), Idle);
        assert!(machine.is_idle());
    }

    #[test]
    fn probe_cycle() {
        let mut machine = StateMachine::new();
        assert_eq!(machine.fire(SendAck).unwrap(), AwaitingAck);
        assert_eq!(machine.fire(AckReceived).unwrap(), Idle);
    }

    #[test]
    fn info_cycle() {
        let mut machine = StateMachine::new();
        assert_eq!(machine.fire(RequestRobotInfo).unwrap(), AwaitingRobotInfo);
        assert_eq!(machine.fire(GotRobotInfo).unwrap(), Idle);
    }

    #[test]
    fn joints_cycle() {
        let mut machine = StateMachine::new();
        assert_eq!(machine.fire(GetJoints).unwrap(), AwaitingJoints);
        assert_eq!(machine.fire(GotJoints).unwrap(), Idle);
    }

    #[test]
    fn end_effector_shares_ack_wait() {
        let mut machine = StateMachine::new();
        assert_eq!(machine.fire(SetEndEffectorDelta).unwrap(), AwaitingAck);
        assert_eq!(machine.fire(AckReceived).unwrap(), Idle);
    }

    #[test]
    fn entry_events_rejected_while_busy() {
        for first in [SendAck, RequestRobotInfo, SetEndEffectorDelta, GetJoints] {
            let mut machine = StateMachine::new();
            machine.fire(first).unwrap();
            let busy_state = machine.current();

            for second in [SendAck, RequestRobotInfo, SetEndEffectorDelta, GetJoints] {
                assert!(
                    matches!(machine.fire(second), Err(Error::ProtocolBusy)),
                    "{second:?} should be rejected while in {busy_state:?}"
                );
                // A rejected event must not move the machine.
                assert_eq!(machine.current(), busy_state);
            }
        }
    }

    #[test]
    fn return_events_rejected_when_idle() {
        for event in [AckReceived, GotRobotInfo, GotJoints] {
            let mut machine = StateMachine::new();
            assert!(matches!(machine.fire(event), Err(Error::ProtocolBusy)));
            assert!(machine.is_idle());
        }
    }

    #[test]
    fn mismatched_return_event_rejected() {
        let mut machine = StateMachine::new();
        machine.fire(GetJoints).unwrap();
        assert!(matches!(machine.fire(AckReceived), Err(Error::ProtocolBusy)));
        assert_eq!(machine.current(), AwaitingJoints);
        assert_eq!(machine.fire(GotJoints).unwrap(), Idle);
    }
}
