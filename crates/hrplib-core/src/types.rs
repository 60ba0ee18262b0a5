//! Common data types shared across hrplib crates.
//!
//! These are the structured values the frame codec produces and consumes:
//! joint identifiers, robot metadata, and joint state snapshots. None of
//! them perform I/O.

use std::collections::HashMap;
use std::fmt;

use crate::error::{Error, Result};

/// Identifier of a robot joint.
///
/// HRP renders joint ids as exactly three zero-padded decimal digits, so
/// the valid range is 0 to 999 inclusive. Construction validates the
/// range; a `JointId` in hand is always wire-representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JointId(u16);

impl JointId {
    /// Largest id representable in the three-digit wire field.
    pub const MAX: u16 = 999;

    /// Create a joint id, rejecting values outside `0..=999`.
    pub fn new(id: i32) -> Result<Self> {
        if !(0..=Self::MAX as i32).contains(&id) {
            return Err(Error::InvalidArgument(format!(
                "joint id {id} out of range 0..=999"
            )));
        }
        Ok(JointId(id as u16))
    }

    /// The numeric value of the id.
    pub fn value(&self) -> u16 {
        self.0
    }

    /// The three-digit zero-padded wire rendering (e.g. `7` -> `"007"`).
    pub fn wire(&self) -> String {
        format!("{:03}", self.0)
    }
}

impl fmt::Display for JointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for JointId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let id: i32 = s
            .parse()
            .map_err(|_| Error::MalformedFrame(format!("non-numeric joint id {s:?}")))?;
        JointId::new(id).map_err(|_| Error::MalformedFrame(format!("joint id {id} out of range")))
    }
}

/// Static description of a single joint, as carried in the robot info
/// response.
///
/// The wire format does not guarantee field order inside a joint's
/// sub-record; decoders resolve each field by tag, never by position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JointInfo {
    /// Joint type (e.g. `"rotational"`, `"prismatic"`).
    pub joint_type: String,
    /// Human-readable description.
    pub description: String,
    /// Travel range as `(low, high)` in the joint's units.
    pub range: (i32, i32),
    /// Units of the range and of reported positions (e.g. `"deg"`, `"mm"`).
    pub units: String,
}

/// Robot metadata returned by the info request.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotInfo {
    /// Manufacturer name.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Number of degrees of freedom.
    pub degrees_of_freedom: u32,
    /// Joint ids in the order the robot announces them.
    pub joint_ids: Vec<JointId>,
    /// Per-joint descriptions, keyed by id.
    pub joints: HashMap<JointId, JointInfo>,
}

impl RobotInfo {
    /// Check the id-set consistency invariant: every announced joint id
    /// has a sub-record and no sub-record refers to an unannounced id.
    pub fn is_consistent(&self) -> bool {
        self.joint_ids.len() == self.joints.len()
            && self.joint_ids.iter().all(|id| self.joints.contains_key(id))
    }
}

/// A snapshot of joint positions, as carried by the get-all-joints reply.
///
/// Ids are not sorted; the snapshot preserves the order in which the
/// robot emitted them, and inserting an id that is already present
/// replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointState {
    entries: Vec<(JointId, f64)>,
}

impl JointState {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a joint's position, replacing any existing entry for the id.
    pub fn set(&mut self, id: JointId, value: f64) {
        if let Some(entry) = self.entries.iter_mut().find(|(i, _)| *i == id) {
            entry.1 = value;
        } else {
            self.entries.push((id, value));
        }
    }

    /// Look up a joint's position.
    pub fn get(&self, id: JointId) -> Option<f64> {
        self.entries.iter().find(|(i, _)| *i == id).map(|(_, v)| *v)
    }

    /// Iterate over `(id, value)` pairs in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (JointId, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Number of joints in the snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the snapshot is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(JointId, f64)> for JointState {
    fn from_iter<T: IntoIterator<Item = (JointId, f64)>>(iter: T) -> Self {
        let mut state = JointState::new();
        for (id, value) in iter {
            state.set(id, value);
        }
        state
    }
}
