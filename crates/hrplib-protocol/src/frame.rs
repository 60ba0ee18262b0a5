//! HRP text-frame encoder/decoder.
//!
//! HRP frames are short ASCII strings whose fields are separated by `:`,
//! always starting and ending with the separator. Requests and responses
//! share the grammar; a `:HRP:` preamble identifies the protocol and the
//! following fields select the operation.
//!
//! # Frame forms
//!
//! ```text
//! :HRP:A:                     general ack
//! :HRP:CA:                    compliance ack (probe and its reply)
//! :HRP:INFO:R:                robot info request
//! :HRP:INFO:J:007:            joint info request
//! :HRP:G:J:007:               get one joint
//! :HRP:GA:J:                  get all joints
//! :HRP:S:J:042:               set one joint
//! :HRP:S:EE:V:0.00:3.00:56.70: set end-effector delta
//! ```
//!
//! Joint ids are exactly three zero-padded digits; decimal values carry
//! exactly two fractional digits (see [`format_decimal`]). Everything in
//! this module is pure -- frames come in and go out as strings, and the
//! caller owns all I/O.

use std::collections::HashMap;

use bytes::{BufMut, BytesMut};

use hrplib_core::error::{Error, Result};
use hrplib_core::types::{JointId, JointInfo, JointState, RobotInfo};

/// Field separator. Every frame starts and ends with it.
pub const SEP: char = ':';

/// Separator inside list-valued fields (joint id lists, ranges).
pub const ARRAY_SEP: char = ',';

/// Protocol preamble token.
const HRP: &str = "HRP";
/// General ack token.
const ACK: &str = "A";
/// Compliance ack token.
const COMPLIANCE_ACK: &str = "CA";
/// Info token.
const INFO: &str = "INFO";
/// Get token.
const GET: &str = "G";
/// Get-all token.
const GET_ALL: &str = "GA";
/// Set token.
const SET: &str = "S";
/// End-effector token.
const END_EFFECTOR: &str = "EE";
/// Joint token (doubles as the joint-id-list tag in info responses).
const JOINT: &str = "J";
/// Robot token.
const ROBOT: &str = "R";
/// Value token.
const VALUE: &str = "V";

/// Number of tagged fields in each joint's info sub-record.
///
/// The sub-records are laid out back to back with this fixed stride; the
/// tags *within* a sub-record may appear in any order.
const JOINT_INFO_FIELDS: usize = 4;

// Info response tags.
const TAG_BRAND: &str = "B";
const TAG_MODEL: &str = "M";
const TAG_DOF: &str = "DOF";
const TAG_JOINT_TYPE: &str = "J_TYPE";
const TAG_JOINT_DESC: &str = "J_DESC";
const TAG_JOINT_RANGE: &str = "J_RANGE";
const TAG_JOINT_UNITS: &str = "J_UNITS";

/// Join tokens into a `:`-wrapped frame.
fn frame(parts: &[&str]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.len() + 1).sum::<usize>() + 1);
    out.push(SEP);
    for part in parts {
        out.push_str(part);
        out.push(SEP);
    }
    out
}

/// The general ack frame, `:HRP:A:`.
pub fn general_ack() -> String {
    frame(&[HRP, ACK])
}

/// The compliance ack frame, `:HRP:CA:`.
///
/// Sent as the compliance probe; a conforming peer answers with the same
/// frame.
pub fn compliance_ack() -> String {
    frame(&[HRP, COMPLIANCE_ACK])
}

/// The robot info request frame, `:HRP:INFO:R:`.
///
/// Also the preamble of the info response, which appends the tagged
/// metadata fields.
pub fn robot_info_request() -> String {
    frame(&[HRP, INFO, ROBOT])
}

/// The get-all-joints request frame, `:HRP:GA:J:`.
///
/// Also the preamble of the joints reply, which appends id/value pairs.
pub fn get_all_joints() -> String {
    frame(&[HRP, GET_ALL, JOINT])
}

/// Encode a joint info request, `:HRP:INFO:J:<id>:`.
///
/// Fails with [`Error::InvalidArgument`] when `id` is outside `0..=999`;
/// nothing is written to the wire in that case.
pub fn joint_info_request(id: i32) -> Result<String> {
    let id = JointId::new(id)?;
    Ok(frame(&[HRP, INFO, JOINT, &id.wire()]))
}

/// Encode a get-joint request, `:HRP:G:J:<id>:`.
pub fn get_joint(id: i32) -> Result<String> {
    let id = JointId::new(id)?;
    Ok(frame(&[HRP, GET, JOINT, &id.wire()]))
}

/// Encode a set-joint command, `:HRP:S:J:<value>:`.
///
/// The value shares the three-digit wire field with joint ids and is
/// validated against the same range.
pub fn set_joint(value: i32) -> Result<String> {
    let value = JointId::new(value)?;
    Ok(frame(&[HRP, SET, JOINT, &value.wire()]))
}

/// The end-effector command header, `:HRP:S:EE:V` (no trailing separator).
///
/// Used as a prefix when matching inbound end-effector frames.
pub fn end_effector_header() -> String {
    let mut header = frame(&[HRP, SET, END_EFFECTOR, VALUE]);
    header.pop();
    header
}

/// Encode an end-effector delta command, `:HRP:S:EE:V:<d1>:<d2>:<d3>:`.
///
/// Requires exactly three deltas, each rendered by [`format_decimal`].
/// Fails with [`Error::InvalidArgument`] otherwise, before any I/O.
pub fn set_end_effector_delta(deltas: &[f64]) -> Result<String> {
    if deltas.len() != 3 {
        return Err(Error::InvalidArgument(format!(
            "end-effector delta needs exactly 3 values, got {}",
            deltas.len()
        )));
    }

    let mut out = end_effector_header();
    for delta in deltas {
        out.push(SEP);
        out.push_str(&format_decimal(*delta));
    }
    out.push(SEP);
    Ok(out)
}

/// Render a decimal value as `[-]INTEGER.DD` with exactly two fractional
/// digits.
///
/// The sign is split off first and applied once to the whole rendered
/// magnitude. The fractional part is `round(|frac| * 100)`, half away
/// from zero; when it rounds to 100 the carry propagates into the
/// integer part (`0.995` -> `"1.00"`).
pub fn format_decimal(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let magnitude = value.abs();
    let mut int_part = magnitude.floor() as i64;
    let mut frac_part = ((magnitude - magnitude.floor()) * 100.0).round() as i64;
    if frac_part == 100 {
        int_part += 1;
        frac_part = 0;
    }
    format!("{sign}{int_part}.{frac_part:02}")
}

/// Map a frame string to the byte sequence written to the wire.
///
/// Frames are ASCII, so this is a 1:1 mapping of character codes; it
/// exists so the physical transport can be fed raw codepoints without
/// caring about frame semantics.
pub fn frame_bytes(frame: &str) -> Vec<u8> {
    let mut buf = BytesMut::with_capacity(frame.len());
    buf.put_slice(frame.as_bytes());
    buf.to_vec()
}

/// Encode a joints snapshot as a reply frame,
/// `:HRP:GA:J:<id>:<value>:...:`.
///
/// Used by peers that answer get-all-joints requests. Ids are emitted
/// unpadded, like the id list in [`robot_info_response`]; only request
/// frames addressed at a single joint use the padded wire field.
pub fn joints_frame(state: &JointState) -> String {
    let mut out = get_all_joints();
    for (id, value) in state.iter() {
        out.push_str(&id.to_string());
        out.push(SEP);
        out.push_str(&format_decimal(value));
        out.push(SEP);
    }
    out
}

/// Decode a joints reply frame into a [`JointState`].
///
/// Strips the `:HRP:GA:J:` preamble, then interprets the remaining
/// tokens as id/value pairs. Fails with [`Error::MalformedFrame`] when
/// the preamble is missing, the token count is odd, or a field does not
/// parse.
pub fn parse_joints_frame(input: &str) -> Result<JointState> {
    let preamble = get_all_joints();
    let rest = input.strip_prefix(&preamble).ok_or_else(|| {
        Error::MalformedFrame(format!("joints frame does not start with {preamble:?}"))
    })?;

    let mut tokens: Vec<&str> = rest.split(SEP).collect();
    // The trailing separator yields one empty token.
    if tokens.last() == Some(&"") {
        tokens.pop();
    }

    if tokens.len() % 2 != 0 {
        return Err(Error::MalformedFrame(format!(
            "joints frame has {} tokens, expected id/value pairs",
            tokens.len()
        )));
    }

    let mut state = JointState::new();
    for pair in tokens.chunks(2) {
        let id: JointId = pair[0].parse()?;
        let value: f64 = pair[1]
            .parse()
            .map_err(|_| Error::MalformedFrame(format!("non-numeric joint value {:?}", pair[1])))?;
        state.set(id, value);
    }
    Ok(state)
}

/// Encode robot metadata as an info response frame.
///
/// Produces `:HRP:INFO:R:B:<brand>:M:<model>:DOF:<n>:J:<id,id,...>` with
/// each announced joint's four tagged fields appended in declaration
/// order, closed by a trailing separator. Joints missing from
/// `info.joints` are skipped; well-formed peers keep the id set
/// consistent (see [`RobotInfo::is_consistent`]).
pub fn robot_info_response(info: &RobotInfo) -> String {
    let mut out = robot_info_request();

    out.push_str(TAG_BRAND);
    out.push(SEP);
    out.push_str(&info.brand);
    out.push(SEP);

    out.push_str(TAG_MODEL);
    out.push(SEP);
    out.push_str(&info.model);
    out.push(SEP);

    out.push_str(TAG_DOF);
    out.push(SEP);
    out.push_str(&info.degrees_of_freedom.to_string());
    out.push(SEP);

    out.push_str(JOINT);
    out.push(SEP);
    let ids: Vec<String> = info.joint_ids.iter().map(|id| id.to_string()).collect();
    out.push_str(&ids.join(&ARRAY_SEP.to_string()));
    out.push(SEP);

    for id in &info.joint_ids {
        let Some(joint) = info.joints.get(id) else {
            continue;
        };
        out.push_str(TAG_JOINT_TYPE);
        out.push(SEP);
        out.push_str(&joint.joint_type);
        out.push(SEP);
        out.push_str(TAG_JOINT_DESC);
        out.push(SEP);
        out.push_str(&joint.description);
        out.push(SEP);
        out.push_str(TAG_JOINT_RANGE);
        out.push(SEP);
        out.push_str(&format!("{}{}{}", joint.range.0, ARRAY_SEP, joint.range.1));
        out.push(SEP);
        out.push_str(TAG_JOINT_UNITS);
        out.push(SEP);
        out.push_str(&joint.units);
        out.push(SEP);
    }

    out
}

/// Parse a comma-separated integer list.
fn parse_int_list(value: &str) -> Result<Vec<i32>> {
    value
        .split(ARRAY_SEP)
        .map(|item| {
            item.parse::<i32>()
                .map_err(|_| Error::MalformedFrame(format!("non-numeric list item {item:?}")))
        })
        .collect()
}

/// Assemble one joint's sub-record from its tag/value map.
///
/// The map is built positionally (four fields per joint, fixed stride)
/// but each field is resolved here by tag, so tag order within the block
/// does not matter.
fn assemble_joint_info(fields: &HashMap<&str, &str>) -> Result<JointInfo> {
    let lookup = |tag: &str| -> Result<&str> {
        fields
            .get(tag)
            .copied()
            .ok_or_else(|| Error::MalformedFrame(format!("joint record missing tag {tag}")))
    };

    let range = parse_int_list(lookup(TAG_JOINT_RANGE)?)?;
    if range.len() != 2 {
        return Err(Error::MalformedFrame(format!(
            "joint range has {} values, expected 2",
            range.len()
        )));
    }

    Ok(JointInfo {
        joint_type: lookup(TAG_JOINT_TYPE)?.to_string(),
        description: lookup(TAG_JOINT_DESC)?.to_string(),
        range: (range[0], range[1]),
        units: lookup(TAG_JOINT_UNITS)?.to_string(),
    })
}

/// Decode a robot info response frame into a [`RobotInfo`].
///
/// Drops the four-token preamble (`:HRP:INFO:R`) and the trailing empty
/// token, then walks the rest as tag/value pairs. After the `J` id-list
/// pair, the next `4 x N` pairs are the per-joint sub-records, located
/// purely by position with each field resolved by tag. Fails with
/// [`Error::MalformedFrame`] on an unrecognized tag or a field that does
/// not parse.
pub fn parse_robot_info(input: &str) -> Result<RobotInfo> {
    let mut tokens: Vec<&str> = input.split(SEP).collect();
    if tokens.last() == Some(&"") {
        tokens.pop();
    }

    if tokens.len() < 4 || tokens[0] != "" || tokens[1] != HRP || tokens[2] != INFO || tokens[3] != ROBOT
    {
        return Err(Error::MalformedFrame(
            "info frame does not start with :HRP:INFO:R:".into(),
        ));
    }
    let tokens = &tokens[4..];

    let mut brand: Option<String> = None;
    let mut model: Option<String> = None;
    let mut dof: Option<u32> = None;
    let mut joint_ids: Vec<JointId> = Vec::new();
    let mut joints: HashMap<JointId, JointInfo> = HashMap::new();

    let mut i = 0;
    while i + 1 < tokens.len() {
        let tag = tokens[i];
        let value = tokens[i + 1];
        i += 2;

        match tag {
            TAG_BRAND => brand = Some(value.to_string()),
            TAG_MODEL => model = Some(value.to_string()),
            TAG_DOF => {
                dof = Some(value.parse().map_err(|_| {
                    Error::MalformedFrame(format!("non-numeric DOF value {value:?}"))
                })?)
            }
            JOINT => {
                for raw in parse_int_list(value)? {
                    joint_ids.push(JointId::new(raw).map_err(|_| {
                        Error::MalformedFrame(format!("joint id {raw} out of range"))
                    })?);
                }

                // The joint sub-records follow immediately: one block of
                // JOINT_INFO_FIELDS tag/value pairs per announced id.
                for id in &joint_ids {
                    let mut fields: HashMap<&str, &str> = HashMap::new();
                    for _ in 0..JOINT_INFO_FIELDS {
                        let (Some(tag), Some(value)) = (tokens.get(i), tokens.get(i + 1)) else {
                            return Err(Error::MalformedFrame(format!(
                                "truncated joint record for id {id}"
                            )));
                        };
                        if !matches!(
                            *tag,
                            TAG_JOINT_TYPE | TAG_JOINT_DESC | TAG_JOINT_RANGE | TAG_JOINT_UNITS
                        ) {
                            return Err(Error::MalformedFrame(format!(
                                "unrecognized joint tag {tag:?}"
                            )));
                        }
                        fields.insert(*tag, *value);
                        i += 2;
                    }
                    joints.insert(*id, assemble_joint_info(&fields)?);
                }
            }
            other => {
                return Err(Error::MalformedFrame(format!(
                    "unrecognized info tag {other:?}"
                )));
            }
        }
    }

    // A leftover token means a tag with no value.
    if i < tokens.len() {
        return Err(Error::MalformedFrame(format!(
            "dangling info tag {:?}",
            tokens[i]
        )));
    }

    Ok(RobotInfo {
        brand: brand
            .ok_or_else(|| Error::MalformedFrame("info frame missing brand".into()))?,
        model: model
            .ok_or_else(|| Error::MalformedFrame("info frame missing model".into()))?,
        degrees_of_freedom: dof
            .ok_or_else(|| Error::MalformedFrame("info frame missing DOF".into()))?,
        joint_ids,
        joints,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jid(id: i32) -> JointId {
        JointId::new(id).unwrap()
    }

    // ---------------------------------------------------------------
    // Fixed literals
    // ---------------------------------------------------------------

    #[test]
    fn general_ack_literal() {
        assert_eq!(general_ack(), ":HRP:A:");
    }

    #[test]
    fn compliance_ack_literal() {
        assert_eq!(compliance_ack(), ":HRP:CA:");
    }

    #[test]
    fn robot_info_request_literal() {
        assert_eq!(robot_info_request(), ":HRP:INFO:R:");
    }

    #[test]
    fn get_all_joints_literal() {
        assert_eq!(get_all_joints(), ":HRP:GA:J:");
    }

    #[test]
    fn end_effector_header_literal() {
        assert_eq!(end_effector_header(), ":HRP:S:EE:V");
    }

    // ---------------------------------------------------------------
    // Joint-addressed frames
    // ---------------------------------------------------------------

    #[test]
    fn encode_get_joint() {
        assert_eq!(get_joint(0).unwrap(), ":HRP:G:J:000:");
        assert_eq!(get_joint(7).unwrap(), ":HRP:G:J:007:");
        assert_eq!(get_joint(999).unwrap(), ":HRP:G:J:999:");
    }

    #[test]
    fn encode_set_joint() {
        assert_eq!(set_joint(42).unwrap(), ":HRP:S:J:042:");
    }

    #[test]
    fn encode_joint_info_request() {
        assert_eq!(joint_info_request(7).unwrap(), ":HRP:INFO:J:007:");
    }

    #[test]
    fn joint_frames_reject_out_of_range_ids() {
        for bad in [-1, 1400] {
            assert!(matches!(get_joint(bad), Err(Error::InvalidArgument(_))));
            assert!(matches!(set_joint(bad), Err(Error::InvalidArgument(_))));
            assert!(matches!(
                joint_info_request(bad),
                Err(Error::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn get_joint_round_trips_every_id() {
        for id in 0..=999 {
            let frame = get_joint(id).unwrap();
            let token = frame.split(SEP).nth(4).unwrap();
            let decoded: JointId = token.parse().unwrap();
            assert_eq!(decoded.value() as i32, id);
        }
    }

    // ---------------------------------------------------------------
    // End-effector deltas
    // ---------------------------------------------------------------

    #[test]
    fn encode_end_effector_delta() {
        let frame = set_end_effector_delta(&[0.0, 3.0, 56.7]).unwrap();
        assert_eq!(frame, ":HRP:S:EE:V:0.00:3.00:56.70:");
    }

    #[test]
    fn end_effector_delta_rejects_wrong_arity() {
        assert!(matches!(
            set_end_effector_delta(&[1.0, 2.0]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            set_end_effector_delta(&[1.0, 2.0, 3.0, 4.0]),
            Err(Error::InvalidArgument(_))
        ));
        assert!(matches!(
            set_end_effector_delta(&[]),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn end_effector_frame_starts_with_header() {
        let frame = set_end_effector_delta(&[-1.5, 0.0, 2.25]).unwrap();
        assert!(frame.starts_with(&end_effector_header()));
        assert_eq!(frame, ":HRP:S:EE:V:-1.50:0.00:2.25:");
    }

    // ---------------------------------------------------------------
    // Decimal formatting
    // ---------------------------------------------------------------

    #[test]
    fn format_decimal_table() {
        assert_eq!(format_decimal(0.0), "0.00");
        assert_eq!(format_decimal(-3.0), "-3.00");
        assert_eq!(format_decimal(0.1), "0.10");
        assert_eq!(format_decimal(100.234), "100.23");
        assert_eq!(format_decimal(-0.0245), "-0.02");
    }

    #[test]
    fn format_decimal_carries_rounded_fraction() {
        assert_eq!(format_decimal(0.995), "1.00");
        assert_eq!(format_decimal(-0.995), "-1.00");
        assert_eq!(format_decimal(2.999), "3.00");
    }

    #[test]
    fn format_decimal_sign_applies_once() {
        // Negative value with a zero integer part keeps a single sign.
        assert_eq!(format_decimal(-0.5), "-0.50");
        assert_eq!(format_decimal(-0.0245), "-0.02");
    }

    #[test]
    fn format_decimal_idempotent_on_own_output() {
        for value in [0.0, -3.0, 0.1, 100.234, -0.0245, 0.995, -12.345] {
            let rendered = format_decimal(value);
            let reparsed: f64 = rendered.parse().unwrap();
            assert_eq!(format_decimal(reparsed), rendered);
        }
    }

    // ---------------------------------------------------------------
    // Frame bytes
    // ---------------------------------------------------------------

    #[test]
    fn frame_bytes_maps_character_codes() {
        assert_eq!(
            frame_bytes(":HRP:A:"),
            vec![58, 72, 82, 80, 58, 65, 58]
        );
    }

    // ---------------------------------------------------------------
    // Joints frames
    // ---------------------------------------------------------------

    #[test]
    fn parse_joints_frame_pairs() {
        let state = parse_joints_frame(":HRP:GA:J:010:2.34:023:0.34:045:23.00:").unwrap();
        assert_eq!(state.len(), 3);
        assert_eq!(state.get(jid(10)), Some(2.34));
        assert_eq!(state.get(jid(23)), Some(0.34));
        assert_eq!(state.get(jid(45)), Some(23.0));
    }

    #[test]
    fn parse_joints_frame_accepts_unpadded_ids() {
        let state = parse_joints_frame(":HRP:GA:J:10:2.34:23:0.34:").unwrap();
        assert_eq!(state.get(jid(10)), Some(2.34));
        assert_eq!(state.get(jid(23)), Some(0.34));
    }

    #[test]
    fn parse_joints_frame_empty() {
        let state = parse_joints_frame(":HRP:GA:J:").unwrap();
        assert!(state.is_empty());
    }

    #[test]
    fn parse_joints_frame_rejects_odd_token_count() {
        assert!(matches!(
            parse_joints_frame(":HRP:GA:J:010:2.34:023:"),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_joints_frame_rejects_wrong_preamble() {
        assert!(matches!(
            parse_joints_frame(":HRP:G:J:010:2.34:"),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_joints_frame_rejects_non_numeric_value() {
        assert!(matches!(
            parse_joints_frame(":HRP:GA:J:010:abc:"),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn joints_frame_emits_unpadded_ids() {
        let state: JointState = [(jid(10), 2.34), (jid(5), 0.0)].into_iter().collect();
        assert_eq!(joints_frame(&state), ":HRP:GA:J:10:2.34:5:0.00:");
    }

    #[test]
    fn joints_frame_round_trip() {
        let state: JointState = [(jid(10), 2.34), (jid(23), 0.34), (jid(45), 23.0)]
            .into_iter()
            .collect();
        let decoded = parse_joints_frame(&joints_frame(&state)).unwrap();
        assert_eq!(decoded, state);
    }

    // ---------------------------------------------------------------
    // Robot info frames
    // ---------------------------------------------------------------

    fn scara_info() -> RobotInfo {
        let mut joints = HashMap::new();
        joints.insert(
            jid(10),
            JointInfo {
                joint_type: "rotational".into(),
                description: "shoulder".into(),
                range: (-90, 90),
                units: "deg".into(),
            },
        );
        joints.insert(
            jid(23),
            JointInfo {
                joint_type: "rotational".into(),
                description: "elbow".into(),
                range: (-120, 120),
                units: "deg".into(),
            },
        );
        RobotInfo {
            brand: "AMM".into(),
            model: "Scara".into(),
            degrees_of_freedom: 2,
            joint_ids: vec![jid(10), jid(23)],
            joints,
        }
    }

    #[test]
    fn robot_info_response_layout() {
        let frame = robot_info_response(&scara_info());
        assert_eq!(
            frame,
            ":HRP:INFO:R:B:AMM:M:Scara:DOF:2:J:10,23\
             :J_TYPE:rotational:J_DESC:shoulder:J_RANGE:-90,90:J_UNITS:deg\
             :J_TYPE:rotational:J_DESC:elbow:J_RANGE:-120,120:J_UNITS:deg:"
        );
    }

    #[test]
    fn parse_robot_info_round_trip() {
        let info = scara_info();
        let decoded = parse_robot_info(&robot_info_response(&info)).unwrap();
        assert_eq!(decoded, info);
        assert!(decoded.is_consistent());
    }

    #[test]
    fn parse_robot_info_ignores_tag_order_within_blocks() {
        // Same content as scara_info(), but each joint block shuffles
        // its four tags differently.
        let frame = ":HRP:INFO:R:B:AMM:M:Scara:DOF:2:J:10,23\
                     :J_UNITS:deg:J_RANGE:-90,90:J_TYPE:rotational:J_DESC:shoulder\
                     :J_DESC:elbow:J_UNITS:deg:J_TYPE:rotational:J_RANGE:-120,120:";
        let decoded = parse_robot_info(frame).unwrap();
        assert_eq!(decoded, scara_info());
    }

    #[test]
    fn parse_robot_info_rejects_unknown_top_level_tag() {
        assert!(matches!(
            parse_robot_info(":HRP:INFO:R:B:AMM:Q:what:"),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_robot_info_rejects_unknown_joint_tag() {
        let frame = ":HRP:INFO:R:B:AMM:M:Scara:DOF:1:J:10\
                     :J_TYPE:rotational:J_DESC:shoulder:J_SPEED:5:J_UNITS:deg:";
        assert!(matches!(
            parse_robot_info(frame),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_robot_info_rejects_dangling_tag() {
        // "M" has no value token following it.
        assert!(matches!(
            parse_robot_info(":HRP:INFO:R:B:AMM:M:"),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_robot_info_rejects_non_numeric_dof() {
        assert!(matches!(
            parse_robot_info(":HRP:INFO:R:B:AMM:M:Scara:DOF:two:"),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_robot_info_rejects_truncated_joint_record() {
        let frame = ":HRP:INFO:R:B:AMM:M:Scara:DOF:1:J:10:J_TYPE:rotational:";
        assert!(matches!(
            parse_robot_info(frame),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_robot_info_rejects_bad_range_arity() {
        let frame = ":HRP:INFO:R:B:AMM:M:Scara:DOF:1:J:10\
                     :J_TYPE:rotational:J_DESC:shoulder:J_RANGE:-90,0,90:J_UNITS:deg:";
        assert!(matches!(
            parse_robot_info(frame),
            Err(Error::MalformedFrame(_))
        ));
    }

    #[test]
    fn parse_robot_info_rejects_wrong_preamble() {
        assert!(matches!(
            parse_robot_info(":HRP:GA:J:"),
            Err(Error::MalformedFrame(_))
        ));
    }
}
