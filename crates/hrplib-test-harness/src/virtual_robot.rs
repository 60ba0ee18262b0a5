//! An in-process simulated HRP robot.
//!
//! [`VirtualRobot`] is a TCP server on a random localhost port that
//! speaks the robot side of HRP: it echoes compliance acks, answers info
//! and joint queries from configured metadata, and acknowledges
//! end-effector commands while recording the requested deltas.
//!
//! Unlike an expectation queue, the virtual robot answers by protocol
//! logic, so a single instance can serve a connect/probe/disconnect
//! cycle followed by arbitrary queries in any order.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use hrplib_core::error::{Error, Result};
use hrplib_core::types::{JointId, JointInfo, JointState, RobotInfo};
use hrplib_protocol::frame;

/// A simulated HRP robot listening on localhost.
///
/// Connections are served one at a time; a client that disconnects and
/// reconnects (as the compliance probe does) is picked up by the next
/// accept. The server task runs until the `VirtualRobot` is dropped.
pub struct VirtualRobot {
    port: u16,
    deltas: Arc<Mutex<Vec<[f64; 3]>>>,
    server: JoinHandle<()>,
}

impl VirtualRobot {
    /// Start a virtual robot serving the given metadata and joint
    /// positions.
    ///
    /// Binds a random port; retrieve it with [`port`](Self::port) to
    /// point a client at the robot.
    pub async fn start(info: RobotInfo, joints: JointState) -> Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| Error::Transport(format!("failed to bind virtual robot: {e}")))?;
        let port = listener.local_addr().map_err(Error::Io)?.port();

        let deltas = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&deltas);

        let server = tokio::spawn(async move {
            loop {
                let (stream, _) = match listener.accept().await {
                    Ok(conn) => conn,
                    Err(e) => {
                        tracing::warn!(error = %e, "virtual robot accept failed");
                        continue;
                    }
                };
                serve_client(stream, &info, &joints, &recorded).await;
            }
        });

        tracing::debug!(port, "virtual robot listening");
        Ok(VirtualRobot {
            port,
            deltas,
            server,
        })
    }

    /// Start a virtual robot with the default three-joint SCARA arm.
    pub async fn start_scara() -> Result<Self> {
        let (info, joints) = scara_arm();
        Self::start(info, joints).await
    }

    /// The port the robot is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Every end-effector delta command the robot has acknowledged, in
    /// arrival order.
    pub fn received_deltas(&self) -> Vec<[f64; 3]> {
        self.deltas.lock().unwrap().clone()
    }
}

impl Drop for VirtualRobot {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Metadata and starting positions for the default test arm: a SCARA
/// with joints 10, 23, and 45.
pub fn scara_arm() -> (RobotInfo, JointState) {
    let arm = [
        (10, "rotational", "shoulder", (-120, 120), "deg"),
        (23, "rotational", "elbow", (-150, 150), "deg"),
        (45, "prismatic", "vertical slide", (0, 200), "mm"),
    ];

    let mut joint_ids = Vec::new();
    let mut joints = HashMap::new();
    for (id, joint_type, description, range, units) in arm {
        let id = JointId::new(id).expect("joint id in range");
        joint_ids.push(id);
        joints.insert(
            id,
            JointInfo {
                joint_type: joint_type.into(),
                description: description.into(),
                range,
                units: units.into(),
            },
        );
    }

    let info = RobotInfo {
        brand: "AMM".into(),
        model: "Scara".into(),
        degrees_of_freedom: joint_ids.len() as u32,
        joint_ids: joint_ids.clone(),
        joints,
    };

    let state = joint_ids.iter().map(|&id| (id, 0.0)).collect();
    (info, state)
}

/// Answer one client until it disconnects.
async fn serve_client(
    mut stream: TcpStream,
    info: &RobotInfo,
    joints: &JointState,
    deltas: &Arc<Mutex<Vec<[f64; 3]>>>,
) {
    let mut buf = [0u8; 4096];
    loop {
        let n = match stream.read(&mut buf).await {
            Ok(0) => {
                tracing::trace!("virtual robot client disconnected");
                return;
            }
            Ok(n) => n,
            Err(e) => {
                tracing::debug!(error = %e, "virtual robot read failed");
                return;
            }
        };

        let request = String::from_utf8_lossy(&buf[..n]).into_owned();
        tracing::trace!(frame = %request, "virtual robot received");

        let reply = answer(&request, info, joints, deltas);
        let Some(reply) = reply else {
            tracing::debug!(frame = %request, "virtual robot ignoring unrecognized frame");
            continue;
        };

        if let Err(e) = stream.write_all(reply.as_bytes()).await {
            tracing::debug!(error = %e, "virtual robot write failed");
            return;
        }
        if let Err(e) = stream.flush().await {
            tracing::debug!(error = %e, "virtual robot flush failed");
            return;
        }
    }
}

/// Compute the robot's reply to one request frame, or `None` to stay
/// silent.
fn answer(
    request: &str,
    info: &RobotInfo,
    joints: &JointState,
    deltas: &Arc<Mutex<Vec<[f64; 3]>>>,
) -> Option<String> {
    if request == frame::compliance_ack() {
        return Some(frame::compliance_ack());
    }
    if request == frame::robot_info_request() {
        return Some(frame::robot_info_response(info));
    }
    if request == frame::get_all_joints() {
        return Some(frame::joints_frame(joints));
    }
    if request.starts_with(&frame::end_effector_header()) {
        if let Some(delta) = parse_deltas(request) {
            deltas.lock().unwrap().push(delta);
            return Some(frame::general_ack());
        }
        return None;
    }
    None
}

/// Pull the three delta fields out of an end-effector command frame.
fn parse_deltas(request: &str) -> Option<[f64; 3]> {
    let payload = request.strip_prefix(&frame::end_effector_header())?;
    let fields: Vec<&str> = payload
        .split(frame::SEP)
        .filter(|s| !s.is_empty())
        .collect();
    if fields.len() != 3 {
        return None;
    }
    let mut delta = [0.0; 3];
    for (slot, field) in delta.iter_mut().zip(&fields) {
        *slot = field.parse().ok()?;
    }
    Some(delta)
}
