//! Basic HRP robot session example.
//!
//! Probes a device for HRP compliance, then reads its metadata and
//! joint positions.
//!
//! # Usage
//!
//! ```sh
//! # Physical robot on a serial device:
//! cargo run -p hrplib --example probe_and_query -- /dev/ttyACM0
//!
//! # Simulated robot listening on localhost:5555:
//! cargo run -p hrplib --example probe_and_query -- virtual 5555
//! ```

use hrplib::RobotBuilder;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hrplib=info".into()),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let path = args.next().unwrap_or_else(|| "/dev/ttyACM0".to_string());

    let mut builder = RobotBuilder::new(&path);
    if let Some(port) = args.next() {
        builder = builder.port(port.parse()?);
    }
    let mut robot = builder.build()?;

    println!("Probing {path} for HRP compliance...");
    if !robot.is_hrp().await {
        println!("No HRP robot found on {path}");
        return Ok(());
    }
    println!("HRP robot detected.");

    robot.connect().await?;

    let info = robot.get_robot_info().await?;
    println!(
        "{} {} -- {} degrees of freedom",
        info.brand, info.model, info.degrees_of_freedom
    );
    for id in &info.joint_ids {
        if let Some(joint) = info.joints.get(id) {
            println!(
                "  joint {:>3}: {} ({}), range {}..{} {}",
                id, joint.description, joint.joint_type, joint.range.0, joint.range.1, joint.units
            );
        }
    }

    let state = robot.get_joints().await?;
    println!("Current positions:");
    for (id, position) in state.iter() {
        println!("  joint {id:>3}: {position}");
    }

    robot.disconnect().await;
    Ok(())
}
