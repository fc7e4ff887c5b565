//! Stand-in host: orbits a point for a couple of seconds, records the
//! camera path and writes it out.
//!
//! Usage: `camera-capture [OUTPUT] [CONFIG]`

use anyhow::{ensure, Context, Result};
use camera_capture::export;
use camera_capture::utils::config::load_config;
use camera_capture::{FrameRecorder, Pose, PoseSource, Quaternion, Vec3};
use std::f64::consts::TAU;
use std::path::PathBuf;
use std::time::Duration;

const FRAMES: usize = 120;
const FRAME_TIME: Duration = Duration::from_millis(16);

/// Camera circling the origin at a fixed height, looking inwards
struct OrbitCamera {
    radius: f64,
    height: f64,
    angle: f64,
}

impl PoseSource for OrbitCamera {
    fn current_pose(&self) -> Pose {
        Pose::new(
            Vec3::new(
                self.radius * self.angle.cos(),
                self.height,
                self.radius * self.angle.sin(),
            ),
            Quaternion::from_yaw(self.angle),
        )
    }
}

fn main() -> Result<()> {
    camera_capture::init_tracing();

    tracing::info!("Starting Camera Capture v{}", env!("CARGO_PKG_VERSION"));

    let mut args = std::env::args().skip(1);
    let output = PathBuf::from(args.next().unwrap_or_else(|| "camera_path.txt".to_string()));
    let config = match args.next() {
        Some(path) => load_config(&PathBuf::from(path)).context("Failed to load config")?,
        None => Default::default(),
    };

    let recorder = FrameRecorder::with_config(&config);
    let mut camera = OrbitCamera {
        radius: 10.0,
        height: 4.0,
        angle: 0.0,
    };

    recorder.start()?;
    for frame in 0..FRAMES {
        camera.angle = TAU * frame as f64 / FRAMES as f64;
        recorder.capture(&camera);
        std::thread::sleep(FRAME_TIME);
    }
    recorder.stop()?;

    let samples = recorder.recording();
    export::save_to_path(&samples, &output)
        .with_context(|| format!("Failed to save recording to {:?}", output))?;

    let reloaded = export::load_from_path(&output)
        .with_context(|| format!("Failed to read back {:?}", output))?;
    ensure!(
        reloaded == samples,
        "{:?} does not match the captured samples",
        output
    );

    tracing::info!("Wrote {} samples to {:?}", samples.len(), output);
    Ok(())
}
