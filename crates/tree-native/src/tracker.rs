//! Synthetic hand tracker standing in for webcam capture and landmark
//! inference. Sweeps a hand across the frame and opens it periodically.

use glam::Vec3;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tree_core::constants::{FINGERTIPS, LANDMARK_COUNT, PALM_CENTER};
use tree_core::{CaptureStream, HandLandmarks, PoseSlot, TrackerError, TrackerSession};

const DETECT_INTERVAL: Duration = Duration::from_millis(33);

pub struct SyntheticCamera;

impl CaptureStream for SyntheticCamera {
    fn stop(&mut self) {
        log::info!("[tracker] camera released");
    }
}

/// Landmarks for a hand at horizontal position `u` in [0, 1], fingers
/// extended by `reach`.
pub fn synthetic_hand(u: f32, reach: f32) -> HandLandmarks {
    let wrist = Vec3::new(u, 0.75, 0.0);
    let mut points = [wrist; LANDMARK_COUNT];
    for (k, &tip) in FINGERTIPS.iter().enumerate() {
        let angle = 0.35 * k as f32 - 0.7;
        points[tip] = wrist + Vec3::new(angle.sin(), -angle.cos(), 0.0) * reach;
    }
    points[PALM_CENTER] = wrist + Vec3::new(0.0, -0.12, 0.0);
    HandLandmarks::new(points)
}

/// Running detection thread. Dropping it cancels the session and waits for
/// the thread, which releases the camera on its way out.
pub struct Tracker {
    cancel: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.cancel.store(true, Ordering::SeqCst);
        if let Some(h) = self.thread.take() {
            if h.join().is_err() {
                log::warn!("[tracker] detection thread panicked");
            }
        }
    }
}

/// Pose the synthetic hand holds `t` seconds in: in view for 4 s out of
/// every 6, open for the last second of that.
pub fn synthetic_frame(t: f32) -> Option<HandLandmarks> {
    let phase = t % 6.0;
    if phase >= 4.0 {
        return None;
    }
    let u = 0.5 + 0.4 * (t * 0.8).sin();
    let reach = if phase > 3.0 { 0.32 } else { 0.12 };
    Some(synthetic_hand(u, reach))
}

/// Open the synthetic camera and hand the session to a detection thread.
/// Returns `None` when the camera or the thread cannot be started.
pub fn spawn(slot: PoseSlot, open_threshold: f32) -> Option<Tracker> {
    let session = TrackerSession::start(slot, || Ok::<_, TrackerError>(SyntheticCamera));
    if !session.is_active() {
        return None;
    }
    let cancel = session.cancel_token();
    let handle = thread::Builder::new()
        .name("hand-tracker".into())
        .spawn(move || {
            let start = Instant::now();
            while session.is_active() {
                let landmarks = synthetic_frame(start.elapsed().as_secs_f32());
                session.report(landmarks.as_ref(), open_threshold);
                thread::sleep(DETECT_INTERVAL);
            }
            log::debug!("[tracker] detection loop cancelled");
        });
    match handle {
        Ok(h) => Some(Tracker {
            cancel,
            thread: Some(h),
        }),
        Err(e) => {
            log::warn!("[tracker] could not start detection thread: {}", e);
            None
        }
    }
}
