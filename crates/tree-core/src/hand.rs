//! Hand-pose input from an external gesture tracker.

use crate::constants::*;
use crate::error::TrackerError;
use glam::Vec3;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// Per-frame detection result, normalized to the camera frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandPose {
    pub detected: bool,
    pub is_open: bool,
    pub x: f32,
    pub y: f32,
}

impl Default for HandPose {
    fn default() -> Self {
        Self::NONE
    }
}

impl HandPose {
    /// Fallback when no hand is in view.
    pub const NONE: HandPose = HandPose {
        detected: false,
        is_open: false,
        x: 0.5,
        y: 0.5,
    };

    /// Classify a landmark set. `x` is mirrored so moving the hand right
    /// orbits the camera right.
    pub fn from_landmarks(landmarks: &HandLandmarks, open_threshold: f32) -> Self {
        let palm = landmarks.points[PALM_CENTER];
        Self {
            detected: true,
            is_open: landmarks.openness() > open_threshold,
            x: (1.0 - palm.x).clamp(0.0, 1.0),
            y: palm.y.clamp(0.0, 1.0),
        }
    }

    /// The open-hand gesture that unleashes the tree.
    #[inline]
    pub fn unleashes(&self) -> bool {
        self.detected && self.is_open
    }
}

/// The 21 normalized landmarks of one hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandLandmarks {
    pub points: [Vec3; LANDMARK_COUNT],
}

impl HandLandmarks {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Mean fingertip-to-wrist distance.
    pub fn openness(&self) -> f32 {
        let wrist = self.points[WRIST];
        let total: f32 = FINGERTIPS
            .iter()
            .map(|&i| self.points[i].distance(wrist))
            .sum();
        total / FINGERTIPS.len() as f32
    }
}

/// Single-slot latest-value channel between the tracker and the frame loop.
/// Writers overwrite; readers always see the newest pose.
#[derive(Clone, Debug, Default)]
pub struct PoseSlot {
    inner: Arc<Mutex<HandPose>>,
}

impl PoseSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, pose: HandPose) {
        match self.inner.lock() {
            Ok(mut slot) => *slot = pose,
            Err(poisoned) => *poisoned.into_inner() = pose,
        }
    }

    pub fn latest(&self) -> HandPose {
        match self.inner.lock() {
            Ok(slot) => *slot,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Handle on an acquired camera stream.
pub trait CaptureStream {
    /// Release the device. Called exactly once, from session teardown.
    fn stop(&mut self);
}

/// Owns the camera stream and the detection loop's cancel flag.
pub struct TrackerSession {
    stream: Option<Box<dyn CaptureStream + Send>>,
    cancelled: Arc<AtomicBool>,
    permission_denied: bool,
    slot: PoseSlot,
}

impl TrackerSession {
    /// Open the camera through `open`. Failure leaves an inactive session;
    /// there is no retry.
    pub fn start<S, F>(slot: PoseSlot, open: F) -> Self
    where
        S: CaptureStream + Send + 'static,
        F: FnOnce() -> Result<S, TrackerError>,
    {
        let (stream, permission_denied) = match open() {
            Ok(s) => (Some(Box::new(s) as Box<dyn CaptureStream + Send>), false),
            Err(TrackerError::PermissionDenied) => {
                log::warn!("[tracker] camera permission denied; gesture control disabled");
                (None, true)
            }
            Err(e) => {
                log::warn!("[tracker] {}", e);
                (None, false)
            }
        };
        Self {
            stream,
            cancelled: Arc::new(AtomicBool::new(false)),
            permission_denied,
            slot,
        }
    }

    pub fn is_active(&self) -> bool {
        self.stream.is_some() && !self.is_cancelled()
    }

    pub fn permission_denied(&self) -> bool {
        self.permission_denied
    }

    /// Flag polled by the detection loop before scheduling its next pass.
    pub fn cancel_token(&self) -> Arc<AtomicBool> {
        self.cancelled.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Publish a detection result. Ignored once the session is torn down.
    pub fn report(&self, landmarks: Option<&HandLandmarks>, open_threshold: f32) {
        if !self.is_active() {
            return;
        }
        let pose = landmarks
            .map(|l| HandPose::from_landmarks(l, open_threshold))
            .unwrap_or(HandPose::NONE);
        self.slot.publish(pose);
    }

    pub fn slot(&self) -> &PoseSlot {
        &self.slot
    }
}

impl Drop for TrackerSession {
    fn drop(&mut self) {
        self.cancelled.store(true, Ordering::SeqCst);
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
        }
    }
}
