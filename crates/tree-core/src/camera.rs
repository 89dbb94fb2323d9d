//! Camera and the rig that switches between orbit and gesture control.

use crate::animation::damp;
use crate::constants::*;
use crate::hand::HandPose;
use glam::{Mat4, Vec3};
use std::f32::consts::TAU;

/// Perspective camera looking from `eye` toward `target`, right-handed.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::from_array(CAMERA_START),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            znear: 0.1,
            zfar: 200.0,
        }
    }
}

impl Camera {
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// World to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }
    /// View-space depth of a world point; negative in front of the camera.
    pub fn view_depth(&self, world: Vec3) -> f32 {
        self.view_matrix().transform_point3(world).z
    }
}

/// Free orbit around a fixed target with auto-rotation.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub target: Vec3,
    pub distance: f32,
    /// Angle around +Y, measured from +Z toward +X.
    pub azimuth: f32,
    /// Angle down from +Y.
    pub polar: f32,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
}

impl OrbitControls {
    pub fn from_position(target: Vec3, eye: Vec3) -> Self {
        let mut orbit = Self {
            target,
            distance: ORBIT_MIN_DISTANCE,
            azimuth: 0.0,
            polar: 0.0,
            auto_rotate: true,
            auto_rotate_speed: ORBIT_AUTO_ROTATE_SPEED,
        };
        orbit.sync_to(eye);
        orbit
    }

    /// Re-derive the spherical state from a camera position.
    pub fn sync_to(&mut self, eye: Vec3) {
        let offset = eye - self.target;
        let len = offset.length();
        if len > 1e-6 {
            self.azimuth = offset.x.atan2(offset.z);
            self.polar = (offset.y / len).clamp(-1.0, 1.0).acos();
        }
        self.distance = len;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.distance = self.distance.clamp(ORBIT_MIN_DISTANCE, ORBIT_MAX_DISTANCE);
        self.polar = self.polar.clamp(1e-4, ORBIT_MAX_POLAR);
        self.azimuth = self.azimuth.rem_euclid(TAU);
    }

    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.azimuth += d_azimuth;
        self.polar += d_polar;
        self.clamp();
    }

    /// Scale the orbit distance; values below 1 move closer.
    pub fn zoom(&mut self, scale: f32) {
        if scale > 0.0 {
            self.distance *= scale;
        }
        self.clamp();
    }

    pub fn update(&mut self, dt: f32) {
        if self.auto_rotate {
            // one turn per minute at speed 1
            self.azimuth -= TAU / 60.0 * self.auto_rotate_speed * dt;
        }
        self.clamp();
    }

    pub fn position(&self) -> Vec3 {
        let s = self.polar.sin();
        self.target
            + Vec3::new(
                self.distance * s * self.azimuth.sin(),
                self.distance * self.polar.cos(),
                self.distance * s * self.azimuth.cos(),
            )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraMode {
    Manual,
    Gesture,
}

/// Where the camera heads for a detected hand.
pub fn gesture_target(pose: &HandPose) -> Vec3 {
    let azimuth = (pose.x - 0.5) * GESTURE_SWEEP;
    let height = GESTURE_HEIGHT_BASE + pose.y * GESTURE_HEIGHT_SPAN;
    Vec3::new(
        azimuth.sin() * GESTURE_RADIUS,
        height,
        azimuth.cos() * GESTURE_RADIUS,
    )
}

pub struct CameraRig {
    pub camera: Camera,
    pub orbit: OrbitControls,
    mode: CameraMode,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl CameraRig {
    pub fn new(camera: Camera) -> Self {
        let orbit = OrbitControls::from_position(camera.target, camera.eye);
        let mut rig = Self {
            camera,
            orbit,
            mode: CameraMode::Manual,
        };
        rig.camera.eye = rig.orbit.position();
        rig
    }

    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    pub fn update(&mut self, pose: &HandPose, dt: f32) {
        let dt = dt.max(0.0);
        if pose.detected {
            self.mode = CameraMode::Gesture;
            let target = gesture_target(pose);
            let eye = self.camera.eye;
            self.camera.eye = Vec3::new(
                damp(eye.x, target.x, CAMERA_SMOOTHING, dt),
                damp(eye.y, target.y, CAMERA_SMOOTHING, dt),
                damp(eye.z, target.z, CAMERA_SMOOTHING, dt),
            );
            self.camera.target = Vec3::from_array(GESTURE_LOOK_AT);
            return;
        }

        if self.mode == CameraMode::Gesture {
            // resume orbiting from wherever the gesture left the camera
            self.orbit.sync_to(self.camera.eye);
            self.mode = CameraMode::Manual;
        }
        self.orbit.update(dt);
        self.camera.eye = self.orbit.position();
        self.camera.target = self.orbit.target;
    }
}
