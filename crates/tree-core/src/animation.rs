//! Time-varying uniforms shared by every tree point.
//!
//! The frame loop is the only writer. Hosts copy the values into
//! [`crate::shader::SceneUniforms`] before GPU submission.

use crate::constants::*;

/// Exponential approach of `current` toward `target` with a per-frame factor
/// of `rate * dt`, clamped to `[0, 1]` so long frames land on the target
/// instead of overshooting.
#[inline]
pub fn damp(current: f32, target: f32, rate: f32, dt: f32) -> f32 {
    let t = (rate * dt).clamp(0.0, 1.0);
    current + (target - current) * t
}

/// Hermite smoothstep between two edges.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Cubic ease-in-out over `[0, 1]`.
#[inline]
pub fn ease_cubic_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationState {
    pub time: f32,
    pub flash: f32,
    pub unleash: f32,
    unleash_target: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Impact pulse; repeated calls saturate at 1.
    pub fn trigger_flash(&mut self) {
        self.flash = 1.0;
    }

    pub fn set_unleashed(&mut self, unleashed: bool) {
        self.unleash_target = if unleashed { 1.0 } else { 0.0 };
    }

    pub fn unleash_target(&self) -> f32 {
        self.unleash_target
    }

    /// Advance all uniforms for one frame.
    pub fn update(&mut self, elapsed: f32, dt: f32) {
        let dt = dt.max(0.0);
        if elapsed.is_finite() {
            self.time = self.time.max(elapsed);
        }

        if self.flash > 0.0 {
            self.flash = damp(self.flash, 0.0, FLASH_DECAY_RATE, dt);
            if self.flash < FLASH_CUTOFF {
                self.flash = 0.0;
            }
        }
        self.flash = self.flash.clamp(0.0, 1.0);

        self.unleash = damp(self.unleash, self.unleash_target, UNLEASH_RATE, dt).clamp(0.0, 1.0);
    }
}
