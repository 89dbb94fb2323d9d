use crate::constants::{TRAIL_CAPACITY, TRAIL_DECAY};
use glam::Vec3;

/// Fixed-size comet tail. New samples overwrite the oldest slot; nothing is
/// ever popped.
#[derive(Clone, Debug)]
pub struct TrailBuffer {
    positions: [Vec3; TRAIL_CAPACITY],
    alphas: [f32; TRAIL_CAPACITY],
    head: usize,
}

impl Default for TrailBuffer {
    fn default() -> Self {
        Self {
            positions: [Vec3::ZERO; TRAIL_CAPACITY],
            alphas: [0.0; TRAIL_CAPACITY],
            head: 0,
        }
    }
}

impl TrailBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `position` as the freshest sample, then fade every slot.
    pub fn push(&mut self, position: Vec3) {
        self.positions[self.head] = position;
        self.alphas[self.head] = 1.0;
        self.head = (self.head + 1) % TRAIL_CAPACITY;
        self.decay();
    }

    /// Fade every slot once without recording.
    pub fn decay(&mut self) {
        for a in &mut self.alphas {
            *a *= TRAIL_DECAY;
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        TRAIL_CAPACITY
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn alphas(&self) -> &[f32] {
        &self.alphas
    }

    pub fn alpha_sum(&self) -> f32 {
        self.alphas.iter().sum()
    }

    /// Slot written by the most recent push.
    pub fn newest(&self) -> (Vec3, f32) {
        let i = (self.head + TRAIL_CAPACITY - 1) % TRAIL_CAPACITY;
        (self.positions[i], self.alphas[i])
    }

    /// `(position, alpha)` pairs in slot order, ready for upload.
    pub fn samples(&self) -> impl Iterator<Item = (Vec3, f32)> + '_ {
        self.positions.iter().copied().zip(self.alphas.iter().copied())
    }
}
