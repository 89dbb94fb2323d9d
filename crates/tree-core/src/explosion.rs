use crate::constants::*;
use crate::geometry::{explosion_burst, Burst};
use glam::Vec3;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExplosionId(pub u64);

/// Particle burst spawned where a wish lands.
#[derive(Clone, Debug)]
pub struct Explosion {
    pub id: ExplosionId,
    pub origin: Vec3,
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    age: f32,
}

impl Explosion {
    pub fn spawn<R: Rng + ?Sized>(id: ExplosionId, origin: Vec3, rng: &mut R) -> Self {
        let Burst {
            positions,
            velocities,
            colors,
        } = explosion_burst(origin, EXPLOSION_PARTICLES, rng);
        Self {
            id,
            origin,
            positions,
            velocities,
            colors,
            age: 0.0,
        }
    }

    #[inline]
    pub fn age(&self) -> f32 {
        self.age
    }

    /// Linear fade over the lifetime, 1 at spawn and 0 at expiry.
    #[inline]
    pub fn opacity(&self) -> f32 {
        (1.0 - self.age / EXPLOSION_LIFETIME).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_expired(&self) -> bool {
        self.age > EXPLOSION_LIFETIME
    }

    /// Integrate one frame. Returns `false` once the burst has expired and
    /// should be dropped; expired bursts are not integrated further.
    pub fn step(&mut self, dt: f32) -> bool {
        if self.is_expired() {
            return false;
        }
        self.age += dt.max(0.0);
        if self.is_expired() {
            return false;
        }
        for (p, v) in self.positions.iter_mut().zip(self.velocities.iter_mut()) {
            *p += *v * dt;
            v.y += EXPLOSION_GRAVITY * dt;
            *v *= EXPLOSION_DRAG;
        }
        true
    }
}
