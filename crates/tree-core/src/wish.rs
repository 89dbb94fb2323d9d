//! Wish lifecycle: submit, fly along a Bézier arc, land, explode, collect.

use crate::animation::ease_cubic_in_out;
use crate::constants::*;
use crate::events::{EventQueue, SceneEvent};
use crate::explosion::{Explosion, ExplosionId};
use crate::geometry::wish_ball;
use crate::trail::TrailBuffer;
use fnv::FnvHashMap;
use glam::{Quat, Vec3};
use rand::prelude::*;
use std::f32::consts::TAU;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WishId(pub u64);

/// Quadratic Bézier through `p0`, pulled toward `p1`, ending at `p2`.
#[inline]
pub fn quadratic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, t: f32) -> Vec3 {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

/// A wish in flight.
#[derive(Clone, Debug)]
pub struct Wish {
    pub id: WishId,
    pub text: String,
    pub start: Vec3,
    pub control: Vec3,
    pub target: Vec3,
    /// Ball particle offsets relative to the wish head.
    pub ball: Vec<Vec3>,
    pub rotation: Quat,
    pub trail: TrailBuffer,
    progress: f32,
}

impl Wish {
    fn launch<R: Rng + ?Sized>(id: WishId, text: String, target: Vec3, rng: &mut R) -> Self {
        let angle = rng.gen::<f32>() * TAU;
        let control = Vec3::new(
            angle.cos() * WISH_CONTROL_RADIUS,
            target.y * WISH_CONTROL_HEIGHT,
            angle.sin() * WISH_CONTROL_RADIUS,
        );
        Self {
            id,
            text,
            start: Vec3::from_array(WISH_LAUNCH),
            control,
            target,
            ball: wish_ball(WISH_BALL_PARTICLES, WISH_BALL_RADIUS, rng),
            rotation: Quat::IDENTITY,
            trail: TrailBuffer::new(),
            progress: 0.0,
        }
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn position_at(&self, progress: f32) -> Vec3 {
        let t = ease_cubic_in_out(progress);
        quadratic_bezier(self.start, self.control, self.target, t)
    }

    pub fn position(&self) -> Vec3 {
        self.position_at(self.progress)
    }

    /// Advance the flight. Returns `true` when the wish has arrived.
    fn advance(&mut self, dt: f32) -> bool {
        self.progress += dt.max(0.0) * WISH_SPEED;
        if self.progress >= 1.0 {
            return true;
        }
        let head = self.position();
        let spin = dt * WISH_SPIN;
        self.rotation = (Quat::from_rotation_y(spin) * Quat::from_rotation_z(spin) * self.rotation)
            .normalize();
        self.trail.push(head);
        false
    }
}

/// Owns every live wish and explosion, keyed by id.
pub struct WishManager {
    wishes: FnvHashMap<WishId, Wish>,
    explosions: FnvHashMap<ExplosionId, Explosion>,
    target: Vec3,
    next_wish: u64,
    next_explosion: u64,
    rng: StdRng,
}

impl WishManager {
    pub fn new(target: Vec3, seed: u64) -> Self {
        Self {
            wishes: FnvHashMap::default(),
            explosions: FnvHashMap::default(),
            target,
            next_wish: 0,
            next_explosion: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Launch a wish. Blank text is ignored.
    pub fn submit(&mut self, text: &str, events: &mut EventQueue) -> Option<WishId> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = WishId(self.next_wish);
        self.next_wish += 1;
        let wish = Wish::launch(id, text.to_string(), self.target, &mut self.rng);
        log::debug!(
            "[wish] submit id={} control=({:.2},{:.2},{:.2})",
            id.0,
            wish.control.x,
            wish.control.y,
            wish.control.z
        );
        self.wishes.insert(id, wish);
        events.push(SceneEvent::WishLaunched(id));
        Some(id)
    }

    /// Advance bursts and flights by one frame. Bursts spawned this frame
    /// start integrating on the next one.
    pub fn update(&mut self, dt: f32, events: &mut EventQueue) {
        let mut finished = Vec::new();
        for (id, explosion) in self.explosions.iter_mut() {
            if !explosion.step(dt) {
                finished.push(*id);
            }
        }
        finished.sort_unstable();
        for id in finished {
            self.explosions.remove(&id);
            log::debug!("[explosion] removed id={}", id.0);
            events.push(SceneEvent::ExplosionFinished(id));
        }

        let mut arrived = Vec::new();
        for (id, wish) in self.wishes.iter_mut() {
            if wish.advance(dt) {
                arrived.push(*id);
            }
        }
        // deterministic spawn order when several land on the same frame
        arrived.sort_unstable();
        for id in arrived {
            if self.wishes.remove(&id).is_none() {
                continue;
            }
            let explosion = ExplosionId(self.next_explosion);
            self.next_explosion += 1;
            self.explosions.insert(
                explosion,
                Explosion::spawn(explosion, self.target, &mut self.rng),
            );
            log::debug!("[wish] impact id={} explosion={}", id.0, explosion.0);
            events.push(SceneEvent::Impact {
                wish: id,
                explosion,
                position: self.target,
            });
        }
    }

    pub fn wish(&self, id: WishId) -> Option<&Wish> {
        self.wishes.get(&id)
    }

    pub fn wishes(&self) -> impl Iterator<Item = &Wish> {
        self.wishes.values()
    }

    pub fn explosions(&self) -> impl Iterator<Item = &Explosion> {
        self.explosions.values()
    }

    pub fn explosion(&self, id: ExplosionId) -> Option<&Explosion> {
        self.explosions.get(&id)
    }

    pub fn flying_count(&self) -> usize {
        self.wishes.len()
    }

    pub fn explosion_count(&self) -> usize {
        self.explosions.len()
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }
}
