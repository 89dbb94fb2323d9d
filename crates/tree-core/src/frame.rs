use crate::constants::MAX_FRAME_DELTA;
use crate::events::{EventQueue, SceneEvent};
use crate::hand::HandPose;
use crate::scene::Scene;
use instant::Instant;

/// Inputs to one frame callback.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameInput {
    /// Seconds since the scene started.
    pub elapsed: f32,
    /// Seconds since the previous frame.
    pub delta: f32,
    pub pose: HandPose,
}

/// What changed during a frame.
#[derive(Clone, Debug, Default)]
pub struct FrameReport {
    pub events: EventQueue,
    pub flying: usize,
    pub explosions: usize,
    pub flash: f32,
    pub unleash: f32,
}

impl FrameReport {
    pub fn impacts(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SceneEvent::Impact { .. }))
            .count()
    }
}

/// Run one frame. A missing scene (not mounted yet, or already torn down)
/// skips the frame.
pub fn advance(scene: Option<&mut Scene>, input: &FrameInput) -> Option<FrameReport> {
    let Some(scene) = scene else {
        log::trace!("[frame] no scene, skipping");
        return None;
    };
    scene.frame(input.elapsed, input.delta, &input.pose);
    Some(FrameReport {
        events: scene.drain_events(),
        flying: scene.wishes.flying_count(),
        explosions: scene.wishes.explosion_count(),
        flash: scene.anim.flash,
        unleash: scene.anim.unleash,
    })
}

/// Wall clock for hosts without their own frame timing.
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// `(elapsed, delta)` in seconds; the delta is clamped after stalls.
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let delta = (now - self.last).as_secs_f32().min(MAX_FRAME_DELTA);
        self.last = now;
        ((now - self.start).as_secs_f32(), delta)
    }
}
