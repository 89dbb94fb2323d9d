//! The composed scene: static layouts plus every piece of per-frame state.

use crate::animation::AnimationState;
use crate::camera::CameraRig;
use crate::config::SceneConfig;
use crate::decor::{heart_pose, BaseRings, HeartPose, PhotoOrnaments};
use crate::error::ConfigError;
use crate::events::{EventQueue, SceneEvent};
use crate::geometry::{cone_normal, snow_volume, tree_cone, PointCloud};
use crate::hand::HandPose;
use crate::shader::{SceneUniforms, TreePoint};
use crate::wish::{WishId, WishManager};
use glam::{Mat4, Vec3};
use rand::prelude::*;
use std::mem;

pub struct Scene {
    pub config: SceneConfig,
    pub tree: PointCloud,
    pub snow: PointCloud,
    pub rings: BaseRings,
    pub photos: PhotoOrnaments,
    pub anim: AnimationState,
    pub wishes: WishManager,
    pub rig: CameraRig,
    events: EventQueue,
    rng: StdRng,
}

impl Scene {
    pub fn new(config: SceneConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let tree = tree_cone(&config, &mut rng);
        let snow = snow_volume(config.snow_count, config.palette.snow, &mut rng);
        let rings = BaseRings::new(&config, &mut rng);
        let wishes = WishManager::new(config.wish_target(), rng.gen());
        log::info!(
            "[scene] tree={} snow={} rings={:?} seed={}",
            tree.len(),
            snow.len(),
            rings.rings.iter().map(PointCloud::len).collect::<Vec<_>>(),
            seed
        );
        Ok(Self {
            config,
            tree,
            snow,
            rings,
            photos: PhotoOrnaments::default(),
            anim: AnimationState::new(),
            wishes,
            rig: CameraRig::default(),
            events: EventQueue::new(),
            rng,
        })
    }

    /// Launch a wish toward the tree top. Blank text is ignored.
    pub fn submit_wish(&mut self, text: &str) -> Option<WishId> {
        self.wishes.submit(text, &mut self.events)
    }

    pub fn sync_photos(&mut self, photos: &[String]) {
        self.photos.sync(photos, &self.config, &mut self.rng);
    }

    /// One frame of simulation. Uniforms first, then effects, then the
    /// camera; impacts raised by the effects flash the tree at the end.
    /// Hosts go through [`crate::frame::advance`], which drains the events.
    pub(crate) fn frame(&mut self, elapsed: f32, dt: f32, pose: &HandPose) {
        self.anim.set_unleashed(pose.unleashes());
        self.anim.update(elapsed, dt);

        let first_new = self.events.len();
        self.wishes.update(dt, &mut self.events);
        if self.events[first_new..]
            .iter()
            .any(|e| matches!(e, SceneEvent::Impact { .. }))
        {
            self.anim.trigger_flash();
        }

        self.rig.update(pose, dt);
    }

    /// Events raised since the last drain.
    pub fn drain_events(&mut self) -> EventQueue {
        mem::take(&mut self.events)
    }

    /// The tree group sits so its middle is near the world origin.
    pub fn tree_model_matrix(&self) -> Mat4 {
        Mat4::from_translation(Vec3::new(0.0, -self.config.tree_height / 2.0 + 1.0, 0.0))
    }

    pub fn tree_point(&self, i: usize) -> Option<TreePoint> {
        let base = *self.tree.positions.get(i)?;
        Some(TreePoint {
            base,
            normal: cone_normal(&self.config, base),
            color: self.tree.colors[i],
            seed: self.tree.seeds[i],
            speed: self.tree.speeds[i],
            scale: self.tree.sizes[i],
        })
    }

    pub fn heart(&self) -> HeartPose {
        heart_pose(&self.config, self.anim.time)
    }

    /// Ring `index` relative to the world, riding on the tree group.
    pub fn ring_model_matrix(&self, index: usize) -> Mat4 {
        self.tree_model_matrix() * self.rings.ring_transform(index, self.anim.time)
    }

    fn base_uniforms(&self) -> SceneUniforms {
        let cam = &self.rig.camera;
        SceneUniforms::new(cam.view_matrix(), cam.projection_matrix(), &self.anim)
            .with_tree(self.config.tree_height, self.config.tree_radius)
    }

    /// Uniforms for the tree group: tree points, rings, heart and photos.
    pub fn uniforms(&self) -> SceneUniforms {
        self.base_uniforms().with_model(self.tree_model_matrix())
    }

    /// Uniforms for world-space draws: snow, wishes, trails and explosions.
    pub fn world_uniforms(&self) -> SceneUniforms {
        self.base_uniforms()
    }
}
