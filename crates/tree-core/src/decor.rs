//! Ambient decorations animated from time alone: base rings, the heart
//! topper and photo ornaments.

use crate::config::SceneConfig;
use crate::constants::*;
use crate::geometry::{photo_position, rings, PointCloud};
use glam::{Mat4, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

pub struct BaseRings {
    pub rings: Vec<PointCloud>,
}

impl BaseRings {
    pub fn new<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Self {
        Self {
            rings: rings(config, rng),
        }
    }

    /// Whole-group spin plus a counter-rotating bob per ring, relative to the
    /// tree group.
    pub fn ring_transform(&self, index: usize, time: f32) -> Mat4 {
        let group = Mat4::from_rotation_translation(
            Quat::from_rotation_y(time * RING_GROUP_SPIN),
            Vec3::new(0.0, RING_GROUP_LIFT, 0.0),
        );
        let sign = if index % 2 == 0 { 1.0 } else { -1.0 };
        let local = Mat4::from_rotation_translation(
            Quat::from_rotation_y(time * RING_SPIN * sign),
            Vec3::new(0.0, (time * 0.5 + index as f32).sin() * RING_BOB_AMPLITUDE, 0.0),
        );
        group * local
    }
}

/// Transform of the heart above the tree tip.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeartPose {
    pub position: Vec3,
    pub rotation_y: f32,
    pub scale: f32,
    pub glow_scale: f32,
}

pub fn heart_pose(config: &SceneConfig, time: f32) -> HeartPose {
    let bob = (time * HEART_BOB_FREQ).sin() * HEART_BOB_AMPLITUDE;
    let scale = 1.0 + (time * HEART_PULSE_FREQ).sin() * HEART_PULSE_AMPLITUDE;
    HeartPose {
        position: Vec3::new(0.0, config.tree_height + HEART_LIFT + bob, 0.0),
        rotation_y: (time * HEART_SPIN).rem_euclid(TAU),
        scale,
        glow_scale: scale * HEART_GLOW_SCALE,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PhotoOrnament {
    pub url: String,
    pub anchor: Vec3,
    pub phase: f32,
}

impl PhotoOrnament {
    /// Anchor with a gentle vertical bob.
    pub fn position(&self, time: f32) -> Vec3 {
        self.anchor + Vec3::Y * (time + self.phase).sin() * PHOTO_BOB_AMPLITUDE
    }
}

/// Photo sprites hung on the tree. Positions are fixed once assigned so the
/// layout never shuffles when the list grows.
#[derive(Default)]
pub struct PhotoOrnaments {
    items: Vec<PhotoOrnament>,
}

impl PhotoOrnaments {
    /// Bring the ornaments in line with `photos`: entries already laid out
    /// keep their slot, new entries get a fresh one, and removed tail
    /// entries are dropped.
    pub fn sync<R: Rng + ?Sized>(&mut self, photos: &[String], config: &SceneConfig, rng: &mut R) {
        let keep = self
            .items
            .iter()
            .zip(photos)
            .take_while(|(item, url)| item.url == **url)
            .count();
        self.items.truncate(keep);
        for url in &photos[keep..] {
            self.items.push(PhotoOrnament {
                url: url.clone(),
                anchor: photo_position(config, rng),
                phase: rng.gen::<f32>() * TAU,
            });
        }
    }

    pub fn items(&self) -> &[PhotoOrnament] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
