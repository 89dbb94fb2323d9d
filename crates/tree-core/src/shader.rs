//! Per-point animation rules.
//!
//! These functions are the reference for the WGSL programs bundled below and
//! are evaluated on the host for tests and CPU fallbacks. Every output is a
//! pure function of the base attributes and the current uniforms; nothing is
//! carried between frames.

use crate::animation::{smoothstep, AnimationState};
use crate::constants::*;
use glam::{Mat4, Vec2, Vec3};

pub static TREE_WGSL: &str = include_str!("../shaders/tree.wgsl");
pub static SNOW_WGSL: &str = include_str!("../shaders/snow.wgsl");
pub static TRAIL_WGSL: &str = include_str!("../shaders/trail.wgsl");

/// Uniform block shared by the point programs. `model` places the points;
/// tree-group draws carry the tree offset, world-space draws identity.
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SceneUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub model: [[f32; 4]; 4],
    pub time: f32,
    pub flash: f32,
    pub unleash: f32,
    pub box_height: f32,
    pub tree_height: f32,
    pub tree_radius: f32,
    pub _pad: [f32; 2],
}

impl SceneUniforms {
    pub fn new(view: Mat4, proj: Mat4, anim: &AnimationState) -> Self {
        Self {
            view_proj: (proj * view).to_cols_array_2d(),
            view: view.to_cols_array_2d(),
            model: Mat4::IDENTITY.to_cols_array_2d(),
            time: anim.time,
            flash: anim.flash,
            unleash: anim.unleash,
            box_height: SNOW_BOX_HEIGHT,
            tree_height: TREE_HEIGHT,
            tree_radius: TREE_RADIUS,
            _pad: [0.0; 2],
        }
    }

    pub fn with_model(mut self, model: Mat4) -> Self {
        self.model = model.to_cols_array_2d();
        self
    }

    /// Cone dimensions used by the tree program's breathing normal.
    pub fn with_tree(mut self, height: f32, radius: f32) -> Self {
        self.tree_height = height;
        self.tree_radius = radius;
        self
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_cols_array_2d(&self.model)
    }
}

/// Vertex stage output for one point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointOut {
    pub position: Vec3,
    pub color: Vec3,
    pub point_size: f32,
    pub alpha: f32,
}

/// Fragment stage output, premultiplication left to the blend state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FragmentOut {
    pub color: Vec3,
    pub alpha: f32,
}

/// Per-point inputs of the tree program.
#[derive(Clone, Copy, Debug)]
pub struct TreePoint {
    pub base: Vec3,
    pub normal: Vec3,
    pub color: Vec3,
    pub seed: Vec3,
    pub speed: f32,
    pub scale: f32,
}

#[inline]
fn attenuate(size: f32, numerator: f32, view_depth: f32) -> f32 {
    // view space looks down -Z, so visible points have negative depth
    size * (numerator / (-view_depth).max(MIN_VIEW_DEPTH))
}

/// Tree vertex rule: breathing, bob, twist, then the unleash burst.
pub fn tree_vertex(p: &TreePoint, u: &AnimationState, view_depth: f32) -> PointOut {
    let t = u.time;
    let mut pos = p.base;
    let mut color = p.color;

    let breath = (t * BREATH_FREQ + p.seed.y * 10.0).sin();
    pos += p.normal * breath * BREATH_AMPLITUDE;
    pos.y += (t * p.speed + p.seed.x * 10.0).sin() * BOB_AMPLITUDE;

    pos.x += (t + pos.y).cos() * TWIST_AMPLITUDE;
    pos.z += (t + pos.y).sin() * TWIST_AMPLITUDE;

    let factor = smoothstep(0.0, 1.0, u.unleash);
    if factor > UNLEASH_THRESHOLD {
        let center = Vec3::new(0.0, pos.y, 0.0);
        let dir = (pos - center + Vec3::splat(DIRECTION_EPSILON)).normalize();
        let curl = curl_offset(t, p.seed) * factor * UNLEASH_NOISE;
        pos += dir * factor * UNLEASH_EXPANSION + curl;
        color = color.lerp(Vec3::from_array(UNLEASH_WHITE), factor * 0.5);
    }

    let point_size = attenuate(p.scale, TREE_SIZE_ATTENUATION, view_depth)
        * (1.0 + u.unleash * UNLEASH_SIZE_GAIN);
    let alpha = 0.6 + 0.4 * (t * 3.0 + p.seed.z * 20.0).sin();

    PointOut {
        position: pos,
        color,
        point_size,
        alpha,
    }
}

#[inline]
fn curl_offset(t: f32, seed: Vec3) -> Vec3 {
    Vec3::new(
        (t * 3.0 + seed.x * 10.0).sin(),
        (t * 2.5 + seed.y * 10.0).cos(),
        (t * 3.0 + seed.z * 10.0).sin(),
    )
}

/// Distance of a sprite sample from the sprite center, or `None` when the
/// sample lies outside the circular footprint and must be discarded.
#[inline]
fn sprite_distance(point_coord: Vec2) -> Option<f32> {
    let d = (point_coord - Vec2::splat(0.5)).length();
    (d <= 0.5).then_some(d)
}

/// Soft circular falloff `(1 - 2d)^exponent`.
#[inline]
pub fn sprite_falloff(d: f32, exponent: f32) -> f32 {
    (1.0 - d * 2.0).max(0.0).powf(exponent)
}

pub fn tree_fragment(
    point_coord: Vec2,
    color: Vec3,
    alpha: f32,
    u: &AnimationState,
) -> Option<FragmentOut> {
    let d = sprite_distance(point_coord)?;
    let strength = sprite_falloff(d, 1.5);
    let color = color + Vec3::splat(u.flash * 0.8) + Vec3::splat(u.unleash * 0.5);
    Some(FragmentOut {
        color,
        alpha: strength * (alpha + u.flash * 0.5),
    })
}

/// Snow vertex rule: endless fall inside the box with a gentle sway.
pub fn snow_vertex(
    base: Vec3,
    seed: Vec3,
    speed: f32,
    size: f32,
    time: f32,
    box_height: f32,
    view_depth: f32,
) -> PointOut {
    let mut pos = base;
    let fall = time * speed * 2.0;
    pos.y = (pos.y - fall).rem_euclid(box_height) - box_height * 0.5;
    pos.x += (time * 0.5 + seed.y).sin() * 0.5;
    pos.z += (time * 0.3 + seed.z).cos() * 0.5;
    PointOut {
        position: pos,
        color: Vec3::ONE,
        point_size: attenuate(size, SNOW_SIZE_ATTENUATION, view_depth),
        alpha: 0.5 + 0.5 * (time + seed.x * 10.0).sin(),
    }
}

pub fn snow_fragment(point_coord: Vec2, color: Vec3, alpha: f32) -> Option<FragmentOut> {
    let d = sprite_distance(point_coord)?;
    Some(FragmentOut {
        color,
        alpha: sprite_falloff(d, 2.0) * alpha * 0.8,
    })
}

/// Trail points are driven by their stored alpha only.
pub fn trail_point(position: Vec3, alpha: f32) -> PointOut {
    PointOut {
        position,
        color: Vec3::from_array(TRAIL_COLOR),
        point_size: TRAIL_POINT_SIZE * alpha,
        alpha,
    }
}

pub fn trail_fragment(point_coord: Vec2, alpha: f32) -> Option<FragmentOut> {
    sprite_distance(point_coord)?;
    Some(FragmentOut {
        color: Vec3::from_array(TRAIL_COLOR),
        alpha,
    })
}
