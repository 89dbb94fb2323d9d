//! Procedural point-cloud layouts.
//!
//! Every sampler draws from the caller's random source so a seeded `StdRng`
//! reproduces a layout exactly. Layouts are built once at scene construction;
//! only explosion positions are mutated afterwards (see [`crate::explosion`]).

use crate::color::offset_hsl;
use crate::config::SceneConfig;
use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::f32::consts::TAU;

/// Packed per-point record for vertex buffer upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    pub speed: f32,
    pub seed: [f32; 3],
    pub _pad: f32,
}

/// Structure-of-arrays point attributes. All arrays share one length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub colors: Vec<Vec3>,
    pub sizes: Vec<f32>,
    pub seeds: Vec<Vec3>,
    pub speeds: Vec<f32>,
}

impl PointCloud {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            positions: Vec::with_capacity(n),
            colors: Vec::with_capacity(n),
            sizes: Vec::with_capacity(n),
            seeds: Vec::with_capacity(n),
            speeds: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, position: Vec3, color: Vec3, size: f32, seed: Vec3, speed: f32) {
        self.positions.push(position);
        self.colors.push(color);
        self.sizes.push(size);
        self.seeds.push(seed);
        self.speeds.push(speed);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// True when every attribute array has the same point count.
    pub fn is_consistent(&self) -> bool {
        let n = self.positions.len();
        self.colors.len() == n
            && self.sizes.len() == n
            && self.seeds.len() == n
            && self.speeds.len() == n
    }

    pub fn interleaved(&self) -> Vec<PointVertex> {
        (0..self.len())
            .map(|i| PointVertex {
                position: self.positions[i].to_array(),
                size: self.sizes[i],
                color: self.colors[i].to_array(),
                speed: self.speeds[i],
                seed: self.seeds[i].to_array(),
                _pad: 0.0,
            })
            .collect()
    }
}

#[inline]
fn seed3<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    Vec3::new(rng.gen(), rng.gen(), rng.gen())
}

/// Blend the three tree stops by how far out a point sits at its height.
pub fn tree_color(config: &SceneConfig, radius_ratio: f32) -> Vec3 {
    let p = &config.palette;
    if radius_ratio < CORE_BLEND_SPLIT {
        p.core.lerp(p.mid, radius_ratio * 2.0)
    } else {
        p.mid.lerp(p.edge, (radius_ratio - CORE_BLEND_SPLIT) * 1.5)
    }
}

/// Radius of the cone cross-section at `height`.
#[inline]
pub fn cone_radius_at(config: &SceneConfig, height: f32) -> f32 {
    config.tree_radius * (1.0 - height / config.tree_height)
}

/// Outward surface normal of the cone through `p`. Points on the axis get +Y.
pub fn cone_normal(config: &SceneConfig, p: Vec3) -> Vec3 {
    let rho = (p.x * p.x + p.z * p.z).sqrt();
    if rho < 1e-6 {
        return Vec3::Y;
    }
    Vec3::new(
        p.x / rho * config.tree_height,
        config.tree_radius,
        p.z / rho * config.tree_height,
    )
    .normalize()
}

/// Fill the tree cone with area-uniform disks at uniform heights.
pub fn tree_cone<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> PointCloud {
    let n = config.particle_count;
    let mut cloud = PointCloud::with_capacity(n);
    for _ in 0..n {
        let height = rng.gen::<f32>() * config.tree_height;
        let radius_at_height = cone_radius_at(config, height);
        let angle = rng.gen::<f32>() * TAU;
        let r = rng.gen::<f32>().sqrt() * radius_at_height;
        let position = Vec3::new(angle.cos() * r, height, angle.sin() * r);

        let ratio = if radius_at_height > 0.0 {
            r / radius_at_height
        } else {
            0.0
        };
        let jitter = (rng.gen::<f32>() - 0.5) * LIGHTNESS_JITTER;
        let color = offset_hsl(tree_color(config, ratio), 0.0, 0.0, jitter);

        let size = rng.gen::<f32>() * 0.4 + 0.1;
        let seed = seed3(rng);
        let speed = 0.5 + rng.gen::<f32>();
        cloud.push(position, color, size, seed, speed);
    }
    cloud
}

/// Three cloudy rings around the tree base, outer rings sparser.
pub fn rings<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Vec<PointCloud> {
    (0..RING_COUNT)
        .map(|ring_index| {
            let base_radius =
                config.tree_radius * (RING_RADIUS_BASE + ring_index as f32 * RING_RADIUS_STEP);
            let count = config
                .ring_particles
                .saturating_sub(ring_index * RING_PARTICLE_STEP);
            let mut cloud = PointCloud::with_capacity(count);
            for i in 0..count {
                let theta = i as f32 / count as f32 * TAU;
                let r = base_radius + (rng.gen::<f32>() - 0.5) * RING_RADIAL_JITTER;
                let y = (rng.gen::<f32>() - 0.5) * RING_VERTICAL_JITTER;
                let seed = seed3(rng);
                cloud.push(
                    Vec3::new(theta.cos() * r, y, theta.sin() * r),
                    config.palette.ring,
                    0.15,
                    seed,
                    0.0,
                );
            }
            cloud
        })
        .collect()
}

/// Snow flakes scattered through a box that ignores the tree's shape.
pub fn snow_volume<R: Rng + ?Sized>(count: usize, color: Vec3, rng: &mut R) -> PointCloud {
    let mut cloud = PointCloud::with_capacity(count);
    for _ in 0..count {
        let position = Vec3::new(
            (rng.gen::<f32>() - 0.5) * SNOW_BOX_WIDTH,
            rng.gen::<f32>() * SNOW_BOX_HEIGHT,
            (rng.gen::<f32>() - 0.5) * SNOW_BOX_WIDTH,
        );
        let size = rng.gen::<f32>() * 0.5 + 0.2;
        let speed = rng.gen::<f32>() * 0.5 + 0.2;
        let seed = seed3(rng);
        cloud.push(position, color, size, seed, speed);
    }
    cloud
}

/// Uniformly distributed unit vector.
pub fn sphere_direction<R: Rng + ?Sized>(rng: &mut R) -> Vec3 {
    let u: f32 = rng.gen();
    let v: f32 = rng.gen();
    let theta = TAU * u;
    let phi = (2.0 * v - 1.0).clamp(-1.0, 1.0).acos();
    Vec3::new(
        phi.sin() * theta.cos(),
        phi.sin() * theta.sin(),
        phi.cos(),
    )
}

/// Points filling a ball of `radius` with uniform volume density.
pub fn wish_ball<R: Rng + ?Sized>(count: usize, radius: f32, rng: &mut R) -> Vec<Vec3> {
    (0..count)
        .map(|_| {
            let dir = sphere_direction(rng);
            dir * radius * rng.gen::<f32>().cbrt()
        })
        .collect()
}

/// Initial state of an explosion: all particles at `origin` moving outward.
pub struct Burst {
    pub positions: Vec<Vec3>,
    pub velocities: Vec<Vec3>,
    pub colors: Vec<Vec3>,
}

pub fn explosion_burst<R: Rng + ?Sized>(origin: Vec3, count: usize, rng: &mut R) -> Burst {
    let pink = Vec3::from_array(EXPLOSION_PINK);
    let gold = Vec3::from_array(EXPLOSION_GOLD);
    let mut velocities = Vec::with_capacity(count);
    let mut colors = Vec::with_capacity(count);
    for _ in 0..count {
        let speed = EXPLOSION_SPEED_MIN + rng.gen::<f32>() * EXPLOSION_SPEED_SPAN;
        velocities.push(sphere_direction(rng) * speed);
        colors.push(pink.lerp(gold, rng.gen::<f32>()));
    }
    Burst {
        positions: vec![origin; count],
        velocities,
        colors,
    }
}

/// Random spot near the outer surface of the cone for a photo ornament.
pub fn photo_position<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Vec3 {
    let span = (config.tree_height - 2.0 * PHOTO_MARGIN).max(0.0);
    let height = rng.gen::<f32>() * span + PHOTO_MARGIN.min(config.tree_height);
    let max_radius = cone_radius_at(config, height).max(0.0);
    let r = max_radius * (PHOTO_EDGE_MIN + rng.gen::<f32>() * PHOTO_EDGE_SPAN);
    let theta = rng.gen::<f32>() * TAU;
    Vec3::new(theta.cos() * r, height, theta.sin() * r)
}
