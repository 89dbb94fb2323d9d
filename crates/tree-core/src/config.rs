use crate::color::parse_hex;
use crate::constants::*;
use crate::error::ConfigError;
use glam::Vec3;

/// Scene color stops.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub core: Vec3,
    pub mid: Vec3,
    pub edge: Vec3,
    pub snow: Vec3,
    pub ring: Vec3,
}

impl Palette {
    pub fn from_hex(
        core: &str,
        mid: &str,
        edge: &str,
        snow: &str,
        ring: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            core: parse_hex(core)?,
            mid: parse_hex(mid)?,
            edge: parse_hex(edge)?,
            snow: parse_hex(snow)?,
            ring: parse_hex(ring)?,
        })
    }
}

impl Default for Palette {
    // deep pink, coral, gold, pale pink, amber
    fn default() -> Self {
        Self {
            core: Vec3::new(1.0, 20.0 / 255.0, 147.0 / 255.0),
            mid: Vec3::new(1.0, 127.0 / 255.0, 80.0 / 255.0),
            edge: Vec3::new(1.0, 215.0 / 255.0, 0.0),
            snow: Vec3::new(1.0, 234.0 / 255.0, 245.0 / 255.0),
            ring: Vec3::new(1.0, 191.0 / 255.0, 0.0),
        }
    }
}

/// Fixed scene parameters. Built once and read by every generator.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub snow_count: usize,
    pub ring_particles: usize,
    pub tree_height: f32,
    pub tree_radius: f32,
    pub palette: Palette,
    pub bloom_strength: f32,
    /// Mean fingertip-to-wrist distance above which a hand counts as open.
    pub open_threshold: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: TREE_PARTICLE_COUNT,
            snow_count: SNOW_PARTICLE_COUNT,
            ring_particles: RING_PARTICLES,
            tree_height: TREE_HEIGHT,
            tree_radius: TREE_RADIUS,
            palette: Palette::default(),
            bloom_strength: BLOOM_STRENGTH,
            open_threshold: OPEN_HAND_THRESHOLD,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::InvalidCount {
                name: "particle_count",
                min: 1,
                value: self.particle_count,
            });
        }
        // the outermost ring must keep at least one point
        let min_ring = RING_PARTICLE_STEP * (RING_COUNT - 1) + 1;
        if self.ring_particles < min_ring {
            return Err(ConfigError::InvalidCount {
                name: "ring_particles",
                min: min_ring,
                value: self.ring_particles,
            });
        }
        if !(self.tree_height > 0.0) {
            return Err(ConfigError::InvalidDimension {
                name: "tree_height",
                value: self.tree_height,
            });
        }
        if !(self.tree_radius > 0.0) {
            return Err(ConfigError::InvalidDimension {
                name: "tree_radius",
                value: self.tree_radius,
            });
        }
        if !(self.open_threshold > 0.0 && self.open_threshold < 1.0) {
            return Err(ConfigError::InvalidThreshold(self.open_threshold));
        }
        Ok(())
    }

    /// Where wishes land: just above the tree tip.
    pub fn wish_target(&self) -> Vec3 {
        Vec3::new(0.0, self.tree_height + WISH_TARGET_LIFT, 0.0)
    }
}
