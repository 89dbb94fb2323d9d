// Host-side tests for the procedural point-cloud layouts.

use glam::Vec3;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tree_core::constants::*;
use tree_core::geometry::*;
use tree_core::SceneConfig;

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn axis_distance(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

#[test]
fn tree_points_stay_inside_the_cone() {
    let config = SceneConfig::default();
    let cloud = tree_cone(&config, &mut rng());
    assert_eq!(cloud.len(), config.particle_count);
    assert!(cloud.is_consistent());
    for p in &cloud.positions {
        assert!(p.y >= 0.0 && p.y <= config.tree_height);
        let limit = config.tree_radius * (1.0 - p.y / config.tree_height);
        assert!(
            axis_distance(*p) <= limit + 1e-4,
            "point {p} outside cone radius {limit}"
        );
    }
}

#[test]
fn tree_disk_sampling_is_area_uniform() {
    let config = SceneConfig {
        particle_count: 40_000,
        ..SceneConfig::default()
    };
    let cloud = tree_cone(&config, &mut rng());

    // bin by normalized radius; counts per unit area should be flat
    const BINS: usize = 5;
    let mut counts = [0usize; BINS];
    for p in &cloud.positions {
        let limit = config.tree_radius * (1.0 - p.y / config.tree_height);
        if limit < 1e-3 {
            continue;
        }
        let u = (axis_distance(*p) / limit).min(0.999_999);
        counts[(u * BINS as f32) as usize] += 1;
    }
    let total: usize = counts.iter().sum();
    let densities: Vec<f32> = (0..BINS)
        .map(|i| {
            let lo = i as f32 / BINS as f32;
            let hi = (i + 1) as f32 / BINS as f32;
            counts[i] as f32 / total as f32 / (hi * hi - lo * lo)
        })
        .collect();
    for d in &densities {
        assert!((d - 1.0).abs() < 0.12, "density not flat: {densities:?}");
    }
    // linear radius sampling would put ~20% in the inner bin instead of ~4%
    assert!((counts[0] as f32 / total as f32) < 0.06);
}

#[test]
fn tree_attributes_fall_in_their_ranges() {
    let cloud = tree_cone(&SceneConfig::default(), &mut rng());
    for i in 0..cloud.len() {
        assert!(cloud.sizes[i] >= 0.1 && cloud.sizes[i] <= 0.5);
        assert!(cloud.speeds[i] >= 0.5 && cloud.speeds[i] <= 1.5);
        let s = cloud.seeds[i];
        assert!(s.min_element() >= 0.0 && s.max_element() <= 1.0);
        let c = cloud.colors[i];
        assert!(c.min_element() >= 0.0 && c.max_element() <= 1.0);
    }
}

#[test]
fn tree_color_blends_core_to_edge() {
    let config = SceneConfig::default();
    let p = config.palette;
    assert!((tree_color(&config, 0.0) - p.core).length() < 1e-6);
    assert!((tree_color(&config, CORE_BLEND_SPLIT) - p.mid).length() < 1e-6);
    let outer = tree_color(&config, 1.0);
    // the outermost ratio reaches just past the edge stop's blend weight
    assert!((outer - p.mid.lerp(p.edge, 1.05)).length() < 1e-5);
}

#[test]
fn same_seed_reproduces_the_layout() {
    let config = SceneConfig {
        particle_count: 500,
        ..SceneConfig::default()
    };
    let a = tree_cone(&config, &mut StdRng::seed_from_u64(3));
    let b = tree_cone(&config, &mut StdRng::seed_from_u64(3));
    assert_eq!(a, b);
}

#[test]
fn rings_thin_out_and_widen() {
    let config = SceneConfig::default();
    let rings = rings(&config, &mut rng());
    assert_eq!(rings.len(), RING_COUNT);
    let counts: Vec<usize> = rings.iter().map(|r| r.len()).collect();
    assert_eq!(counts, vec![600, 500, 400]);
    for (i, ring) in rings.iter().enumerate() {
        let base = config.tree_radius * (1.1 + 0.2 * i as f32);
        for p in &ring.positions {
            assert!((axis_distance(*p) - base).abs() <= RING_RADIAL_JITTER / 2.0 + 1e-4);
            assert!(p.y.abs() <= RING_VERTICAL_JITTER / 2.0 + 1e-6);
        }
        assert!(ring.colors.iter().all(|c| *c == config.palette.ring));
    }
}

#[test]
fn snow_fills_the_box() {
    let color = Vec3::ONE;
    let snow = snow_volume(3000, color, &mut rng());
    assert_eq!(snow.len(), 3000);
    let half = SNOW_BOX_WIDTH / 2.0;
    let mut above_tree = 0;
    for p in &snow.positions {
        assert!(p.x.abs() <= half && p.z.abs() <= half);
        assert!(p.y >= 0.0 && p.y <= SNOW_BOX_HEIGHT);
        if p.y > TREE_HEIGHT {
            above_tree += 1;
        }
    }
    // independent of the tree shape
    assert!(above_tree > 1500);
}

#[test]
fn sphere_directions_are_unit_and_cover_both_hemispheres() {
    let mut r = rng();
    let dirs: Vec<Vec3> = (0..2000).map(|_| sphere_direction(&mut r)).collect();
    for d in &dirs {
        assert!((d.length() - 1.0).abs() < 1e-4);
    }
    let mean = dirs.iter().copied().sum::<Vec3>() / dirs.len() as f32;
    assert!(mean.length() < 0.1, "directions biased: {mean}");
}

#[test]
fn wish_ball_points_fill_the_ball() {
    let pts = wish_ball(WISH_BALL_PARTICLES, WISH_BALL_RADIUS, &mut rng());
    assert_eq!(pts.len(), WISH_BALL_PARTICLES);
    for p in &pts {
        assert!(p.length() <= WISH_BALL_RADIUS + 1e-5);
    }
}

#[test]
fn explosion_burst_starts_at_origin_with_bounded_speeds() {
    let origin = Vec3::new(0.0, 13.0, 0.0);
    let burst = explosion_burst(origin, EXPLOSION_PARTICLES, &mut rng());
    assert_eq!(burst.positions.len(), EXPLOSION_PARTICLES);
    assert_eq!(burst.velocities.len(), EXPLOSION_PARTICLES);
    assert_eq!(burst.colors.len(), EXPLOSION_PARTICLES);
    assert!(burst.positions.iter().all(|p| *p == origin));
    for v in &burst.velocities {
        let s = v.length();
        assert!(s >= 2.0 - 1e-4 && s <= 6.0 + 1e-4);
    }
}

#[test]
fn photo_positions_hug_the_cone_surface() {
    let config = SceneConfig::default();
    let mut r = rng();
    for _ in 0..500 {
        let p = photo_position(&config, &mut r);
        assert!(p.y >= 1.0 && p.y <= config.tree_height - 1.0);
        let limit = config.tree_radius * (1.0 - p.y / config.tree_height);
        let rho = axis_distance(p);
        assert!(rho >= limit * 0.8 - 1e-4 && rho <= limit * 1.1 + 1e-4);
    }
}

#[test]
fn interleaved_vertices_match_attribute_arrays() {
    let config = SceneConfig {
        particle_count: 10,
        ..SceneConfig::default()
    };
    let cloud = tree_cone(&config, &mut rng());
    let verts = cloud.interleaved();
    assert_eq!(verts.len(), cloud.len());
    assert_eq!(verts[3].position, cloud.positions[3].to_array());
    assert_eq!(verts[3].speed, cloud.speeds[3]);
    let bytes: &[u8] = bytemuck::cast_slice(&verts);
    assert_eq!(bytes.len(), verts.len() * std::mem::size_of::<PointVertex>());
}

#[test]
fn cone_normal_points_outward_and_up() {
    let config = SceneConfig::default();
    let n = cone_normal(&config, Vec3::new(2.0, 3.0, 0.0));
    assert!((n.length() - 1.0).abs() < 1e-5);
    assert!(n.x > 0.0 && n.y > 0.0 && n.z.abs() < 1e-6);
    assert_eq!(cone_normal(&config, Vec3::new(0.0, 5.0, 0.0)), Vec3::Y);
}
