// Host-side tests for the per-point animation rules.

use glam::{Vec2, Vec3};
use tree_core::constants::*;
use tree_core::shader::*;
use tree_core::AnimationState;

fn point() -> TreePoint {
    TreePoint {
        base: Vec3::new(1.5, 4.0, -0.5),
        normal: Vec3::new(0.9, 0.3, -0.3).normalize(),
        color: Vec3::new(1.0, 0.1, 0.6),
        seed: Vec3::new(0.2, 0.7, 0.4),
        speed: 1.1,
        scale: 0.3,
    }
}

fn uniforms(time: f32, flash: f32, unleash: f32) -> AnimationState {
    let mut u = AnimationState::new();
    u.time = time;
    u.flash = flash;
    u.unleash = unleash;
    u
}

fn axis_distance(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

#[test]
fn idle_motion_stays_close_to_the_base_position() {
    let p = point();
    let bound = BREATH_AMPLITUDE + BOB_AMPLITUDE + TWIST_AMPLITUDE * 2.0 + 1e-5;
    for i in 0..200 {
        let out = tree_vertex(&p, &uniforms(i as f32 * 0.05, 0.0, 0.0), -20.0);
        assert!((out.position - p.base).length() <= bound);
        assert_eq!(out.color, p.color);
        assert!(out.alpha >= 0.2 - 1e-6 && out.alpha <= 1.0 + 1e-6);
    }
}

#[test]
fn output_is_a_pure_function_of_time() {
    let p = point();
    let a = tree_vertex(&p, &uniforms(3.7, 0.0, 0.4), -15.0);
    let _ = tree_vertex(&p, &uniforms(9.1, 0.0, 0.4), -15.0);
    let b = tree_vertex(&p, &uniforms(3.7, 0.0, 0.4), -15.0);
    assert_eq!(a, b);
}

#[test]
fn full_unleash_pushes_points_out_and_whitens_them() {
    let p = point();
    let idle = tree_vertex(&p, &uniforms(1.0, 0.0, 0.0), -20.0);
    let out = tree_vertex(&p, &uniforms(1.0, 0.0, 1.0), -20.0);
    let pushed = axis_distance(out.position) - axis_distance(idle.position);
    assert!(pushed > UNLEASH_EXPANSION - UNLEASH_NOISE * 2.0, "pushed only {pushed}");
    let white = Vec3::from_array(UNLEASH_WHITE);
    assert!((out.color - p.color.lerp(white, 0.5)).length() < 1e-5);
    assert!((out.point_size / idle.point_size - 3.0).abs() < 1e-4);
}

#[test]
fn tiny_unleash_leaves_the_tree_intact() {
    let p = point();
    let idle = tree_vertex(&p, &uniforms(2.0, 0.0, 0.0), -20.0);
    // smoothstep(0.05) is below the displacement threshold
    let out = tree_vertex(&p, &uniforms(2.0, 0.0, 0.05), -20.0);
    assert_eq!(out.position, idle.position);
    assert_eq!(out.color, idle.color);
}

#[test]
fn points_on_the_axis_do_not_produce_nan() {
    let p = TreePoint {
        base: Vec3::new(0.0, 6.0, 0.0),
        normal: Vec3::Y,
        ..point()
    };
    for t in [0.0, 1.0, 2.5] {
        let out = tree_vertex(&p, &uniforms(t, 0.0, 1.0), -20.0);
        assert!(out.position.is_finite());
    }
}

#[test]
fn point_size_attenuates_with_depth() {
    let p = point();
    let u = uniforms(0.0, 0.0, 0.0);
    let near = tree_vertex(&p, &u, -10.0).point_size;
    let far = tree_vertex(&p, &u, -20.0).point_size;
    assert!((near - p.scale * 20.0).abs() < 1e-4);
    assert!((near / far - 2.0).abs() < 1e-4);
    assert!(tree_vertex(&p, &u, 0.0).point_size.is_finite());
}

#[test]
fn fragments_outside_the_sprite_are_discarded() {
    let u = uniforms(0.0, 0.0, 0.0);
    assert!(tree_fragment(Vec2::new(0.0, 0.0), Vec3::ONE, 1.0, &u).is_none());
    assert!(tree_fragment(Vec2::new(0.5, 1.0), Vec3::ONE, 1.0, &u).is_some());
    let center = tree_fragment(Vec2::splat(0.5), Vec3::ONE, 0.8, &u).unwrap();
    assert!((center.alpha - 0.8).abs() < 1e-6);
    let edge = tree_fragment(Vec2::new(0.5, 0.95), Vec3::ONE, 0.8, &u).unwrap();
    assert!((edge.alpha - 0.8 * 0.1_f32.powf(1.5)).abs() < 1e-4);
}

#[test]
fn flash_brightens_and_raises_alpha() {
    let c = Vec3::new(0.5, 0.1, 0.3);
    let calm = tree_fragment(Vec2::splat(0.5), c, 0.6, &uniforms(0.0, 0.0, 0.0)).unwrap();
    let lit = tree_fragment(Vec2::splat(0.5), c, 0.6, &uniforms(0.0, 1.0, 0.0)).unwrap();
    assert!((lit.color - (c + Vec3::splat(0.8))).length() < 1e-6);
    assert!((lit.alpha - (calm.alpha + 0.5)).abs() < 1e-6);
}

#[test]
fn snow_wraps_inside_the_box() {
    let base = Vec3::new(3.0, 10.0, -2.0);
    let seed = Vec3::new(0.1, 0.5, 0.9);
    for i in 0..500 {
        let t = i as f32 * 0.37;
        let out = snow_vertex(base, seed, 0.6, 0.4, t, SNOW_BOX_HEIGHT, -25.0);
        assert!(out.position.y >= -SNOW_BOX_HEIGHT / 2.0 - 1e-4);
        assert!(out.position.y < SNOW_BOX_HEIGHT / 2.0 + 1e-4);
        assert!((out.position.x - base.x).abs() <= 0.5 + 1e-6);
        assert!((out.position.z - base.z).abs() <= 0.5 + 1e-6);
    }
    // flakes fall: a short step lowers y unless it wraps
    let a = snow_vertex(base, seed, 0.6, 0.4, 1.0, SNOW_BOX_HEIGHT, -25.0);
    let b = snow_vertex(base, seed, 0.6, 0.4, 1.1, SNOW_BOX_HEIGHT, -25.0);
    assert!(b.position.y < a.position.y);
}

#[test]
fn snow_fragment_uses_a_softer_falloff() {
    let tree = tree_fragment(
        Vec2::new(0.5, 0.8),
        Vec3::ONE,
        1.0,
        &uniforms(0.0, 0.0, 0.0),
    )
    .unwrap();
    let snow = snow_fragment(Vec2::new(0.5, 0.8), Vec3::ONE, 1.0).unwrap();
    assert!((snow.alpha - 0.4_f32.powi(2) * 0.8).abs() < 1e-5);
    assert!(snow.alpha < tree.alpha);
}

#[test]
fn trail_points_scale_with_alpha() {
    let p = trail_point(Vec3::ONE, 0.5);
    assert_eq!(p.point_size, TRAIL_POINT_SIZE * 0.5);
    assert_eq!(p.alpha, 0.5);
    assert_eq!(p.color, Vec3::from_array(TRAIL_COLOR));
    assert!(trail_fragment(Vec2::ZERO, 1.0).is_none());
    assert_eq!(trail_fragment(Vec2::splat(0.5), 0.3).unwrap().alpha, 0.3);
}
