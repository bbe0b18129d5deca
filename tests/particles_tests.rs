// Host-side tests for the hero particle field.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}
mod particles {
    include!("../src/core/particles.rs");
}

use constants::*;
use glam::Vec2;
use particles::*;

fn surface() -> Vec2 {
    Vec2::new(800.0, 400.0)
}

fn assert_in_bounds(field: &ParticleField, size: Vec2) {
    for (i, p) in field.particles.iter().enumerate() {
        assert!(
            p.pos.x >= 0.0 && p.pos.x < size.x && p.pos.y >= 0.0 && p.pos.y < size.y,
            "particle {i} out of bounds at ({}, {}) for {}x{}",
            p.pos.x,
            p.pos.y,
            size.x,
            size.y
        );
    }
}

#[test]
fn count_scales_with_width_and_caps() {
    let rich = FieldParams::RICH;
    assert_eq!(rich.count_for_width(0.0), 0);
    assert_eq!(rich.count_for_width(13.9), 0);
    assert_eq!(rich.count_for_width(140.0), 10);
    assert_eq!(rich.count_for_width(700.0), 50);
    assert_eq!(rich.count_for_width(5000.0), RICH_MAX_PARTICLES);

    let plain = FieldParams::PLAIN;
    assert_eq!(plain.count_for_width(400.0), 20);
    assert_eq!(plain.count_for_width(5000.0), PLAIN_MAX_PARTICLES);
}

#[test]
fn negative_or_nan_width_spawns_nothing() {
    assert_eq!(FieldParams::RICH.count_for_width(-100.0), 0);
    assert_eq!(FieldParams::RICH.count_for_width(f32::NAN), 0);
}

#[test]
fn seeded_fields_are_reproducible() {
    let a = ParticleField::with_seed(FieldParams::RICH, surface(), 42);
    let b = ParticleField::with_seed(FieldParams::RICH, surface(), 42);
    assert_eq!(a.particles, b.particles);

    let c = ParticleField::with_seed(FieldParams::RICH, surface(), 43);
    assert_ne!(a.particles, c.particles);
}

#[test]
fn spawned_particles_respect_ranges() {
    let field = ParticleField::with_seed(FieldParams::RICH, surface(), 7);
    assert_eq!(field.len(), 57);
    assert_in_bounds(&field, surface());
    let half_speed = RICH_SPEED_SPAN / 2.0;
    for p in &field.particles {
        assert!(p.vel.x >= -half_speed && p.vel.x < half_speed);
        assert!(p.vel.y >= -half_speed && p.vel.y < half_speed);
        assert!(p.radius >= RICH_RADIUS_MIN && p.radius <= RICH_RADIUS_MIN + RICH_RADIUS_SPAN);
        assert!(p.opacity >= RICH_OPACITY_MIN && p.opacity <= RICH_OPACITY_MIN + RICH_OPACITY_SPAN);
        assert!(RICH_PALETTE.contains(&p.color));
        let phase = p.phase.expect("rich particles pulse");
        assert!((0.0..=std::f32::consts::TAU).contains(&phase));
    }
}

#[test]
fn plain_particles_share_one_color_and_do_not_pulse() {
    let field = ParticleField::with_seed(FieldParams::PLAIN, surface(), 7);
    assert!(!field.is_empty());
    for p in &field.particles {
        assert_eq!(p.color, TEAL);
        assert!(p.phase.is_none());
        assert_eq!(p.draw_radius(), p.radius);
        assert_eq!(p.draw_opacity(), p.opacity);
    }
}

#[test]
fn wrap_is_exact_at_the_far_edge() {
    assert_eq!(wrap_coord(300.0, 300.0), 0.0);
    assert_eq!(wrap_coord(0.0, 300.0), 0.0);
    assert_eq!(wrap_coord(299.5, 300.0), 299.5);
    assert_eq!(wrap_coord(300.25, 300.0), 0.25);
    assert!((wrap_coord(-0.25, 300.0) - 299.75).abs() < 1e-4);
}

#[test]
fn wrap_never_returns_the_extent_for_tiny_negatives() {
    let w = wrap_coord(-1e-9, 300.0);
    assert!((0.0..300.0).contains(&w), "got {w}");
}

#[test]
fn wrap_handles_degenerate_extents() {
    assert_eq!(wrap_coord(12.0, 0.0), 0.0);
    assert_eq!(wrap_coord(12.0, -5.0), 0.0);
    assert_eq!(wrap_coord(f32::INFINITY, 100.0), 0.0);
}

#[test]
fn crossing_an_edge_wraps_to_the_opposite_side() {
    let size = Vec2::new(100.0, 50.0);
    let mut p = Particle {
        pos: Vec2::new(99.9, 0.1),
        vel: Vec2::new(0.1, -0.2),
        radius: 1.0,
        opacity: 0.5,
        color: TEAL,
        phase: None,
    };
    p.advance(size);
    assert!(p.pos.x < 1.0, "x should wrap to the left edge, got {}", p.pos.x);
    assert!(p.pos.y > 49.0, "y should wrap to the bottom edge, got {}", p.pos.y);
}

#[test]
fn positions_stay_in_bounds_over_many_frames() {
    let size = surface();
    let mut field = ParticleField::with_seed(FieldParams::RICH, size, 1);
    for _ in 0..5000 {
        field.advance(size);
    }
    assert_in_bounds(&field, size);
}

#[test]
fn shrinking_bounds_pulls_particles_back_inside() {
    let mut field = ParticleField::with_seed(FieldParams::RICH, surface(), 3);
    let small = Vec2::new(120.0, 80.0);
    field.advance(small);
    assert_in_bounds(&field, small);
}

#[test]
fn pulse_advances_phase_and_modulates_radius_and_opacity() {
    let mut p = Particle {
        pos: Vec2::new(10.0, 10.0),
        vel: Vec2::ZERO,
        radius: 2.0,
        opacity: 0.4,
        color: TEAL,
        phase: Some(std::f32::consts::FRAC_PI_2 - PULSE_STEP_RAD),
    };
    p.advance(Vec2::new(100.0, 100.0));
    let phase = p.phase.unwrap();
    assert!((phase - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    assert!((p.draw_radius() - (2.0 + PULSE_RADIUS_SWING)).abs() < 1e-5);
    assert!((p.draw_opacity() - (0.4 + PULSE_OPACITY_SWING)).abs() < 1e-5);
}

#[test]
fn link_alpha_is_zero_at_threshold_and_peaks_near_zero() {
    assert_eq!(link_alpha(150.0, 150.0, 0.12), None);
    assert_eq!(link_alpha(200.0, 150.0, 0.12), None);
    assert_eq!(link_alpha(0.0, 150.0, 0.12), Some(0.12));
    let near = link_alpha(1e-3, 150.0, 0.12).unwrap();
    assert!((near - 0.12).abs() < 1e-5);
    let almost = link_alpha(149.999, 150.0, 0.12).unwrap();
    assert!(almost >= 0.0 && almost < 1e-5);
}

#[test]
fn link_alpha_is_monotonically_non_increasing() {
    let mut prev = f32::INFINITY;
    let mut d = 0.0_f32;
    while d < 160.0 {
        let a = link_alpha(d, 150.0, 0.12).unwrap_or(0.0);
        assert!(a <= prev, "alpha rose at distance {d}");
        prev = a;
        d += 0.5;
    }
}

#[test]
fn links_cover_each_close_pair_once() {
    let size = Vec2::new(1000.0, 1000.0);
    let at = |x: f32, y: f32| Particle {
        pos: Vec2::new(x, y),
        vel: Vec2::ZERO,
        radius: 1.0,
        opacity: 0.5,
        color: TEAL,
        phase: None,
    };
    let mut field = ParticleField::with_seed(FieldParams::PLAIN, size, 0);
    field.particles = vec![at(0.0, 0.0), at(60.0, 0.0), at(500.0, 500.0)];

    let mut links = Vec::new();
    field.for_each_link(|a, b, alpha| links.push((a.pos, b.pos, alpha)));
    assert_eq!(links.len(), 1);
    let (a, b, alpha) = links[0];
    assert_eq!(a, Vec2::new(0.0, 0.0));
    assert_eq!(b, Vec2::new(60.0, 0.0));
    assert!((alpha - PLAIN_LINK_ALPHA * 0.5).abs() < 1e-6);
}
