// Host-side tests for the pointer-to-transform mapper.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod tilt {
    include!("../src/tilt.rs");
}

use glam::Vec2;
use tilt::*;

const EPS: f32 = 1e-4;

fn rect() -> CardRect {
    CardRect {
        left: 100.0,
        top: 50.0,
        width: 300.0,
        height: 420.0,
    }
}

fn cfg(max: f32) -> TiltConfig {
    TiltConfig {
        max_rotation_deg: max,
        ..TiltConfig::default()
    }
}

#[test]
fn center_maps_to_zero_rotation() {
    let s = normalize_pointer(Vec2::new(250.0, 260.0), &rect());
    assert!((s.u - 0.5).abs() < EPS);
    assert!((s.v - 0.5).abs() < EPS);

    let t = map_pointer(s, &cfg(18.0));
    assert!(t.rotate_x.abs() < EPS);
    assert!(t.rotate_y.abs() < EPS);
    assert!((t.glare_x - 50.0).abs() < EPS);
    assert!((t.glare_y - 50.0).abs() < EPS);
}

#[test]
fn top_left_corner_tilts_to_the_cap() {
    let s = normalize_pointer(Vec2::new(100.0, 50.0), &rect());
    assert_eq!(s, PointerSample { u: 0.0, v: 0.0 });

    let t = map_pointer(s, &cfg(18.0));
    assert!((t.rotate_y + 18.0).abs() < EPS);
    assert!((t.rotate_x - 18.0).abs() < EPS);
    assert_eq!(t.glare_x, 0.0);
    assert_eq!(t.glare_y, 0.0);
}

#[test]
fn bottom_right_corner_is_mirror_of_top_left() {
    let t = map_pointer(PointerSample { u: 1.0, v: 1.0 }, &cfg(18.0));
    assert!((t.rotate_y - 18.0).abs() < EPS);
    assert!((t.rotate_x + 18.0).abs() < EPS);
    assert!((t.glare_x - 100.0).abs() < EPS);
    assert!((t.glare_y - 100.0).abs() < EPS);
}

#[test]
fn rotation_follows_linear_formula() {
    let c = cfg(12.5);
    for i in 0..=10 {
        for j in 0..=10 {
            let u = i as f32 / 10.0;
            let v = j as f32 / 10.0;
            let t = map_pointer(PointerSample { u, v }, &c);
            assert!((t.rotate_y - (u - 0.5) * 2.0 * 12.5).abs() < EPS);
            assert!((t.rotate_x + (v - 0.5) * 2.0 * 12.5).abs() < EPS);
        }
    }
}

#[test]
fn samples_outside_the_box_are_clamped() {
    let r = rect();
    let c = cfg(18.0);
    let far = [
        Vec2::new(-500.0, -500.0),
        Vec2::new(5000.0, 260.0),
        Vec2::new(250.0, 9000.0),
    ];
    for p in far {
        let s = normalize_pointer(p, &r);
        assert!((0.0..=1.0).contains(&s.u));
        assert!((0.0..=1.0).contains(&s.v));
        let t = map_pointer(s, &c);
        assert!(t.rotate_x.abs() <= 18.0 + EPS);
        assert!(t.rotate_y.abs() <= 18.0 + EPS);
    }
}

#[test]
fn degenerate_rect_falls_back_to_center() {
    let zero = CardRect::default();
    assert_eq!(
        normalize_pointer(Vec2::new(10.0, 10.0), &zero),
        PointerSample::CENTER
    );
    let nan = normalize_pointer(Vec2::new(f32::NAN, 10.0), &rect());
    assert_eq!(nan, PointerSample::CENTER);
}

#[test]
fn default_config_matches_constants() {
    let c = TiltConfig::default();
    assert_eq!(c.max_rotation_deg, constants::MAX_ROTATION_DEG);
    assert_eq!(c.perspective_px, constants::PERSPECTIVE_PX);
    assert_eq!(c.scale_on_hover, constants::SCALE_ON_HOVER);
    assert_eq!(perspective_css(&c), "1000px");
}

#[test]
fn css_strings_carry_the_values() {
    assert_eq!(
        tilt_transform_css(18.0, -18.0, 1.05),
        "rotateX(18.000deg) rotateY(-18.000deg) scale3d(1.05, 1.05, 1)"
    );
    assert_eq!(
        tilt_transform_css(0.0, 0.0, 1.0),
        "rotateX(0.000deg) rotateY(0.000deg) scale3d(1, 1, 1)"
    );
    assert_eq!(flip_transform_css(true), "rotateY(180deg)");
    assert_eq!(flip_transform_css(false), "rotateY(0deg)");
    assert!(glare_gradient_css(25.0, 75.0).starts_with("radial-gradient(circle at 25.00% 75.00%"));
    assert_eq!(sheen_position_css(0.0, 100.0), "0.00% 100.00%");
}
