// Host-side tests for the per-frame animation step and gesture wiring.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod gesture {
        include!("../src/core/gesture.rs");
    }
    pub mod particles {
        include!("../src/core/particles.rs");
    }
    pub mod session {
        include!("../src/core/session.rs");
    }
    pub mod shapes {
        include!("../src/core/shapes.rs");
    }
}

use instant::Instant;
use sim::constants::*;
use sim::gesture::Landmark;
use sim::session::*;
use sim::shapes::{ShapeError, ShapeKind};
use std::time::Duration;

fn make_session(count: usize) -> Session {
    Session::new(SessionParams {
        particle_count: count,
        seed: Some(42),
        initial_shape: ShapeKind::Heart,
    })
}

fn pinching_hand(middle_y: f32) -> Vec<Landmark> {
    let mut lm = vec![Landmark::new(0.5, 0.5); 21];
    lm[LANDMARK_MIDDLE_MCP] = Landmark::new(0.5, middle_y);
    lm[LANDMARK_THUMB_TIP] = Landmark::new(0.30, 0.30);
    lm[LANDMARK_INDEX_TIP] = Landmark::new(0.31, 0.30);
    lm
}

#[test]
fn defaults_match_initial_state() {
    let s = Session::new(SessionParams::default());
    assert_eq!(s.target(), ShapeKind::Heart);
    assert_eq!(s.particles().len(), PARTICLE_COUNT);
    assert_eq!(s.scale(), ScaleState { target: 1.0, current: 1.0 });
    assert_eq!(s.rotation_y(), 0.0);
    assert!(s.particles().components().iter().all(|c| *c == 0.0));
}

#[test]
fn particles_converge_geometrically() {
    let mut s = make_session(256);
    let target = s.target_shape().clone();
    let mut prev: Vec<f32> = s
        .particles()
        .components()
        .iter()
        .zip(&target.components)
        .map(|(p, t)| t - p)
        .collect();
    for _ in 0..20 {
        s.step();
        let errs: Vec<f32> = s
            .particles()
            .components()
            .iter()
            .zip(&target.components)
            .map(|(p, t)| t - p)
            .collect();
        for (e, pe) in errs.iter().zip(&prev) {
            if pe.abs() > 1e-3 {
                assert!((e / pe - (1.0 - PARTICLE_EASE)).abs() < 1e-3, "ratio {}", e / pe);
            }
        }
        prev = errs;
    }
}

#[test]
fn scale_converges_geometrically() {
    let mut s = make_session(8);
    s.set_scale_target(1.5);
    let mut prev = 0.5f32;
    for _ in 0..30 {
        s.step();
        let err = s.scale().target - s.scale().current;
        assert!((err / prev - (1.0 - SCALE_EASE)).abs() < 1e-4, "ratio {}", err / prev);
        prev = err;
    }
    assert!(prev > 0.0, "scale overshot the target");
}

#[test]
fn heart_is_ninety_seven_percent_converged_after_fifty_frames() {
    let mut s = make_session(1600);
    let heart = s.shapes().get(ShapeKind::Heart).clone();
    let initial = s.particles().max_error(&heart);
    assert!(initial > 0.0);
    for _ in 0..50 {
        s.step();
    }
    let remaining = s.particles().max_error(&heart);
    let bound = (1.0 - PARTICLE_EASE).powi(50);
    assert!(remaining / initial <= bound * 1.01, "ratio {}", remaining / initial);
    assert!(remaining / initial <= 0.03);
}

#[test]
fn retarget_moves_every_component_closer() {
    let mut s = make_session(400);
    for _ in 0..10 {
        s.step();
    }
    s.set_shape_by_name("sphere").unwrap();
    let sphere = s.target_shape().clone();
    assert_eq!(sphere.kind, ShapeKind::Sphere);
    let before = s.particles().components().to_vec();
    s.step();
    let after = s.particles().components();
    for i in 0..before.len() {
        let d0 = (sphere.components[i] - before[i]).abs();
        let d1 = (sphere.components[i] - after[i]).abs();
        if d0 == 0.0 {
            assert_eq!(d1, 0.0);
        } else {
            assert!(d1 < d0, "component {i}: {d0} -> {d1}");
        }
    }
}

#[test]
fn unknown_shape_name_keeps_target() {
    let mut s = make_session(8);
    s.set_shape(ShapeKind::Saturn);
    assert_eq!(
        s.set_shape_by_name("cube"),
        Err(ShapeError::UnknownShape("cube".into()))
    );
    assert_eq!(s.target(), ShapeKind::Saturn);
}

#[test]
fn step_marks_buffer_dirty_and_drifts() {
    let mut s = make_session(8);
    assert!(s.particles_mut().take_dirty());
    assert!(!s.particles().is_dirty());
    s.step();
    assert!(s.particles().is_dirty());
    for _ in 0..9 {
        s.step();
    }
    assert_eq!(s.frames(), 10);
    assert!((s.rotation_y() - 10.0 * ROTATION_SPEED).abs() < 1e-7);
}

#[test]
fn model_matrix_applies_scale_and_yaw() {
    let mut s = make_session(8);
    s.set_scale_target(2.0);
    for _ in 0..200 {
        s.step();
    }
    let m = s.model_matrix();
    let (scale, rot, trans) = m.to_scale_rotation_translation();
    assert!((scale - glam::Vec3::splat(s.scale().current)).length() < 1e-4);
    assert!((s.scale().current - 2.0).abs() < 1e-3);
    let (axis, angle) = rot.to_axis_angle();
    assert!((angle - s.rotation_y()).abs() < 1e-4);
    assert!(axis.y > 0.99);
    assert_eq!(trans, glam::Vec3::ZERO);
}

#[test]
fn missing_hand_freezes_signals() {
    let mut s = make_session(8);
    let now = Instant::now();
    s.on_hand_results(&[pinching_hand(0.2)], now);
    let target = s.target();
    assert!((s.scale().target - 1.3).abs() < 1e-6);
    let update = s.on_hand_results(&[], now + Duration::from_secs(5));
    assert!(update.scale_target.is_none() && !update.pinched);
    assert!((s.scale().target - 1.3).abs() < 1e-6);
    assert_eq!(s.target(), target);
}

#[test]
fn pinch_changes_are_debounced() {
    let mut s = make_session(8);
    let t0 = Instant::now();
    let changes = (0..9)
        .filter(|i| {
            s.on_hand_results(&[pinching_hand(0.5)], t0 + Duration::from_millis(i * 100))
                .pinched
        })
        .count();
    assert_eq!(changes, 1);
    let later = s.on_hand_results(&[pinching_hand(0.5)], t0 + Duration::from_millis(1900));
    assert!(later.pinched);
}

#[test]
fn repeated_pinches_visit_several_shapes() {
    let mut s = make_session(8);
    let t0 = Instant::now();
    let mut seen = std::collections::HashSet::new();
    for i in 0..60u64 {
        s.on_hand_results(&[pinching_hand(0.5)], t0 + Duration::from_millis(i * 1000));
        seen.insert(s.target());
    }
    assert!(seen.len() > 3, "only visited {:?}", seen);
}

#[test]
fn seeded_sessions_are_reproducible() {
    let a = make_session(32);
    let b = make_session(32);
    for kind in ShapeKind::ALL {
        assert_eq!(a.shapes().get(kind).components, b.shapes().get(kind).components);
    }
}
