// Host-side tests for the gesture interpreter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod sim {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod gesture {
        include!("../src/core/gesture.rs");
    }
}

use instant::Instant;
use sim::constants::*;
use sim::gesture::*;
use std::time::Duration;

const HAND_LANDMARKS: usize = 21;

fn hand(middle_y: f32, pinching: bool) -> Vec<Landmark> {
    let mut lm = vec![Landmark::new(0.5, 0.5); HAND_LANDMARKS];
    lm[LANDMARK_MIDDLE_MCP] = Landmark::new(0.5, middle_y);
    lm[LANDMARK_THUMB_TIP] = Landmark::new(0.40, 0.40);
    lm[LANDMARK_INDEX_TIP] = if pinching {
        Landmark::new(0.41, 0.41)
    } else {
        Landmark::new(0.60, 0.30)
    };
    lm
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn no_hand_produces_no_update() {
    let mut g = GestureInterpreter::new();
    let update = g.interpret(&[], Instant::now());
    assert_eq!(update, GestureUpdate::default());
    assert!(g.last_pinch().is_none());
}

#[test]
fn truncated_hand_is_ignored() {
    let mut g = GestureInterpreter::new();
    let partial = vec![Landmark::new(0.4, 0.4); LANDMARK_MIDDLE_MCP];
    assert_eq!(g.interpret(&[partial], Instant::now()), GestureUpdate::default());
}

#[test]
fn raising_the_hand_increases_scale() {
    let mut g = GestureInterpreter::new();
    let now = Instant::now();
    let centre = g.interpret(&[hand(0.5, false)], now).scale_target.unwrap();
    let high = g.interpret(&[hand(0.2, false)], now).scale_target.unwrap();
    let low = g.interpret(&[hand(0.9, false)], now).scale_target.unwrap();
    assert!((centre - 1.0).abs() < 1e-6);
    assert!((high - 1.3).abs() < 1e-6);
    assert!((low - 0.6).abs() < 1e-6);
}

#[test]
fn only_first_hand_is_used() {
    let mut g = GestureInterpreter::new();
    let update = g.interpret(&[hand(0.3, false), hand(0.9, true)], Instant::now());
    assert!((update.scale_target.unwrap() - 1.2).abs() < 1e-6);
    assert!(!update.pinched);
}

#[test]
fn pinch_threshold_is_strict() {
    let a = Landmark::new(0.5, 0.5);
    assert!(is_pinch(&a, &Landmark::new(0.5, 0.5 + PINCH_THRESHOLD * 0.5)));
    assert!(!is_pinch(&a, &Landmark::new(0.5, 0.5 + PINCH_THRESHOLD * 1.5)));
    // depth does not contribute
    let deep = Landmark { x: 0.5, y: 0.5, z: 3.0 };
    assert!(is_pinch(&a, &deep));
}

#[test]
fn first_pinch_is_accepted() {
    let mut g = GestureInterpreter::new();
    let now = Instant::now();
    assert!(g.interpret(&[hand(0.5, true)], now).pinched);
    assert_eq!(g.last_pinch(), Some(now));
}

#[test]
fn pinches_inside_cooldown_fire_once() {
    let mut g = GestureInterpreter::new();
    let t0 = Instant::now();
    let fired = [0, 100, 400, 899]
        .iter()
        .filter(|&&dt| g.interpret(&[hand(0.5, true)], t0 + ms(dt)).pinched)
        .count();
    assert_eq!(fired, 1);
    assert_eq!(g.last_pinch(), Some(t0));
}

#[test]
fn pinches_past_cooldown_fire_twice() {
    let mut g = GestureInterpreter::new();
    let t0 = Instant::now();
    assert!(g.interpret(&[hand(0.5, true)], t0).pinched);
    assert!(g.interpret(&[hand(0.5, true)], t0 + ms(950)).pinched);
    assert_eq!(g.last_pinch(), Some(t0 + ms(950)));
}

#[test]
fn rejected_pinch_does_not_extend_cooldown() {
    let mut g = GestureInterpreter::new();
    let t0 = Instant::now();
    assert!(g.interpret(&[hand(0.5, true)], t0).pinched);
    assert!(!g.interpret(&[hand(0.5, true)], t0 + ms(800)).pinched);
    assert!(g.interpret(&[hand(0.5, true)], t0 + ms(PINCH_COOLDOWN_MS)).pinched);
}

#[test]
fn open_hand_never_pinches() {
    let mut g = GestureInterpreter::new();
    let t0 = Instant::now();
    for i in 0..5 {
        assert!(!g.interpret(&[hand(0.5, false)], t0 + ms(i * 1000)).pinched);
    }
    assert!(g.last_pinch().is_none());
}

#[test]
fn tracking_status_text() {
    assert_eq!(TrackingStatus::Active.to_string(), "Hand tracking active");
    let down = TrackingStatus::Unavailable("camera denied".into());
    assert!(down.to_string().starts_with("Hand tracking unavailable"));
    assert!(down.to_string().contains("camera denied"));
}
