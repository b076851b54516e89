// Host-side tests for pure input routing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use input::*;
use swarm_core::{GateEvent, GatePolicy};

const STEP_MS: f64 = 600.0;

fn nav() -> Navigator {
    Navigator::new(GatePolicy::default(), vec![0.0, 1000.0, 2000.0])
}

#[test]
fn touch_tracker_measures_upward_swipe() {
    let mut t = TouchTracker::default();
    assert_eq!(t.end(10.0, 5.0), None);
    t.begin(500.0, 100.0);
    assert!(t.is_active());
    let swipe = t.end(380.0, 300.0).unwrap();
    assert_eq!(swipe, Swipe { distance: 120.0, elapsed_ms: 200.0 });
    assert!(!t.is_active());
}

#[test]
fn wheel_walks_intro_then_scrolls_sections() {
    let mut n = nav();
    let a = n.wheel(100.0, 0.0, STEP_MS);
    assert_eq!(a, NavOutcome { show: Some(1), prevent_default: true });
    assert_eq!(n.wheel(100.0, 0.0, 2.0 * STEP_MS).show, Some(2));

    // The releasing wheel lets the page move on its own.
    let released = n.wheel(100.0, 0.0, 3.0 * STEP_MS);
    assert_eq!(released, NavOutcome::default());
    assert!(n.ctx.intro_complete);

    let next = n.wheel(100.0, 0.0, 4.0 * STEP_MS);
    assert_eq!(next.show, None);
    assert!(next.prevent_default);
    assert!(n.ctx.page_scrolling);
    assert_eq!(n.ctx.section, 1);

    let t0 = 4.0 * STEP_MS;
    let mid = n.tick(t0 + 500.0).unwrap();
    assert!(mid > 0.0 && mid < 1000.0);
    assert_eq!(n.tick(t0 + 1000.0), Some(1000.0));
}

#[test]
fn debounced_wheel_is_swallowed() {
    let mut n = nav();
    n.wheel(100.0, 0.0, STEP_MS);
    let held = n.wheel(100.0, 0.0, STEP_MS + 10.0);
    assert_eq!(held, NavOutcome { show: None, prevent_default: true });
}

#[test]
fn zero_delta_wheel_is_ignored() {
    let mut n = nav();
    assert_eq!(n.wheel(0.0, 0.0, STEP_MS), NavOutcome::default());
    assert_eq!(n.gate.index(), 0);
}

#[test]
fn swipes_drive_the_locked_intro() {
    let mut n = nav();
    let short = Swipe { distance: 20.0, elapsed_ms: 100.0 };
    assert_eq!(n.swipe(short, 0.0, 0.0), NavOutcome::default());
    let up = Swipe { distance: 120.0, elapsed_ms: 800.0 };
    assert_eq!(n.swipe(up, 0.0, 0.0).show, Some(1));
    let down = Swipe { distance: -120.0, elapsed_ms: 800.0 };
    assert_eq!(n.swipe(down, 0.0, 400.0).show, Some(0));
}

#[test]
fn retreat_at_page_top_returns_to_intro() {
    let mut n = nav();
    for i in 1..=3 {
        n.wheel(100.0, 0.0, i as f64 * STEP_MS);
    }
    assert!(n.gate.is_unlocked());
    let back = n.key("ArrowUp", 0.0, 4.0 * STEP_MS);
    assert_eq!(back, NavOutcome { show: Some(2), prevent_default: true });
    assert!(!n.gate.is_unlocked());
}

#[test]
fn unrelated_keys_do_nothing() {
    let mut n = nav();
    assert_eq!(n.key("Enter", 0.0, STEP_MS), NavOutcome::default());
    assert_eq!(n.key("ArrowDown", 0.0, STEP_MS).show, Some(1));
}

#[test]
fn native_scroll_updates_section_once_released() {
    let mut n = nav();
    n.observe_scroll(2000.0);
    assert_eq!(n.ctx.section, 0);
    for i in 1..=3 {
        n.wheel(100.0, 0.0, i as f64 * STEP_MS);
    }
    n.observe_scroll(1900.0);
    assert_eq!(n.ctx.section, 2);
}

#[test]
fn gate_events_decide_native_scroll() {
    let mut n = nav();
    let mut at = 0.0;
    let mut outcomes = Vec::new();
    // Morph, Morph, Released.
    for delta in [100.0, 100.0, 100.0] {
        at += STEP_MS;
        outcomes.push(n.wheel(delta, 0.0, at));
    }
    let captured: Vec<bool> = outcomes.iter().map(|o| o.prevent_default).collect();
    let expected: Vec<bool> = [GateEvent::Morph(1), GateEvent::Morph(2), GateEvent::Released]
        .iter()
        .map(GateEvent::captures)
        .collect();
    assert_eq!(captured, expected);

    at += STEP_MS;
    assert!(n.wheel(-100.0, 0.0, at).prevent_default);
    let held = n.wheel(-100.0, 0.0, at + 10.0);
    assert_eq!(held.prevent_default, GateEvent::Held.captures());
    assert_eq!(held.show, None);
}
