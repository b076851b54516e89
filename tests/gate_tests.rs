// Host-side tests for the intro scroll gate.

use swarm_core::*;

const STEP_MS: f64 = 600.0;

fn wheel(gate: &mut ScrollGate, input: GateInput, at: f64, ctx: &mut ScrollContext) -> GateEvent {
    gate.handle(input, InputSource::Wheel, at, ctx)
}

#[test]
fn three_downs_walk_the_texts_then_release() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    let events: Vec<GateEvent> = (1..=3)
        .map(|i| wheel(&mut gate, GateInput::Advance, i as f64 * STEP_MS, &mut ctx))
        .collect();
    assert_eq!(
        events,
        vec![GateEvent::Morph(1), GateEvent::Morph(2), GateEvent::Released]
    );
    assert_eq!(gate.index(), 2);
    assert!(gate.is_unlocked());
    assert!(ctx.intro_complete);
}

#[test]
fn rapid_wheel_is_debounced() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    assert_eq!(wheel(&mut gate, GateInput::Advance, 1000.0, &mut ctx), GateEvent::Morph(1));
    assert_eq!(wheel(&mut gate, GateInput::Advance, 1100.0, &mut ctx), GateEvent::Held);
    assert_eq!(gate.index(), 1);
    assert_eq!(wheel(&mut gate, GateInput::Advance, 1600.0, &mut ctx), GateEvent::Morph(2));
}

#[test]
fn retreat_at_first_text_holds() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    assert_eq!(wheel(&mut gate, GateInput::Retreat, 1000.0, &mut ctx), GateEvent::Held);
    assert_eq!(gate.index(), 0);
    assert_eq!(gate.state(), GateState::Locked);
}

#[test]
fn index_stays_within_bounds_for_any_sequence() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    let pattern = [1, 1, -1, 1, 1, 1, -1, -1, -1, -1, 1];
    for (i, dir) in pattern.iter().cycle().take(60).enumerate() {
        let input = if *dir > 0 { GateInput::Advance } else { GateInput::Retreat };
        wheel(&mut gate, input, (i + 1) as f64 * STEP_MS, &mut ctx);
        assert!(gate.index() <= gate.policy().max_index);
    }
}

#[test]
fn unlocked_gate_passes_input_through() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    for i in 1..=3 {
        wheel(&mut gate, GateInput::Advance, i as f64 * STEP_MS, &mut ctx);
    }
    ctx.section = 1;
    let ev = wheel(&mut gate, GateInput::Advance, 5000.0, &mut ctx);
    assert_eq!(ev, GateEvent::PassThrough);
    assert!(!ev.captures());
    // Away from the top, retreating scrolls the page rather than re-locking.
    assert_eq!(wheel(&mut gate, GateInput::Retreat, 6000.0, &mut ctx), GateEvent::PassThrough);
}

#[test]
fn retreat_at_top_relocks_the_intro() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    for i in 1..=3 {
        wheel(&mut gate, GateInput::Advance, i as f64 * STEP_MS, &mut ctx);
    }
    let ev = wheel(&mut gate, GateInput::Retreat, 4000.0, &mut ctx);
    assert_eq!(ev, GateEvent::Relocked(2));
    assert!(ev.captures());
    assert_eq!(gate.state(), GateState::Locked);
    assert!(!ctx.intro_complete);
    assert_eq!(wheel(&mut gate, GateInput::Retreat, 4600.0, &mut ctx), GateEvent::Morph(1));
}

#[test]
fn relock_can_be_disabled() {
    let policy = GatePolicy {
        relock_on_retreat: false,
        ..GatePolicy::default()
    };
    let mut gate = ScrollGate::new(policy);
    let mut ctx = ScrollContext::default();
    for i in 1..=3 {
        wheel(&mut gate, GateInput::Advance, i as f64 * STEP_MS, &mut ctx);
    }
    assert_eq!(wheel(&mut gate, GateInput::Retreat, 4000.0, &mut ctx), GateEvent::PassThrough);
    assert!(gate.is_unlocked());
}

#[test]
fn touch_uses_its_own_debounce() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    assert_eq!(
        gate.handle(GateInput::Advance, InputSource::Touch, 0.0, &mut ctx),
        GateEvent::Morph(1)
    );
    assert_eq!(
        gate.handle(GateInput::Advance, InputSource::Touch, 350.0, &mut ctx),
        GateEvent::Morph(2)
    );
}

#[test]
fn input_directions() {
    assert_eq!(GateInput::from_wheel(12.0), Some(GateInput::Advance));
    assert_eq!(GateInput::from_wheel(-3.0), Some(GateInput::Retreat));
    assert_eq!(GateInput::from_wheel(0.0), None);
    assert_eq!(GateInput::from_swipe(30.0, 50.0), None);
    assert_eq!(GateInput::from_swipe(80.0, 50.0), Some(GateInput::Advance));
    assert_eq!(GateInput::from_swipe(-80.0, 50.0), Some(GateInput::Retreat));
    assert_eq!(GateInput::from_key("ArrowDown"), Some(GateInput::Advance));
    assert_eq!(GateInput::from_key("PageUp"), Some(GateInput::Retreat));
    assert_eq!(GateInput::from_key("a"), None);
}

#[test]
fn each_forward_pass_releases_exactly_once() {
    let mut gate = ScrollGate::new(GatePolicy::default());
    let mut ctx = ScrollContext::default();
    let mut at = 0.0;
    let mut feed = |gate: &mut ScrollGate, ctx: &mut ScrollContext, inputs: &[GateInput]| {
        inputs
            .iter()
            .map(|input| {
                at += STEP_MS;
                wheel(gate, *input, at, ctx)
            })
            .collect::<Vec<_>>()
    };
    use GateInput::{Advance, Retreat};

    let first = feed(&mut gate, &mut ctx, &[Advance, Advance, Advance]);
    assert_eq!(first.iter().filter(|e| **e == GateEvent::Released).count(), 1);

    for _ in 0..3 {
        // Back to the top: relock, walk down to the first text, then forward again.
        let back = feed(&mut gate, &mut ctx, &[Retreat, Retreat, Retreat]);
        assert_eq!(back, vec![GateEvent::Relocked(2), GateEvent::Morph(1), GateEvent::Morph(0)]);
        assert!(!ctx.intro_complete);

        let pass = feed(&mut gate, &mut ctx, &[Advance, Advance, Advance, Advance]);
        assert_eq!(pass.iter().filter(|e| **e == GateEvent::Released).count(), 1);
        assert_eq!(pass[3], GateEvent::PassThrough);
        assert!(ctx.intro_complete);
        assert_eq!(gate.index(), 2);
    }
}
