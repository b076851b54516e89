// Host-side tests for the particle buffer and morph animator.

use glam::Vec3;
use swarm_core::*;

fn line(n: usize, z: f32) -> Vec<Vec3> {
    (0..n).map(|i| Vec3::new(i as f32 * 10.0, -5.0, z)).collect()
}

fn settle_time(anim: &MorphAnimator, start: f64) -> f64 {
    start + anim.timing().max_span() + 0.01
}

#[test]
fn particles_land_exactly_on_targets() {
    let mut buf = ParticleBuffer::new(8);
    let mut anim = MorphAnimator::new(8, 1);
    let target = line(5, 2.0);
    assert_eq!(anim.morph_to(&buf, &target, 10.0, None).unwrap(), 5);
    assert!(anim.is_animating());

    anim.tick(&mut buf, settle_time(&anim, 10.0));
    assert!(!anim.is_animating());
    for (i, p) in target.iter().enumerate() {
        assert_eq!(buf.position(i), *p);
        assert_eq!(buf.scale(i), 1.0);
    }
    for i in 5..8 {
        assert_eq!(buf.scale(i), 0.0);
    }
    assert_eq!(buf.visible_count(), 5);
}

#[test]
fn nothing_moves_at_the_start_instant() {
    let mut buf = ParticleBuffer::new(4);
    let mut anim = MorphAnimator::new(4, 2);
    anim.morph_to(&buf, &line(4, 0.0), 1.0, None).unwrap();
    anim.tick(&mut buf, 1.0);
    assert!(buf.positions().iter().all(|p| *p == Vec3::ZERO));
}

#[test]
fn paths_stay_finite_midway() {
    let mut buf = ParticleBuffer::new(64);
    let mut anim = MorphAnimator::new(64, 3);
    anim.morph_to(&buf, &line(64, 0.0), 0.0, None).unwrap();
    for step in 1..20 {
        anim.tick(&mut buf, step as f64 * 0.1);
        assert!(buf.positions().iter().all(|p| p.is_finite()));
        assert!(buf.scales().iter().all(|s| (0.0..=1.0).contains(s)));
    }
}

#[test]
fn oversized_target_is_rejected_without_side_effects() {
    let buf = ParticleBuffer::new(3);
    let mut anim = MorphAnimator::new(3, 4);
    let err = anim.morph_to(&buf, &line(4, 0.0), 0.0, None).unwrap_err();
    assert!(matches!(err, SwarmError::TargetTooLarge { points: 4, capacity: 3 }));
    assert_eq!(anim.active_tracks(), 0);
}

#[test]
fn non_finite_target_is_rejected() {
    let buf = ParticleBuffer::new(3);
    let mut anim = MorphAnimator::new(3, 5);
    let target = vec![Vec3::ZERO, Vec3::new(f32::NAN, 0.0, 0.0)];
    let err = anim.morph_to(&buf, &target, 0.0, None).unwrap_err();
    assert!(matches!(err, SwarmError::NonFiniteTarget { index: 1 }));
    assert!(!anim.is_animating());
}

#[test]
fn empty_target_collapses_every_particle() {
    let mut buf = ParticleBuffer::new(6);
    let mut anim = MorphAnimator::new(6, 6);
    anim.morph_to(&buf, &line(6, 0.0), 0.0, None).unwrap();
    anim.finish(&mut buf);
    assert_eq!(buf.visible_count(), 6);

    anim.morph_to(&buf, &[], 5.0, None).unwrap();
    anim.finish(&mut buf);
    assert_eq!(buf.visible_count(), 0);
    // Collapsed particles stay where they were.
    assert_eq!(buf.position(2), line(6, 0.0)[2]);
}

#[test]
fn retarget_midflight_ends_on_latest_target() {
    let mut buf = ParticleBuffer::new(10);
    let mut anim = MorphAnimator::new(10, 7);
    anim.morph_to(&buf, &line(10, 0.0), 0.0, None).unwrap();
    anim.tick(&mut buf, 0.7);
    let second = line(10, 50.0);
    anim.morph_to(&buf, &second, 0.7, None).unwrap();
    anim.tick(&mut buf, settle_time(&anim, 0.7));
    assert_eq!(buf.positions(), second.as_slice());
}

#[test]
fn seeded_morphs_are_reproducible() {
    let run = || {
        let mut buf = ParticleBuffer::new(16);
        let mut anim = MorphAnimator::new(16, 0);
        anim.morph_to(&buf, &line(16, 0.0), 0.0, Some(99)).unwrap();
        anim.tick(&mut buf, 0.8);
        buf.positions().to_vec()
    };
    assert_eq!(run(), run());
}

#[test]
fn cubic_bezier_hits_its_endpoints() {
    let (a, b, c, d) = (Vec3::ZERO, Vec3::X, Vec3::Y, Vec3::ONE);
    assert_eq!(cubic_bezier(a, b, c, d, 0.0), a);
    assert_eq!(cubic_bezier(a, b, c, d, 1.0), d);
}

#[test]
fn rebuilt_buffer_keeps_prefix_and_is_dirty() {
    let mut buf = ParticleBuffer::new(3);
    buf.set(0, Vec3::ONE, 1.0);
    buf.clear_dirty();
    let grown = buf.rebuilt(5);
    assert_eq!(grown.len(), 5);
    assert_eq!(grown.position(0), Vec3::ONE);
    assert_eq!(grown.scale(4), 0.0);
    assert!(grown.is_dirty());
    let shrunk = buf.rebuilt(1);
    assert_eq!(shrunk.positions(), &[Vec3::ONE]);
}

#[test]
fn pack_into_reuses_allocation() {
    let mut buf = ParticleBuffer::new(2);
    buf.set(1, Vec3::new(1.0, 2.0, 3.0), 0.5);
    let mut out = Vec::new();
    buf.pack_into(&mut out);
    buf.pack_into(&mut out);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].pos_scale, [1.0, 2.0, 3.0, 0.5]);
}

#[test]
fn straight_linear_timing_moves_at_constant_speed() {
    let mut buf = ParticleBuffer::new(4);
    let mut anim = MorphAnimator::new(4, 8).with_timing(MorphTiming {
        delay_max: 0.0,
        duration_min: 1.0,
        duration_jitter: 0.0,
        lateral_jitter: 0.0,
        depth_swing: 0.0,
        easing: Easing::Linear,
    });
    let target = line(4, 0.0);
    anim.morph_to(&buf, &target, 0.0, None).unwrap();
    anim.tick(&mut buf, 0.5);
    for (i, p) in target.iter().enumerate() {
        assert!((buf.position(i) - *p * 0.5).length() < 1e-4);
        assert!((buf.scale(i) - 0.5).abs() < 1e-6);
    }
}
