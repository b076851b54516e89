// Host-side tests for easing, tweens, tint parsing and the scene animator.

use swarm_core::constants::*;
use swarm_core::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn easings_pin_their_endpoints() {
    for e in [
        Easing::Linear,
        Easing::Power1InOut,
        Easing::Power2InOut,
        Easing::Power2Out,
        Easing::Power4In,
        Easing::Power4InOut,
    ] {
        assert_eq!(e.apply(0.0), 0.0, "{e:?}");
        assert_eq!(e.apply(1.0), 1.0, "{e:?}");
        assert!(close(e.apply(-1.0), 0.0) && close(e.apply(2.0), 1.0));
    }
    assert!(close(Easing::Power2InOut.apply(0.5), 0.5));
    assert!(Easing::Power4In.apply(0.5) < 0.05);
}

#[test]
fn tween_holds_before_start_and_snaps_after() {
    let t = Tween::new(0.0f32, 10.0, 1.0, 2.0, Easing::Linear);
    assert_eq!(t.sample(0.0), 0.0);
    assert!(close(t.sample(2.0), 5.0));
    assert_eq!(t.sample(5.0), 10.0);
    assert!(t.is_done(3.0));
    assert!(Tween::settled(4.0f32).is_done(f64::MIN));
}

#[test]
fn hex_colours_parse_both_lengths() {
    assert_eq!(parse_hex_color("#ff0000"), Some([1.0, 0.0, 0.0]));
    assert_eq!(parse_hex_color(" #0f0 "), Some([0.0, 1.0, 0.0]));
    let c = parse_hex_color("#808080").unwrap();
    assert!(close(c[0], 128.0 / 255.0));
}

#[test]
fn bad_colours_fall_back_to_white() {
    for bad in ["ff0000", "#ggg", "#+12345", "#12345", ""] {
        assert_eq!(parse_hex_color(bad), None, "{bad:?}");
        assert_eq!(tint_or_white(Some(bad)), WHITE);
    }
    assert_eq!(tint_or_white(None), WHITE);
}

#[test]
fn kick_tints_speeds_up_and_flips_sway() {
    let mut scene = SceneAnimator::new(DEFAULT_ANIMATION_SPEED, MORPH_ANIMATION_SPEED);
    let idle = scene.sample(0.0);
    assert_eq!(idle.tint, WHITE);
    assert!(close(idle.speed, DEFAULT_ANIMATION_SPEED / 100.0));
    assert!(close(idle.sway_deg, -CAMERA_SWAY_DEG));

    let red = [1.0, 0.0, 0.0];
    scene.kick(red, 10.0);
    let fast = scene.sample(10.1);
    assert!(close(fast.speed, MORPH_ANIMATION_SPEED / 100.0));
    assert!(!scene.is_settled(10.5));

    let done = scene.sample(11.0);
    assert_eq!(done.tint, red);
    assert!(close(done.sway_deg, CAMERA_SWAY_DEG));
    assert!(close(done.speed, DEFAULT_ANIMATION_SPEED / 100.0));
    assert!(scene.is_settled(11.0));

    scene.kick(WHITE, 12.0);
    assert!(close(scene.sample(13.0).sway_deg, -CAMERA_SWAY_DEG));
}

#[test]
fn camera_frames_text_plane() {
    let cam = Camera::for_viewport(Viewport::new(1920.0, 1080.0));
    assert!(close(cam.eye.z, 540.0));
    assert!(close(cam.fovy_radians, 45f32.to_radians()));

    let portrait = Camera::for_viewport(Viewport::new(400.0, 800.0));
    assert!(close(portrait.eye.z, 480.0));
    assert!(portrait.fovy_radians > cam.fovy_radians);

    let tiny = Camera::for_viewport(Viewport::new(100.0, 80.0));
    assert!(close(tiny.eye.z, 100.0));

    let swayed = cam.swayed(90.0);
    assert!(close(swayed.eye.x, 540.0));
    assert!(swayed.eye.z.abs() < 1e-2);
    let clip = cam.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
    assert!(clip.x.abs() < 1e-4 && clip.y.abs() < 1e-4);
}
