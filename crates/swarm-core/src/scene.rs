//! Scene-wide values that animate alongside each morph: tint, spin speed and
//! camera sway.

use crate::constants::*;
use crate::tween::{Easing, Tween};

pub type Rgb = [f32; 3];

pub const WHITE: Rgb = [1.0, 1.0, 1.0];

const TINT_SECONDS: f64 = 1.0;
const SPEED_UP_SECONDS: f64 = 0.1;
const SLOW_DOWN_DELAY: f64 = 0.2;
const SLOW_DOWN_SECONDS: f64 = 0.3;
const SWAY_SECONDS: f64 = 1.0;

/// Parse `#RRGGBB` or `#RGB` into linear 0..1 channels.
pub fn parse_hex_color(s: &str) -> Option<Rgb> {
    let hex = s.trim().strip_prefix('#')?;
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |v: u8| v as f32 / 255.0;
    match hex.len() {
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            Some([
                channel((v >> 16) as u8),
                channel((v >> 8) as u8),
                channel(v as u8),
            ])
        }
        3 => {
            let v = u16::from_str_radix(hex, 16).ok()?;
            let expand = |n: u16| channel(((n & 0xF) * 17) as u8);
            Some([expand(v >> 8), expand(v >> 4), expand(v)])
        }
        _ => None,
    }
}

/// Like [`parse_hex_color`], falling back to white with a warning.
pub fn tint_or_white(s: Option<&str>) -> Rgb {
    match s {
        None => WHITE,
        Some(raw) => parse_hex_color(raw).unwrap_or_else(|| {
            log::warn!("[scene] invalid tint {:?}, using white", raw);
            WHITE
        }),
    }
}

/// Snapshot of the animated scene values at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneFrame {
    pub tint: Rgb,
    /// Spin speed, already divided by 100.
    pub speed: f32,
    /// Camera sway angle in degrees.
    pub sway_deg: f32,
}

pub struct SceneAnimator {
    tint: Tween<Rgb>,
    speed_up: Tween<f32>,
    slow_down: Option<Tween<f32>>,
    sway: Tween<f32>,
    default_speed: f32,
    morph_speed: f32,
}

impl SceneAnimator {
    pub fn new(default_speed: f32, morph_speed: f32) -> Self {
        let idle = default_speed / 100.0;
        Self {
            tint: Tween::settled(WHITE),
            speed_up: Tween::settled(idle),
            slow_down: None,
            sway: Tween::settled(-CAMERA_SWAY_DEG),
            default_speed,
            morph_speed,
        }
    }

    /// Start the tweens that accompany a morph towards `tint`.
    pub fn kick(&mut self, tint: Rgb, now: f64) {
        let current = self.sample(now);

        self.tint = Tween::new(current.tint, tint, now, TINT_SECONDS, Easing::Linear);

        let fast = self.morph_speed / 100.0;
        self.speed_up = Tween::new(current.speed, fast, now, SPEED_UP_SECONDS, Easing::Power4In);
        self.slow_down = Some(Tween::new(
            fast,
            self.default_speed / 100.0,
            now + SPEED_UP_SECONDS + SLOW_DOWN_DELAY,
            SLOW_DOWN_SECONDS,
            Easing::Power2Out,
        ));

        // Flip between the two sway extremes, starting from wherever we are.
        let next = if self.sway.to >= CAMERA_SWAY_DEG {
            -CAMERA_SWAY_DEG
        } else {
            CAMERA_SWAY_DEG
        };
        self.sway = Tween::new(current.sway_deg, next, now, SWAY_SECONDS, Easing::Power1InOut);
    }

    pub fn sample(&self, now: f64) -> SceneFrame {
        let speed = match &self.slow_down {
            Some(slow) if now >= slow.start => slow.sample(now),
            _ => self.speed_up.sample(now),
        };
        SceneFrame {
            tint: self.tint.sample(now),
            speed,
            sway_deg: self.sway.sample(now),
        }
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.tint.is_done(now)
            && self.sway.is_done(now)
            && self.slow_down.map_or(self.speed_up.is_done(now), |s| s.is_done(now))
    }
}
