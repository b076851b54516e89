//! Staggered, curved particle morphs sampled once per frame.
//!
//! A morph stores one [`Track`] per particle: start and target, two Bezier
//! control points, and a start time/duration. [`MorphAnimator::tick`]
//! evaluates every live track for the current time and writes the result
//! into the [`ParticleBuffer`]. Starting a new morph replaces the tracks,
//! picking up each particle from wherever it currently is.

use crate::buffer::ParticleBuffer;
use crate::constants::*;
use crate::error::{Result, SwarmError};
use crate::tween::Easing;
use glam::Vec3;
use rand::prelude::*;

/// Randomization ranges and path shaping for a morph.
#[derive(Clone, Copy, Debug)]
pub struct MorphTiming {
    pub delay_max: f32,
    pub duration_min: f32,
    pub duration_jitter: f32,
    pub lateral_jitter: f32,
    pub depth_swing: f32,
    pub easing: Easing,
}

impl Default for MorphTiming {
    fn default() -> Self {
        Self {
            delay_max: MORPH_DELAY_MAX,
            duration_min: MORPH_DURATION_MIN,
            duration_jitter: MORPH_DURATION_JITTER,
            lateral_jitter: MORPH_LATERAL_JITTER,
            depth_swing: MORPH_DEPTH_SWING,
            easing: Easing::Power2InOut,
        }
    }
}

impl MorphTiming {
    /// Upper bound on delay + duration, i.e. when every track has settled.
    pub fn max_span(&self) -> f64 {
        (self.delay_max + self.duration_min + self.duration_jitter) as f64
    }
}

#[derive(Clone, Copy, Debug)]
struct Track {
    start: Vec3,
    ctrl1: Vec3,
    ctrl2: Vec3,
    target: Vec3,
    start_scale: f32,
    target_scale: f32,
    start_time: f64,
    duration: f64,
}

impl Track {
    #[inline]
    fn point(&self, t: f32) -> Vec3 {
        cubic_bezier(self.start, self.ctrl1, self.ctrl2, self.target, t)
    }
}

/// Cubic Bezier through `p0` and `p3`; C¹ continuous along its length.
#[inline]
pub fn cubic_bezier(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

pub struct MorphAnimator {
    tracks: Vec<Option<Track>>,
    timing: MorphTiming,
    rng: StdRng,
}

impl MorphAnimator {
    pub fn new(capacity: usize, seed: u64) -> Self {
        Self {
            tracks: vec![None; capacity],
            timing: MorphTiming::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn with_timing(mut self, timing: MorphTiming) -> Self {
        self.timing = timing;
        self
    }

    #[inline]
    pub fn timing(&self) -> &MorphTiming {
        &self.timing
    }

    /// Drop all tracks and match a rebuilt buffer's length.
    pub fn reset(&mut self, capacity: usize) {
        self.tracks.clear();
        self.tracks.resize(capacity, None);
    }

    /// Number of particles still moving (including those waiting on their delay).
    pub fn active_tracks(&self) -> usize {
        self.tracks.iter().filter(|t| t.is_some()).count()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.tracks.iter().any(Option::is_some)
    }

    /// Start a morph from the buffer's current state towards `target`.
    ///
    /// Particles past the end of `target` shrink to scale 0 in place.
    /// Returns the number of particles that end up visible. A target with
    /// more points than the buffer, or with non-finite coordinates, is
    /// rejected without touching any track.
    pub fn morph_to(
        &mut self,
        buffer: &ParticleBuffer,
        target: &[Vec3],
        now: f64,
        seed: Option<u64>,
    ) -> Result<usize> {
        validate_target(target, buffer.len())?;
        if let Some(seed) = seed {
            self.rng = StdRng::seed_from_u64(seed);
        }
        if self.tracks.len() != buffer.len() {
            self.reset(buffer.len());
        }

        let timing = self.timing;
        for i in 0..buffer.len() {
            let start = buffer.position(i);
            let start_scale = buffer.scale(i);
            let (goal, goal_scale) = match target.get(i) {
                Some(p) => (*p, 1.0),
                None => (start, 0.0),
            };

            let delta = goal - start;
            let distance = delta.length();
            let rng = &mut self.rng;
            let delay = rng.gen::<f32>() * timing.delay_max;
            let duration = timing.duration_min + rng.gen::<f32>() * timing.duration_jitter;

            let lateral = distance * timing.lateral_jitter;
            let swing = distance * timing.depth_swing;
            let ctrl1 = start
                + delta * 0.25
                + Vec3::new(
                    (rng.gen::<f32>() - 0.5) * lateral,
                    (rng.gen::<f32>() - 0.5) * lateral,
                    rng.gen::<f32>() * swing,
                );
            let ctrl2 = start
                + delta * 0.75
                + Vec3::new(
                    (rng.gen::<f32>() - 0.5) * lateral,
                    (rng.gen::<f32>() - 0.5) * lateral,
                    -rng.gen::<f32>() * swing,
                );

            self.tracks[i] = Some(Track {
                start,
                ctrl1,
                ctrl2,
                target: goal,
                start_scale,
                target_scale: goal_scale,
                start_time: now + delay as f64,
                duration: duration as f64,
            });
        }

        log::debug!(
            "[morph] started: {} targets over {} particles",
            target.len(),
            buffer.len()
        );
        Ok(target.len())
    }

    /// Advance all tracks to `now`. Returns whether the buffer changed.
    pub fn tick(&mut self, buffer: &mut ParticleBuffer, now: f64) -> bool {
        let easing = self.timing.easing;
        let mut changed = false;
        for (i, slot) in self.tracks.iter_mut().enumerate().take(buffer.len()) {
            let Some(track) = slot else {
                continue;
            };
            if now < track.start_time {
                continue;
            }
            let linear = if track.duration > 0.0 {
                ((now - track.start_time) / track.duration) as f32
            } else {
                1.0
            };
            if linear >= 1.0 {
                buffer.set(i, track.target, track.target_scale);
                *slot = None;
            } else {
                let t = easing.apply(linear);
                let scale = track.start_scale + (track.target_scale - track.start_scale) * t;
                buffer.set(i, track.point(t), scale);
            }
            changed = true;
        }
        changed
    }

    /// Jump every live track to its end state.
    pub fn finish(&mut self, buffer: &mut ParticleBuffer) {
        for (i, slot) in self.tracks.iter_mut().enumerate().take(buffer.len()) {
            if let Some(track) = slot.take() {
                buffer.set(i, track.target, track.target_scale);
            }
        }
    }
}

fn validate_target(target: &[Vec3], capacity: usize) -> Result<()> {
    if target.len() > capacity {
        return Err(SwarmError::TargetTooLarge {
            points: target.len(),
            capacity,
        });
    }
    if let Some(index) = target.iter().position(|p| !p.is_finite()) {
        return Err(SwarmError::NonFiniteTarget { index });
    }
    Ok(())
}
