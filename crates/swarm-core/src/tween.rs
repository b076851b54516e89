//! Easing curves and time-sampled tweens.
//!
//! Tweens are plain values sampled with an explicit clock, so callers decide
//! when time advances (once per animation frame) and tests can step it.

/// Easing curves, named after the GSAP eases they reproduce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic in-out (`power1.inOut`).
    Power1InOut,
    /// Cubic in-out (`power2.inOut`).
    Power2InOut,
    /// Cubic out (`power2.out`).
    Power2Out,
    /// Quintic in (`power4.in`).
    Power4In,
    /// Quintic in-out (`power4.inOut`, a.k.a. easeInOutQuint).
    Power4InOut,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress. Endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power1InOut => in_out(t, 2),
            Easing::Power2InOut => in_out(t, 3),
            Easing::Power2Out => 1.0 - (1.0 - t).powi(3),
            Easing::Power4In => t.powi(5),
            Easing::Power4InOut => in_out(t, 5),
        }
    }
}

#[inline]
fn in_out(t: f32, power: i32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powi(power)
    } else {
        1.0 - 0.5 * (2.0 - 2.0 * t).powi(power)
    }
}

/// Values that can be linearly interpolated.
pub trait Lerp: Copy {
    fn lerp(self, to: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t
    }
}

impl Lerp for f64 {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        self + (to - self) * t as f64
    }
}

impl Lerp for [f32; 3] {
    #[inline]
    fn lerp(self, to: Self, t: f32) -> Self {
        [
            self[0].lerp(to[0], t),
            self[1].lerp(to[1], t),
            self[2].lerp(to[2], t),
        ]
    }
}

/// A single value moving from `from` to `to` between two instants.
#[derive(Clone, Copy, Debug)]
pub struct Tween<T: Lerp> {
    pub from: T,
    pub to: T,
    pub start: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl<T: Lerp> Tween<T> {
    /// A tween that has already finished at `value`.
    pub fn settled(value: T) -> Self {
        Self {
            from: value,
            to: value,
            start: f64::NEG_INFINITY,
            duration: 0.0,
            easing: Easing::Linear,
        }
    }

    pub fn new(from: T, to: T, start: f64, duration: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Linear progress at `now`, in `[0, 1]`.
    pub fn progress(&self, now: f64) -> f32 {
        if now <= self.start {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.start) / self.duration).clamp(0.0, 1.0) as f32
    }

    pub fn sample(&self, now: f64) -> T {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.easing.apply(p))
    }

    pub fn is_done(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
