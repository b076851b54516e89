//! Viewport-derived configuration.
//!
//! Everything the pipeline sizes itself by (particle budget, sprite size,
//! text size) is derived from the viewport here, so a resize only has to
//! rebuild a [`ResponsiveConfig`] and hand it to the consumers.

use crate::constants::*;

/// CSS-pixel size of the browser viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Same viewport with both axes clamped to at least one pixel.
    #[inline]
    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(1.0),
            height: self.height.max(1.0),
        }
    }

    #[inline]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    #[inline]
    pub fn min_side(&self) -> f32 {
        self.width.min(self.height)
    }

    #[inline]
    pub fn breakpoint(&self) -> Breakpoint {
        if self.width < MOBILE_BREAKPOINT_PX {
            Breakpoint::Mobile
        } else {
            Breakpoint::Desktop
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Breakpoint {
    Mobile,
    Desktop,
}

/// Parameters for turning a text string into a glyph outline.
///
/// `depth` is kept for parity with extruded text; sampling only looks at the
/// front face so anything other than zero just moves the face along Z.
#[derive(Clone, Debug, PartialEq)]
pub struct TextConfig {
    pub base_size: f32,
    pub max_width: f32,
    pub max_height: f32,
    pub depth: f32,
    pub curve_segments: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomConfig {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            strength: BLOOM_STRENGTH,
            radius: BLOOM_RADIUS,
            threshold: BLOOM_THRESHOLD,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResponsiveConfig {
    pub viewport: Viewport,
    pub text: TextConfig,
    pub particle_count: usize,
    pub particle_size: f32,
    pub particle_spacing: f32,
    pub default_animation_speed: f32,
    pub morph_animation_speed: f32,
    pub bloom: BloomConfig,
}

impl ResponsiveConfig {
    pub fn for_viewport(viewport: Viewport) -> Self {
        let vp = viewport.clamped();
        let (w, h) = (vp.width, vp.height);
        let compact = w <= COMPACT_WIDTH_PX;

        let base = (w / REFERENCE_WIDTH).min(h / REFERENCE_HEIGHT);
        let scale_factor = if compact {
            base.powf(0.4).clamp(0.4, 1.4)
        } else {
            base.powf(0.45).clamp(0.3, 1.0)
        };

        let text = TextConfig {
            base_size: (w * TEXT_WIDTH_FRACTION).min(h * TEXT_HEIGHT_FRACTION) * scale_factor,
            max_width: w * TEXT_MAX_WIDTH_FRACTION,
            max_height: h * TEXT_MAX_HEIGHT_FRACTION,
            depth: 0.0,
            curve_segments: TEXT_CURVE_SEGMENTS,
        };

        let particle_scale = base.clamp(PARTICLE_SCALE_MIN, 1.0);
        let particle_size = vp.min_side()
            * if compact {
                PARTICLE_SIZE_COMPACT
            } else {
                PARTICLE_SIZE_WIDE
            };

        Self {
            viewport: vp,
            text,
            particle_count: (BASE_PARTICLE_COUNT * particle_scale).floor() as usize,
            particle_size,
            particle_spacing: vp.min_side() * PARTICLE_SPACING_FRACTION,
            default_animation_speed: DEFAULT_ANIMATION_SPEED,
            morph_animation_speed: MORPH_ANIMATION_SPEED,
            bloom: BloomConfig::default(),
        }
    }
}

/// Whether moving from `from` to `to` warrants regenerating the text clouds.
pub fn needs_regeneration(from: Viewport, to: Viewport) -> bool {
    let crossing = from.breakpoint() != to.breakpoint();
    let significant = (to.width - from.width).abs() > RESIZE_SIGNIFICANT_PX
        || (to.height - from.height).abs() > RESIZE_SIGNIFICANT_PX;
    crossing || significant
}

/// Debounces resize events and decides when the point clouds must be rebuilt.
///
/// Feed every resize to [`observe`](Self::observe) and call
/// [`poll`](Self::poll) once per frame. A pending size settles after
/// [`RESIZE_DEBOUNCE_MS`] without further events; it then becomes the new
/// baseline whether or not it was significant.
#[derive(Clone, Debug)]
pub struct ResizeTracker {
    applied: Viewport,
    pending: Option<(Viewport, f64)>,
    debounce_ms: f64,
}

impl ResizeTracker {
    pub fn new(initial: Viewport) -> Self {
        Self {
            applied: initial,
            pending: None,
            debounce_ms: RESIZE_DEBOUNCE_MS,
        }
    }

    pub fn applied(&self) -> Viewport {
        self.applied
    }

    pub fn observe(&mut self, viewport: Viewport, now_ms: f64) {
        self.pending = Some((viewport, now_ms));
    }

    /// Returns the settled viewport when it requires regeneration.
    pub fn poll(&mut self, now_ms: f64) -> Option<Viewport> {
        let (vp, at) = self.pending?;
        if now_ms - at < self.debounce_ms {
            return None;
        }
        self.pending = None;
        let previous = self.applied;
        self.applied = vp;
        if needs_regeneration(previous, vp) {
            log::info!(
                "[resize] {:.0}x{:.0} -> {:.0}x{:.0}, regenerating",
                previous.width,
                previous.height,
                vp.width,
                vp.height
            );
            Some(vp)
        } else {
            None
        }
    }
}
