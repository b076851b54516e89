//! Section-by-section page scrolling once the intro has released the page.

use crate::constants::*;
use crate::gate::{GateInput, ScrollContext};
use crate::tween::{Easing, Tween};

/// Outcome of a navigation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollRequest {
    Started(usize),
    /// Already there, or clamped onto the current section.
    Unchanged,
    /// Refused: page is mid-scroll, input debounced, or the intro is not done.
    Blocked,
}

pub struct SectionScroller {
    offsets: Vec<f64>,
    scroll: Option<Tween<f64>>,
    settle_until: Option<f64>,
    last_wheel_ms: Option<f64>,
}

impl SectionScroller {
    /// `offsets` are the page offsets of each section's top edge.
    pub fn new(offsets: Vec<f64>) -> Self {
        Self {
            offsets,
            scroll: None,
            settle_until: None,
            last_wheel_ms: None,
        }
    }

    pub fn set_offsets(&mut self, offsets: Vec<f64>) {
        self.offsets = offsets;
    }

    #[inline]
    pub fn sections(&self) -> usize {
        self.offsets.len()
    }

    /// Clamp `current + step` into `[0, sections)`.
    pub fn neighbour(&self, current: usize, input: GateInput) -> usize {
        let last = self.sections().saturating_sub(1);
        match input {
            GateInput::Advance => (current + 1).min(last),
            GateInput::Retreat => current.saturating_sub(1),
        }
    }

    /// Wheel navigation: debounced, then one section in `input`'s direction.
    pub fn wheel(
        &mut self,
        input: GateInput,
        from_offset: f64,
        now_ms: f64,
        ctx: &mut ScrollContext,
    ) -> ScrollRequest {
        if self
            .last_wheel_ms
            .is_some_and(|t| now_ms - t < SECTION_WHEEL_DEBOUNCE_MS)
        {
            return ScrollRequest::Blocked;
        }
        if ctx.page_scrolling {
            return ScrollRequest::Blocked;
        }
        self.last_wheel_ms = Some(now_ms);
        let target = self.neighbour(ctx.section, input);
        self.goto(target, from_offset, now_ms, ctx)
    }

    /// Keyboard or swipe navigation, one section in `input`'s direction.
    pub fn step(
        &mut self,
        input: GateInput,
        from_offset: f64,
        now_ms: f64,
        ctx: &mut ScrollContext,
    ) -> ScrollRequest {
        let target = self.neighbour(ctx.section, input);
        self.goto(target, from_offset, now_ms, ctx)
    }

    /// Start a smooth scroll to section `index`.
    pub fn goto(
        &mut self,
        index: usize,
        from_offset: f64,
        now_ms: f64,
        ctx: &mut ScrollContext,
    ) -> ScrollRequest {
        if ctx.page_scrolling {
            return ScrollRequest::Blocked;
        }
        if index > 0 && !ctx.intro_complete {
            return ScrollRequest::Blocked;
        }
        let Some(&target) = self.offsets.get(index) else {
            return ScrollRequest::Blocked;
        };
        if index == ctx.section {
            return ScrollRequest::Unchanged;
        }
        ctx.section = index;
        ctx.page_scrolling = true;
        self.settle_until = None;
        self.scroll = Some(Tween::new(
            from_offset,
            target,
            now_ms,
            SECTION_SCROLL_MS,
            Easing::Power4InOut,
        ));
        log::info!("[sections] -> {}", index);
        ScrollRequest::Started(index)
    }

    /// Index of the section whose top edge is closest to `offset`.
    pub fn nearest(&self, offset: f64) -> Option<usize> {
        self.offsets
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| (*a - offset).abs().total_cmp(&(*b - offset).abs()))
            .map(|(i, _)| i)
    }

    /// Record a section that came into view by other means (native scroll,
    /// anchor links). Ignored past the first section until the intro is done.
    pub fn observe_visible(&self, index: usize, ctx: &mut ScrollContext) {
        if index < self.sections() && (index == 0 || ctx.intro_complete) {
            ctx.section = index;
        }
    }

    /// Offset to scroll the page to this frame, if a scroll is running.
    pub fn tick(&mut self, now_ms: f64, ctx: &mut ScrollContext) -> Option<f64> {
        if let Some(until) = self.settle_until {
            if now_ms >= until {
                self.settle_until = None;
                ctx.page_scrolling = false;
            }
        }
        let tween = self.scroll?;
        let offset = tween.sample(now_ms);
        if tween.is_done(now_ms) {
            self.scroll = None;
            self.settle_until = Some(now_ms + SECTION_SETTLE_MS);
        }
        Some(offset)
    }

    /// Swipe → direction when fast and long enough (`distance = start_y - end_y`).
    pub fn swipe_input(distance: f32, elapsed_ms: f32) -> Option<GateInput> {
        if elapsed_ms <= 0.0 {
            return None;
        }
        let velocity = (distance / elapsed_ms).abs();
        if velocity > SWIPE_MIN_VELOCITY && distance.abs() > SWIPE_MIN_DISTANCE_PX {
            Some(if distance > 0.0 {
                GateInput::Advance
            } else {
                GateInput::Retreat
            })
        } else {
            None
        }
    }
}
