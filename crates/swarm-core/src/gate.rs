//! Scroll gate: captures scroll input for the intro, then releases the page.
//!
//! While `Locked` each accepted input steps the intro index within
//! `[0, max_index]`. Stepping forward from `max_index` releases the page to
//! the section scroller; stepping back while the page sits at its first
//! section re-locks it.

use crate::constants::*;

/// Scroll state shared between the gate and the section scroller.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrollContext {
    /// The intro has been scrolled through; page navigation is allowed.
    pub intro_complete: bool,
    /// Page section currently shown.
    pub section: usize,
    /// A smooth page scroll is in progress.
    pub page_scrolling: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateInput {
    Advance,
    Retreat,
}

impl GateInput {
    /// Direction for a wheel delta; zero deltas carry no direction.
    pub fn from_wheel(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(GateInput::Advance)
        } else if delta_y < 0.0 {
            Some(GateInput::Retreat)
        } else {
            None
        }
    }

    /// Direction for a finished swipe (`start_y - end_y`), if it is long enough.
    pub fn from_swipe(delta_y: f32, min_distance: f32) -> Option<Self> {
        if delta_y.abs() <= min_distance {
            None
        } else if delta_y > 0.0 {
            Some(GateInput::Advance)
        } else {
            Some(GateInput::Retreat)
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" | "PageDown" | " " => Some(GateInput::Advance),
            "ArrowUp" | "PageUp" => Some(GateInput::Retreat),
            _ => None,
        }
    }
}

/// Where an input came from; each source has its own debounce window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputSource {
    Wheel,
    Touch,
    Key,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// What the caller should do after feeding an input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateEvent {
    /// Input was swallowed (debounced or at a bound); keep the page still.
    Held,
    /// Intro index changed; morph to this text.
    Morph(usize),
    /// Intro finished; the page may scroll from now on.
    Released,
    /// Page returned to the intro; morph back to this text.
    Relocked(usize),
    /// Gate is open; the input belongs to the page scroller.
    PassThrough,
}

impl GateEvent {
    /// Whether the browser's default scroll should be suppressed.
    pub fn captures(&self) -> bool {
        !matches!(self, GateEvent::PassThrough | GateEvent::Released)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct GatePolicy {
    pub max_index: usize,
    pub wheel_debounce_ms: f64,
    pub touch_min_distance: f32,
    pub touch_debounce_ms: f64,
    pub relock_on_retreat: bool,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            max_index: GATE_MAX_INDEX,
            wheel_debounce_ms: WHEEL_DEBOUNCE_MS,
            touch_min_distance: TOUCH_MIN_DISTANCE_PX,
            touch_debounce_ms: TOUCH_DEBOUNCE_MS,
            relock_on_retreat: true,
        }
    }
}

impl GatePolicy {
    fn debounce_for(&self, source: InputSource) -> f64 {
        match source {
            InputSource::Wheel | InputSource::Key => self.wheel_debounce_ms,
            InputSource::Touch => self.touch_debounce_ms,
        }
    }
}

pub struct ScrollGate {
    policy: GatePolicy,
    state: GateState,
    index: usize,
    last_accepted_ms: Option<f64>,
}

impl ScrollGate {
    pub fn new(policy: GatePolicy) -> Self {
        Self {
            policy,
            state: GateState::Locked,
            index: 0,
            last_accepted_ms: None,
        }
    }

    #[inline]
    pub fn state(&self) -> GateState {
        self.state
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn is_unlocked(&self) -> bool {
        self.state == GateState::Unlocked
    }

    #[inline]
    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// Feed one directional input stamped with `now_ms`.
    pub fn handle(
        &mut self,
        input: GateInput,
        source: InputSource,
        now_ms: f64,
        ctx: &mut ScrollContext,
    ) -> GateEvent {
        match self.state {
            GateState::Locked => self.handle_locked(input, source, now_ms, ctx),
            GateState::Unlocked => self.handle_unlocked(input, now_ms, ctx),
        }
    }

    fn debounced(&self, source: InputSource, now_ms: f64) -> bool {
        self.last_accepted_ms
            .is_some_and(|t| now_ms - t < self.policy.debounce_for(source))
    }

    fn handle_locked(
        &mut self,
        input: GateInput,
        source: InputSource,
        now_ms: f64,
        ctx: &mut ScrollContext,
    ) -> GateEvent {
        if self.debounced(source, now_ms) {
            return GateEvent::Held;
        }
        match input {
            GateInput::Advance if self.index < self.policy.max_index => {
                self.index += 1;
                self.last_accepted_ms = Some(now_ms);
                log::info!("[gate] advance -> {}", self.index);
                GateEvent::Morph(self.index)
            }
            GateInput::Advance => {
                self.state = GateState::Unlocked;
                self.last_accepted_ms = Some(now_ms);
                ctx.intro_complete = true;
                log::info!("[gate] released at {}", self.index);
                GateEvent::Released
            }
            GateInput::Retreat if self.index > 0 => {
                self.index -= 1;
                self.last_accepted_ms = Some(now_ms);
                log::info!("[gate] retreat -> {}", self.index);
                GateEvent::Morph(self.index)
            }
            GateInput::Retreat => GateEvent::Held,
        }
    }

    fn handle_unlocked(
        &mut self,
        input: GateInput,
        now_ms: f64,
        ctx: &mut ScrollContext,
    ) -> GateEvent {
        let at_top = ctx.section == 0 && !ctx.page_scrolling;
        if input == GateInput::Retreat && self.policy.relock_on_retreat && at_top {
            self.state = GateState::Locked;
            self.last_accepted_ms = Some(now_ms);
            ctx.intro_complete = false;
            log::info!("[gate] relocked at {}", self.index);
            return GateEvent::Relocked(self.index);
        }
        GateEvent::PassThrough
    }
}
