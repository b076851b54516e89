use swarm_core::{
    GateEvent, GateInput, GatePolicy, InputSource, ScrollContext, ScrollGate, ScrollRequest,
    SectionScroller,
};

/// A completed vertical swipe. `distance = start_y - end_y`, so positive
/// means the finger moved up (advance).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    pub distance: f32,
    pub elapsed_ms: f32,
}

#[derive(Default, Clone, Copy, Debug)]
pub struct TouchTracker {
    start: Option<(f32, f64)>,
}

impl TouchTracker {
    #[inline]
    pub fn begin(&mut self, y: f32, now_ms: f64) {
        self.start = Some((y, now_ms));
    }

    /// Close the gesture. `None` when no touch was started.
    pub fn end(&mut self, y: f32, now_ms: f64) -> Option<Swipe> {
        let (y0, t0) = self.start.take()?;
        Some(Swipe {
            distance: y0 - y,
            elapsed_ms: (now_ms - t0) as f32,
        })
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }
}

/// What the page should do after an input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavOutcome {
    /// Morph to this text and mark its trigger active.
    pub show: Option<usize>,
    /// Suppress the browser's own scroll for this event.
    pub prevent_default: bool,
}

/// Routes wheel, swipe and key input through the intro gate and, once it
/// releases, on to the section scroller.
pub struct Navigator {
    pub gate: ScrollGate,
    pub sections: SectionScroller,
    pub ctx: ScrollContext,
}

impl Navigator {
    pub fn new(policy: GatePolicy, section_offsets: Vec<f64>) -> Self {
        Self {
            gate: ScrollGate::new(policy),
            sections: SectionScroller::new(section_offsets),
            ctx: ScrollContext::default(),
        }
    }

    pub fn wheel(&mut self, delta_y: f64, scroll_y: f64, now_ms: f64) -> NavOutcome {
        let Some(input) = GateInput::from_wheel(delta_y) else {
            return NavOutcome::default();
        };
        let event = self
            .gate
            .handle(input, InputSource::Wheel, now_ms, &mut self.ctx);
        self.route(event, |nav| nav.sections.wheel(input, scroll_y, now_ms, &mut nav.ctx))
    }

    pub fn swipe(&mut self, swipe: Swipe, scroll_y: f64, now_ms: f64) -> NavOutcome {
        if !self.gate.is_unlocked() {
            let min = self.gate.policy().touch_min_distance;
            let Some(input) = GateInput::from_swipe(swipe.distance, min) else {
                return NavOutcome::default();
            };
            let event = self
                .gate
                .handle(input, InputSource::Touch, now_ms, &mut self.ctx);
            return self.route(event, |_| ScrollRequest::Unchanged);
        }
        // A retreat swipe at the top of the page may re-lock the intro.
        if let Some(input) = SectionScroller::swipe_input(swipe.distance, swipe.elapsed_ms) {
            let event = self
                .gate
                .handle(input, InputSource::Touch, now_ms, &mut self.ctx);
            return self.route(event, |nav| nav.sections.step(input, scroll_y, now_ms, &mut nav.ctx));
        }
        NavOutcome::default()
    }

    pub fn key(&mut self, key: &str, scroll_y: f64, now_ms: f64) -> NavOutcome {
        let Some(input) = GateInput::from_key(key) else {
            return NavOutcome::default();
        };
        let event = self.gate.handle(input, InputSource::Key, now_ms, &mut self.ctx);
        let mut out = self.route(event, |nav| nav.sections.step(input, scroll_y, now_ms, &mut nav.ctx));
        // Navigation keys never fall through to the native scroll.
        out.prevent_default = true;
        out
    }

    /// Follow scrolling the navigator did not start (scrollbar, anchors).
    pub fn observe_scroll(&mut self, scroll_y: f64) {
        if self.ctx.page_scrolling {
            return;
        }
        if let Some(index) = self.sections.nearest(scroll_y) {
            self.sections.observe_visible(index, &mut self.ctx);
        }
    }

    /// Page offset to apply this frame, if a section scroll is running.
    #[inline]
    pub fn tick(&mut self, now_ms: f64) -> Option<f64> {
        self.sections.tick(now_ms, &mut self.ctx)
    }

    fn route(
        &mut self,
        event: GateEvent,
        scroll: impl FnOnce(&mut Self) -> ScrollRequest,
    ) -> NavOutcome {
        let show = match event {
            GateEvent::Morph(i) | GateEvent::Relocked(i) => Some(i),
            _ => None,
        };
        let prevent_default = match event {
            GateEvent::PassThrough => !matches!(scroll(self), ScrollRequest::Unchanged),
            _ => event.captures(),
        };
        NavOutcome {
            show,
            prevent_default,
        }
    }
}
