use crate::dom;
use crate::input::{NavOutcome, Navigator, TouchTracker};
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::Swarm;
use web_sys as web;

mod keyboard;
mod resize;
mod touch;
mod wheel;

/// Shared handles cloned into every listener.
#[derive(Clone)]
pub struct EventWiring {
    pub swarm: Rc<RefCell<Swarm>>,
    pub nav: Rc<RefCell<Navigator>>,
    pub touch: Rc<RefCell<TouchTracker>>,
    pub triggers: Rc<Vec<web::Element>>,
    pub canvas: web::HtmlCanvasElement,
}

impl EventWiring {
    /// Morph and highlight when the navigator asks for a new text.
    fn apply(&self, outcome: NavOutcome, now_ms: f64) {
        if let Some(index) = outcome.show {
            if self.swarm.borrow_mut().show(index, now_ms) {
                dom::set_active_trigger(&self.triggers, index);
            }
        }
    }
}

pub fn wire_all(wiring: EventWiring) {
    let Some(window) = web::window() else {
        log::error!("[events] no window");
        return;
    };
    wheel::wire_wheel(&window, wiring.clone());
    touch::wire_touch(&window, wiring.clone());
    keyboard::wire_keydown(&window, wiring.clone());
    resize::wire_resize(&window, wiring);
}
