use super::EventWiring;
use crate::dom;
use swarm_core::GateInput;
use web_sys as web;

pub(super) fn wire_keydown(window: &web::Window, w: EventWiring) {
    dom::add_active_listener(window, "keydown", move |ev: web::KeyboardEvent| {
        if ev.repeat() || ev.alt_key() || ev.ctrl_key() || ev.meta_key() {
            return;
        }
        let key = ev.key();
        if GateInput::from_key(&key).is_none() {
            return;
        }
        let now = dom::now_ms();
        let outcome = w.nav.borrow_mut().key(&key, dom::scroll_y(), now);
        if outcome.prevent_default {
            ev.prevent_default();
        }
        w.apply(outcome, now);
    });
}
