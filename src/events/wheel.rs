use super::EventWiring;
use crate::dom;
use web_sys as web;

pub(super) fn wire_wheel(window: &web::Window, w: EventWiring) {
    dom::add_active_listener(window, "wheel", move |ev: web::WheelEvent| {
        let now = dom::now_ms();
        let outcome = w.nav.borrow_mut().wheel(ev.delta_y(), dom::scroll_y(), now);
        if outcome.prevent_default {
            ev.prevent_default();
        }
        w.apply(outcome, now);
    });
}
