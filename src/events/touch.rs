use super::EventWiring;
use crate::dom;
use web_sys as web;

fn first_client_y(list: &web::TouchList) -> Option<f32> {
    list.get(0).map(|t| t.client_y() as f32)
}

pub(super) fn wire_touch(window: &web::Window, w: EventWiring) {
    let start = w.clone();
    dom::add_active_listener(window, "touchstart", move |ev: web::TouchEvent| {
        if let Some(y) = first_client_y(&ev.touches()) {
            start.touch.borrow_mut().begin(y, dom::now_ms());
        }
    });

    // While the intro holds the page, keep the browser from scrolling under it.
    let hold = w.clone();
    dom::add_active_listener(window, "touchmove", move |ev: web::TouchEvent| {
        if hold.touch.borrow().is_active() && !hold.nav.borrow().gate.is_unlocked() {
            ev.prevent_default();
        }
    });

    dom::add_active_listener(window, "touchend", move |ev: web::TouchEvent| {
        let Some(y) = first_client_y(&ev.changed_touches()) else {
            return;
        };
        let now = dom::now_ms();
        let Some(swipe) = w.touch.borrow_mut().end(y, now) else {
            return;
        };
        let outcome = w.nav.borrow_mut().swipe(swipe, dom::scroll_y(), now);
        w.apply(outcome, now);
    });
}
