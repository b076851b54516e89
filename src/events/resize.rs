use super::EventWiring;
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas backing size follows immediately; the swarm debounces its own
/// regeneration and section offsets are re-measured.
pub(super) fn wire_resize(window: &web::Window, w: EventWiring) {
    dom::sync_canvas_backing_size(&w.canvas);
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&w.canvas);
        w.swarm
            .borrow_mut()
            .on_resize(dom::viewport(), dom::now_ms());
        if let Some(document) = dom::window_document() {
            w.nav
                .borrow_mut()
                .sections
                .set_offsets(dom::section_offsets(&document));
        }
    }) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
    {
        log::warn!("[events] failed to add resize listener: {:?}", e);
    }
    closure.forget();
}
