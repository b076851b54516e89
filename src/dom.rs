use crate::constants::{ACTIVE_CLASS, DEVICE_PIXEL_RATIO_MAX, SECTION_SELECTOR, TRIGGER_SELECTOR};
use swarm_core::{TriggerSpec, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Milliseconds on the page's monotonic clock.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn viewport() -> Viewport {
    let Some(w) = web::window() else {
        return Viewport::new(1.0, 1.0);
    };
    let px = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0) as f32
    };
    Viewport::new(px(w.inner_width()), px(w.inner_height()))
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

#[inline]
pub fn scroll_to(offset: f64) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, offset);
    }
}

fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {}", selector);
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Trigger elements in document order.
pub fn trigger_elements(document: &web::Document) -> Vec<web::Element> {
    query_all(document, TRIGGER_SELECTOR)
}

pub fn trigger_specs(elements: &[web::Element]) -> Vec<TriggerSpec> {
    elements
        .iter()
        .map(|el| {
            let text = el.text_content().unwrap_or_default();
            let color = el.get_attribute("data-color");
            TriggerSpec::new(text.trim(), color.as_deref())
        })
        .collect()
}

/// Move the `active` class onto trigger `index`.
pub fn set_active_trigger(elements: &[web::Element], index: usize) {
    for (i, el) in elements.iter().enumerate() {
        let cl = el.class_list();
        if i == index {
            _ = cl.add_1(ACTIVE_CLASS);
        } else {
            _ = cl.remove_1(ACTIVE_CLASS);
        }
    }
}

/// Page offsets of each `.section` top edge.
pub fn section_offsets(document: &web::Document) -> Vec<f64> {
    query_all(document, SECTION_SELECTOR)
        .into_iter()
        .filter_map(|el| el.dyn_into::<web::HtmlElement>().ok())
        .map(|el| el.offset_top() as f64)
        .collect()
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let dpr = device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let w_px = (rect.width() * dpr) as u32;
    let h_px = (rect.height() * dpr) as u32;
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
}

/// Attach a non-passive listener so the handler may call `prevent_default`.
pub fn add_active_listener<E>(target: &web::EventTarget, kind: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        kind,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::warn!("[dom] failed to add {} listener: {:?}", kind, e);
    }
    closure.forget();
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0)
        .min(DEVICE_PIXEL_RATIO_MAX)
}
