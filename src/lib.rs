#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::{FontFace, GatePolicy, Swarm};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod render;

use constants::*;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("glyph-swarm starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn fetch_bytes(window: &web::Window, url: &str) -> anyhow::Result<Vec<u8>> {
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {} failed: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    if !resp.ok() {
        anyhow::bail!("fetch {} -> HTTP {}", url, resp.status());
    }
    let buf = resp
        .array_buffer()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    let buf = JsFuture::from(buf)
        .await
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    Ok(js_sys::Uint8Array::new(&buf).to_vec())
}

async fn load_font(window: &web::Window, canvas: &web::HtmlCanvasElement) -> anyhow::Result<FontFace> {
    let url = canvas
        .get_attribute(FONT_URL_ATTR)
        .unwrap_or_else(|| DEFAULT_FONT_URL.to_string());
    let bytes = fetch_bytes(window, &url).await?;
    log::info!("[font] {} ({} bytes)", url, bytes.len());
    Ok(FontFace::parse(bytes, 0)?)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    dom::sync_canvas_backing_size(&canvas);

    let triggers = dom::trigger_elements(&document);
    let specs = dom::trigger_specs(&triggers);
    if specs.is_empty() {
        log::warn!("[dom] no `{}` elements; nothing to morph", TRIGGER_SELECTOR);
    }

    let mut font = load_font(&window, &canvas).await?;
    let now_ms = dom::now_ms();
    let mut swarm = Swarm::new(dom::viewport(), &specs, rand::random());
    swarm.load(&mut font, now_ms);
    dom::set_active_trigger(&triggers, swarm.library().current());

    let capacity = swarm.buffer().len();
    let bloom = swarm.config().bloom;
    let swarm = Rc::new(RefCell::new(swarm));
    let nav = Rc::new(RefCell::new(input::Navigator::new(
        GatePolicy::default(),
        dom::section_offsets(&document),
    )));

    events::wire_all(events::EventWiring {
        swarm: swarm.clone(),
        nav: nav.clone(),
        touch: Rc::new(RefCell::new(input::TouchTracker::default())),
        triggers: Rc::new(triggers),
        canvas: canvas.clone(),
    });

    let gpu = frame::init_gpu(&canvas, capacity, bloom).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        swarm,
        nav,
        font,
        canvas,
        gpu,
        packed: Vec::with_capacity(capacity),
        last_instant: Instant::now(),
        phase: 0.0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
