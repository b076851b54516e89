use crate::constants::*;
use crate::dom;
use crate::input::Navigator;
use crate::render;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use swarm_core::{BloomConfig, Camera, FontFace, ParticleInstance, Swarm};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub swarm: Rc<RefCell<Swarm>>,
    pub nav: Rc<RefCell<Navigator>>,
    pub font: FontFace,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<render::GpuState<'a>>,
    pub packed: Vec<ParticleInstance>,
    pub last_instant: Instant,
    pub phase: f32,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(0.25);
        self.last_instant = now;
        let now_ms = dom::now_ms();

        {
            let mut nav = self.nav.borrow_mut();
            match nav.tick(now_ms) {
                Some(offset) => dom::scroll_to(offset),
                None => nav.observe_scroll(dom::scroll_y()),
            }
        }

        let mut swarm = self.swarm.borrow_mut();
        let scene = swarm.tick(&mut self.font, now_ms);
        self.phase = (self.phase + scene.speed * dt_sec * FRAMES_PER_SEC) % std::f32::consts::TAU;

        let Some(gpu) = self.gpu.as_mut() else {
            return;
        };
        gpu.resize_if_needed(self.canvas.width(), self.canvas.height());
        if swarm.buffer().is_dirty() {
            swarm.buffer().pack_into(&mut self.packed);
            gpu.upload_particles(&self.packed);
            swarm.buffer_mut().clear_dirty();
        }

        let config = swarm.config();
        let camera =
            Camera::for_viewport(swarm.viewport()).swayed(scene.sway_deg * CAMERA_SWAY_FACTOR);
        let dpr = dom::device_pixel_ratio() as f32;
        let eye_distance = (camera.eye - camera.target).length();
        let params = render::FrameParams {
            view_proj: camera.view_projection(),
            tint: scene.tint,
            opacity: PARTICLE_OPACITY,
            sprite_size: config.particle_size * dpr * SPRITE_QUAD_SCALE * eye_distance
                / SPRITE_DEPTH_REF,
            phase: self.phase,
        };
        match gpu.render(&params) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                let (w, h) = gpu.size();
                log::warn!("[render] surface lost; reconfiguring {}x{}", w, h);
                gpu.reconfigure();
            }
            Err(e) => log::error!("[render] frame error: {:?}", e),
        }
    }
}

pub async fn init_gpu(
    canvas: &web::HtmlCanvasElement,
    particle_capacity: usize,
    bloom: BloomConfig,
) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas, particle_capacity, bloom).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
