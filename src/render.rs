use glam::Mat4;
use swarm_core::{BloomConfig, ParticleInstance, Rgb};
use web_sys as web;
use wgpu;

mod helpers;
mod particles;
mod post;
mod targets;

use particles::{ParticleResources, ParticleUniforms};
use post::{PostBindGroups, PostResources, PostUniforms};
use targets::RenderTargets;

/// Per-frame inputs to [`GpuState::render`].
pub struct FrameParams {
    pub view_proj: Mat4,
    pub tint: Rgb,
    pub opacity: f32,
    /// Sprite edge in backing-store pixels at the reference depth.
    pub sprite_size: f32,
    pub phase: f32,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,
    targets: RenderTargets,
    post: PostResources,
    post_groups: PostBindGroups,
    bloom: BloomConfig,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        particle_capacity: usize,
        bloom: BloomConfig,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, width, height);
        let particles = particles::create_particle_resources(&device, particle_capacity);
        let post = post::create_post_resources(&device, format);
        let post_groups = PostBindGroups::new(&device, &post, &targets);
        log::info!("[render] surface {}x{} {:?}", width, height, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            targets,
            post,
            post_groups,
            bloom,
            width,
            height,
            clear_color: wgpu::Color::BLACK,
        })
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn upload_particles(&mut self, instances: &[ParticleInstance]) {
        self.particles.upload(&self.device, &self.queue, instances);
    }

    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
            self.post_groups = PostBindGroups::new(&self.device, &self.post, &self.targets);
        }
    }

    pub fn render(&mut self, params: &FrameParams) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        let u = ParticleUniforms {
            view_proj: params.view_proj.to_cols_array_2d(),
            color: [params.tint[0], params.tint[1], params.tint[2], params.opacity],
            viewport: [self.width as f32, self.height as f32],
            size: params.sprite_size,
            phase: params.phase,
        };
        self.queue
            .write_buffer(&self.particles.uniform_buffer, 0, bytemuck::bytes_of(&u));
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.hdr_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.particles.draw(&mut rpass);
        }

        // Uniform writes apply at the next submit; each pass with new
        // post uniforms needs its own submission.
        let mut pu = PostUniforms {
            resolution: [self.width as f32 / 2.0, self.height as f32 / 2.0],
            blur_dir: [0.0, 0.0],
            bloom_strength: self.bloom.strength,
            threshold: self.bloom.threshold,
            radius: 1.0 + self.bloom.radius,
            _pad: 0.0,
        };
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&pu));
        post::blit(
            &mut encoder,
            "bright_pass",
            &self.targets.bloom_a_view,
            wgpu::Color::TRANSPARENT,
            &self.post.bright_pipeline,
            &self.post_groups.from_hdr,
            None,
        );
        self.queue.submit(Some(encoder.finish()));

        for (label, dir, src, dst) in [
            ("blur_h", [1.0, 0.0], &self.post_groups.from_bloom_a, &self.targets.bloom_b_view),
            ("blur_v", [0.0, 1.0], &self.post_groups.from_bloom_b, &self.targets.bloom_a_view),
        ] {
            pu.blur_dir = dir;
            self.queue
                .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&pu));
            let mut enc = self
                .device
                .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some(label) });
            post::blit(
                &mut enc,
                label,
                dst,
                wgpu::Color::TRANSPARENT,
                &self.post.blur_pipeline,
                src,
                None,
            );
            self.queue.submit(Some(enc.finish()));
        }

        pu.blur_dir = [0.0, 0.0];
        pu.resolution = [self.width as f32, self.height as f32];
        self.queue
            .write_buffer(&self.post.uniform_buffer, 0, bytemuck::bytes_of(&pu));
        let mut enc = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("composite"),
            });
        post::blit(
            &mut enc,
            "composite",
            &view,
            self.clear_color,
            &self.post.composite_pipeline,
            &self.post_groups.from_hdr,
            Some(&self.post_groups.bloom_a_only),
        );
        self.queue.submit(Some(enc.finish()));
        frame.present();
        Ok(())
    }
}
