//! The particle text pipeline wired together: config → clouds → morphs.

use crate::buffer::ParticleBuffer;
use crate::config::{ResizeTracker, ResponsiveConfig, Viewport};
use crate::morph::MorphAnimator;
use crate::scene::{SceneAnimator, SceneFrame};
use crate::text::{OutlineSource, TextLibrary, TriggerSpec};

/// Owns the particle buffer and everything that writes to it.
///
/// All timestamps are milliseconds on the page clock.
pub struct Swarm {
    config: ResponsiveConfig,
    buffer: ParticleBuffer,
    animator: MorphAnimator,
    library: TextLibrary,
    scene: SceneAnimator,
    resize: ResizeTracker,
    viewport: Viewport,
}

#[inline]
fn secs(now_ms: f64) -> f64 {
    now_ms / 1000.0
}

impl Swarm {
    pub fn new(viewport: Viewport, triggers: &[TriggerSpec], seed: u64) -> Self {
        let config = ResponsiveConfig::for_viewport(viewport);
        let n = config.particle_count;
        log::info!(
            "[swarm] {} triggers, {} particles, sprite {:.1}px",
            triggers.len(),
            n,
            config.particle_size
        );
        Self {
            buffer: ParticleBuffer::new(n),
            animator: MorphAnimator::new(n, seed),
            library: TextLibrary::new(triggers),
            scene: SceneAnimator::new(config.default_animation_speed, config.morph_animation_speed),
            resize: ResizeTracker::new(config.viewport),
            viewport: config.viewport,
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &ResponsiveConfig {
        &self.config
    }

    /// Most recent viewport, including resizes too small to rebuild the clouds.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn buffer(&self) -> &ParticleBuffer {
        &self.buffer
    }

    #[inline]
    pub fn buffer_mut(&mut self) -> &mut ParticleBuffer {
        &mut self.buffer
    }

    #[inline]
    pub fn library(&self) -> &TextLibrary {
        &self.library
    }

    #[inline]
    pub fn animator(&self) -> &MorphAnimator {
        &self.animator
    }

    /// Build every text cloud and morph to the current entry.
    pub fn load(&mut self, source: &mut dyn OutlineSource, now_ms: f64) {
        self.library.rebuild(source, &self.config);
        self.show(self.library.current(), now_ms);
    }

    /// Morph to entry `index`. Failures are logged and leave the buffer as is.
    pub fn show(&mut self, index: usize, now_ms: f64) -> bool {
        let request = match self.library.activate(index) {
            Ok(r) => r,
            Err(e) => {
                log::warn!("[swarm] cannot show {}: {}", index, e);
                return false;
            }
        };
        let tint = request.tint;
        if let Err(e) = self
            .animator
            .morph_to(&self.buffer, request.cloud, secs(now_ms), None)
        {
            log::warn!("[morph] skipped morph to {}: {}", index, e);
            return false;
        }
        self.scene.kick(tint, secs(now_ms));
        true
    }

    pub fn on_resize(&mut self, viewport: Viewport, now_ms: f64) {
        self.viewport = viewport.clamped();
        self.resize.observe(viewport, now_ms);
    }

    /// Advance one frame: settle resizes, step the morph, sample the scene.
    pub fn tick(&mut self, source: &mut dyn OutlineSource, now_ms: f64) -> SceneFrame {
        if let Some(vp) = self.resize.poll(now_ms) {
            self.reconfigure(vp, source, now_ms);
        }
        self.animator.tick(&mut self.buffer, secs(now_ms));
        self.scene.sample(secs(now_ms))
    }

    fn reconfigure(&mut self, viewport: Viewport, source: &mut dyn OutlineSource, now_ms: f64) {
        let config = ResponsiveConfig::for_viewport(viewport);
        if config.particle_count != self.buffer.len() {
            log::info!(
                "[swarm] rebuilding buffer {} -> {} particles",
                self.buffer.len(),
                config.particle_count
            );
            self.buffer = self.buffer.rebuilt(config.particle_count);
            self.animator.reset(config.particle_count);
        }
        self.config = config;
        self.library.rebuild(source, &self.config);
        self.show(self.library.current(), now_ms);
    }
}
