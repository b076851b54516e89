//! Per-trigger text entries and their point clouds.

use crate::config::{ResponsiveConfig, TextConfig};
use crate::error::{Result, SwarmError};
use crate::font::FontFace;
use crate::outline::TextOutline;
use crate::sampler::{GridSampler, PointCloud, SamplerOptions};
use crate::scene::{tint_or_white, Rgb};

/// Turns a string into a filled outline. Implemented by [`FontFace`].
pub trait OutlineSource {
    fn outline(&mut self, text: &str, cfg: &TextConfig) -> Result<TextOutline>;
}

impl OutlineSource for FontFace {
    fn outline(&mut self, text: &str, cfg: &TextConfig) -> Result<TextOutline> {
        self.layout(text, cfg)
    }
}

/// Trigger text as read from the page.
#[derive(Clone, Debug)]
pub struct TriggerSpec {
    pub text: String,
    /// Raw `data-color` value, if any.
    pub color: Option<String>,
}

impl TriggerSpec {
    pub fn new(text: impl Into<String>, color: Option<&str>) -> Self {
        Self {
            text: text.into(),
            color: color.map(str::to_owned),
        }
    }
}

pub struct TextEntry {
    pub text: String,
    pub tint: Rgb,
    pub outline: Option<TextOutline>,
    pub cloud: Option<PointCloud>,
}

/// What to morph to when an entry becomes active.
#[derive(Clone, Copy, Debug)]
pub struct MorphRequest<'a> {
    pub index: usize,
    pub cloud: &'a [glam::Vec3],
    pub tint: Rgb,
}

pub struct TextLibrary {
    entries: Vec<TextEntry>,
    current: usize,
    sampler_options: SamplerOptions,
    generation: u64,
}

impl TextLibrary {
    pub fn new(triggers: &[TriggerSpec]) -> Self {
        let entries = triggers
            .iter()
            .map(|t| TextEntry {
                text: t.text.clone(),
                tint: tint_or_white(t.color.as_deref()),
                outline: None,
                cloud: None,
            })
            .collect();
        Self {
            entries,
            current: 0,
            sampler_options: SamplerOptions::default(),
            generation: 0,
        }
    }

    pub fn with_sampler_options(mut self, options: SamplerOptions) -> Self {
        self.sampler_options = options;
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of completed [`rebuild`](Self::rebuild) passes.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn entry(&self, index: usize) -> Option<&TextEntry> {
        self.entries.get(index)
    }

    /// Regenerate every outline and cloud for `config`.
    ///
    /// Failures are logged and leave that entry without a cloud. Returns the
    /// number of entries that produced a cloud.
    pub fn rebuild(&mut self, source: &mut dyn OutlineSource, config: &ResponsiveConfig) -> usize {
        let mut ok = 0;
        for (idx, entry) in self.entries.iter_mut().enumerate() {
            entry.outline = None;
            entry.cloud = None;
            let outline = match source.outline(&entry.text, &config.text) {
                Ok(o) => o,
                Err(e) => {
                    log::error!("[text] outline for {:?} failed: {}", entry.text, e);
                    continue;
                }
            };
            let sampler = GridSampler::new(config.particle_count, config.particle_spacing)
                .with_options(SamplerOptions {
                    seed: self.sampler_options.seed.wrapping_add(idx as u64),
                    ..self.sampler_options
                });
            let cloud = sampler.sample(&outline);
            if cloud.is_empty() && !entry.text.trim().is_empty() {
                log::warn!("[text] no points generated for {:?}", entry.text);
            }
            entry.outline = Some(outline);
            entry.cloud = Some(cloud);
            ok += 1;
        }
        self.generation += 1;
        log::info!(
            "[text] rebuilt {}/{} entries (generation {})",
            ok,
            self.entries.len(),
            self.generation
        );
        ok
    }

    /// Make `index` current and describe the morph it needs.
    pub fn activate(&mut self, index: usize) -> Result<MorphRequest<'_>> {
        let entry = self
            .entries
            .get(index)
            .ok_or(SwarmError::MissingEntry(index))?;
        let cloud = entry
            .cloud
            .as_deref()
            .ok_or(SwarmError::MissingCloud(index))?;
        self.current = index;
        Ok(MorphRequest {
            index,
            cloud,
            tint: entry.tint,
        })
    }
}
