//! Grid sampling of glyph outlines into point clouds.

use crate::constants::RAY_ORIGIN_Z;
use crate::outline::{Ray, TextOutline};
use glam::Vec3;
use rand::prelude::*;

/// Ordered target positions for one text; at most the particle budget long.
pub type PointCloud = Vec<Vec3>;

#[derive(Clone, Copy, Debug, Default)]
pub struct SamplerOptions {
    /// Shuffle the cloud so neighbouring particles travel to unrelated targets.
    pub shuffle: bool,
    pub seed: u64,
}

/// Columns and rows of the candidate grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDims {
    pub cols: usize,
    pub rows: usize,
}

impl GridDims {
    /// Grid with `cols × rows ≈ budget`, stretched to the outline's aspect ratio.
    pub fn for_budget(budget: usize, width: f32, height: f32) -> Self {
        if budget == 0 || !(width > 0.0) || !(height > 0.0) {
            return Self { cols: 0, rows: 0 };
        }
        let aspect = width / height;
        let base = (budget as f32).sqrt();
        let s = aspect.sqrt();
        Self {
            cols: (base * s).ceil().max(1.0) as usize,
            rows: (base / s).ceil().max(1.0) as usize,
        }
    }

    #[inline]
    pub fn cells(&self) -> usize {
        self.cols * self.rows
    }
}

/// Converts text outlines into point clouds by casting one ray per grid cell.
#[derive(Clone, Debug)]
pub struct GridSampler {
    pub budget: usize,
    pub min_spacing: f32,
    pub options: SamplerOptions,
}

impl GridSampler {
    pub fn new(budget: usize, min_spacing: f32) -> Self {
        Self {
            budget,
            min_spacing,
            options: SamplerOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SamplerOptions) -> Self {
        self.options = options;
        self
    }

    /// Sample the outline. The grid is recomputed on every call.
    pub fn sample(&self, outline: &TextOutline) -> PointCloud {
        let bounds = outline.bounds();
        let size = bounds.size();
        let dims = GridDims::for_budget(self.budget, size.x, size.y);
        if outline.is_empty() || dims.cells() == 0 {
            return PointCloud::new();
        }

        let step_x = (size.x / dims.cols as f32).max(self.min_spacing);
        let step_y = (size.y / dims.rows as f32).max(self.min_spacing);
        let dir = Vec3::Z;
        let mut points = PointCloud::with_capacity(self.budget.min(dims.cells()));

        // Column-major scan: x outer, y inner.
        'scan: for i in 0..dims.cols {
            let x = bounds.min.x + (i as f32 + 0.5) * step_x;
            if x > bounds.max.x {
                break;
            }
            for j in 0..dims.rows {
                if points.len() >= self.budget {
                    break 'scan;
                }
                let y = bounds.min.y + (j as f32 + 0.5) * step_y;
                if y > bounds.max.y {
                    break;
                }
                let ray = Ray::new(Vec3::new(x, y, RAY_ORIGIN_Z + outline.face_z()), dir);
                if let Some(hit) = outline.raycast(&ray) {
                    points.push(hit);
                }
            }
        }

        if self.options.shuffle {
            let mut rng = StdRng::seed_from_u64(self.options.seed);
            points.shuffle(&mut rng);
        }
        log::debug!(
            "[sampler] grid {}x{} -> {} points (budget {})",
            dims.cols,
            dims.rows,
            points.len(),
            self.budget
        );
        points
    }
}
