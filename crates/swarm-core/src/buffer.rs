use glam::Vec3;

/// GPU-facing layout of one particle: xyz position and sprite scale.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub pos_scale: [f32; 4],
}

/// Fixed-capacity pool of particles shared by the animator and the renderer.
///
/// The length never changes after construction; a particle is hidden by
/// driving its scale to zero, not by removing it. `dirty` is raised by any
/// mutation and cleared by the renderer after it uploads the data.
#[derive(Clone, Debug)]
pub struct ParticleBuffer {
    positions: Vec<Vec3>,
    scales: Vec<f32>,
    dirty: bool,
}

impl ParticleBuffer {
    /// All particles at the origin and invisible.
    pub fn new(len: usize) -> Self {
        Self {
            positions: vec![Vec3::ZERO; len],
            scales: vec![0.0; len],
            dirty: true,
        }
    }

    /// A new buffer of `len` particles carrying over the overlapping prefix.
    pub fn rebuilt(&self, len: usize) -> Self {
        let mut next = Self::new(len);
        let keep = len.min(self.len());
        next.positions[..keep].copy_from_slice(&self.positions[..keep]);
        next.scales[..keep].copy_from_slice(&self.scales[..keep]);
        next
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        self.positions[i]
    }

    #[inline]
    pub fn scale(&self, i: usize) -> f32 {
        self.scales[i]
    }

    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    #[inline]
    pub fn scales(&self) -> &[f32] {
        &self.scales
    }

    #[inline]
    pub fn set(&mut self, i: usize, position: Vec3, scale: f32) {
        self.positions[i] = position;
        self.scales[i] = scale;
        self.dirty = true;
    }

    /// Number of particles with a visible scale.
    pub fn visible_count(&self) -> usize {
        self.scales.iter().filter(|s| **s > 1e-4).count()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn clear_dirty(&mut self) {
        self.dirty = false;
    }

    /// Pack into `out` for upload, reusing its allocation.
    pub fn pack_into(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.scales)
                .map(|(p, s)| ParticleInstance {
                    pos_scale: [p.x, p.y, p.z, *s],
                }),
        );
    }
}
