//! Flattened glyph outlines and ray queries against them.

use glam::{Vec2, Vec3};

/// A closed polyline; the last point connects back to the first.
pub type Contour = Vec<Vec2>;

/// Axis-aligned 2D bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub const EMPTY: Bounds = Bounds {
        min: Vec2::splat(f32::INFINITY),
        max: Vec2::splat(f32::NEG_INFINITY),
    };

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.min.x <= self.max.x && self.min.y <= self.max.y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        if self.is_empty() {
            Vec2::ZERO
        } else {
            self.max - self.min
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    #[inline]
    pub fn include(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}

/// Half-line used for hit testing.
#[derive(Clone, Copy, Debug)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, dir: Vec3) -> Self {
        Self { origin, dir }
    }
}

/// Filled text shape lying in the plane `z = face_z`.
///
/// Fill follows the nonzero winding rule, which is how TrueType glyphs are
/// defined: counters (the hole in an "O") wind opposite to the outer contour.
#[derive(Clone, Debug, Default)]
pub struct TextOutline {
    contours: Vec<Contour>,
    bounds: Option<Bounds>,
    face_z: f32,
}

impl TextOutline {
    pub fn new(contours: Vec<Contour>) -> Self {
        let contours: Vec<Contour> = contours.into_iter().filter(|c| c.len() >= 3).collect();
        let mut outline = Self {
            contours,
            bounds: None,
            face_z: 0.0,
        };
        outline.recompute_bounds();
        outline
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contours(&self) -> &[Contour] {
        &self.contours
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contours.is_empty()
    }

    /// Bounding box, or [`Bounds::EMPTY`] for an empty outline.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds.unwrap_or(Bounds::EMPTY)
    }

    #[inline]
    pub fn face_z(&self) -> f32 {
        self.face_z
    }

    pub fn set_face_z(&mut self, z: f32) {
        self.face_z = z;
    }

    pub fn translate(&mut self, offset: Vec2) {
        for p in self.contours.iter_mut().flatten() {
            *p += offset;
        }
        self.recompute_bounds();
    }

    pub fn scale(&mut self, factor: f32) {
        for p in self.contours.iter_mut().flatten() {
            *p *= factor;
        }
        self.recompute_bounds();
    }

    /// Center on the origin and shrink uniformly so the outline fits in
    /// `max_width × max_height`. Never enlarges.
    pub fn center_and_fit(&mut self, max_width: f32, max_height: f32) {
        let b = self.bounds();
        if b.is_empty() {
            return;
        }
        self.translate(-b.center());
        let size = b.size();
        let sx = if size.x > 0.0 { max_width / size.x } else { 1.0 };
        let sy = if size.y > 0.0 { max_height / size.y } else { 1.0 };
        let s = sx.min(sy).min(1.0);
        if s < 1.0 {
            self.scale(s);
        }
    }

    /// Nonzero-winding fill test in the outline plane.
    pub fn contains(&self, p: Vec2) -> bool {
        match self.bounds {
            Some(b) if b.contains(p) => {}
            _ => return false,
        }
        let winding: i32 = self.contours.iter().map(|c| winding_number(p, c)).sum();
        winding != 0
    }

    /// Intersect a ray with the filled face. Returns the hit point.
    pub fn raycast(&self, ray: &Ray) -> Option<Vec3> {
        if ray.dir.z.abs() <= f32::EPSILON {
            return None;
        }
        let t = (self.face_z - ray.origin.z) / ray.dir.z;
        if t < 0.0 {
            return None;
        }
        let hit = ray.origin + ray.dir * t;
        self.contains(hit.truncate()).then_some(hit)
    }

    fn recompute_bounds(&mut self) {
        let mut b = Bounds::EMPTY;
        for p in self.contours.iter().flatten() {
            b.include(*p);
        }
        self.bounds = (!b.is_empty()).then_some(b);
    }
}

#[inline]
fn is_left(a: Vec2, b: Vec2, p: Vec2) -> f32 {
    (b.x - a.x) * (p.y - a.y) - (p.x - a.x) * (b.y - a.y)
}

fn winding_number(p: Vec2, contour: &[Vec2]) -> i32 {
    let mut wn = 0;
    let n = contour.len();
    for i in 0..n {
        let a = contour[i];
        let b = contour[(i + 1) % n];
        if a.y <= p.y {
            if b.y > p.y && is_left(a, b, p) > 0.0 {
                wn += 1;
            }
        } else if b.y <= p.y && is_left(a, b, p) < 0.0 {
            wn -= 1;
        }
    }
    wn
}
