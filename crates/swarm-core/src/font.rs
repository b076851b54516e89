//! Text layout into flat glyph outlines using `ttf-parser`.

use crate::config::TextConfig;
use crate::error::Result;
use crate::outline::{Contour, TextOutline};
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::SmallVec;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Contours of one glyph in font units. Most glyphs have one to three.
type GlyphContours = SmallVec<[Contour; 4]>;

/// A parsed font plus a cache of flattened glyph outlines.
pub struct FontFace {
    data: Vec<u8>,
    index: u32,
    cache: FnvHashMap<(u16, u32), GlyphContours>,
}

impl FontFace {
    /// Validate and keep the font bytes. `index` selects a face in a collection.
    pub fn parse(data: Vec<u8>, index: u32) -> Result<Self> {
        let face = Face::parse(&data, index)?;
        log::info!(
            "[font] parsed face: {} glyphs, {} units/em",
            face.number_of_glyphs(),
            face.units_per_em()
        );
        Ok(Self {
            data,
            index,
            cache: FnvHashMap::default(),
        })
    }

    /// Lay `text` out on a single line and return its centered, fitted outline.
    ///
    /// Unknown characters are skipped with a warning; an empty or
    /// whitespace-only string yields an empty outline.
    pub fn layout(&mut self, text: &str, cfg: &TextConfig) -> Result<TextOutline> {
        let face = Face::parse(&self.data, self.index)?;
        let units = face.units_per_em().max(1) as f32;
        let scale = cfg.base_size / units;
        let segments = cfg.curve_segments.max(1);
        let fallback_advance = units * 0.25;

        let mut contours: Vec<Contour> = Vec::new();
        let mut pen_x = 0.0f32;
        let mut prev: Option<GlyphId> = None;

        for ch in text.chars() {
            let Some(gid) = face.glyph_index(ch) else {
                if !ch.is_whitespace() {
                    log::warn!("[font] no glyph for {:?}, skipping", ch);
                }
                pen_x += fallback_advance;
                prev = None;
                continue;
            };
            if let Some(left) = prev {
                pen_x += kerning(&face, left, gid) as f32;
            }

            let shape = self
                .cache
                .entry((gid.0, segments))
                .or_insert_with(|| flatten_glyph(&face, gid, segments));
            let origin = Vec2::new(pen_x, 0.0);
            contours.extend(
                shape
                    .iter()
                    .map(|c| c.iter().map(|p| (*p + origin) * scale).collect::<Contour>()),
            );

            pen_x += face
                .glyph_hor_advance(gid)
                .map(|a| a as f32)
                .unwrap_or(fallback_advance);
            prev = Some(gid);
        }

        let mut outline = TextOutline::new(contours);
        outline.center_and_fit(cfg.max_width, cfg.max_height);
        outline.set_face_z(cfg.depth);
        Ok(outline)
    }
}

fn kerning(face: &Face, left: GlyphId, right: GlyphId) -> i16 {
    let Some(kern) = face.tables().kern else {
        return 0;
    };
    kern.subtables
        .into_iter()
        .filter(|st| st.horizontal && !st.variable)
        .find_map(|st| st.glyphs_kerning(left, right))
        .unwrap_or(0)
}

fn flatten_glyph(face: &Face, gid: GlyphId, segments: u32) -> GlyphContours {
    let mut builder = Flattener::new(segments);
    // Glyphs without an outline (e.g. space) simply produce no contours.
    let _ = face.outline_glyph(gid, &mut builder);
    builder.finish()
}

/// Converts quadratic/cubic outline segments into fixed-count polylines.
struct Flattener {
    segments: u32,
    current: Contour,
    done: GlyphContours,
}

impl Flattener {
    fn new(segments: u32) -> Self {
        Self {
            segments,
            current: Vec::new(),
            done: SmallVec::new(),
        }
    }

    #[inline]
    fn last(&self) -> Vec2 {
        self.current.last().copied().unwrap_or(Vec2::ZERO)
    }

    fn flush(&mut self) {
        let mut c = std::mem::take(&mut self.current);
        if c.len() > 1 && c.first() == c.last() {
            c.pop();
        }
        if c.len() >= 3 {
            self.done.push(c);
        }
    }

    fn finish(mut self) -> GlyphContours {
        self.flush();
        self.done
    }
}

impl OutlineBuilder for Flattener {
    fn move_to(&mut self, x: f32, y: f32) {
        self.flush();
        self.current.push(Vec2::new(x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.current.push(Vec2::new(x, y));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let p0 = self.last();
        let p1 = Vec2::new(x1, y1);
        let p2 = Vec2::new(x, y);
        for i in 1..=self.segments {
            let t = i as f32 / self.segments as f32;
            let mt = 1.0 - t;
            self.current
                .push(p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t));
        }
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let p0 = self.last();
        let p1 = Vec2::new(x1, y1);
        let p2 = Vec2::new(x2, y2);
        let p3 = Vec2::new(x, y);
        for i in 1..=self.segments {
            let t = i as f32 / self.segments as f32;
            self.current.push(cubic2(p0, p1, p2, p3, t));
        }
    }

    fn close(&mut self) {
        self.flush();
    }
}

#[inline]
fn cubic2(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2, t: f32) -> Vec2 {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}
