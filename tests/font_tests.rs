// Host-side tests for glyph layout against a real TrueType face
// (DejaVu Sans Condensed Bold, see fixtures/DejaVu-LICENSE.txt).

use glam::Vec2;
use swarm_core::*;

const FONT: &[u8] = include_bytes!("fixtures/DejaVuSansCondensed-Bold.ttf");

fn face() -> FontFace {
    FontFace::parse(FONT.to_vec(), 0).unwrap()
}

fn cfg(base_size: f32, max_width: f32, max_height: f32, curve_segments: u32) -> TextConfig {
    TextConfig {
        base_size,
        max_width,
        max_height,
        depth: 0.0,
        curve_segments,
    }
}

fn point_count(outline: &TextOutline) -> usize {
    outline.contours().iter().map(|c| c.len()).sum()
}

#[derive(Default)]
struct CurveCount {
    curves: usize,
}

impl ttf_parser::OutlineBuilder for CurveCount {
    fn move_to(&mut self, _: f32, _: f32) {}
    fn line_to(&mut self, _: f32, _: f32) {}
    fn quad_to(&mut self, _: f32, _: f32, _: f32, _: f32) {
        self.curves += 1;
    }
    fn curve_to(&mut self, _: f32, _: f32, _: f32, _: f32, _: f32, _: f32) {
        self.curves += 1;
    }
    fn close(&mut self) {}
}

#[test]
fn blank_text_lays_out_to_nothing() {
    let mut font = face();
    let sampler = GridSampler::new(4000, 0.1);
    for text in ["", "   "] {
        let outline = font.layout(text, &cfg(100.0, 1000.0, 300.0, 4)).unwrap();
        assert!(outline.is_empty(), "{:?}", text);
        assert!(sampler.sample(&outline).is_empty());
    }
}

#[test]
fn letter_o_keeps_its_counter_open() {
    let mut font = face();
    let outline = font.layout("O", &cfg(200.0, 1000.0, 1000.0, 4)).unwrap();
    assert_eq!(outline.contours().len(), 2);

    let b = outline.bounds();
    let w = b.size().x;
    assert!(b.center().length() < 1e-2);
    assert!(!outline.contains(Vec2::ZERO));
    assert!(outline.contains(Vec2::new(b.min.x + 0.05 * w, 0.0)));

    let cloud = GridSampler::new(4000, 0.1).sample(&outline);
    assert!(!cloud.is_empty());
    assert!(cloud.len() <= 4000);
    assert!(cloud.iter().all(|p| p.truncate().length() > 0.1 * w));
}

#[test]
fn curves_flatten_into_the_requested_segments() {
    let parsed = ttf_parser::Face::parse(FONT, 0).unwrap();
    let gid = parsed.glyph_index('O').unwrap();
    let mut count = CurveCount::default();
    parsed.outline_glyph(gid, &mut count).unwrap();
    assert!(count.curves > 0);

    let mut font = face();
    let coarse = font.layout("O", &cfg(200.0, 1000.0, 1000.0, 4)).unwrap();
    let fine = font.layout("O", &cfg(200.0, 1000.0, 1000.0, 8)).unwrap();
    // Every curve gains four points when its segment count doubles from 4 to 8.
    assert_eq!(point_count(&fine) - point_count(&coarse), 4 * count.curves);
}

#[test]
fn outlines_shrink_to_fit_but_never_grow() {
    let mut font = face();
    let natural = font.layout("GROW", &cfg(100.0, 10_000.0, 10_000.0, 4)).unwrap();
    let roomier = font.layout("GROW", &cfg(100.0, 100_000.0, 100_000.0, 4)).unwrap();
    let size = natural.bounds().size();
    assert!((roomier.bounds().size() - size).length() < 1e-2);

    let squeezed = font.layout("GROW", &cfg(100.0, size.x * 0.5, 10_000.0, 4)).unwrap();
    let s = squeezed.bounds();
    assert!(s.size().x <= size.x * 0.5 + 1e-2);
    assert!((s.size().y - size.y * 0.5).abs() < 1e-2);
    assert!(s.center().length() < 1e-2);
}

#[test]
fn kerned_pairs_sit_closer() {
    let parsed = ttf_parser::Face::parse(FONT, 0).unwrap();
    let a = parsed.glyph_index('A').unwrap();
    let v = parsed.glyph_index('V').unwrap();
    let advance = parsed.glyph_hor_advance(a).unwrap() as f32;
    let a_box = parsed.glyph_bounding_box(a).unwrap();
    let v_box = parsed.glyph_bounding_box(v).unwrap();
    let unkerned = advance + v_box.x_max as f32 - a_box.x_min as f32;

    // One font unit per layout unit.
    let units = parsed.units_per_em() as f32;
    let mut font = face();
    let pair = font.layout("AV", &cfg(units, 1e6, 1e6, 4)).unwrap();
    // The fixture's kern table pulls A-V together by 139 units.
    assert!((pair.bounds().size().x - (unkerned - 139.0)).abs() < 0.5);
}
