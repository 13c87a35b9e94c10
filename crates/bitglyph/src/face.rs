//! Bitmap faces
//!
//! A [`BitmapFace`] draws from a single composed atlas: the glyph for code
//! point `r` lives in cell `(r % 256, r / 256)`. Every advance is either a
//! half or a full cell.

use rustc_hash::FxHashSet;

use crate::atlas::{BitAtlas, Point, Rect, CELLS_PER_SIDE};
use crate::unicode::{self, EastAsianWidth};

/// Pen position in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Dot {
    pub x: f32,
    pub y: f32,
}

impl Dot {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Face-wide vertical metrics in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub height: i32,
    pub ascent: i32,
    pub descent: i32,
}

/// What to blit for one glyph
#[derive(Debug, Clone)]
pub struct GlyphDraw {
    /// Destination rectangle
    pub rect: Rect,
    /// Coverage mask; a view into the atlas
    pub mask: BitAtlas,
    /// Point of `mask` that maps to `rect.min`
    pub mask_origin: Point,
    pub advance: i32,
}

/// A source of positioned glyph masks
pub trait Face: Send + Sync {
    /// The draw instructions for `r` with the pen at `dot`, or `None` if
    /// the face cannot represent `r`.
    fn glyph(&self, dot: Dot, r: char) -> Option<GlyphDraw>;

    /// Ink bounds relative to the pen position, and the advance.
    fn glyph_bounds(&self, r: char) -> Option<(Rect, i32)>;

    fn glyph_advance(&self, r: char) -> Option<i32>;

    /// Adjustment between `r0` and `r1`, added before drawing `r1`.
    fn kern(&self, r0: char, r1: char) -> i32;

    fn metrics(&self) -> Metrics;
}

/// A face backed by one 256x256-cell atlas
pub struct BitmapFace {
    atlas: BitAtlas,
    dot_x: i32,
    dot_y: i32,
    east_asian_wide: bool,
    wide_runes: FxHashSet<char>,
}

impl BitmapFace {
    /// `dot_x`/`dot_y` locate the pen position inside a cell; `dot_y` is
    /// the ascent.
    pub fn new(atlas: BitAtlas, dot_x: i32, dot_y: i32, east_asian_wide: bool) -> Self {
        Self {
            atlas,
            dot_x,
            dot_y,
            east_asian_wide,
            wide_runes: FxHashSet::default(),
        }
    }

    /// Runes that always take a full cell, whatever their East Asian width.
    pub fn with_wide_runes(mut self, wide_runes: FxHashSet<char>) -> Self {
        self.wide_runes = wide_runes;
        self
    }

    fn char_full_width(&self) -> i32 {
        self.atlas.bounds().width() / CELLS_PER_SIDE
    }

    fn char_half_width(&self) -> i32 {
        self.char_full_width() / 2
    }

    fn char_height(&self) -> i32 {
        self.atlas.bounds().height() / CELLS_PER_SIDE
    }

    fn rune_width(&self, r: char) -> i32 {
        // Latin always comes from misc-fixed.
        if unicode::is_latin(r) || unicode::is_halfwidth_form(r) {
            return self.char_half_width();
        }
        if self.wide_runes.contains(&r) {
            return self.char_full_width();
        }
        match unicode::east_asian_width(r) {
            EastAsianWidth::Neutral | EastAsianWidth::Narrow | EastAsianWidth::Halfwidth => {
                self.char_half_width()
            }
            EastAsianWidth::Wide | EastAsianWidth::Fullwidth => self.char_full_width(),
            EastAsianWidth::Ambiguous if self.east_asian_wide => self.char_full_width(),
            EastAsianWidth::Ambiguous => self.char_half_width(),
        }
    }
}

fn in_atlas(r: char) -> bool {
    (r as u32) < 0x10000
}

impl Face for BitmapFace {
    fn glyph(&self, dot: Dot, r: char) -> Option<GlyphDraw> {
        if !in_atlas(r) {
            return None;
        }
        let rw = self.rune_width(r);
        let h = self.char_height();
        let dx = (dot.x - self.dot_x as f32).floor() as i32;
        let dy = (dot.y - self.dot_y as f32).floor() as i32;

        let code = r as i32;
        let mx = (code % CELLS_PER_SIDE) * self.char_full_width();
        let my = (code / CELLS_PER_SIDE) * h;
        Some(GlyphDraw {
            rect: Rect::new(dx, dy, dx + rw, dy + h),
            mask: self.atlas.sub_image(Rect::new(mx, my, mx + rw, my + h)),
            mask_origin: Point::new(mx, my),
            advance: rw,
        })
    }

    fn glyph_bounds(&self, r: char) -> Option<(Rect, i32)> {
        if !in_atlas(r) {
            return None;
        }
        let rw = self.rune_width(r);
        let bounds = Rect::new(
            -self.dot_x,
            -self.dot_y,
            -self.dot_x + rw,
            -self.dot_y + self.char_height(),
        );
        Some((bounds, rw))
    }

    fn glyph_advance(&self, r: char) -> Option<i32> {
        in_atlas(r).then(|| self.rune_width(r))
    }

    fn kern(&self, _r0: char, r1: char) -> i32 {
        // Combining marks overlap the previous glyph.
        if unicode::is_nonspacing_mark(r1) {
            -self.rune_width(r1)
        } else {
            0
        }
    }

    fn metrics(&self) -> Metrics {
        let height = self.char_height();
        Metrics {
            height,
            ascent: self.dot_y,
            descent: height - self.dot_y,
        }
    }
}

/// IDEOGRAPHIC COMMA, FULLWIDTH COMMA, IDEOGRAPHIC FULL STOP, FULLWIDTH
/// FULL STOP
const TRADITIONAL_PUNCTUATION: [char; 4] = ['\u{3001}', '\u{ff0c}', '\u{3002}', '\u{ff0e}'];

/// Wraps a face and centers CJK commas and full stops the way Traditional
/// Chinese typesetting places them.
pub struct TraditionalFace<F> {
    inner: F,
}

impl<F: Face> TraditionalFace<F> {
    pub fn new(inner: F) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }
}

impl<F: Face> Face for TraditionalFace<F> {
    fn glyph(&self, dot: Dot, r: char) -> Option<GlyphDraw> {
        let mut draw = self.inner.glyph(dot, r)?;
        if TRADITIONAL_PUNCTUATION.contains(&r) {
            draw.rect = draw.rect.translate(3, -3);
        }
        Some(draw)
    }

    fn glyph_bounds(&self, r: char) -> Option<(Rect, i32)> {
        self.inner.glyph_bounds(r)
    }

    fn glyph_advance(&self, r: char) -> Option<i32> {
        self.inner.glyph_advance(r)
    }

    fn kern(&self, r0: char, r1: char) -> i32 {
        self.inner.kern(r0, r1)
    }

    fn metrics(&self) -> Metrics {
        self.inner.metrics()
    }
}

/// Total advance of `text`, including kerning. Runes the face cannot draw
/// are skipped.
pub fn measure_string(face: &dyn Face, text: &str) -> i32 {
    let mut width = 0;
    let mut prev: Option<char> = None;
    for r in text.chars() {
        if let Some(p) = prev {
            width += face.kern(p, r);
        }
        let Some(advance) = face.glyph_advance(r) else {
            continue;
        };
        width += advance;
        prev = Some(r);
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blank_face(east_asian_wide: bool) -> BitmapFace {
        let (w, h) = (12 * 256, 16 * 256);
        let atlas = BitAtlas::new(vec![0u8; (w * h / 8) as usize], w, h);
        BitmapFace::new(atlas, 0, 12, east_asian_wide)
    }

    #[test]
    fn test_measure_string() {
        let face = blank_face(false);
        assert_eq!(measure_string(&face, "a"), 6);
        assert_eq!(measure_string(&face, "あ"), 12);
        assert_eq!(measure_string(&face, "ｱ"), 6);
        assert_eq!(measure_string(&face, "aあｱ"), 24);
        // U+1F600 is outside the atlas and skipped
        assert_eq!(measure_string(&face, "a\u{1f600}a"), 12);
    }

    #[test]
    fn test_outside_bmp_has_no_glyph() {
        let face = blank_face(false);
        assert!(face.glyph(Dot::default(), '\u{10000}').is_none());
        assert!(face.glyph_bounds('\u{1f600}').is_none());
        assert!(face.glyph_advance('\u{10ffff}').is_none());
        assert!(face.glyph_advance('\u{ffff}').is_some());
    }

    #[test]
    fn test_every_advance_is_half_or_full() {
        for wide in [false, true] {
            let face = blank_face(wide);
            for code in 0..0x10000u32 {
                let Some(r) = char::from_u32(code) else {
                    continue;
                };
                let advance = face.glyph_advance(r).unwrap();
                assert!(advance == 6 || advance == 12, "{code:#x}: {advance}");
            }
        }
    }

    #[test]
    fn test_ambiguous_follows_face_flag() {
        assert_eq!(blank_face(false).glyph_advance('\u{2500}'), Some(6));
        assert_eq!(blank_face(true).glyph_advance('\u{2500}'), Some(12));
        // Latin stays half width even when ambiguous
        assert_eq!(blank_face(true).glyph_advance('\u{e9}'), Some(6));
    }

    #[test]
    fn test_wide_runes_override() {
        let wide: FxHashSet<char> = ['\u{0629}'].into_iter().collect();
        let face = blank_face(false).with_wide_runes(wide);
        assert_eq!(face.glyph_advance('\u{0629}'), Some(12));
        assert_eq!(face.glyph_advance('\u{0628}'), Some(6));
    }

    #[test]
    fn test_glyph_geometry() {
        let face = blank_face(false);
        let draw = face.glyph(Dot::new(10.5, 20.0), 'あ').unwrap();
        // U+3042 is cell (0x42, 0x30)
        let (mx, my) = (0x42 * 12, 0x30 * 16);
        assert_eq!(draw.rect, Rect::new(10, 8, 22, 24));
        assert_eq!(draw.mask_origin, Point::new(mx, my));
        assert_eq!(draw.mask.bounds(), Rect::new(mx, my, mx + 12, my + 16));
        assert_eq!(draw.advance, 12);

        let half = face.glyph(Dot::new(-0.5, 0.0), 'a').unwrap();
        assert_eq!(half.rect, Rect::new(-1, -12, 5, 4));
        assert_eq!(half.mask.bounds().width(), 6);

        let (bounds, advance) = face.glyph_bounds('a').unwrap();
        assert_eq!(bounds, Rect::new(0, -12, 6, 4));
        assert_eq!(advance, 6);
    }

    #[test]
    fn test_mask_reads_atlas_cell() {
        let (w, h) = (12 * 256, 16 * 256);
        let mut bits = vec![0u8; (w * h / 8) as usize];
        // top-left pixel of cell 'A'
        let idx = (65 * 12) as usize;
        bits[idx / 8] |= 1 << (7 - idx % 8);
        let face = BitmapFace::new(BitAtlas::new(bits, w, h), 0, 12, false);
        let draw = face.glyph(Dot::default(), 'A').unwrap();
        assert!(draw.mask.at(draw.mask_origin.x, draw.mask_origin.y));
        assert!(!draw.mask.at(draw.mask_origin.x + 1, draw.mask_origin.y));
    }

    #[test]
    fn test_metrics() {
        assert_eq!(
            blank_face(false).metrics(),
            Metrics {
                height: 16,
                ascent: 12,
                descent: 4,
            }
        );
    }

    #[test]
    fn test_kern_combining_mark() {
        let face = blank_face(false);
        assert_eq!(face.kern('e', '\u{0301}'), -6);
        assert_eq!(face.kern('e', 'f'), 0);
        assert_eq!(measure_string(&face, "e\u{0301}"), 6);
    }

    #[test]
    fn test_traditional_punctuation_nudge() {
        let face = TraditionalFace::new(blank_face(false));
        let plain = face.inner().glyph(Dot::default(), '\u{3002}').unwrap();
        let moved = face.glyph(Dot::default(), '\u{3002}').unwrap();
        assert_eq!(moved.rect, plain.rect.translate(3, -3));
        assert_eq!(moved.mask_origin, plain.mask_origin);

        let other = face.glyph(Dot::default(), 'あ').unwrap();
        assert_eq!(other.rect, face.inner().glyph(Dot::default(), 'あ').unwrap().rect);
    }
}
