use image::RgbaImage;

use crate::error::Result;
use crate::glyph::Glyph;

use super::{FixedSource, GlyphMap};

const CELL_FULL_WIDTH: i32 = 12;
const CELL_HALF_WIDTH: i32 = 6;
const CELL_HEIGHT: i32 = 12;
/// Rows of padding above the sheet ink
const Y_OFFSET: i32 = 2;

const ARABIC_COMMA: char = '\u{060c}';
const ARABIC_SEMICOLON: char = '\u{061b}';
const ARABIC_QUESTION_MARK: char = '\u{061f}';

/// Hand-drawn Arabic glyphs from two 16x16-cell sheets
pub struct ArabicSource {
    glyphs: GlyphMap,
}

fn is_ink(sheet: &RgbaImage, x: i32, y: i32) -> bool {
    if x < 0 || y < 0 {
        return false;
    }
    match sheet.get_pixel_checked(x as u32, y as u32) {
        // zero red after alpha premultiplication
        Some(p) => u16::from(p.0[0]) * u16::from(p.0[3]) == 0,
        None => false,
    }
}

fn cell_glyph(sheet: &RgbaImage, x: i32, y: i32) -> Glyph {
    let wide = (0..CELL_HEIGHT)
        .any(|j| (CELL_HALF_WIDTH..CELL_FULL_WIDTH).any(|i| is_ink(sheet, x + i, y + j)));
    let width = if wide { CELL_FULL_WIDTH } else { CELL_HALF_WIDTH };
    // Placed so the glyph box starts at the top of a cell with baseline 12.
    Glyph::from_fn(width, CELL_HEIGHT + Y_OFFSET, 0, -Y_OFFSET, |px, py| {
        py >= Y_OFFSET && is_ink(sheet, x + px, y + py - Y_OFFSET)
    })
}

fn load_sheet(glyphs: &mut GlyphMap, png: &[u8], first: u32) -> Result<()> {
    let sheet = image::load_from_memory(png)?.to_rgba8();
    for j in 0..16 {
        for i in 0..16 {
            let Some(r) = char::from_u32(first + (j * 16 + i) as u32) else {
                continue;
            };
            glyphs.insert(r, cell_glyph(&sheet, i * CELL_FULL_WIDTH, j * CELL_HEIGHT));
        }
    }
    Ok(())
}

impl ArabicSource {
    /// `base` covers U+0600..U+06FF and `presentation` U+FE70..U+FEFF.
    ///
    /// The comma, semicolon and question mark are drawn from the fixed
    /// source; without it they are absent.
    pub fn from_png(base: &[u8], presentation: &[u8], fixed: Option<&FixedSource>) -> Result<Self> {
        let mut glyphs = GlyphMap::default();
        load_sheet(&mut glyphs, base, 0x0600)?;
        load_sheet(&mut glyphs, presentation, 0xfe70)?;

        let specials = [
            (ARABIC_COMMA, fixed.and_then(|f| f.glyph(',')).map(|g| g.rotated(0, 7))),
            (ARABIC_SEMICOLON, fixed.and_then(|f| f.glyph(';')).map(|g| g.rotated(0, 2))),
            (ARABIC_QUESTION_MARK, fixed.and_then(|f| f.glyph('?')).map(Glyph::mirrored)),
        ];
        for (r, glyph) in specials {
            match glyph {
                Some(g) => glyphs.insert(r, g),
                None => glyphs.remove(&r),
            };
        }

        tracing::debug!("Loaded {} Arabic glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    pub fn glyph(&self, r: char) -> Option<&Glyph> {
        self.glyphs.get(&r)
    }

    /// Code points whose glyph spans a full cell, in ascending order.
    pub fn wide_runes(&self) -> Vec<char> {
        let mut wide: Vec<char> = self
            .glyphs
            .iter()
            .filter(|(_, g)| g.width == CELL_FULL_WIDTH)
            .map(|(r, _)| *r)
            .collect();
        wide.sort_unstable();
        wide
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};
    use std::io::Cursor;

    /// Encode a white 192x192 sheet with black pixels at `ink`.
    fn sheet_png(ink: &[(u32, u32)]) -> Vec<u8> {
        let mut img = RgbaImage::from_pixel(192, 192, Rgba([255, 255, 255, 255]));
        for &(x, y) in ink {
            img.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png).unwrap();
        buf.into_inner()
    }

    const FIXED: &str = "\
STARTCHAR comma
ENCODING 44
BBX 6 13 0 -2
BITMAP
00
00
00
00
00
00
00
00
00
30
20
40
00
ENDCHAR
STARTCHAR semicolon
ENCODING 59
BBX 6 13 0 -2
BITMAP
00
00
00
00
30
30
00
00
30
30
20
40
00
ENDCHAR
STARTCHAR question
ENCODING 63
BBX 6 13 0 -2
BITMAP
00
00
70
88
08
10
20
20
00
20
00
00
00
ENDCHAR
";

    #[test]
    fn test_cell_width_and_offset() {
        // U+0628 is cell (8, 2): half width. U+0629 is cell (9, 2): ink at x = 7.
        let base = sheet_png(&[(8 * 12 + 1, 2 * 12), (9 * 12 + 7, 2 * 12 + 3)]);
        let presentation = sheet_png(&[]);
        let arabic = ArabicSource::from_png(&base, &presentation, None).unwrap();

        let beh = arabic.glyph('\u{0628}').unwrap();
        assert_eq!(beh.width, 6);
        assert_eq!(beh.height, 14);
        assert_eq!(beh.cell_origin(12), (0, 0));
        assert!(beh.at(1, 2));
        assert!(!beh.at(1, 0));

        let teh_marbuta = arabic.glyph('\u{0629}').unwrap();
        assert_eq!(teh_marbuta.width, 12);
        assert!(teh_marbuta.at(7, 5));

        // blank cells are still glyphs
        assert!(arabic.glyph('\u{fe70}').is_some());
        assert!(arabic.glyph('\u{0700}').is_none());
        assert_eq!(arabic.wide_runes(), vec!['\u{0629}']);
    }

    #[test]
    fn test_punctuation_from_fixed() {
        let fixed = FixedSource::from_bdf(FIXED).unwrap();
        let blank = sheet_png(&[]);
        let arabic = ArabicSource::from_png(&blank, &blank, Some(&fixed)).unwrap();

        let comma = fixed.glyph(',').unwrap();
        let arabic_comma = arabic.glyph(ARABIC_COMMA).unwrap();
        assert_eq!(*arabic_comma, comma.rotated(0, 7));
        assert_eq!(arabic_comma.width, 6);

        let question = fixed.glyph('?').unwrap();
        assert_eq!(*arabic.glyph(ARABIC_QUESTION_MARK).unwrap(), question.mirrored());

        let semicolon = fixed.glyph(';').unwrap();
        assert_eq!(arabic.glyph(ARABIC_SEMICOLON), Some(&semicolon.rotated(0, 2)));
        assert!(arabic.glyph(ARABIC_SEMICOLON).unwrap().has_ink());
        assert!(arabic.wide_runes().is_empty());
    }

    #[test]
    fn test_punctuation_without_fixed() {
        let blank = sheet_png(&[]);
        let arabic = ArabicSource::from_png(&blank, &blank, None).unwrap();
        assert!(arabic.glyph(ARABIC_COMMA).is_none());
        assert!(arabic.glyph(ARABIC_SEMICOLON).is_none());
        assert!(arabic.glyph(ARABIC_QUESTION_MARK).is_none());
    }
}
