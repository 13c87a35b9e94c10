use crate::bdf;
use crate::error::{GlyphError, Result};
use crate::glyph::Glyph;
use crate::unicode;

use super::GlyphMap;

/// misc-fixed 6x13
pub struct FixedSource {
    glyphs: GlyphMap,
}

/// Non-European blocks misc-fixed covers that the composed face takes from
/// elsewhere.
fn is_ignorable(r: char) -> bool {
    if unicode::is_hebrew(r) || unicode::is_thai(r) {
        return true;
    }
    matches!(
        r as u32,
        // Hangul Jamo
        0x1100..=0x11ff
        // Letterlike Symbols, Number Forms
        | 0x2100..=0x218f
        // Arrows .. Supplemental Arrows-A
        | 0x2190..=0x27ff
        // Braille Patterns
        | 0x2800..=0x28ff
        // Supplemental Arrows-B .. Supplemental Mathematical Operators
        | 0x2900..=0x2aff
        // CJK Symbols and Punctuation
        | 0x3000..=0x303f
        // Private Use Area
        | 0xe000..=0xf8ff
        // Halfwidth and Fullwidth Forms, Specials
        | 0xff00..=0xffff
    )
}

impl FixedSource {
    pub fn from_bdf(src: &str) -> Result<Self> {
        let mut glyphs = GlyphMap::default();
        for c in bdf::parse(src)? {
            let code = c.encoding as u32;
            let Some(r) = char::from_u32(code) else {
                return Err(GlyphError::UnexpectedChar {
                    source_name: "fixed",
                    code,
                });
            };
            // Ogham in misc-fixed is too condensed.
            if unicode::is_ogham(r) {
                continue;
            }
            if !unicode::is_european(r) {
                if is_ignorable(r) {
                    continue;
                }
                return Err(GlyphError::UnexpectedChar {
                    source_name: "fixed",
                    code,
                });
            }
            glyphs.insert(r, c.glyph);
        }
        tracing::debug!("Loaded {} fixed glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    pub fn glyph(&self, r: char) -> Option<&Glyph> {
        self.glyphs.get(&r)
    }
}
