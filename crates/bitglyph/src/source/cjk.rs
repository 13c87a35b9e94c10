//! Supplementary CJK ideograph sources

use crate::bdf;
use crate::error::Result;
use crate::glyph::Glyph;
use crate::unicode::is_cjk_unified_ideograph;

use super::{unicode_glyphs, GlyphMap};

/// Cubic 11, for ideographs missing from M+
pub struct CubicSource {
    glyphs: GlyphMap,
}

impl CubicSource {
    pub fn from_bdf(src: &str) -> Result<Self> {
        let glyphs = unicode_glyphs(bdf::parse(src)?, -1);
        tracing::debug!("Loaded {} Cubic glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    pub fn glyph(&self, r: char) -> Option<&Glyph> {
        if !is_cjk_unified_ideograph(r) {
            return None;
        }
        self.glyphs.get(&r)
    }
}

/// Ark Pixel 12px monospaced, in simplified and traditional variants
pub struct ArkSource {
    simplified: GlyphMap,
    traditional: GlyphMap,
}

impl ArkSource {
    pub fn from_bdf(simplified: &str, traditional: &str) -> Result<Self> {
        let simplified = unicode_glyphs(bdf::parse(simplified)?, -1);
        let traditional = unicode_glyphs(bdf::parse(traditional)?, -1);
        tracing::debug!(
            "Loaded {} simplified and {} traditional Ark glyphs",
            simplified.len(),
            traditional.len()
        );
        Ok(Self {
            simplified,
            traditional,
        })
    }

    /// Look up `r` in the preferred variant, falling back to the other one.
    pub fn glyph(&self, r: char, simplified: bool) -> Option<&Glyph> {
        if !is_cjk_unified_ideograph(r) {
            return None;
        }
        let (preferred, other) = if simplified {
            (&self.simplified, &self.traditional)
        } else {
            (&self.traditional, &self.simplified)
        };
        preferred.get(&r).or_else(|| other.get(&r))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // two rows; the ink row moves to the top after the shift
    fn bdf_char(encoding: u32, row: &str) -> String {
        format!("STARTCHAR c{encoding:X}\nENCODING {encoding}\nBBX 12 2 0 0\nBITMAP\n0000\n{row}\nENDCHAR\n")
    }

    #[test]
    fn test_cubic_ideographs_only() {
        let src = bdf_char(0x4e00, "FFF0") + &bdf_char('A' as u32, "FFF0");
        let cubic = CubicSource::from_bdf(&src).unwrap();
        let g = cubic.glyph('\u{4e00}').unwrap();
        assert!(g.at(0, 0));
        assert!(!g.at(0, 1));
        assert!(cubic.glyph('A').is_none());
    }

    #[test]
    fn test_ark_variant_preference_and_fallback() {
        // U+4E2A only in simplified, U+500B only in traditional
        let cn = bdf_char(0x4e00, "8000") + &bdf_char(0x4e2a, "8000");
        let tr = bdf_char(0x4e00, "0010") + &bdf_char(0x500b, "0010");
        let ark = ArkSource::from_bdf(&cn, &tr).unwrap();

        let simplified = ark.glyph('\u{4e00}', true).unwrap();
        assert!(simplified.at(0, 0));
        assert!(!simplified.at(11, 0));
        let traditional = ark.glyph('\u{4e00}', false).unwrap();
        assert!(traditional.at(11, 0));
        assert!(!traditional.at(0, 0));

        assert!(ark.glyph('\u{500b}', true).unwrap().at(11, 0));
        assert!(ark.glyph('\u{4e2a}', false).unwrap().at(0, 0));
        assert!(ark.glyph('A', true).is_none());
    }
}
