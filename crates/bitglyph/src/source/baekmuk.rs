use crate::bdf;
use crate::error::Result;
use crate::glyph::Glyph;
use crate::uniconv;

use super::GlyphMap;

/// Baekmuk Gulim 12, encoded in KS X 1001
pub struct BaekmukSource {
    glyphs: GlyphMap,
}

/// Baekmuk also carries Hanja and symbols; only Hangul is taken from it.
fn is_rune_to_draw(r: char) -> bool {
    matches!(
        r as u32,
        // KOREAN STANDARD SYMBOL
        0x327f
        // Circled Hangul
        | 0x3260..=0x327e
        // Parenthesized Hangul
        | 0x3200..=0x321f
        // Hangul Compatibility Jamo
        | 0x3130..=0x318f
        // Hangul Syllables
        | 0xac00..=0xd7af
    )
}

impl BaekmukSource {
    /// `ksx1001` is the KS X 1001 to Unicode table, columns separated by
    /// two spaces. Codes the table does not map are skipped.
    pub fn from_bdf(src: &str, ksx1001: &str) -> Result<Self> {
        let table = uniconv::parse(ksx1001, "  ")?;
        let glyphs: GlyphMap = bdf::parse(src)?
            .into_iter()
            .filter_map(|c| {
                let r = table.get(&(c.encoding as u32))?;
                Some((*r, c.glyph))
            })
            .collect();
        tracing::debug!("Loaded {} Baekmuk glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    pub fn glyph(&self, r: char) -> Option<&Glyph> {
        if !is_rune_to_draw(r) {
            return None;
        }
        self.glyphs.get(&r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KSX1001: &str = "\
# KS X 1001 to Unicode
0x3021  0xAC00  # HANGUL SYLLABLE GA
0x4A21  0x4F3D  # CJK UNIFIED IDEOGRAPH
";

    fn bdf_char(encoding: u32) -> String {
        format!("STARTCHAR c{encoding:X}\nENCODING {encoding}\nBBX 12 12 0 -2\nBITMAP\nFFF0\nENDCHAR\n")
    }

    #[test]
    fn test_hangul_only() {
        let src = bdf_char(0x3021) + &bdf_char(0x4a21) + &bdf_char(0x7e7e);
        let baekmuk = BaekmukSource::from_bdf(&src, KSX1001).unwrap();
        assert!(baekmuk.glyph('가').is_some());
        // mapped, but Hanja is not drawn from Baekmuk
        assert!(baekmuk.glyph('\u{4f3d}').is_none());
        assert!(baekmuk.glyph('각').is_none());
    }
}
