use crate::bdf;
use crate::error::{GlyphError, Result};
use crate::glyph::Glyph;
use crate::unicode;
use crate::uniconv;

use super::{unicode_glyphs, GlyphMap};

const JIS_HIRAGANA_VU: u32 = 0x2474;
const HIRAGANA_VU: char = '\u{3094}';
const WAVE_DASH: char = '\u{301c}';
const FULLWIDTH_TILDE: char = '\u{ff5e}';

/// Convert a JIS X 0208 row/cell code to Shift_JIS.
pub fn jis_to_shift_jis(jis: u32) -> u32 {
    let mut upper = ((jis >> 8) as u8).wrapping_sub(0x21);
    let mut lower = jis as u8;
    if upper & 1 == 0 {
        lower = lower.wrapping_add(0x1f);
        if lower >= 0x7f {
            lower = lower.wrapping_add(1);
        }
    } else {
        lower = lower.wrapping_add(0x7e);
    }
    upper >>= 1;
    upper = if upper <= 0x1e {
        upper + 0x81
    } else {
        upper.wrapping_add(0xc1)
    };
    (u32::from(upper) << 8) | u32::from(lower)
}

/// Reject glyphs that touch the right edge but not the left one; those
/// were designed for a wider cell. Box drawing is exempt.
fn is_valid_glyph(r: char, g: &Glyph) -> bool {
    if unicode::is_box_drawing(r) {
        return true;
    }
    let left = (0..g.height).any(|y| g.at(0, y));
    let right = (0..g.height).any(|y| g.at(g.width - 1, y));
    left || !right
}

/// M+ f12r (Latin) and j12r (JIS X 0208)
pub struct MplusSource {
    glyphs: GlyphMap,
}

impl MplusSource {
    /// `cp932` is the tab separated Shift_JIS to Unicode table.
    pub fn from_bdf(latin: &str, japanese: &str, cp932: &str) -> Result<Self> {
        let table = uniconv::parse(cp932, "\t")?;
        let mut glyphs = unicode_glyphs(bdf::parse(latin)?, 0);

        for c in bdf::parse(japanese)? {
            let jis = c.encoding as u32;
            let r = if jis == JIS_HIRAGANA_VU {
                HIRAGANA_VU
            } else {
                let shift_jis = jis_to_shift_jis(jis);
                *table
                    .get(&shift_jis)
                    .ok_or(GlyphError::UnmappedCode { jis, shift_jis })?
            };
            // f12r wins for Latin glyphs
            if glyphs.contains_key(&r) {
                continue;
            }
            if !is_valid_glyph(r, &c.glyph) {
                return Err(GlyphError::InvalidGlyph {
                    source_name: "mplus",
                    code: r as u32,
                });
            }
            glyphs.insert(r, c.glyph);
        }

        let tilde = glyphs
            .get(&FULLWIDTH_TILDE)
            .cloned()
            .ok_or(GlyphError::MissingGlyph {
                source_name: "mplus",
                code: FULLWIDTH_TILDE as u32,
            })?;
        glyphs.insert(WAVE_DASH, tilde);

        tracing::debug!("Loaded {} M+ glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    pub fn glyph(&self, r: char) -> Option<&Glyph> {
        self.glyphs.get(&r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 12x12, one column of ink at `column`
    fn bar(encoding: u32, column: u32) -> String {
        let row = format!("{:04X}", 0x8000u32 >> column);
        let rows: String = (0..12).map(|_| format!("{row}\n")).collect();
        format!("STARTCHAR c{encoding:X}\nENCODING {encoding}\nBBX 12 12 0 -2\nBITMAP\n{rows}ENDCHAR\n")
    }

    const CP932: &str = "\
0x8160\t0x301C\t#WAVE DASH
0x8161\t0x2016\t#DOUBLE VERTICAL LINE
0x8162\t0x2225\t#PARALLEL TO
0x82A0\t0x3042\t#HIRAGANA LETTER A
0x889F\t0x4E9C\t#CJK UNIFIED IDEOGRAPH
";

    #[test]
    fn test_jis_to_shift_jis() {
        assert_eq!(jis_to_shift_jis(0x2121), 0x8140);
        assert_eq!(jis_to_shift_jis(0x2422), 0x82a0);
        assert_eq!(jis_to_shift_jis(0x2141), 0x8160);
        assert_eq!(jis_to_shift_jis(0x3021), 0x889f);
        assert_eq!(jis_to_shift_jis(0x5e21), 0x9f9f);
        assert_eq!(jis_to_shift_jis(0x5f21), 0xe040);
        assert_eq!(jis_to_shift_jis(0x6021), 0xe09f);
    }

    #[test]
    fn test_loads_and_aliases_wave_dash() {
        let latin = bar(0xff5e, 0) + &bar('A' as u32, 0);
        let japanese = bar(0x2422, 0) + &bar(0x3021, 0) + &bar(0x2474, 0);
        let mplus = MplusSource::from_bdf(&latin, &japanese, CP932).unwrap();
        assert!(mplus.glyph('\u{3042}').is_some());
        assert!(mplus.glyph('\u{4e9c}').is_some());
        assert!(mplus.glyph(HIRAGANA_VU).is_some());
        assert_eq!(mplus.glyph(WAVE_DASH), mplus.glyph(FULLWIDTH_TILDE));
    }

    #[test]
    fn test_latin_wins_on_collision() {
        let latin = bar(0xff5e, 0) + &bar(0x3042, 0);
        // right-edge-only, so it would be rejected if it were considered
        let japanese = bar(0x2422, 11);
        let mplus = MplusSource::from_bdf(&latin, &japanese, CP932).unwrap();
        assert!(mplus.glyph('\u{3042}').unwrap().at(0, 0));
    }

    #[test]
    fn test_unmapped_code_is_error() {
        let latin = bar(0xff5e, 0);
        let japanese = bar(0x2b21, 0);
        match MplusSource::from_bdf(&latin, &japanese, CP932) {
            Err(GlyphError::UnmappedCode { jis, shift_jis }) => {
                assert_eq!(jis, 0x2b21);
                assert_eq!(shift_jis, jis_to_shift_jis(0x2b21));
            }
            Err(e) => panic!("unexpected error: {e}"),
            Ok(_) => panic!("unmapped JIS code must be rejected"),
        }
    }

    #[test]
    fn test_right_edge_glyph_is_error() {
        let latin = bar(0xff5e, 0);
        let japanese = bar(0x2422, 11);
        assert!(matches!(
            MplusSource::from_bdf(&latin, &japanese, CP932),
            Err(GlyphError::InvalidGlyph { code: 0x3042, .. })
        ));
    }

    #[test]
    fn test_missing_fullwidth_tilde_is_error() {
        let latin = bar('A' as u32, 0);
        assert!(matches!(
            MplusSource::from_bdf(&latin, "", CP932),
            Err(GlyphError::MissingGlyph { code: 0xff5e, .. })
        ));
    }
}
