//! Unicode range classification
//!
//! Block tables used to route code points between glyph sources, plus thin
//! wrappers over the ICU property data the face and the shaper need.

use icu_properties::props::{EastAsianWidth as IcuEastAsianWidth, GeneralCategory};
use icu_properties::CodePointMapData;

/// East Asian Width class (UAX #11)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EastAsianWidth {
    Neutral,
    Ambiguous,
    Halfwidth,
    Fullwidth,
    Narrow,
    Wide,
}

/// Look up the East Asian Width class of `c`.
pub fn east_asian_width(c: char) -> EastAsianWidth {
    let w = CodePointMapData::<IcuEastAsianWidth>::new().get(c);
    if w == IcuEastAsianWidth::Ambiguous {
        EastAsianWidth::Ambiguous
    } else if w == IcuEastAsianWidth::Halfwidth {
        EastAsianWidth::Halfwidth
    } else if w == IcuEastAsianWidth::Fullwidth {
        EastAsianWidth::Fullwidth
    } else if w == IcuEastAsianWidth::Narrow {
        EastAsianWidth::Narrow
    } else if w == IcuEastAsianWidth::Wide {
        EastAsianWidth::Wide
    } else {
        EastAsianWidth::Neutral
    }
}

/// Whether `c` has the general category Mn (nonspacing mark).
pub fn is_nonspacing_mark(c: char) -> bool {
    CodePointMapData::<GeneralCategory>::new().get(c) == GeneralCategory::NonspacingMark
}

pub fn is_latin(c: char) -> bool {
    matches!(
        c as u32,
        // Basic Latin .. Spacing Modifier Letters
        0x0000..=0x02ff
        // Phonetic Extensions, Phonetic Extensions Supplement
        | 0x1d00..=0x1dbf
        // Latin Extended Additional
        | 0x1e00..=0x1eff
        // Superscripts and Subscripts
        | 0x2070..=0x209f
        // Latin Extended-C
        | 0x2c60..=0x2c7f
        // Latin Extended-D
        | 0xa720..=0xa7ff
        // Latin Extended-E
        | 0xab30..=0xab6f
        // Latin ligatures in Alphabetic Presentation Forms
        | 0xfb00..=0xfb06
    )
}

pub fn is_greek(c: char) -> bool {
    matches!(
        c as u32,
        0x0370..=0x03ff | 0x1d00..=0x1dbf | 0x1f00..=0x1fff | 0xab30..=0xab6f
    )
}

pub fn is_cyrillic(c: char) -> bool {
    matches!(
        c as u32,
        0x0400..=0x052f
            | 0x1c80..=0x1c8f
            | 0x1d00..=0x1d7f
            | 0x2de0..=0x2dff
            | 0xa640..=0xa69f
            // Combining Half Marks
            | 0xfe20..=0xfe2f
    )
}

pub fn is_armenian(c: char) -> bool {
    matches!(c as u32, 0x0530..=0x058f | 0xfb00..=0xfb4f)
}

pub fn is_hebrew(c: char) -> bool {
    matches!(c as u32, 0x0590..=0x05ff | 0xfb00..=0xfb4f)
}

pub fn is_thai(c: char) -> bool {
    matches!(c as u32, 0x0e00..=0x0e7f)
}

pub fn is_georgian(c: char) -> bool {
    matches!(c as u32, 0x10a0..=0x10ff | 0x1c90..=0x1cbf | 0x2d00..=0x2d2f)
}

pub fn is_ogham(c: char) -> bool {
    matches!(c as u32, 0x1680..=0x169f)
}

pub fn is_runic(c: char) -> bool {
    matches!(c as u32, 0x16a0..=0x16ff)
}

pub fn is_general_punctuation(c: char) -> bool {
    matches!(c as u32, 0x2000..=0x206f)
}

pub fn is_supplemental_punctuation(c: char) -> bool {
    matches!(c as u32, 0x2e00..=0x2e7f)
}

/// Scripts the misc-fixed font is authoritative for.
pub fn is_european(c: char) -> bool {
    is_latin(c)
        || is_greek(c)
        || is_cyrillic(c)
        || is_armenian(c)
        || is_georgian(c)
        || is_ogham(c)
        || is_runic(c)
        || is_general_punctuation(c)
        || is_supplemental_punctuation(c)
}

/// CJK Unified Ideographs and Extension A.
pub fn is_cjk_unified_ideograph(c: char) -> bool {
    matches!(c as u32, 0x4e00..=0x9fff | 0x3400..=0x4dbf)
}

pub fn is_box_drawing(c: char) -> bool {
    matches!(c as u32, 0x2500..=0x257f)
}

pub fn is_halfwidth_katakana(c: char) -> bool {
    matches!(c as u32, 0xff65..=0xff9f)
}

/// Halfwidth Katakana/Hangul and the halfwidth symbol variants of the
/// Halfwidth and Fullwidth Forms block.
pub fn is_halfwidth_form(c: char) -> bool {
    matches!(c as u32, 0xff61..=0xffdc | 0xffe8..=0xffee)
}
