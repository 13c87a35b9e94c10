//! Glyph sources
//!
//! Each source is an immutable `char -> Glyph` table built once from its
//! asset files. [`GlyphSources`] holds the whole closed set and dispatches
//! on [`FontType`].

mod arabic;
mod baekmuk;
mod cjk;
mod fixed;
mod galmuri;
mod mplus;

pub use arabic::ArabicSource;
pub use baekmuk::BaekmukSource;
pub use cjk::{ArkSource, CubicSource};
pub use fixed::FixedSource;
pub use galmuri::GalmuriSource;
pub use mplus::{jis_to_shift_jis, MplusSource};

use rustc_hash::FxHashMap;

use crate::glyph::Glyph;

/// Which source supplies a glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontType {
    /// misc-fixed, authoritative for Latin
    FixedWidth,
    /// M+ bitmap fonts
    Secondary,
    /// Cubic 11
    SupplementalCjkA,
    /// Ark Pixel, simplified or traditional glyph shapes preferred
    SupplementalCjkB { simplified: bool },
    /// Baekmuk Gulim
    Hangul,
    /// Galmuri Mono
    HangulComplement,
    Arabic,
}

impl FontType {
    pub fn name(&self) -> &'static str {
        match self {
            FontType::FixedWidth => "fixed",
            FontType::Secondary => "mplus",
            FontType::SupplementalCjkA => "cubic",
            FontType::SupplementalCjkB { .. } => "ark",
            FontType::Hangul => "baekmuk",
            FontType::HangulComplement => "galmuri",
            FontType::Arabic => "arabic",
        }
    }
}

pub(crate) type GlyphMap = FxHashMap<char, Glyph>;

/// Map BDF encodings that are already Unicode scalars, dropping the rest.
pub(crate) fn unicode_glyphs(chars: Vec<crate::bdf::BdfChar>, shift_y: i32) -> GlyphMap {
    chars
        .into_iter()
        .filter_map(|c| {
            let r = char::from_u32(u32::try_from(c.encoding).ok()?)?;
            Some((r, c.glyph.with_shift(0, shift_y)))
        })
        .collect()
}

/// The full set of loaded sources. A source that was not loaded never
/// claims a glyph.
#[derive(Default)]
pub struct GlyphSources {
    pub fixed: Option<FixedSource>,
    pub mplus: Option<MplusSource>,
    pub cubic: Option<CubicSource>,
    pub ark: Option<ArkSource>,
    pub baekmuk: Option<BaekmukSource>,
    pub galmuri: Option<GalmuriSource>,
    pub arabic: Option<ArabicSource>,
}

impl GlyphSources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up `r` in the source named by `font_type`.
    pub fn lookup(&self, font_type: FontType, r: char) -> Option<&Glyph> {
        match font_type {
            FontType::FixedWidth => self.fixed.as_ref()?.glyph(r),
            FontType::Secondary => self.mplus.as_ref()?.glyph(r),
            FontType::SupplementalCjkA => self.cubic.as_ref()?.glyph(r),
            FontType::SupplementalCjkB { simplified } => self.ark.as_ref()?.glyph(r, simplified),
            FontType::Hangul => self.baekmuk.as_ref()?.glyph(r),
            FontType::HangulComplement => self.galmuri.as_ref()?.glyph(r),
            FontType::Arabic => self.arabic.as_ref()?.glyph(r),
        }
    }

    pub fn contains(&self, font_type: FontType, r: char) -> bool {
        self.lookup(font_type, r).is_some()
    }
}
