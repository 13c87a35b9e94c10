use crate::bdf;
use crate::error::Result;
use crate::glyph::Glyph;

use super::{unicode_glyphs, GlyphMap};

/// Galmuri Mono 11
pub struct GalmuriSource {
    glyphs: GlyphMap,
}

impl GalmuriSource {
    pub fn from_bdf(src: &str) -> Result<Self> {
        let glyphs = unicode_glyphs(bdf::parse(src)?, -1);
        tracing::debug!("Loaded {} Galmuri glyphs", glyphs.len());
        Ok(Self { glyphs })
    }

    pub fn glyph(&self, r: char) -> Option<&Glyph> {
        self.glyphs.get(&r)
    }
}
