//! Atlas generation
//!
//! Runs the selector over every BMP code point, draws the chosen glyph into
//! its cell and packs the canvas MSB-first. The packed bits are what
//! [`BitmapFace`](crate::face::BitmapFace) reads back at runtime.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use rustc_hash::FxHashMap;

use crate::atlas::{BitAtlas, CELLS_PER_SIDE};
use crate::error::Result;
use crate::glyph::Glyph;
use crate::selector::{select, SelectorConfig};
use crate::source::{FontType, GlyphSources};

/// Size of one atlas cell and the baseline inside it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellGeometry {
    pub width: i32,
    pub height: i32,
    /// Pixels from the top of the cell to the baseline
    pub baseline: i32,
}

impl CellGeometry {
    pub const REGULAR: CellGeometry = CellGeometry {
        width: 12,
        height: 16,
        baseline: 12,
    };

    pub const SMALL: CellGeometry = CellGeometry {
        width: 10,
        height: 12,
        baseline: 9,
    };

    pub fn atlas_width(&self) -> i32 {
        self.width * CELLS_PER_SIDE
    }

    pub fn atlas_height(&self) -> i32 {
        self.height * CELLS_PER_SIDE
    }

    /// Byte length of the packed atlas
    pub fn atlas_bytes(&self) -> usize {
        (self.atlas_width() as usize * self.atlas_height() as usize) / 8
    }
}

impl Default for CellGeometry {
    fn default() -> Self {
        Self::REGULAR
    }
}

/// A packed 1-bit atlas ready for compression
pub struct ComposedAtlas {
    pub geometry: CellGeometry,
    pub bits: Vec<u8>,
    /// Cells that received a glyph
    pub glyphs: usize,
    /// Glyph count per source that supplied one
    pub by_source: FxHashMap<FontType, usize>,
}

impl ComposedAtlas {
    fn blank(geometry: CellGeometry) -> Self {
        Self {
            geometry,
            bits: vec![0; geometry.atlas_bytes()],
            glyphs: 0,
            by_source: FxHashMap::default(),
        }
    }

    fn set(&mut self, x: i32, y: i32) {
        let idx = self.geometry.atlas_width() as usize * y as usize + x as usize;
        self.bits[idx / 8] |= 1 << (7 - idx % 8);
    }

    /// Draw `glyph` into the cell of code point `code`, clipped to the cell.
    fn draw(&mut self, code: u32, glyph: &Glyph) {
        let g = self.geometry;
        let cell_x = (code as i32 % CELLS_PER_SIDE) * g.width;
        let cell_y = (code as i32 / CELLS_PER_SIDE) * g.height;
        let (left, top) = glyph.cell_origin(g.baseline);
        for py in 0..glyph.height {
            let y = top + py;
            if !(0..g.height).contains(&y) {
                continue;
            }
            for px in 0..glyph.width {
                let x = left + px;
                if (0..g.width).contains(&x) && glyph.at(px, py) {
                    self.set(cell_x + x, cell_y + y);
                }
            }
        }
    }

    /// Per-source glyph counts as `name=count`, sorted by name.
    pub fn source_summary(&self) -> String {
        let mut counts: Vec<(&'static str, usize)> = self
            .by_source
            .iter()
            .map(|(ft, n)| (ft.name(), *n))
            .collect();
        counts.sort_unstable();
        counts
            .iter()
            .map(|(name, n)| format!("{name}={n}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn to_bit_atlas(&self) -> BitAtlas {
        BitAtlas::new(
            self.bits.clone(),
            self.geometry.atlas_width(),
            self.geometry.atlas_height(),
        )
    }

    /// Gzip the packed bits at the best compression level.
    pub fn write_gzip<W: Write>(&self, out: W) -> Result<()> {
        let mut encoder = GzEncoder::new(out, Compression::best());
        encoder.write_all(&self.bits)?;
        encoder.finish()?;
        Ok(())
    }

    pub fn encode_gzip(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.write_gzip(&mut out)?;
        Ok(out)
    }
}

/// Compose the atlas of one face variant.
pub fn compose_atlas(
    sources: &GlyphSources,
    cfg: &SelectorConfig,
    geometry: CellGeometry,
) -> ComposedAtlas {
    let mut atlas = ComposedAtlas::blank(geometry);
    for code in 0..0x10000u32 {
        let Some(r) = char::from_u32(code) else {
            continue;
        };
        let Some(font_type) = select(r, cfg, sources) else {
            continue;
        };
        let Some(glyph) = sources.lookup(font_type, r) else {
            continue;
        };
        atlas.draw(code, glyph);
        atlas.glyphs += 1;
        *atlas.by_source.entry(font_type).or_default() += 1;
    }
    tracing::debug!(
        "Composed {} glyphs for {} (east asian wide: {}): {}",
        atlas.glyphs,
        cfg.language,
        cfg.prefer_east_asian_wide,
        atlas.source_summary()
    );
    atlas
}

/// Code points whose glyphs span a full cell regardless of their East
/// Asian width, as read back by [`parse_wide_runes`](crate::assets::parse_wide_runes).
pub fn wide_runes(sources: &GlyphSources) -> Vec<char> {
    sources
        .arabic
        .as_ref()
        .map(|arabic| arabic.wide_runes())
        .unwrap_or_default()
}

pub fn format_wide_runes(runes: &[char]) -> String {
    let mut out = String::from("# Code generated by bitglyph widths. DO NOT EDIT.\n");
    out.extend(runes.iter().map(|r| format!("0x{:04x}\n", *r as u32)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::gunzip;
    use crate::source::FixedSource;

    // 'A' is 6x13 with its box 2 px below the baseline; ink on the top row
    // and in the right-most column. '!' is 14 px wide and overflows its cell.
    const FIXED: &str = "\
STARTCHAR A
ENCODING 65
BBX 6 13 0 -2
BITMAP
FC
04
ENDCHAR
STARTCHAR exclam
ENCODING 33
BBX 14 1 0 10
BITMAP
FFFC
ENDCHAR
";

    fn fixed_only() -> GlyphSources {
        GlyphSources {
            fixed: Some(FixedSource::from_bdf(FIXED).unwrap()),
            ..GlyphSources::default()
        }
    }

    #[test]
    fn test_geometry() {
        assert_eq!(CellGeometry::REGULAR.atlas_width(), 3072);
        assert_eq!(CellGeometry::REGULAR.atlas_height(), 4096);
        assert_eq!(CellGeometry::REGULAR.atlas_bytes(), 3072 * 4096 / 8);
        assert_eq!(CellGeometry::SMALL.atlas_bytes(), 2560 * 3072 / 8);
    }

    #[test]
    fn test_glyph_placement() {
        let composed = compose_atlas(&fixed_only(), &SelectorConfig::default(), CellGeometry::REGULAR);
        assert_eq!(composed.glyphs, 2);
        assert_eq!(composed.by_source.get(&FontType::FixedWidth), Some(&2));
        assert_eq!(composed.source_summary(), "fixed=2");
        let atlas = composed.to_bit_atlas();

        // top of 'A' lands on row 12 - 13 + 2 = 1 of cell (65, 0)
        let x0 = 65 * 12;
        assert!(!atlas.at(x0, 0));
        for px in 0..6 {
            assert!(atlas.at(x0 + px, 1), "column {px}");
        }
        assert!(atlas.at(x0 + 5, 2));
        assert!(!atlas.at(x0 + 4, 2));
    }

    #[test]
    fn test_ink_is_clipped_to_cell() {
        let composed = compose_atlas(&fixed_only(), &SelectorConfig::default(), CellGeometry::REGULAR);
        let atlas = composed.to_bit_atlas();
        // '!' sits on row 12 - 1 - 10 = 1 of cell (33, 0)
        let x0 = 33 * 12;
        for px in 0..12 {
            assert!(atlas.at(x0 + px, 1), "column {px}");
        }
        // nothing spills into cell 34
        assert!(!atlas.at(x0 + 12, 1));
        assert!(!atlas.at(x0 + 13, 1));
    }

    #[test]
    fn test_gzip_round_trip() {
        let composed = compose_atlas(&fixed_only(), &SelectorConfig::default(), CellGeometry::SMALL);
        let encoded = composed.encode_gzip().unwrap();
        assert!(encoded.len() < composed.bits.len());
        assert_eq!(gunzip(&encoded).unwrap(), composed.bits);
    }

    #[test]
    fn test_format_wide_runes() {
        let text = format_wide_runes(&['\u{0629}', '\u{fefb}']);
        assert_eq!(
            text,
            "# Code generated by bitglyph widths. DO NOT EDIT.\n0x0629\n0xfefb\n"
        );
        assert!(wide_runes(&GlyphSources::default()).is_empty());
    }
}
