//! Per-rune source selection
//!
//! [`select`] decides which [`FontType`] supplies the glyph for a code
//! point. The decision depends only on the rune, the configuration and the
//! loaded sources, so the same inputs always give the same answer.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::source::{FontType, GlyphSources};
use crate::unicode::{self, EastAsianWidth};

/// The language a face is composed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Japanese,
    SimplifiedChinese,
    TraditionalChinese,
}

impl Language {
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Japanese => "ja",
            Language::SimplifiedChinese => "zh-Hans",
            Language::TraditionalChinese => "zh-Hant",
        }
    }

    /// Whether Ark's simplified glyphs are preferred.
    pub fn prefers_simplified(&self) -> bool {
        *self != Language::TraditionalChinese
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language `{0}` (expected ja, zh-Hans or zh-Hant)")]
pub struct UnknownLanguage(pub String);

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ja" => Ok(Language::Japanese),
            "zh-Hans" => Ok(Language::SimplifiedChinese),
            "zh-Hant" => Ok(Language::TraditionalChinese),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Selection parameters for one face variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SelectorConfig {
    /// Draw East Asian Ambiguous runes from the full-width CJK source.
    pub prefer_east_asian_wide: bool,
    pub language: Language,
}

impl SelectorConfig {
    pub fn new(language: Language, prefer_east_asian_wide: bool) -> Self {
        Self {
            prefer_east_asian_wide,
            language,
        }
    }
}

/// Pick the source for `r`, or `None` when no source claims it.
///
/// The first three rules decide by range alone, even when the chosen
/// source lacks the glyph.
pub fn select(r: char, cfg: &SelectorConfig, sources: &GlyphSources) -> Option<FontType> {
    // M+ Latin is inconsistent with the rest; misc-fixed always wins.
    if unicode::is_latin(r) {
        return Some(FontType::FixedWidth);
    }

    if unicode::is_halfwidth_katakana(r) {
        return Some(FontType::Secondary);
    }

    if unicode::east_asian_width(r) == EastAsianWidth::Ambiguous {
        if !cfg.prefer_east_asian_wide {
            return Some(FontType::FixedWidth);
        }
        // M+ has only part of Box Drawing; take all of it from Galmuri.
        if unicode::is_box_drawing(r) {
            return Some(FontType::HangulComplement);
        }
        return Some(FontType::Secondary);
    }

    let ark = FontType::SupplementalCjkB {
        simplified: cfg.language.prefers_simplified(),
    };
    let order: [FontType; 4] = match cfg.language {
        Language::Japanese => [
            FontType::FixedWidth,
            FontType::Secondary,
            FontType::SupplementalCjkA,
            ark,
        ],
        Language::SimplifiedChinese | Language::TraditionalChinese => [
            FontType::FixedWidth,
            FontType::SupplementalCjkA,
            ark,
            FontType::Secondary,
        ],
    };
    // Baekmuk carries some Hanja too, so it comes after the CJK sources.
    let fallback = [
        FontType::HangulComplement,
        FontType::Hangul,
        FontType::Arabic,
    ];

    order
        .into_iter()
        .chain(fallback)
        .find(|&font_type| sources.contains(font_type, r))
}
