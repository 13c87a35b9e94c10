//! Asset loading
//!
//! Faces read their compressed atlas and wide-rune table through an
//! [`AssetLoader`], so the same code serves files on disk, embedded bytes
//! and test fixtures.

use std::fmt;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use flate2::read::GzDecoder;
use rustc_hash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::compose::CellGeometry;
use crate::error::{GlyphError, Result};
use crate::selector::{Language, SelectorConfig};

/// Name of the optional wide-rune table
pub const WIDTHS_ASSET: &str = "widths.txt";

/// Source of named asset blobs
pub trait AssetLoader: Send + Sync {
    /// Read the asset named `name`. A missing asset is
    /// [`GlyphError::AssetNotFound`].
    fn load(&self, name: &str) -> Result<Vec<u8>>;
}

/// Assets stored as files under a root directory
#[derive(Debug, Clone)]
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetLoader for DirAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        let path = self.root.join(name);
        match std::fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!("Read asset {} ({} bytes)", path.display(), bytes.len());
                Ok(bytes)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(GlyphError::AssetNotFound(name.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Assets held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    assets: FxHashMap<String, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(name.into(), bytes.into());
    }

    pub fn with(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl AssetLoader for MemoryAssets {
    fn load(&self, name: &str) -> Result<Vec<u8>> {
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| GlyphError::AssetNotFound(name.to_string()))
    }
}

/// Decompress a gzip stream.
pub fn gunzip(compressed: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    GzDecoder::new(compressed).read_to_end(&mut out)?;
    Ok(out)
}

/// Parse a wide-rune table: one `0x`-prefixed code point per line, `#`
/// starts a comment.
pub fn parse_wide_runes(src: &str) -> Result<FxHashSet<char>> {
    let mut runes = FxHashSet::default();
    for (idx, raw) in src.lines().enumerate() {
        let line = match raw.find('#') {
            Some(i) => &raw[..i],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }
        let bad = || GlyphError::ConversionTable {
            line: idx + 1,
            msg: format!("invalid code point `{line}`"),
        };
        let hex = line.strip_prefix("0x").ok_or_else(bad)?;
        let code = u32::from_str_radix(hex, 16).map_err(|_| bad())?;
        runes.insert(char::from_u32(code).ok_or_else(bad)?);
    }
    Ok(runes)
}

/// Load the wide-rune table; an absent table is empty.
pub fn load_wide_runes(loader: &dyn AssetLoader) -> Result<FxHashSet<char>> {
    match loader.load(WIDTHS_ASSET) {
        Ok(bytes) => {
            let src = String::from_utf8(bytes).map_err(|e| GlyphError::ConversionTable {
                line: 1 + e.as_bytes()[..e.utf8_error().valid_up_to()]
                    .iter()
                    .filter(|&&b| b == b'\n')
                    .count(),
                msg: format!("{WIDTHS_ASSET} is not valid UTF-8"),
            })?;
            parse_wide_runes(&src)
        }
        Err(GlyphError::AssetNotFound(_)) => Ok(FxHashSet::default()),
        Err(e) => Err(e),
    }
}

/// The shipped face variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceKind {
    Ja,
    JaEa,
    ZhHans,
    ZhHansEa,
    ZhHant,
    ZhHantEa,
}

impl FaceKind {
    pub const ALL: [FaceKind; 6] = [
        FaceKind::Ja,
        FaceKind::JaEa,
        FaceKind::ZhHans,
        FaceKind::ZhHansEa,
        FaceKind::ZhHant,
        FaceKind::ZhHantEa,
    ];

    pub fn new(language: Language, east_asian_wide: bool) -> Self {
        match (language, east_asian_wide) {
            (Language::Japanese, false) => FaceKind::Ja,
            (Language::Japanese, true) => FaceKind::JaEa,
            (Language::SimplifiedChinese, false) => FaceKind::ZhHans,
            (Language::SimplifiedChinese, true) => FaceKind::ZhHansEa,
            (Language::TraditionalChinese, false) => FaceKind::ZhHant,
            (Language::TraditionalChinese, true) => FaceKind::ZhHantEa,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FaceKind::Ja => "ja",
            FaceKind::JaEa => "ja_ea",
            FaceKind::ZhHans => "zhhans",
            FaceKind::ZhHansEa => "zhhans_ea",
            FaceKind::ZhHant => "zhhant",
            FaceKind::ZhHantEa => "zhhant_ea",
        }
    }

    /// File name of the compressed atlas
    pub fn asset_name(&self) -> String {
        format!("face_{}.bin", self.name())
    }

    /// File name of the compressed atlas composed with `geometry`. The
    /// regular geometry keeps the plain name.
    pub fn asset_name_for(&self, geometry: CellGeometry) -> String {
        if geometry == CellGeometry::REGULAR {
            self.asset_name()
        } else {
            format!(
                "face_{}_{}x{}.bin",
                self.name(),
                geometry.width,
                geometry.height
            )
        }
    }

    pub fn language(&self) -> Language {
        match self {
            FaceKind::Ja | FaceKind::JaEa => Language::Japanese,
            FaceKind::ZhHans | FaceKind::ZhHansEa => Language::SimplifiedChinese,
            FaceKind::ZhHant | FaceKind::ZhHantEa => Language::TraditionalChinese,
        }
    }

    pub fn east_asian_wide(&self) -> bool {
        matches!(self, FaceKind::JaEa | FaceKind::ZhHansEa | FaceKind::ZhHantEa)
    }

    /// Whether CJK full stops and commas are moved to the traditional
    /// centered position.
    pub fn traditional_punctuation(&self) -> bool {
        self.language() == Language::TraditionalChinese
    }

    pub fn selector_config(&self) -> SelectorConfig {
        SelectorConfig::new(self.language(), self.east_asian_wide())
    }
}

impl fmt::Display for FaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown face `{0}`")]
pub struct UnknownFaceKind(pub String);

impl FromStr for FaceKind {
    type Err = UnknownFaceKind;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        FaceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| UnknownFaceKind(s.to_string()))
    }
}
