use thiserror::Error;

/// Errors raised while loading glyph assets.
///
/// Lookups never produce these: a missing glyph is `None`.
#[derive(Error, Debug)]
pub enum GlyphError {
    #[error("bdf: line {line}: {msg}")]
    Bdf { line: usize, msg: String },

    #[error("conversion table: line {line}: {msg}")]
    ConversionTable { line: usize, msg: String },

    #[error("{source_name}: unexpected char: {code:#x}")]
    UnexpectedChar {
        source_name: &'static str,
        code: u32,
    },

    #[error("mplus: invalid char code {jis:#x} (Shift_JIS: {shift_jis:#x})")]
    UnmappedCode { jis: u32, shift_jis: u32 },

    #[error("{source_name}: invalid glyph for rune {code:#x}")]
    InvalidGlyph {
        source_name: &'static str,
        code: u32,
    },

    #[error("{source_name}: required glyph {code:#x} not found")]
    MissingGlyph {
        source_name: &'static str,
        code: u32,
    },

    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error("atlas {name}: expected {expected} bytes, got {actual}")]
    AtlasSize {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, GlyphError>;
