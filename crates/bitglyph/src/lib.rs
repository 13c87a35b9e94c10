//! Composed 1-bit bitmap fonts
//!
//! This crate provides:
//! - Glyph sources read from BDF fonts and PNG glyph sheets
//! - Per-code-point font selection across those sources
//! - Atlas composition for the whole Basic Multilingual Plane
//! - Runtime faces that draw from a packed atlas, loaded on first use
//! - Arabic contextual shaping into presentation forms

pub mod arabic;
pub mod assets;
pub mod atlas;
pub mod bdf;
pub mod compose;
pub mod error;
pub mod face;
pub mod glyph;
pub mod lazy;
pub mod selector;
pub mod source;
pub mod unicode;
pub mod uniconv;

pub use arabic::{contextual_forms, presentation_forms, ArabicForm, Direction};
pub use assets::{AssetLoader, DirAssets, FaceKind, MemoryAssets};
pub use atlas::{BitAtlas, Point, Rect};
pub use compose::{compose_atlas, CellGeometry, ComposedAtlas};
pub use error::{GlyphError, Result};
pub use face::{measure_string, BitmapFace, Dot, Face, GlyphDraw, Metrics, TraditionalFace};
pub use glyph::Glyph;
pub use lazy::{open_face, open_face_with_geometry, LazyFace, LazyState};
pub use selector::{select, Language, SelectorConfig};
pub use source::{FontType, GlyphSources};
