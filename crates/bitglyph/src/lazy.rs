//! Faces whose atlas is decompressed on first use

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use crate::assets::{gunzip, load_wide_runes, AssetLoader, FaceKind};
use crate::atlas::{BitAtlas, Rect};
use crate::compose::CellGeometry;
use crate::error::{GlyphError, Result};
use crate::face::{BitmapFace, Dot, Face, GlyphDraw, Metrics, TraditionalFace};

/// Initialization progress of a [`LazyFace`]
///
/// States only move forward; `Ready` and `Failed` are final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyState {
    Uninitialized,
    Initializing,
    Ready,
    /// The load failed; every query panics with the stored error.
    Failed,
}

/// A [`BitmapFace`] built from its asset the first time it is queried
///
/// Concurrent first queries block until the single load finishes. The
/// load runs at most once: a failure is stored and every query panics with
/// it.
pub struct LazyFace {
    asset: String,
    east_asian_wide: bool,
    geometry: CellGeometry,
    loader: Arc<dyn AssetLoader>,
    started: AtomicBool,
    face: OnceLock<std::result::Result<BitmapFace, String>>,
}

impl LazyFace {
    pub fn new(
        asset: impl Into<String>,
        east_asian_wide: bool,
        loader: Arc<dyn AssetLoader>,
    ) -> Self {
        Self {
            asset: asset.into(),
            east_asian_wide,
            geometry: CellGeometry::REGULAR,
            loader,
            started: AtomicBool::new(false),
            face: OnceLock::new(),
        }
    }

    pub fn for_kind(kind: FaceKind, loader: Arc<dyn AssetLoader>) -> Self {
        Self::for_kind_with_geometry(kind, CellGeometry::REGULAR, loader)
    }

    /// A face for `kind` reading the atlas composed with `geometry`.
    pub fn for_kind_with_geometry(
        kind: FaceKind,
        geometry: CellGeometry,
        loader: Arc<dyn AssetLoader>,
    ) -> Self {
        Self::new(kind.asset_name_for(geometry), kind.east_asian_wide(), loader)
            .with_geometry(geometry)
    }

    pub fn with_geometry(mut self, geometry: CellGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    pub fn state(&self) -> LazyState {
        match self.face.get() {
            Some(Ok(_)) => LazyState::Ready,
            Some(Err(_)) => LazyState::Failed,
            None => self.pending_state(),
        }
    }

    fn pending_state(&self) -> LazyState {
        if self.started.load(Ordering::Acquire) {
            LazyState::Initializing
        } else {
            LazyState::Uninitialized
        }
    }

    /// Load the face now instead of on the first query.
    pub fn preload(&self) {
        self.face();
    }

    fn face(&self) -> &BitmapFace {
        let loaded = self.face.get_or_init(|| {
            self.started.store(true, Ordering::Release);
            self.load().map_err(|e| {
                tracing::error!("Failed to load face {}: {}", self.asset, e);
                e.to_string()
            })
        });
        match loaded {
            Ok(face) => face,
            Err(e) => panic!("bitglyph: failed to load face {}: {e}", self.asset),
        }
    }

    fn load(&self) -> Result<BitmapFace> {
        let compressed = self.loader.load(&self.asset)?;
        let bits = gunzip(&compressed)?;
        let expected = self.geometry.atlas_bytes();
        if bits.len() != expected {
            return Err(GlyphError::AtlasSize {
                name: self.asset.clone(),
                expected,
                actual: bits.len(),
            });
        }
        let wide_runes = load_wide_runes(self.loader.as_ref())?;
        tracing::debug!(
            "Initialized face {} ({} wide runes)",
            self.asset,
            wide_runes.len()
        );
        let atlas = BitAtlas::new(
            bits,
            self.geometry.atlas_width(),
            self.geometry.atlas_height(),
        );
        Ok(
            BitmapFace::new(atlas, 0, self.geometry.baseline, self.east_asian_wide)
                .with_wide_runes(wide_runes),
        )
    }
}

impl Face for LazyFace {
    fn glyph(&self, dot: Dot, r: char) -> Option<GlyphDraw> {
        self.face().glyph(dot, r)
    }

    fn glyph_bounds(&self, r: char) -> Option<(Rect, i32)> {
        self.face().glyph_bounds(r)
    }

    fn glyph_advance(&self, r: char) -> Option<i32> {
        self.face().glyph_advance(r)
    }

    fn kern(&self, r0: char, r1: char) -> i32 {
        self.face().kern(r0, r1)
    }

    fn metrics(&self) -> Metrics {
        self.face().metrics()
    }
}

/// A lazily loaded face for a shipped variant, with the Traditional
/// Chinese punctuation placement where it applies.
pub fn open_face(kind: FaceKind, loader: Arc<dyn AssetLoader>) -> Box<dyn Face> {
    open_face_with_geometry(kind, CellGeometry::REGULAR, loader)
}

pub fn open_face_with_geometry(
    kind: FaceKind,
    geometry: CellGeometry,
    loader: Arc<dyn AssetLoader>,
) -> Box<dyn Face> {
    let face = LazyFace::for_kind_with_geometry(kind, geometry, loader);
    if kind.traditional_punctuation() {
        Box::new(TraditionalFace::new(face))
    } else {
        Box::new(face)
    }
}
