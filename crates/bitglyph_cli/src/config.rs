//! Generation manifest handling (bitglyph.toml)

use anyhow::{Context, Result};
use bitglyph::source::{
    ArabicSource, ArkSource, BaekmukSource, CubicSource, FixedSource, GalmuriSource, MplusSource,
};
use bitglyph::{CellGeometry, FaceKind, GlyphSources, Language};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level manifest
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    /// Face variants to generate; all of them when empty
    #[serde(default)]
    pub faces: Vec<FaceConfig>,
    /// Directory relative paths are resolved against
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: PathBuf,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("assets")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
        }
    }
}

/// Paths of the source font assets. Every entry is optional.
#[derive(Debug, Default, Deserialize)]
pub struct SourcesConfig {
    pub fixed: Option<PathBuf>,
    pub mplus_latin: Option<PathBuf>,
    pub mplus_japanese: Option<PathBuf>,
    pub cp932: Option<PathBuf>,
    pub baekmuk: Option<PathBuf>,
    pub ksx1001: Option<PathBuf>,
    pub galmuri: Option<PathBuf>,
    pub cubic: Option<PathBuf>,
    pub ark_simplified: Option<PathBuf>,
    pub ark_traditional: Option<PathBuf>,
    pub arabic_base: Option<PathBuf>,
    pub arabic_presentation: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct FaceConfig {
    pub lang: String,
    #[serde(default)]
    pub east_asian_wide: bool,
    #[serde(default)]
    pub geometry: Geometry,
}

/// Atlas cell size
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Geometry {
    /// 12x16 cells
    #[default]
    Regular,
    /// 10x12 cells
    Small,
}

impl Geometry {
    pub fn cell(self) -> CellGeometry {
        match self {
            Geometry::Regular => CellGeometry::REGULAR,
            Geometry::Small => CellGeometry::SMALL,
        }
    }
}

impl Manifest {
    /// Load a manifest file; relative paths inside it are taken from the
    /// manifest's directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!("No manifest found at {}", path.display());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let mut manifest: Manifest = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        manifest.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();

        Ok(manifest)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.base_dir.join(path)
    }

    pub fn output_dir(&self) -> PathBuf {
        self.resolve(&self.output.dir)
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        let path = self.resolve(path);
        fs::read_to_string(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    fn read_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let path = self.resolve(path);
        fs::read(&path).with_context(|| format!("Failed to read {}", path.display()))
    }

    /// The face variants listed in the manifest with their cell geometry.
    /// Entries with an unknown language are skipped.
    pub fn faces(&self) -> Vec<(FaceKind, CellGeometry)> {
        if self.faces.is_empty() {
            return FaceKind::ALL
                .into_iter()
                .map(|kind| (kind, CellGeometry::REGULAR))
                .collect();
        }
        self.faces
            .iter()
            .filter_map(|face| match face.lang.parse::<Language>() {
                Ok(lang) => Some((
                    FaceKind::new(lang, face.east_asian_wide),
                    face.geometry.cell(),
                )),
                Err(e) => {
                    tracing::warn!("Skipping face: {}", e);
                    None
                }
            })
            .collect()
    }

    /// Build every source the manifest names.
    pub fn load_sources(&self) -> Result<GlyphSources> {
        let s = &self.sources;
        let mut sources = GlyphSources::new();

        if let Some(path) = &s.fixed {
            sources.fixed = Some(
                FixedSource::from_bdf(&self.read_text(path)?)
                    .with_context(|| format!("Invalid fixed font {}", path.display()))?,
            );
        }

        if let Some([latin, japanese, cp932]) =
            group("mplus", [&s.mplus_latin, &s.mplus_japanese, &s.cp932])?
        {
            sources.mplus = Some(
                MplusSource::from_bdf(
                    &self.read_text(latin)?,
                    &self.read_text(japanese)?,
                    &self.read_text(cp932)?,
                )
                .context("Invalid M+ font")?,
            );
        }

        if let Some([bdf, table]) = group("baekmuk", [&s.baekmuk, &s.ksx1001])? {
            sources.baekmuk = Some(
                BaekmukSource::from_bdf(&self.read_text(bdf)?, &self.read_text(table)?)
                    .context("Invalid Baekmuk font")?,
            );
        }

        if let Some(path) = &s.galmuri {
            sources.galmuri = Some(
                GalmuriSource::from_bdf(&self.read_text(path)?)
                    .with_context(|| format!("Invalid Galmuri font {}", path.display()))?,
            );
        }

        if let Some(path) = &s.cubic {
            sources.cubic = Some(
                CubicSource::from_bdf(&self.read_text(path)?)
                    .with_context(|| format!("Invalid Cubic font {}", path.display()))?,
            );
        }

        if let Some([simplified, traditional]) =
            group("ark", [&s.ark_simplified, &s.ark_traditional])?
        {
            sources.ark = Some(
                ArkSource::from_bdf(&self.read_text(simplified)?, &self.read_text(traditional)?)
                    .context("Invalid Ark font")?,
            );
        }

        if let Some([base, presentation]) =
            group("arabic", [&s.arabic_base, &s.arabic_presentation])?
        {
            if sources.fixed.is_none() {
                tracing::warn!("No fixed font; Arabic punctuation will be missing");
            }
            sources.arabic = Some(
                ArabicSource::from_png(
                    &self.read_bytes(base)?,
                    &self.read_bytes(presentation)?,
                    sources.fixed.as_ref(),
                )
                .context("Invalid Arabic glyph sheets")?,
            );
        }

        Ok(sources)
    }
}

/// All paths of a multi-file source, or none of them.
fn group<'a, const N: usize>(
    name: &str,
    paths: [&'a Option<PathBuf>; N],
) -> Result<Option<[&'a Path; N]>> {
    let given = paths.iter().filter(|p| p.is_some()).count();
    if given == 0 {
        return Ok(None);
    }
    if given != N {
        anyhow::bail!("Source `{name}` needs all of its {N} files");
    }
    let mut out = [Path::new(""); N];
    for (slot, path) in out.iter_mut().zip(paths) {
        if let Some(path) = path {
            *slot = path.as_path();
        }
    }
    Ok(Some(out))
}
