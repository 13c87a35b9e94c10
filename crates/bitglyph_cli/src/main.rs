//! bitglyph CLI
//!
//! Commands:
//! - `bitglyph gen` - Compose and compress the face atlases of a manifest
//! - `bitglyph widths` - Write the wide-rune table
//! - `bitglyph shape` - Print Arabic presentation forms in visual order
//! - `bitglyph render` - Render a line of text to a PNG

mod config;
mod render;

use anyhow::{Context, Result};
use bitglyph::compose::{format_wide_runes, wide_runes};
use bitglyph::{
    compose_atlas, open_face_with_geometry, presentation_forms, DirAssets, Direction, FaceKind,
};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::config::{Geometry, Manifest};

#[derive(Parser)]
#[command(name = "bitglyph")]
#[command(author, version, about = "Composed bitmap font faces", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose the atlas of every face in the manifest
    Gen {
        /// Manifest file
        #[arg(short, long, default_value = "bitglyph.toml")]
        manifest: PathBuf,
    },

    /// Write the table of runes that always take a full cell
    Widths {
        /// Manifest file
        #[arg(short, long, default_value = "bitglyph.toml")]
        manifest: PathBuf,
    },

    /// Shape text into presentation forms
    Shape {
        /// Lay runs out right to left
        #[arg(long)]
        rtl: bool,

        text: String,
    },

    /// Render one line of text to a PNG
    Render {
        /// Directory holding the generated assets
        #[arg(short, long, default_value = "assets")]
        assets: PathBuf,

        /// Face variant (ja, ja_ea, zhhans, zhhans_ea, zhhant, zhhant_ea)
        #[arg(short, long, default_value = "ja")]
        face: FaceKind,

        /// Cell size the atlas was composed with
        #[arg(short, long, value_enum, default_value_t = Geometry::Regular)]
        geometry: Geometry,

        /// Lay runs out right to left
        #[arg(long)]
        rtl: bool,

        /// Output PNG
        #[arg(short, long, default_value = "preview.png")]
        output: PathBuf,

        text: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Gen { manifest } => cmd_gen(manifest),
        Commands::Widths { manifest } => cmd_widths(manifest),
        Commands::Shape { rtl, text } => cmd_shape(rtl, &text),
        Commands::Render {
            assets,
            face,
            geometry,
            rtl,
            output,
            text,
        } => cmd_render(assets, face, geometry, rtl, output, &text),
    }
}

fn direction(rtl: bool) -> Direction {
    if rtl {
        Direction::RightToLeft
    } else {
        Direction::LeftToRight
    }
}

fn cmd_gen(manifest_path: PathBuf) -> Result<()> {
    let manifest = Manifest::load(&manifest_path)?;
    let sources = manifest.load_sources()?;
    let out_dir = manifest.output_dir();
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    for (kind, geometry) in manifest.faces() {
        let composed = compose_atlas(&sources, &kind.selector_config(), geometry);
        let path = out_dir.join(kind.asset_name_for(geometry));
        let file = fs::File::create(&path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        composed
            .write_gzip(std::io::BufWriter::new(file))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            "Wrote {} ({} glyphs: {})",
            path.display(),
            composed.glyphs,
            composed.source_summary()
        );
    }
    Ok(())
}

fn cmd_widths(manifest_path: PathBuf) -> Result<()> {
    let manifest = Manifest::load(&manifest_path)?;
    let sources = manifest.load_sources()?;
    let out_dir = manifest.output_dir();
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let runes = wide_runes(&sources);
    let path = out_dir.join(bitglyph::assets::WIDTHS_ASSET);
    fs::write(&path, format_wide_runes(&runes))
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote {} ({} runes)", path.display(), runes.len());
    Ok(())
}

fn cmd_shape(rtl: bool, text: &str) -> Result<()> {
    let shaped = presentation_forms(text, direction(rtl), "");
    println!("{shaped}");
    let codes: Vec<String> = shaped.chars().map(|c| format!("U+{:04X}", c as u32)).collect();
    println!("{}", codes.join(" "));
    Ok(())
}

fn cmd_render(
    assets: PathBuf,
    kind: FaceKind,
    geometry: Geometry,
    rtl: bool,
    output: PathBuf,
    text: &str,
) -> Result<()> {
    let cell = geometry.cell();
    let atlas = assets.join(kind.asset_name_for(cell));
    if !atlas.is_file() {
        anyhow::bail!(
            "No atlas at {}. Run `bitglyph gen` first.",
            atlas.display()
        );
    }
    let face = open_face_with_geometry(kind, cell, Arc::new(DirAssets::new(&assets)));
    let shaped = presentation_forms(text, direction(rtl), kind.language().tag());
    let img = render::render_line(face.as_ref(), &shaped, 4);
    img.save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!(
        "Rendered {}x{} preview with face {} to {}",
        img.width(),
        img.height(),
        kind,
        output.display()
    );
    Ok(())
}
