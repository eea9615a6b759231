use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use annotation_dither::{AnnotationDitherer, DitherAlgorithm, Palette};
use mask_import::models::{ImportConfig, Mask, MaskKind};
use mask_import::rendering::write_preview;
use mask_import::services::{MaskImporter, TileGrid};

#[derive(Parser)]
#[command(name = "mask-import")]
#[command(about = "Import heightmap and annotation masks into tiled terrain")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply a mask to an empty tile grid and report what changed
    Import {
        /// Mask PNG file
        #[arg(short, long)]
        mask: PathBuf,

        /// Import configuration (YAML)
        #[arg(short, long)]
        config: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write the mask reduced to the annotation palette as an indexed PNG
    Preview {
        /// Mask PNG file (palette, RGB or RGBA)
        #[arg(short, long)]
        mask: PathBuf,

        /// Output PNG file path
        #[arg(short, long)]
        output: PathBuf,

        /// floyd-steinberg, atkinson, sierra-lite or none
        #[arg(short, long, default_value = "floyd-steinberg")]
        algorithm: String,

        /// Scan every row left to right
        #[arg(long)]
        no_serpentine: bool,
    },
    /// List the annotation palette
    Palette,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mask_import=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Import { mask, config, json } => run_import_command(&mask, &config, json),
        Commands::Preview {
            mask,
            output,
            algorithm,
            no_serpentine,
        } => run_preview_command(&mask, &output, &algorithm, !no_serpentine),
        Commands::Palette => {
            run_palette_command();
            Ok(())
        }
    }
}

/// Run one configured import against an in-memory grid
fn run_import_command(mask_path: &Path, config_path: &Path, json: bool) -> anyhow::Result<()> {
    let config = ImportConfig::load(config_path)
        .with_context(|| format!("Failed to load config {}", config_path.display()))?;
    let mask = Mask::open(mask_path)
        .with_context(|| format!("Failed to load mask {}", mask_path.display()))?;

    let mut mapping = config.build_mapping()?;
    let importer = MaskImporter::with_ditherer(config.ditherer()?);
    let mut grid = TileGrid::new();
    let report = importer.import(&mut mapping, &mask, &mut grid, &config.import_options())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", report.description);
    println!("  mask:    {}x{}", report.width, report.height);
    println!("  tiles:   {}", report.tiles);
    println!("  samples: {}", report.samples);
    println!(
        "  range:   {}..{} (max {})",
        report.config.mask_low_value, report.config.mask_high_value, report.config.mask_max_value
    );
    for (tx, ty) in grid.coords() {
        if let Some(tile) = grid.tile(tx, ty) {
            println!(
                "  tile ({}, {}): {} terrain cells, {} layers",
                tx,
                ty,
                tile.terrain_cells(),
                tile.layer_count()
            );
        }
    }
    Ok(())
}

/// Dither a color mask and write the preview PNG
fn run_preview_command(
    mask_path: &Path,
    output: &Path,
    algorithm: &str,
    serpentine: bool,
) -> anyhow::Result<()> {
    let algorithm = DitherAlgorithm::from_name(algorithm)
        .with_context(|| format!("Unknown dither algorithm: {}", algorithm))?;
    let mask = Mask::open(mask_path)
        .with_context(|| format!("Failed to load mask {}", mask_path.display()))?;
    if mask.kind() != MaskKind::Color {
        anyhow::bail!("Preview needs a color mask, got a {} mask", mask.kind());
    }

    let image = AnnotationDitherer::new()
        .algorithm(algorithm)
        .serpentine(serpentine)
        .dither(
            mask.samples(),
            mask.width() as usize,
            mask.height() as usize,
        )?;
    write_preview(&image, output)?;

    println!("Saved {}x{} preview to {}", image.width(), image.height(), output.display());
    for (index, count) in image.histogram().iter().enumerate().skip(1) {
        if *count > 0 {
            println!("  annotation {:>2}: {} pixels", index, count);
        }
    }
    Ok(())
}

fn run_palette_command() {
    let palette = Palette::annotations();
    println!("Annotation palette:");
    for index in 1..=palette.len() as u8 {
        if let Some(color) = palette.color(index) {
            let [r, g, b] = color.to_bytes();
            println!("  {:>2}: #{:02x}{:02x}{:02x}", index, r, g, b);
        }
    }
}
