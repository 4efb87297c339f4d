//! hexel - converts embedded RGB565 hex arrays into BMP images.
//!
//! Reads a source file (C header, text dump, ...), locates the pixel array,
//! and writes a 24-bit BMP next to an optional PNG preview.

mod preview;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};

use hexel_core::convert;

/// Extensions conventionally carrying hex pixel arrays. Anything else still
/// converts; the core only looks at the text.
const KNOWN_EXTENSIONS: &[&str] = &["h", "hpp", "c", "cpp", "txt", "inc", "dat", "hex"];

#[derive(Parser, Debug)]
#[command(name = "hexel")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source file containing an RGB565 hex array.
    input: PathBuf,

    /// Output BMP path.
    #[arg(short, long, default_value = "converted_image.bmp")]
    output: PathBuf,

    /// Also write a PNG preview of the decoded image.
    #[arg(long)]
    preview: Option<PathBuf>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::WARN
        })
        .init();

    let extension = args
        .input
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some(ext) if KNOWN_EXTENSIONS.contains(&ext) => {}
        other => warn!(
            extension = other.unwrap_or("<none>"),
            "unusual input extension, converting anyway"
        ),
    }

    let bytes = std::fs::read(&args.input)
        .with_context(|| format!("Failed to read input file: {}", args.input.display()))?;
    let text = String::from_utf8_lossy(&bytes);
    debug!(bytes = bytes.len(), "read input file");

    let conversion = convert(&text)
        .with_context(|| format!("Failed to convert {}", args.input.display()))?;

    std::fs::write(&args.output, &conversion.bmp)
        .with_context(|| format!("Failed to write BMP: {}", args.output.display()))?;

    println!(
        "{}: {}x{} ({} pixels) -> {}",
        conversion.image.name,
        conversion.image.width,
        conversion.image.height,
        conversion.image.pixel_count(),
        args.output.display()
    );

    if let Some(preview_path) = args.preview {
        preview::save_png(&conversion.image, &preview_path)?;
        println!("preview -> {}", preview_path.display());
    }

    Ok(())
}
