use clap::Parser;
use image::ImageReader;
use std::path::PathBuf;

use edgesharp::{EDGE_OPERATORS, Exporter, SHARPEN_METHODS, detect_edges, sharpen};

#[derive(Parser)]
#[command(name = "edgesharp")]
#[command(about = "Apply edge detection and sharpening filters to a grayscale image")]
struct Cli {
    /// Path to input image file
    #[arg(value_name = "IMAGE", default_value = "./AthenIR.png")]
    image_path: PathBuf,

    /// Directory the filtered images are written to
    #[arg(long, value_name = "DIR", default_value = "./output")]
    output_dir: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    if args.verbose {
        println!("Loading image: {:?}", args.image_path);
    }

    // Load image and convert to 8-bit grayscale
    let img = ImageReader::open(&args.image_path)
        .map_err(|e| anyhow::anyhow!("Failed to open {}: {}", args.image_path.display(), e))?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?
        .into_luma8();

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let exporter = Exporter::new(args.output_dir);

    for operator in EDGE_OPERATORS {
        let result = detect_edges(&img, operator);
        let path = exporter.export(&result, operator)?;
        if args.verbose {
            println!("Wrote {}", path.display());
        }
    }

    for method in SHARPEN_METHODS {
        let result = sharpen(&img, method);
        let path = exporter.export(&result, method)?;
        if args.verbose {
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
