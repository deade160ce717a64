// scene2web - Generate skyline data for the web renderer
//
// Pipeline:
//   1. Run the deterministic generators (windows, delay order)
//   2. Export JSON + a TS module consumed by the JS renderer
//   3. Emit a static SVG snapshot (reduced-motion / no-JS fallback)
//   4. Emit a PNG preview for eyeballing layout changes
//
// Usage: cargo run --bin scene2web -- --out-dir web/src/assets

mod export;
mod raster;
mod svg;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::path::PathBuf;

use skyline_engine::layout;

#[derive(Parser)]
#[command(about = "Generate skyline layout data for the web renderer")]
struct Args {
    /// Output directory for skyline.{json,ts,svg,png}
    #[arg(long, default_value = "web/src/assets")]
    out_dir: PathBuf,

    /// Pixel scale of the PNG preview
    #[arg(long, default_value_t = 2)]
    scale: u32,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;

    let fg = layout::fg_layer();
    let mid = layout::mid_layer();
    let thin = layout::mid_thin_layer();
    info!(
        "generated {} fg windows ({} pulsing), {} mid, {} thin",
        fg.len(),
        fg.iter().filter(|w| w.pulse).count(),
        mid.len(),
        thin.len()
    );

    let json_path = args.out_dir.join("skyline.json");
    export::write_json(&json_path)?;
    info!("wrote {}", json_path.display());

    let ts_path = args.out_dir.join("skyline.ts");
    export::write_ts(&ts_path)?;
    info!("wrote {}", ts_path.display());

    let svg_path = args.out_dir.join("skyline.svg");
    svg::write_svg(&svg_path)?;
    info!("wrote {}", svg_path.display());

    let png_path = args.out_dir.join("skyline.png");
    raster::write_png(&png_path, args.scale)?;
    info!("wrote {}", png_path.display());

    Ok(())
}
