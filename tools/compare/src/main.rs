//! Compare DCT and wavelet reconstructions of a raw planar RGB image
//!
//! With `--budget n` both codecs run once (`m = n / 4096` for 512x512) and a
//! single side-by-side PNG is written. With `--sweep` every budget step is
//! rendered in turn.

mod raw;
mod render;

use anyhow::{bail, Result};
use clap::Parser;
use planecodec::{compare, CodecConfig, QualitySweep, SweepOptions};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Raw image: all red samples, then all green, then all blue
    input: PathBuf,

    /// Wavelet coefficients to keep; the DCT keeps n / (size^2 / 64) per block
    #[arg(short, long, conflicts_with = "sweep")]
    budget: Option<usize>,

    /// Render every sweep step instead of a single budget
    #[arg(short, long)]
    sweep: bool,

    /// First sweep step
    #[arg(long, default_value_t = 1)]
    first_step: usize,

    /// Last sweep step
    #[arg(long, default_value_t = 64)]
    last_step: usize,

    /// Plane width and height
    #[arg(long, default_value_t = 512)]
    size: usize,

    /// Directory for the PNG frames
    #[arg(short, long, default_value = ".")]
    out: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = CodecConfig::new(args.size)?;
    let input = raw::load_channels(&args.input, &config)?;
    std::fs::create_dir_all(&args.out)?;

    if args.sweep {
        let options = SweepOptions::new()
            .first_step(args.first_step)
            .last_step(args.last_step);
        for frame in QualitySweep::new(&input, config, options)? {
            render::render_frame(&frame?, &args.out)?;
        }
        log::info!("Sweep finished");
        return Ok(());
    }

    let Some(n) = args.budget else {
        bail!("either --budget or --sweep is required");
    };
    let frame = compare(&input, config, n)?;
    let path = render::render_frame(&frame, &args.out)?;
    println!("{}", path.display());

    Ok(())
}
