mod camera;
mod cli;
mod color;
mod error;
mod hittable;
mod hittable_list;
mod interval;
mod logger;
mod material;
mod ray;
mod render;
mod rtweekend;
mod scene;
mod sphere;
mod vec3;

use crate::rtweekend::*;
use clap::Parser;
use cli::Args;
use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use render::{RenderOptions, detect_workers, render};
use std::fs::File;
use std::io::{self, BufWriter};

fn apply_overrides(args: &Args, config: &mut CameraConfig) {
    if let Some(width) = args.width {
        config.image_width = width;
    }
    if let Some(aspect_ratio) = args.aspect_ratio {
        config.aspect_ratio = aspect_ratio;
    }
    if let Some(samples) = args.samples {
        config.samples_per_pixel = samples;
    }
    if let Some(max_depth) = args.max_depth {
        config.max_depth = max_depth;
    }
    if let Some(vfov) = args.vfov {
        config.vfov = vfov;
    }
    if let Some(defocus_angle) = args.defocus_angle {
        config.defocus_angle = defocus_angle;
    }
}

fn main() -> Result<(), RenderError> {
    let args = Args::parse();
    logger::init_logger(args.log_level.into());

    let seed = args.seed.unwrap_or_else(rand::random);
    let (world, mut config) = args.scene.build(&mut StdRng::seed_from_u64(seed));
    apply_overrides(&args, &mut config);
    config.validate()?;

    let workers = args.threads.unwrap_or_else(detect_workers);
    if workers == 0 {
        return Err(RenderError::InvalidConfig("thread count must be at least 1".into()));
    }

    if world.is_empty() {
        warn!("Scene {:?} has no objects; the image will be sky only", args.scene);
    }
    info!("Scene {:?}: {} objects", args.scene, world.len());

    let camera = Camera::new(config);
    let options = RenderOptions {
        workers,
        seed,
        progress: !args.quiet,
    };
    let image = render(&camera, &world, &options)?;

    match &args.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            image.write_ppm(&mut out)?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut out = BufWriter::new(io::stdout().lock());
            image.write_ppm(&mut out)?;
        }
    }

    Ok(())
}
