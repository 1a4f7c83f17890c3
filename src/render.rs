//! Row-partitioned parallel renderer.
//!
//! The image is split into contiguous row bands, one per worker. Each worker owns
//! a disjoint slice of the pixel buffer, so the only shared mutable state is the
//! scanline counter used for progress output.

use crate::rtweekend::*;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Instant;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub workers: usize,
    /// Base seed. Each row derives its own stream from it, so output does not
    /// depend on the worker count.
    pub seed: u64,
    pub progress: bool,
}

/// Hardware concurrency, or 1 when it cannot be determined.
pub fn detect_workers() -> usize {
    thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Split `rows` into contiguous, non-overlapping bands of `rows / workers` rows,
/// the last band absorbing the remainder. The worker count is clamped to [1, rows].
pub fn partition_rows(rows: usize, workers: usize) -> Vec<Range<usize>> {
    let workers = workers.clamp(1, rows.max(1));
    let lines_per_worker = rows / workers;

    (0..workers)
        .map(|t| {
            let start = t * lines_per_worker;
            let end = if t == workers - 1 {
                rows
            } else {
                (t + 1) * lines_per_worker
            };
            start..end
        })
        .collect()
}

fn row_seed(seed: u64, row: usize) -> u64 {
    seed ^ (row as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Dense row-major buffer of linear, unclamped colors.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Image {
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write_ppm(out, self.width, self.height, &self.pixels)
    }
}

pub fn render(camera: &Camera, world: &dyn Hittable, options: &RenderOptions) -> Result<Image, RenderError> {
    let width = camera.image_width();
    let height = camera.image_height();
    let bands = partition_rows(height, options.workers);

    info!(
        "Rendering {}x{} ({} spp, depth {}) on {} workers, seed {}",
        width,
        height,
        camera.config().samples_per_pixel,
        camera.config().max_depth,
        bands.len(),
        options.seed
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(bands.len())
        .thread_name(|i| format!("render-{i}"))
        .build()?;

    let mut pixels = vec![Color::ZERO; width * height];
    let remaining = AtomicUsize::new(height);
    let mut rest: &mut [Color] = &mut pixels;

    let start = Instant::now();
    pool.scope(|s| {
        for rows in bands {
            let (band, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * width);
            rest = tail;
            let remaining = &remaining;
            s.spawn(move |_| render_rows(camera, world, rows, band, options, remaining));
        }
    });
    let elapsed = start.elapsed();

    if options.progress {
        eprintln!("\rDone. Render time: {:.2}s          ", elapsed.as_secs_f64());
    }
    info!("Render finished in {:.2?}", elapsed);

    Ok(Image {
        width,
        height,
        pixels,
    })
}

fn render_rows(
    camera: &Camera,
    world: &dyn Hittable,
    rows: Range<usize>,
    band: &mut [Color],
    options: &RenderOptions,
    remaining: &AtomicUsize,
) {
    debug!("{} rendering rows {:?}", thread::current().name().unwrap_or("worker"), rows);
    let width = camera.image_width();

    for (j, line) in rows.zip(band.chunks_mut(width)) {
        let mut rng = StdRng::seed_from_u64(row_seed(options.seed, j));
        for (i, pixel) in line.iter_mut().enumerate() {
            *pixel = camera.render_pixel(i, j, world, &mut rng);
        }

        // Best-effort readout; lines from different workers may interleave.
        let left = remaining.fetch_sub(1, Ordering::Relaxed) - 1;
        if options.progress && left % 10 == 0 {
            eprint!("\rScanlines remaining: {left:<4}");
        }
    }
}
