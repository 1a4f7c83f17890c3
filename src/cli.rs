use crate::scene::Preset;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Image settings left unset keep the scene preset's values.
#[derive(Debug, Parser)]
#[command(name = "weekend_tracer")]
#[command(about = "Monte Carlo path tracer writing plain PPM images")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "cover")]
    pub scene: Preset,

    /// Image width in pixels
    #[arg(long)]
    pub width: Option<usize>,

    /// Width over height
    #[arg(long)]
    pub aspect_ratio: Option<f64>,

    /// Random samples per pixel
    #[arg(long, short = 's')]
    pub samples: Option<u32>,

    /// Maximum number of bounces per path
    #[arg(long)]
    pub max_depth: Option<u32>,

    /// Vertical field of view in degrees
    #[arg(long)]
    pub vfov: Option<f64>,

    /// Lens defocus angle in degrees; 0 disables depth of field
    #[arg(long)]
    pub defocus_angle: Option<f64>,

    /// Seed for scene generation and sampling; drawn from OS entropy when omitted
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads; defaults to the available hardware concurrency
    #[arg(long, short = 'j')]
    pub threads: Option<usize>,

    /// Output PPM file; stdout when omitted
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Suppress the scanline progress line
    #[arg(long, short = 'q')]
    pub quiet: bool,

    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
