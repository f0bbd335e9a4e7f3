use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels selectable from the command line.
#[derive(Debug, Clone, ValueEnum)]
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

/// Command line arguments structure using clap derive macros
#[derive(Parser)]
#[command(name = "opal")]
#[command(about = "A small stochastic path tracer")]
pub struct Args {
    /// Image width in pixels
    #[arg(long, default_value = "300", help = "Image width in pixels")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "300", help = "Image height in pixels")]
    pub height: u32,

    /// Number of samples per pixel
    #[arg(long, short = 's', default_value = "30", help = "Number of samples per pixel")]
    pub samples_per_pixel: u32,

    /// Bounce depth at which paths are cut off
    #[arg(long, default_value = "10", help = "Bounce depth at which paths are cut off")]
    pub max_depth: u32,

    /// Worker threads (defaults to the number of logical CPUs)
    #[arg(long, short = 't', help = "Worker threads (defaults to the number of logical CPUs)")]
    pub threads: Option<usize>,

    /// Seed mixed into every band's sampler
    #[arg(long, default_value = "0", help = "Seed mixed into every band's sampler")]
    pub seed: u64,

    /// Output image path
    #[arg(short, long, default_value = "render.png", help = "Output image path")]
    pub output: String,

    /// Set the logging level (defaults to "info")
    #[arg(long, default_value = "info", help = "Set the logging level")]
    pub log_level: LogLevel,
}
