use std::path::PathBuf;

use clap::{Args, Parser as ClapParser, Subcommand, ValueEnum};
use mpa::process::reservoir::ReservoirMode;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\nmpa ",
    env!("MPA_VERSION"),
    "\nbuilt ",
    env!("BUILD_TIMESTAMP"),
);

#[derive(Debug, ClapParser)]
#[command(
    name         = env!("CARGO_PKG_NAME"),
    version      = env!("CARGO_PKG_VERSION"),
    long_version = LONG_VERSION,
    author       = env!("CARGO_PKG_AUTHORS"),
    about        = "Tools for inspecting MPEG-1 Audio Layer III bitstreams",
    long_about   = None,
)]
pub struct Cli {
    /// Set the log level
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,

    /// Treat warnings as fatal errors (fail on first warning).
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log output format.
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Show progress bars during operations.
    #[arg(long, global = true)]
    pub progress: bool,

    /// Choose an operation to perform.
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print stream information
    Info(InfoArgs),

    /// Write parsed frames as YAML to stdout.
    Dump(DumpArgs),
}

#[derive(Debug, Args)]
pub struct InfoArgs {
    /// Input MPEG audio bitstream (use "-" for stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

#[derive(Debug, Args)]
pub struct DumpArgs {
    /// Input MPEG audio bitstream (use "-" for stdin).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of frames to dump.
    #[arg(long, value_name = "N", default_value_t = 1)]
    pub frames: usize,

    /// Include the 576 quantized spectral lines of every granule.
    #[arg(long)]
    pub spectrum: bool,

    /// How main_data_begin is applied.
    #[arg(long, value_enum, default_value_t = Reservoir::Sequential)]
    pub reservoir: Reservoir,

    /// Skip CRC validation of protected frames.
    #[arg(long)]
    pub no_crc: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    /// Disable logging output.
    Off,
    /// No output except errors.
    Error,
    /// Show warnings and errors.
    Warn,
    /// Show info, warnings and errors (default).
    Info,
    /// Show debug, info, warnings and errors.
    Debug,
    /// Show all log messages including trace.
    Trace,
}

impl LogLevel {
    /// Convert LogLevel to log::LevelFilter
    pub fn to_level_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormat {
    /// Colorized human-readable text.
    Plain,
    /// Structured JSON per log record.
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq)]
pub enum Reservoir {
    /// Each frame reads its own share of a FIFO of all payloads (default).
    Sequential,
    /// Main data starts main_data_begin bytes back in earlier payloads.
    Backward,
}

impl From<Reservoir> for ReservoirMode {
    fn from(value: Reservoir) -> Self {
        match value {
            Reservoir::Sequential => ReservoirMode::Sequential,
            Reservoir::Backward => ReservoirMode::Backward,
        }
    }
}

impl Cli {
    /// Fail level handed to the library.
    pub fn fail_level(&self) -> log::Level {
        if self.strict {
            log::Level::Warn
        } else {
            log::Level::Error
        }
    }
}
