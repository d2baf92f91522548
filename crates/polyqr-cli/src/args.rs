//! Command-line argument definitions for the PolyQR CLI.
//!
//! This module defines the [`Args`] structure parsed from the command
//! line using [`clap`]. Arguments control module sizing, polygon styling,
//! configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the PolyQR tool
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Edge length of one QR code module (a TikZ length such as "1mm")
    pub size: String,

    /// TikZ style options appended to each polygon
    pub style: String,

    /// Message to encode
    pub message: String,

    /// Interpret SIZE as the edge length of the whole code
    #[arg(long)]
    pub full_size: bool,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}
