//! CLI logic for the PolyQR tool.
//!
//! This module contains the core CLI logic for the PolyQR tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use log::info;

use polyqr::{PolyQrError, QrCodePainter};

/// Run the PolyQR CLI application
///
/// This function encodes the message, merges its modules into polygons,
/// and returns the TikZ picture text for printing.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `PolyQrError` for:
/// - Configuration loading errors
/// - Message encoding errors
/// - Internal geometry errors
pub fn run(args: &Args) -> Result<String, PolyQrError> {
    info!(
        size = args.size,
        full_size = args.full_size;
        "Rendering QR code"
    );

    // Load configuration
    let app_config = config::load_config(args.config.as_ref())?;

    // Encode the message and merge modules into polygons
    let painter = QrCodePainter::with_config(&args.message, app_config)?;
    info!(modules = painter.modules(); "QR code painted");

    Ok(painter.tikz(&args.size, &args.style, args.full_size))
}
