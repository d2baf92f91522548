//! PolyQR - merged polygon outlines for QR codes.
//!
//! Converts a QR code's module matrix into one outline polygon per
//! contiguous filled region (holes included) and renders those polygons
//! as TikZ pictures or minimized SVG paths. Merged outlines keep vector
//! output compact and make corner rounding behave across module runs,
//! where one rectangle per module would show seams.
//!
//! Message encoding is delegated to the [`qrcode`] crate; the geometry
//! pipeline itself operates on any boolean grid and lives in
//! [`polyqr_core`].

pub mod color;
pub mod config;

mod error;
mod export;

pub use error::PolyQrError;
pub use polyqr_core::{GeometryError, grid::Grid};

use log::{debug, info};

use polyqr_core::Polygon;
use qrcode::QrCode;

use crate::color::Color;
use crate::config::AppConfig;

/// Converts a QR code into merged polygon outlines and renders them.
///
/// The polygons are computed once at construction; the render methods
/// only format them. Contiguous black areas become single polygons.
///
/// # Examples
///
/// ```
/// use polyqr::QrCodePainter;
///
/// let painter = QrCodePainter::new("HELLO WORLD").expect("message fits a QR code");
/// let tikz = painter.tikz("1mm", "rounded corners=0.25mm", false);
/// assert!(tikz.starts_with("\\begin{tikzpicture}"));
///
/// let svg = painter.svg();
/// assert!(svg.contains("fill-rule=\"evenodd\""));
/// ```
#[derive(Debug)]
pub struct QrCodePainter {
    modules: usize,
    polygons: Vec<Polygon>,
    fill: Option<Color>,
}

impl QrCodePainter {
    /// Encodes `msg` as a QR code and merges its modules into polygons,
    /// using the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PolyQrError::Encode`] if the message does not fit any
    /// supported QR version, surfaced from the encoder unchanged.
    pub fn new(msg: &str) -> Result<Self, PolyQrError> {
        Self::with_config(msg, AppConfig::default())
    }

    /// Like [`QrCodePainter::new`], with an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PolyQrError::Encode`] on encoder failure and
    /// [`PolyQrError::Config`] if the configured fill color is invalid.
    pub fn with_config(msg: &str, config: AppConfig) -> Result<Self, PolyQrError> {
        info!(message_bytes = msg.len(); "Encoding message");
        let code = QrCode::new(msg.as_bytes())?;
        let width = code.width();
        let colors = code.to_colors();
        let grid = Grid::from_fn(width, |row, col| {
            colors[row * width + col] == qrcode::Color::Dark
        });
        debug!(modules = width; "QR matrix encoded");

        Self::from_grid_with_config(&grid, config)
    }

    /// Runs the geometry pipeline on an arbitrary boolean grid. No QR
    /// structure is assumed or validated.
    ///
    /// # Errors
    ///
    /// Returns [`PolyQrError::Geometry`] if a pipeline invariant is
    /// violated. That indicates an algorithmic defect and is unreachable
    /// from any valid grid.
    pub fn from_grid(grid: &Grid) -> Result<Self, PolyQrError> {
        Self::from_grid_with_config(grid, AppConfig::default())
    }

    /// Like [`QrCodePainter::from_grid`], with an explicit configuration.
    pub fn from_grid_with_config(grid: &Grid, config: AppConfig) -> Result<Self, PolyQrError> {
        let fill = config.style().fill().map_err(PolyQrError::Config)?;
        let polygons = polyqr_core::polygons(grid)?;
        info!(components = polygons.len(); "Merged outline polygons");

        Ok(Self {
            modules: grid.size(),
            polygons,
            fill,
        })
    }

    /// Returns the side length of the module matrix.
    pub fn modules(&self) -> usize {
        self.modules
    }

    /// Renders TikZ picture text drawing the collected polygons.
    ///
    /// `size` is a TikZ length for one module edge, or for the whole code
    /// when `full_size` is set. `style` is appended to each polygon's
    /// TikZ style.
    pub fn tikz(&self, size: &str, style: &str, full_size: bool) -> String {
        export::tikz::render(&self.polygons, self.modules, size, style, full_size)
    }

    /// Renders a complete SVG document containing one merged path.
    pub fn svg(&self) -> String {
        export::svg::document(self.modules, &self.polygons, self.fill.as_ref())
    }

    /// Renders the single merged `<path>` element, every polygon
    /// concatenated into one minimized even-odd path.
    pub fn svg_path(&self) -> String {
        export::svg::merged_path(&self.polygons, self.fill.as_ref())
    }

    /// Returns a lazy, finite sequence of standalone per-component
    /// `<path>` elements. Each call yields a fresh iterator over the same
    /// sequence.
    pub fn svg_paths(&self) -> impl Iterator<Item = String> + '_ {
        export::svg::component_paths(&self.polygons, self.fill.as_ref())
    }
}
