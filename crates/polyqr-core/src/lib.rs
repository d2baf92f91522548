//! PolyQR Core Geometry
//!
//! The grid-to-polygon pipeline behind PolyQR. Given any boolean grid, it
//! produces one merged rectilinear outline per contiguous filled region,
//! holes included:
//!
//! - **Labeling**: 4-connected flood fill over filled cells ([`label`])
//! - **Boundary extraction**: unit-edge parity cancellation ([`boundary`])
//! - **Cycle tracing**: turn-preferring closed walks ([`trace`])
//! - **Simplification**: collinear-vertex removal ([`simplify`])
//!
//! The pipeline is a pure, synchronous function with no I/O; rendering the
//! resulting polygons to TikZ or SVG lives in the `polyqr` crate.

pub mod boundary;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod simplify;
pub mod trace;

mod error;

pub use error::GeometryError;
pub use trace::{Polygon, Ring};

use log::{debug, info};

use grid::Grid;

/// Runs the full pipeline: one simplified [`Polygon`] per 4-connected
/// component of filled cells, in component discovery order.
///
/// # Errors
///
/// Returns a [`GeometryError`] if a tracing or simplification invariant is
/// violated. That indicates an algorithmic defect and is unreachable from
/// any valid grid.
///
/// # Examples
///
/// ```
/// # use polyqr_core::{grid::Grid, polygons};
/// let grid = Grid::from_fn(1, |_, _| true);
/// let polygons = polygons(&grid).expect("pipeline invariants hold");
/// assert_eq!(polygons.len(), 1);
/// assert_eq!(polygons[0].rings().len(), 1);
/// assert_eq!(polygons[0].rings()[0].len(), 4);
/// ```
pub fn polygons(grid: &Grid) -> Result<Vec<Polygon>, GeometryError> {
    info!(modules = grid.size(); "Merging filled regions into polygons");

    let components = label::components(grid);
    let polygons = components
        .iter()
        .map(|component| {
            let boundary = boundary::boundary_edges(component);
            let rings = trace::trace_rings(&boundary)?
                .into_iter()
                .map(simplify::simplify)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Polygon::new(rings))
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(polygons = polygons.len(); "Outline polygons ready");
    Ok(polygons)
}
