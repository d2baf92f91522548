//! Removal of redundant collinear ring vertices.

use crate::error::GeometryError;
use crate::geometry::collinear;
use crate::trace::Ring;

/// Removes every vertex whose incoming and outgoing edges are collinear,
/// merging runs of unit edges into single longer edges. The enclosed area
/// and the boundary point set are unchanged, and one pass suffices: a
/// removal never makes a surviving corner collinear.
///
/// # Errors
///
/// A valid rectilinear boundary keeps at least its four extreme corners;
/// a result with fewer vertices is reported as an internal-consistency
/// error rather than returned.
pub fn simplify(ring: Ring) -> Result<Ring, GeometryError> {
    let mut vertices = ring.into_vertices();

    let mut i = 0;
    while i < vertices.len() {
        let len = vertices.len();
        let p0 = vertices[(i + len - 1) % len];
        let p1 = vertices[i];
        let p2 = vertices[(i + 1) % len];
        if collinear(p0, p1, p2) {
            vertices.remove(i);
        } else {
            i += 1;
        }
    }

    if vertices.len() < 4 {
        return Err(GeometryError::DegenerateRing {
            vertices: vertices.len(),
        });
    }

    Ok(Ring::new(vertices))
}
