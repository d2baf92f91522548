//! Internal-consistency error type for the geometry pipeline.

use thiserror::Error;

use crate::geometry::Vertex;

/// Fatal inconsistencies detected during tracing or simplification.
///
/// Every variant indicates an algorithmic defect: the boundary-parity
/// invariant guarantees none of these can be reached from a valid grid.
/// They abort the conversion for that input rather than emit a malformed
/// polygon.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("boundary vertex {vertex} has odd degree {degree}")]
    OddDegree { vertex: Vertex, degree: usize },

    #[error("boundary walk stranded at {vertex} before closing its ring")]
    UnclosedRing { vertex: Vertex },

    #[error("ring tracing stalled with {unused} boundary edges unused")]
    Stalled { unused: usize },

    #[error("ring simplified down to {vertices} vertices")]
    DegenerateRing { vertices: usize },
}
