//! Lattice geometry primitives for boundary extraction and tracing.
//!
//! # Coordinate System
//!
//! Vertices live on the integer lattice of module corners, using a
//! coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X (columns)
//!     │
//!     │
//!     ▼
//!    +Y (rows)
//! ```
//!
//! - **Origin**: top-left corner of the grid at `(0, 0)`
//! - **X-axis**: increases rightward, one unit per module column
//! - **Y-axis**: increases downward, one unit per module row
//!
//! The derived ordering on [`Vertex`] is lexicographic on `(x, y)`; the
//! tracer's deterministic tie-breaking relies on it.

use std::fmt;

/// A corner of a grid module, addressed on the integer lattice.
///
/// # Examples
///
/// ```
/// # use polyqr_core::geometry::Vertex;
/// let v = Vertex::new(3, 1);
/// assert_eq!(v.x(), 3);
/// assert_eq!(v.y(), 1);
/// assert!(Vertex::new(0, 9) < Vertex::new(1, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    x: i32,
    y: i32,
}

impl Vertex {
    /// Creates a new vertex at the given lattice coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate (column axis).
    pub fn x(self) -> i32 {
        self.x
    }

    /// Returns the y-coordinate (row axis).
    pub fn y(self) -> i32 {
        self.y
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// An undirected unit-length edge between two adjacent lattice vertices.
///
/// Edges are stored in canonical form (the lexicographically smaller
/// endpoint first) so that two physically identical edges produced by
/// different modules compare equal.
///
/// # Examples
///
/// ```
/// # use polyqr_core::geometry::{Edge, Vertex};
/// let p = Vertex::new(1, 0);
/// let q = Vertex::new(0, 0);
/// assert_eq!(Edge::new(p, q), Edge::new(q, p));
/// assert_eq!(Edge::new(p, q).a(), q);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    a: Vertex,
    b: Vertex,
}

impl Edge {
    /// Creates a canonical edge between `p` and `q`, in either order.
    pub fn new(p: Vertex, q: Vertex) -> Self {
        if p <= q { Self { a: p, b: q } } else { Self { a: q, b: p } }
    }

    /// Returns the smaller endpoint.
    pub fn a(self) -> Vertex {
        self.a
    }

    /// Returns the larger endpoint.
    pub fn b(self) -> Vertex {
        self.b
    }

    /// Returns both endpoints, smaller first.
    pub fn endpoints(self) -> (Vertex, Vertex) {
        (self.a, self.b)
    }
}

/// Whether three lattice vertices share a row or a column.
///
/// For the rectilinear rings produced by the tracer, consecutive edges
/// are collinear exactly when the middle vertex is redundant.
pub fn collinear(a: Vertex, b: Vertex, c: Vertex) -> bool {
    (a.x == b.x && b.x == c.x) || (a.y == b.y && b.y == c.y)
}
