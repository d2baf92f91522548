//! Boundary-edge extraction by parity cancellation.

use indexmap::{IndexMap, IndexSet};

use crate::geometry::Edge;
use crate::label::Component;

/// The edges occurring exactly once across all cell edges of a component:
/// its outer boundary plus the boundaries of any enclosed holes.
///
/// Every vertex touched by this set has even degree (2 at plain corners,
/// 4 where a hole meets the outer boundary), which guarantees the set
/// decomposes fully into closed walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryEdgeSet {
    edges: IndexSet<Edge>,
}

impl BoundaryEdgeSet {
    /// Iterates edges in deterministic extraction order.
    pub fn iter(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Returns the number of boundary edges. Each edge has unit length,
    /// so this is also the total boundary length.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether the set is empty. Never true for a non-empty component.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether `edge` lies on the boundary.
    pub fn contains(&self, edge: &Edge) -> bool {
        self.edges.contains(edge)
    }
}

/// Extracts the boundary edges of one component.
///
/// Each cell contributes its four canonical unit edges; a per-edge flag is
/// toggled on every occurrence, so an edge shared by two cells of the
/// component cancels (seen twice) while outer and hole edges survive (seen
/// once). Edges towards a *different* component survive too, since each
/// component is processed independently and two distinct components never
/// share an edge.
pub fn boundary_edges(component: &Component) -> BoundaryEdgeSet {
    let mut present: IndexMap<Edge, bool> = IndexMap::new();
    for cell in component.cells() {
        for edge in cell.edges() {
            let flag = present.entry(edge).or_insert(false);
            *flag = !*flag;
        }
    }

    let edges = present
        .into_iter()
        .filter_map(|(edge, odd)| odd.then_some(edge))
        .collect();
    BoundaryEdgeSet { edges }
}
