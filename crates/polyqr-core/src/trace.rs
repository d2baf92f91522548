//! Closed-cycle tracing over the boundary-edge graph.
//!
//! Reconstructs one closed ring per connected boundary sub-graph, using
//! every boundary edge exactly once. At degree-4 vertices (where a hole
//! touches the outer boundary) the walk prefers *turning* over continuing
//! straight. This wall-hugging choice keeps hole outlines separated from
//! the outer outline in the visually expected way and avoids crossing
//! artifacts once corner rounding is applied downstream.

use std::collections::{BTreeMap, BTreeSet, HashSet, VecDeque};

use log::trace;

use crate::boundary::BoundaryEdgeSet;
use crate::error::GeometryError;
use crate::geometry::{Edge, Vertex, collinear};

/// An ordered, implicitly closed sequence of vertices bounding one simple
/// region (an outer boundary or a hole). The first vertex is not repeated
/// at the end.
///
/// Orientation carries no meaning; fill is decided by the even-odd rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ring {
    vertices: Vec<Vertex>,
}

impl Ring {
    /// Creates a ring from an implicitly closed vertex sequence.
    pub fn new(vertices: Vec<Vertex>) -> Self {
        debug_assert!(!vertices.is_empty(), "rings hold at least one vertex");
        Self { vertices }
    }

    /// Returns the vertices in walk order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices (equal to the number of edges, the
    /// ring being closed).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the ring holds no vertices. Never true for traced rings.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub(crate) fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

/// The rings of one component: its outer boundary and any hole
/// boundaries, ordered by decreasing boundary size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon {
    rings: Vec<Ring>,
}

impl Polygon {
    /// Creates a polygon from the rings of one component.
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Returns the rings. Rendered together under even-odd fill, they
    /// cover exactly the component's cells.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

/// Decomposes a boundary-edge set into closed rings, using every edge
/// exactly once.
///
/// The boundary graph is split into connected sub-graphs, traced largest
/// first. Each sub-graph yields exactly one ring: a self-tangent boundary
/// (hole meeting the outer ring at a vertex) is covered by extending the
/// initial cycle until it spans the whole sub-graph.
///
/// Successor choice is a pure function of local edge geometry: candidates
/// in lexicographic vertex order, stably reordered to put turns first.
///
/// # Errors
///
/// Returns an internal-consistency error if an odd-degree vertex is found
/// or the walk strands; neither is reachable from a valid grid.
pub fn trace_rings(boundary: &BoundaryEdgeSet) -> Result<Vec<Ring>, GeometryError> {
    if boundary.is_empty() {
        return Ok(Vec::new());
    }

    // Undirected adjacency with sorted neighbor lists, checking the
    // even-degree invariant on the way.
    let mut adjacency: BTreeMap<Vertex, Vec<Vertex>> = BTreeMap::new();
    for edge in boundary.iter() {
        let (p, q) = edge.endpoints();
        adjacency.entry(p).or_default().push(q);
        adjacency.entry(q).or_default().push(p);
    }
    for (vertex, neighbors) in &mut adjacency {
        neighbors.sort();
        if neighbors.len() % 2 != 0 {
            return Err(GeometryError::OddDegree {
                vertex: *vertex,
                degree: neighbors.len(),
            });
        }
    }

    // Connected sub-graphs, largest first (ties by smallest vertex).
    let mut subgraphs = connected_subgraphs(&adjacency);
    subgraphs.sort_by(|a, b| {
        b.len()
            .cmp(&a.len())
            .then_with(|| a.first().cmp(&b.first()))
    });

    let mut remaining: HashSet<Edge> = boundary.iter().copied().collect();
    let mut rings = Vec::with_capacity(subgraphs.len());
    for subgraph in &subgraphs {
        let Some(&init) = subgraph.first() else {
            continue;
        };
        let ring = trace_subgraph(init, subgraph, &adjacency, &mut remaining)?;
        trace!(start:% = init, vertices = ring.len(); "Traced boundary ring");
        rings.push(ring);
    }

    if !remaining.is_empty() {
        return Err(GeometryError::Stalled {
            unused: remaining.len(),
        });
    }

    Ok(rings)
}

/// Vertex sets of the connected sub-graphs of the boundary graph.
fn connected_subgraphs(adjacency: &BTreeMap<Vertex, Vec<Vertex>>) -> Vec<BTreeSet<Vertex>> {
    let mut unvisited: BTreeSet<Vertex> = adjacency.keys().copied().collect();
    let mut subgraphs = Vec::new();

    while let Some(&start) = unvisited.iter().next() {
        unvisited.remove(&start);
        let mut subgraph = BTreeSet::from([start]);
        let mut queue = VecDeque::from([start]);
        while let Some(u) = queue.pop_front() {
            for &v in &adjacency[&u] {
                if subgraph.insert(v) {
                    unvisited.remove(&v);
                    queue.push_back(v);
                }
            }
        }
        subgraphs.push(subgraph);
    }

    subgraphs
}

/// Traces the single ring covering one connected boundary sub-graph.
fn trace_subgraph(
    init: Vertex,
    subgraph: &BTreeSet<Vertex>,
    adjacency: &BTreeMap<Vertex, Vec<Vertex>>,
    remaining: &mut HashSet<Edge>,
) -> Result<Ring, GeometryError> {
    // Initial cycle: walk until an unused edge leads back to the start.
    let mut chain = vec![init];
    let mut prev: Option<Vertex> = None;
    loop {
        let curr = chain[chain.len() - 1];
        if remaining.remove(&Edge::new(curr, init)) {
            break;
        }
        let succ = next_vertex(curr, prev, adjacency, remaining)
            .ok_or(GeometryError::UnclosedRing { vertex: curr })?;
        remaining.remove(&Edge::new(curr, succ));
        chain.push(succ);
        prev = Some(curr);
    }

    // The cycle may have closed before covering edges at degree-4 vertices
    // it passed through. Rebuild it from the start, taking unused edges
    // where available (still preferring turns) and replaying the previous
    // chain where not, until the whole sub-graph is covered.
    let mut visited: HashSet<Vertex> = chain.iter().copied().collect();
    while visited.len() < subgraph.len() {
        let mut consumed = 0usize;
        let mut new_chain = vec![init];
        let mut prev: Option<Vertex> = None;
        let mut replay = 1usize;
        loop {
            let curr = new_chain[new_chain.len() - 1];
            match next_vertex(curr, prev, adjacency, remaining) {
                Some(succ) => {
                    remaining.remove(&Edge::new(curr, succ));
                    consumed += 1;
                    new_chain.push(succ);
                    prev = Some(curr);
                }
                None => {
                    if replay == chain.len() {
                        break;
                    }
                    let succ = chain[replay];
                    new_chain.push(succ);
                    prev = Some(curr);
                    replay += 1;
                }
            }
        }
        if consumed == 0 {
            return Err(GeometryError::Stalled {
                unused: remaining.len(),
            });
        }
        chain = new_chain;
        visited = chain.iter().copied().collect();
    }

    Ok(Ring::new(chain))
}

/// The next vertex reachable from `curr` over an unused edge, preferring
/// a successor that turns away from the incoming direction.
fn next_vertex(
    curr: Vertex,
    prev: Option<Vertex>,
    adjacency: &BTreeMap<Vertex, Vec<Vertex>>,
    remaining: &HashSet<Edge>,
) -> Option<Vertex> {
    let mut candidates: Vec<Vertex> = adjacency
        .get(&curr)?
        .iter()
        .copied()
        .filter(|&v| remaining.contains(&Edge::new(curr, v)))
        .collect();
    if let Some(prev) = prev {
        // Stable sort keeps lexicographic order within each class.
        candidates.sort_by_key(|&v| collinear(prev, curr, v));
    }
    candidates.first().copied()
}
