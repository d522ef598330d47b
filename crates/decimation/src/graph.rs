//! The decimation graph: one node per live vertex, each tracking its
//! adjacent vertices and incident facets while collapses rewrite the mesh.

use crate::math::Point;
use crate::mesh::{horizon_edges, validate, Edge, Facet, InvalidMesh, VertexId};

use std::collections::HashSet;

/// One live vertex of the decimation graph.
///
/// The neighbor and facet collections have set semantics but are stored as
/// plain vectors: neighborhoods on a manifold mesh are small, and vectors
/// keep the iteration order deterministic, which the scheduler relies on
/// for reproducible output.
#[derive(Clone, Debug)]
pub struct Node {
    pub(crate) vertex: VertexId,
    pub(crate) neighbors: Vec<VertexId>,
    pub(crate) incident: Vec<Facet>,
    pub(crate) dirty: bool,
}

impl Node {
    fn new(vertex: VertexId) -> Self {
        Node {
            vertex,
            neighbors: Vec::new(),
            incident: Vec::new(),
            dirty: false,
        }
    }

    pub fn vertex(&self) -> VertexId {
        self.vertex
    }

    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }

    pub fn incident(&self) -> &[Facet] {
        &self.incident
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn add_neighbor(&mut self, v: VertexId) {
        if !self.neighbors.contains(&v) {
            self.neighbors.push(v);
        }
    }

    pub(crate) fn remove_neighbor(&mut self, v: VertexId) {
        if let Some(position) = self.neighbors.iter().position(|n| *n == v) {
            self.neighbors.remove(position);
        }
    }

    pub(crate) fn add_facet(&mut self, facet: Facet) {
        if !self.incident.contains(&facet) {
            self.incident.push(facet);
        }
    }

    pub(crate) fn remove_facet(&mut self, facet: &Facet) {
        if let Some(position) = self.incident.iter().position(|f| f == facet) {
            self.incident.remove(position);
        }
    }
}

/// The mutable vertex graph the scheduler collapses edges on.
///
/// Nodes live in a dense arena indexed by vertex id. A slot is `None` when
/// the vertex was never referenced by a facet, or once it has been removed
/// by a collapse. The horizon sets are computed at construction and never
/// touched afterwards.
#[derive(Clone, Debug)]
pub struct DecimationGraph {
    nodes: Vec<Option<Node>>,
    live: usize,
    horizon_edges: HashSet<Edge>,
    horizon_vertices: HashSet<VertexId>,
}

impl DecimationGraph {
    /// Builds the graph for a facet list over `positions`.
    ///
    /// Returns an error if a facet index is out of range, a facet is
    /// degenerate, or an edge is shared by more than two facets.
    pub fn new(facets: &[Facet], positions: &[Point]) -> Result<Self, InvalidMesh> {
        validate(facets, positions.len())?;

        let mut nodes: Vec<Option<Node>> = vec![None; positions.len()];
        let mut live = 0;

        for facet in facets {
            for k in 0..3 {
                let vertex = facet.indices[k];
                let node = nodes[vertex.to_usize()].get_or_insert_with(|| {
                    live += 1;
                    Node::new(vertex)
                });

                node.add_facet(*facet);
                for j in 0..3 {
                    if j != k {
                        node.add_neighbor(facet.indices[j]);
                    }
                }
            }
        }

        let mut horizon = HashSet::new();
        let mut horizon_vertices = HashSet::new();
        for edge in horizon_edges(facets) {
            horizon_vertices.insert(edge.a);
            horizon_vertices.insert(edge.b);
            horizon.insert(edge);
        }

        Ok(DecimationGraph {
            nodes,
            live,
            horizon_edges: horizon,
            horizon_vertices,
        })
    }

    /// Number of vertices still referenced by facets.
    pub fn live_vertex_count(&self) -> usize {
        self.live
    }

    pub fn node(&self, v: VertexId) -> Option<&Node> {
        self.nodes.get(v.to_usize())?.as_ref()
    }

    pub(crate) fn node_mut(&mut self, v: VertexId) -> Option<&mut Node> {
        self.nodes.get_mut(v.to_usize())?.as_mut()
    }

    pub(crate) fn take_node(&mut self, v: VertexId) -> Option<Node> {
        let node = self.nodes.get_mut(v.to_usize())?.take();
        if node.is_some() {
            self.live -= 1;
        }

        node
    }

    /// Whether `edge` was a boundary edge of the original mesh.
    pub fn is_horizon_edge(&self, edge: &Edge) -> bool {
        self.horizon_edges.contains(edge)
    }

    /// Whether `v` was an endpoint of any boundary edge of the original mesh.
    pub fn is_horizon_vertex(&self, v: VertexId) -> bool {
        self.horizon_vertices.contains(&v)
    }

    /// The live vertices, in ascending id order.
    pub fn live_vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|_| VertexId::from_usize(i)))
    }

    pub(crate) fn clear_dirty(&mut self) {
        for slot in &mut self.nodes {
            if let Some(node) = slot {
                node.dirty = false;
            }
        }
    }

    pub(crate) fn is_dirty(&self, v: VertexId) -> bool {
        self.node(v).map(|n| n.dirty).unwrap_or(false)
    }

    /// Appends the current facet set to `output`.
    ///
    /// Every facet is stored on all three of its nodes, so the walk
    /// deduplicates through a set before emitting. The result is sorted by
    /// index triple to keep the output independent of hash iteration order.
    pub fn emit_facets(&self, output: &mut Vec<Facet>) {
        let mut facets = HashSet::new();
        for slot in &self.nodes {
            if let Some(node) = slot {
                for facet in &node.incident {
                    facets.insert(*facet);
                }
            }
        }

        let start = output.len();
        output.extend(facets);
        output[start..].sort_unstable_by_key(|f| f.normalized());
    }

    /// Number of distinct facets currently stored in the graph.
    pub fn facet_count(&self) -> usize {
        let mut facets = HashSet::new();
        for slot in &self.nodes {
            if let Some(node) = slot {
                for facet in &node.incident {
                    facets.insert(*facet);
                }
            }
        }

        facets.len()
    }

    /// Walks the whole graph and panics on the first inconsistency found.
    ///
    /// Checks that adjacency is symmetric, that every incident facet
    /// actually contains the node's vertex, that the facet's other vertices
    /// are in the node's neighbor list, and that every facet is registered
    /// on all three of its nodes. Cheap enough for tests, too slow to run
    /// per collapse in release builds.
    pub fn check_invariants(&self) {
        for v in self.live_vertices() {
            let node = self.node(v).unwrap();
            assert_eq!(node.vertex, v);

            for &n in &node.neighbors {
                let adjacent = self
                    .node(n)
                    .unwrap_or_else(|| panic!("{:?} lists missing neighbor {:?}", v, n));
                assert!(
                    adjacent.neighbors.contains(&v),
                    "adjacency of {:?} and {:?} is not symmetric",
                    v,
                    n
                );
            }

            for facet in &node.incident {
                assert!(
                    facet.contains(v),
                    "{:?} stores {:?} which does not contain it",
                    v,
                    facet
                );

                let [a, b, c] = facet.indices;
                assert!(a != b && b != c && a != c, "degenerate facet {:?}", facet);

                for &index in &facet.indices {
                    if index == v {
                        continue;
                    }
                    assert!(
                        node.neighbors.contains(&index),
                        "{:?} of {:?} is missing from the neighbors of {:?}",
                        index,
                        facet,
                        v
                    );
                    let other = self
                        .node(index)
                        .unwrap_or_else(|| panic!("{:?} refers to dead vertex {:?}", facet, index));
                    assert!(
                        other.incident.contains(facet),
                        "{:?} is not registered on {:?}",
                        facet,
                        index
                    );
                }
            }
        }
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn facet(a: u32, b: u32, c: u32) -> Facet {
    Facet::new(VertexId(a), VertexId(b), VertexId(c))
}

#[test]
fn construction() {
    // Two triangles forming a quad.
    let positions = [
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(0.0, 1.0, 0.0),
        point(1.0, 1.0, 0.0),
    ];
    let facets = [facet(0, 1, 2), facet(2, 1, 3)];

    let graph = DecimationGraph::new(&facets, &positions).unwrap();
    graph.check_invariants();

    assert_eq!(graph.live_vertex_count(), 4);
    assert_eq!(graph.facet_count(), 2);

    let n1 = graph.node(VertexId(1)).unwrap();
    assert_eq!(n1.neighbors().len(), 3);
    assert_eq!(n1.incident().len(), 2);

    let n0 = graph.node(VertexId(0)).unwrap();
    assert_eq!(n0.neighbors().len(), 2);
    assert_eq!(n0.incident().len(), 1);

    // The quad is all boundary: four horizon edges, every vertex on the
    // horizon, and the diagonal is interior.
    for v in 0..4 {
        assert!(graph.is_horizon_vertex(VertexId(v)));
    }
    assert!(!graph.is_horizon_edge(&Edge::new(VertexId(1), VertexId(2))));
    assert!(graph.is_horizon_edge(&Edge::new(VertexId(0), VertexId(1))));
}

#[test]
fn unreferenced_vertices_are_not_live() {
    let positions = [
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(0.0, 1.0, 0.0),
        point(9.0, 9.0, 9.0),
    ];
    let facets = [facet(0, 1, 2)];

    let graph = DecimationGraph::new(&facets, &positions).unwrap();

    assert_eq!(graph.live_vertex_count(), 3);
    assert!(graph.node(VertexId(3)).is_none());
}

#[test]
fn construction_rejects_non_manifold() {
    let positions = [
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(0.0, 1.0, 0.0),
        point(0.0, 0.0, 1.0),
        point(1.0, 1.0, 1.0),
    ];
    let facets = [facet(0, 1, 2), facet(1, 0, 3), facet(0, 1, 4)];

    assert_eq!(
        DecimationGraph::new(&facets, &positions).err(),
        Some(InvalidMesh::NonManifoldEdge {
            edge: Edge::new(VertexId(0), VertexId(1))
        })
    );
}
