//! Legality, loss and the half-edge collapse itself.
//!
//! A half-edge collapse removes one endpoint of an edge by merging it into
//! the other, destroying the two triangles that share the edge. Everything
//! here works on a bounded neighborhood of the two endpoints; no global
//! pass over the graph is ever needed.

use crate::graph::DecimationGraph;
use crate::math::Point;
use crate::mesh::geom::arrayvec::ArrayVec;
use crate::mesh::geom::{face_normal, triangle_area};
use crate::mesh::{Edge, Facet, VertexId};

fn positioned(facet: &Facet, positions: &[Point]) -> [Point; 3] {
    [
        positions[facet.indices[0].to_usize()],
        positions[facet.indices[1].to_usize()],
        positions[facet.indices[2].to_usize()],
    ]
}

impl DecimationGraph {
    /// The two facets that collapsing `edge` would destroy, or `None` if
    /// the incident set of `v_keep` does not contain exactly two facets
    /// touching the edge.
    fn collapsing_facets(&self, v_keep: VertexId, edge: &Edge) -> Option<[Facet; 2]> {
        let node = self.node(v_keep)?;

        let mut found: ArrayVec<Facet, 2> = ArrayVec::new();
        for facet in node.incident() {
            if facet.contains_edge(edge) && found.try_push(*facet).is_err() {
                // A third facet on the edge: non-manifold.
                return None;
            }
        }

        found.into_inner().ok()
    }

    /// Whether collapsing `v_remove` into `v_keep` is safe.
    ///
    /// Rejects the collapse if any of the following holds:
    ///
    /// - `v_remove` sits on the original mesh boundary (collapsing it would
    ///   make the boundary drift inwards),
    /// - the two vertices are not adjacent, or either is gone,
    /// - the edge is not shared by exactly two facets,
    /// - the endpoints have more or fewer than two neighbors in common,
    ///   the telltale of a configuration that would produce a duplicate
    ///   triangle after the collapse,
    /// - rerouting a retained facet of `v_remove` to `v_keep` would
    ///   recreate a facet `v_keep` already has (a tetrahedral pocket
    ///   collapsing onto itself), or flip the facet's normal.
    pub fn collapse_is_legal(
        &self,
        v_keep: VertexId,
        v_remove: VertexId,
        positions: &[Point],
    ) -> bool {
        if self.is_horizon_vertex(v_remove) {
            return false;
        }

        let (keep, remove) = match (self.node(v_keep), self.node(v_remove)) {
            (Some(keep), Some(remove)) => (keep, remove),
            _ => return false,
        };
        if !keep.neighbors().contains(&v_remove) {
            return false;
        }

        let edge = Edge::new(v_keep, v_remove);
        let collapsing = match self.collapsing_facets(v_keep, &edge) {
            Some(facets) => facets,
            None => return false,
        };

        let shared = keep
            .neighbors()
            .iter()
            .filter(|n| remove.neighbors().contains(n))
            .count();
        if shared != 2 {
            return false;
        }

        for facet in remove.incident() {
            if *facet == collapsing[0] || *facet == collapsing[1] {
                continue;
            }

            let mut rerouted = *facet;
            rerouted.replace(v_remove, v_keep);

            // The rerouted facet contains v_keep, so any facet it would
            // duplicate is incident to v_keep as well.
            if keep.incident().contains(&rerouted) {
                return false;
            }

            let [p0, p1, p2] = positioned(facet, positions);
            let before = face_normal(p0, p1, p2);
            let [p0, p1, p2] = positioned(&rerouted, positions);
            let after = face_normal(p0, p1, p2);

            // NaN normals (degenerate facets) fail this check and reject
            // the collapse.
            if !(before.dot(after) >= 0.0) {
                return false;
            }
        }

        true
    }

    /// How much surface information collapsing `v_remove` into `v_keep`
    /// destroys.
    ///
    /// The loss is `‖n0 × n1‖ · (a0 + a1)` over the two facets sharing the
    /// collapsing edge: the cross product's magnitude is the sine of the
    /// angle between the two face normals, so coplanar pairs score zero and
    /// sharp folds score their combined area. Returns `None` when the edge
    /// is not shared by exactly two facets of `v_keep`, in which case the
    /// metric is meaningless.
    pub fn collapse_loss(
        &self,
        v_keep: VertexId,
        v_remove: VertexId,
        positions: &[Point],
    ) -> Option<f32> {
        let edge = Edge::new(v_keep, v_remove);
        let [f0, f1] = self.collapsing_facets(v_keep, &edge)?;

        let [p0, p1, p2] = positioned(&f0, positions);
        let n0 = face_normal(p0, p1, p2);
        let a0 = triangle_area(p0, p1, p2);

        let [p0, p1, p2] = positioned(&f1, positions);
        let n1 = face_normal(p0, p1, p2);
        let a1 = triangle_area(p0, p1, p2);

        Some(n0.cross(n1).square_length().sqrt() * (a0 + a1))
    }

    /// Collapses `v_remove` into `v_keep`, removing one vertex and the two
    /// facets sharing the edge between them.
    ///
    /// The caller must have established legality via
    /// [`collapse_is_legal`](#method.collapse_is_legal) and not mutated the
    /// graph since; anything else is a programmer error and panics.
    pub(crate) fn collapse(&mut self, v_keep: VertexId, v_remove: VertexId) {
        let edge = Edge::new(v_keep, v_remove);
        debug_assert!(!self.is_horizon_edge(&edge));

        let collapsing = match self.collapsing_facets(v_keep, &edge) {
            Some(facets) => facets,
            None => panic!(
                "collapse of {:?} into {:?}: edge is not shared by exactly two facets",
                v_remove, v_keep
            ),
        };

        let removed = match self.take_node(v_remove) {
            Some(node) => node,
            None => panic!("collapse of missing vertex {:?}", v_remove),
        };
        debug_assert!(removed.neighbors().contains(&v_keep));

        // The nodes whose neighborhoods the collapse touches: everything
        // adjacent to either endpoint, except the vertex being removed.
        let mut affected: Vec<VertexId> = Vec::with_capacity(
            removed.neighbors().len() + self.node(v_keep).map_or(0, |n| n.neighbors().len()),
        );
        for &v in self
            .node(v_keep)
            .expect("collapse into missing vertex")
            .neighbors()
        {
            if v != v_remove {
                affected.push(v);
            }
        }
        for &v in removed.neighbors() {
            if v != v_remove && !affected.contains(&v) {
                affected.push(v);
            }
        }
        debug_assert!(affected.contains(&v_keep));

        // The kept vertex inherits every facet of the removed one; the two
        // collapsing facets are already on both and get erased below.
        {
            let keep = self.node_mut(v_keep).unwrap();
            for facet in removed.incident() {
                keep.add_facet(*facet);
            }
        }

        for &v in &affected {
            let node = match self.node_mut(v) {
                Some(node) => node,
                None => panic!("affected vertex {:?} is missing", v),
            };
            node.dirty = true;

            node.remove_facet(&collapsing[0]);
            node.remove_facet(&collapsing[1]);

            // Reroute the facets that still point at the removed vertex.
            let stale: Vec<Facet> = node
                .incident()
                .iter()
                .filter(|f| f.contains(v_remove))
                .copied()
                .collect();
            for facet in stale {
                node.remove_facet(&facet);
                let mut rerouted = facet;
                let replaced = rerouted.replace(v_remove, v_keep);
                debug_assert!(replaced);
                node.add_facet(rerouted);
            }

            node.remove_neighbor(v_remove);
            if v != v_keep {
                node.add_neighbor(v_keep);
            }
        }

        // The kept vertex also inherits the removed vertex's neighbors.
        let keep = self.node_mut(v_keep).unwrap();
        for &v in removed.neighbors() {
            if v != v_keep {
                keep.add_neighbor(v);
            }
        }
    }
}
