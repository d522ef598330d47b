//! Extraction of the boundary ("horizon") edges of a facet list.

use crate::{Edge, Facet};

use std::collections::HashMap;

#[derive(Copy, Clone, Debug, PartialEq)]
enum EdgeStatus {
    Unique,
    Shared,
}

/// Returns the edges that are touched by exactly one facet in `facets`.
///
/// On a closed mesh the result is empty; on a mesh with open boundaries it
/// is the boundary loops. An edge touched by three or more facets is
/// classified as shared, the same as an ordinary interior edge; feeding
/// non-manifold facet lists to the rest of the pipeline is the caller's
/// problem, not this function's.
///
/// The returned edges are sorted by index pair so that the output does not
/// depend on hash iteration order.
pub fn horizon_edges(facets: &[Facet]) -> Vec<Edge> {
    let mut status = HashMap::with_capacity(facets.len() * 3 / 2);

    for facet in facets {
        for edge in &facet.edges() {
            status
                .entry(*edge)
                .and_modify(|s| *s = EdgeStatus::Shared)
                .or_insert(EdgeStatus::Unique);
        }
    }

    let mut horizon: Vec<Edge> = status
        .iter()
        .filter(|&(_, s)| *s == EdgeStatus::Unique)
        .map(|(e, _)| *e)
        .collect();
    horizon.sort_unstable_by_key(|e| e.normalized());

    horizon
}

#[cfg(test)]
use crate::VertexId;

#[cfg(test)]
fn facet(a: u32, b: u32, c: u32) -> Facet {
    Facet::new(VertexId(a), VertexId(b), VertexId(c))
}

#[test]
fn single_facet() {
    let horizon = horizon_edges(&[facet(0, 1, 2)]);

    assert_eq!(horizon.len(), 3);
    assert!(horizon.contains(&Edge::new(VertexId(0), VertexId(1))));
    assert!(horizon.contains(&Edge::new(VertexId(1), VertexId(2))));
    assert!(horizon.contains(&Edge::new(VertexId(2), VertexId(0))));
}

#[test]
fn shared_edge() {
    // Two triangles forming a quad: the diagonal is interior, the four
    // outer edges are the horizon.
    let facets = [facet(0, 1, 2), facet(2, 1, 3)];
    let horizon = horizon_edges(&facets);

    assert_eq!(horizon.len(), 4);
    assert!(!horizon.contains(&Edge::new(VertexId(1), VertexId(2))));
}

#[test]
fn closed_mesh_has_no_horizon() {
    let tetrahedron = [
        facet(0, 1, 2),
        facet(0, 3, 1),
        facet(0, 2, 3),
        facet(1, 3, 2),
    ];

    assert!(horizon_edges(&tetrahedron).is_empty());
}

#[test]
fn edge_multiplicity_matches_status() {
    // Exhaustive check of the contract: an edge is in the horizon if and
    // only if exactly one facet touches it. The third facet below makes the
    // edge {1, 2} non-manifold, which still counts as shared.
    let facets = [facet(0, 1, 2), facet(2, 1, 3), facet(1, 2, 4)];
    let horizon = horizon_edges(&facets);

    let mut all_edges: Vec<Edge> = facets.iter().flat_map(|f| f.edges()).collect();
    all_edges.sort_unstable_by_key(|e| e.normalized());
    all_edges.dedup();

    for edge in all_edges {
        let count = facets.iter().filter(|f| f.contains_edge(&edge)).count();
        assert_eq!(horizon.contains(&edge), count == 1, "edge {:?}", edge);
    }
}
