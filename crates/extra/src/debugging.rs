//! Tools to inspect meshes while debugging.

use mesh::{Edge, Facet};

use std::collections::HashMap;

/// Counts how many facets touch every edge of `facets`.
pub fn edge_census(facets: &[Facet]) -> HashMap<Edge, u32> {
    let mut census = HashMap::with_capacity(facets.len() * 3 / 2);
    for facet in facets {
        for edge in &facet.edges() {
            *census.entry(*edge).or_insert(0) += 1;
        }
    }

    census
}

/// Whether every edge of `facets` is shared by exactly two facets.
pub fn is_closed(facets: &[Facet]) -> bool {
    edge_census(facets).values().all(|&count| count == 2)
}

/// The number of boundary edges (touched by exactly one facet).
pub fn boundary_edge_count(facets: &[Facet]) -> usize {
    edge_census(facets)
        .values()
        .filter(|&&count| count == 1)
        .count()
}

#[cfg(test)]
use mesh::VertexId;

#[test]
fn census() {
    let facets = [
        Facet::new(VertexId(0), VertexId(1), VertexId(2)),
        Facet::new(VertexId(2), VertexId(1), VertexId(3)),
    ];

    let census = edge_census(&facets);
    assert_eq!(census[&Edge::new(VertexId(1), VertexId(2))], 2);
    assert_eq!(census[&Edge::new(VertexId(0), VertexId(1))], 1);
    assert_eq!(census.len(), 5);

    assert!(!is_closed(&facets));
    assert_eq!(boundary_edge_count(&facets), 4);
}
