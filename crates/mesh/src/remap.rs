//! Compaction of a sparse facet set into a densely indexed mesh.

use crate::math::Point;
use crate::{Facet, TriangleMesh, VertexId};

use std::collections::HashMap;

/// Renumbers the vertices referenced by `facets` into the contiguous range
/// `0..n` and drops the positions nothing refers to anymore.
///
/// Decimation leaves the surviving facets pointing into the original
/// position array, with holes where vertices were collapsed away; this is
/// the step that turns such a sparse set back into a mesh fit for upload.
/// Surviving vertices keep their relative order, so the output is the same
/// for any permutation of `facets`.
///
/// Every index in `facets` must be a valid offset into `positions`.
pub fn compact(facets: &[Facet], positions: &[Point]) -> TriangleMesh {
    let mut used: Vec<VertexId> = facets.iter().flat_map(|f| f.indices).collect();
    used.sort_unstable();
    used.dedup();

    let mut remapped = HashMap::with_capacity(used.len());
    for (new_index, old) in used.iter().enumerate() {
        remapped.insert(*old, VertexId::from_usize(new_index));
    }

    let new_positions = used.iter().map(|v| positions[v.to_usize()]).collect();
    let new_facets = facets
        .iter()
        .map(|f| {
            Facet::new(
                remapped[&f.indices[0]],
                remapped[&f.indices[1]],
                remapped[&f.indices[2]],
            )
        })
        .collect();

    TriangleMesh {
        positions: new_positions,
        facets: new_facets,
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn compact_drops_unused_positions() {
    let positions = [
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(2.0, 0.0, 0.0),
        point(0.0, 1.0, 0.0),
        point(0.0, 2.0, 0.0),
    ];
    let facets = [Facet::new(VertexId(4), VertexId(1), VertexId(3))];

    let mesh = compact(&facets, &positions);

    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.facet_count(), 1);
    // Relative order of the survivors is preserved: 1 -> 0, 3 -> 1, 4 -> 2.
    assert_eq!(
        mesh.facets[0].indices,
        [VertexId(2), VertexId(0), VertexId(1)]
    );
    assert_eq!(mesh.positions[0], point(1.0, 0.0, 0.0));
    assert_eq!(mesh.positions[1], point(0.0, 1.0, 0.0));
    assert_eq!(mesh.positions[2], point(0.0, 2.0, 0.0));
}

#[test]
fn compact_is_identity_on_dense_input() {
    let positions = [
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(0.0, 1.0, 0.0),
    ];
    let facets = [Facet::new(VertexId(0), VertexId(1), VertexId(2))];

    let mesh = compact(&facets, &positions);

    assert_eq!(mesh.positions, positions);
    assert_eq!(mesh.facets[0].indices, facets[0].indices);
}
