//! Vertex normal recomputation.

use crate::math::{vector, Vector};
use crate::TriangleMesh;

/// Computes smooth per-vertex normals by averaging the normals of the
/// incident facets, weighted by facet area.
///
/// The weighting falls out of the math for free: the raw cross product of
/// two facet edges has a length of twice the facet area, so summing the
/// unnormalized face normals and normalizing at the end weights large
/// facets more. Vertices referenced by no facet get a zero normal.
pub fn vertex_normals(mesh: &TriangleMesh) -> Vec<Vector> {
    let mut normals = vec![vector(0.0, 0.0, 0.0); mesh.positions.len()];

    for facet in &mesh.facets {
        let p0 = mesh.positions[facet.indices[0].to_usize()];
        let p1 = mesh.positions[facet.indices[1].to_usize()];
        let p2 = mesh.positions[facet.indices[2].to_usize()];
        let n = (p1 - p0).cross(p2 - p0);

        for index in &facet.indices {
            normals[index.to_usize()] += n;
        }
    }

    for n in &mut normals {
        let len = n.square_length().sqrt();
        if len > 0.0 {
            *n = *n / len;
        }
    }

    normals
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::{Facet, VertexId};

#[test]
fn flat_quad() {
    let mesh = TriangleMesh {
        positions: vec![
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            point(0.0, 1.0, 0.0),
            point(1.0, 1.0, 0.0),
        ],
        facets: vec![
            Facet::new(VertexId(0), VertexId(1), VertexId(2)),
            Facet::new(VertexId(2), VertexId(1), VertexId(3)),
        ],
    };

    for n in vertex_normals(&mesh) {
        assert!((n - vector(0.0, 0.0, 1.0)).square_length() < 1e-10);
    }
}

#[test]
fn unused_vertex() {
    let mesh = TriangleMesh {
        positions: vec![
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            point(0.0, 1.0, 0.0),
            point(5.0, 5.0, 5.0),
        ],
        facets: vec![Facet::new(VertexId(0), VertexId(1), VertexId(2))],
    };

    let normals = vertex_normals(&mesh);
    assert_eq!(normals[3], vector(0.0, 0.0, 0.0));
}
