//! Reference meshes used in tests and examples.
//!
//! All shapes come with consistent counter-clockwise winding (normals
//! pointing outwards for the closed shapes, towards +z for the flat ones).

use mesh::math::point;
use mesh::{Facet, TriangleMesh, VertexId};

fn facet(a: u32, b: u32, c: u32) -> Facet {
    Facet::new(VertexId(a), VertexId(b), VertexId(c))
}

/// A single right triangle in the z = 0 plane.
pub fn single_triangle() -> TriangleMesh {
    TriangleMesh {
        positions: vec![
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            point(0.0, 1.0, 0.0),
        ],
        facets: vec![facet(0, 1, 2)],
    }
}

/// A regular tetrahedron centered on the origin.
pub fn tetrahedron() -> TriangleMesh {
    TriangleMesh {
        positions: vec![
            point(1.0, 1.0, 1.0),
            point(1.0, -1.0, -1.0),
            point(-1.0, 1.0, -1.0),
            point(-1.0, -1.0, 1.0),
        ],
        facets: vec![facet(0, 1, 2), facet(0, 2, 3), facet(0, 3, 1), facet(1, 3, 2)],
    }
}

/// A regular icosahedron centered on the origin (12 vertices, 20 facets).
pub fn icosahedron() -> TriangleMesh {
    let t = (1.0 + 5.0_f32.sqrt()) / 2.0;

    TriangleMesh {
        positions: vec![
            point(-1.0, t, 0.0),
            point(1.0, t, 0.0),
            point(-1.0, -t, 0.0),
            point(1.0, -t, 0.0),
            point(0.0, -1.0, t),
            point(0.0, 1.0, t),
            point(0.0, -1.0, -t),
            point(0.0, 1.0, -t),
            point(t, 0.0, -1.0),
            point(t, 0.0, 1.0),
            point(-t, 0.0, -1.0),
            point(-t, 0.0, 1.0),
        ],
        facets: vec![
            facet(0, 11, 5),
            facet(0, 5, 1),
            facet(0, 1, 7),
            facet(0, 7, 10),
            facet(0, 10, 11),
            facet(1, 5, 9),
            facet(5, 11, 4),
            facet(11, 10, 2),
            facet(10, 7, 6),
            facet(7, 1, 8),
            facet(3, 9, 4),
            facet(3, 4, 2),
            facet(3, 2, 6),
            facet(3, 6, 8),
            facet(3, 8, 9),
            facet(4, 9, 5),
            facet(2, 4, 11),
            facet(6, 2, 10),
            facet(8, 6, 7),
            facet(9, 8, 1),
        ],
    }
}

/// A flat grid of `cols` by `rows` unit cells in the z = 0 plane, each cell
/// split into two triangles.
pub fn planar_grid(cols: u32, rows: u32) -> TriangleMesh {
    assert!(cols > 0 && rows > 0);

    let mut positions = Vec::with_capacity(((cols + 1) * (rows + 1)) as usize);
    for j in 0..=rows {
        for i in 0..=cols {
            positions.push(point(i as f32, j as f32, 0.0));
        }
    }

    let index = |i: u32, j: u32| j * (cols + 1) + i;

    let mut facets = Vec::with_capacity((cols * rows * 2) as usize);
    for j in 0..rows {
        for i in 0..cols {
            facets.push(facet(index(i, j), index(i + 1, j), index(i, j + 1)));
            facets.push(facet(index(i, j + 1), index(i + 1, j), index(i + 1, j + 1)));
        }
    }

    TriangleMesh { positions, facets }
}

/// A flat disk in the z = 0 plane: a fan of `n` triangles around a center
/// vertex, with a boundary ring of `n` vertices.
///
/// The center vertex has index 0, the ring occupies `1..=n`.
pub fn fan_disk(n: u32) -> TriangleMesh {
    assert!(n >= 3);

    let mut positions = Vec::with_capacity(n as usize + 1);
    positions.push(point(0.0, 0.0, 0.0));
    for k in 0..n {
        let angle = 2.0 * std::f32::consts::PI * k as f32 / n as f32;
        positions.push(point(angle.cos(), angle.sin(), 0.0));
    }

    let mut facets = Vec::with_capacity(n as usize);
    for k in 1..=n {
        let next = if k == n { 1 } else { k + 1 };
        facets.push(facet(0, k, next));
    }

    TriangleMesh { positions, facets }
}

/// Two quads sharing an edge, folded by `angle` radians along it.
///
/// The shared crease runs from vertex 0 to vertex 2 along the y axis. The
/// right quad (vertices 0..=3) lies in the z = 0 plane; the left quad
/// (vertices 0, 2, 4, 5) is rotated so that the angle between the two face
/// normals is exactly `angle`. With `angle = 0.0` the whole sheet is flat.
pub fn bent_quads(angle: f32) -> TriangleMesh {
    let (sin, cos) = angle.sin_cos();

    TriangleMesh {
        positions: vec![
            point(0.0, 0.0, 0.0),
            point(1.0, 0.0, 0.0),
            point(0.0, 1.0, 0.0),
            point(1.0, 1.0, 0.0),
            point(-cos, 0.0, sin),
            point(-cos, 1.0, sin),
        ],
        facets: vec![
            facet(0, 1, 2),
            facet(2, 1, 3),
            facet(0, 2, 4),
            facet(4, 2, 5),
        ],
    }
}

#[cfg(test)]
use crate::debugging::is_closed;
#[cfg(test)]
use mesh::{horizon_edges, validate};

#[test]
fn shape_counts() {
    assert_eq!(single_triangle().facet_count(), 1);

    assert_eq!(tetrahedron().vertex_count(), 4);
    assert_eq!(tetrahedron().facet_count(), 4);

    assert_eq!(icosahedron().vertex_count(), 12);
    assert_eq!(icosahedron().facet_count(), 20);

    let grid = planar_grid(10, 10);
    assert_eq!(grid.vertex_count(), 121);
    assert_eq!(grid.facet_count(), 200);

    assert_eq!(fan_disk(8).vertex_count(), 9);
    assert_eq!(fan_disk(8).facet_count(), 8);

    assert_eq!(bent_quads(0.5).facet_count(), 4);
}

#[test]
fn shapes_are_valid() {
    for shape in &[
        single_triangle(),
        tetrahedron(),
        icosahedron(),
        planar_grid(4, 3),
        fan_disk(5),
        bent_quads(0.8),
    ] {
        assert_eq!(validate(&shape.facets, shape.vertex_count()), Ok(()));
    }
}

#[test]
fn closed_shapes() {
    assert!(is_closed(&tetrahedron().facets));
    assert!(is_closed(&icosahedron().facets));
    assert!(!is_closed(&planar_grid(2, 2).facets));
}

#[test]
fn grid_horizon() {
    // A 2x2 grid has 8 boundary edges and one boundary ring of 8 vertices.
    let grid = planar_grid(2, 2);
    let horizon = horizon_edges(&grid.facets);

    assert_eq!(horizon.len(), 8);
    for edge in &horizon {
        assert!(!edge.contains(VertexId(4)), "center vertex on the horizon");
    }
}
