use crate::graph::DecimationGraph;
use crate::mesh::{horizon_edges, remap, Facet, TriangleMesh, VertexId};
use crate::{DecimationError, DecimationInfo, DecimationOptions, Decimator, UnsupportedParameter};

use talus_extra::debugging::is_closed;
use talus_extra::shapes;

use std::collections::HashSet;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

fn decimate(mesh: &TriangleMesh, factor: f32) -> (Vec<Facet>, DecimationInfo) {
    let mut output = Vec::new();
    let mut decimator = Decimator::new();
    let info = decimator
        .decimate(
            &mesh.facets,
            &mesh.positions,
            &DecimationOptions::compression_factor(factor),
            &mut output,
        )
        .unwrap();

    (output, info)
}

fn vertex_set(facets: &[Facet]) -> HashSet<VertexId> {
    facets.iter().flat_map(|f| f.indices).collect()
}

/// A closed mesh with consistent winding stores every directed edge exactly
/// once, and always together with its opposite.
fn has_consistent_winding(facets: &[Facet]) -> bool {
    let mut directed = HashSet::new();
    for facet in facets {
        let [a, b, c] = facet.indices;
        for &(from, to) in &[(a, b), (b, c), (c, a)] {
            if !directed.insert((from, to)) {
                return false;
            }
        }
    }

    directed.iter().all(|&(from, to)| directed.contains(&(to, from)))
}

#[test]
fn single_triangle_is_untouched() {
    // All three vertices are on the horizon, so nothing can collapse.
    let mesh = shapes::single_triangle();
    let (output, info) = decimate(&mesh, 2.0);

    assert_eq!(info.vertex_count, 3);
    assert_eq!(info.collapses, 0);
    assert_eq!(output, mesh.facets);
}

#[test]
fn tetrahedron_is_untouched() {
    // No horizon, but every candidate fails the shared-neighbor rule: the
    // endpoints of any edge share both remaining vertices plus each other's
    // whole neighborhood.
    let mesh = shapes::tetrahedron();
    let (output, info) = decimate(&mesh, 2.0);

    assert_eq!(info.vertex_count, 4);
    assert_eq!(output.len(), 4);
    for facet in &mesh.facets {
        assert!(output.contains(facet));
    }
}

#[test]
fn icosahedron_halves() {
    let mesh = shapes::icosahedron();
    let (output, info) = decimate(&mesh, 2.0);

    assert!(info.vertex_count <= 6, "reached {}", info.vertex_count);
    assert!(info.collapses >= 6);

    // Still a closed, consistently wound manifold, and the facet count of a
    // closed genus-0 triangulation: F = 2V - 4.
    assert!(is_closed(&output));
    assert!(has_consistent_winding(&output));
    assert_eq!(output.len(), 2 * info.vertex_count - 4);
    assert_eq!(vertex_set(&output).len(), info.vertex_count);
}

#[test]
fn planar_grid_keeps_its_boundary() {
    let mesh = shapes::planar_grid(10, 10);
    assert_eq!(mesh.facet_count(), 200);

    let boundary: HashSet<VertexId> = horizon_edges(&mesh.facets)
        .iter()
        .flat_map(|e| vec![e.a, e.b])
        .collect();
    assert_eq!(boundary.len(), 40);

    let (output, info) = decimate(&mesh, 4.0);

    // The interior collapses, the boundary ring never does; with 40
    // boundary vertices the requested 30 is out of reach.
    assert!(info.vertex_count < 121);
    assert!(info.vertex_count >= 40);

    let survivors = vertex_set(&output);
    for v in &boundary {
        assert!(survivors.contains(v), "boundary vertex {:?} was removed", v);
    }
}

#[test]
fn interior_grid_edges_are_free() {
    let mesh = shapes::planar_grid(10, 10);
    let graph = DecimationGraph::new(&mesh.facets, &mesh.positions).unwrap();

    // All facets around an interior edge are coplanar, so collapsing it
    // loses nothing.
    let center = VertexId(5 * 11 + 5);
    let east = VertexId(5 * 11 + 6);
    let loss = graph.collapse_loss(center, east, &mesh.positions).unwrap();

    assert!(loss.abs() < 1e-5, "loss {}", loss);
}

#[test]
fn fan_disk_collapses_to_its_ring() {
    let mesh = shapes::fan_disk(8);
    let ring_edges = horizon_edges(&mesh.facets);
    assert_eq!(ring_edges.len(), 8);

    let (output, info) = decimate(&mesh, 2.0);

    // Only the center vertex is interior; once it is merged into the ring
    // the mesh cannot shrink further.
    assert_eq!(info.vertex_count, 8);
    assert_eq!(output.len(), 6);

    let survivors = vertex_set(&output);
    for k in 1..=8 {
        assert!(survivors.contains(&VertexId(k)));
    }
    assert_eq!(horizon_edges(&output), ring_edges);
}

#[test]
fn crease_loss() {
    let mesh = shapes::bent_quads(FRAC_PI_4);
    let graph = DecimationGraph::new(&mesh.facets, &mesh.positions).unwrap();

    // The two facets sharing the crease have unit normals 45 degrees
    // apart and a combined area of 1.
    let loss = graph
        .collapse_loss(VertexId(0), VertexId(2), &mesh.positions)
        .unwrap();
    assert!((loss - FRAC_PI_4.sin()).abs() < 1e-5, "loss {}", loss);

    // The diagonal of a flat quad is free.
    let loss = graph
        .collapse_loss(VertexId(1), VertexId(2), &mesh.positions)
        .unwrap();
    assert!(loss.abs() < 1e-5, "loss {}", loss);

    // An edge shared by less than two facets has no meaningful loss.
    assert_eq!(
        graph.collapse_loss(VertexId(0), VertexId(1), &mesh.positions),
        None
    );
}

#[test]
fn perpendicular_loss_is_the_combined_area() {
    let mesh = shapes::bent_quads(FRAC_PI_2);
    let graph = DecimationGraph::new(&mesh.facets, &mesh.positions).unwrap();

    let loss = graph
        .collapse_loss(VertexId(0), VertexId(2), &mesh.positions)
        .unwrap();
    assert!((loss - 1.0).abs() < 1e-5, "loss {}", loss);
}

#[test]
fn bent_quads_are_all_boundary() {
    let mesh = shapes::bent_quads(FRAC_PI_4);
    let (output, info) = decimate(&mesh, 2.0);

    assert_eq!(info.vertex_count, 6);
    assert_eq!(info.collapses, 0);
    assert_eq!(output.len(), 4);
}

#[test]
fn collapse_preserves_invariants() {
    let mesh = shapes::icosahedron();
    let mut graph = DecimationGraph::new(&mesh.facets, &mesh.positions).unwrap();
    graph.check_invariants();

    // Apply every collapse the legality rules allow, one at a time,
    // re-checking the whole graph after each.
    loop {
        let mut next = None;
        'search: for v in graph.live_vertices() {
            for &adjacent in graph.node(v).unwrap().neighbors() {
                if graph.collapse_is_legal(v, adjacent, &mesh.positions) {
                    next = Some((v, adjacent));
                    break 'search;
                }
            }
        }

        let (v_keep, v_remove) = match next {
            Some(pair) => pair,
            None => break,
        };

        let vertices = graph.live_vertex_count();
        let facets = graph.facet_count();

        graph.collapse(v_keep, v_remove);

        graph.check_invariants();
        assert!(graph.node(v_remove).is_none());
        assert_eq!(graph.live_vertex_count(), vertices - 1);
        assert_eq!(graph.facet_count(), facets - 2);
    }

    assert!(graph.live_vertex_count() >= 4);
}

#[test]
fn deterministic_output() {
    let mesh = shapes::icosahedron();
    let (first, first_info) = decimate(&mesh, 2.0);
    let (second, second_info) = decimate(&mesh, 2.0);

    assert_eq!(first, second);
    assert_eq!(first_info, second_info);
}

#[test]
fn compact_after_decimation() {
    let mesh = shapes::icosahedron();
    let (output, info) = decimate(&mesh, 2.0);

    let dense = remap::compact(&output, &mesh.positions);

    assert_eq!(dense.vertex_count(), info.vertex_count);
    assert_eq!(dense.facet_count(), output.len());
    assert!(is_closed(&dense.facets));
}

#[test]
fn rejects_bad_parameters() {
    let mesh = shapes::icosahedron();
    let mut output = Vec::new();
    let mut decimator = Decimator::new();

    for factor in &[1.0, 0.5, -2.0, f32::NAN, f32::INFINITY] {
        assert_eq!(
            decimator.decimate(
                &mesh.facets,
                &mesh.positions,
                &DecimationOptions::compression_factor(*factor),
                &mut output,
            ),
            Err(DecimationError::UnsupportedParameter(
                UnsupportedParameter::CompressionFactor
            ))
        );
    }

    assert_eq!(
        decimator.decimate(
            &mesh.facets,
            &mesh.positions,
            &DecimationOptions::default().with_batch_fraction(0.0),
            &mut output,
        ),
        Err(DecimationError::UnsupportedParameter(
            UnsupportedParameter::BatchFraction
        ))
    );
    assert!(output.is_empty());
}

#[test]
fn rejects_invalid_meshes() {
    let mesh = shapes::tetrahedron();
    let mut output = Vec::new();
    let mut decimator = Decimator::new();
    let options = DecimationOptions::default();

    // An index pointing outside of the position array.
    let mut facets = mesh.facets.clone();
    facets[0] = Facet::new(VertexId(0), VertexId(1), VertexId(9));
    let result = decimator.decimate(&facets, &mesh.positions, &options, &mut output);
    assert!(matches!(result, Err(DecimationError::InvalidMesh(_))));

    // Three facets sharing one edge.
    let mut facets = mesh.facets.clone();
    facets.push(Facet::new(VertexId(0), VertexId(1), VertexId(3)));
    let result = decimator.decimate(&facets, &mesh.positions, &options, &mut output);
    assert!(matches!(result, Err(DecimationError::InvalidMesh(_))));
}
