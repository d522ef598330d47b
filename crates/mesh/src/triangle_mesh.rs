use crate::math::Point;
use crate::{Edge, Facet, VertexId};

use std::collections::HashMap;
use std::fmt;

/// A triangle mesh: an array of vertex positions plus the facets indexing
/// into it.
///
/// This is dumb storage. Nothing enforces that the facets stay well formed
/// after construction; run [`validate`](fn.validate.html) when the data
/// comes from an untrusted place.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct TriangleMesh {
    pub positions: Vec<Point>,
    pub facets: Vec<Facet>,
}

impl TriangleMesh {
    pub fn new() -> Self {
        TriangleMesh {
            positions: Vec::new(),
            facets: Vec::new(),
        }
    }

    /// Builds a mesh from raw parts, checking the facets against the
    /// position array first.
    pub fn from_raw(positions: Vec<Point>, facets: Vec<Facet>) -> Result<Self, InvalidMesh> {
        validate(&facets, positions.len())?;

        Ok(TriangleMesh { positions, facets })
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn facet_count(&self) -> usize {
        self.facets.len()
    }
}

/// Why a facet list is not a valid triangulated 2-manifold.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidMesh {
    /// A facet refers to a vertex outside of the position array.
    IndexOutOfRange { facet: usize, index: VertexId },
    /// A facet uses the same vertex twice.
    DegenerateFacet { facet: usize },
    /// An edge is shared by three or more facets.
    NonManifoldEdge { edge: Edge },
}

impl fmt::Display for InvalidMesh {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidMesh::IndexOutOfRange { facet, index } => {
                write!(f, "Facet {} refers to {:?}, out of range", facet, index)
            }
            InvalidMesh::DegenerateFacet { facet } => {
                write!(f, "Facet {} uses the same vertex twice", facet)
            }
            InvalidMesh::NonManifoldEdge { edge } => {
                write!(
                    f,
                    "Edge {{{:?}, {:?}}} is shared by more than two facets",
                    edge.a, edge.b
                )
            }
        }
    }
}

impl std::error::Error for InvalidMesh {}

/// Checks that `facets` describes a triangulated 2-manifold over a position
/// array of `vertex_count` entries.
///
/// Verifies that every index is in range, that every facet has three
/// distinct indices, and that no edge is shared by more than two facets.
/// The first violation found is returned.
pub fn validate(facets: &[Facet], vertex_count: usize) -> Result<(), InvalidMesh> {
    for (i, facet) in facets.iter().enumerate() {
        for &index in &facet.indices {
            if index.to_usize() >= vertex_count {
                return Err(InvalidMesh::IndexOutOfRange { facet: i, index });
            }
        }

        let [a, b, c] = facet.indices;
        if a == b || b == c || a == c {
            return Err(InvalidMesh::DegenerateFacet { facet: i });
        }
    }

    let mut multiplicity: HashMap<Edge, u32> = HashMap::with_capacity(facets.len() * 3 / 2);
    for facet in facets {
        for edge in &facet.edges() {
            let count = multiplicity.entry(*edge).or_insert(0);
            *count += 1;
            if *count > 2 {
                return Err(InvalidMesh::NonManifoldEdge { edge: *edge });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
fn facet(a: u32, b: u32, c: u32) -> Facet {
    Facet::new(VertexId(a), VertexId(b), VertexId(c))
}

#[test]
fn validate_range() {
    assert_eq!(validate(&[facet(0, 1, 2)], 3), Ok(()));
    assert_eq!(
        validate(&[facet(0, 1, 3)], 3),
        Err(InvalidMesh::IndexOutOfRange {
            facet: 0,
            index: VertexId(3)
        })
    );
}

#[test]
fn validate_degenerate() {
    assert_eq!(
        validate(&[facet(0, 1, 2), facet(1, 2, 1)], 3),
        Err(InvalidMesh::DegenerateFacet { facet: 1 })
    );
}

#[test]
fn validate_non_manifold() {
    // Three facets fanning around the edge {0, 1}.
    let facets = [facet(0, 1, 2), facet(1, 0, 3), facet(0, 1, 4)];

    assert_eq!(
        validate(&facets, 5),
        Err(InvalidMesh::NonManifoldEdge {
            edge: Edge::new(VertexId(0), VertexId(1))
        })
    );
}
