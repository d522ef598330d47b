#![deny(bare_trait_objects)]

//! Triangle mesh decimation in Rust.
//!
//! # Crates
//!
//! This meta-crate (`talus`) reexports the following sub-crates for
//! convenience:
//!
//! * **talus_decimation** - The decimation engine: scores, gates and
//!   applies half-edge collapses until a target vertex count is met.
//! * **talus_mesh** - Indexed triangle mesh storage, validation, boundary
//!   extraction, vertex remapping and normal recomputation.
//! * **talus_geom** - 3D point, vector and triangle math on top of euclid.
//! * **talus_extra** - Additional testing and debugging tools (reference
//!   meshes, OBJ input/output), behind the `extra` feature flag.
//!
//! Each `talus_<name>` crate is reexported as a `<name>` module in `talus`.
//!
//! # Feature flags
//!
//! Serialization with serde can be enabled on each crate with the
//! `serialization` feature flag (disabled by default). The `talus_extra`
//! dependency is disabled by default and can be added with the `extra`
//! feature flag.
//!
//! # Example
//!
//! Halving the vertex count of a mesh, then compacting the result into a
//! densely indexed mesh:
//!
//! ```
//! use talus::decimation::{DecimationOptions, Decimator};
//! use talus::math::point;
//! use talus::mesh::{remap, Facet, TriangleMesh, VertexId};
//!
//! fn main() -> Result<(), talus::decimation::DecimationError> {
//!     // An octahedron.
//!     let mesh = TriangleMesh {
//!         positions: vec![
//!             point(1.0, 0.0, 0.0),
//!             point(-1.0, 0.0, 0.0),
//!             point(0.0, 1.0, 0.0),
//!             point(0.0, -1.0, 0.0),
//!             point(0.0, 0.0, 1.0),
//!             point(0.0, 0.0, -1.0),
//!         ],
//!         facets: [
//!             [0, 2, 4], [2, 1, 4], [1, 3, 4], [3, 0, 4],
//!             [2, 0, 5], [1, 2, 5], [3, 1, 5], [0, 3, 5],
//!         ]
//!         .iter()
//!         .map(|f| Facet::new(VertexId(f[0]), VertexId(f[1]), VertexId(f[2])))
//!         .collect(),
//!     };
//!
//!     let mut facets = Vec::new();
//!     let mut decimator = Decimator::new();
//!     let info = decimator.decimate(
//!         &mesh.facets,
//!         &mesh.positions,
//!         &DecimationOptions::compression_factor(1.5),
//!         &mut facets,
//!     )?;
//!
//!     // The surviving facets still index the original positions.
//!     let lod = remap::compact(&facets, &mesh.positions);
//!     assert_eq!(lod.vertex_count(), info.vertex_count);
//!
//!     Ok(())
//! }
//! ```

pub use talus_decimation as decimation;

pub use decimation::geom;
pub use decimation::mesh;

pub use mesh::math;

#[cfg(feature = "extra")]
pub use talus_extra as extra;
