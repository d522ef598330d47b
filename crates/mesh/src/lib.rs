#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]

//! Data structures and utilities to store and inspect indexed triangle meshes.
//!
//! This crate is reexported in [talus](https://docs.rs/talus/).
//!
//! # Overview
//!
//! A mesh is a flat array of 3D positions plus a list of [`Facet`]s, each an
//! index triple into the position array. The types here care about the
//! *index level* of a mesh (which vertices exist, which facets touch them,
//! where the boundary is) while the geometry itself lives in
//! [talus_geom](https://docs.rs/talus_geom/).
//!
//! The most useful items are:
//!
//! * [`Facet`] and [`Edge`] - index triples and pairs whose equality and
//!   hashing do not depend on the order of the indices.
//! * [`horizon_edges`] - extraction of the boundary ("horizon") edges of a
//!   facet list.
//! * [`validate`] - manifold and range checks for raw facet lists.
//! * [`remap::compact`] - renumbering of a sparse facet set into a densely
//!   indexed mesh.
//!
//! [`Facet`]: struct.Facet.html
//! [`Edge`]: struct.Edge.html
//! [`horizon_edges`]: fn.horizon_edges.html
//! [`validate`]: fn.validate.html
//! [`remap::compact`]: remap/fn.compact.html

pub use talus_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod facet;
mod horizon;
pub mod normals;
pub mod remap;
mod triangle_mesh;

#[doc(inline)]
pub use crate::facet::{Edge, Facet};
#[doc(inline)]
pub use crate::horizon::horizon_edges;
#[doc(inline)]
pub use crate::triangle_mesh::{validate, InvalidMesh, TriangleMesh};

use std::fmt;

pub mod math {
    //! f32 versions of the talus_geom types used everywhere. Most other
    //! talus crates reexport them.

    pub use crate::geom::{point, vector, Point, Vector};
}

/// ID of a vertex: an offset into a mesh's position array.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct VertexId(pub u32);

impl VertexId {
    pub const INVALID: Self = VertexId(u32::MAX);

    pub fn offset(self) -> u32 {
        self.0
    }

    pub fn to_usize(self) -> usize {
        self.0 as usize
    }

    pub fn from_usize(v: usize) -> Self {
        VertexId(v as u32)
    }
}

impl fmt::Debug for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "v#{}", self.0)
    }
}
