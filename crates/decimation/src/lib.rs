#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::float_cmp)]

//! Mesh decimation through batched half-edge collapses.
//!
//! This crate is reexported in [talus](https://docs.rs/talus/).
//!
//! ## Overview
//!
//! The most interesting types of this crate are:
//!
//! * [Decimator](struct.Decimator.html) - The driver: scores candidate
//!   collapses, applies them cheapest-first in batches, and iterates until
//!   the target vertex count is met.
//! * [DecimationGraph](graph/struct.DecimationGraph.html) - The mutable
//!   vertex graph the collapses are carried out on, one node per live
//!   vertex with its adjacency and incident facets.
//! * [DecimationOptions](struct.DecimationOptions.html) - Parameters for
//!   the decimator.
//!
//! ## The decimation pipeline
//!
//! Decimation consumes a facet list and a position array (for example the
//! result of loading an OBJ file) and produces a smaller facet list over
//! the *same* position array:
//!
//! 1. A [DecimationGraph](graph/struct.DecimationGraph.html) is built from
//!    the facets: per-vertex adjacency, per-vertex incident facet sets, and
//!    the set of boundary ("horizon") edges, which are pinned for the whole
//!    run so that open boundaries never erode.
//! 2. Each sweep scores every legal collapse with a local loss metric
//!    (cheap for small coplanar neighborhoods, expensive for sharp creases)
//!    and applies the cheapest half of the candidates, skipping any whose
//!    neighborhood was already touched in the sweep.
//! 3. When the vertex count drops below the target, or no legal collapse
//!    remains, the surviving facets are collected from the graph.
//!
//! The output still refers to the original position array; vertex
//! renumbering and normal recomputation are separate steps, provided by
//! [talus_mesh](https://docs.rs/talus_mesh/).

pub use talus_mesh as mesh;

pub use crate::mesh::geom;
pub use crate::mesh::math;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod collapse;
mod decimator;
mod error;
pub mod graph;

#[cfg(test)]
mod decimation_tests;

#[doc(inline)]
pub use crate::decimator::Decimator;

#[doc(inline)]
pub use crate::error::*;

pub use crate::mesh::{Edge, Facet, VertexId};

/// Parameters for the decimator.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct DecimationOptions {
    /// Ratio between the input and output vertex counts: a factor of 4
    /// asks for a mesh with a quarter of the vertices. The reached count
    /// can be higher when boundaries or legality rules get in the way.
    ///
    /// Must be finite and greater than 1.
    ///
    /// Default value: `DecimationOptions::DEFAULT_COMPRESSION_FACTOR`.
    pub compression_factor: f32,

    /// Upper bound on the sine of the dihedral angle a collapse is allowed
    /// to flatten; smaller values would preserve sharp creases at the
    /// expense of triangle quality.
    ///
    /// Currently inert: the parameter is accepted and kept for
    /// compatibility, but the scheduler does not consult it.
    ///
    /// Default value: `DecimationOptions::DEFAULT_MAX_SIN_THETA`.
    pub max_sin_theta: f32,

    /// Fraction of the sorted candidate list each sweep is allowed to
    /// apply. Larger fractions collapse more per sweep with staler loss
    /// values; smaller fractions re-score more often and run slower.
    ///
    /// Must be in `(0, 1]`.
    ///
    /// Default value: `DecimationOptions::DEFAULT_BATCH_FRACTION`.
    pub batch_fraction: f32,
}

impl DecimationOptions {
    pub const DEFAULT_COMPRESSION_FACTOR: f32 = 2.0;
    pub const DEFAULT_MAX_SIN_THETA: f32 = 1.0;
    pub const DEFAULT_BATCH_FRACTION: f32 = 0.5;

    pub const DEFAULT: Self = DecimationOptions {
        compression_factor: Self::DEFAULT_COMPRESSION_FACTOR,
        max_sin_theta: Self::DEFAULT_MAX_SIN_THETA,
        batch_fraction: Self::DEFAULT_BATCH_FRACTION,
    };

    #[inline]
    pub fn compression_factor(factor: f32) -> Self {
        Self::DEFAULT.with_compression_factor(factor)
    }

    #[inline]
    pub const fn with_compression_factor(mut self, factor: f32) -> Self {
        self.compression_factor = factor;
        self
    }

    #[inline]
    pub const fn with_max_sin_theta(mut self, max_sin_theta: f32) -> Self {
        self.max_sin_theta = max_sin_theta;
        self
    }

    #[inline]
    pub const fn with_batch_fraction(mut self, fraction: f32) -> Self {
        self.batch_fraction = fraction;
        self
    }
}

impl Default for DecimationOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// The result of a successful decimation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct DecimationInfo {
    /// Number of vertices still referenced by the output facets.
    pub vertex_count: usize,
    /// Number of half-edge collapses applied.
    pub collapses: usize,
    /// Number of score-and-apply sweeps run.
    pub sweeps: usize,
}

#[test]
fn default_options() {
    let options = DecimationOptions::default();

    assert_eq!(options.compression_factor, 2.0);
    assert_eq!(options.batch_fraction, 0.5);
}

#[test]
fn options_builders() {
    let options = DecimationOptions::compression_factor(8.0).with_batch_fraction(0.25);

    assert_eq!(options.compression_factor, 8.0);
    assert_eq!(options.batch_fraction, 0.25);
    assert_eq!(
        options.max_sin_theta,
        DecimationOptions::DEFAULT_MAX_SIN_THETA
    );
}
