#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::many_single_char_names)]
#![no_std]

//! Simple 3D geometric primitives on top of euclid.
//!
//! This crate is reexported in [talus](https://docs.rs/talus/).
//!
//! # Overview.
//!
//! This crate implements the small amount of vector maths the talus mesh
//! crates need to reason about triangles embedded in 3D space:
//!
//! - `f32` point and vector aliases over euclid,
//! - the [`Triangle`](struct.Triangle.html) primitive,
//! - face normal and area helpers.
//!
//! Positions are always `f32`. Meshes of a size where `f64` positions would
//! matter are better served by pre-conditioning the data than by running the
//! whole pipeline at double precision.

#[cfg(any(test, feature = "std"))]
extern crate std;

// Reexport dependencies.
pub use arrayvec;
pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod triangle;
pub mod utils;

#[doc(inline)]
pub use crate::triangle::Triangle;
pub use crate::utils::{face_normal, triangle_area};

/// Alias for `euclid::default::Point3D<f32>`.
pub type Point = euclid::default::Point3D<f32>;

/// Alias for `euclid::default::Vector3D<f32>`.
pub type Vector = euclid::default::Vector3D<f32>;

/// Shorthand for `Point::new(x, y, z)`.
#[inline]
pub fn point(x: f32, y: f32, z: f32) -> Point {
    Point::new(x, y, z)
}

/// Shorthand for `Vector::new(x, y, z)`.
#[inline]
pub fn vector(x: f32, y: f32, z: f32) -> Vector {
    Vector::new(x, y, z)
}
