#![deny(bare_trait_objects)]

//! Additional testing and debugging tools for the talus crates.

extern crate talus_mesh as mesh;

pub use mesh::geom::euclid;
pub use mesh::math;

pub mod debugging;
pub mod obj;
pub mod shapes;
