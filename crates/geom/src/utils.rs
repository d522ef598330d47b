//! Various math tools that are mostly useful for the mesh crates.

use crate::{Point, Vector};

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// Computes the unit normal of the triangle `(p0, p1, p2)`.
///
/// The normal points towards the side from which the triangle's winding
/// appears counter-clockwise. The result has NaN components if the triangle
/// is degenerate (zero area).
#[inline]
pub fn face_normal(p0: Point, p1: Point, p2: Point) -> Vector {
    let n = (p1 - p0).cross(p2 - p0);
    n / n.square_length().sqrt()
}

/// Computes the area of the triangle `(p0, p1, p2)`.
#[inline]
pub fn triangle_area(p0: Point, p1: Point, p2: Point) -> f32 {
    0.5 * (p1 - p0).cross(p2 - p0).square_length().sqrt()
}

#[cfg(test)]
use crate::point;

#[test]
fn face_normal_orientation() {
    let n = face_normal(
        point(0.0, 0.0, 0.0),
        point(1.0, 0.0, 0.0),
        point(0.0, 1.0, 0.0),
    );
    assert!((n - crate::vector(0.0, 0.0, 1.0)).square_length() < 1e-12);

    // Swapping two vertices flips the normal.
    let n = face_normal(
        point(0.0, 0.0, 0.0),
        point(0.0, 1.0, 0.0),
        point(1.0, 0.0, 0.0),
    );
    assert!((n - crate::vector(0.0, 0.0, -1.0)).square_length() < 1e-12);
}

#[test]
fn area() {
    let a = triangle_area(
        point(0.0, 0.0, 0.0),
        point(2.0, 0.0, 0.0),
        point(0.0, 2.0, 0.0),
    );
    assert!((a - 2.0).abs() < 1e-6);

    // Area does not depend on the winding.
    let a = triangle_area(
        point(0.0, 0.0, 0.0),
        point(0.0, 2.0, 0.0),
        point(2.0, 0.0, 0.0),
    );
    assert!((a - 2.0).abs() < 1e-6);
}
