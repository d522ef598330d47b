use crate::utils::{face_normal, triangle_area};
use crate::{Point, Vector};

/// A 3D triangle defined by three points `a`, `b` and `c`.
///
/// The order of the points defines the triangle's winding, and therefore
/// the direction its normal points towards.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Triangle {
    pub a: Point,
    pub b: Point,
    pub c: Point,
}

impl Triangle {
    /// Returns the triangle's unit normal.
    ///
    /// The result has NaN components if the triangle is degenerate.
    #[inline]
    pub fn normal(&self) -> Vector {
        face_normal(self.a, self.b, self.c)
    }

    /// Returns the triangle's area.
    #[inline]
    pub fn area(&self) -> f32 {
        triangle_area(self.a, self.b, self.c)
    }

    /// Returns the triangle with `b` and `c` swapped, reversing the winding.
    #[inline]
    pub fn flip(&self) -> Self {
        Triangle {
            a: self.a,
            b: self.c,
            c: self.b,
        }
    }
}

#[cfg(test)]
use crate::{point, vector};

#[test]
fn test_triangle_normal() {
    let t = Triangle {
        a: point(0.0, 0.0, 1.0),
        b: point(1.0, 0.0, 1.0),
        c: point(0.0, 1.0, 1.0),
    };

    assert!((t.normal() - vector(0.0, 0.0, 1.0)).square_length() < 1e-12);
    assert!((t.flip().normal() - vector(0.0, 0.0, -1.0)).square_length() < 1e-12);
    assert_eq!(t.flip().flip(), t);
}

#[test]
fn test_triangle_area() {
    let t = Triangle {
        a: point(1.0, 1.0, 0.0),
        b: point(2.0, 1.0, 0.0),
        c: point(1.0, 2.0, 0.0),
    };

    assert!((t.area() - 0.5).abs() < 1e-6);
    assert!((t.flip().area() - 0.5).abs() < 1e-6);
}
