//! 2D point/vector value type.
//!
//! Purpose
//! - `Point2D` is the crate's only scalar-carrying value type: two public
//!   `f64` components plus a diagnostic creation-order index drawn from a
//!   process-wide atomic counter.
//!
//! Conventions
//! - All binary operators are pure and return a fresh `Point2D` (with a
//!   fresh creation index). Compound assignment mutates components in place
//!   and keeps the receiver's index.
//! - Scalar subtraction is direction-sensitive: `p - s` subtracts `s` from
//!   each component, `s - p` computes `s - component`. The two differ by a
//!   sign (`s - p == -(p - s)`).
//! - Equality is structural on `(x, y)` only; the creation index never
//!   participates.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};
use std::sync::atomic::{AtomicU64, Ordering};

use nalgebra::Vector2;

use crate::error::{GeomError, Result};

/// Process-wide creation counter. Starts at 0, never reset; Relaxed is
/// enough since only uniqueness and monotonicity are promised.
static CREATION_COUNTER: AtomicU64 = AtomicU64::new(0);

/// 2D point/vector with mutable components and an immutable creation-order
/// index.
///
/// Invariants:
/// - `index` is assigned at construction and never changes; it identifies
///   the construction event, not the coordinates.
/// - No coordinate validation: NaN and infinities are stored verbatim.
#[derive(Clone, Copy, Debug)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
    index: u64,
}

impl Point2D {
    /// Construct from coordinates, drawing the next creation index.
    pub fn new(x: f64, y: f64) -> Point2D {
        let index = CREATION_COUNTER.fetch_add(1, Ordering::Relaxed);
        Point2D { x, y, index }
    }

    /// Construct from a 2-element slice.
    ///
    /// Errors with `InvalidArgument` for any other length.
    pub fn from_slice(seq: &[f64]) -> Result<Point2D> {
        if seq.len() != 2 {
            return Err(GeomError::InvalidArgument {
                expected: 2,
                got: seq.len(),
            });
        }
        Ok(Point2D::new(seq[0], seq[1]))
    }

    /// Euclidean norm `sqrt(x² + y²)`. NaN inputs propagate.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Diagnostic creation-order index.
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Bounds-checked component read: 0 → x, 1 → y.
    pub fn component(&self, i: usize) -> Result<f64> {
        match i {
            0 => Ok(self.x),
            1 => Ok(self.y),
            _ => Err(GeomError::IndexOutOfRange(i)),
        }
    }

    /// Bounds-checked component write: 0 → x, 1 → y.
    ///
    /// An out-of-range index leaves the receiver untouched.
    pub fn set_component(&mut self, i: usize, v: f64) -> Result<()> {
        match i {
            0 => {
                self.x = v;
                Ok(())
            }
            1 => {
                self.y = v;
                Ok(())
            }
            _ => Err(GeomError::IndexOutOfRange(i)),
        }
    }
}

/// Shorthand constructor.
#[inline]
pub fn point2(x: f64, y: f64) -> Point2D {
    Point2D::new(x, y)
}

impl PartialEq for Point2D {
    /// Structural on coordinates; the creation index is diagnostic only.
    fn eq(&self, other: &Point2D) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point2D({}, {})", self.x, self.y)
    }
}

impl From<Point2D> for Vector2<f64> {
    #[inline]
    fn from(p: Point2D) -> Vector2<f64> {
        Vector2::new(p.x, p.y)
    }
}

impl From<Vector2<f64>> for Point2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Point2D {
        Point2D::new(v.x, v.y)
    }
}

impl Add for Point2D {
    type Output = Point2D;

    fn add(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2D {
    type Output = Point2D;

    fn sub(self, rhs: Point2D) -> Point2D {
        Point2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<f64> for Point2D {
    type Output = Point2D;

    fn add(self, s: f64) -> Point2D {
        Point2D::new(self.x + s, self.y + s)
    }
}

impl Add<Point2D> for f64 {
    type Output = Point2D;

    fn add(self, p: Point2D) -> Point2D {
        Point2D::new(self + p.x, self + p.y)
    }
}

impl Sub<f64> for Point2D {
    type Output = Point2D;

    fn sub(self, s: f64) -> Point2D {
        Point2D::new(self.x - s, self.y - s)
    }
}

impl Sub<Point2D> for f64 {
    type Output = Point2D;

    /// Componentwise `s - c`; distinct from `Point2D - f64`.
    fn sub(self, p: Point2D) -> Point2D {
        Point2D::new(self - p.x, self - p.y)
    }
}

impl Mul<f64> for Point2D {
    type Output = Point2D;

    fn mul(self, s: f64) -> Point2D {
        Point2D::new(self.x * s, self.y * s)
    }
}

impl Mul<Point2D> for f64 {
    type Output = Point2D;

    fn mul(self, p: Point2D) -> Point2D {
        Point2D::new(self * p.x, self * p.y)
    }
}

impl Div<f64> for Point2D {
    type Output = Point2D;

    /// Total by design: a zero divisor yields IEEE infinities/NaN.
    fn div(self, s: f64) -> Point2D {
        Point2D::new(self.x / s, self.y / s)
    }
}

impl Neg for Point2D {
    type Output = Point2D;

    fn neg(self) -> Point2D {
        Point2D::new(-self.x, -self.y)
    }
}

impl AddAssign for Point2D {
    fn add_assign(&mut self, rhs: Point2D) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Point2D {
    fn sub_assign(&mut self, rhs: Point2D) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magnitude_pythagorean_triple() {
        // Exact in binary floating point.
        assert_eq!(Point2D::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn magnitude_propagates_nan() {
        assert!(Point2D::new(f64::NAN, 1.0).magnitude().is_nan());
    }

    #[test]
    fn from_slice_arity() {
        assert_eq!(
            Point2D::from_slice(&[1.0]),
            Err(GeomError::InvalidArgument {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            Point2D::from_slice(&[1.0, 2.0, 3.0]),
            Err(GeomError::InvalidArgument {
                expected: 2,
                got: 3
            })
        );
        let p = Point2D::from_slice(&[1.0, 2.0]).unwrap();
        assert_eq!(p, Point2D::new(1.0, 2.0));
    }

    #[test]
    fn component_access_bounds() {
        let mut p = Point2D::new(3.4, 7.1);
        assert_eq!(p.component(0), Ok(3.4));
        assert_eq!(p.component(1), Ok(7.1));
        assert_eq!(p.component(2), Err(GeomError::IndexOutOfRange(2)));

        p.set_component(0, 10.1).unwrap();
        assert_eq!(p, Point2D::new(10.1, 7.1));
        // Failed writes must not touch the receiver.
        assert_eq!(p.set_component(5, 0.0), Err(GeomError::IndexOutOfRange(5)));
        assert_eq!(p, Point2D::new(10.1, 7.1));
    }

    #[test]
    fn operator_table() {
        let a = Point2D::new(1.0, 2.0);
        let b = Point2D::new(0.5, -1.0);
        assert_eq!(a + b, Point2D::new(1.5, 1.0));
        assert_eq!(a - b, Point2D::new(0.5, 3.0));
        assert_eq!(a + 4.0, Point2D::new(5.0, 6.0));
        assert_eq!(4.0 + a, Point2D::new(5.0, 6.0));
        assert_eq!(a - 1.0, Point2D::new(0.0, 1.0));
        assert_eq!(1.0 - a, Point2D::new(0.0, -1.0));
        assert_eq!(a * 2.0, Point2D::new(2.0, 4.0));
        assert_eq!(2.0 * a, Point2D::new(2.0, 4.0));
        assert_eq!(a / 2.0, Point2D::new(0.5, 1.0));
        assert_eq!(-a, Point2D::new(-1.0, -2.0));
    }

    #[test]
    fn scalar_subtraction_is_not_commutative() {
        let p = Point2D::new(1.0, -2.5);
        let s = 0.75;
        assert_ne!(s - p, p - s);
        assert_eq!(s - p, -(p - s));
    }

    #[test]
    fn division_by_zero_is_total() {
        let q = Point2D::new(1.0, -1.0) / 0.0;
        assert_eq!(q.x, f64::INFINITY);
        assert_eq!(q.y, f64::NEG_INFINITY);
        let z = Point2D::new(0.0, 1.0) / 0.0;
        assert!(z.x.is_nan());
    }

    #[test]
    fn creation_index_is_monotone_and_ignored_by_eq() {
        let a = Point2D::new(1.0, 1.0);
        let b = Point2D::new(1.0, 1.0);
        assert!(b.index() > a.index());
        assert_eq!(a, b);
    }

    #[test]
    fn display_format() {
        assert_eq!(Point2D::new(3.4, 7.1).to_string(), "Point2D(3.4, 7.1)");
    }

    #[test]
    fn nalgebra_round_trip() {
        let p = point2(2.0, -3.0);
        let v: Vector2<f64> = p.into();
        assert_eq!(Point2D::from(v), p);
    }
}
