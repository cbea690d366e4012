//! 2D affine maps over points.
//!
//! `Affine2` is the map `x ↦ M x + t`. Kept trivial: no cached inverse,
//! inverses are computed on demand where needed.

use nalgebra::{Matrix2, Vector2};

use crate::point::Point2D;

/// 2D affine map: `x ↦ M x + t`.
#[derive(Clone, Copy, Debug)]
pub struct Affine2 {
    pub m: Matrix2<f64>,
    pub t: Vector2<f64>,
}

impl Affine2 {
    #[inline]
    pub fn identity() -> Affine2 {
        Affine2 {
            m: Matrix2::identity(),
            t: Vector2::zeros(),
        }
    }

    /// Pure translation by `delta`.
    #[inline]
    pub fn translation(delta: Point2D) -> Affine2 {
        Affine2 {
            m: Matrix2::identity(),
            t: delta.into(),
        }
    }

    /// Counter-clockwise rotation about the origin by `theta` radians.
    pub fn rotation(theta: f64) -> Affine2 {
        let (s, c) = theta.sin_cos();
        Affine2 {
            m: Matrix2::new(c, -s, s, c),
            t: Vector2::zeros(),
        }
    }

    /// Inverse map if `M` is invertible; `None` when `det(M) ≈ 0`.
    pub fn inverse(&self) -> Option<Affine2> {
        self.m.try_inverse().map(|minv| Affine2 {
            m: minv,
            t: -minv * self.t,
        })
    }

    /// Composition `self ∘ other`.
    #[inline]
    pub fn compose(&self, other: &Affine2) -> Affine2 {
        Affine2 {
            m: self.m * other.m,
            t: self.m * other.t + self.t,
        }
    }

    /// Apply the map to a point.
    #[inline]
    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::from(self.m * Vector2::from(p) + self.t)
    }
}
