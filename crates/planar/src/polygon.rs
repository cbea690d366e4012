//! Vertex-list polygon aggregate.
//!
//! Purpose
//! - `Polygon` owns an ordered vertex sequence whose length is fixed at
//!   construction. The only vertex-mutating operations are whole-shape
//!   translation and affine transform; there is no add/remove API.
//!
//! Conventions
//! - Centroid is the arithmetic mean of the vertices, computed on read.
//! - Signed area uses the shoelace formula; positive for counter-clockwise
//!   vertex order. The sign is preserved, not normalized.
//! - Queries on an empty vertex list error with `InvalidState` instead of
//!   silently dividing by zero.

use std::fmt;

use crate::affine::Affine2;
use crate::error::{GeomError, Result};
use crate::point::Point2D;

/// Polygon as an ordered, owned vertex sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point2D>,
}

impl Polygon {
    /// Take ownership of the vertex sequence. The length is fixed from here
    /// on; an empty sequence is representable but most queries reject it.
    pub fn new(vertices: Vec<Point2D>) -> Polygon {
        Polygon { vertices }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    /// Arithmetic mean of the vertices.
    ///
    /// Errors with `InvalidState` on zero vertices (an empty polygon is a
    /// programmer error, not a geometric object).
    pub fn centroid(&self) -> Result<Point2D> {
        if self.vertices.is_empty() {
            return Err(GeomError::InvalidState("centroid of an empty polygon"));
        }
        let mut acc = Point2D::new(0.0, 0.0);
        for v in &self.vertices {
            acc += *v;
        }
        Ok(acc / self.vertices.len() as f64)
    }

    /// Shift every vertex by `delta` (rigid translation).
    pub fn translate_by(&mut self, delta: Point2D) {
        for v in &mut self.vertices {
            *v += delta;
        }
    }

    /// Rigid translation moving the centroid onto `target`.
    ///
    /// Fails (without mutation) on an empty polygon.
    pub fn translate_center_to(&mut self, target: Point2D) -> Result<()> {
        let delta = target - self.centroid()?;
        self.translate_by(delta);
        Ok(())
    }

    /// Signed shoelace area over the vertex loop.
    ///
    /// Positive for counter-clockwise winding. Errors with `InvalidState`
    /// below 3 vertices.
    pub fn signed_area(&self) -> Result<f64> {
        let n = self.vertices.len();
        if n < 3 {
            return Err(GeomError::InvalidState(
                "signed area needs at least 3 vertices",
            ));
        }
        let mut a = 0.0;
        for i in 0..n {
            let p = self.vertices[i];
            let q = self.vertices[(i + 1) % n];
            a += p.x * q.y - q.x * p.y;
        }
        Ok(a * 0.5)
    }

    /// Map every vertex through an affine map, in place.
    pub fn transform(&mut self, f: &Affine2) {
        for v in &mut self.vertices {
            *v = f.apply(*v);
        }
    }
}

impl fmt::Display for Polygon {
    /// Bracketed, comma-separated vertex rendering in vertex order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "]")
    }
}

/// Triangle: a polygon constrained to exactly 3 vertices.
///
/// The constraint makes centroid and translation infallible and enables the
/// specialized 3-point shoelace form.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    poly: Polygon,
}

impl Triangle {
    /// Errors with `InvalidArgument` unless exactly 3 vertices are given.
    pub fn new(vertices: Vec<Point2D>) -> Result<Triangle> {
        if vertices.len() != 3 {
            return Err(GeomError::InvalidArgument {
                expected: 3,
                got: vertices.len(),
            });
        }
        Ok(Triangle {
            poly: Polygon::new(vertices),
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Point2D] {
        self.poly.vertices()
    }

    #[inline]
    pub fn as_polygon(&self) -> &Polygon {
        &self.poly
    }

    /// Signed area via the 3-point shoelace form
    /// `(x0(y1−y2) + x1(y2−y0) + x2(y0−y1)) / 2`.
    pub fn signed_area(&self) -> f64 {
        let v = self.poly.vertices();
        let abc = v[0].x * (v[1].y - v[2].y);
        let bca = v[1].x * (v[2].y - v[0].y);
        let cab = v[2].x * (v[0].y - v[1].y);
        (abc + bca + cab) / 2.0
    }

    /// Arithmetic mean of the three vertices.
    pub fn centroid(&self) -> Point2D {
        let v = self.poly.vertices();
        (v[0] + v[1] + v[2]) / 3.0
    }

    /// Rigid translation moving the centroid onto `target`.
    pub fn translate_center_to(&mut self, target: Point2D) {
        let delta = target - self.centroid();
        self.poly.translate_by(delta);
    }

    /// Map every vertex through an affine map, in place.
    pub fn transform(&mut self, f: &Affine2) {
        self.poly.transform(f);
    }
}

impl fmt::Display for Triangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.poly.fmt(f)
    }
}
