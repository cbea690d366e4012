//! Small 2D point/polygon geometry kernel.
//!
//! Purpose
//! - Provide a plain `f64` point/vector value type (`Point2D`) with the full
//!   componentwise operator set, bounds-checked component access, and a
//!   diagnostic creation-order index.
//! - Provide a vertex-list polygon aggregate (`Polygon`, `Triangle`) with
//!   centroid, rigid translation, and signed (shoelace) area.
//!
//! Conventions
//! - Arithmetic operators are total: division by zero and NaN follow IEEE
//!   semantics and never raise. Errors are reserved for contract violations
//!   (wrong arity, out-of-range index, empty polygon) and surface as
//!   `GeomError` via `Result`.
//! - Signed area is positive for counter-clockwise vertex order; the sign is
//!   preserved, never normalized away.

pub mod affine;
pub mod error;
pub mod point;
pub mod polygon;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use affine::Affine2;
pub use error::{GeomError, Result};
pub use point::{point2, Point2D};
pub use polygon::{Polygon, Triangle};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::affine::Affine2;
    pub use crate::error::GeomError;
    pub use crate::point::{point2, Point2D};
    pub use crate::polygon::{Polygon, Triangle};
    pub use crate::sample::{draw_polygon_radial, RadialCfg, ReplayToken};
}
