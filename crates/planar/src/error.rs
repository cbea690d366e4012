//! Error kinds for the geometry kernel.
//!
//! Policy
//! - Errors are returned synchronously at the call site; there is no retry
//!   or recovery layer in this crate.
//! - Operators never error: floating-point edge cases (division by zero,
//!   NaN propagation) keep their IEEE semantics. Only contract violations
//!   are represented here.

use std::fmt;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GeomError>;

/// Contract violations surfaced by construction, indexing, and polygon
/// queries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeomError {
    /// A sequence of the wrong length was supplied (e.g. point construction
    /// from a slice, triangle construction).
    InvalidArgument { expected: usize, got: usize },
    /// Component index outside `{0, 1}`.
    IndexOutOfRange(usize),
    /// An operation was called on a polygon whose vertex list cannot
    /// support it (e.g. centroid of zero vertices).
    InvalidState(&'static str),
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidArgument { expected, got } => {
                write!(f, "invalid argument: expected {expected} elements, got {got}")
            }
            GeomError::IndexOutOfRange(i) => {
                write!(f, "component index out of range: {i} (valid: 0, 1)")
            }
            GeomError::InvalidState(msg) => write!(f, "invalid state: {msg}"),
        }
    }
}

impl std::error::Error for GeomError {}
