//! Error types for flapcut operations.

use thiserror::Error;

/// Errors that can occur while building a flap outline.
///
/// Degenerate corners and infeasible fillet radii are not errors: they are
/// collapsed or clamped where they occur. Only inputs that make the geometry
/// undefined surface here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    /// A zero-length vector was normalized, e.g. two coincident
    /// consecutive corner points or a mirror line through a single point.
    #[error("degenerate vector: cannot normalize a zero-length edge")]
    DegenerateVector,

    /// A shape parameter is not usable (non-finite, or non-positive where a
    /// length is required).
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Field name as it appears in the parameter record.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}
