//! Fillet radius feasibility.

use super::CornerFrame;
use crate::error::GeomError;
use crate::primitives::Point2;
use num_traits::Float;

/// Returns the largest radius whose tangent points still lie on both
/// incident edges: `min(|corner→prev|, |corner→next|) · tan(half_angle)`.
///
/// Colinear corners have no room for a fillet and return zero.
///
/// When the incoming neighbour is itself a rounded corner, pass that
/// corner's outgoing tangent point as `prev` so the edge length reflects
/// what is left of the edge.
///
/// # Errors
///
/// [`GeomError::DegenerateVector`] if the corner coincides with one of its
/// neighbours.
pub fn max_feasible_radius<F: Float>(
    prev: Point2<F>,
    corner: Point2<F>,
    next: Point2<F>,
) -> Result<F, GeomError> {
    let frame = CornerFrame::new(prev, corner, next)?;
    if frame.is_degenerate() {
        return Ok(F::zero());
    }
    Ok(frame.len_prev.min(frame.len_next) * frame.half_angle().tan())
}

/// Clamps a requested radius into `[0, max]`.
#[inline]
pub fn clamp_radius<F: Float>(requested: F, max: F) -> F {
    requested.min(max).max(F::zero())
}
