//! Tangent points and center of a circular fillet.

use super::CornerFrame;
use crate::error::GeomError;
use crate::primitives::Point2;
use num_traits::Float;
use tracing::debug;

/// A circular fillet fitted into a corner.
///
/// `tangent1` lies on the incoming edge, `tangent2` on the outgoing edge,
/// both at the same distance from the corner. `center` is at `radius` from
/// both tangent points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilletResult<F> {
    /// Tangent point on the edge corner → incoming neighbour.
    pub tangent1: Point2<F>,
    /// Tangent point on the edge corner → outgoing neighbour.
    pub tangent2: Point2<F>,
    /// Center of the fillet circle.
    pub center: Point2<F>,
    /// Radius actually used.
    pub radius: F,
}

impl<F: Float> FilletResult<F> {
    /// A fillet collapsed onto its corner: every point is the corner and the
    /// radius is zero.
    #[inline]
    pub fn collapsed(corner: Point2<F>) -> Self {
        Self {
            tangent1: corner,
            tangent2: corner,
            center: corner,
            radius: F::zero(),
        }
    }

    /// Returns true if the fillet has no extent.
    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.radius <= F::zero()
    }
}

/// Computes the fillet of the given radius between the edges
/// `prev → corner` and `corner → next`.
///
/// With `half` the half-angle between the edges, the tangent points sit at
/// `radius / tan(half)` from the corner along each edge and the center sits
/// at `radius / sin(half)` along the internal bisector.
///
/// The radius is used as given (negative values count as zero). Callers that
/// need the tangent points to stay on the edges clamp it first with
/// [`super::clamp_radius`].
///
/// Colinear edges are not an error: the fillet collapses onto the corner.
///
/// # Errors
///
/// [`GeomError::DegenerateVector`] if the corner coincides with one of its
/// neighbours.
///
/// # Example
///
/// ```
/// use flapcut::fillet::compute_fillet;
/// use flapcut::Point2;
///
/// let f = compute_fillet(
///     Point2::new(0.0, 10.0),
///     Point2::new(0.0, 0.0),
///     Point2::new(10.0, 0.0),
///     3.0_f64,
/// ).unwrap();
/// assert!((f.tangent1.y - 3.0).abs() < 1e-9);
/// assert!((f.tangent2.x - 3.0).abs() < 1e-9);
/// ```
pub fn compute_fillet<F: Float>(
    prev: Point2<F>,
    corner: Point2<F>,
    next: Point2<F>,
    radius: F,
) -> Result<FilletResult<F>, GeomError> {
    let frame = CornerFrame::new(prev, corner, next)?;

    if frame.is_degenerate() {
        debug!(
            x = corner.x.to_f64(),
            y = corner.y.to_f64(),
            "colinear corner, fillet collapsed"
        );
        return Ok(FilletResult::collapsed(corner));
    }

    let radius = radius.max(F::zero());
    let half = frame.half_angle();
    let tangent_dist = radius / half.tan();
    let center_dist = radius / half.sin();

    // Internal bisector; non-zero because the corner is not straight
    let bisector = (frame.to_prev + frame.to_next).normalize()?;

    Ok(FilletResult {
        tangent1: corner + frame.to_prev * tangent_dist,
        tangent2: corner + frame.to_next * tangent_dist,
        center: corner + bisector * center_dist,
        radius,
    })
}
