//! Corner rounding with circular fillets.
//!
//! A corner is three consecutive outline points: the incoming neighbour, the
//! corner itself and the outgoing neighbour. Rounding a corner runs three
//! steps in a fixed order:
//!
//! 1. [`max_feasible_radius`] / [`clamp_radius`] bound the requested radius
//!    so the tangent points stay on the incident edges,
//! 2. [`compute_fillet`] finds the tangent points and the circle center,
//! 3. [`derive_flags`] picks the SVG arc flags that draw the fillet.
//!
//! [`round_corner`] runs the whole sequence.
//!
//! # Example
//!
//! ```
//! use flapcut::fillet::round_corner;
//! use flapcut::Point2;
//!
//! let corner = round_corner(
//!     Point2::new(0.0, 10.0),
//!     Point2::new(0.0, 0.0),
//!     Point2::new(10.0, 0.0),
//!     3.0_f64,
//! ).unwrap();
//!
//! assert!((corner.fillet.center.x - 3.0).abs() < 1e-9);
//! assert!(!corner.flags.large_arc);
//! ```

mod arc;
mod clamp;
mod solver;

pub use arc::{derive_flags, ArcFlags, RoundedCorner};
pub use clamp::{clamp_radius, max_feasible_radius};
pub use solver::{compute_fillet, FilletResult};

use crate::error::GeomError;
use crate::primitives::{Point2, Vec2};
use num_traits::Float;

/// Corner angles (radians) closer than this to 0 or π are treated as
/// colinear and collapse the fillet onto the corner point.
pub const ANGLE_EPSILON: f64 = 1e-6;

/// Clamps the requested radius, solves the fillet and derives its arc flags.
///
/// # Errors
///
/// [`GeomError::DegenerateVector`] if the corner coincides with one of its
/// neighbours.
pub fn round_corner<F: Float>(
    prev: Point2<F>,
    corner: Point2<F>,
    next: Point2<F>,
    requested_radius: F,
) -> Result<RoundedCorner<F>, GeomError> {
    let max = max_feasible_radius(prev, corner, next)?;
    let radius = clamp_radius(requested_radius, max);
    let fillet = compute_fillet(prev, corner, next, radius)?;
    let flags = derive_flags(fillet.tangent1, fillet.tangent2, fillet.center);
    Ok(RoundedCorner { fillet, flags })
}

/// Local geometry at a corner shared by the solver and the clamp.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CornerFrame<F> {
    /// Unit vector from the corner toward the incoming neighbour.
    pub to_prev: Vec2<F>,
    /// Unit vector from the corner toward the outgoing neighbour.
    pub to_next: Vec2<F>,
    pub len_prev: F,
    pub len_next: F,
    /// Angle between the incident edges, in [0, π].
    pub angle: F,
}

impl<F: Float> CornerFrame<F> {
    pub(crate) fn new(
        prev: Point2<F>,
        corner: Point2<F>,
        next: Point2<F>,
    ) -> Result<Self, GeomError> {
        let edge_prev = prev - corner;
        let edge_next = next - corner;
        let to_prev = edge_prev.normalize()?;
        let to_next = edge_next.normalize()?;

        // Rounding can push the cosine just outside [-1, 1]
        let cos = to_prev.dot(to_next).max(-F::one()).min(F::one());

        Ok(Self {
            to_prev,
            to_next,
            len_prev: edge_prev.magnitude(),
            len_next: edge_next.magnitude(),
            angle: cos.acos(),
        })
    }

    /// True when the incident edges are colinear, either folded back onto
    /// each other or running straight through the corner.
    pub(crate) fn is_degenerate(&self) -> bool {
        let eps = constant::<F>(ANGLE_EPSILON);
        let pi = constant::<F>(std::f64::consts::PI);
        self.angle < eps || pi - self.angle < eps
    }

    #[inline]
    pub(crate) fn half_angle(&self) -> F {
        self.angle / (F::one() + F::one())
    }
}

/// Converts an `f64` constant into the working float type.
#[inline]
pub(crate) fn constant<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::nan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_frame_right_angle() {
        let frame = CornerFrame::new(
            Point2::new(0.0_f64, 10.0),
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
        )
        .unwrap();
        assert_relative_eq!(frame.angle, std::f64::consts::FRAC_PI_2, epsilon = 1e-12);
        assert_eq!(frame.len_prev, 10.0);
        assert_eq!(frame.len_next, 4.0);
        assert!(!frame.is_degenerate());
    }

    #[test]
    fn test_frame_straight_and_folded_are_degenerate() {
        let straight = CornerFrame::new(
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(20.0, 0.0),
        )
        .unwrap();
        assert!(straight.is_degenerate());

        let folded = CornerFrame::new(
            Point2::new(0.0_f64, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(3.0, 0.0),
        )
        .unwrap();
        assert!(folded.is_degenerate());
    }

    #[test]
    fn test_frame_coincident_points() {
        let result = CornerFrame::new(
            Point2::new(5.0_f64, 5.0),
            Point2::new(5.0, 5.0),
            Point2::new(20.0, 0.0),
        );
        assert_eq!(result.unwrap_err(), GeomError::DegenerateVector);
    }

    #[test]
    fn test_round_corner_clamps_before_solving() {
        let corner = round_corner(
            Point2::new(0.0_f64, 1.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            5.0,
        )
        .unwrap();
        assert_relative_eq!(corner.fillet.radius, 1.0, epsilon = 1e-12);
        assert_relative_eq!(corner.fillet.tangent1.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(corner.fillet.tangent2.x, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_round_corner_propagates_degenerate_vector() {
        let result = round_corner(
            Point2::new(0.0_f64, 0.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            1.0,
        );
        assert_eq!(result.unwrap_err(), GeomError::DegenerateVector);
    }
}
