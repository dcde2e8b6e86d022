//! SVG arc flags for drawing a fillet.

use super::{constant, FilletResult};
use crate::primitives::Point2;
use num_traits::Float;
use serde::Serialize;

/// The two boolean flags of an SVG elliptical-arc command.
///
/// Together with the end point they select one of the four arcs of a given
/// radius that join the current point to the end point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct ArcFlags {
    /// Take the arc spanning more than 180 degrees.
    pub large_arc: bool,
    /// Travel in the positive-angle direction (clockwise on screen).
    pub sweep: bool,
}

impl ArcFlags {
    /// Creates a new flag pair.
    #[inline]
    pub const fn new(large_arc: bool, sweep: bool) -> Self {
        Self { large_arc, sweep }
    }

    /// Flags for the same arc after mirroring the geometry.
    ///
    /// Reflection reverses traversal orientation, so `sweep` flips while
    /// `large_arc` is unchanged.
    #[inline]
    pub const fn mirrored(self) -> Self {
        Self {
            large_arc: self.large_arc,
            sweep: !self.sweep,
        }
    }
}

/// A fillet together with the arc flags that draw it from `tangent1` to
/// `tangent2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedCorner<F> {
    pub fillet: FilletResult<F>,
    pub flags: ArcFlags,
}

/// Derives the arc flags for travelling from `tangent1` to `tangent2`
/// around `center`.
///
/// Coordinates are screen space (Y increases downward). The angular span
/// from `tangent1` to `tangent2` is normalized into `[0, 2π)`; `large_arc` is
/// set when it exceeds π. `sweep` is false when the cross product of the two
/// radius vectors is negative and true otherwise.
///
/// # Example
///
/// ```
/// use flapcut::fillet::derive_flags;
/// use flapcut::Point2;
///
/// let flags = derive_flags(
///     Point2::new(0.0, 3.0),
///     Point2::new(3.0, 0.0),
///     Point2::new(3.0, 3.0),
/// );
/// assert!(!flags.large_arc);
/// assert!(flags.sweep);
/// ```
pub fn derive_flags<F: Float>(
    tangent1: Point2<F>,
    tangent2: Point2<F>,
    center: Point2<F>,
) -> ArcFlags {
    let r1 = tangent1 - center;
    let r2 = tangent2 - center;

    let pi = constant::<F>(std::f64::consts::PI);
    let tau = pi + pi;

    let start = r1.y.atan2(r1.x);
    let end = r2.y.atan2(r2.x);
    let mut span = (end - start) % tau;
    if span < F::zero() {
        span = span + tau;
    }

    ArcFlags {
        large_arc: span > pi,
        sweep: r1.cross(r2) >= F::zero(),
    }
}
