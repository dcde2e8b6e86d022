//! 2D infinite line type, used as a mirror axis.

use super::{Point2, Vec2};
use crate::error::GeomError;
use num_traits::Float;

/// A 2D infinite line defined by a point and a non-zero direction.
///
/// # Example
///
/// ```
/// use flapcut::primitives::{Line2, Point2};
///
/// // Horizontal line through y=1
/// let line: Line2<f64> = Line2::through(Point2::new(0.0, 1.0), Point2::new(5.0, 1.0)).unwrap();
/// let mirrored = line.reflect_point(Point2::new(2.0, 3.0));
/// assert_eq!(mirrored, Point2::new(2.0, -1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line2<F> {
    /// A point on the line
    pub origin: Point2<F>,
    /// Direction vector of the line (not necessarily normalized, never zero)
    pub direction: Vec2<F>,
}

impl<F: Float> Line2<F> {
    /// Creates a line passing through two points.
    ///
    /// # Errors
    ///
    /// [`GeomError::DegenerateVector`] if the points coincide, since they do
    /// not define a direction.
    pub fn through(a: Point2<F>, b: Point2<F>) -> Result<Self, GeomError> {
        let direction = b - a;
        if direction.magnitude_squared() <= F::epsilon() * F::epsilon() {
            return Err(GeomError::DegenerateVector);
        }
        Ok(Self {
            origin: a,
            direction,
        })
    }

    /// Returns the normal vector (perpendicular to direction).
    #[inline]
    pub fn normal(&self) -> Vec2<F> {
        self.direction.perpendicular()
    }

    /// Returns the point on the line at parameter t.
    #[inline]
    pub fn point_at(&self, t: F) -> Point2<F> {
        self.origin + self.direction * t
    }

    /// Projects a point onto the line and returns the closest point.
    pub fn closest_point(&self, point: Point2<F>) -> Point2<F> {
        let t = (point - self.origin).dot(self.direction) / self.direction.magnitude_squared();
        self.point_at(t)
    }

    /// Mirrors a point across the line.
    ///
    /// The offset from the line origin is projected onto the line normal and
    /// twice that projection is subtracted. Reflecting twice returns the
    /// original point.
    pub fn reflect_point(&self, point: Point2<F>) -> Point2<F> {
        let n = self.normal();
        let offset = point - self.origin;
        let two = F::one() + F::one();
        let scale = two * offset.dot(n) / n.magnitude_squared();
        point - n * scale
    }
}
