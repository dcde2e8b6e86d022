//! Tuck flap with two rounded corners sharing the top edge.

use super::{check_angle, check_finite, check_positive, Outline, PointLog, Shape, ShapeProfile};
use crate::error::GeomError;
use crate::io::PathBuilder;
use crate::primitives::Point2;
use serde::{Deserialize, Serialize};

/// Angle of the fixed slant on the left side, in degrees.
const LEFT_SLANT_DEGREES: f64 = 60.0;

/// Double tuck flap.
///
/// With `P = width`, `Q = height / 2` and `S = height / 4`:
///
/// | Point | Formula                  |
/// |-------|--------------------------|
/// | A     | (0, 0)                   |
/// | B     | (P, 0)                   |
/// | C     | (P − Q / tan θ1, Q)      |
/// | D     | (P, Q + S), rounded      |
/// | E     | (0, Q + S), rounded      |
/// | F     | (Q / tan 60°, Q)         |
///
/// D is rounded first; E's clamp starts from D's outgoing tangent point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoubleTuckParameters {
    pub width: f64,
    pub height: f64,
    /// Angle of the right slanted side, in degrees.
    pub theta1: f64,
    /// Requested radius of both fillets.
    pub radius: f64,
}

impl ShapeProfile for DoubleTuckParameters {
    const ID: &'static str = "double-tuck";

    fn validate(&self) -> Result<(), GeomError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_angle("theta1", self.theta1)?;
        check_finite("radius", self.radius)
    }

    fn build(&self) -> Result<Shape, GeomError> {
        let p = self.width;
        let q = self.height / 2.0;
        let s = self.height / 4.0;
        let t1 = self.theta1.to_radians();

        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .vertex("B", Point2::new(p, 0.0))
            .vertex("C", Point2::new(p - q / t1.tan(), q))
            .vertex("D", Point2::new(p, q + s))
            .fillet(self.radius)
            .vertex("E", Point2::new(0.0, q + s))
            .fillet(self.radius)
            .vertex("F", Point2::new(q / LEFT_SLANT_DEGREES.to_radians().tan(), q));

        let mut log = PointLog::default();
        let path = outline.draw(PathBuilder::new(), &mut log)?.build();
        Ok(Shape {
            path,
            points: log.into_points(),
        })
    }
}
