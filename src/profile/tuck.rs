//! Tuck flap with a slanted side and one rounded corner.

use super::{check_angle, check_finite, check_positive, Outline, PointLog, Shape, ShapeProfile};
use crate::error::GeomError;
use crate::io::PathBuilder;
use crate::primitives::Point2;
use serde::{Deserialize, Serialize};

/// Fraction of the flap depth taken by the slanted side.
const SLANT_FRACTION: f64 = 0.66667;

/// Tuck flap.
///
/// With `P = width`, `Q = height / 3` and `S = 0.66667·Q`:
///
/// | Point | Formula              |
/// |-------|----------------------|
/// | A     | (0, 0)               |
/// | B     | (P, 0)               |
/// | C     | (P − S / tan θ1, S)  |
/// | D     | (P, Q), rounded      |
/// | E     | (0, Q)               |
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuckParameters {
    /// Panel height; the flap is a third of it deep.
    pub height: f64,
    pub width: f64,
    /// Angle of the slanted side, in degrees.
    pub theta1: f64,
    /// Requested fillet radius at D.
    pub radius: f64,
}

impl ShapeProfile for TuckParameters {
    const ID: &'static str = "tuck";

    fn validate(&self) -> Result<(), GeomError> {
        check_positive("height", self.height)?;
        check_positive("width", self.width)?;
        check_angle("theta1", self.theta1)?;
        check_finite("radius", self.radius)
    }

    fn build(&self) -> Result<Shape, GeomError> {
        let p = self.width;
        let q = self.height / 3.0;
        let s = SLANT_FRACTION * q;
        let t1 = self.theta1.to_radians();

        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .vertex("B", Point2::new(p, 0.0))
            .vertex("C", Point2::new(p - s / t1.tan(), s))
            .vertex("D", Point2::new(p, q))
            .fillet(self.radius)
            .vertex("E", Point2::new(0.0, q));

        let mut log = PointLog::default();
        let path = outline.draw(PathBuilder::new(), &mut log)?.build();
        Ok(Shape {
            path,
            points: log.into_points(),
        })
    }
}
