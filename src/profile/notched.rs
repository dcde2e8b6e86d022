//! Flap with a curved notch cut into its top edge.

use super::{check_angle, check_positive, Outline, PointLog, Shape, ShapeProfile};
use crate::error::GeomError;
use crate::io::PathBuilder;
use crate::primitives::Point2;
use serde::{Deserialize, Serialize};

/// How the notch meets the top edge.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Bevel {
    /// The notch sides start straight above their curves.
    #[default]
    Square,
    /// The notch sides are pulled outward by bevel angles in degrees.
    Angled { alpha1: f64, alpha2: f64 },
}

/// Notched flap.
///
/// With `P = width`, `Q = height / 2`, `S = height / 4`,
/// `M = P − 2Q·cot θ`, `F = (P − M) / 2` and `d = S / 10`, each bevel offset
/// is `z = S − d / tan α` (zero for [`Bevel::Square`]):
///
/// | Point | Formula                       |
/// |-------|-------------------------------|
/// | A     | (0, 0)                        |
/// | B     | (P/2 − M/2 − z1 + F, 0)       |
/// | C     | (P/2 − M/2 + F, 4S/5), curved |
/// | D     | (P/2 − M/2 + F, S)            |
/// | E     | (P/2 + M/2 − F, S)            |
/// | F     | (P/2 + M/2 − F, 4S/5)         |
/// | G     | (P/2 + M/2 − F + z2, 0), curved |
/// | H     | (P, 0)                        |
/// | I     | (P, S + Q)                    |
/// | J     | (0, S + Q)                    |
///
/// The curves into C and G use the chord midpoint raised by `S/6` as their
/// control point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NotchedParameters {
    pub width: f64,
    pub height: f64,
    /// Notch side angle, in degrees.
    pub theta: f64,
    #[serde(default)]
    pub bevel: Bevel,
}

impl NotchedParameters {
    fn bevel_offsets(&self, s: f64) -> (f64, f64) {
        let d = s / 10.0;
        match self.bevel {
            Bevel::Square => (0.0, 0.0),
            Bevel::Angled { alpha1, alpha2 } => (
                s - d / alpha1.to_radians().tan(),
                s - d / alpha2.to_radians().tan(),
            ),
        }
    }
}

/// Control point for the outward notch curves.
fn raised_midpoint(from: Point2<f64>, to: Point2<f64>, rise: f64) -> Point2<f64> {
    let mid = from.midpoint(to);
    Point2::new(mid.x, mid.y - rise)
}

impl ShapeProfile for NotchedParameters {
    const ID: &'static str = "notched";

    fn validate(&self) -> Result<(), GeomError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_angle("theta", self.theta)?;
        if let Bevel::Angled { alpha1, alpha2 } = self.bevel {
            check_angle("alpha1", alpha1)?;
            check_angle("alpha2", alpha2)?;
        }
        Ok(())
    }

    fn build(&self) -> Result<Shape, GeomError> {
        let p = self.width;
        let q = self.height / 2.0;
        let s = self.height / 4.0;
        let m = p - 2.0 * q / self.theta.to_radians().tan();
        let f = (p - m) / 2.0;
        let (z1, z2) = self.bevel_offsets(s);

        let left = p / 2.0 - m / 2.0 + f;
        let right = p / 2.0 + m / 2.0 - f;

        let b = Point2::new(left - z1, 0.0);
        let c = Point2::new(left, 4.0 * s / 5.0);
        let f_pt = Point2::new(right, 4.0 * s / 5.0);
        let g = Point2::new(right + z2, 0.0);

        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .vertex("B", b)
            .curve_to("C", raised_midpoint(b, c, s / 6.0), c)
            .vertex("D", Point2::new(left, s))
            .vertex("E", Point2::new(right, s))
            .vertex("F", f_pt)
            .curve_to("G", raised_midpoint(f_pt, g, s / 6.0), g)
            .vertex("H", Point2::new(p, 0.0))
            .vertex("I", Point2::new(p, s + q))
            .vertex("J", Point2::new(0.0, s + q));

        let mut log = PointLog::default();
        let path = outline.draw(PathBuilder::new(), &mut log)?.build();
        Ok(Shape {
            path,
            points: log.into_points(),
        })
    }
}
