//! Flap mirrored across its slanted edge, with a glue strip below.

use super::{check_finite, check_positive, Outline, PointLog, Shape, ShapeProfile};
use crate::error::GeomError;
use crate::io::PathBuilder;
use crate::primitives::{Line2, Point2, Vec2};
use crate::transform::Mirror;
use serde::{Deserialize, Serialize};

const MIN_ANGLE: f64 = 60.0;
const MAX_ANGLE: f64 = 150.0;
const MIN_STRIP: f64 = 10.0;

fn default_theta1() -> f64 {
    90.0
}

fn default_theta2() -> f64 {
    120.0
}

/// Mirrored flap.
///
/// Both angles are clamped to [60°, 150°]. With `P = width`, `Q = P / 2`,
/// fillet radius `R = Q / 10` and strip height `G = max(Q / 10, 10)`:
///
/// | Point | Formula                                |
/// |-------|----------------------------------------|
/// | A     | (0, 0)                                 |
/// | B     | (P, 0)                                 |
/// | C     | (P − Q / tan θ2, Q), rounded           |
/// | D     | (Q / sin θ1)·(cos θ1, sin θ1), rounded |
///
/// The upper flap A B C D is reflected across line CD into a lower flap,
/// and a `G` high strip hangs below the reflected A′B′ edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MirroredParameters {
    pub width: f64,
    #[serde(default = "default_theta1")]
    pub theta1: f64,
    #[serde(default = "default_theta2")]
    pub theta2: f64,
}

impl MirroredParameters {
    /// Parameters with the default angles.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            theta1: default_theta1(),
            theta2: default_theta2(),
        }
    }
}

impl ShapeProfile for MirroredParameters {
    const ID: &'static str = "mirrored";

    fn validate(&self) -> Result<(), GeomError> {
        check_positive("width", self.width)?;
        check_finite("theta1", self.theta1)?;
        check_finite("theta2", self.theta2)
    }

    fn build(&self) -> Result<Shape, GeomError> {
        let p = self.width;
        let q = p / 2.0;
        let radius = q / 10.0;
        let strip = (q / 10.0).max(MIN_STRIP);
        let t1 = self.theta1.clamp(MIN_ANGLE, MAX_ANGLE).to_radians();
        let t2 = self.theta2.clamp(MIN_ANGLE, MAX_ANGLE).to_radians();

        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(p, 0.0);
        let c = Point2::new(p - q / t2.tan(), q);
        let ad = q / t1.sin();
        let d = a + Vec2::new(t1.cos(), t1.sin()) * ad;

        let upper = Outline::new()
            .vertex("A", a)
            .vertex("B", b)
            .vertex("C", c)
            .fillet(radius)
            .vertex("D", d)
            .fillet(radius);

        let mut log = PointLog::default();
        let mut path = upper.draw(PathBuilder::new(), &mut log)?.build();

        let axis = Line2::through(c, d)?;
        let lower = path.mirrored(&axis);
        let reflected: Vec<_> = log
            .points()
            .iter()
            .map(|lp| (format!("{}'", lp.label), lp.point.mirrored(&axis)))
            .collect();
        for (label, point) in reflected {
            log.push(label, point);
        }

        let a_m = a.mirrored(&axis);
        let b_m = b.mirrored(&axis);
        let drop = Vec2::new(0.0, strip);
        let strip_outline = Outline::new()
            .vertex("A'", a_m)
            .vertex("B'", b_m)
            .vertex("B''", b_m + drop)
            .vertex("A''", a_m + drop);
        let strip_path = strip_outline.draw(PathBuilder::new(), &mut log)?.build();

        path.append(lower);
        path.append(strip_path);

        Ok(Shape {
            path,
            points: log.into_points(),
        })
    }
}
