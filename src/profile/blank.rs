//! Box blank: a body panel with flaps on every side and a centre hole.

use super::{check_finite, check_positive, Outline, PointLog, Shape, ShapeProfile};
use crate::error::GeomError;
use crate::fillet::ArcFlags;
use crate::io::PathBuilder;
use crate::primitives::{Point2, Vec2};
use serde::{Deserialize, Serialize};

const MIN_ANGLE: f64 = 40.0;
const MAX_ANGLE: f64 = 140.0;

/// Box blank.
///
/// The body is the `width` × `height` rectangle A B C D. With
/// `t1 = clamp(θ1, 40°, 140°)`, `t2 = clamp(180° − θ2, 40°, 140°)` and
/// `W = flap_depth`:
///
/// | Point | Formula                   | Contour         |
/// |-------|---------------------------|-----------------|
/// | U1    | A + W·(cos t1, −sin t1)   | top, rounded    |
/// | U2    | B + W·(cos t2, −sin t2)   | top, rounded    |
/// | L1    | A + W·(−sin t1, cos t1)   | left, rounded   |
/// | L2    | D + W·(−sin t2, cos t2)   | left, rounded   |
/// | R1    | B + W·(sin t1, cos t1)    | right, rounded  |
/// | R2    | C + W·(sin t2, cos t2)    | right, rounded  |
/// | B1    | D + (0, W)                | bottom          |
/// | B2    | C + (0, W)                | bottom          |
///
/// A circle of `circle_radius` centred on the body is drawn as two half
/// arcs; it is left out when the radius is not positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxBlankParameters {
    pub width: f64,
    pub height: f64,
    pub theta1: f64,
    pub theta2: f64,
    pub flap_depth: f64,
    /// Requested radius of every flap fillet.
    pub radius: f64,
    pub circle_radius: f64,
}

impl ShapeProfile for BoxBlankParameters {
    const ID: &'static str = "box-blank";

    fn validate(&self) -> Result<(), GeomError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)?;
        check_finite("theta1", self.theta1)?;
        check_finite("theta2", self.theta2)?;
        check_positive("flap_depth", self.flap_depth)?;
        check_finite("radius", self.radius)?;
        check_finite("circle_radius", self.circle_radius)
    }

    fn build(&self) -> Result<Shape, GeomError> {
        let (p, q, w, r) = (self.width, self.height, self.flap_depth, self.radius);
        let t1 = self.theta1.clamp(MIN_ANGLE, MAX_ANGLE).to_radians();
        let t2 = (180.0 - self.theta2).clamp(MIN_ANGLE, MAX_ANGLE).to_radians();

        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(p, 0.0);
        let c = Point2::new(p, q);
        let d = Point2::new(0.0, q);
        let offset = |x: f64, y: f64| Vec2::new(x, y) * w;

        let body = Outline::new()
            .vertex("A", a)
            .vertex("B", b)
            .vertex("C", c)
            .vertex("D", d);

        let top = Outline::new()
            .vertex("A", a)
            .vertex("U1", a + offset(t1.cos(), -t1.sin()))
            .fillet(r)
            .vertex("U2", b + offset(t2.cos(), -t2.sin()))
            .fillet(r)
            .vertex("B", b);

        let left = Outline::new()
            .vertex("D", d)
            .vertex("L2", d + offset(-t2.sin(), t2.cos()))
            .fillet(r)
            .vertex("L1", a + offset(-t1.sin(), t1.cos()))
            .fillet(r)
            .vertex("A", a);

        let right = Outline::new()
            .vertex("B", b)
            .vertex("R1", b + offset(t1.sin(), t1.cos()))
            .fillet(r)
            .vertex("R2", c + offset(t2.sin(), t2.cos()))
            .fillet(r)
            .vertex("C", c);

        let bottom = Outline::new()
            .vertex("D", d)
            .vertex("C", c)
            .vertex("B2", c + offset(0.0, 1.0))
            .vertex("B1", d + offset(0.0, 1.0));

        let mut log = PointLog::default();
        let mut builder = PathBuilder::new();
        for contour in [&body, &top, &left, &right, &bottom] {
            builder = contour.draw(builder, &mut log)?;
        }

        let center = Point2::new(p / 2.0, q / 2.0);
        log.push("Center", center);
        let rc = self.circle_radius;
        if rc > 0.0 {
            let flags = ArcFlags::new(true, false);
            let east = Point2::new(center.x + rc, center.y);
            let west = Point2::new(center.x - rc, center.y);
            builder = builder
                .move_to(east)
                .arc_to(rc, flags, west)
                .arc_to(rc, flags, east)
                .close();
        }

        Ok(Shape {
            path: builder.build(),
            points: log.into_points(),
        })
    }
}
