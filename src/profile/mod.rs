//! Parametric flap outlines.
//!
//! Every profile maps a handful of scalars (lengths, angles in degrees, a
//! fillet radius) to an ordered list of corner points plus a plan of which
//! corners get rounded. The shared [`Outline`] pipeline then clamps, solves
//! and flags each planned fillet in order and traces the result into a
//! [`Path`].
//!
//! # Example
//!
//! ```
//! use flapcut::profile::{build_shape, PanelParameters, ShapeParameters};
//!
//! let params = ShapeParameters::Panel(PanelParameters { width: 100.0, height: 60.0 });
//! let shape = build_shape(&params).unwrap();
//!
//! assert_eq!(
//!     shape.closed_path(),
//!     "M 0.0000 0.0000 L 100.0000 0.0000 L 100.0000 60.0000 L 0.0000 60.0000 Z"
//! );
//! assert_eq!(shape.points.len(), 4);
//! ```

mod blank;
mod double_tuck;
mod mirrored;
mod notched;
mod panel;
mod tuck;

pub use blank::BoxBlankParameters;
pub use double_tuck::DoubleTuckParameters;
pub use mirrored::MirroredParameters;
pub use notched::{Bevel, NotchedParameters};
pub use panel::PanelParameters;
pub use tuck::TuckParameters;

use crate::error::GeomError;
use crate::fillet::{clamp_radius, compute_fillet, derive_flags, max_feasible_radius};
use crate::fillet::{FilletResult, RoundedCorner};
use crate::io::{Path, PathBuilder};
use crate::primitives::Point2;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Distance below which a chained tangent point counts as having consumed
/// the whole shared edge.
const CHAIN_EPSILON: f64 = 1e-9;

/// A profile that turns its parameters into a shape.
pub trait ShapeProfile {
    /// Identifier used in parameter files.
    const ID: &'static str;

    /// Checks that every scalar is usable.
    ///
    /// # Errors
    ///
    /// [`GeomError::InvalidParameter`] naming the first offending field.
    fn validate(&self) -> Result<(), GeomError>;

    /// Computes the outline and its diagnostic points.
    ///
    /// Assumes [`ShapeProfile::validate`] passed.
    fn build(&self) -> Result<Shape, GeomError>;
}

/// Parameters of one shape, tagged with the profile that reads them.
///
/// In YAML or JSON the profile is chosen by the `profile` key:
///
/// ```yaml
/// profile: tuck
/// height: 150
/// width: 200
/// theta1: 60
/// radius: 10
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "kebab-case")]
pub enum ShapeParameters {
    Panel(PanelParameters),
    Tuck(TuckParameters),
    DoubleTuck(DoubleTuckParameters),
    Notched(NotchedParameters),
    Mirrored(MirroredParameters),
    BoxBlank(BoxBlankParameters),
}

impl ShapeParameters {
    /// The profile identifier.
    pub fn id(&self) -> &'static str {
        match self {
            ShapeParameters::Panel(_) => PanelParameters::ID,
            ShapeParameters::Tuck(_) => TuckParameters::ID,
            ShapeParameters::DoubleTuck(_) => DoubleTuckParameters::ID,
            ShapeParameters::Notched(_) => NotchedParameters::ID,
            ShapeParameters::Mirrored(_) => MirroredParameters::ID,
            ShapeParameters::BoxBlank(_) => BoxBlankParameters::ID,
        }
    }

    fn validate(&self) -> Result<(), GeomError> {
        match self {
            ShapeParameters::Panel(p) => p.validate(),
            ShapeParameters::Tuck(p) => p.validate(),
            ShapeParameters::DoubleTuck(p) => p.validate(),
            ShapeParameters::Notched(p) => p.validate(),
            ShapeParameters::Mirrored(p) => p.validate(),
            ShapeParameters::BoxBlank(p) => p.validate(),
        }
    }

    fn build(&self) -> Result<Shape, GeomError> {
        match self {
            ShapeParameters::Panel(p) => p.build(),
            ShapeParameters::Tuck(p) => p.build(),
            ShapeParameters::DoubleTuck(p) => p.build(),
            ShapeParameters::Notched(p) => p.build(),
            ShapeParameters::Mirrored(p) => p.build(),
            ShapeParameters::BoxBlank(p) => p.build(),
        }
    }
}

/// Validates the parameters and builds the shape they describe.
///
/// # Errors
///
/// - [`GeomError::InvalidParameter`] for a non-finite scalar or a
///   non-positive length.
/// - [`GeomError::DegenerateVector`] if the parameters place a rounded
///   corner on top of one of its neighbours.
pub fn build_shape(params: &ShapeParameters) -> Result<Shape, GeomError> {
    params.validate()?;
    debug!(profile = params.id(), "building shape");

    let shape = params.build()?;
    trace!(
        profile = params.id(),
        segments = shape.path.len(),
        points = ?shape.points,
        "shape built"
    );
    Ok(shape)
}

/// Description of a profile for listings.
#[derive(Debug, Clone, Copy)]
pub struct ProfileInfo {
    pub id: &'static str,
    pub fields: &'static [&'static str],
    pub summary: &'static str,
}

/// Every available profile.
pub const PROFILES: &[ProfileInfo] = &[
    ProfileInfo {
        id: PanelParameters::ID,
        fields: &["width", "height"],
        summary: "plain rectangle",
    },
    ProfileInfo {
        id: TuckParameters::ID,
        fields: &["height", "width", "theta1", "radius"],
        summary: "tuck flap with one slanted edge and one rounded corner",
    },
    ProfileInfo {
        id: DoubleTuckParameters::ID,
        fields: &["width", "height", "theta1", "radius"],
        summary: "tuck flap with two chained rounded corners",
    },
    ProfileInfo {
        id: NotchedParameters::ID,
        fields: &["width", "height", "theta", "bevel"],
        summary: "flap with a curved notch, optionally bevelled",
    },
    ProfileInfo {
        id: MirroredParameters::ID,
        fields: &["width", "theta1", "theta2"],
        summary: "flap mirrored across its slanted edge above a glue strip",
    },
    ProfileInfo {
        id: BoxBlankParameters::ID,
        fields: &[
            "width",
            "height",
            "theta1",
            "theta2",
            "flap_depth",
            "radius",
            "circle_radius",
        ],
        summary: "box blank with three trapezium flaps, a bottom flap and a centre hole",
    },
];

/// A named point reported alongside the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPoint {
    pub label: String,
    #[serde(flatten)]
    pub point: Point2<f64>,
}

/// A computed outline with its diagnostic points.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    /// Compound path of every contour.
    pub path: Path<f64>,
    /// Corner points, then per fillet its tangent points (`T1_X`, `T2_X`)
    /// and center (`O_X`), in construction order.
    pub points: Vec<LabeledPoint>,
}

impl Shape {
    /// Path data with a trailing close command.
    pub fn closed_path(&self) -> String {
        self.path.to_closed_svg()
    }

    /// Path data without the trailing close command.
    pub fn open_path(&self) -> String {
        self.path.to_open_svg()
    }

    /// Path data with `precision` decimals per number.
    pub fn to_svg(&self, precision: usize, closed: bool) -> String {
        self.path.to_svg(precision, closed)
    }

    /// Looks up a diagnostic point by label.
    pub fn point(&self, label: &str) -> Option<Point2<f64>> {
        self.points
            .iter()
            .find(|p| p.label == label)
            .map(|p| p.point)
    }
}

/// Ordered diagnostic points; a label is only recorded once.
#[derive(Debug, Clone, Default)]
pub(crate) struct PointLog {
    points: Vec<LabeledPoint>,
}

impl PointLog {
    pub(crate) fn push(&mut self, label: impl Into<String>, point: Point2<f64>) {
        let label = label.into();
        if !self.points.iter().any(|p| p.label == label) {
            self.points.push(LabeledPoint { label, point });
        }
    }

    pub(crate) fn points(&self) -> &[LabeledPoint] {
        &self.points
    }

    pub(crate) fn into_points(self) -> Vec<LabeledPoint> {
        self.points
    }
}

/// How the path arrives at a vertex from the previous one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Approach {
    Line,
    Quadratic(Point2<f64>),
}

#[derive(Debug, Clone)]
pub(crate) struct Vertex {
    label: &'static str,
    point: Point2<f64>,
    approach: Approach,
}

/// One closed contour: labelled corners in drawing order and the corners
/// to round, in the order they are processed.
#[derive(Debug, Clone, Default)]
pub(crate) struct Outline {
    vertices: Vec<Vertex>,
    fillets: Vec<(usize, f64)>,
}

impl Outline {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn vertex(mut self, label: &'static str, point: Point2<f64>) -> Self {
        self.vertices.push(Vertex {
            label,
            point,
            approach: Approach::Line,
        });
        self
    }

    /// Adds a vertex reached by a quadratic curve through `control`.
    pub(crate) fn curve_to(
        mut self,
        label: &'static str,
        control: Point2<f64>,
        point: Point2<f64>,
    ) -> Self {
        self.vertices.push(Vertex {
            label,
            point,
            approach: Approach::Quadratic(control),
        });
        self
    }

    /// Plans a fillet of `radius` at the most recently added vertex.
    pub(crate) fn fillet(mut self, radius: f64) -> Self {
        if let Some(index) = self.vertices.len().checked_sub(1) {
            self.fillets.push((index, radius));
        }
        self
    }

    /// Rounds every planned corner.
    ///
    /// When the incoming neighbour was rounded earlier, its outgoing tangent
    /// point stands in for the neighbour, so the clamp only sees what is
    /// left of the shared edge.
    pub(crate) fn round(&self) -> Result<Vec<Option<RoundedCorner<f64>>>, GeomError> {
        let n = self.vertices.len();
        let mut rounded: Vec<Option<RoundedCorner<f64>>> = vec![None; n];

        for &(index, requested) in &self.fillets {
            let vertex = &self.vertices[index];
            let corner = vertex.point;
            let prev_index = (index + n - 1) % n;
            let next = self.vertices[(index + 1) % n].point;

            let prev = match rounded[prev_index] {
                Some(chained) => chained.fillet.tangent2,
                None => self.vertices[prev_index].point,
            };

            if prev.distance(corner) <= CHAIN_EPSILON {
                debug!(
                    corner = vertex.label,
                    requested, "incoming edge used up by previous fillet"
                );
                let fillet = FilletResult::collapsed(corner);
                let flags = derive_flags(fillet.tangent1, fillet.tangent2, fillet.center);
                rounded[index] = Some(RoundedCorner { fillet, flags });
                continue;
            }

            let max = max_feasible_radius(prev, corner, next)?;
            let radius = clamp_radius(requested, max);
            let fillet = compute_fillet(prev, corner, next, radius)?;
            let flags = derive_flags(fillet.tangent1, fillet.tangent2, fillet.center);

            debug!(
                corner = vertex.label,
                requested,
                max,
                radius = fillet.radius,
                large_arc = flags.large_arc,
                sweep = flags.sweep,
                "fillet"
            );
            rounded[index] = Some(RoundedCorner { fillet, flags });
        }

        Ok(rounded)
    }

    /// Rounds the planned corners, appends the contour to `builder` and
    /// records its points in `log`.
    pub(crate) fn draw(
        &self,
        builder: PathBuilder<f64>,
        log: &mut PointLog,
    ) -> Result<PathBuilder<f64>, GeomError> {
        let rounded = self.round()?;

        for vertex in &self.vertices {
            log.push(vertex.label, vertex.point);
        }
        for &(index, _) in &self.fillets {
            if let Some(rc) = &rounded[index] {
                let label = self.vertices[index].label;
                log.push(format!("T1_{}", label), rc.fillet.tangent1);
                log.push(format!("T2_{}", label), rc.fillet.tangent2);
                log.push(format!("O_{}", label), rc.fillet.center);
            }
        }

        Ok(self.trace(builder, &rounded))
    }

    fn trace(
        &self,
        builder: PathBuilder<f64>,
        rounded: &[Option<RoundedCorner<f64>>],
    ) -> PathBuilder<f64> {
        let Some(first) = self.vertices.first() else {
            return builder;
        };
        let first_rounded = rounded.first().copied().flatten();

        let start = match first_rounded {
            Some(rc) => rc.fillet.tangent2,
            None => first.point,
        };

        let mut builder = builder.move_to(start);
        for (vertex, rc) in self.vertices.iter().zip(rounded).skip(1) {
            builder = match (rc, vertex.approach) {
                (Some(rc), _) => builder.rounded_corner(rc),
                (None, Approach::Line) => builder.line_to(vertex.point),
                (None, Approach::Quadratic(control)) => builder.quad_to(control, vertex.point),
            };
        }

        match first_rounded {
            Some(rc) => builder.rounded_corner(&rc).close(),
            None => builder.close(),
        }
    }
}

pub(crate) fn check_finite(name: &'static str, value: f64) -> Result<(), GeomError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(GeomError::InvalidParameter { name, value })
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), GeomError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GeomError::InvalidParameter { name, value })
    }
}

/// Angles in degrees strictly between 0 and 180.
pub(crate) fn check_angle(name: &'static str, value: f64) -> Result<(), GeomError> {
    if value.is_finite() && value > 0.0 && value < 180.0 {
        Ok(())
    } else {
        Err(GeomError::InvalidParameter { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::PathSegment;
    use approx::assert_relative_eq;

    #[test]
    fn test_outline_without_fillets() {
        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .vertex("B", Point2::new(4.0, 0.0))
            .curve_to("C", Point2::new(5.0, 1.0), Point2::new(4.0, 2.0));
        let mut log = PointLog::default();
        let path = outline.draw(PathBuilder::new(), &mut log).unwrap().build();

        assert_eq!(path.len(), 4);
        assert_eq!(
            path.segments()[2],
            PathSegment::QuadraticTo {
                control: Point2::new(5.0, 1.0),
                end: Point2::new(4.0, 2.0)
            }
        );
        assert_eq!(log.points().len(), 3);
    }

    #[test]
    fn test_chained_fillet_uses_previous_tangent() {
        // Short top edge shared by two right-angle corners
        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .vertex("B", Point2::new(0.0, 20.0))
            .fillet(3.0)
            .vertex("C", Point2::new(4.0, 20.0))
            .fillet(3.0)
            .vertex("D", Point2::new(4.0, 0.0));
        let rounded = outline.round().unwrap();

        let first = rounded[1].unwrap();
        let second = rounded[2].unwrap();
        assert_relative_eq!(first.fillet.radius, 3.0, epsilon = 1e-9);
        // Only 1 unit of the 4 unit edge is left after the first fillet
        assert_relative_eq!(second.fillet.radius, 1.0, epsilon = 1e-9);
        assert!(first.fillet.tangent2.x <= second.fillet.tangent1.x + 1e-9);
    }

    #[test]
    fn test_chained_fillet_on_used_up_edge_collapses() {
        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .vertex("B", Point2::new(0.0, 20.0))
            .fillet(50.0)
            .vertex("C", Point2::new(4.0, 20.0))
            .fillet(3.0)
            .vertex("D", Point2::new(4.0, 0.0));
        let rounded = outline.round().unwrap();

        let second = rounded[2].unwrap();
        assert!(second.fillet.is_collapsed());
        assert_eq!(second.fillet.center, Point2::new(4.0, 20.0));
    }

    #[test]
    fn test_first_vertex_fillet_wraps() {
        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .fillet(1.0)
            .vertex("B", Point2::new(10.0, 0.0))
            .vertex("C", Point2::new(10.0, 10.0))
            .vertex("D", Point2::new(0.0, 10.0));
        let mut log = PointLog::default();
        let path = outline.draw(PathBuilder::new(), &mut log).unwrap().build();
        let segments = path.segments();

        match segments[0] {
            PathSegment::MoveTo(p) => {
                assert_relative_eq!(p.x, 1.0, epsilon = 1e-9);
                assert_relative_eq!(p.y, 0.0, epsilon = 1e-9);
            }
            ref other => panic!("unexpected segment {:?}", other),
        }
        assert!(matches!(segments[segments.len() - 2], PathSegment::ArcTo { .. }));
        assert_eq!(segments[segments.len() - 1], PathSegment::Close);
    }

    #[test]
    fn test_point_log_keeps_first_label() {
        let mut log = PointLog::default();
        log.push("A", Point2::new(0.0, 0.0));
        log.push("A", Point2::new(1.0, 1.0));
        assert_eq!(log.points().len(), 1);
        assert_eq!(log.points()[0].point, Point2::new(0.0, 0.0));
    }

    #[test]
    fn test_validation_helpers() {
        assert!(check_positive("width", 1.0).is_ok());
        assert_eq!(
            check_positive("width", 0.0),
            Err(GeomError::InvalidParameter {
                name: "width",
                value: 0.0
            })
        );
        assert!(check_finite("radius", f64::NAN).is_err());
        assert!(check_angle("theta", 180.0).is_err());
        assert!(check_angle("theta", 90.0).is_ok());
    }

    #[test]
    fn test_parameters_from_yaml() {
        let params: ShapeParameters =
            serde_yaml::from_str("profile: double-tuck\nwidth: 200\nheight: 100\ntheta1: 60\nradius: 8\n")
                .unwrap();
        assert_eq!(params.id(), "double-tuck");
        assert!(matches!(params, ShapeParameters::DoubleTuck(_)));
    }

    #[test]
    fn test_parameters_from_json() {
        let params: ShapeParameters = serde_json::from_str(
            r#"{"profile":"notched","width":200,"height":100,"theta":60,
                "bevel":{"kind":"angled","alpha1":45,"alpha2":60}}"#,
        )
        .unwrap();
        match params {
            ShapeParameters::Notched(p) => {
                assert_eq!(
                    p.bevel,
                    Bevel::Angled {
                        alpha1: 45.0,
                        alpha2: 60.0
                    }
                );
            }
            other => panic!("unexpected parameters {:?}", other),
        }
    }

    #[test]
    fn test_unknown_profile_is_rejected() {
        let result: Result<ShapeParameters, _> =
            serde_json::from_str(r#"{"profile":"hexagon","width":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_shape_rejects_nan() {
        let params = ShapeParameters::Panel(PanelParameters {
            width: f64::NAN,
            height: 1.0,
        });
        assert!(matches!(
            build_shape(&params),
            Err(GeomError::InvalidParameter { name: "width", .. })
        ));
    }

    #[test]
    fn test_profiles_cover_every_variant() {
        let ids: Vec<_> = PROFILES.iter().map(|p| p.id).collect();
        assert_eq!(
            ids,
            ["panel", "tuck", "double-tuck", "notched", "mirrored", "box-blank"]
        );
    }

    #[test]
    fn test_labeled_point_json() {
        let p = LabeledPoint {
            label: "A".to_string(),
            point: Point2::new(1.5, -2.0),
        };
        assert_eq!(
            serde_json::to_string(&p).unwrap(),
            r#"{"label":"A","x":1.5,"y":-2.0}"#
        );
    }
}
