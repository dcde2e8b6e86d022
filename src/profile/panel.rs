//! Plain rectangular panel.

use super::{check_positive, Outline, PointLog, Shape, ShapeProfile};
use crate::error::GeomError;
use crate::io::PathBuilder;
use crate::primitives::Point2;
use serde::{Deserialize, Serialize};

/// A `width` × `height` rectangle with its top-left corner at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelParameters {
    pub width: f64,
    pub height: f64,
}

impl ShapeProfile for PanelParameters {
    const ID: &'static str = "panel";

    fn validate(&self) -> Result<(), GeomError> {
        check_positive("width", self.width)?;
        check_positive("height", self.height)
    }

    fn build(&self) -> Result<Shape, GeomError> {
        let outline = Outline::new()
            .vertex("A", Point2::new(0.0, 0.0))
            .vertex("B", Point2::new(self.width, 0.0))
            .vertex("C", Point2::new(self.width, self.height))
            .vertex("D", Point2::new(0.0, self.height));

        let mut log = PointLog::default();
        let path = outline.draw(PathBuilder::new(), &mut log)?.build();
        Ok(Shape {
            path,
            points: log.into_points(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel() {
        let shape = PanelParameters {
            width: 100.0,
            height: 60.0,
        }
        .build()
        .unwrap();

        assert_eq!(
            shape.open_path(),
            "M 0.0000 0.0000 L 100.0000 0.0000 L 100.0000 60.0000 L 0.0000 60.0000"
        );
        assert_eq!(shape.point("C"), Some(Point2::new(100.0, 60.0)));
    }

    #[test]
    fn test_panel_rejects_negative_height() {
        let params = PanelParameters {
            width: 10.0,
            height: -1.0,
        };
        assert_eq!(
            params.validate(),
            Err(GeomError::InvalidParameter {
                name: "height",
                value: -1.0
            })
        );
    }
}
