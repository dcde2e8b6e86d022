//! flapcut - Parametric die-cut flap outlines
//!
//! Computes packaging flap outlines from a few scalar dimensions and angles:
//! corner points are laid out by a shape profile, selected corners are
//! rounded with circular fillets, and the result is written as SVG path data
//! restricted to `M`, `L`, `Q`, `A` and `Z` commands.
//!
//! The geometry core ([`fillet`], [`transform`], [`primitives`]) is generic
//! over `f32` and `f64`; the shape [`profile`]s work in `f64`.
//!
//! # Example
//!
//! ```
//! use flapcut::profile::{build_shape, ShapeParameters, TuckParameters};
//!
//! let params = ShapeParameters::Tuck(TuckParameters {
//!     height: 150.0,
//!     width: 200.0,
//!     theta1: 60.0,
//!     radius: 5.0,
//! });
//! let shape = build_shape(&params).unwrap();
//!
//! assert!(shape.closed_path().ends_with(" Z"));
//! assert_eq!(format!("{} Z", shape.open_path()), shape.closed_path());
//! ```

pub mod error;
pub mod fillet;
pub mod io;
pub mod primitives;
pub mod profile;
pub mod transform;

pub use error::GeomError;
pub use primitives::{Line2, Point2, Vec2};
pub use profile::{build_shape, Shape, ShapeParameters};
