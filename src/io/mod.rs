//! Reading and writing outlines as SVG path data.

mod svg;

pub use svg::{
    format_number, parse_path, Path, PathBuilder, PathParseError, PathSegment, DEFAULT_PRECISION,
};
